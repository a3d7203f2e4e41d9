use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A static catalog entry: an author-authored project idea the scorer
/// ranks against a user profile. Never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTemplate {
    pub title: String,
    pub description: String,
    /// Required skill tags, matched case-insensitively against the
    /// user's skill list.
    pub skills: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Tutorial,
    Documentation,
    Repository,
    Article,
}

/// A placeholder resource link attached to a suggestion at generation
/// time. Locally generated — no AI provider is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedResource {
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

/// Optional source-code metadata for a saved project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCodeMeta {
    pub repository_url: String,
    pub primary_language: String,
    pub stars: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReview {
    pub user_id: Uuid,
    pub display_name: String,
    /// 1–5, validated at the handler boundary.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A template instantiated for one recommendation request.
///
/// The id is a time-based batch token plus the item's index — unique
/// within a single generation batch only. Immutable once created,
/// except for reviews appended after the suggestion is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
    /// Rounded score. NOT clamped: the formula can exceed 100 when
    /// interest and goal keyword hits are both high, and callers must
    /// tolerate values outside [0, 100].
    pub skill_match_score: u32,
    pub matched_skills: Vec<String>,
    pub resources: Vec<GeneratedResource>,
    #[serde(default)]
    pub reviews: Vec<ProjectReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<SourceCodeMeta>,
}
