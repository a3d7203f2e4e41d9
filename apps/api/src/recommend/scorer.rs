//! Recommendation Scorer — ranks the static template catalog against a
//! user profile (skills, free-text interests and goals, experience level).
//!
//! Pure and deterministic given catalog + inputs; the only entry point
//! with side effects is the batch id token, which is time-based.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, so the backend can be
//! swapped without touching handlers.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::project::{Difficulty, ProjectSuggestion, ProjectTemplate};
use crate::recommend::resources::build_resources;

const MAX_SUGGESTIONS: usize = 5;

const SKILL_WEIGHT: f64 = 50.0;
const INTEREST_WEIGHT: f64 = 10.0;
const GOAL_WEIGHT: f64 = 15.0;

/// Free-text tokens this short carry no signal ("a", "the", "for").
const MIN_KEYWORD_LEN: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Request profile
// ────────────────────────────────────────────────────────────────────────────

/// The user profile a recommendation request is scored against.
/// Everything but `skills` defaults to empty and simply contributes
/// zero to the score.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub goals: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The recommender trait. Implement this to swap backends without
/// touching the endpoint or handler code.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, request: &RecommendRequest)
        -> Result<Vec<ProjectSuggestion>, AppError>;
}

/// Default recommender: deterministic scoring over the compiled-in
/// catalog. No AI provider is invoked.
pub struct CatalogRecommender {
    catalog: Vec<ProjectTemplate>,
}

impl CatalogRecommender {
    pub fn new(catalog: Vec<ProjectTemplate>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Recommender for CatalogRecommender {
    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<ProjectSuggestion>, AppError> {
        Ok(generate_recommendations(request, &self.catalog))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Produces at most [`MAX_SUGGESTIONS`] suggestions, highest score
/// first. An empty skill list yields an empty result, not an error.
pub fn generate_recommendations(
    request: &RecommendRequest,
    catalog: &[ProjectTemplate],
) -> Vec<ProjectSuggestion> {
    if request.skills.is_empty() {
        return Vec::new();
    }

    let tier = tier_for(&request.experience_level);

    let mut scored: Vec<(f64, &ProjectTemplate, Vec<String>)> = Vec::new();
    for template in catalog {
        if !tier_admits(tier, template.difficulty) {
            continue;
        }
        let matched = matching_skills(&request.skills, template);
        if matched.is_empty() {
            // Zero skill overlap excludes a template even when the
            // difficulty filter passes.
            continue;
        }

        let haystack = format!(
            "{} {} {}",
            template.title, template.description, template.category
        )
        .to_lowercase();

        let score = SKILL_WEIGHT * (matched.len() as f64 / template.skills.len() as f64)
            + INTEREST_WEIGHT * keyword_hits(&request.interests, &haystack) as f64
            + GOAL_WEIGHT * keyword_hits(&request.goals, &haystack) as f64;

        scored.push((score, template, matched));
    }

    // Stable sort: equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let batch_token = Utc::now().timestamp_millis();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .enumerate()
        .map(|(index, (score, template, matched))| ProjectSuggestion {
            // Unique within this batch only; no cross-session guarantee.
            id: format!("{batch_token}-{index}"),
            title: template.title.clone(),
            description: template.description.clone(),
            category: template.category.clone(),
            difficulty: template.difficulty,
            time_estimate: template.time_estimate.clone(),
            // Rounded but not clamped: can exceed 100 with high
            // interest and goal keyword overlap.
            skill_match_score: score.round() as u32,
            resources: build_resources(template, &matched),
            matched_skills: matched,
            reviews: Vec::new(),
            source_code: None,
        })
        .collect()
}

/// Maps the free-form experience level token to a difficulty tier.
/// Unknown tokens fall back to beginner.
fn tier_for(experience_level: &str) -> Difficulty {
    match experience_level.trim().to_lowercase().as_str() {
        "mid" | "intermediate" => Difficulty::Intermediate,
        "senior" | "advanced" => Difficulty::Advanced,
        _ => Difficulty::Beginner, // includes "student" and "beginner"
    }
}

/// Equal-tier match, with one relaxation: an advanced tier also admits
/// intermediate templates.
fn tier_admits(tier: Difficulty, difficulty: Difficulty) -> bool {
    difficulty == tier
        || (tier == Difficulty::Advanced && difficulty == Difficulty::Intermediate)
}

/// Case-insensitive exact intersection of the user's skills with a
/// template's skill tags. Returned in the template's casing.
fn matching_skills(user_skills: &[String], template: &ProjectTemplate) -> Vec<String> {
    template
        .skills
        .iter()
        .filter(|tag| {
            let tag_lower = tag.to_lowercase();
            user_skills.iter().any(|s| s.to_lowercase() == tag_lower)
        })
        .cloned()
        .collect()
}

/// Counts free-text tokens of length > 3 that occur as substrings of
/// the (already lowercased) haystack. Repeated tokens count each time.
fn keyword_hits(free_text: &str, haystack_lower: &str) -> usize {
    free_text
        .split_whitespace()
        .filter(|token| token.len() >= MIN_KEYWORD_LEN)
        .filter(|token| haystack_lower.contains(&token.to_lowercase()))
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::catalog::default_catalog;

    fn request(skills: &[&str], experience: &str) -> RecommendRequest {
        RecommendRequest {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: String::new(),
            experience_level: experience.to_string(),
            goals: String::new(),
        }
    }

    fn simple_template(title: &str, skills: &[&str], difficulty: Difficulty) -> ProjectTemplate {
        ProjectTemplate {
            title: title.to_string(),
            description: "A project".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            category: "Testing".to_string(),
            difficulty,
            time_estimate: "1-2 hours".to_string(),
        }
    }

    #[test]
    fn test_empty_skill_list_returns_empty() {
        let result = generate_recommendations(&request(&[], "advanced"), &default_catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn test_at_most_five_results() {
        let req = RecommendRequest {
            skills: vec![
                "React".to_string(),
                "Python".to_string(),
                "JavaScript".to_string(),
                "SQL".to_string(),
                "TypeScript".to_string(),
                "Docker".to_string(),
            ],
            interests: String::new(),
            experience_level: "senior".to_string(),
            goals: String::new(),
        };
        let result = generate_recommendations(&req, &default_catalog());
        assert!(result.len() <= 5);
    }

    #[test]
    fn test_every_result_shares_a_skill() {
        let req = request(&["python", "REACT"], "intermediate");
        for suggestion in generate_recommendations(&req, &default_catalog()) {
            assert!(
                !suggestion.matched_skills.is_empty(),
                "{} matched no skills",
                suggestion.title
            );
        }
    }

    #[test]
    fn test_skill_matching_is_case_insensitive() {
        let result = generate_recommendations(&request(&["react"], "beginner"), &default_catalog());
        assert!(result.iter().any(|s| s.title == "Personal Portfolio Website"));
    }

    #[test]
    fn test_beginner_react_scenario() {
        let result = generate_recommendations(&request(&["React"], "beginner"), &default_catalog());
        let titles: Vec<_> = result.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Personal Portfolio Website"));
        assert!(titles.contains(&"Weather Forecast App"));
        assert!(!titles.contains(&"E-commerce Platform"));
        assert!(!titles.contains(&"To-Do List Manager"));
    }

    #[test]
    fn test_senior_tier_admits_intermediate_templates() {
        let result = generate_recommendations(
            &request(&["Python", "TensorFlow"], "senior"),
            &default_catalog(),
        );
        let titles: Vec<_> = result.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Machine Learning Model Visualization"));
        assert!(titles.contains(&"Recommendation Engine"));
    }

    #[test]
    fn test_beginner_tier_gets_no_relaxation() {
        // Intermediate-only skills at beginner tier yield nothing.
        let result =
            generate_recommendations(&request(&["TensorFlow"], "beginner"), &default_catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scores_are_non_increasing() {
        let result = generate_recommendations(
            &request(&["Python", "TensorFlow"], "senior"),
            &default_catalog(),
        );
        for pair in result.windows(2) {
            assert!(pair[0].skill_match_score >= pair[1].skill_match_score);
        }
    }

    #[test]
    fn test_equal_scores_preserve_catalog_order() {
        let catalog = vec![
            simple_template("First", &["Rust"], Difficulty::Beginner),
            simple_template("Second", &["Rust"], Difficulty::Beginner),
            simple_template("Third", &["Rust"], Difficulty::Beginner),
        ];
        let result = generate_recommendations(&request(&["Rust"], "beginner"), &catalog);
        let titles: Vec<_> = result.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_full_overlap_outranks_partial_overlap() {
        let catalog = vec![
            simple_template("Partial", &["Rust", "WASM"], Difficulty::Beginner),
            simple_template("Full", &["Rust"], Difficulty::Beginner),
        ];
        let result = generate_recommendations(&request(&["Rust"], "beginner"), &catalog);
        assert_eq!(result[0].title, "Full");
        assert_eq!(result[0].skill_match_score, 50);
        assert_eq!(result[1].skill_match_score, 25);
    }

    #[test]
    fn test_interest_and_goal_keywords_raise_score() {
        let catalog = vec![simple_template("Rust game engine", &["Rust"], Difficulty::Beginner)];
        let base = generate_recommendations(&request(&["Rust"], "beginner"), &catalog);

        let mut req = request(&["Rust"], "beginner");
        req.interests = "game development".to_string(); // "game" hits the title
        req.goals = "build an engine".to_string(); // "engine" hits the title
        let boosted = generate_recommendations(&req, &catalog);

        // 50 + 10*1 + 15*1
        assert_eq!(base[0].skill_match_score, 50);
        assert_eq!(boosted[0].skill_match_score, 75);
    }

    #[test]
    fn test_short_tokens_are_ignored() {
        let catalog = vec![simple_template("Web API", &["Rust"], Difficulty::Beginner)];
        let mut req = request(&["Rust"], "beginner");
        // "a", "web", "api" are all ≤ 3 chars
        req.interests = "a web api".to_string();
        let result = generate_recommendations(&req, &catalog);
        assert_eq!(result[0].skill_match_score, 50);
    }

    #[test]
    fn test_score_is_not_clamped_above_100() {
        let catalog = vec![simple_template("Distributed database", &["Rust"], Difficulty::Beginner)];
        let mut req = request(&["Rust"], "beginner");
        req.interests = "distributed distributed distributed".to_string();
        req.goals = "database database database".to_string();
        let result = generate_recommendations(&req, &catalog);
        // 50 + 10*3 + 15*3 = 125
        assert_eq!(result[0].skill_match_score, 125);
    }

    #[test]
    fn test_suggestion_ids_unique_within_batch() {
        let result = generate_recommendations(
            &request(&["React", "Python", "JavaScript"], "mid"),
            &default_catalog(),
        );
        assert!(result.len() > 1);
        let mut ids: Vec<_> = result.iter().map(|s| s.id.clone()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), result.len());
    }

    #[test]
    fn test_tier_mapping() {
        assert_eq!(tier_for("student"), Difficulty::Beginner);
        assert_eq!(tier_for("beginner"), Difficulty::Beginner);
        assert_eq!(tier_for("mid"), Difficulty::Intermediate);
        assert_eq!(tier_for("Intermediate"), Difficulty::Intermediate);
        assert_eq!(tier_for("SENIOR"), Difficulty::Advanced);
        assert_eq!(tier_for("advanced"), Difficulty::Advanced);
        assert_eq!(tier_for(""), Difficulty::Beginner);
        assert_eq!(tier_for("wizard"), Difficulty::Beginner);
    }
}
