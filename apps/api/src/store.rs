//! Local persistent store — one JSON blob on disk, the service-side
//! analogue of the original app's browser-local storage.
//!
//! Semantics are deliberately simple: the whole blob is loaded at
//! startup, every mutation rewrites the whole file, last write wins.
//! A failed write fails that one request and leaves the prior
//! in-memory state untouched. No versioning, no migration, no retries.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::models::project::{ProjectReview, ProjectSuggestion};
use crate::models::provider::{AiProvider, ProviderConfig, ProviderSettings};
use crate::models::skill::Skill;

const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    saved_projects: Vec<ProjectSuggestion>,
    #[serde(default)]
    providers: ProviderConfig,
}

#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    data: Arc<RwLock<StoreData>>,
}

impl Store {
    /// Opens (or initializes) the store under `data_dir`.
    pub async fn open(data_dir: &Path) -> Result<Store> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
        let path = data_dir.join(STORE_FILE);

        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Failed to parse store file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreData::default(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read store file {}", path.display()))
            }
        };

        info!("Local store opened at {}", path.display());
        Ok(Store {
            path,
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// Applies `apply` to a copy of the current data, persists the copy,
    /// and commits it to memory only if the write succeeded.
    async fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut StoreData),
    {
        let mut guard = self.data.write().await;
        let mut next = guard.clone();
        apply(&mut next);
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn persist(&self, data: &StoreData) -> Result<()> {
        let json = serde_json::to_vec_pretty(data).context("Failed to serialize store")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write store file {}", self.path.display()))
    }

    // ── Profile skills ──────────────────────────────────────────────

    pub async fn skills(&self) -> Vec<Skill> {
        self.data.read().await.skills.clone()
    }

    /// Replaces the whole skill list (last write wins).
    pub async fn replace_skills(&self, skills: Vec<Skill>) -> Result<()> {
        self.mutate(|data| data.skills = skills).await
    }

    // ── Saved projects ──────────────────────────────────────────────

    pub async fn saved_projects(&self) -> Vec<ProjectSuggestion> {
        self.data.read().await.saved_projects.clone()
    }

    pub async fn saved_project(&self, id: &str) -> Option<ProjectSuggestion> {
        self.data
            .read()
            .await
            .saved_projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Copies a suggestion into the persisted list. Returns `false`
    /// (without writing) if the id is already saved.
    pub async fn save_project(&self, suggestion: ProjectSuggestion) -> Result<bool> {
        let mut guard = self.data.write().await;
        if guard.saved_projects.iter().any(|p| p.id == suggestion.id) {
            return Ok(false);
        }
        let mut next = guard.clone();
        next.saved_projects.push(suggestion);
        self.persist(&next).await?;
        *guard = next;
        Ok(true)
    }

    /// Removes a project from the persisted list only. Returns whether
    /// the id existed.
    pub async fn delete_project(&self, id: &str) -> Result<bool> {
        let mut guard = self.data.write().await;
        if !guard.saved_projects.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        let mut next = guard.clone();
        next.saved_projects.retain(|p| p.id != id);
        self.persist(&next).await?;
        *guard = next;
        Ok(true)
    }

    /// Appends a review to a saved project. Returns the updated project,
    /// or `None` if the id is not in the saved list.
    pub async fn append_review(
        &self,
        id: &str,
        review: ProjectReview,
    ) -> Result<Option<ProjectSuggestion>> {
        let mut guard = self.data.write().await;
        let mut next = guard.clone();
        let updated = match next.saved_projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.reviews.push(review);
                project.clone()
            }
            None => return Ok(None),
        };
        self.persist(&next).await?;
        *guard = next;
        Ok(Some(updated))
    }

    // ── Provider configuration ──────────────────────────────────────

    pub async fn providers(&self) -> ProviderConfig {
        self.data.read().await.providers.clone()
    }

    pub async fn set_provider(
        &self,
        provider: AiProvider,
        settings: ProviderSettings,
    ) -> Result<()> {
        self.mutate(|data| data.providers.set(provider, settings))
            .await
    }
}
