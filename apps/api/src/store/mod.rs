//! In-memory data store: the single owner of every job, application and the
//! settings record.
//!
//! Built once at startup and shared as `Arc<Store>` through `AppState`.
//! Each collection has its own `RwLock`; every mutation runs inside one write
//! guard, so multi-field updates are never observed half-applied.
//!
//! Concurrent status updates resolve last-write-wins unless the caller passes
//! `expected_version`, in which case a stale version is refused.

pub mod merge;
pub mod seed;

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::application::{
    Application, ApplicationFilter, ApplicationStatus, DocumentKind, Documents, NewApplication,
};
use crate::models::job::{Job, JobFilter, JobStatus};
use crate::models::settings::Settings;
use crate::store::merge::merge_json;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} is at version {actual}, expected {expected}")]
    VersionConflict {
        entity: &'static str,
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("invalid settings update: {0}")]
    InvalidSettings(String),
}

/// Records that carry an id and an optimistic-concurrency version.
trait Versioned {
    const ENTITY: &'static str;
    fn id(&self) -> &str;
    fn version(&self) -> u64;
    fn bump(&mut self);
}

impl Versioned for Job {
    const ENTITY: &'static str = "Job";
    fn id(&self) -> &str {
        &self.id
    }
    fn version(&self) -> u64 {
        self.version
    }
    fn bump(&mut self) {
        self.version += 1;
    }
}

impl Versioned for Application {
    const ENTITY: &'static str = "Application";
    fn id(&self) -> &str {
        &self.id
    }
    fn version(&self) -> u64 {
        self.version
    }
    fn bump(&mut self) {
        self.version += 1;
    }
}

/// Finds `id` in `rows`, checks `expected_version`, applies `mutate` and bumps
/// the version. Returns the updated record.
fn mutate_row<T: Versioned + Clone>(
    rows: &mut [T],
    id: &str,
    expected_version: Option<u64>,
    mutate: impl FnOnce(&mut T),
) -> Result<T, StoreError> {
    let row = rows
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;

    if let Some(expected) = expected_version {
        if row.version() != expected {
            return Err(StoreError::VersionConflict {
                entity: T::ENTITY,
                id: id.to_string(),
                expected,
                actual: row.version(),
            });
        }
    }

    mutate(row);
    row.bump();
    Ok(row.clone())
}

pub struct Store {
    jobs: RwLock<Vec<Job>>,
    applications: RwLock<Vec<Application>>,
    settings: RwLock<Settings>,
}

impl Store {
    pub fn new(jobs: Vec<Job>, applications: Vec<Application>, settings: Settings) -> Self {
        Store {
            jobs: RwLock::new(jobs),
            applications: RwLock::new(applications),
            settings: RwLock::new(settings),
        }
    }

    /// Store pre-populated with the built-in demo records.
    pub fn with_seed_data() -> Result<Self> {
        Ok(Store::new(
            seed::jobs()?,
            seed::applications()?,
            Settings::default(),
        ))
    }

    // ── Jobs ────────────────────────────────────────────────────────────────

    pub async fn list_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        let jobs = self.jobs.read().await;
        jobs.iter().filter(|j| filter.matches(j)).cloned().collect()
    }

    pub async fn get_job(&self, id: &str) -> Option<Job> {
        let jobs = self.jobs.read().await;
        jobs.iter().find(|j| j.id == id).cloned()
    }

    pub async fn update_job_status(
        &self,
        id: &str,
        status: JobStatus,
        expected_version: Option<u64>,
    ) -> Result<Job, StoreError> {
        let mut jobs = self.jobs.write().await;
        mutate_row(jobs.as_mut_slice(), id, expected_version, |job| job.status = status)
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    // ── Applications ────────────────────────────────────────────────────────

    pub async fn list_applications(&self, filter: &ApplicationFilter) -> Vec<Application> {
        let applications = self.applications.read().await;
        applications
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub async fn get_application(&self, id: &str) -> Option<Application> {
        let applications = self.applications.read().await;
        applications.iter().find(|a| a.id == id).cloned()
    }

    /// Appends a new pending application. Missing metadata is copied from the
    /// referenced job when it exists; a dangling `job_id` is accepted as-is.
    pub async fn create_application(&self, request: NewApplication) -> Application {
        let job = self.get_job(&request.job_id).await;

        let mut applications = self.applications.write().await;
        let next_id = applications
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let application = Application {
            id: next_id.to_string(),
            job_title: request
                .job_title
                .or_else(|| job.as_ref().map(|j| j.title.clone()))
                .unwrap_or_default(),
            company: request
                .company
                .or_else(|| job.as_ref().map(|j| j.company.clone()))
                .unwrap_or_default(),
            platform: request
                .platform
                .or_else(|| job.as_ref().map(|j| j.platform.clone()))
                .unwrap_or_default(),
            job_id: request.job_id,
            status: ApplicationStatus::Pendente,
            applied_date: Utc::now(),
            documents: Documents::default(),
            version: 1,
        };

        applications.push(application.clone());
        application
    }

    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        expected_version: Option<u64>,
    ) -> Result<Application, StoreError> {
        let mut applications = self.applications.write().await;
        mutate_row(applications.as_mut_slice(), id, expected_version, |a| a.status = status)
    }

    /// Flags one generated document on the application, leaving the others as they were.
    pub async fn mark_document(
        &self,
        id: &str,
        kind: DocumentKind,
    ) -> Result<Application, StoreError> {
        let mut applications = self.applications.write().await;
        mutate_row(applications.as_mut_slice(), id, None, |a| a.documents.mark(kind))
    }

    pub async fn application_count(&self) -> usize {
        self.applications.read().await.len()
    }

    /// Consistent copy of both collections for read-only projections.
    pub async fn snapshot(&self) -> (Vec<Job>, Vec<Application>) {
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;
        (jobs.clone(), applications.clone())
    }

    // ── Settings ────────────────────────────────────────────────────────────

    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Merges a JSON object into the current settings. The record is only
    /// replaced if the merged result still deserializes.
    pub async fn update_settings(&self, patch: Value) -> Result<Settings, StoreError> {
        if !patch.is_object() {
            return Err(StoreError::InvalidSettings(
                "settings update must be a JSON object".to_string(),
            ));
        }

        let mut settings = self.settings.write().await;
        let mut merged = serde_json::to_value(&*settings)
            .map_err(|e| StoreError::InvalidSettings(e.to_string()))?;
        merge_json(&mut merged, patch);

        let updated: Settings = serde_json::from_value(merged)
            .map_err(|e| StoreError::InvalidSettings(e.to_string()))?;
        *settings = updated.clone();
        Ok(updated)
    }
}
