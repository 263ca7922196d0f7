//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery, OptionalJson};
use crate::jobs::analysis::{analyze_job, JobAnalysis};
use crate::models::job::{Job, JobFilter, JobStatus};
use crate::models::{active_filter, Page, StatusUpdateRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    pub platform: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub min_score: Option<u8>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl JobListQuery {
    fn into_filter(self) -> Result<(JobFilter, Page), AppError> {
        let status = active_filter(self.status.as_deref())
            .map(str::parse::<JobStatus>)
            .transpose()?;
        let filter = JobFilter {
            platform: active_filter(self.platform.as_deref()).map(str::to_string),
            status,
            search: active_filter(self.search.as_deref()).map(str::to_string),
            min_score: self.min_score,
        };
        Ok((filter, Page::new(self.limit, self.offset)))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub message: String,
    pub status: String,
    pub platforms: Vec<String>,
    pub keywords: Vec<String>,
    pub total: usize,
    pub jobs: Vec<Job>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<JobListQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let (filter, page) = query.into_filter()?;
    let jobs = page.apply(state.store.list_jobs(&filter).await);
    debug!(count = jobs.len(), ?filter, ?page, "Listed jobs");
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .store
        .get_job(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}

/// POST /api/jobs/search
///
/// Mock search: answers immediately with the known jobs matching the requested
/// platforms and keywords. Nothing is fetched and nothing is stored.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let request = body.unwrap_or_default();

    let jobs: Vec<Job> = state
        .store
        .list_jobs(&JobFilter::default())
        .await
        .into_iter()
        .filter(|job| {
            request.platforms.is_empty()
                || request
                    .platforms
                    .iter()
                    .any(|p| job.platform.eq_ignore_ascii_case(p.trim()))
        })
        .filter(|job| request.keywords.iter().all(|k| job.matches_keyword(k)))
        .collect();

    info!(
        platforms = ?request.platforms,
        keywords = ?request.keywords,
        found = jobs.len(),
        "Mock job search triggered"
    );

    Ok(Json(SearchResponse {
        message: "Busca iniciada".to_string(),
        status: "success".to_string(),
        platforms: request.platforms,
        keywords: request.keywords,
        total: jobs.len(),
        jobs,
    }))
}

/// POST /api/jobs/:id/analyze
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobAnalysis>, AppError> {
    let job = state
        .store
        .get_job(&job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let min_compatibility = state.store.settings().await.automation.min_compatibility;
    Ok(Json(analyze_job(&job, min_compatibility)))
}

/// PUT /api/jobs/:id/status
///
/// Unknown status values are rejected with 400 rather than stored verbatim.
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    AppJson(request): AppJson<StatusUpdateRequest>,
) -> Result<Json<Job>, AppError> {
    let status: JobStatus = request.status.parse()?;
    let job = state
        .store
        .update_job_status(&job_id, status, request.expected_version)
        .await?;

    info!(job_id = %job.id, status = %job.status, version = job.version, "Job status updated");
    Ok(Json(job))
}
