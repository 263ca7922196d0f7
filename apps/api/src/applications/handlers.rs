//! Axum route handlers for the Applications API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::documents::{DocumentContext, GeneratedDocument, Question, QuestionnaireAnswers};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery, OptionalJson};
use crate::models::application::{
    Application, ApplicationFilter, ApplicationStatus, DocumentKind, Documents, NewApplication,
};
use crate::models::{active_filter, Page, StatusUpdateRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
    pub platform: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ApplicationListQuery {
    fn into_filter(self) -> Result<(ApplicationFilter, Page), AppError> {
        let status = active_filter(self.status.as_deref())
            .map(str::parse::<ApplicationStatus>)
            .transpose()?;
        let filter = ApplicationFilter {
            status,
            platform: active_filter(self.platform.as_deref()).map(str::to_string),
            search: active_filter(self.search.as_deref()).map(str::to_string),
        };
        Ok((filter, Page::new(self.limit, self.offset)))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionnaireRequest {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub application_id: String,
    pub document: GeneratedDocument,
    pub documents: Documents,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireResponse {
    pub application_id: String,
    #[serde(flatten)]
    pub result: QuestionnaireAnswers,
    pub documents: Documents,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_application(state: &AppState, id: &str) -> Result<Application, AppError> {
    state
        .store
        .get_application(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

/// The single-document outputs of the generator.
#[derive(Debug, Clone, Copy)]
enum TextDocument {
    Resume,
    CoverLetter,
}

impl TextDocument {
    fn kind(self) -> DocumentKind {
        match self {
            TextDocument::Resume => DocumentKind::Resume,
            TextDocument::CoverLetter => DocumentKind::CoverLetter,
        }
    }
}

/// Runs one document generator call against the application and, once it
/// succeeds, flags the document on the stored record.
async fn generate_document(
    state: &AppState,
    application_id: &str,
    which: TextDocument,
) -> Result<DocumentResponse, AppError> {
    let application = find_application(state, application_id).await?;
    let job = state.store.get_job(&application.job_id).await;
    let settings = state.store.settings().await;

    let ctx = DocumentContext {
        application: &application,
        job: job.as_ref(),
        profile: &settings.profile,
    };
    let document = match which {
        TextDocument::Resume => state.documents.resume(&ctx).await?,
        TextDocument::CoverLetter => state.documents.cover_letter(&ctx).await?,
    };

    let kind = which.kind();
    let updated = state.store.mark_document(application_id, kind).await?;
    info!(application_id, ?kind, "Document generated");

    Ok(DocumentResponse {
        application_id: updated.id,
        document,
        documents: updated.documents,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ApplicationListQuery>,
) -> Result<Json<Vec<Application>>, AppError> {
    let (filter, page) = query.into_filter()?;
    let applications = page.apply(state.store.list_applications(&filter).await);
    debug!(count = applications.len(), ?filter, ?page, "Listed applications");
    Ok(Json(applications))
}

/// GET /api/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<Application>, AppError> {
    Ok(Json(find_application(&state, &application_id).await?))
}

/// POST /api/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    AppJson(request): AppJson<NewApplication>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = state.store.create_application(request).await;
    info!(
        application_id = %application.id,
        job_id = %application.job_id,
        "Application created"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// PUT /api/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
    AppJson(request): AppJson<StatusUpdateRequest>,
) -> Result<Json<Application>, AppError> {
    let status: ApplicationStatus = request.status.parse()?;
    let application = state
        .store
        .update_application_status(&application_id, status, request.expected_version)
        .await?;

    info!(
        application_id = %application.id,
        status = %application.status,
        version = application.version,
        "Application status updated"
    );
    Ok(Json(application))
}

/// POST /api/applications/:id/generate_resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let response = generate_document(&state, &application_id, TextDocument::Resume).await?;
    Ok(Json(response))
}

/// POST /api/applications/:id/generate_cover_letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let response = generate_document(&state, &application_id, TextDocument::CoverLetter).await?;
    Ok(Json(response))
}

/// POST /api/applications/:id/respond_questionnaire
///
/// The body may be omitted; without questions a default screening set is
/// answered. A body that does not parse is rejected before anything is stored.
pub async fn handle_respond_questionnaire(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
    OptionalJson(body): OptionalJson<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResponse>, AppError> {
    let request = body.unwrap_or_default();

    let application = find_application(&state, &application_id).await?;
    let job = state.store.get_job(&application.job_id).await;
    let settings = state.store.settings().await;
    let ctx = DocumentContext {
        application: &application,
        job: job.as_ref(),
        profile: &settings.profile,
    };

    let result = state.documents.questionnaire(&ctx, &request.questions).await?;
    let updated = state
        .store
        .mark_document(&application_id, DocumentKind::Questionnaire)
        .await?;

    info!(
        application_id = %updated.id,
        answered = result.answers.len(),
        needs_review = result.needs_review,
        "Questionnaire answered"
    );

    Ok(Json(QuestionnaireResponse {
        application_id: updated.id,
        result,
        documents: updated.documents,
    }))
}
