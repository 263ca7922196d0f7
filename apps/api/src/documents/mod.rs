//! Document generation: pluggable, trait-based producer of the resume, cover
//! letter and questionnaire answers attached to an application.
//!
//! Default: `MockDocumentGenerator` (canned templates, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn DocumentGenerator>`, chosen at startup.

pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, DocumentKind};
use crate::models::job::Job;
use crate::models::settings::Profile;

pub use mock::MockDocumentGenerator;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Everything a generator may draw on. `job` is `None` when the application
/// points at a job id the store does not know.
pub struct DocumentContext<'a> {
    pub application: &'a Application,
    pub job: Option<&'a Job>,
    pub profile: &'a Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub format: String, // "markdown" | "text"
    pub content: String,
    pub generated_at: DateTime<Utc>,
    pub generator: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Experience,
    Availability,
    Motivation,
    Salary,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub category: QuestionCategory,
    pub confidence: f32, // 0.0 – 1.0
    pub needs_review: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub answers: Vec<Answer>,
    pub needs_review: usize,
    pub generator: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The document generator trait. Implement this to swap backends without
/// touching the application handlers.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    async fn resume(&self, ctx: &DocumentContext<'_>) -> Result<GeneratedDocument, AppError>;

    async fn cover_letter(&self, ctx: &DocumentContext<'_>)
        -> Result<GeneratedDocument, AppError>;

    async fn questionnaire(
        &self,
        ctx: &DocumentContext<'_>,
        questions: &[Question],
    ) -> Result<QuestionnaireAnswers, AppError>;
}
