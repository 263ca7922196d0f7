//! Canned compatibility analysis. The score itself comes from the job record;
//! this module only derives priority and the apply recommendation from it.

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    VeryLow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub job_id: String,
    pub compatibility: u8,
    pub priority: Priority,
    pub should_apply: bool,
    pub analysis: String,
}

pub fn priority_for(compatibility: u8) -> Priority {
    match compatibility {
        80..=u8::MAX => Priority::High,
        60..=79 => Priority::Medium,
        40..=59 => Priority::Low,
        _ => Priority::VeryLow,
    }
}

/// `min_compatibility` is the user's auto-apply threshold from settings.
pub fn analyze_job(job: &Job, min_compatibility: u8) -> JobAnalysis {
    JobAnalysis {
        job_id: job.id.clone(),
        compatibility: job.compatibility,
        priority: priority_for(job.compatibility),
        should_apply: job.compatibility >= min_compatibility,
        analysis: "Análise de compatibilidade baseada no perfil do usuário".to_string(),
    }
}
