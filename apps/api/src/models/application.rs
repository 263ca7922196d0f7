use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UnknownStatus;

/// Lifecycle of a candidacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pendente,
    Enviada,
    Entrevista,
    Rejeitada,
    Aceita,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pendente,
        ApplicationStatus::Enviada,
        ApplicationStatus::Entrevista,
        ApplicationStatus::Rejeitada,
        ApplicationStatus::Aceita,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pendente => "pendente",
            ApplicationStatus::Enviada => "enviada",
            ApplicationStatus::Entrevista => "entrevista",
            ApplicationStatus::Rejeitada => "rejeitada",
            ApplicationStatus::Aceita => "aceita",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownStatus {
                entity: "application",
                value: s.to_string(),
                expected: ApplicationStatus::ALL.map(|st| st.as_str()).join(", "),
            })
    }
}

/// Which generated documents have been attached to an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    pub cv: bool,
    pub cover_letter: bool,
    pub questionnaire: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    Questionnaire,
}

impl Documents {
    pub fn mark(&mut self, kind: DocumentKind) {
        match kind {
            DocumentKind::Resume => self.cv = true,
            DocumentKind::CoverLetter => self.cover_letter = true,
            DocumentKind::Questionnaire => self.questionnaire = true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String, // not checked against the job collection
    pub job_title: String,
    pub company: String,
    pub platform: String,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub documents: Documents,
    pub version: u64,
}

impl Application {
    /// Case-insensitive substring match over job title, company and platform.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.job_title, &self.company, &self.platform]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Fields accepted by `POST /api/applications`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApplication {
    pub job_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Filters for `GET /api/applications`, AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub platform: Option<String>,
    pub search: Option<String>,
}

impl ApplicationFilter {
    pub fn matches(&self, application: &Application) -> bool {
        let status_ok = self.status.map_or(true, |s| application.status == s);
        let platform_ok = self
            .platform
            .as_deref()
            .map_or(true, |p| application.platform.eq_ignore_ascii_case(p));
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |term| application.matches_keyword(term));
        status_ok && platform_ok && search_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_labels_are_accepted() {
        assert_eq!(
            "Enviada".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::Enviada)
        );
        assert_eq!(
            "PENDENTE".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::Pendente)
        );
    }

    #[test]
    fn test_job_only_status_is_rejected_for_applications() {
        let err = "candidatada".parse::<ApplicationStatus>().unwrap_err();
        assert_eq!(err.entity, "application");
    }

    #[test]
    fn test_mark_sets_only_requested_flag() {
        let mut docs = Documents::default();
        docs.mark(DocumentKind::CoverLetter);
        assert_eq!(
            docs,
            Documents {
                cv: false,
                cover_letter: true,
                questionnaire: false
            }
        );
    }

    #[test]
    fn test_search_matches_title_company_or_platform() {
        let app = Application {
            id: "1".to_string(),
            job_id: "1".to_string(),
            job_title: "Desenvolvedor TypeScript".to_string(),
            company: "StartupXYZ".to_string(),
            platform: "Gupy".to_string(),
            status: ApplicationStatus::Enviada,
            applied_date: Utc::now(),
            documents: Documents::default(),
            version: 1,
        };
        let filter = |term: &str| ApplicationFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };
        assert!(filter("typescript").matches(&app));
        assert!(filter("startup").matches(&app));
        assert!(filter("GUPY").matches(&app));
        assert!(!filter("python").matches(&app));
    }

    #[test]
    fn test_new_application_only_requires_job_id() {
        let req: NewApplication = serde_json::from_str(r#"{"job_id": "7"}"#).unwrap();
        assert_eq!(req.job_id, "7");
        assert!(req.job_title.is_none());
        assert!(serde_json::from_str::<NewApplication>(r#"{"company": "X"}"#).is_err());
    }
}
