use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::UnknownStatus;

/// Lifecycle of a job posting from the candidate's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Nova,
    Candidatada,
    Entrevista,
    Rejeitada,
    Ignorada,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Nova,
        JobStatus::Candidatada,
        JobStatus::Entrevista,
        JobStatus::Rejeitada,
        JobStatus::Ignorada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Nova => "nova",
            JobStatus::Candidatada => "candidatada",
            JobStatus::Entrevista => "entrevista",
            JobStatus::Rejeitada => "rejeitada",
            JobStatus::Ignorada => "ignorada",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownStatus {
                entity: "job",
                value: s.to_string(),
                expected: JobStatus::ALL.map(|st| st.as_str()).join(", "),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub level: String,
    pub compatibility: u8, // 0 – 100
    pub description: String,
    pub skills: Vec<String>,
    pub platform: String,
    pub posted_date: NaiveDate,
    pub salary_range: String,
    pub status: JobStatus,
    /// Bumped on every mutation; clients may echo it back as `expected_version`.
    pub version: u64,
}

impl Job {
    /// Case-insensitive substring match over title, description and skills.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.skills.iter().any(|s| s.to_lowercase().contains(&needle))
    }
}

/// Filters for `GET /api/jobs`, AND-combined.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub platform: Option<String>,
    pub status: Option<JobStatus>,
    pub search: Option<String>,
    pub min_score: Option<u8>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let platform_ok = self
            .platform
            .as_deref()
            .map_or(true, |p| job.platform.eq_ignore_ascii_case(p));
        let status_ok = self.status.map_or(true, |s| job.status == s);
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |term| job.matches_keyword(term));
        let score_ok = self.min_score.map_or(true, |min| job.compatibility >= min);
        platform_ok && status_ok && search_ok && score_ok
    }
}
