use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{Job, JobStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub name: String,
    pub jobs: usize,
    pub applications: usize,
    pub interviews: usize,
    pub conversion: f64, // applications / jobs × 100
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentStats {
    pub resumes_generated: usize,
    pub cover_letters_generated: usize,
    pub questionnaires_answered: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsStats {
    pub total_jobs: usize,
    pub total_applications: usize,
    pub interviews: usize,
    pub offers: usize,
    pub jobs_by_status: BTreeMap<String, usize>,
    pub jobs_by_platform: BTreeMap<String, usize>,
    pub applications_by_status: BTreeMap<String, usize>,
    pub applications_by_platform: BTreeMap<String, usize>,
    pub applications_per_job: f64,
    pub success_rate: f64, // (interviews + offers) / applications × 100
    pub average_compatibility: f64,
    pub platforms: Vec<PlatformStats>,
    pub documents: DocumentStats,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Platform names are grouped ignoring ASCII case. The first spelling seen
/// becomes the key for the whole group.
fn platform_key(seen: &mut Vec<String>, raw: &str) -> String {
    if let Some(name) = seen.iter().find(|name| name.eq_ignore_ascii_case(raw)) {
        return name.clone();
    }
    seen.push(raw.to_string());
    raw.to_string()
}

pub fn compute_stats(jobs: &[Job], applications: &[Application]) -> AnalyticsStats {
    let mut jobs_by_status: BTreeMap<String, usize> = JobStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut applications_by_status: BTreeMap<String, usize> = ApplicationStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut jobs_by_platform: BTreeMap<String, usize> = BTreeMap::new();
    let mut applications_by_platform: BTreeMap<String, usize> = BTreeMap::new();
    let mut interviews_by_platform: BTreeMap<String, usize> = BTreeMap::new();
    let mut seen_platforms: Vec<String> = Vec::new();

    for job in jobs {
        *jobs_by_status.entry(job.status.as_str().to_string()).or_default() += 1;
        let platform = platform_key(&mut seen_platforms, &job.platform);
        *jobs_by_platform.entry(platform).or_default() += 1;
    }

    let mut documents = DocumentStats {
        resumes_generated: 0,
        cover_letters_generated: 0,
        questionnaires_answered: 0,
    };

    for app in applications {
        *applications_by_status
            .entry(app.status.as_str().to_string())
            .or_default() += 1;
        let platform = platform_key(&mut seen_platforms, &app.platform);
        if app.status == ApplicationStatus::Entrevista {
            *interviews_by_platform.entry(platform.clone()).or_default() += 1;
        }
        *applications_by_platform.entry(platform).or_default() += 1;

        documents.resumes_generated += usize::from(app.documents.cv);
        documents.cover_letters_generated += usize::from(app.documents.cover_letter);
        documents.questionnaires_answered += usize::from(app.documents.questionnaire);
    }

    let interviews = applications_by_status[ApplicationStatus::Entrevista.as_str()];
    let offers = applications_by_status[ApplicationStatus::Aceita.as_str()];

    let mut platform_names: Vec<&String> = jobs_by_platform
        .keys()
        .chain(applications_by_platform.keys())
        .collect();
    platform_names.sort();
    platform_names.dedup();

    let platforms = platform_names
        .into_iter()
        .map(|name| {
            let jobs = jobs_by_platform.get(name).copied().unwrap_or(0);
            let applications = applications_by_platform.get(name).copied().unwrap_or(0);
            PlatformStats {
                name: name.clone(),
                jobs,
                applications,
                interviews: interviews_by_platform.get(name).copied().unwrap_or(0),
                conversion: round1(ratio(applications, jobs) * 100.0),
            }
        })
        .collect();

    let compatibility_sum: usize = jobs.iter().map(|j| usize::from(j.compatibility)).sum();

    AnalyticsStats {
        total_jobs: jobs.len(),
        total_applications: applications.len(),
        interviews,
        offers,
        applications_per_job: round1(ratio(applications.len(), jobs.len())),
        success_rate: round1(ratio(interviews + offers, applications.len()) * 100.0),
        average_compatibility: round1(ratio(compatibility_sum, jobs.len())),
        jobs_by_status,
        jobs_by_platform,
        applications_by_status,
        applications_by_platform,
        platforms,
        documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_seed_stats() {
        let jobs = seed::jobs().unwrap();
        let applications = seed::applications().unwrap();
        let stats = compute_stats(&jobs, &applications);

        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.total_applications, 3);
        assert_eq!(stats.interviews, 1);
        assert_eq!(stats.offers, 0);
        assert_eq!(stats.jobs_by_status["nova"], 1);
        assert_eq!(stats.jobs_by_status["ignorada"], 0);
        assert_eq!(stats.applications_by_status["pendente"], 1);
        assert_eq!(stats.applications_per_job, 1.0);
        assert_eq!(stats.success_rate, 33.3);
        assert_eq!(stats.average_compatibility, 85.0);
        assert_eq!(
            stats.documents,
            DocumentStats {
                resumes_generated: 3,
                cover_letters_generated: 2,
                questionnaires_answered: 1,
            }
        );
    }

    #[test]
    fn test_platform_breakdown() {
        let jobs = seed::jobs().unwrap();
        let mut applications = seed::applications().unwrap();
        applications[2].platform = "Himalayas".to_string();
        let stats = compute_stats(&jobs, &applications);

        let names: Vec<&str> = stats.platforms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Catho", "Gupy", "Himalayas", "LinkedIn"]);

        let himalayas = &stats.platforms[2];
        assert_eq!(himalayas.jobs, 0);
        assert_eq!(himalayas.applications, 1);
        assert_eq!(himalayas.conversion, 0.0);

        let gupy = &stats.platforms[1];
        assert_eq!(gupy.interviews, 1);
        assert_eq!(gupy.conversion, 100.0);
    }

    #[test]
    fn test_platform_names_group_ignoring_case() {
        let jobs = seed::jobs().unwrap();
        let mut applications = seed::applications().unwrap();
        applications[0].platform = "linkedin".to_string();
        applications[1].platform = "GUPY".to_string();
        let stats = compute_stats(&jobs, &applications);

        let names: Vec<&str> = stats.platforms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Catho", "Gupy", "LinkedIn"]);
        assert_eq!(stats.applications_by_platform["LinkedIn"], 1);
        assert_eq!(stats.applications_by_platform["Gupy"], 1);
        assert!(!stats.applications_by_platform.contains_key("linkedin"));

        let gupy = &stats.platforms[1];
        assert_eq!(gupy.applications, 1);
        assert_eq!(gupy.interviews, 1);
    }

    #[test]
    fn test_empty_collections_have_zero_ratios() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.applications_per_job, 0.0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.average_compatibility, 0.0);
        assert!(stats.platforms.is_empty());
        assert_eq!(stats.jobs_by_status.len(), JobStatus::ALL.len());
    }
}
