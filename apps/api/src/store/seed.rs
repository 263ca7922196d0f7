//! Fixed records the store starts with. They stand in for a real job feed.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::application::{Application, ApplicationStatus, Documents};
use crate::models::job::{Job, JobStatus};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid seed date {y}-{m}-{d}"))
}

fn timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid seed timestamp {raw}"))?;
    Ok(parsed.with_timezone(&Utc))
}

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn jobs() -> Result<Vec<Job>> {
    Ok(vec![
        Job {
            id: "1".to_string(),
            title: "Desenvolvedor Python Júnior".to_string(),
            company: "TechCorp".to_string(),
            location: "São Paulo, SP".to_string(),
            job_type: "Remoto".to_string(),
            level: "Júnior".to_string(),
            compatibility: 85,
            description: "Vaga para desenvolvedor Python júnior com experiência em Django e FastAPI."
                .to_string(),
            skills: skills(&["Python", "Backend", "Remote"]),
            platform: "LinkedIn".to_string(),
            posted_date: date(2025, 7, 13)?,
            salary_range: "R$ 4.000 - R$ 6.000".to_string(),
            status: JobStatus::Nova,
            version: 1,
        },
        Job {
            id: "2".to_string(),
            title: "Desenvolvedor TypeScript".to_string(),
            company: "StartupXYZ".to_string(),
            location: "Rio de Janeiro, RJ".to_string(),
            job_type: "Remoto".to_string(),
            level: "Pleno".to_string(),
            compatibility: 92,
            description: "Desenvolvedor TypeScript para trabalhar com Vue.js e Node.js.".to_string(),
            skills: skills(&["TypeScript", "Frontend", "Remote"]),
            platform: "Gupy".to_string(),
            posted_date: date(2025, 7, 12)?,
            salary_range: "R$ 6.000 - R$ 8.000".to_string(),
            status: JobStatus::Candidatada,
            version: 1,
        },
        Job {
            id: "3".to_string(),
            title: "Assistente Administrativo Remoto".to_string(),
            company: "AdminCorp".to_string(),
            location: "Belo Horizonte, MG".to_string(),
            job_type: "Remoto".to_string(),
            level: "Júnior".to_string(),
            compatibility: 78,
            description: "Assistente administrativo para trabalho 100% remoto.".to_string(),
            skills: skills(&["Administrativo", "Remote"]),
            platform: "Catho".to_string(),
            posted_date: date(2025, 7, 11)?,
            salary_range: "R$ 2.500 - R$ 3.500".to_string(),
            status: JobStatus::Entrevista,
            version: 1,
        },
    ])
}

pub fn applications() -> Result<Vec<Application>> {
    Ok(vec![
        Application {
            id: "1".to_string(),
            job_id: "1".to_string(),
            job_title: "Desenvolvedor Python Júnior".to_string(),
            company: "TechCorp".to_string(),
            platform: "LinkedIn".to_string(),
            status: ApplicationStatus::Enviada,
            applied_date: timestamp("2025-07-13T10:30:00Z")?,
            documents: Documents {
                cv: true,
                cover_letter: true,
                questionnaire: true,
            },
            version: 1,
        },
        Application {
            id: "2".to_string(),
            job_id: "2".to_string(),
            job_title: "Desenvolvedor TypeScript".to_string(),
            company: "StartupXYZ".to_string(),
            platform: "Gupy".to_string(),
            status: ApplicationStatus::Entrevista,
            applied_date: timestamp("2025-07-12T14:20:00Z")?,
            documents: Documents {
                cv: true,
                cover_letter: true,
                questionnaire: false,
            },
            version: 1,
        },
        Application {
            id: "3".to_string(),
            job_id: "3".to_string(),
            job_title: "Assistente Administrativo Remoto".to_string(),
            company: "AdminCorp".to_string(),
            platform: "Catho".to_string(),
            status: ApplicationStatus::Pendente,
            applied_date: timestamp("2025-07-11T09:15:00Z")?,
            documents: Documents {
                cv: true,
                cover_letter: false,
                questionnaire: false,
            },
            version: 1,
        },
    ])
}
