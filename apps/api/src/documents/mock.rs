use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::documents::{
    Answer, DocumentContext, DocumentGenerator, GeneratedDocument, Question, QuestionCategory,
    QuestionnaireAnswers,
};
use crate::errors::AppError;
use crate::models::application::DocumentKind;

const GENERATOR_NAME: &str = "mock";

/// Answered when a questionnaire request carries no questions.
const DEFAULT_QUESTIONS: [&str; 3] = [
    "Você possui experiência na área?",
    "Qual a sua disponibilidade para início?",
    "Por que você quer trabalhar conosco?",
];

/// Keyword hints per category, Portuguese and English. Checked in order.
const CATEGORY_HINTS: &[(QuestionCategory, &[&str])] = &[
    (
        QuestionCategory::Salary,
        &["salário", "salario", "pretensão", "pretensao", "salary", "compensation"],
    ),
    (
        QuestionCategory::Experience,
        &["experiência", "experiencia", "experience", "anos", "years"],
    ),
    (
        QuestionCategory::Availability,
        &["disponibilidade", "início", "inicio", "availability", "start", "horário"],
    ),
    (
        QuestionCategory::Motivation,
        &["por que", "porque", "motivo", "interesse", "why", "motivation"],
    ),
];

/// Canned templates standing in for a real generator. Deterministic apart from
/// document ids and timestamps.
pub struct MockDocumentGenerator;

pub fn classify_question(text: &str) -> QuestionCategory {
    let lowered = text.to_lowercase();
    CATEGORY_HINTS
        .iter()
        .find(|(_, hints)| hints.iter().any(|h| lowered.contains(h)))
        .map(|(category, _)| *category)
        .unwrap_or(QuestionCategory::Other)
}

fn candidate_name(ctx: &DocumentContext<'_>) -> String {
    let name = ctx.profile.full_name.trim();
    if name.is_empty() {
        "Candidato".to_string()
    } else {
        name.to_string()
    }
}

fn document(kind: DocumentKind, format: &str, content: String) -> GeneratedDocument {
    GeneratedDocument {
        id: Uuid::new_v4(),
        kind,
        format: format.to_string(),
        content,
        generated_at: Utc::now(),
        generator: GENERATOR_NAME.to_string(),
    }
}

fn answer_question(question: &Question) -> Answer {
    let category = classify_question(&question.question);

    if !question.options.is_empty() {
        // Prefer an affirmative option, otherwise the first one offered.
        let choice = question
            .options
            .iter()
            .find(|o| {
                let o = o.to_lowercase();
                o.starts_with("sim") || o.starts_with("yes")
            })
            .unwrap_or(&question.options[0]);
        return Answer {
            question: question.question.clone(),
            answer: choice.clone(),
            category,
            confidence: 0.6,
            needs_review: category == QuestionCategory::Salary,
        };
    }

    let (answer, confidence, needs_review) = match category {
        QuestionCategory::Experience => ("Sim, tenho experiência na área", 0.8, false),
        QuestionCategory::Availability => ("Disponibilidade imediata", 0.9, false),
        QuestionCategory::Motivation => ("Busco crescimento profissional e novos desafios", 0.8, false),
        QuestionCategory::Salary => ("A combinar", 0.3, true),
        QuestionCategory::Other => ("Prefiro discutir este ponto na entrevista", 0.3, true),
    };

    Answer {
        question: question.question.clone(),
        answer: answer.to_string(),
        category,
        confidence,
        needs_review,
    }
}

#[async_trait]
impl DocumentGenerator for MockDocumentGenerator {
    async fn resume(&self, ctx: &DocumentContext<'_>) -> Result<GeneratedDocument, AppError> {
        let app = ctx.application;
        let profile = ctx.profile;

        let mut content = format!("# {}\n\n", candidate_name(ctx));
        for contact in [&profile.email, &profile.phone, &profile.linkedin] {
            if !contact.trim().is_empty() {
                content.push_str(&format!("- {contact}\n"));
            }
        }
        content.push_str(&format!(
            "\n## Objetivo\n\n{} na {}\n",
            app.job_title, app.company
        ));

        let skills: Vec<&str> = match ctx.job {
            Some(job) => job.skills.iter().map(String::as_str).collect(),
            None => profile
                .keywords
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .collect(),
        };
        if !skills.is_empty() {
            content.push_str("\n## Competências\n\n");
            for skill in skills {
                content.push_str(&format!("- {skill}\n"));
            }
        }

        Ok(document(DocumentKind::Resume, "markdown", content))
    }

    async fn cover_letter(
        &self,
        ctx: &DocumentContext<'_>,
    ) -> Result<GeneratedDocument, AppError> {
        let app = ctx.application;
        let company = if app.company.is_empty() {
            "Empresa"
        } else {
            app.company.as_str()
        };
        let title = if app.job_title.is_empty() {
            "Vaga"
        } else {
            app.job_title.as_str()
        };

        let content = format!(
            "Prezados recrutadores da {company},\n\n\
             Venho demonstrar meu interesse na vaga de {title}. Acredito que meu perfil \
             e experiência me tornam um candidato adequado para esta posição.\n\n\
             Estou disponível para trabalho remoto e comprometido em entregar resultados \
             de qualidade. Gostaria da oportunidade de conversar sobre como posso \
             contribuir com a equipe.\n\n\
             Atenciosamente,\n{}",
            candidate_name(ctx)
        );

        Ok(document(DocumentKind::CoverLetter, "text", content))
    }

    async fn questionnaire(
        &self,
        _ctx: &DocumentContext<'_>,
        questions: &[Question],
    ) -> Result<QuestionnaireAnswers, AppError> {
        let answers: Vec<Answer> = if questions.is_empty() {
            DEFAULT_QUESTIONS
                .iter()
                .map(|q| {
                    answer_question(&Question {
                        question: q.to_string(),
                        options: Vec::new(),
                    })
                })
                .collect()
        } else {
            questions.iter().map(answer_question).collect()
        };

        let needs_review = answers.iter().filter(|a| a.needs_review).count();
        Ok(QuestionnaireAnswers {
            answers,
            needs_review,
            generator: GENERATOR_NAME.to_string(),
        })
    }
}
