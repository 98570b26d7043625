//! Outbound payload assembly.
//!
//! Builds the flat record delivered to the webhook: respondent identity, the
//! per-question answers with resolved texts, the computed scores, and a
//! submission timestamp. Assembly never fails; a lookup miss produces an
//! empty string for that field instead of aborting the submission.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::models::{
    MaturityLevel, Question, RespondentProfile, ResponseSet, ScoreResult,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadUser {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(rename = "companySize")]
    pub company_size: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadResponse {
    #[serde(rename = "questionId")]
    pub question_id: u16,
    #[serde(rename = "questionText")]
    pub question_text: String,
    /// The full text of the chosen option, not its letter.
    #[serde(rename = "selectedOption")]
    pub selected_option: String,
    #[serde(rename = "pointValue")]
    pub point_value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadScores {
    pub total: u8,
    pub onboarding: u8,
    pub outcomes: u8,
    pub qbrs: u8,
    pub ai: u8,
    pub strategy: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub user: PayloadUser,
    pub responses: Vec<PayloadResponse>,
    pub scores: PayloadScores,
    #[serde(rename = "maturityLevel")]
    pub maturity_level: String,
    pub timestamp: String,
}

impl WebhookPayload {
    pub fn assemble(
        profile: &RespondentProfile,
        responses: &ResponseSet,
        catalog: &[Question],
        result: &ScoreResult,
        submitted_at: DateTime<Utc>,
    ) -> WebhookPayload {
        let payload_responses = responses
            .iter()
            .map(|response| {
                let question = catalog.iter().find(|q| q.id == response.question_id);
                let question_text = question.map(|q| q.prompt.clone()).unwrap_or_default();
                let selected_option = question
                    .and_then(|q| q.option(response.letter))
                    .map(|opt| opt.text.clone())
                    .unwrap_or_default();

                PayloadResponse {
                    question_id: response.question_id,
                    question_text,
                    selected_option,
                    point_value: response.points,
                }
            })
            .collect();

        WebhookPayload {
            user: PayloadUser {
                name: profile.name.clone(),
                email: profile.email.clone(),
                company: profile.company_name.clone(),
                company_size: profile
                    .company_size
                    .map(|size| size.label().to_string())
                    .unwrap_or_default(),
                role: profile.role.clone(),
            },
            responses: payload_responses,
            scores: PayloadScores {
                total: result.total_score,
                onboarding: result.category_scores.onboarding,
                outcomes: result.category_scores.customer_outcomes,
                qbrs: result.category_scores.qbrs,
                ai: result.category_scores.ai_utilization,
                strategy: result.category_scores.overall_strategy,
            },
            maturity_level: result
                .maturity_level
                .map(MaturityLevel::name)
                .unwrap_or("Incomplete")
                .to_string(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
