//! The fixed ten-question assessment catalog.
//!
//! Question ids define the wizard order. Options run A through E from least
//! to most mature practice, worth 1 through 5 points.

use super::models::{Category, OptionLetter, Question, QuestionOption};

fn question(id: u16, category: Category, prompt: &str, option_texts: [&str; 5]) -> Question {
    let options = OptionLetter::ALL
        .iter()
        .zip(option_texts.iter())
        .map(|(&letter, &text)| QuestionOption {
            letter,
            text: text.to_string(),
            points: letter.index() as u8 + 1,
        })
        .collect();

    Question {
        id,
        category,
        prompt: prompt.to_string(),
        options,
    }
}

/// Builds the full catalog. Callers load this once and pass references around.
pub fn question_catalog() -> Vec<Question> {
    vec![
        question(
            1,
            Category::Onboarding,
            "How structured is your customer onboarding process?",
            [
                "We don't have a formal onboarding process",
                "We have a basic checklist we follow",
                "We have a documented process with some customization",
                "We have a fully documented, repeatable process with clear milestones",
                "We have an optimized, data-driven onboarding process with continuous improvement",
            ],
        ),
        question(
            2,
            Category::Onboarding,
            "How do you measure onboarding success?",
            [
                "We don't formally measure onboarding success",
                "We track basic completion of onboarding steps",
                "We measure time-to-value and initial product adoption",
                "We track multiple metrics including customer satisfaction during onboarding",
                "We have comprehensive onboarding KPIs tied to long-term success metrics",
            ],
        ),
        question(
            3,
            Category::CustomerOutcomes,
            "How do you identify and track customer goals and desired outcomes?",
            [
                "We don't formally track customer goals",
                "We informally discuss goals during sales but don't systematically track them",
                "We document goals at the start but rarely revisit them",
                "We have a process to document and regularly review progress toward goals",
                "We have a robust system for defining, tracking, and optimizing toward customer outcomes",
            ],
        ),
        question(
            4,
            Category::CustomerOutcomes,
            "How do you measure the value your customers receive from your product?",
            [
                "We don't formally measure customer value",
                "We track basic usage metrics",
                "We track usage and some business impact metrics",
                "We have defined value metrics for different customer segments",
                "We quantify ROI and business impact with customers regularly",
            ],
        ),
        question(
            5,
            Category::CustomerOutcomes,
            "How proactive is your approach to customer risk management?",
            [
                "We typically react to problems after customers report them",
                "We have basic health scores but limited proactive outreach",
                "We have defined risk indicators and some proactive processes",
                "We have a systematic approach to identifying and addressing risks",
                "We have predictive risk models and automated intervention processes",
            ],
        ),
        question(
            6,
            Category::Qbrs,
            "How consistently do you conduct QBRs with your customers?",
            [
                "We don't conduct formal QBRs",
                "We conduct QBRs inconsistently or only with top customers",
                "We conduct QBRs with most customers but without a consistent format",
                "We have a structured QBR process for all customers above a certain threshold",
                "We have a tiered, data-driven QBR program customized by customer segment",
            ],
        ),
        question(
            7,
            Category::Qbrs,
            "What data do you include in your QBR presentations?",
            [
                "Basic usage statistics and account updates",
                "Usage trends and feature adoption",
                "Progress against customer goals and success metrics",
                "Comprehensive ROI analysis and strategic recommendations",
                "Predictive insights, benchmarking, and strategic business planning",
            ],
        ),
        question(
            8,
            Category::AiUtilization,
            "How are you currently utilizing AI in your customer success processes?",
            [
                "We don't currently use AI in our customer success processes",
                "We're exploring AI but haven't implemented any solutions",
                "We use basic AI for things like chatbots or simple analytics",
                "We've integrated AI into multiple customer success workflows",
                "AI is core to our customer success strategy with multiple advanced applications",
            ],
        ),
        question(
            9,
            Category::AiUtilization,
            "How do you use data to predict and improve customer outcomes?",
            [
                "We primarily use anecdotal information and manual tracking",
                "We collect data but analysis is mostly reactive and manual",
                "We have basic reporting dashboards with some predictive elements",
                "We use data models to predict outcomes and guide CS activities",
                "We have advanced predictive analytics driving automated workflows",
            ],
        ),
        question(
            10,
            Category::OverallStrategy,
            "How integrated is your customer success function with other departments?",
            [
                "CS operates mostly in isolation",
                "CS has informal collaboration with other teams",
                "CS has established processes for working with sales and support",
                "CS is well-integrated across the customer lifecycle with multiple teams",
                "CS strategy is central to company operations with executive visibility",
            ],
        ),
    ]
}

/// Maximum attainable points within one category: five per question.
pub fn category_max(catalog: &[Question], category: Category) -> u8 {
    catalog.iter().filter(|q| q.category == category).count() as u8 * 5
}
