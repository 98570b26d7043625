use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use super::errors::{DomainError, DomainResult};

/// One of the five answer slots on every question, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 5] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
        OptionLetter::E,
    ];

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
            OptionLetter::E => 'E',
        }
    }

    pub fn from_index(index: usize) -> Option<OptionLetter> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Topical grouping a question belongs to. Subtotals are derived from this
/// field via catalog lookup, so the category assignment lives in exactly one
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Onboarding,
    CustomerOutcomes,
    Qbrs,
    AiUtilization,
    OverallStrategy,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Onboarding,
        Category::CustomerOutcomes,
        Category::Qbrs,
        Category::AiUtilization,
        Category::OverallStrategy,
    ];

    /// Human-readable name shown on question cards and in the summary.
    pub fn label(self) -> &'static str {
        match self {
            Category::Onboarding => "Onboarding Process",
            Category::CustomerOutcomes => "Customer Outcomes",
            Category::Qbrs => "QBRs",
            Category::AiUtilization => "AI Utilization",
            Category::OverallStrategy => "Overall CS Strategy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub letter: OptionLetter,
    pub text: String,
    pub points: u8,
}

/// A single catalog entry. Questions are immutable once built; ids run 1..=10
/// and define the wizard order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u16,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, letter: OptionLetter) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.letter == letter)
    }
}

/// An answered question. The point value is copied from the chosen option at
/// answer time; the scorer re-checks it against the catalog, so a stored
/// value that disagrees with the option never reaches the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "questionId")]
    pub question_id: u16,
    #[serde(rename = "selectedOption")]
    pub letter: OptionLetter,
    pub points: u8,
}

/// The session's working set of answers: at most one response per question,
/// ordered by question id. Selecting a new option for an already-answered
/// question replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    #[serde(
        serialize_with = "serialize_responses",
        deserialize_with = "deserialize_responses"
    )]
    responses: BTreeMap<u16, Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the answer for `response.question_id`.
    pub fn upsert(&mut self, response: Response) {
        self.responses.insert(response.question_id, response);
    }

    pub fn get(&self, question_id: u16) -> Option<&Response> {
        self.responses.get(&question_id)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Responses in ascending question-id order.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.values()
    }

    /// True once every question in the catalog has exactly one answer.
    pub fn covers(&self, catalog: &[Question]) -> bool {
        catalog.iter().all(|q| self.responses.contains_key(&q.id))
    }
}

fn serialize_responses<S>(
    responses: &BTreeMap<u16, Response>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(responses.len()))?;
    for response in responses.values() {
        seq.serialize_element(response)?;
    }
    seq.end()
}

fn deserialize_responses<'de, D>(deserializer: D) -> Result<BTreeMap<u16, Response>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{SeqAccess, Visitor};
    use std::fmt;

    struct ResponsesVisitor;

    impl<'de> Visitor<'de> for ResponsesVisitor {
        type Value = BTreeMap<u16, Response>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of responses")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut responses = BTreeMap::new();
            while let Some(response) = seq.next_element::<Response>()? {
                responses.insert(response.question_id, response);
            }
            Ok(responses)
        }
    }

    deserializer.deserialize_seq(ResponsesVisitor)
}

/// Predefined company headcount bands offered on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    UpTo10,
    UpTo25,
    UpTo50,
    UpTo100,
    UpTo150,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::UpTo10,
        CompanySize::UpTo25,
        CompanySize::UpTo50,
        CompanySize::UpTo100,
        CompanySize::UpTo150,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::UpTo10 => "1-10 employees",
            CompanySize::UpTo25 => "11-25 employees",
            CompanySize::UpTo50 => "26-50 employees",
            CompanySize::UpTo100 => "51-100 employees",
            CompanySize::UpTo150 => "101-150 employees",
        }
    }
}

/// Contact details collected after the last question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub company_size: Option<CompanySize>,
    pub role: String,
}

impl RespondentProfile {
    /// Checks the required fields. `role` is optional.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingProfileField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::MissingProfileField("email"));
        }
        if self.company_name.trim().is_empty() {
            return Err(DomainError::MissingProfileField("company name"));
        }
        if self.company_size.is_none() {
            return Err(DomainError::MissingProfileField("company size"));
        }
        Ok(())
    }
}

/// Qualitative tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Foundational,
    Developing,
    Established,
    Advanced,
}

impl MaturityLevel {
    /// Maps a total score onto its tier band. Totals outside [10, 50] have no
    /// tier; that only happens with an incomplete response set.
    pub fn classify(total_score: u8) -> Option<MaturityLevel> {
        match total_score {
            10..=20 => Some(MaturityLevel::Foundational),
            21..=30 => Some(MaturityLevel::Developing),
            31..=40 => Some(MaturityLevel::Established),
            41..=50 => Some(MaturityLevel::Advanced),
            _ => None,
        }
    }

    /// Bare tier name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            MaturityLevel::Foundational => "Foundational",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Established => "Established",
            MaturityLevel::Advanced => "Advanced",
        }
    }

    /// Display label with the stage suffix, as shown on the results screen.
    pub fn label(self) -> &'static str {
        match self {
            MaturityLevel::Foundational => "Foundational Stage",
            MaturityLevel::Developing => "Developing Stage",
            MaturityLevel::Established => "Established Stage",
            MaturityLevel::Advanced => "Advanced Stage",
        }
    }
}

/// Per-category point subtotals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub onboarding: u8,
    pub customer_outcomes: u8,
    pub qbrs: u8,
    pub ai_utilization: u8,
    pub overall_strategy: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Onboarding => self.onboarding,
            Category::CustomerOutcomes => self.customer_outcomes,
            Category::Qbrs => self.qbrs,
            Category::AiUtilization => self.ai_utilization,
            Category::OverallStrategy => self.overall_strategy,
        }
    }

    pub fn add(&mut self, category: Category, points: u8) {
        match category {
            Category::Onboarding => self.onboarding += points,
            Category::CustomerOutcomes => self.customer_outcomes += points,
            Category::Qbrs => self.qbrs += points,
            Category::AiUtilization => self.ai_utilization += points,
            Category::OverallStrategy => self.overall_strategy += points,
        }
    }

    pub fn sum(&self) -> u8 {
        self.onboarding
            + self.customer_outcomes
            + self.qbrs
            + self.ai_utilization
            + self.overall_strategy
    }
}

/// Computed assessment outcome. Never mutated after scoring; recomputed
/// wholesale from the working set if it needs to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u8,
    pub category_scores: CategoryScores,
    pub maturity_level: Option<MaturityLevel>,
}

impl ScoreResult {
    /// Tier label for display, with an explicit marker when the total fell
    /// outside the defined bands.
    pub fn level_label(&self) -> &'static str {
        self.maturity_level
            .map(MaturityLevel::label)
            .unwrap_or("Incomplete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_existing_response() {
        let mut set = ResponseSet::new();
        set.upsert(Response { question_id: 3, letter: OptionLetter::A, points: 1 });
        set.upsert(Response { question_id: 3, letter: OptionLetter::E, points: 5 });

        assert_eq!(set.len(), 1);
        let response = set.get(3).unwrap();
        assert_eq!(response.letter, OptionLetter::E);
        assert_eq!(response.points, 5);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut set = ResponseSet::new();
        let response = Response { question_id: 7, letter: OptionLetter::C, points: 3 };
        set.upsert(response.clone());
        set.upsert(response.clone());

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(7), Some(&response));
    }

    #[test]
    fn test_responses_iterate_in_question_order() {
        let mut set = ResponseSet::new();
        set.upsert(Response { question_id: 9, letter: OptionLetter::B, points: 2 });
        set.upsert(Response { question_id: 1, letter: OptionLetter::A, points: 1 });
        set.upsert(Response { question_id: 4, letter: OptionLetter::D, points: 4 });

        let ids: Vec<u16> = set.iter().map(|r| r.question_id).collect();
        assert_eq!(ids, vec![1, 4, 9]);
    }

    #[test]
    fn test_response_set_json_round_trip() {
        let mut set = ResponseSet::new();
        set.upsert(Response { question_id: 2, letter: OptionLetter::B, points: 2 });
        set.upsert(Response { question_id: 5, letter: OptionLetter::E, points: 5 });

        let json = serde_json::to_string(&set).unwrap();
        let restored: ResponseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_classify_boundary_scores() {
        assert_eq!(MaturityLevel::classify(10), Some(MaturityLevel::Foundational));
        assert_eq!(MaturityLevel::classify(20), Some(MaturityLevel::Foundational));
        assert_eq!(MaturityLevel::classify(21), Some(MaturityLevel::Developing));
        assert_eq!(MaturityLevel::classify(30), Some(MaturityLevel::Developing));
        assert_eq!(MaturityLevel::classify(31), Some(MaturityLevel::Established));
        assert_eq!(MaturityLevel::classify(40), Some(MaturityLevel::Established));
        assert_eq!(MaturityLevel::classify(41), Some(MaturityLevel::Advanced));
        assert_eq!(MaturityLevel::classify(50), Some(MaturityLevel::Advanced));
    }

    #[test]
    fn test_classify_out_of_range_scores() {
        assert_eq!(MaturityLevel::classify(0), None);
        assert_eq!(MaturityLevel::classify(9), None);
        assert_eq!(MaturityLevel::classify(51), None);
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = RespondentProfile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Example Co".to_string(),
            company_size: Some(CompanySize::UpTo50),
            role: String::new(),
        };
        assert!(profile.validate().is_ok());

        profile.email.clear();
        assert_eq!(
            profile.validate(),
            Err(DomainError::MissingProfileField("email"))
        );

        profile.email = "ada@example.com".to_string();
        profile.company_size = None;
        assert_eq!(
            profile.validate(),
            Err(DomainError::MissingProfileField("company size"))
        );
    }
}
