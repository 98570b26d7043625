//! Scoring and maturity classification.
//!
//! The scorer is a pure function over the response working set: the same set
//! always produces the same result regardless of the order answers were
//! given. Category subtotals come from each question's catalog category, so
//! the catalog is the single source of truth for the partition.

use super::catalog;
use super::errors::{DomainError, DomainResult};
use super::models::{
    CategoryScores, MaturityLevel, Question, Response, ResponseSet, ScoreResult,
};

/// Computes totals, per-category subtotals, and the maturity tier for a
/// response set.
///
/// Borrows the catalog for category lookups, in the same way the rest of the
/// domain resolves question data.
///
/// # Examples
///
/// ```
/// use csmaturity::domain::{question_catalog, OptionLetter, Response, ResponseSet, Scorer};
///
/// let catalog = question_catalog();
/// let mut responses = ResponseSet::new();
/// for question in &catalog {
///     responses.upsert(Response {
///         question_id: question.id,
///         letter: OptionLetter::E,
///         points: 5,
///     });
/// }
///
/// let result = Scorer::new(&catalog).score(&responses);
/// assert_eq!(result.total_score, 50);
/// ```
pub struct Scorer<'a> {
    catalog: &'a [Question],
}

impl<'a> Scorer<'a> {
    pub fn new(catalog: &'a [Question]) -> Self {
        Self { catalog }
    }

    /// Scores whatever responses are present. A response referencing a
    /// question id missing from the catalog, or carrying a point value that
    /// disagrees with the catalog option for its letter, is skipped rather
    /// than corrupting the totals; a partial set simply contributes nothing
    /// for the unanswered questions and classifies to no tier when the total
    /// falls under 10.
    pub fn score(&self, responses: &ResponseSet) -> ScoreResult {
        let mut total_score: u8 = 0;
        let mut category_scores = CategoryScores::default();

        for response in responses.iter() {
            let Some(question) = self.find_question(response.question_id) else {
                continue;
            };
            // The session file can be edited by hand; the catalog option is
            // the authoritative point value, not the stored one.
            let Some(option) = question.option(response.letter) else {
                continue;
            };
            if response.points != option.points {
                continue;
            }
            total_score += option.points;
            category_scores.add(question.category, option.points);
        }

        ScoreResult {
            total_score,
            category_scores,
            maturity_level: MaturityLevel::classify(total_score),
        }
    }

    /// Scores a set that is expected to be complete. Used at submission time,
    /// where fewer than ten answers is a caller error.
    pub fn score_final(&self, responses: &ResponseSet) -> DomainResult<ScoreResult> {
        if !responses.covers(self.catalog) {
            return Err(DomainError::IncompleteResponses {
                answered: responses.len(),
            });
        }
        Ok(self.score(responses))
    }

    /// Percentage of the attainable points earned in one category, for the
    /// qualitative commentary bands.
    pub fn category_percentage(&self, result: &ScoreResult, category: super::Category) -> u8 {
        let max = catalog::category_max(self.catalog, category);
        if max == 0 {
            return 0;
        }
        (result.category_scores.get(category) as u16 * 100 / max as u16) as u8
    }

    fn find_question(&self, question_id: u16) -> Option<&Question> {
        self.catalog.iter().find(|q| q.id == question_id)
    }
}

/// Looks up a question's option and builds the response recording its points.
///
/// This is the only way answers enter the working set, so the stored point
/// value always matches the chosen option.
pub fn build_response(
    catalog: &[Question],
    question_id: u16,
    letter: super::OptionLetter,
) -> DomainResult<Response> {
    let question = catalog
        .iter()
        .find(|q| q.id == question_id)
        .ok_or(DomainError::UnknownQuestion(question_id))?;
    let option = question.option(letter).ok_or(DomainError::InvalidOption {
        question_id,
        letter: letter.as_char(),
    })?;

    Ok(Response {
        question_id,
        letter,
        points: option.points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::question_catalog;
    use crate::domain::models::{Category, OptionLetter};

    fn uniform_set(catalog: &[Question], letter: OptionLetter) -> ResponseSet {
        let mut set = ResponseSet::new();
        for question in catalog {
            set.upsert(build_response(catalog, question.id, letter).unwrap());
        }
        set
    }

    fn set_from_letters(catalog: &[Question], letters: [OptionLetter; 10]) -> ResponseSet {
        let mut set = ResponseSet::new();
        for (question, &letter) in catalog.iter().zip(letters.iter()) {
            set.upsert(build_response(catalog, question.id, letter).unwrap());
        }
        set
    }

    #[test]
    fn test_all_a_scores_minimum() {
        let catalog = question_catalog();
        let result = Scorer::new(&catalog).score(&uniform_set(&catalog, OptionLetter::A));

        assert_eq!(result.total_score, 10);
        assert_eq!(result.maturity_level, Some(MaturityLevel::Foundational));
        assert_eq!(result.category_scores.onboarding, 2);
        assert_eq!(result.category_scores.customer_outcomes, 3);
        assert_eq!(result.category_scores.qbrs, 2);
        assert_eq!(result.category_scores.ai_utilization, 2);
        assert_eq!(result.category_scores.overall_strategy, 1);
    }

    #[test]
    fn test_all_e_scores_maximum() {
        let catalog = question_catalog();
        let result = Scorer::new(&catalog).score(&uniform_set(&catalog, OptionLetter::E));

        assert_eq!(result.total_score, 50);
        assert_eq!(result.maturity_level, Some(MaturityLevel::Advanced));
    }

    #[test]
    fn test_mixed_set_lands_in_established() {
        use OptionLetter::{A, B, C, D, E};
        let catalog = question_catalog();
        // Onboarding 7, outcomes 10, QBRs 6, AI 6, strategy 4.
        let set = set_from_letters(&catalog, [C, D, B, C, E, A, E, B, D, D]);
        let result = Scorer::new(&catalog).score(&set);

        assert_eq!(result.category_scores.onboarding, 7);
        assert_eq!(result.category_scores.customer_outcomes, 10);
        assert_eq!(result.category_scores.qbrs, 6);
        assert_eq!(result.category_scores.ai_utilization, 6);
        assert_eq!(result.category_scores.overall_strategy, 4);
        assert_eq!(result.total_score, 33);
        assert_eq!(result.maturity_level, Some(MaturityLevel::Established));
    }

    #[test]
    fn test_subtotals_always_sum_to_total() {
        use OptionLetter::{A, B, C, D, E};
        let catalog = question_catalog();
        let scorer = Scorer::new(&catalog);

        for letters in [
            [A, A, A, A, A, A, A, A, A, A],
            [E, E, E, E, E, E, E, E, E, E],
            [A, E, B, D, C, C, D, B, E, A],
            [B, B, C, C, C, D, D, E, E, A],
        ] {
            let result = scorer.score(&set_from_letters(&catalog, letters));
            assert_eq!(result.category_scores.sum(), result.total_score);
        }
    }

    #[test]
    fn test_partial_set_scores_without_tier() {
        let catalog = question_catalog();
        let mut set = ResponseSet::new();
        set.upsert(build_response(&catalog, 1, OptionLetter::C).unwrap());

        let result = Scorer::new(&catalog).score(&set);
        assert_eq!(result.total_score, 3);
        assert_eq!(result.maturity_level, None);
        assert_eq!(result.level_label(), "Incomplete");
    }

    #[test]
    fn test_score_final_rejects_partial_set() {
        let catalog = question_catalog();
        let mut set = ResponseSet::new();
        set.upsert(build_response(&catalog, 1, OptionLetter::A).unwrap());

        let err = Scorer::new(&catalog).score_final(&set).unwrap_err();
        assert_eq!(err, DomainError::IncompleteResponses { answered: 1 });
    }

    #[test]
    fn test_unknown_question_response_is_skipped() {
        let catalog = question_catalog();
        let mut set = uniform_set(&catalog, OptionLetter::A);
        set.upsert(Response { question_id: 99, letter: OptionLetter::E, points: 5 });

        let result = Scorer::new(&catalog).score(&set);
        assert_eq!(result.total_score, 10);
    }

    #[test]
    fn test_tampered_point_value_is_skipped() {
        let catalog = question_catalog();
        let mut set = uniform_set(&catalog, OptionLetter::A);
        set.upsert(Response { question_id: 1, letter: OptionLetter::A, points: 200 });

        let result = Scorer::new(&catalog).score(&set);
        assert_eq!(result.total_score, 9);
        assert_eq!(result.category_scores.onboarding, 1);
    }

    #[test]
    fn test_restored_session_with_bad_points_does_not_overflow() {
        // Valid JSON with point values no catalog option carries; scoring a
        // set restored from such a file must stay within the 0-50 range.
        let json = r#"{"responses":[
            {"questionId":1,"selectedOption":"A","points":200},
            {"questionId":2,"selectedOption":"A","points":200}
        ]}"#;
        let set: ResponseSet = serde_json::from_str(json).unwrap();

        let result = Scorer::new(&question_catalog()).score(&set);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.maturity_level, None);
    }

    #[test]
    fn test_build_response_copies_option_points() {
        let catalog = question_catalog();
        let response = build_response(&catalog, 4, OptionLetter::D).unwrap();
        assert_eq!(response.points, 4);
        assert_eq!(response.letter, OptionLetter::D);
    }

    #[test]
    fn test_build_response_rejects_unknown_question() {
        let catalog = question_catalog();
        assert_eq!(
            build_response(&catalog, 42, OptionLetter::A),
            Err(DomainError::UnknownQuestion(42))
        );
    }

    #[test]
    fn test_scoring_ignores_answer_order() {
        let catalog = question_catalog();
        let scorer = Scorer::new(&catalog);

        let mut forward = ResponseSet::new();
        for question in &catalog {
            forward.upsert(build_response(&catalog, question.id, OptionLetter::B).unwrap());
        }
        let mut backward = ResponseSet::new();
        for question in catalog.iter().rev() {
            backward.upsert(build_response(&catalog, question.id, OptionLetter::B).unwrap());
        }

        assert_eq!(scorer.score(&forward), scorer.score(&backward));
    }

    #[test]
    fn test_category_percentage() {
        let catalog = question_catalog();
        let scorer = Scorer::new(&catalog);
        let result = scorer.score(&uniform_set(&catalog, OptionLetter::E));

        for category in Category::ALL {
            assert_eq!(scorer.category_percentage(&result, category), 100);
        }
    }
}
