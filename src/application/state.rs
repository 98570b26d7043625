//! Application state management for the terminal assessment.
//!
//! This module contains the main application state: the wizard over the
//! question catalog, the profile form, the submission workflow, and the
//! screen mode the presentation layer renders.

use crate::domain::{
    question_catalog, DomainError, OptionLetter, Question, RespondentProfile, ResponseSet,
    ScoreResult, Scorer, WebhookPayload, build_response,
};
use crate::infrastructure::{Challenge, DeliveryPort, MathCaptcha, ResponseStore};
use chrono::Utc;

/// Represents the current screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Landing screen before the first question
    Welcome,
    /// Question wizard is active
    Quiz,
    /// Contact details form after the last question
    Profile,
    /// Post-submission results and summary export
    Results,
    /// Help screen is displayed
    Help,
}

/// Profile form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    CompanyName,
    CompanySize,
    Role,
    Captcha,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::CompanyName,
        ProfileField::CompanySize,
        ProfileField::Role,
        ProfileField::Captcha,
    ];

    pub fn next(self) -> ProfileField {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> ProfileField {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::CompanyName => "Company",
            ProfileField::CompanySize => "Company size",
            ProfileField::Role => "Role (optional)",
            ProfileField::Captcha => "Security check",
        }
    }
}

/// Main application state.
///
/// Holds the catalog, the response working set, profile input, and the two
/// injected capabilities: the response store and the delivery port. All user
/// feedback goes through `status_message`, rendered in the status bar.
pub struct App {
    /// The immutable question catalog
    pub catalog: Vec<Question>,
    /// Working set of answers, one per question
    pub responses: ResponseSet,
    /// Index of the question currently shown (zero-based)
    pub current_question: usize,
    /// Current screen
    pub mode: AppMode,
    /// Contact details being typed
    pub profile: RespondentProfile,
    /// Profile field with input focus
    pub focused_field: ProfileField,
    /// Active math challenge
    pub captcha: Challenge,
    /// Typed captcha answer
    pub captcha_input: String,
    /// Computed result, present after scoring
    pub result: Option<ScoreResult>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Screen to return to when help closes
    pub help_return: AppMode,
    /// Scroll position on the results screen
    pub results_scroll: usize,
    /// Set when the last store write failed; navigation retries it
    unsaved_changes: bool,
    store: Box<dyn ResponseStore>,
    delivery: Box<dyn DeliveryPort>,
}

impl App {
    /// Creates the application with injected persistence and delivery
    /// capabilities, restoring any persisted session.
    ///
    /// A corrupt session file is reported and ignored rather than blocking
    /// startup; prior answers are never discarded when the load succeeds.
    pub fn new(store: Box<dyn ResponseStore>, delivery: Box<dyn DeliveryPort>) -> Self {
        let mut app = Self {
            catalog: question_catalog(),
            responses: ResponseSet::new(),
            current_question: 0,
            mode: AppMode::Welcome,
            profile: RespondentProfile::default(),
            focused_field: ProfileField::Name,
            captcha: MathCaptcha::generate(),
            captcha_input: String::new(),
            result: None,
            status_message: None,
            help_scroll: 0,
            help_return: AppMode::Welcome,
            results_scroll: 0,
            unsaved_changes: false,
            store,
            delivery,
        };

        match app.store.load() {
            Ok(Some(saved)) => {
                let answered = saved.len();
                app.responses = saved;
                if answered > 0 {
                    app.status_message =
                        Some(format!("Restored session with {} answered question(s)", answered));
                }
            }
            Ok(None) => {}
            Err(e) => {
                app.status_message = Some(format!("Could not restore session: {}", e));
            }
        }

        app
    }

    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn current_question_data(&self) -> &Question {
        &self.catalog[self.current_question]
    }

    /// The stored answer for the question on screen, if any.
    pub fn current_answer(&self) -> Option<&crate::domain::Response> {
        self.responses.get(self.current_question_data().id)
    }

    pub fn is_complete(&self) -> bool {
        self.responses.covers(&self.catalog)
    }

    /// Starts (or resumes) the wizard at the first unanswered question.
    pub fn start_quiz(&mut self) {
        self.mode = AppMode::Quiz;
        self.current_question = self.first_unanswered_index().unwrap_or(0);
    }

    fn first_unanswered_index(&self) -> Option<usize> {
        self.catalog
            .iter()
            .position(|q| self.responses.get(q.id).is_none())
    }

    /// Records the answer for the question on screen and persists the
    /// working set. Re-selecting the same option is a no-op; selecting a
    /// different one replaces the earlier answer.
    pub fn select_answer(&mut self, letter: OptionLetter) {
        let question_id = self.current_question_data().id;
        match build_response(&self.catalog, question_id, letter) {
            Ok(response) => {
                self.responses.upsert(response);
                self.persist_responses();
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Answer selection by option row (0..=4), as typed from the keyboard.
    pub fn select_answer_by_index(&mut self, index: usize) {
        if let Some(letter) = OptionLetter::from_index(index) {
            self.select_answer(letter);
        }
    }

    fn persist_responses(&mut self) {
        match self.store.save(&self.responses) {
            Ok(()) => {
                self.unsaved_changes = false;
            }
            Err(e) => {
                self.unsaved_changes = true;
                self.status_message = Some(format!("Could not save progress: {}", e));
            }
        }
    }

    /// Every answer must be durably persisted before navigation treats it as
    /// complete; a failed write is retried here and blocks the move.
    fn ensure_persisted(&mut self) -> bool {
        if self.unsaved_changes {
            self.persist_responses();
        }
        !self.unsaved_changes
    }

    /// Advances to the next question, or to the profile form from the last
    /// one once every question is answered.
    pub fn go_next(&mut self) {
        if !self.ensure_persisted() {
            return;
        }
        if self.current_question + 1 < self.question_count() {
            self.current_question += 1;
        } else if self.is_complete() {
            self.start_profile();
        } else if let Some(index) = self.first_unanswered_index() {
            self.current_question = index;
            self.status_message = Some("Some questions are still unanswered".to_string());
        }
    }

    pub fn go_previous(&mut self) {
        if !self.ensure_persisted() {
            return;
        }
        if self.current_question > 0 {
            self.current_question -= 1;
        }
    }

    /// Jumps to any question, answered or not; the index is clamped to the
    /// catalog range.
    pub fn go_to(&mut self, index: usize) {
        if !self.ensure_persisted() {
            return;
        }
        self.current_question = index.min(self.question_count().saturating_sub(1));
    }

    fn start_profile(&mut self) {
        self.mode = AppMode::Profile;
        self.focused_field = ProfileField::Name;
        self.regenerate_captcha();
        self.status_message = None;
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    /// The text buffer behind the focused field, when it is free-typed.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            ProfileField::Name => Some(&mut self.profile.name),
            ProfileField::Email => Some(&mut self.profile.email),
            ProfileField::CompanyName => Some(&mut self.profile.company_name),
            ProfileField::Role => Some(&mut self.profile.role),
            ProfileField::Captcha => Some(&mut self.captcha_input),
            ProfileField::CompanySize => None,
        }
    }

    /// Steps the company-size selection through the five fixed bands.
    pub fn cycle_company_size(&mut self, forward: bool) {
        use crate::domain::CompanySize;
        let bands = CompanySize::ALL;
        let current = self
            .profile
            .company_size
            .and_then(|size| bands.iter().position(|&b| b == size));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % bands.len(),
            (Some(i), false) => (i + bands.len() - 1) % bands.len(),
        };
        self.profile.company_size = Some(bands[next]);
    }

    pub fn regenerate_captcha(&mut self) {
        self.captcha = MathCaptcha::generate();
        self.captcha_input.clear();
    }

    /// Validates, scores, assembles, and delivers the submission.
    ///
    /// Validation and captcha failures block with a status message and lose
    /// nothing. A transport failure keeps all responses and profile input so
    /// the respondent can retry. Success moves to the results screen and
    /// clears the persisted session.
    pub fn submit(&mut self) {
        if let Err(e) = self.profile.validate() {
            self.status_message = Some(e.to_string());
            return;
        }

        if !self.captcha.verify(&self.captcha_input) {
            self.regenerate_captcha();
            self.status_message =
                Some("Incorrect answer to the security check, try the new one".to_string());
            return;
        }

        if self.responses.is_empty() {
            // Session state was lost somewhere; back to the start rather
            // than submitting an empty assessment.
            self.status_message =
                Some("No saved answers found, please retake the assessment".to_string());
            self.start_quiz();
            return;
        }

        let scorer = Scorer::new(&self.catalog);
        let result = match scorer.score_final(&self.responses) {
            Ok(result) => result,
            Err(DomainError::IncompleteResponses { answered }) => {
                self.status_message =
                    Some(format!("Only {} of 10 questions answered", answered));
                self.start_quiz();
                return;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };

        let payload = WebhookPayload::assemble(
            &self.profile,
            &self.responses,
            &self.catalog,
            &result,
            Utc::now(),
        );

        let outcome = self.delivery.deliver(&payload);
        if outcome.is_success() {
            self.result = Some(result);
            self.mode = AppMode::Results;
            self.results_scroll = 0;
            if let Err(e) = self.store.clear() {
                self.status_message = Some(format!("Submitted, but session cleanup failed: {}", e));
            } else {
                self.status_message = Some("Assessment submitted".to_string());
            }
        } else {
            self.status_message = Some(format!(
                "{}. Your answers are preserved, press Enter to retry.",
                outcome.describe()
            ));
        }
    }

    /// Opens the results screen, recomputing from persisted answers when the
    /// in-memory result was lost. With nothing to show it redirects to the
    /// start of the quiz.
    pub fn open_results(&mut self) {
        if self.result.is_some() {
            self.mode = AppMode::Results;
            return;
        }

        let restored = match self.store.load() {
            Ok(saved) => saved,
            Err(_) => None,
        };
        match restored {
            Some(responses) if !responses.is_empty() => {
                let result = Scorer::new(&self.catalog).score(&responses);
                self.responses = responses;
                self.result = Some(result);
                self.mode = AppMode::Results;
            }
            _ => {
                self.status_message =
                    Some("No results to show yet, answer the questions first".to_string());
                self.start_quiz();
            }
        }
    }

    /// Clears the session for a fresh run.
    pub fn retake(&mut self) {
        if let Err(e) = self.store.clear() {
            self.status_message = Some(format!("Could not clear saved session: {}", e));
            return;
        }
        self.responses = ResponseSet::new();
        self.result = None;
        self.captcha_input.clear();
        self.unsaved_changes = false;
        self.current_question = 0;
        self.mode = AppMode::Quiz;
        self.status_message = None;
    }

    /// Opens the help overlay, remembering where to return.
    pub fn open_help(&mut self) {
        self.help_return = self.mode;
        self.help_scroll = 0;
        self.mode = AppMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = self.help_return;
    }

    /// The plain-text report for the current result, if one exists.
    pub fn summary_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|result| crate::domain::render_summary(result, &self.catalog))
    }

    #[cfg(test)]
    pub fn persisted_responses(&self) -> Option<ResponseSet> {
        self.store.load().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanySize, MaturityLevel};
    use crate::infrastructure::{MemoryResponseStore, StubDelivery};

    fn test_app(delivery: StubDelivery) -> App {
        App::new(Box::new(MemoryResponseStore::new()), Box::new(delivery))
    }

    fn answer_all(app: &mut App, letter: OptionLetter) {
        app.start_quiz();
        for _ in 0..app.question_count() {
            app.select_answer(letter);
            app.go_next();
        }
    }

    fn fill_profile(app: &mut App) {
        app.profile.name = "Ada".to_string();
        app.profile.email = "ada@example.com".to_string();
        app.profile.company_name = "Example Co".to_string();
        app.profile.company_size = Some(CompanySize::UpTo50);
        app.captcha = Challenge::new(2, 3);
        app.captcha_input = "5".to_string();
    }

    #[test]
    fn test_starts_on_welcome_screen() {
        let app = test_app(StubDelivery::accepting());
        assert_eq!(app.mode, AppMode::Welcome);
        assert_eq!(app.current_question, 0);
        assert!(app.responses.is_empty());
    }

    #[test]
    fn test_select_answer_persists_before_navigation() {
        let mut app = test_app(StubDelivery::accepting());
        app.start_quiz();
        app.select_answer(OptionLetter::C);

        let persisted = app.persisted_responses().unwrap();
        assert_eq!(persisted.get(1).unwrap().points, 3);
    }

    #[test]
    fn test_reselecting_replaces_answer() {
        let mut app = test_app(StubDelivery::accepting());
        app.start_quiz();
        app.select_answer(OptionLetter::A);
        app.select_answer(OptionLetter::E);

        assert_eq!(app.responses.len(), 1);
        assert_eq!(app.responses.get(1).unwrap().letter, OptionLetter::E);
        assert_eq!(app.persisted_responses().unwrap().get(1).unwrap().points, 5);
    }

    #[test]
    fn test_restores_persisted_session_on_startup() {
        let mut seed = ResponseSet::new();
        seed.upsert(build_response(&question_catalog(), 1, OptionLetter::D).unwrap());
        seed.upsert(build_response(&question_catalog(), 2, OptionLetter::D).unwrap());

        let store = MemoryResponseStore::with_responses(seed.clone());
        let mut app = App::new(Box::new(store), Box::new(StubDelivery::accepting()));

        assert_eq!(app.responses, seed);
        assert!(app.status_message.as_deref().unwrap().contains("Restored"));

        // Resuming lands on the first unanswered question.
        app.start_quiz();
        assert_eq!(app.current_question, 2);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = test_app(StubDelivery::accepting());
        app.start_quiz();

        app.go_previous();
        assert_eq!(app.current_question, 0);

        app.go_to(42);
        assert_eq!(app.current_question, 9);

        app.go_to(3);
        assert_eq!(app.current_question, 3);
    }

    #[test]
    fn test_jumping_to_unanswered_questions_is_allowed() {
        let mut app = test_app(StubDelivery::accepting());
        app.start_quiz();
        app.go_to(7);
        assert_eq!(app.current_question, 7);
        assert!(app.current_answer().is_none());
    }

    #[test]
    fn test_next_from_last_with_gaps_returns_to_first_unanswered() {
        let mut app = test_app(StubDelivery::accepting());
        app.start_quiz();
        app.go_to(9);
        app.select_answer(OptionLetter::B);
        app.go_next();

        assert_eq!(app.mode, AppMode::Quiz);
        assert_eq!(app.current_question, 0);
        assert!(app.status_message.as_deref().unwrap().contains("unanswered"));
    }

    #[test]
    fn test_completing_all_questions_opens_profile_form() {
        let mut app = test_app(StubDelivery::accepting());
        answer_all(&mut app, OptionLetter::C);

        assert_eq!(app.mode, AppMode::Profile);
        assert!(app.is_complete());
    }

    #[test]
    fn test_submit_blocks_on_missing_profile_fields() {
        let mut app = test_app(StubDelivery::accepting());
        answer_all(&mut app, OptionLetter::C);
        app.submit();

        assert_eq!(app.mode, AppMode::Profile);
        assert!(app.result.is_none());
        assert!(app.status_message.as_deref().unwrap().contains("name"));
    }

    #[test]
    fn test_submit_blocks_on_wrong_captcha() {
        let mut app = test_app(StubDelivery::accepting());
        answer_all(&mut app, OptionLetter::C);
        fill_profile(&mut app);
        app.captcha_input = "99".to_string();
        app.submit();

        assert_eq!(app.mode, AppMode::Profile);
        assert!(app.result.is_none());
        // A fresh challenge was issued and the typed answer discarded.
        assert!(app.captcha_input.is_empty());
    }

    #[test]
    fn test_successful_submission_scores_and_clears_session() {
        let mut app = test_app(StubDelivery::accepting());
        answer_all(&mut app, OptionLetter::E);
        fill_profile(&mut app);
        app.submit();

        assert_eq!(app.mode, AppMode::Results);
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.total_score, 50);
        assert_eq!(result.maturity_level, Some(MaturityLevel::Advanced));
        assert_eq!(app.persisted_responses(), None);
    }

    #[test]
    fn test_failed_delivery_preserves_answers_and_profile() {
        let mut app = test_app(StubDelivery::unreachable("connection refused"));
        answer_all(&mut app, OptionLetter::D);
        fill_profile(&mut app);
        app.submit();

        assert_eq!(app.mode, AppMode::Profile);
        assert!(app.result.is_none());
        assert_eq!(app.responses.len(), 10);
        assert_eq!(app.profile.name, "Ada");
        assert!(app.persisted_responses().is_some());
        assert!(app.status_message.as_deref().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_rejected_delivery_reports_status_code() {
        let mut app = test_app(StubDelivery::rejecting(503));
        answer_all(&mut app, OptionLetter::B);
        fill_profile(&mut app);
        app.submit();

        assert!(app.status_message.as_deref().unwrap().contains("503"));
        assert_eq!(app.mode, AppMode::Profile);
    }

    #[test]
    fn test_open_results_recomputes_from_persisted_answers() {
        let catalog = question_catalog();
        let mut seed = ResponseSet::new();
        for question in &catalog {
            seed.upsert(build_response(&catalog, question.id, OptionLetter::A).unwrap());
        }
        let store = MemoryResponseStore::with_responses(seed);
        let mut app = App::new(Box::new(store), Box::new(StubDelivery::accepting()));

        app.open_results();
        assert_eq!(app.mode, AppMode::Results);
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.total_score, 10);
        assert_eq!(result.maturity_level, Some(MaturityLevel::Foundational));
    }

    #[test]
    fn test_open_results_without_state_redirects_to_quiz() {
        let mut app = test_app(StubDelivery::accepting());
        app.open_results();

        assert_eq!(app.mode, AppMode::Quiz);
        assert!(app.result.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_retake_clears_everything() {
        let mut app = test_app(StubDelivery::accepting());
        answer_all(&mut app, OptionLetter::E);
        fill_profile(&mut app);
        app.submit();
        app.retake();

        assert_eq!(app.mode, AppMode::Quiz);
        assert!(app.responses.is_empty());
        assert!(app.result.is_none());
        assert_eq!(app.persisted_responses(), None);
    }

    #[test]
    fn test_company_size_cycles_through_bands() {
        let mut app = test_app(StubDelivery::accepting());
        assert!(app.profile.company_size.is_none());

        app.cycle_company_size(true);
        assert_eq!(app.profile.company_size, Some(CompanySize::UpTo10));

        app.cycle_company_size(false);
        assert_eq!(app.profile.company_size, Some(CompanySize::UpTo150));

        app.cycle_company_size(true);
        assert_eq!(app.profile.company_size, Some(CompanySize::UpTo10));
    }

    #[test]
    fn test_profile_field_focus_order_wraps() {
        let mut field = ProfileField::Name;
        for _ in 0..ProfileField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, ProfileField::Name);
        assert_eq!(ProfileField::Name.previous(), ProfileField::Captcha);
    }

    #[test]
    fn test_summary_text_available_after_submission() {
        let mut app = test_app(StubDelivery::accepting());
        assert!(app.summary_text().is_none());

        answer_all(&mut app, OptionLetter::E);
        fill_profile(&mut app);
        app.submit();

        let summary = app.summary_text().unwrap();
        assert!(summary.contains("Advanced Stage"));
    }
}
