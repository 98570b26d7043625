use crate::application::{App, AppMode, ProfileField};
use crate::infrastructure::{SummaryExporter, DEFAULT_SUMMARY_FILE};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Welcome => Self::handle_welcome_mode(app, key),
            AppMode::Quiz => Self::handle_quiz_mode(app, key),
            AppMode::Profile => Self::handle_profile_mode(app, key, modifiers),
            AppMode::Results => Self::handle_results_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_welcome_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.status_message = None;
                app.start_quiz();
            }
            KeyCode::Char('v') => {
                app.open_results();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            _ => {}
        }
    }

    fn handle_quiz_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            // Direct answer selection, by letter or by row number.
            KeyCode::Char(c @ 'a'..='e') => {
                app.select_answer_by_index(c as usize - 'a' as usize);
            }
            KeyCode::Char(c @ 'A'..='E') => {
                app.select_answer_by_index(c as usize - 'A' as usize);
            }
            KeyCode::Char(c @ '1'..='5') => {
                app.select_answer_by_index(c as usize - '1' as usize);
            }
            // Step through the options like a radio group.
            KeyCode::Down | KeyCode::Char('j') => {
                let next = match app.current_answer() {
                    Some(response) => (response.letter.index() + 1) % 5,
                    None => 0,
                };
                app.select_answer_by_index(next);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let previous = match app.current_answer() {
                    Some(response) => (response.letter.index() + 4) % 5,
                    None => 4,
                };
                app.select_answer_by_index(previous);
            }
            KeyCode::Left | KeyCode::Char('p') => {
                app.go_previous();
            }
            // Next is only available once the current question is answered.
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Enter => {
                if app.current_answer().is_some() {
                    app.go_next();
                } else {
                    app.status_message = Some("Choose an answer first".to_string());
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Esc => {
                app.mode = AppMode::Welcome;
            }
            _ => {}
        }
    }

    fn handle_profile_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('r') = key {
                app.regenerate_captcha();
                app.status_message = Some("New security check generated".to_string());
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                app.submit();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_previous_field();
            }
            KeyCode::Left if app.focused_field == ProfileField::CompanySize => {
                app.cycle_company_size(false);
            }
            KeyCode::Right if app.focused_field == ProfileField::CompanySize => {
                app.cycle_company_size(true);
            }
            KeyCode::Char(' ') if app.focused_field == ProfileField::CompanySize => {
                app.cycle_company_size(true);
            }
            KeyCode::Backspace => {
                if let Some(text) = app.focused_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = app.focused_text_mut() {
                    text.push(c);
                }
            }
            KeyCode::Esc => {
                // Back to the last question; answers are untouched.
                app.mode = AppMode::Quiz;
            }
            _ => {}
        }
    }

    fn handle_results_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('s') => {
                if let Some(summary) = app.summary_text() {
                    app.status_message =
                        Some(match SummaryExporter::export(&summary, DEFAULT_SUMMARY_FILE) {
                            Ok(filename) => format!("Summary saved to {}", filename),
                            Err(e) => format!("Could not save summary: {}", e),
                        });
                }
            }
            KeyCode::Char('c') => {
                if let Some(summary) = app.summary_text() {
                    app.status_message = Some(match copy_to_clipboard(&summary) {
                        Ok(()) => "Summary copied to clipboard".to_string(),
                        Err(e) => format!("Could not copy summary: {}", e),
                    });
                }
            }
            KeyCode::Char('r') => {
                app.retake();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.results_scroll += 1;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.results_scroll = app.results_scroll.saturating_sub(1);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::App;
    use crate::domain::OptionLetter;
    use crate::infrastructure::{MemoryResponseStore, StubDelivery};

    fn test_app() -> App {
        App::new(
            Box::new(MemoryResponseStore::new()),
            Box::new(StubDelivery::accepting()),
        )
    }

    #[test]
    fn test_enter_starts_quiz_from_welcome() {
        let mut app = test_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Quiz);
    }

    #[test]
    fn test_letter_keys_select_answers() {
        let mut app = test_app();
        app.start_quiz();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(app.current_answer().unwrap().letter, OptionLetter::C);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(app.current_answer().unwrap().letter, OptionLetter::A);
    }

    #[test]
    fn test_next_requires_an_answer() {
        let mut app = test_app();
        app.start_quiz();

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.current_question, 0);
        assert!(app.status_message.as_deref().unwrap().contains("answer"));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.current_question, 1);
    }

    #[test]
    fn test_arrow_keys_step_through_options() {
        let mut app = test_app();
        app.start_quiz();

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.current_answer().unwrap().letter, OptionLetter::A);

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.current_answer().unwrap().letter, OptionLetter::B);

        InputHandler::handle_key_event(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.current_answer().unwrap().letter, OptionLetter::A);
    }

    #[test]
    fn test_typing_fills_focused_profile_field() {
        let mut app = test_app();
        app.mode = AppMode::Profile;
        app.focused_field = ProfileField::Name;

        for c in "Ada".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.profile.name, "Ada");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.profile.name, "Ad");
    }

    #[test]
    fn test_company_size_field_cycles_with_arrows() {
        let mut app = test_app();
        app.mode = AppMode::Profile;
        app.focused_field = ProfileField::CompanySize;

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert!(app.profile.company_size.is_some());
    }

    #[test]
    fn test_ctrl_r_regenerates_captcha() {
        let mut app = test_app();
        app.mode = AppMode::Profile;
        app.captcha_input = "42".to_string();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(app.captcha_input.is_empty());
    }

    #[test]
    fn test_help_opens_and_returns_to_origin() {
        let mut app = test_app();
        app.start_quiz();

        InputHandler::handle_key_event(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Help);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Quiz);
    }
}
