use crate::application::{App, AppMode, ProfileField};
use crate::domain::Category;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.mode {
        AppMode::Welcome => render_welcome(f, chunks[1]),
        AppMode::Quiz => render_quiz(f, app, chunks[1]),
        AppMode::Profile => render_profile(f, app, chunks[1]),
        AppMode::Results => render_results(f, app, chunks[1]),
        // Help overlays whichever screen it was opened from.
        AppMode::Help => match app.help_return {
            AppMode::Quiz => render_quiz(f, app, chunks[1]),
            AppMode::Profile => render_profile(f, app, chunks[1]),
            AppMode::Results => render_results(f, app, chunks[1]),
            _ => render_welcome(f, chunks[1]),
        },
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let progress = match app.mode {
        AppMode::Quiz => format!(
            " | Question {} of {}",
            app.current_question + 1,
            app.question_count()
        ),
        _ => String::new(),
    };
    let header = Paragraph::new(format!(
        "csmaturity - Customer Success Maturity Benchmark{}",
        progress
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Customer Success Benchmarking Quiz",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Answer ten quick questions about your customer success practices"),
        Line::from("to find out where your team sits on the maturity scale:"),
        Line::from(""),
        Line::from("  Foundational (10-20)  Developing (21-30)"),
        Line::from("  Established (31-40)   Advanced (41-50)"),
        Line::from(""),
        Line::from("Progress is saved after every answer, so you can quit and resume."),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: start | v: view previous results | F1/?: help | q: quit",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let welcome = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Welcome"))
        .wrap(Wrap { trim: false });
    f.render_widget(welcome, area);
}

fn render_quiz(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let answered = app.responses.len();
    let ratio = answered as f64 / app.question_count() as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{} of {} answered", answered, app.question_count()));
    f.render_widget(gauge, chunks[0]);

    let question = app.current_question_data();
    let selected = app.current_answer().map(|r| r.letter);

    let mut lines = vec![
        Line::from(Span::styled(
            question.category.label(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for option in &question.options {
        let is_selected = selected == Some(option.letter);
        let marker = if is_selected { "(x)" } else { "( )" };
        let style = if is_selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {} {}. {}", marker, option.letter, option.text),
            style,
        )));
        lines.push(Line::from(""));
    }

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question {}", question.id)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, chunks[1]);
}

fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from("Almost done! Enter your details to receive your results."),
        Line::from(""),
    ];

    for field in ProfileField::ALL {
        let value = match field {
            ProfileField::Name => app.profile.name.clone(),
            ProfileField::Email => app.profile.email.clone(),
            ProfileField::CompanyName => app.profile.company_name.clone(),
            ProfileField::CompanySize => app
                .profile
                .company_size
                .map(|size| size.label().to_string())
                .unwrap_or_else(|| "<left/right to choose>".to_string()),
            ProfileField::Role => app.profile.role.clone(),
            ProfileField::Captcha => {
                format!("{} {}", app.captcha.prompt(), app.captcha_input)
            }
        };
        let focused = app.focused_field == field;
        let style = if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("  {:<16} {}{}", format!("{}:", field.label()), value, cursor),
            style,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Your information is only used to send your benchmarking results.",
        Style::default().fg(Color::DarkGray),
    )));

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Your Information"))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = &app.result else {
        let empty = Paragraph::new("No results available yet.")
            .block(Block::default().borders(Borders::ALL).title("Results"));
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}  ({} / 50 points)", result.level_label(), result.total_score),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(level) = result.maturity_level {
        let insight = crate::domain::insight_for(level);
        lines.push(Line::from(insight.description));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Category breakdown",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for category in Category::ALL {
            let max = crate::domain::category_max(&app.catalog, category);
            lines.push(Line::from(format!(
                "  {:<20} {:>2} / {}",
                category.label(),
                result.category_scores.get(category),
                max
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Priority actions",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (index, action) in insight.priority_actions.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {}", index + 1, action)));
        }
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.results_scroll)
        .collect();

    let results = Paragraph::new(visible)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Results | s: save summary | c: copy | r: retake"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(results, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.mode {
            AppMode::Welcome => "Enter: start | v: previous results | F1/?: help | q: quit".to_string(),
            AppMode::Quiz => {
                "a-e/1-5: answer | up/down: change answer | left/right: previous/next | F1/?: help | Esc: back"
                    .to_string()
            }
            AppMode::Profile => {
                "Tab/arrows: move | type to fill | Ctrl+R: new security check | Enter: submit | Esc: back"
                    .to_string()
            }
            AppMode::Results => {
                "s: save summary | c: copy to clipboard | r: retake | up/down: scroll | q: quit".to_string()
            }
            AppMode::Help => "up/down/jk: scroll | PgUp/PgDn: fast scroll | Esc/q: close help".to_string(),
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Welcome => Style::default(),
            AppMode::Quiz => Style::default().fg(Color::Green),
            AppMode::Profile => Style::default().fg(Color::Yellow),
            AppMode::Results => Style::default().fg(Color::Cyan),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "csmaturity Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"CUSTOMER SUCCESS MATURITY BENCHMARK

=== WHAT THIS IS ===
Ten multiple-choice questions across five areas of customer success
practice. Each answer is worth 1 (least mature) to 5 (most mature)
points, for a total between 10 and 50.

=== MATURITY LEVELS ===
Foundational Stage    10-20 points
Developing Stage      21-30 points
Established Stage     31-40 points
Advanced Stage        41-50 points

=== CATEGORIES ===
Onboarding Process    questions 1-2
Customer Outcomes     questions 3-5
QBRs                  questions 6-7
AI Utilization        questions 8-9
Overall CS Strategy   question 10

=== ANSWERING QUESTIONS ===
a-e or 1-5      Choose an answer for the current question
Up/Down         Step through the answers for the current question
Left or p       Go to the previous question
Right or n      Go to the next question (needs an answer first)
Esc             Back to the welcome screen

You can revisit any answered question and change your answer; the
latest choice replaces the earlier one. Progress is written to
csmaturity-session.json after every answer, so quitting and
restarting resumes where you left off.

=== SUBMITTING ===
After the last question you are asked for your name, email, company,
company size, and (optionally) role, plus a small arithmetic security
check. Tab or the arrow keys move between fields; Enter submits.
Submission posts your answers and scores to the configured webhook
(CSMATURITY_WEBHOOK_URL overrides the default endpoint). If the
submission fails your answers are kept so you can retry.

=== RESULTS ===
s               Save the plain-text summary to csmaturity-summary.txt
c               Copy the summary to the clipboard
r               Retake the assessment (clears the saved session)

=== HELP NAVIGATION ===
Up/Down or j/k  Scroll one line
Page Up/Down    Scroll five lines
Home            Jump to the top
Esc/F1/?/q      Close this help window"#
        .to_string()
}
