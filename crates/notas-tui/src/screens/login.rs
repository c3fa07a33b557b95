//! Login screen: masked password field and the "Ingresar" action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notas_core::auth::LoginGate;
use notas_core::nav::Navigator;
use notas_core::notify::Notifier;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::mask;
use crate::common::render_utils::{
    InputHint, InputLine, centered_area, inner, render_button, render_hints, render_input_line,
};

#[derive(Debug, Default)]
pub struct LoginScreen {
    /// Typed password. Shown masked, never logged.
    password: String,
    gate: LoginGate,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        navigator: &mut impl Navigator,
        notifier: &mut impl Notifier,
    ) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                // Failures are reported through the notifier only.
                if self.gate.submit(&self.password, navigator, notifier).is_ok() {
                    tracing::info!("login accepted");
                }
            }
            KeyCode::Backspace => {
                self.password.pop();
            }
            KeyCode::Char('u') if ctrl => self.password.clear(),
            KeyCode::Char(c) if !ctrl => self.password.push(c),
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.password
            .extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let panel = centered_area(area, 44, 11);
        let [title_area, _, input_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(panel);

        let title = Paragraph::new(Line::from(Span::styled(
            "Login",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
            input_area,
        );
        let masked = mask(&self.password);
        render_input_line(
            frame,
            inner(input_area),
            &InputLine {
                value: &masked,
                placeholder: Some("Contraseña"),
                prompt: " ",
                prompt_color: Color::DarkGray,
                text_color: Color::White,
                placeholder_color: Color::DarkGray,
                cursor_color: Color::Blue,
            },
        );

        render_button(frame, button_area, "Ingresar", Color::Blue);

        render_hints(
            frame,
            area,
            &[
                InputHint::new("Enter", "ingresar"),
                InputHint::new("Ctrl+U", "borrar campo"),
                InputHint::new("Ctrl+C", "cerrar"),
            ],
            Color::Blue,
        );
    }
}

#[cfg(test)]
mod tests {
    use notas_core::nav::{NavRequest, Route};
    use notas_core::notify::Notice;

    use super::*;

    fn press(screen: &mut LoginScreen, code: KeyCode) -> (Vec<NavRequest>, Vec<Notice>) {
        let mut nav = Vec::new();
        let mut notices = Vec::new();
        screen.handle_key(
            KeyEvent::new(code, KeyModifiers::NONE),
            &mut nav,
            &mut notices,
        );
        (nav, notices)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_correct_password_requests_push() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "fallout76");

        let (nav, notices) = press(&mut screen, KeyCode::Enter);

        assert_eq!(nav, vec![NavRequest::Push(Route::Grades)]);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_wrong_password_notifies() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "fallout77");

        let (nav, notices) = press(&mut screen, KeyCode::Enter);

        assert!(nav.is_empty());
        assert_eq!(notices, vec![Notice::invalid_credential()]);
        assert_eq!(screen.password_len(), 9, "field keeps its text");
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let mut screen = LoginScreen::new();
        let (nav, notices) = press(&mut screen, KeyCode::Enter);
        assert!(nav.is_empty());
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_backspace_edits_password() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "fallout766");
        press(&mut screen, KeyCode::Backspace);

        let (nav, _) = press(&mut screen, KeyCode::Enter);

        assert_eq!(nav, vec![NavRequest::Push(Route::Grades)]);
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "abc");
        let mut nav: Vec<NavRequest> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();
        screen.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut nav,
            &mut notices,
        );
        assert_eq!(screen.password_len(), 0);
    }

    #[test]
    fn test_paste_drops_control_chars() {
        let mut screen = LoginScreen::new();
        screen.handle_paste("fallout76\n");

        let (nav, _) = press(&mut screen, KeyCode::Enter);

        assert_eq!(nav, vec![NavRequest::Push(Route::Grades)]);
    }
}
