//! Top-level view: the visible screen, then notifications on top.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

/// Outer margin around the screen content.
pub const SCREEN_MARGIN: u16 = 1;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let content = Rect::new(
        area.x + SCREEN_MARGIN,
        area.y,
        area.width.saturating_sub(SCREEN_MARGIN * 2),
        area.height,
    );

    app.screens.current().render(frame, content);

    // Last, so it appears on top
    app.notifications.render(frame, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use notas_core::config::{Config, NotificationStyle};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::effects::UiEffect;
    use crate::events::UiEvent;
    use crate::update::update;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn type_and_enter(app: &mut AppState, text: &str) {
        let mut events: Vec<UiEvent> = text
            .chars()
            .map(|c| {
                UiEvent::Terminal(Event::Key(KeyEvent::new(
                    KeyCode::Char(c),
                    KeyModifiers::NONE,
                )))
            })
            .collect();
        events.push(UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        ))));
        for event in events {
            for effect in update(app, event) {
                if let UiEffect::Navigate(request) = effect {
                    app.screens.apply(request);
                }
            }
        }
    }

    fn dialog_app() -> AppState {
        AppState::new(&Config {
            notifications: NotificationStyle::Dialog,
            ..Default::default()
        })
    }

    #[test]
    fn test_login_screen_masks_password() {
        let mut app = dialog_app();
        for c in "secret".chars() {
            update(
                &mut app,
                UiEvent::Terminal(Event::Key(KeyEvent::new(
                    KeyCode::Char(c),
                    KeyModifiers::NONE,
                ))),
            );
        }

        let screen = draw(&app);

        assert!(screen.contains("Login"));
        assert!(screen.contains("Ingresar"));
        assert!(screen.contains("••••••"));
        assert!(!screen.contains("secret"));
    }

    #[test]
    fn test_grade_screen_shows_history_and_average() {
        let mut app = dialog_app();
        type_and_enter(&mut app, "fallout76");
        type_and_enter(&mut app, "5");
        type_and_enter(&mut app, "4");

        let screen = draw(&app);

        assert!(screen.contains("Promedio: 4.50"));
        assert!(screen.contains("nota 1: 5.00"));
        assert!(screen.contains("nota 2: 4.00"));
        assert!(!screen.contains("No valido"));
    }

    #[test]
    fn test_grade_screen_shows_inline_error() {
        let mut app = dialog_app();
        type_and_enter(&mut app, "fallout76");
        type_and_enter(&mut app, "abc");

        let screen = draw(&app);

        assert!(screen.contains("No valido"));
        assert!(screen.contains("Promedio: 0.00"));
        assert!(screen.contains("abc"));
    }

    #[test]
    fn test_dialog_renders_over_login() {
        let mut app = dialog_app();
        type_and_enter(&mut app, "wrong");

        let screen = draw(&app);

        assert!(screen.contains("Error"));
        assert!(screen.contains("Contraseña incorrecta"));
    }
}
