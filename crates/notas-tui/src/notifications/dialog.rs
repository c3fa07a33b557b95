//! Modal dialog: stays up and swallows keys until acknowledged.

use crossterm::event::{KeyCode, KeyEvent};
use notas_core::notify::{Notice, Notifier};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::common::render_utils::{
    InputHint, centered_area, inner, render_hints, render_popup_container,
};

#[derive(Debug, Clone, Default)]
pub struct DialogNotifier {
    open: Option<Notice>,
}

impl DialogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Handles a key while the dialog is open.
    ///
    /// Returns `false` when no dialog is open so the key can go elsewhere.
    /// Enter, Esc and Space acknowledge; every other key is swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.open.is_none() {
            return false;
        }
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.open = None;
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(notice) = &self.open else {
            return;
        };

        let width = (notice.message.chars().count() as u16 + 8).max(30);
        let popup = centered_area(area, width, 6);
        render_popup_container(frame, popup, &notice.title, Color::Red);

        let body = inner(popup);
        let message = Paragraph::new(Line::from(notice.message.as_str()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        frame.render_widget(message, Rect::new(body.x, body.y + 1, body.width, 1));

        render_hints(frame, body, &[InputHint::new("Enter", "OK")], Color::Red);
    }
}

impl Notifier for DialogNotifier {
    fn notify(&mut self, notice: Notice) {
        self.open = Some(notice);
    }
}
