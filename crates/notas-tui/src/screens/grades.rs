//! Grade screen: input row, running average and history.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notas_core::grades::GradeTracker;
use notas_core::nav::Navigator;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::render_utils::{
    InputHint, InputLine, inner, render_button, render_hints, render_input_line,
};
use crate::common::truncate_with_ellipsis;

#[derive(Debug, Default)]
pub struct GradeScreen {
    pub tracker: GradeTracker,
    /// History rows scrolled up from the newest entry (0 = follow latest).
    history_scroll: usize,
}

impl GradeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    pub fn handle_key(&mut self, key: KeyEvent, navigator: &mut impl Navigator) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => self.add(),
            KeyCode::Char('b') if ctrl => {
                self.tracker.clear_all();
                self.history_scroll = 0;
                tracing::info!("grades cleared");
            }
            KeyCode::Char('x') if ctrl => self.tracker.exit(navigator),
            KeyCode::Backspace => self.tracker.pop_char(),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageUp => self.scroll_up(5),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageDown => self.scroll_down(5),
            KeyCode::Char(c) if !ctrl => self.tracker.push_char(c),
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.tracker.push_char(c);
        }
    }

    fn add(&mut self) {
        let added = match self.tracker.add_grade() {
            Ok(grade) => {
                tracing::info!(label = %grade.label, value = grade.value, "grade added");
                true
            }
            Err(err) => {
                tracing::debug!(%err, "grade rejected");
                false
            }
        };
        if added {
            self.history_scroll = 0;
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        let max = self.tracker.len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + rows).min(max);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(rows);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let error = self.tracker.error_message();
        let error_height = if error.is_some() { 3 } else { 0 };

        let [
            error_area,
            input_area,
            button_area,
            _,
            average_area,
            history_area,
            hints_area,
        ] = Layout::vertical([
            Constraint::Length(error_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(message) = error {
            let error_box = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(error_box, error_area);
        }

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
            input_area,
        );
        render_input_line(
            frame,
            inner(input_area),
            &InputLine {
                value: self.tracker.current_input(),
                placeholder: Some("0 - 5"),
                prompt: "Nota: ",
                prompt_color: Color::Gray,
                text_color: Color::White,
                placeholder_color: Color::DarkGray,
                cursor_color: Color::Green,
            },
        );

        render_button(frame, button_area, "Agregar", Color::Green);

        let average = Paragraph::new(Line::from(Span::styled(
            format!("Promedio: {}", self.tracker.calculate_average()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(average, average_area);

        self.render_history(frame, history_area);

        render_hints(
            frame,
            hints_area,
            &[
                InputHint::new("Enter", "agregar"),
                InputHint::new("Ctrl+B", "borrar"),
                InputHint::new("Ctrl+X", "salir"),
                InputHint::new("Esc", "volver"),
            ],
            Color::Green,
        );
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Historial ");
        let body = block.inner(area);
        frame.render_widget(block, area);

        let grades = self.tracker.grades();
        let window = visible_window(grades.len(), body.height as usize, self.history_scroll);
        let lines: Vec<Line> = grades[window]
            .iter()
            .map(|grade| {
                Line::from(Span::styled(
                    truncate_with_ellipsis(&grade.display_row(), body.width as usize),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), body);
    }
}

/// Rows of a `len`-row history visible in `height` rows, `scroll` rows up from
/// the newest one.
pub fn visible_window(len: usize, height: usize, scroll: usize) -> Range<usize> {
    let end = len.saturating_sub(scroll);
    let start = end.saturating_sub(height);
    start..end
}
