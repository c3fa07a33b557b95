//! Transient toast: shown for a fixed time, never blocks input.

use std::time::{Duration, Instant};

use notas_core::notify::{Notice, Notifier};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;

#[derive(Debug, Clone)]
struct Toast {
    notice: Notice,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastNotifier {
    duration: Duration,
    active: Option<Toast>,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Shows `notice` as if it was raised at `now`. Replaces any visible toast.
    pub fn notify_at(&mut self, notice: Notice, now: Instant) {
        self.active = Some(Toast {
            notice,
            expires_at: now + self.duration,
        });
    }

    /// Drops the toast once its time is up.
    pub fn on_tick(&mut self, now: Instant) {
        if self
            .active
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.active = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.active.as_ref().map(|toast| &toast.notice)
    }

    /// Renders the toast near the bottom of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(notice) = self.current() else {
            return;
        };
        if area.height < 4 {
            return;
        }

        let max_width = area.width.saturating_sub(4);
        let text = truncate_with_ellipsis(&notice.message, max_width.saturating_sub(4) as usize);
        let width = (text.chars().count() as u16 + 4).min(max_width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + area.height.saturating_sub(4);
        let toast_area = Rect::new(x, y, width, 3);

        frame.render_widget(Clear, toast_area);
        let toast = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray).bg(Color::DarkGray)),
            );
        frame.render_widget(toast, toast_area);
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notify_at(notice, Instant::now());
    }
}
