//! Notification presentations.
//!
//! `Notifications` is the single `Notifier` screens talk to. It wraps one of two
//! presentations, picked once at startup from the configured style:
//!
//! - `toast.rs`: transient message that expires on tick
//! - `dialog.rs`: modal box that captures keys until acknowledged

mod dialog;
mod toast;

use std::time::Instant;

use crossterm::event::KeyEvent;
pub use dialog::DialogNotifier;
use notas_core::config::Config;
use notas_core::notify::{Notice, NotificationStyle, Notifier};
use ratatui::Frame;
use ratatui::layout::Rect;
pub use toast::ToastNotifier;

#[derive(Debug, Clone)]
pub enum Notifications {
    Toast(ToastNotifier),
    Dialog(DialogNotifier),
}

impl Notifications {
    pub fn from_config(config: &Config) -> Self {
        match config.notifications.resolve() {
            NotificationStyle::Toast => {
                Notifications::Toast(ToastNotifier::new(config.toast_duration()))
            }
            NotificationStyle::Dialog | NotificationStyle::Auto => {
                Notifications::Dialog(DialogNotifier::new())
            }
        }
    }

    /// The notice currently on screen, if any.
    pub fn current(&self) -> Option<&Notice> {
        match self {
            Notifications::Toast(t) => t.current(),
            Notifications::Dialog(d) => d.current(),
        }
    }

    /// True while a notice holds keyboard focus.
    pub fn is_blocking(&self) -> bool {
        match self {
            Notifications::Toast(_) => false,
            Notifications::Dialog(d) => d.is_open(),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Notifications::Toast(t) = self {
            t.on_tick(now);
        }
    }

    /// Offers a key to the presentation. Returns `true` if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            Notifications::Toast(_) => false,
            Notifications::Dialog(d) => d.handle_key(key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Notifications::Toast(t) => t.render(frame, area),
            Notifications::Dialog(d) => d.render(frame, area),
        }
    }
}

impl Notifier for Notifications {
    fn notify(&mut self, notice: Notice) {
        match self {
            Notifications::Toast(t) => t.notify(notice),
            Notifications::Dialog(d) => d.notify(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_honors_explicit_style() {
        let toast = Notifications::from_config(&Config {
            notifications: NotificationStyle::Toast,
            ..Default::default()
        });
        assert!(matches!(toast, Notifications::Toast(_)));

        let dialog = Notifications::from_config(&Config {
            notifications: NotificationStyle::Dialog,
            ..Default::default()
        });
        assert!(matches!(dialog, Notifications::Dialog(_)));
    }

    #[test]
    fn test_notify_delegates() {
        let mut notifications = Notifications::Dialog(DialogNotifier::new());
        notifications.notify(Notice::invalid_credential());
        assert_eq!(
            notifications.current().map(|n| n.message.as_str()),
            Some("Contraseña incorrecta")
        );
    }
}
