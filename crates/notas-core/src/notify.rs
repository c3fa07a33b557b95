//! User notification collaborator.
//!
//! Screens report failures through [`Notifier`] and never decide how the
//! message is shown. The presentation (transient toast or modal dialog) is
//! chosen once from [`NotificationStyle`].

use serde::{Deserialize, Serialize};

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Title, shown only by modal presentations.
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Notice shown after a rejected password.
    pub fn invalid_credential() -> Self {
        Self::new("Error", crate::auth::INVALID_CREDENTIAL_MESSAGE)
    }
}

/// Delivers notices to the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices (used by tests and headless callers).
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        Vec::push(self, notice);
    }
}

/// How notices are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    /// Pick by target platform.
    #[default]
    Auto,
    /// Short transient message, dismissed automatically.
    Toast,
    /// Modal box that must be acknowledged.
    Dialog,
}

impl NotificationStyle {
    /// Resolves `Auto` for the current target: toasts on Android, dialogs elsewhere.
    pub fn resolve(self) -> Self {
        match self {
            NotificationStyle::Auto => {
                if cfg!(target_os = "android") {
                    NotificationStyle::Toast
                } else {
                    NotificationStyle::Dialog
                }
            }
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationStyle::Auto => "auto",
            NotificationStyle::Toast => "toast",
            NotificationStyle::Dialog => "dialog",
        }
    }

    /// Parses a style name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(NotificationStyle::Auto),
            "toast" => Some(NotificationStyle::Toast),
            "dialog" => Some(NotificationStyle::Dialog),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_styles_resolve_to_themselves() {
        assert_eq!(NotificationStyle::Toast.resolve(), NotificationStyle::Toast);
        assert_eq!(
            NotificationStyle::Dialog.resolve(),
            NotificationStyle::Dialog
        );
    }

    #[test]
    fn test_auto_never_resolves_to_auto() {
        assert_ne!(NotificationStyle::Auto.resolve(), NotificationStyle::Auto);
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_auto_is_dialog_off_android() {
        assert_eq!(NotificationStyle::Auto.resolve(), NotificationStyle::Dialog);
    }

    #[test]
    fn test_parse_style_names() {
        assert_eq!(
            NotificationStyle::parse("Toast"),
            Some(NotificationStyle::Toast)
        );
        assert_eq!(NotificationStyle::parse("popup"), None);
        for style in [
            NotificationStyle::Auto,
            NotificationStyle::Toast,
            NotificationStyle::Dialog,
        ] {
            assert_eq!(NotificationStyle::parse(style.as_str()), Some(style));
        }
    }

    #[test]
    fn test_invalid_credential_notice_text() {
        let notice = Notice::invalid_credential();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Contraseña incorrecta");
    }
}
