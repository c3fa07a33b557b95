//! Application state.
//!
//! ```text
//! AppState
//! ├── screens: ScreenStack         (mounted screens, top is visible)
//! ├── notifications: Notifications (toast or dialog presentation)
//! └── should_quit: bool
//! ```
//!
//! Screens and notifications are separate fields so a screen handler can take
//! `&mut` to both at once.

use notas_core::config::Config;
use notas_core::nav::Route;

use crate::notifications::Notifications;
use crate::screens::ScreenStack;

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Mounted screens.
    pub screens: ScreenStack,
    /// Where screens send user-facing notices.
    pub notifications: Notifications,
}

impl AppState {
    /// Creates the initial state: the login screen, nothing else mounted.
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            screens: ScreenStack::new(Route::Login),
            notifications: Notifications::from_config(config),
        }
    }
}
