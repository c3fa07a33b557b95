//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never touches the screen stack directly: screens record
//! navigation requests, and the runtime applies them after the reducer
//! returns.

use notas_core::nav::NavRequest;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Apply a navigation request to the screen stack.
    Navigate(NavRequest),
}
