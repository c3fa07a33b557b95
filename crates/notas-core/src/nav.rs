//! Screen routes and the navigation collaborator.
//!
//! Screens never own the navigation stack. They receive a `&mut impl Navigator`
//! and ask it to `push` or `replace`; whoever owns the stack decides what that
//! means for mounted screens.

use std::fmt;

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Password gate (`/`).
    Login,
    /// Grade tracker (`/grades`).
    Grades,
}

impl Route {
    /// Router path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Grades => "/grades",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A navigation request emitted by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Add an entry on top, keeping the current one reachable with back.
    Push(Route),
    /// Swap the current entry; back no longer returns to it.
    Replace(Route),
    /// Return to the previous entry, if any.
    Back,
}

/// Screen-stack router.
pub trait Navigator {
    fn push(&mut self, route: Route);
    fn replace(&mut self, route: Route);
}

/// Records requests instead of applying them.
///
/// The TUI reducer hands one of these to screen handlers and turns the recorded
/// requests into effects once the handler has returned.
impl Navigator for Vec<NavRequest> {
    fn push(&mut self, route: Route) {
        Vec::push(self, NavRequest::Push(route));
    }

    fn replace(&mut self, route: Route) {
        Vec::push(self, NavRequest::Replace(route));
    }
}
