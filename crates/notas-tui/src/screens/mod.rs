//! Screens and the screen stack.
//!
//! Each stack entry owns its screen state. Mounting a route builds a fresh
//! screen; popping or replacing an entry drops it, which is how grade data is
//! discarded when the user leaves the grade screen.
//!
//! - `login.rs`: password gate
//! - `grades.rs`: grade entry, average and history

pub mod grades;
pub mod login;

use crossterm::event::KeyEvent;
pub use grades::GradeScreen;
pub use login::LoginScreen;
use notas_core::nav::{NavRequest, Navigator, Route};
use notas_core::notify::Notifier;
use ratatui::Frame;
use ratatui::layout::Rect;

#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Grades(GradeScreen),
}

impl Screen {
    /// Builds a fresh screen for `route`.
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Login => Screen::Login(LoginScreen::new()),
            Route::Grades => Screen::Grades(GradeScreen::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Grades(_) => Route::Grades,
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        navigator: &mut impl Navigator,
        notifier: &mut impl Notifier,
    ) {
        match self {
            Screen::Login(s) => s.handle_key(key, navigator, notifier),
            Screen::Grades(s) => s.handle_key(key, navigator),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self {
            Screen::Login(s) => s.handle_paste(text),
            Screen::Grades(s) => s.handle_paste(text),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Screen::Login(s) => s.render(frame, area),
            Screen::Grades(s) => s.render(frame, area),
        }
    }

    pub fn as_grades(&self) -> Option<&GradeScreen> {
        match self {
            Screen::Grades(s) => Some(s),
            Screen::Login(_) => None,
        }
    }
}

/// Navigation stack of mounted screens. Never empty.
///
/// `replace` only swaps the top entry, so every login then exit cycle leaves
/// one more login screen below (`[Login, Login, Login, ...]`). Esc walks back
/// through them.
#[derive(Debug)]
pub struct ScreenStack {
    top: Screen,
    below: Vec<Screen>,
}

impl ScreenStack {
    pub fn new(root: Route) -> Self {
        Self {
            top: Screen::mount(root),
            below: Vec::new(),
        }
    }

    pub fn current(&self) -> &Screen {
        &self.top
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        &mut self.top
    }

    /// Number of mounted screens.
    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.below.is_empty()
    }

    /// Routes from bottom to top.
    pub fn routes(&self) -> Vec<Route> {
        self.below
            .iter()
            .chain(std::iter::once(&self.top))
            .map(Screen::route)
            .collect()
    }

    /// Pops the top screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        match self.below.pop() {
            Some(previous) => {
                self.top = previous;
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(route) => self.push(route),
            NavRequest::Replace(route) => self.replace(route),
            NavRequest::Back => {
                self.back();
            }
        }
    }
}

impl Navigator for ScreenStack {
    fn push(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.top, Screen::mount(route));
        self.below.push(previous);
    }

    fn replace(&mut self, route: Route) {
        self.top = Screen::mount(route);
    }
}
