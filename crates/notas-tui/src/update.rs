//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use notas_core::nav::NavRequest;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { now } => {
            app.notifications.on_tick(now);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if !app.notifications.is_blocking() {
                app.screens.current_mut().handle_paste(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // An open dialog takes every key until acknowledged
    if app.notifications.handle_key(key) {
        return vec![];
    }

    if key.code == KeyCode::Esc {
        return if app.screens.can_go_back() {
            vec![UiEffect::Navigate(NavRequest::Back)]
        } else {
            vec![]
        };
    }

    let mut requests: Vec<NavRequest> = Vec::new();
    app.screens
        .current_mut()
        .handle_key(key, &mut requests, &mut app.notifications);
    requests.into_iter().map(UiEffect::Navigate).collect()
}
