//! Events consumed by the reducer.

use std::time::Instant;

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic tick, used to expire toasts.
    Tick { now: Instant },
    /// Raw terminal input.
    Terminal(Event),
}
