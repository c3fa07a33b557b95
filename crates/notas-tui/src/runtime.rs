//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: the reducer mutates state and returns
//! effects; this module draws frames and executes the effects.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use notas_core::config::Config;
use notas_core::nav::NavRequest;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Interval between Tick events.
    tick_rate: Duration,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    pub fn new(config: &Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config),
            tick_rate: config.tick_rate(),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(route = %self.state.screens.current().route(), "tui started");
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            let events = self.collect_events()?;
            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }

    /// Collects terminal input, blocking until input arrives or the next tick
    /// is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let time_until_tick = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            let now = Instant::now();
            events.push(UiEvent::Tick { now });
            self.last_tick = now;
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Navigate(request) => self.navigate(request),
        }
    }

    fn navigate(&mut self, request: NavRequest) {
        let from = self.state.screens.current().route();
        self.state.screens.apply(request);
        tracing::info!(
            ?request,
            %from,
            to = %self.state.screens.current().route(),
            depth = self.state.screens.depth(),
            "navigated"
        );
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        if let Err(err) = terminal::restore_terminal() {
            tracing::warn!("failed to restore terminal: {err:#}");
        }
    }
}
