//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` each frame. Submit and logout tasks get a uniform
//! `TaskStarted`/`TaskCompleted` lifecycle so the reducer can gate
//! re-entrant submits.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use warung_core::prefs::PrefStore;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Screen};
use crate::{render, terminal, update};

/// Target frame rate while something animates (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle; longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and restores any remembered session.
    pub fn new(store: PrefStore) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(store);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at the
                // tick cadence; other events batch renders to the next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast tick while something animates (splash, submit spinner) or
        // the user is actively typing; slow otherwise to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tasks.is_any_running()
            || self.state.screen == Screen::Splash
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events, blocking until the next tick is due unless
        // results are already waiting.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Submit {
                task,
                flow,
                request,
            } => {
                let store = self.state.store.clone();
                self.spawn_task(TaskKind::Submit, task, move || {
                    handlers::submit(flow, request, store)
                });
            }
            UiEffect::Logout { task } => {
                let store = self.state.store.clone();
                self.spawn_task(TaskKind::Logout, task, move || handlers::logout(store));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
