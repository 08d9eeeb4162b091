//! UI event types.
//!
//! All external inputs (terminal, async task results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! Async work uses a uniform lifecycle: the runtime emits
//! `UiEvent::TaskStarted` once a task is spawned and `UiEvent::TaskCompleted`
//! with the result event when it finishes. The reducer is the only place that
//! mutates `TaskState`.

use crossterm::event::Event as CrosstermEvent;
use warung_core::auth::{SubmitFlow, SubmitOutcome};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives the splash dwell and spinner animation.
    Tick,
    /// Raw terminal input.
    Terminal(CrosstermEvent),
    /// Async auth results.
    Auth(AuthUiEvent),
    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `completed.result` is re-dispatched.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}

/// Results of async auth operations.
///
/// Store failures arrive as rendered error strings; the reducer logs them
/// and resolves the loading state. Field validation failures travel inside
/// the `SubmitOutcome`.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// A login or register submit finished.
    SubmitResult {
        flow: SubmitFlow,
        result: Result<SubmitOutcome, String>,
    },
    /// A logout finished.
    LogoutResult { result: Result<(), String> },
}
