//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs I/O.

use warung_core::auth::{SubmitFlow, SubmitRequest};

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Run a login or register submit as an async task.
    ///
    /// The request is a snapshot taken when the user submitted; keystrokes
    /// arriving afterwards do not affect the evaluation.
    Submit {
        task: TaskId,
        flow: SubmitFlow,
        request: SubmitRequest,
    },

    /// Clear the persisted session as an async task.
    Logout { task: TaskId },
}
