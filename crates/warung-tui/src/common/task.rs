//! Async task lifecycle types.
//!
//! Submits and logouts run as tokio tasks. They carry no cancellation and no
//! timeout; the reducer simply refuses to start a second task of the same
//! kind while one is active.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Submit,
    Logout,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub submit: TaskState,
    pub logout: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Submit => &self.submit,
            TaskKind::Logout => &self.logout,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Submit => &mut self.submit,
            TaskKind::Logout => &mut self.logout,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.submit.is_running() || self.logout.is_running()
    }
}
