//! In-memory task list store.
//!
//! The store owns an ordered sequence of [`Task`]s for the lifetime of one
//! screen. It exposes exactly four operations (`add`, `set_status`, `remove`,
//! `list`) plus a few read helpers for rendering.
//!
//! None of the mutating operations can fail: empty input and unknown ids are
//! silent no-ops. The `bool`/`Option` return values only report whether
//! anything changed; callers must not treat `false`/`None` as an error.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use tracing::debug;

/// Opaque task identifier. Stable for the task's lifetime and never reused
/// within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id generator. Ids keep increasing after removals, so a removed
/// id can never come back.
#[derive(Debug, Default)]
struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

/// Task status. Any status can be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// All statuses, in the order their controls appear on a row.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Stable identifier (`pending`, `inProgress`, `completed`).
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Label shown on the status control.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendiente",
            TaskStatus::InProgress => "En Curso",
            TaskStatus::Completed => "Completado",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "inProgress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => bail!("Unknown task status: {other}"),
        }
    }
}

/// A single to-do entry. Text is fixed at creation; only the status changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    status: TaskStatus,
}

impl Task {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

/// Ordered, in-memory task sequence.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    seq: TaskSeq,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task with the trimmed `text`.
    ///
    /// Returns `None` (and leaves the list untouched) when the trimmed text
    /// is empty.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.seq.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            status: TaskStatus::Pending,
        });
        debug!(%id, len = self.tasks.len(), "task added");
        Some(id)
    }

    /// Sets the status of the task with `id`. Unknown ids are ignored.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.status = status;
        debug!(%id, %status, "task status set");
        true
    }

    /// Removes the task with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        debug!(%id, len = self.tasks.len(), "task removed");
        true
    }

    /// Current tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                match task.status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }
}
