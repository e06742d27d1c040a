//! Task entity.

/// Unique identifier for a task.
///
/// Ids are assigned by the store at creation time, increase
/// monotonically, and are never reassigned or reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    done: bool,
}

impl Task {
    /// Creates a new task with the given id and title.
    ///
    /// New tasks always start not done.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }

    /// Returns the task id.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is marked done.
    #[must_use]
    pub fn done(&self) -> bool {
        self.done
    }

    /// Returns a copy of this task with the done flag inverted.
    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.done = !self.done;
        self
    }

    /// Returns a copy of this task with a replacement title.
    ///
    /// The id and done flag are unchanged.
    #[must_use]
    pub fn renamed(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
