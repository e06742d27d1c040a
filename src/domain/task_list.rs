//! In-memory task store.

use thiserror::Error;
use tracing::debug;

use super::entities::{Task, TaskId};

/// Rejection raised by [`TaskList::add`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddError {
    /// A task with the same title already exists.
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// The authoritative, ordered sequence of tasks.
///
/// Every mutation replaces the sequence wholesale, so each logical
/// update is observable as a single old-to-new transition by the
/// rendering layer. Tasks keep insertion order; no sorting is applied.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of tasks marked done.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done()).count()
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns true if any task carries exactly this title.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title() == title)
    }

    /// Appends a new task with a fresh id and `done = false`.
    ///
    /// # Errors
    /// Returns [`AddError::DuplicateTitle`] without mutating the list
    /// if any existing task carries an equal title. Duplicates are
    /// checked here only; [`TaskList::edit`] does not check them.
    pub fn add(&mut self, title: impl Into<String>) -> Result<TaskId, AddError> {
        let title = title.into();
        if self.contains_title(&title) {
            debug!(title = %title, "rejected duplicate task title");
            return Err(AddError::DuplicateTitle(title));
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let mut next = self.tasks.clone();
        next.push(Task::new(id, title));
        self.tasks = next;

        debug!(id = %id, count = self.tasks.len(), "task added");
        Ok(id)
    }

    /// Inverts the done flag of the task with the given id.
    ///
    /// An absent id is a silent no-op.
    pub fn toggle_done(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            return;
        }

        self.tasks = self
            .tasks
            .iter()
            .cloned()
            .map(|task| if task.id() == id { task.toggled() } else { task })
            .collect();

        debug!(id = %id, "task toggled");
    }

    /// Removes the task with the given id.
    ///
    /// An absent id is a silent no-op. Asking the user for
    /// confirmation is the caller's concern; this method removes
    /// unconditionally.
    pub fn remove(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            return;
        }

        self.tasks = self
            .tasks
            .iter()
            .cloned()
            .filter(|task| task.id() != id)
            .collect();

        debug!(id = %id, count = self.tasks.len(), "task removed");
    }

    /// Replaces the title of the task with the given id.
    ///
    /// An absent id is a silent no-op. Deliberately does not reject
    /// duplicate titles the way [`TaskList::add`] does.
    pub fn edit(&mut self, id: TaskId, new_title: impl Into<String>) {
        if self.get(id).is_none() {
            return;
        }
        let new_title = new_title.into();

        self.tasks = self
            .tasks
            .iter()
            .cloned()
            .map(|task| {
                if task.id() == id {
                    task.renamed(new_title.clone())
                } else {
                    task
                }
            })
            .collect();

        debug!(id = %id, "task edited");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn list_with(titles: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for title in titles {
            list.add(*title).unwrap();
        }
        list
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut list = TaskList::new();

        let first = list.add("Buy milk").unwrap();
        let second = list.add("Walk the dog").unwrap();

        assert_eq!(list.len(), 2);
        assert_ne!(first, second);
        assert_eq!(list.tasks()[0].title(), "Buy milk");
        assert_eq!(list.tasks()[1].title(), "Walk the dog");
        assert!(list.tasks().iter().all(|task| !task.done()));
    }

    #[test]
    fn test_add_duplicate_title_leaves_list_unchanged() {
        let mut list = list_with(&["Buy milk"]);
        let before = list.tasks().to_vec();

        let result = list.add("Buy milk");

        assert_eq!(
            result,
            Err(AddError::DuplicateTitle("Buy milk".to_string()))
        );
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_add_after_remove_does_not_reuse_ids() {
        let mut list = TaskList::new();
        let first = list.add("Buy milk").unwrap();
        list.remove(first);

        let second = list.add("Buy milk").unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut list = list_with(&["Buy milk"]);
        let id = list.tasks()[0].id();

        list.toggle_done(id);
        assert!(list.get(id).unwrap().done());

        list.toggle_done(id);
        assert!(!list.get(id).unwrap().done());
    }

    #[test]
    fn test_toggle_only_touches_matching_task() {
        let mut list = list_with(&["Buy milk", "Walk the dog"]);
        let id = list.tasks()[0].id();

        list.toggle_done(id);

        assert!(list.tasks()[0].done());
        assert!(!list.tasks()[1].done());
    }

    #[test]
    fn test_edit_replaces_only_the_title() {
        let mut list = list_with(&["Buy milk", "Walk the dog"]);
        let id = list.tasks()[0].id();
        list.toggle_done(id);

        list.edit(id, "Buy oat milk");

        let edited = list.get(id).unwrap();
        assert_eq!(edited.title(), "Buy oat milk");
        assert!(edited.done());
        assert_eq!(list.tasks()[1].title(), "Walk the dog");
    }

    #[test]
    fn test_edit_into_duplicate_title_is_permitted() {
        // Asymmetric with add on purpose.
        let mut list = list_with(&["Buy milk", "Walk the dog"]);
        let id = list.tasks()[1].id();

        list.edit(id, "Buy milk");

        assert_eq!(list.tasks()[0].title(), "Buy milk");
        assert_eq!(list.tasks()[1].title(), "Buy milk");
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let mut list = list_with(&["Buy milk", "Walk the dog"]);
        let id = list.tasks()[0].id();

        list.remove(id);

        assert_eq!(list.len(), 1);
        assert!(list.get(id).is_none());
        assert_eq!(list.tasks()[0].title(), "Walk the dog");
    }

    #[test_case(TaskList::toggle_done; "toggle")]
    #[test_case(TaskList::remove; "remove")]
    fn test_absent_id_is_a_no_op(op: fn(&mut TaskList, TaskId)) {
        let mut list = list_with(&["Buy milk"]);
        let before = list.tasks().to_vec();

        op(&mut list, TaskId(999));

        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_edit_absent_id_is_a_no_op() {
        let mut list = list_with(&["Buy milk"]);
        let before = list.tasks().to_vec();

        list.edit(TaskId(999), "Nothing");

        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_done_count() {
        let mut list = list_with(&["a", "b", "c"]);
        list.toggle_done(list.tasks()[0].id());
        list.toggle_done(list.tasks()[2].id());

        assert_eq!(list.done_count(), 2);
    }

    #[test]
    fn test_full_scenario() {
        let mut list = TaskList::new();

        let id = list.add("Buy milk").unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.get(id).unwrap().done());

        assert!(list.add("Buy milk").is_err());
        assert_eq!(list.len(), 1);

        list.toggle_done(id);
        assert!(list.get(id).unwrap().done());

        list.edit(id, "Buy oat milk");
        assert_eq!(list.get(id).unwrap().title(), "Buy oat milk");
        assert!(list.get(id).unwrap().done());

        list.remove(id);
        assert!(list.is_empty());
    }
}
