use serde::Deserialize;

use crate::task::Task;

#[derive(Debug, Clone, Deserialize)]
pub struct RawList {
    pub id: u64,
    pub title: String,
}

/// A list, optionally enriched with its tasks.
///
/// `tasks` is `None` until the per-list fetch has completed; after that it
/// holds every task the API returned for the list, in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub id: u64,
    pub title: String,
    pub tasks: Option<Vec<Task>>,
}

impl From<RawList> for TaskList {
    fn from(raw: RawList) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            tasks: None,
        }
    }
}

impl TaskList {
    // Empty until fetched.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_deref().unwrap_or_default()
    }

    pub fn task_count(&self) -> usize {
        self.tasks().len()
    }
}
