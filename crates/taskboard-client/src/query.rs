//! Task List Query
//!
//! Client-side search, status filter and due-date sort over the fetched
//! task list, recomputed whenever any input changes.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::{Task, TaskStatus};

/// Due-date sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Search, filter and sort settings of the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Case-insensitive substring of title or description
    pub search: String,
    /// `None` shows every status
    pub status: Option<TaskStatus>,
    pub order: SortOrder,
}

impl TaskQuery {
    /// Set the status filter from a select value; `""` (or anything that is
    /// not a status) clears it
    pub fn set_status_filter(&mut self, value: &str) {
        self.status = value.parse().ok();
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }

    /// Matching tasks in due-date order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut visible: Vec<Task> = tasks.iter().filter(|task| self.matches(task)).cloned().collect();
        visible.sort_by(|a, b| match self.order {
            SortOrder::Asc => compare_due(a, b),
            SortOrder::Desc => compare_due(b, a),
        });
        visible
    }
}

/// Total order on due date: undated first, ties broken by id
fn compare_due(a: &Task, b: &Task) -> Ordering {
    a.due().cmp(&b.due()).then_with(|| a.id.cmp(&b.id))
}

/// Drop the task with `id` from `tasks`, returning whether it was present
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}
