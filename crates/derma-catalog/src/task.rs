//! Tasks, ordered task lists, and the three-period routine set

use crate::period::Period;
use serde::{Deserialize, Serialize};

/// Stable task identifier
///
/// Catalog tasks use short numeric or prefixed ids (`"5"`, `"m-oily1"`);
/// recommendation tasks use the `rec-{list}-{index}` pattern. Unique
/// within one period's list at any point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Create a task id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One actionable checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, unique within its period list
    pub id: TaskId,
    /// Human-readable instruction text
    pub name: String,
    /// Completion flag; false on (re)creation
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }
}

/// Ordered task list for one period
///
/// Order is meaningful: it is display order, and conditional insertions
/// target a position relative to a named anchor task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Create an empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from `(id, name)` catalog pairs
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(pairs.iter().map(|(id, name)| Task::new(*id, *name)).collect())
    }

    /// Append a task
    #[inline]
    pub fn push(&mut self, task: Task) {
        self.0.push(task);
    }

    /// Insert a task immediately after the anchor task
    ///
    /// If the anchor id is not present the task is appended instead, so a
    /// catalog edit can never drop a conditional task on the floor.
    pub fn insert_after(&mut self, anchor: &str, task: Task) {
        match self.position(anchor) {
            Some(pos) => self.0.insert(pos + 1, task),
            None => {
                tracing::warn!(anchor, task = %task.id, "insertion anchor missing, appending");
                self.0.push(task);
            }
        }
    }

    /// Flip the completion flag of the task with the given id
    ///
    /// Returns whether a task was found; a missing id is a no-op.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.0.iter_mut().find(|task| task.id.as_str() == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Position of a task by id
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|task| task.id.as_str() == id)
    }

    /// Task by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.0.iter().find(|task| task.id.as_str() == id)
    }

    /// Number of tasks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list has no tasks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tasks as a slice, in display order
    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    /// Iterate over tasks in display order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }
}

/// The three-period collection of task lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSet {
    /// Morning tasks
    pub morning: TaskList,
    /// Evening tasks
    pub evening: TaskList,
    /// Night tasks
    pub night: TaskList,
}

impl RoutineSet {
    /// List for a period
    #[inline]
    #[must_use]
    pub fn period(&self, period: Period) -> &TaskList {
        match period {
            Period::Morning => &self.morning,
            Period::Evening => &self.evening,
            Period::Night => &self.night,
        }
    }

    /// Mutable list for a period
    #[inline]
    #[must_use]
    pub fn period_mut(&mut self, period: Period) -> &mut TaskList {
        match period {
            Period::Morning => &mut self.morning,
            Period::Evening => &mut self.evening,
            Period::Night => &mut self.night,
        }
    }

    /// True if no task in any period is completed
    #[must_use]
    pub fn all_incomplete(&self) -> bool {
        Period::ALL
            .iter()
            .all(|p| self.period(*p).iter().all(|task| !task.completed))
    }
}
