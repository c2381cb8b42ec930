//! Task filtering.
//!
//! [`FilterCriteria`] decides whether a task is visible. Criteria combine
//! with AND; within a set-valued criterion any member matches. An empty or
//! unset criterion does not restrict anything.
//!
//! Filtering is a view-time projection: [`Board::filtered_view`] borrows the
//! board and never changes column order or membership.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Column};
use crate::ids::{ColumnId, MemberId};
use crate::task::{Priority, Task};

/// The filter applied to the board.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{ColumnId, FilterCriteria, Priority, Task, TaskDraft, TaskId};
///
/// let task = Task::from_draft(
///     TaskId::from("t1"),
///     ColumnId::from("todo"),
///     TaskDraft::new("Fix login").with_priority(Priority::High),
/// );
///
/// let criteria = FilterCriteria::default()
///     .with_search("LOGIN")
///     .with_priority(Priority::High);
/// assert!(criteria.matches(&task));
///
/// let criteria = FilterCriteria::default().with_priority(Priority::Low);
/// assert!(!criteria.matches(&task));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive text matched against title and description.
    pub search: String,
    pub priorities: BTreeSet<Priority>,
    pub column_ids: BTreeSet<ColumnId>,
    /// A task matches when any of its assignees is in this set.
    pub assignee_ids: BTreeSet<MemberId>,
    /// Inclusive lower bound on the due date.
    pub due_date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the due date.
    pub due_date_to: Option<NaiveDate>,
    /// `Some(true)` keeps only tasks with files, `Some(false)` only tasks without.
    pub has_attachments: Option<bool>,
}

impl FilterCriteria {
    /// Creates criteria that match every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column_ids.insert(column.into());
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, member: impl Into<MemberId>) -> Self {
        self.assignee_ids.insert(member.into());
        self
    }

    #[must_use]
    pub fn with_due_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.due_date_from = from;
        self.due_date_to = to;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self, wanted: bool) -> Self {
        self.has_attachments = Some(wanted);
        self
    }

    /// Returns `true` if `task` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.search_matches(task)
            && (self.priorities.is_empty() || self.priorities.contains(&task.priority))
            && (self.column_ids.is_empty() || self.column_ids.contains(&task.column_id))
            && (self.assignee_ids.is_empty()
                || task.assignees.iter().any(|a| self.assignee_ids.contains(a)))
            && self.due_date_matches(task)
            && self
                .has_attachments
                .is_none_or(|wanted| task.has_attachments() == wanted)
    }

    fn search_matches(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }

    // A task without a due date cannot satisfy a range with any bound set.
    fn due_date_matches(&self, task: &Task) -> bool {
        if self.due_date_from.is_none() && self.due_date_to.is_none() {
            return true;
        }
        let Some(due) = task.due_date else {
            return false;
        };
        self.due_date_from.is_none_or(|from| due >= from)
            && self.due_date_to.is_none_or(|to| due <= to)
    }

    /// Returns the number of criteria that currently restrict the result.
    ///
    /// The date range counts once, whichever bounds are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::{FilterCriteria, Priority};
    ///
    /// assert_eq!(FilterCriteria::default().active_count(), 0);
    ///
    /// let criteria = FilterCriteria::default()
    ///     .with_priority(Priority::High)
    ///     .with_priority(Priority::Low)
    ///     .with_attachments(false);
    /// assert_eq!(criteria.active_count(), 2);
    /// ```
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.priorities.is_empty(),
            !self.column_ids.is_empty(),
            !self.assignee_ids.is_empty(),
            self.due_date_from.is_some() || self.due_date_to.is_some(),
            self.has_attachments.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Returns `true` if any criterion restricts the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// A column as rendered under a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    /// Visible tasks, in column order.
    pub tasks: Vec<&'a Task>,
    /// Number of tasks in the column before filtering.
    pub total: usize,
}

impl ColumnView<'_> {
    /// Returns `true` if the filter hides some of this column's tasks.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.tasks.len() != self.total
    }
}

impl Board {
    /// Returns the tasks of `column` that match `criteria`, in column order.
    #[must_use]
    pub fn visible_tasks(&self, column: &ColumnId, criteria: &FilterCriteria) -> Vec<&Task> {
        self.tasks_in(column)
            .into_iter()
            .filter(|task| criteria.matches(task))
            .collect()
    }

    /// Projects every column through `criteria`, in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::{Board, FilterCriteria, Priority, TaskDraft};
    ///
    /// let board = Board::with_columns(["todo"]);
    /// let todo = board.columns()[0].id.clone();
    /// let (board, _) = board.add_task(&todo, TaskDraft::new("a").with_priority(Priority::High))?;
    /// let (board, _) = board.add_task(&todo, TaskDraft::new("b").with_priority(Priority::Low))?;
    ///
    /// let view = board.filtered_view(&FilterCriteria::default().with_priority(Priority::High));
    /// assert_eq!(view[0].tasks.len(), 1);
    /// assert_eq!(view[0].total, 2);
    /// # Ok::<(), corkboard_protocol::BoardError>(())
    /// ```
    #[must_use]
    pub fn filtered_view(&self, criteria: &FilterCriteria) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|column| ColumnView {
                column,
                tasks: column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .filter(|task| criteria.matches(task))
                    .collect(),
                total: column.task_ids.len(),
            })
            .collect()
    }
}
