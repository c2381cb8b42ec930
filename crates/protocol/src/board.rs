//! Kanban board types and structures.
//!
//! A [`Board`] is an ordered list of [`Column`]s plus a map of every
//! [`Task`] by id. The column's `task_ids` is the only record of order and
//! ownership; the map carries no order. These invariants hold for every
//! board this crate hands out:
//!
//! 1. every id listed in a column exists in the task map;
//! 2. every task id is listed in exactly one column;
//! 3. each task's `column_id` names the column that lists it;
//! 4. no column shares its id with a task.
//!
//! Boards are values. Every operation borrows the current board and returns
//! the next one, leaving the original untouched.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::ids::{ColumnId, DragItem, TaskId};
use crate::task::{Task, TaskDraft};

/// A single column (stage) of the board.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::Column;
///
/// let column = Column::new("todo", "kanban.column.todo");
/// assert!(column.is_empty());
/// assert_eq!(column.display_label(), "kanban.column.todo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    /// Name chosen by the user, if the column was renamed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Translation key used when no custom name is set.
    pub label_key: String,
    /// Tasks in this column, in display order.
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, label_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            label_key: label_key.into(),
            task_ids: Vec::new(),
        }
    }

    /// Returns the custom name when set, otherwise the label key.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::Column;
    ///
    /// let mut column = Column::new("todo", "kanban.column.todo");
    /// column.name = Some("Up next".to_string());
    /// assert_eq!(column.display_label(), "Up next");
    /// ```
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.label_key,
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` if the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns the position of `task` within this column.
    #[must_use]
    pub fn position_of(&self, task: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task)
    }
}

/// Serialized shape of a board; validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoard {
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    tasks: HashMap<TaskId, Task>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        for (key, task) in &raw.tasks {
            if key != &task.id {
                return Err(BoardError::InvariantViolation(format!(
                    "task stored under key {key} has id {}",
                    task.id
                )));
            }
        }
        let board = Self {
            columns: raw.columns,
            tasks: raw.tasks,
        };
        board.check_invariants()?;
        Ok(board)
    }
}

/// The complete board: ordered columns and the tasks they hold.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{Board, DragItem, TaskDraft};
///
/// let board = Board::with_columns(["kanban.column.todo", "kanban.column.done"]);
/// let todo = board.columns()[0].id.clone();
/// let done = board.columns()[1].id.clone();
///
/// let (board, task) = board.add_task(&todo, TaskDraft::new("Write docs"))?;
/// let board = board.move_task(&task, Some(&DragItem::Column(done.clone())));
///
/// assert_eq!(board.task(&task).unwrap().column_id, done);
/// # Ok::<(), corkboard_protocol::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBoard")]
pub struct Board {
    pub(crate) columns: Vec<Column>,
    pub(crate) tasks: HashMap<TaskId, Task>,
}

impl Board {
    /// Creates a board with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with one empty column per label key, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::Board;
    ///
    /// let board = Board::with_columns(["todo", "doing", "done"]);
    /// assert_eq!(board.columns().len(), 3);
    /// assert_eq!(board.total_tasks(), 0);
    /// ```
    #[must_use]
    pub fn with_columns<I, S>(label_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: label_keys
                .into_iter()
                .map(|key| Column::new(ColumnId::generate(), key))
                .collect(),
            tasks: HashMap::new(),
        }
    }

    /// Builds a board from existing columns and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvariantViolation`] if the parts do not form a
    /// consistent board (duplicate ids, orphaned or missing tasks, or a task
    /// whose `column_id` disagrees with the column listing it).
    pub fn from_parts(columns: Vec<Column>, tasks: impl IntoIterator<Item = Task>) -> Result<Self> {
        let mut map = HashMap::new();
        for task in tasks {
            let id = task.id.clone();
            if map.insert(id.clone(), task).is_some() {
                return Err(BoardError::InvariantViolation(format!(
                    "task {id} supplied twice"
                )));
            }
        }
        let board = Self { columns, tasks: map };
        board.check_invariants()?;
        Ok(board)
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns all tasks keyed by id. The map carries no order.
    #[must_use]
    pub fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns a column by id.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    /// Returns the display position of a column.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Returns a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns the column whose `task_ids` lists `task`.
    #[must_use]
    pub fn column_of(&self, task: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|column| column.task_ids.contains(task))
    }

    /// Returns `(column index, task index)` of `task`, searching `task_ids`.
    pub(crate) fn locate(&self, task: &TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, column)| column.position_of(task).map(|ti| (ci, ti)))
    }

    /// Returns the tasks of a column in display order.
    ///
    /// Returns an empty list for an unknown column.
    #[must_use]
    pub fn tasks_in(&self, column: &ColumnId) -> Vec<&Task> {
        self.column(column)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Classifies a raw id reported by an untyped gesture layer.
    ///
    /// Column ids are checked first; generated ids never collide, so the order
    /// only matters for hand-written ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::{Board, DragItem};
    ///
    /// let board = Board::with_columns(["todo"]);
    /// let todo = board.columns()[0].id.clone();
    /// assert_eq!(board.resolve_item(todo.as_str()), Some(DragItem::Column(todo)));
    /// assert_eq!(board.resolve_item("nope"), None);
    /// ```
    #[must_use]
    pub fn resolve_item(&self, raw: &str) -> Option<DragItem> {
        if let Some(column) = self.columns.iter().find(|c| c.id.as_str() == raw) {
            return Some(DragItem::Column(column.id.clone()));
        }
        self.tasks
            .get_key_value(&TaskId::from(raw))
            .map(|(id, _)| DragItem::Task(id.clone()))
    }

    /// Verifies the membership invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvariantViolation`] describing the first problem
    /// found.
    pub fn check_invariants(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut seen = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::InvariantViolation(format!(
                    "column {} appears twice",
                    column.id
                )));
            }
            // Drag events carry bare ids, so a shared id would be ambiguous.
            if self.tasks.contains_key(&TaskId::from(column.id.as_str())) {
                return Err(BoardError::InvariantViolation(format!(
                    "id {} names both a column and a task",
                    column.id
                )));
            }
            for id in &column.task_ids {
                let Some(task) = self.tasks.get(id) else {
                    return Err(BoardError::InvariantViolation(format!(
                        "column {} lists unknown task {id}",
                        column.id
                    )));
                };
                if !seen.insert(id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "task {id} is listed more than once"
                    )));
                }
                if task.column_id != column.id {
                    return Err(BoardError::InvariantViolation(format!(
                        "task {id} says column {} but is listed in {}",
                        task.column_id, column.id
                    )));
                }
            }
        }

        if let Some(orphan) = self.tasks.keys().find(|id| !seen.contains(id)) {
            return Err(BoardError::InvariantViolation(format!(
                "task {orphan} is not listed in any column"
            )));
        }

        Ok(())
    }

    /// Adds a task built from `draft` to the end of `column`.
    ///
    /// Returns the new board together with the generated task id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] if `column` does not exist.
    pub fn add_task(&self, column: &ColumnId, draft: TaskDraft) -> Result<(Self, TaskId)> {
        let index = self
            .column_index(column)
            .ok_or_else(|| BoardError::ColumnNotFound(column.clone()))?;

        let id = TaskId::generate();
        let task = Task::from_draft(id.clone(), column.clone(), draft);

        let mut next = self.clone();
        next.columns[index].task_ids.push(id.clone());
        next.tasks.insert(id.clone(), task);
        Ok((next, id))
    }

    /// Replaces the task stored under `task.id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if no such task exists, or
    /// [`BoardError::ColumnChangeNotAllowed`] if the edit carries a different
    /// `column_id`. Use the drag engine to move tasks.
    pub fn edit_task(&self, task: Task) -> Result<Self> {
        let current = self
            .tasks
            .get(&task.id)
            .ok_or_else(|| BoardError::TaskNotFound(task.id.clone()))?;

        if current.column_id != task.column_id {
            return Err(BoardError::ColumnChangeNotAllowed {
                task: task.id.clone(),
                from: current.column_id.clone(),
                to: task.column_id.clone(),
            });
        }

        let mut next = self.clone();
        next.tasks.insert(task.id.clone(), task);
        Ok(next)
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if no such task exists.
    pub fn delete_task(&self, id: &TaskId) -> Result<Self> {
        if !self.tasks.contains_key(id) {
            return Err(BoardError::TaskNotFound(id.clone()));
        }

        let mut next = self.clone();
        next.tasks.remove(id);
        for column in &mut next.columns {
            column.task_ids.retain(|task| task != id);
        }
        Ok(next)
    }

    /// Appends a new empty column.
    ///
    /// Returns the new board together with the generated column id.
    #[must_use]
    pub fn add_column(&self, label_key: impl Into<String>) -> (Self, ColumnId) {
        let id = ColumnId::generate();
        let mut next = self.clone();
        next.columns.push(Column::new(id.clone(), label_key));
        (next, id)
    }

    /// Sets or clears the custom name of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] if `column` does not exist.
    pub fn rename_column(&self, column: &ColumnId, name: Option<String>) -> Result<Self> {
        let index = self
            .column_index(column)
            .ok_or_else(|| BoardError::ColumnNotFound(column.clone()))?;

        let mut next = self.clone();
        next.columns[index].name = name;
        Ok(next)
    }

    /// Removes a column and every task it holds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] if `column` does not exist.
    pub fn delete_column(&self, column: &ColumnId) -> Result<Self> {
        let index = self
            .column_index(column)
            .ok_or_else(|| BoardError::ColumnNotFound(column.clone()))?;

        let mut next = self.clone();
        let removed = next.columns.remove(index);
        for id in &removed.task_ids {
            next.tasks.remove(id);
        }
        Ok(next)
    }
}

/// One line per column: `id: [task, task, ...]`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            let ids: Vec<&str> = column.task_ids.iter().map(TaskId::as_str).collect();
            writeln!(f, "{}: [{}]", column.id, ids.join(", "))?;
        }
        Ok(())
    }
}
