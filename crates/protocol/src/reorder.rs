//! Drag-and-drop transitions.
//!
//! Two engines turn a finished drag into the next board:
//!
//! - [`Board::move_task`] reorders a task inside its column or moves it to
//!   another column, either at the end (dropped on the column) or right
//!   before the task it was dropped on.
//! - [`Board::move_column`] reorders the columns themselves.
//!
//! Drag state can race with structural edits (a column deleted mid-drag),
//! so the plain variants treat anything inconsistent as a no-op and hand
//! back an unchanged board. The `try_` variants report the inconsistency as
//! [`BoardError::InvalidDragState`] instead.

use tracing::debug;

use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::event::DragEndEvent;
use crate::ids::{ColumnId, DragItem, TaskId};

/// Moves the element at `from` so that it ends up at index `to`.
///
/// Elements in between shift by one slot towards `from`. Equal or
/// out-of-range indices leave the slice untouched.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::reorder::move_item;
///
/// let mut items = vec!["a", "b", "c", "d"];
/// move_item(&mut items, 0, 2);
/// assert_eq!(items, ["b", "c", "a", "d"]);
///
/// move_item(&mut items, 3, 0);
/// assert_eq!(items, ["d", "b", "c", "a"]);
/// ```
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

impl Board {
    /// Applies a finished task drag, treating inconsistent input as a no-op.
    ///
    /// `over` is what the task was released on: a column (append to its end)
    /// or another task (take that task's slot). `None` means the drag was
    /// cancelled.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::{Board, DragItem, TaskDraft};
    ///
    /// let board = Board::with_columns(["todo"]);
    /// let todo = board.columns()[0].id.clone();
    /// let (board, first) = board.add_task(&todo, TaskDraft::new("first"))?;
    /// let (board, second) = board.add_task(&todo, TaskDraft::new("second"))?;
    ///
    /// let board = board.move_task(&second, Some(&DragItem::Task(first.clone())));
    /// assert_eq!(board.columns()[0].task_ids, [second, first]);
    /// # Ok::<(), corkboard_protocol::BoardError>(())
    /// ```
    #[must_use]
    pub fn move_task(&self, active: &TaskId, over: Option<&DragItem>) -> Self {
        self.try_move_task(active, over).unwrap_or_else(|error| {
            debug!(%active, %error, "ignoring task drag");
            self.clone()
        })
    }

    /// Applies a finished task drag.
    ///
    /// A cancelled drag, a drop on the task's own column and a drop on itself
    /// all return the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDragState`] if `active` is not in any
    /// column, or `over` names a column or task that is not on the board.
    pub fn try_move_task(&self, active: &TaskId, over: Option<&DragItem>) -> Result<Self> {
        let Some(over) = over else {
            return Ok(self.clone());
        };

        let (source, from) = self.locate(active).ok_or_else(|| {
            BoardError::invalid_drag(format!("task {active} is not in any column"))
        })?;

        match over {
            DragItem::Column(target_id) => {
                let target = self.column_index(target_id).ok_or_else(|| {
                    BoardError::invalid_drag(format!("drop target column {target_id} does not exist"))
                })?;
                if target == source {
                    return Ok(self.clone());
                }

                let mut next = self.clone();
                next.columns[source].task_ids.remove(from);
                next.columns[target].task_ids.push(active.clone());
                next.reassign(active, target_id);
                Ok(next)
            }
            DragItem::Task(over_id) => {
                let (target, to) = self.locate(over_id).ok_or_else(|| {
                    BoardError::invalid_drag(format!("drop target task {over_id} is not in any column"))
                })?;

                let mut next = self.clone();
                if target == source {
                    move_item(&mut next.columns[source].task_ids, from, to);
                } else {
                    let target_id = next.columns[target].id.clone();
                    next.columns[source].task_ids.remove(from);
                    next.columns[target].task_ids.insert(to, active.clone());
                    next.reassign(active, &target_id);
                }
                Ok(next)
            }
        }
    }

    /// Moves `active` to the display position of `over`, treating unknown
    /// columns as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::Board;
    ///
    /// let board = Board::with_columns(["todo", "doing", "done"]);
    /// let ids: Vec<_> = board.columns().iter().map(|c| c.id.clone()).collect();
    ///
    /// let board = board.move_column(&ids[2], &ids[0]);
    /// let keys: Vec<_> = board.columns().iter().map(|c| c.label_key.as_str()).collect();
    /// assert_eq!(keys, ["done", "todo", "doing"]);
    /// ```
    #[must_use]
    pub fn move_column(&self, active: &ColumnId, over: &ColumnId) -> Self {
        self.try_move_column(active, over).unwrap_or_else(|error| {
            debug!(%active, %over, %error, "ignoring column drag");
            self.clone()
        })
    }

    /// Moves `active` to the display position of `over`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDragState`] if either column is missing.
    pub fn try_move_column(&self, active: &ColumnId, over: &ColumnId) -> Result<Self> {
        let from = self.column_index(active).ok_or_else(|| {
            BoardError::invalid_drag(format!("dragged column {active} does not exist"))
        })?;
        let to = self.column_index(over).ok_or_else(|| {
            BoardError::invalid_drag(format!("drop target column {over} does not exist"))
        })?;

        let mut next = self.clone();
        move_item(&mut next.columns, from, to);
        Ok(next)
    }

    /// Dispatches a drag-end event to the matching engine, never failing.
    #[must_use]
    pub fn apply_drag_end(&self, event: &DragEndEvent) -> Self {
        self.try_apply_drag_end(event).unwrap_or_else(|error| {
            debug!(active = %event.active, %error, "ignoring drag");
            self.clone()
        })
    }

    /// Dispatches a drag-end event to the matching engine.
    ///
    /// A column released over a task or over nothing leaves the board as is.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError::InvalidDragState`] from the engines.
    pub fn try_apply_drag_end(&self, event: &DragEndEvent) -> Result<Self> {
        match (&event.active, event.over.as_ref()) {
            (DragItem::Task(active), over) => self.try_move_task(active, over),
            (DragItem::Column(active), Some(DragItem::Column(over))) => {
                self.try_move_column(active, over)
            }
            (DragItem::Column(_), Some(DragItem::Task(_)) | None) => Ok(self.clone()),
        }
    }

    fn reassign(&mut self, task: &TaskId, column: &ColumnId) {
        if let Some(task) = self.tasks.get_mut(task) {
            task.column_id = column.clone();
        }
    }
}
