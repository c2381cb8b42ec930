//! Error types for board operations.
//!
//! Drag gestures never fail from the caller's point of view, so only the
//! strict engine variants and the explicit CRUD operations surface these.

use thiserror::Error;

use crate::ids::{ColumnId, TaskId};

/// Errors that can occur while operating on a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A column with the given ID was not found.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// An edit tried to move a task to another column.
    #[error("task {task} belongs to column {from}; an edit cannot move it to {to}")]
    ColumnChangeNotAllowed {
        /// The edited task.
        task: TaskId,
        /// The column currently holding the task.
        from: ColumnId,
        /// The column the edit asked for.
        to: ColumnId,
    },

    /// A drag referenced items that are not (or no longer) on the board.
    #[error("invalid drag state: {reason}")]
    InvalidDragState {
        /// What was inconsistent.
        reason: String,
    },

    /// Board data violates the column/task membership invariants.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),
}

impl BoardError {
    pub(crate) fn invalid_drag(reason: impl Into<String>) -> Self {
        Self::InvalidDragState {
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = BoardError::TaskNotFound(TaskId::from("t1"));
        assert_eq!(err.to_string(), "task not found: t1");

        let err = BoardError::ColumnChangeNotAllowed {
            task: TaskId::from("t1"),
            from: ColumnId::from("a"),
            to: ColumnId::from("b"),
        };
        assert_eq!(
            err.to_string(),
            "task t1 belongs to column a; an edit cannot move it to b"
        );

        let err = BoardError::invalid_drag("task t9 is not in any column");
        assert!(err.to_string().starts_with("invalid drag state"));
    }
}
