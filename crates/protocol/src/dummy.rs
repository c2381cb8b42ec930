//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample board with realistic tasks spread across
//! three columns. Every id (tasks, columns, checklist items, attachments)
//! is fixed, so two calls return equal boards.
//!
//! # Examples
//!
//! ```
//! use corkboard_protocol::dummy::dummy_board;
//!
//! let board = dummy_board();
//! assert_eq!(board.total_tasks(), 7);
//! assert!(board.check_invariants().is_ok());
//! ```

use chrono::NaiveDate;

use crate::board::{Board, Column};
use crate::ids::{ColumnId, TaskId};
use crate::task::{Attachment, ChecklistItem, Priority, Task, TaskDraft};

/// Column id of the "To do" column.
pub const TODO: &str = "column-todo";
/// Column id of the "In progress" column.
pub const IN_PROGRESS: &str = "column-in-progress";
/// Column id of the "Done" column.
pub const DONE: &str = "column-done";

/// Appends tasks to a column while keeping the board consistent.
struct ColumnBuilder<'a> {
    board: &'a mut Board,
    column: ColumnId,
}

impl ColumnBuilder<'_> {
    fn task(self, id: &str, draft: TaskDraft) -> Self {
        let id = TaskId::from(id);
        let task = Task::from_draft(id.clone(), self.column.clone(), draft);
        if let Some(column) = self.board.columns.iter_mut().find(|c| c.id == self.column) {
            column.task_ids.push(id.clone());
        }
        self.board.tasks.insert(id, task);
        self
    }
}

fn column<'a>(board: &'a mut Board, id: &str, label_key: &str) -> ColumnBuilder<'a> {
    board.columns.push(Column::new(id, label_key));
    ColumnBuilder {
        board,
        column: ColumnId::from(id),
    }
}

fn date(month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, month, day)
}

/// Generates a sample board with realistic tasks.
///
/// - **To do**: 3 tasks, one high priority with a due date
/// - **In progress**: 2 tasks, one with a half-done checklist
/// - **Done**: 2 tasks, one with an attachment
///
/// # Examples
///
/// ```
/// use corkboard_protocol::dummy::{dummy_board, TODO};
/// use corkboard_protocol::ColumnId;
///
/// let board = dummy_board();
/// assert_eq!(board.column(&ColumnId::from(TODO)).unwrap().len(), 3);
/// ```
#[must_use]
pub fn dummy_board() -> Board {
    let mut board = Board::new();

    column(&mut board, TODO, "kanban.column.todo")
        .task(
            "task-1",
            TaskDraft {
                due_date: date(3, 14),
                ..TaskDraft::new("Set up CI pipeline")
                    .with_description("Run tests and lints on every pull request")
                    .with_priority(Priority::High)
                    .with_assignee("alice")
            },
        )
        .task(
            "task-2",
            TaskDraft::new("Write API documentation")
                .with_description("Document every public endpoint with examples")
                .with_priority(Priority::Low)
                .with_assignee("bob"),
        )
        .task(
            "task-3",
            TaskDraft::new("Add configuration file support")
                .with_description("Load board templates from a JSON5 file"),
        );

    column(&mut board, IN_PROGRESS, "kanban.column.in_progress")
        .task(
            "task-4",
            TaskDraft {
                due_date: date(3, 1),
                ..TaskDraft::new("Implement drag and drop")
                    .with_description("Reorder cards within and across columns")
                    .with_priority(Priority::High)
                    .with_assignee("alice")
                    .with_assignee("carol")
                    .with_checklist_item(
                        ChecklistItem::new("Same-column reorder")
                            .with_id("item-1")
                            .checked(),
                    )
                    .with_checklist_item(
                        ChecklistItem::new("Cross-column move").with_id("item-2"),
                    )
            },
        )
        .task(
            "task-5",
            TaskDraft::new("Filter panel")
                .with_description("Search, priority, assignee and due date filters")
                .with_manual_progress(30)
                .with_assignee("bob"),
        );

    column(&mut board, DONE, "kanban.column.done")
        .task(
            "task-6",
            TaskDraft::new("Project scaffolding")
                .with_description("Workspace layout and shared types")
                .with_priority(Priority::Low)
                .with_manual_progress(100),
        )
        .task(
            "task-7",
            TaskDraft {
                due_date: date(2, 10),
                ..TaskDraft::new("Design board mockups")
                    .with_description("Wireframes for the board and card detail views")
                    .with_assignee("carol")
                    .with_attachment(
                        Attachment::new(
                            "board-mockup.png",
                            "https://files.example.com/board-mockup.png",
                            "image/png",
                        )
                        .with_id("file-1"),
                    )
            },
        );

    debug_assert!(board.check_invariants().is_ok());
    board
}
