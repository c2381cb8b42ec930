//! Shared board types and transitions for corkboard.
//!
//! This crate holds the Kanban board model and the pure functions that move
//! it from one state to the next.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`ids`]: Identifier newtypes and the [`DragItem`] tag
//! - [`task`]: The task card, its priority, checklist and attachments
//! - [`board`]: Columns, the [`Board`] itself and its CRUD operations
//! - [`reorder`]: The task move engine and the column reorder engine
//! - [`filter`]: The filter predicate and the filtered column view
//! - [`event`]: Drag events reported by the gesture layer
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! Creating a board, adding a task and dragging it to another column:
//!
//! ```
//! use corkboard_protocol::{Board, DragEndEvent, DragItem, FilterCriteria, Priority, TaskDraft};
//!
//! let board = Board::with_columns(["kanban.column.todo", "kanban.column.done"]);
//! let todo = board.columns()[0].id.clone();
//! let done = board.columns()[1].id.clone();
//!
//! let (board, task) = board.add_task(&todo, TaskDraft::new("Ship it").with_priority(Priority::High))?;
//!
//! // Every transition returns a new board
//! let board = board.apply_drag_end(&DragEndEvent::new(
//!     DragItem::Task(task.clone()),
//!     Some(DragItem::Column(done.clone())),
//! ));
//! assert_eq!(board.column(&done).unwrap().task_ids, [task]);
//!
//! // Filtering is a read-only projection
//! let view = board.filtered_view(&FilterCriteria::default().with_priority(Priority::Low));
//! assert!(view.iter().all(|column| column.tasks.is_empty()));
//! # Ok::<(), corkboard_protocol::BoardError>(())
//! ```

pub mod board;
pub mod dummy;
pub mod error;
pub mod event;
pub mod filter;
pub mod ids;
pub mod reorder;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column};
pub use error::{BoardError, Result};
pub use event::{DragEndEvent, DragStartEvent};
pub use filter::{ColumnView, FilterCriteria};
pub use ids::{AttachmentId, ChecklistItemId, ColumnId, DragItem, MemberId, TaskId};
pub use reorder::move_item;
pub use task::{Attachment, ChecklistItem, Priority, Task, TaskDraft, UnknownPriority};
