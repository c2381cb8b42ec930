//! corkboard - Kanban board ordering and filtering engine.
//!
//! This crate bundles the workspace crates behind a single dependency:
//!
//! - [`protocol`]: Board model, drag engines and the task filter
//! - [`config`]: Board layout and drag mode configuration
//! - [`state`]: The [`BoardStore`] that owns the current board
//!
//! # Examples
//!
//! ```
//! use corkboard::{BoardConfig, BoardStore, DragEndEvent, DragItem, FilterCriteria, Priority};
//!
//! let config = BoardConfig::default();
//! let mut store = BoardStore::from_config(&config)?;
//! let todo = store.board().columns()[0].id.clone();
//!
//! let urgent = store.add_task(&todo, config.draft("Fix login").with_priority(Priority::High))?;
//! let later = store.add_task(&todo, config.draft("Tidy README"))?;
//!
//! // Drag the second card above the first
//! store.drag_end(DragEndEvent::new(
//!     DragItem::Task(later.clone()),
//!     Some(DragItem::Task(urgent.clone())),
//! ));
//! assert_eq!(store.board().column(&todo).unwrap().task_ids, [later, urgent.clone()]);
//!
//! store.apply_filter(FilterCriteria::default().with_priority(Priority::High));
//! assert_eq!(store.view()[0].tasks.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use corkboard_config as config;
pub use corkboard_protocol as protocol;
pub use corkboard_state as state;

pub use corkboard_config::{BoardConfig, ColumnTemplate, ConfigError, DragMode};
pub use corkboard_protocol::{
    Board, BoardError, Column, ColumnId, ColumnView, DragEndEvent, DragItem, DragStartEvent,
    FilterCriteria, MemberId, Priority, Task, TaskDraft, TaskId,
};
pub use corkboard_state::BoardStore;
