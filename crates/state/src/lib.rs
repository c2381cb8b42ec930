//! Stateful holder for a corkboard board.
//!
//! [`BoardStore`] owns the current [`Board`](corkboard_protocol::Board), the
//! active filter and the item being dragged. Every change goes through the
//! store, which swaps in the new board and bumps a revision counter so that
//! renderers know when to redraw.
//!
//! # Examples
//!
//! ```
//! use corkboard_config::BoardConfig;
//! use corkboard_protocol::{DragEndEvent, DragItem, DragStartEvent};
//! use corkboard_state::BoardStore;
//!
//! let config = BoardConfig::default();
//! let mut store = BoardStore::from_config(&config)?;
//! let todo = store.board().columns()[0].id.clone();
//! let done = store.board().columns()[2].id.clone();
//!
//! let task = store.add_task(&todo, config.draft("Review pull request"))?;
//!
//! store.drag_start(DragStartEvent::new(DragItem::Task(task.clone())));
//! let changed = store.drag_end(DragEndEvent::new(
//!     DragItem::Task(task.clone()),
//!     Some(DragItem::Column(done.clone())),
//! ));
//!
//! assert!(changed);
//! assert_eq!(store.board().task(&task).unwrap().column_id, done);
//! assert!(store.active_drag().is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod store;

pub use store::BoardStore;
