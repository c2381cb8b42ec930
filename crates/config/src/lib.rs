//! Configuration for corkboard boards.
//!
//! This crate decides how new boards are laid out and how the board store
//! reacts to inconsistent drags. Configuration is loaded from a JSON5 file,
//! then adjusted by environment variables.
//!
//! # Overview
//!
//! - [`config`]: [`BoardConfig`] and its loading logic
//! - [`column`]: Column templates with flexible parsing
//! - [`mode`]: The [`DragMode`] policy
//! - [`env`]: Environment variable overrides
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`CORKBOARD_*`)
//! 2. Local config (`./corkboard.json5` or `./corkboard.json`)
//! 3. User config (`~/.config/corkboard/config.json5` or `~/.config/corkboard/config.json`)
//! 4. Built-in defaults
//!
//! # Column Format
//!
//! ```json5
//! {
//!   "columns": [
//!     // Short format: just the label key
//!     "kanban.column.todo",
//!     // Full format with a custom name
//!     { "label_key": "kanban.column.review", "name": "Review" },
//!   ],
//!   "default_priority": "medium",
//!   "drag_mode": "lenient",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use corkboard_config::BoardConfig;
//!
//! # fn example() -> corkboard_config::Result<()> {
//! let config = BoardConfig::load()?;
//! let board = config.build_board()?;
//! println!("{board}");
//! # Ok(())
//! # }
//! ```

pub mod column;
pub mod config;
pub mod env;
pub mod error;
pub mod mode;
pub mod persistence;

pub use column::ColumnTemplate;
pub use config::{BoardConfig, DEFAULT_COLUMNS};
pub use error::{ConfigError, Result};
pub use mode::{DragMode, UnknownDragMode};
