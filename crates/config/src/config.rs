//! Core configuration struct and loading logic.
//!
//! This module provides [`BoardConfig`], which describes how new boards are
//! laid out and how the store treats drags.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use corkboard_protocol::{Board, Column, ColumnId, Priority, TaskDraft};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::column::ColumnTemplate;
use crate::env::apply_process_env;
use crate::error::{ConfigError, Result};
use crate::mode::DragMode;
use crate::persistence::{
    default_user_config_path, find_config_file, read_config_file, user_config_path_in,
    write_config_file,
};

/// Label keys of the columns every default board starts with.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "kanban.column.todo",
    "kanban.column.in_progress",
    "kanban.column.done",
];

/// Board configuration.
///
/// # Examples
///
/// ```
/// use corkboard_config::{BoardConfig, ColumnTemplate, DragMode};
/// use corkboard_protocol::Priority;
///
/// // The default layout has three columns
/// let config = BoardConfig::default();
/// assert_eq!(config.columns.len(), 3);
///
/// // Custom layout
/// let config = BoardConfig {
///     columns: vec![
///         ColumnTemplate::new("kanban.column.backlog"),
///         ColumnTemplate::named("kanban.column.review", "Review"),
///     ],
///     default_priority: Priority::Low,
///     drag_mode: DragMode::Strict,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns created on a new board, left to right.
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnTemplate>,

    /// Priority given to tasks created through [`BoardConfig::draft`].
    #[serde(default)]
    pub default_priority: Priority,

    /// How drags referencing missing items are reported.
    #[serde(default)]
    pub drag_mode: DragMode,
}

fn default_columns() -> Vec<ColumnTemplate> {
    DEFAULT_COLUMNS.iter().copied().map(ColumnTemplate::new).collect()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            default_priority: Priority::default(),
            drag_mode: DragMode::default(),
        }
    }
}

impl BoardConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./corkboard.json5` or `./corkboard.json`
    /// 2. User: `~/.config/corkboard/config.json5` or `~/.config/corkboard/config.json`
    ///
    /// If no configuration file is found, the defaults are used. Environment
    /// overrides (see [`crate::env`]) are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment override is invalid, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use corkboard_config::BoardConfig;
    ///
    /// # fn example() -> corkboard_config::Result<()> {
    /// let config = BoardConfig::load()?;
    /// println!("{} columns, {} drags", config.columns.len(), config.drag_mode);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading board config");
                read_config_file(&path)?
            }
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        apply_process_env(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it fails
    /// validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: BoardConfig = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Saves the configuration as the user config file, where [`BoardConfig::load`]
    /// finds it when no local file exists. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if the platform has no
    /// configuration directory, or an error if the file cannot be written.
    pub fn save_user(&self) -> Result<PathBuf> {
        let path = default_user_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration as the user config file inside `user_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_user_in(&self, user_dir: &Path) -> Result<PathBuf> {
        let path = user_config_path_in(user_dir);
        self.save_to(&path)?;
        Ok(path)
    }

    /// Validates the column templates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColumns`] if there are no columns, a
    /// label key is blank, or two columns share a label key.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_config::{BoardConfig, ColumnTemplate};
    ///
    /// let mut config = BoardConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.columns.push(ColumnTemplate::new("kanban.column.todo"));
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ConfigError::InvalidColumns {
                reason: "at least one column is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            let key = column.label_key().trim();
            if key.is_empty() {
                return Err(ConfigError::InvalidColumns {
                    reason: "label key cannot be empty".to_string(),
                });
            }
            if !seen.insert(key) {
                return Err(ConfigError::InvalidColumns {
                    reason: format!("label key '{key}' is used by more than one column"),
                });
            }
        }
        Ok(())
    }

    /// Creates an empty board laid out according to [`BoardConfig::columns`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColumns`] if the configuration does not
    /// validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_config::{BoardConfig, ColumnTemplate};
    ///
    /// let config = BoardConfig {
    ///     columns: vec![
    ///         ColumnTemplate::new("kanban.column.todo"),
    ///         ColumnTemplate::named("kanban.column.review", "Review"),
    ///     ],
    ///     ..Default::default()
    /// };
    ///
    /// let board = config.build_board()?;
    /// let labels: Vec<_> = board.columns().iter().map(|c| c.display_label()).collect();
    /// assert_eq!(labels, ["kanban.column.todo", "Review"]);
    /// # Ok::<(), corkboard_config::ConfigError>(())
    /// ```
    pub fn build_board(&self) -> Result<Board> {
        self.validate()?;

        let columns = self
            .columns
            .iter()
            .map(|template| {
                let mut column = Column::new(ColumnId::generate(), template.label_key());
                column.name = template.name().map(str::to_string);
                column
            })
            .collect();

        Board::from_parts(columns, []).map_err(|e| ConfigError::InvalidColumns {
            reason: e.to_string(),
        })
    }

    /// Starts a task draft carrying the configured default priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_config::BoardConfig;
    /// use corkboard_protocol::Priority;
    ///
    /// let config = BoardConfig {
    ///     default_priority: Priority::High,
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.draft("Ship it").priority, Priority::High);
    /// ```
    #[must_use]
    pub fn draft(&self, title: impl Into<String>) -> TaskDraft {
        TaskDraft::new(title).with_priority(self.default_priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::find_config_file_in;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = BoardConfig::default();
        let keys: Vec<_> = config.columns.iter().map(ColumnTemplate::label_key).collect();
        assert_eq!(keys, DEFAULT_COLUMNS);
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.drag_mode, DragMode::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(BoardConfig::new(), BoardConfig::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: BoardConfig = serde_json::from_str(r#"{"drag_mode": "strict"}"#).unwrap();
        assert_eq!(config.drag_mode, DragMode::Strict);
        assert_eq!(config.columns.len(), 3);
    }

    #[test]
    fn validate_rejects_empty_columns() {
        let config = BoardConfig {
            columns: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidColumns { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let config = BoardConfig {
            columns: vec![
                ColumnTemplate::new("kanban.column.todo"),
                ColumnTemplate::named("kanban.column.todo", "Again"),
            ],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("kanban.column.todo"));
    }

    #[test]
    fn validate_rejects_blank_key() {
        let config = BoardConfig {
            columns: vec![ColumnTemplate::new(" ")],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn build_board_follows_templates() {
        let config = BoardConfig {
            columns: vec![
                ColumnTemplate::new("kanban.column.todo"),
                ColumnTemplate::named("kanban.column.review", "Review"),
            ],
            ..Default::default()
        };

        let board = config.build_board().unwrap();
        let columns = board.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label_key, "kanban.column.todo");
        assert!(columns[0].name.is_none());
        assert_eq!(columns[1].name.as_deref(), Some("Review"));
        assert!(columns[0].id.as_str().starts_with(ColumnId::PREFIX));
        assert_ne!(columns[0].id, columns[1].id);
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn build_board_validates_first() {
        let config = BoardConfig {
            columns: Vec::new(),
            ..Default::default()
        };
        assert!(config.build_board().is_err());
    }

    #[test]
    fn draft_uses_default_priority() {
        let config = BoardConfig {
            default_priority: Priority::Low,
            ..Default::default()
        };
        let draft = config.draft("Write docs");
        assert_eq!(draft.title, "Write docs");
        assert_eq!(draft.priority, Priority::Low);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                columns: [
                    "kanban.column.backlog",
                    { label_key: "kanban.column.review", name: "Review" },
                ],
                default_priority: "high",
                drag_mode: "strict",
            }
            "#,
        )
        .unwrap();

        let config = BoardConfig::load_from(&path).unwrap();
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].label_key(), "kanban.column.backlog");
        assert_eq!(config.columns[1].name(), Some("Review"));
        assert_eq!(config.default_priority, Priority::High);
        assert_eq!(config.drag_mode, DragMode::Strict);
    }

    #[test]
    fn load_from_rejects_invalid_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ columns: [] }").unwrap();

        assert!(matches!(
            BoardConfig::load_from(&path),
            Err(ConfigError::InvalidColumns { .. })
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = BoardConfig {
            columns: vec![
                ColumnTemplate::new("kanban.column.todo"),
                ColumnTemplate::named("kanban.column.done", "Shipped"),
            ],
            default_priority: Priority::High,
            drag_mode: DragMode::Strict,
        };

        original.save_to(&path).unwrap();
        let loaded = BoardConfig::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn saved_user_config_is_discovered() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let config = BoardConfig {
            drag_mode: DragMode::Strict,
            ..Default::default()
        };

        let path = config.save_user_in(user.path()).unwrap();
        let found = find_config_file_in(local.path(), Some(user.path()));

        assert_eq!(found.as_deref(), Some(path.as_path()));
        assert_eq!(BoardConfig::load_from(&path).unwrap(), config);
    }
}
