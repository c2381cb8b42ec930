//! Configuration file discovery, reading and writing.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. They are written
//! back as pretty-printed JSON because `serde_json5` cannot serialize.
//!
//! # File Locations
//!
//! 1. Local: `./corkboard.json5` or `./corkboard.json`
//! 2. User: `~/.config/corkboard/config.json5` or `~/.config/corkboard/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Local file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["corkboard.json5", "corkboard.json"];

/// Directory created under the platform configuration directory.
const USER_CONFIG_DIR: &str = "corkboard";

/// File names inside [`USER_CONFIG_DIR`], in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file for the current directory and user.
///
/// # Examples
///
/// ```no_run
/// use corkboard_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds a configuration file in `local_dir`, falling back to `user_dir`.
///
/// Local files win over user files; within a directory `.json5` wins over
/// `.json`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.is_file());
    if let Some(path) = &found {
        debug!(path = %path.display(), "found config file");
    }
    found
}

/// Returns the user configuration directory, typically `~/.config/corkboard/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no
/// configuration directory.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns where a new user configuration file should be written.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no
/// configuration directory.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_path_in(&user_config_dir()?))
}

/// Returns the file a user configuration is written to inside `user_dir`.
#[must_use]
pub fn user_config_path_in(user_dir: &Path) -> PathBuf {
    user_dir.join(USER_FILE_NAMES[0])
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse.
///
/// # Examples
///
/// ```no_run
/// use corkboard_config::persistence::read_config_file;
/// use corkboard_config::BoardConfig;
///
/// # fn main() -> corkboard_config::Result<()> {
/// let config: BoardConfig = read_config_file("corkboard.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json5::from_str(&content)?)
}

/// Writes `config` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] if a directory or the file cannot be
/// created and [`ConfigError::SerializeJson`] if serialization fails.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)?;
    debug!(path = %path.display(), "wrote config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, ColumnTemplate, DragMode};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "{}").unwrap();
    }

    #[test]
    fn find_prefers_local_json5() {
        let local = TempDir::new().unwrap();
        touch(&local.path().join("corkboard.json"));
        touch(&local.path().join("corkboard.json5"));

        let found = find_config_file_in(local.path(), None).unwrap();
        assert!(found.ends_with("corkboard.json5"));
    }

    #[test]
    fn find_prefers_local_over_user() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        touch(&local.path().join("corkboard.json"));
        touch(&user.path().join("config.json5"));

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert!(found.starts_with(local.path()));
    }

    #[test]
    fn find_falls_back_to_user_dir() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        touch(&user.path().join("config.json"));

        let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user.path().join("config.json"));
    }

    #[test]
    fn find_ignores_directories() {
        let local = TempDir::new().unwrap();
        std::fs::create_dir(local.path().join("corkboard.json5")).unwrap();

        assert!(find_config_file_in(local.path(), None).is_none());
    }

    #[test]
    fn read_json5_board_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corkboard.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Two columns are enough for now
                columns: ["kanban.column.todo", "kanban.column.done"],
                drag_mode: "strict", // trailing comma
            }
            "#,
        )
        .unwrap();

        let config: BoardConfig = read_config_file(&path).unwrap();
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.drag_mode, DragMode::Strict);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<BoardConfig> = read_config_file("/nonexistent/corkboard.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corkboard.json");
        std::fs::write(&path, "columns = todo").unwrap();

        let result: Result<BoardConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("corkboard").join("config.json");
        let config = BoardConfig {
            columns: vec![ColumnTemplate::named("kanban.column.todo", "Inbox")],
            ..Default::default()
        };

        write_config_file(&path, &config).unwrap();
        let loaded: BoardConfig = read_config_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn user_config_dir_ends_with_app_name() {
        // Skipped where the platform has no config directory
        if dirs::config_dir().is_some() {
            assert!(user_config_dir().unwrap().ends_with(USER_CONFIG_DIR));
            assert!(default_user_config_path().unwrap().ends_with("config.json5"));
            assert_eq!(
                default_user_config_path().unwrap(),
                user_config_path_in(&user_config_dir().unwrap())
            );
        }
    }
}
