//! Environment variable overrides.
//!
//! Overrides are applied on top of whatever the configuration file says:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CORKBOARD_DRAG_MODE` | `lenient`, `strict` |
//! | `CORKBOARD_DEFAULT_PRIORITY` | `high`, `medium`, `low` |
//!
//! Empty values are ignored.

use corkboard_protocol::Priority;
use tracing::debug;

use crate::config::BoardConfig;
use crate::error::{ConfigError, Result};
use crate::mode::DragMode;

/// Overrides [`BoardConfig::drag_mode`].
pub const DRAG_MODE_VAR: &str = "CORKBOARD_DRAG_MODE";

/// Overrides [`BoardConfig::default_priority`].
pub const DEFAULT_PRIORITY_VAR: &str = "CORKBOARD_DEFAULT_PRIORITY";

/// Applies overrides read through `lookup` to `config`.
///
/// `lookup` maps a variable name to its value; [`apply_process_env`] passes
/// the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] if a variable holds an unknown value.
///
/// # Examples
///
/// ```
/// use corkboard_config::{BoardConfig, DragMode};
/// use corkboard_config::env::apply_overrides;
///
/// let mut config = BoardConfig::default();
/// apply_overrides(&mut config, |name| {
///     (name == "CORKBOARD_DRAG_MODE").then(|| "strict".to_string())
/// })?;
/// assert_eq!(config.drag_mode, DragMode::Strict);
/// # Ok::<(), corkboard_config::ConfigError>(())
/// ```
pub fn apply_overrides<F>(config: &mut BoardConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(lookup(DRAG_MODE_VAR)) {
        config.drag_mode = value.parse::<DragMode>().map_err(|_| ConfigError::InvalidEnv {
            name: DRAG_MODE_VAR,
            value: value.clone(),
        })?;
        debug!(drag_mode = %config.drag_mode, "drag mode overridden from environment");
    }

    if let Some(value) = non_empty(lookup(DEFAULT_PRIORITY_VAR)) {
        config.default_priority = value
            .parse::<Priority>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: DEFAULT_PRIORITY_VAR,
                value: value.clone(),
            })?;
        debug!(priority = %config.default_priority, "default priority overridden from environment");
    }

    Ok(())
}

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] if a variable holds an unknown value.
pub fn apply_process_env(config: &mut BoardConfig) -> Result<()> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
