//! How the store reacts to drags that reference missing items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognized drag mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drag mode '{0}', expected one of: lenient, strict")]
pub struct UnknownDragMode(pub String);

/// Drag handling policy.
///
/// Both modes leave the board unchanged when a drag references something
/// that is no longer on the board. They differ in how loudly they say so.
///
/// # Examples
///
/// ```
/// use corkboard_config::DragMode;
///
/// assert_eq!(DragMode::default(), DragMode::Lenient);
/// assert_eq!("strict".parse::<DragMode>().unwrap(), DragMode::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Inconsistent drags are dropped quietly (logged at debug level).
    #[default]
    Lenient,
    /// Inconsistent drags are rejected by the strict engine and logged as warnings.
    Strict,
}

impl DragMode {
    /// Returns the name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for DragMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragMode {
    type Err = UnknownDragMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(UnknownDragMode(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drag_mode() {
        assert_eq!("Lenient".parse::<DragMode>(), Ok(DragMode::Lenient));
        assert_eq!(" STRICT ".parse::<DragMode>(), Ok(DragMode::Strict));
        assert!("loose".parse::<DragMode>().is_err());
    }

    #[test]
    fn unknown_drag_mode_keeps_input() {
        let err = "Loose".parse::<DragMode>().unwrap_err();
        assert_eq!(err, UnknownDragMode("Loose".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown drag mode 'Loose', expected one of: lenient, strict"
        );
    }

    #[test]
    fn drag_mode_json_format() {
        let json = serde_json::to_string(&DragMode::Strict).unwrap();
        assert_eq!(json, r#""strict""#);
    }
}
