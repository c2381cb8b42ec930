//! Column templates with flexible parsing.
//!
//! This module provides the [`ColumnTemplate`] type which supports two formats:
//!
//! - Short format: `"kanban.column.todo"` (just the label key)
//! - Full format: `{ "label_key": "...", "name": "..." }` object
//!
//! # Examples
//!
//! ```
//! use corkboard_config::ColumnTemplate;
//!
//! // Parse from short format
//! let column: ColumnTemplate = serde_json::from_str(r#""kanban.column.todo""#).unwrap();
//! assert_eq!(column.label_key(), "kanban.column.todo");
//!
//! // Parse from full format
//! let column: ColumnTemplate =
//!     serde_json::from_str(r#"{"label_key": "kanban.column.review", "name": "Review"}"#).unwrap();
//! assert_eq!(column.name(), Some("Review"));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A column created on every new board.
///
/// # Examples
///
/// ```
/// use corkboard_config::ColumnTemplate;
///
/// let column = ColumnTemplate::new("kanban.column.todo");
/// assert!(column.name().is_none());
///
/// let named = ColumnTemplate::named("kanban.column.review", "Review");
/// assert_eq!(named.name(), Some("Review"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTemplate {
    label_key: String,
    name: Option<String>,
}

impl ColumnTemplate {
    /// Creates a template that shows the translated label.
    #[must_use]
    pub fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            name: None,
        }
    }

    /// Creates a template with a custom name.
    #[must_use]
    pub fn named(label_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            name: Some(name.into()),
        }
    }

    /// Parses the short format, which is just the label key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_config::ColumnTemplate;
    ///
    /// assert!(ColumnTemplate::parse_short("kanban.column.done").is_ok());
    /// assert!(ColumnTemplate::parse_short("   ").is_err());
    /// ```
    pub fn parse_short(s: &str) -> Result<Self> {
        let key = s.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidColumns {
                reason: "label key cannot be empty".to_string(),
            });
        }
        Ok(Self::new(key))
    }

    /// Returns the translation key.
    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    /// Returns the custom name, if configured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Serialize for ColumnTemplate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Without a name, serialize as short format
        match &self.name {
            None => serializer.serialize_str(&self.label_key),
            Some(name) => {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct("ColumnTemplate", 2)?;
                state.serialize_field("label_key", &self.label_key)?;
                state.serialize_field("name", name)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ColumnTemplate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct ColumnTemplateVisitor;

        impl<'de> Visitor<'de> for ColumnTemplateVisitor {
            type Value = ColumnTemplate;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a label key string or an object with label_key and optional name")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                ColumnTemplate::parse_short(v).map_err(de::Error::custom)
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut label_key: Option<String> = None;
                let mut name: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "label_key" => {
                            if label_key.is_some() {
                                return Err(de::Error::duplicate_field("label_key"));
                            }
                            label_key = Some(map.next_value()?);
                        }
                        "name" => {
                            if name.is_some() {
                                return Err(de::Error::duplicate_field("name"));
                            }
                            name = map.next_value()?;
                        }
                        _ => {
                            // Ignore unknown fields for forward compatibility
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let label_key = label_key.ok_or_else(|| de::Error::missing_field("label_key"))?;
                let mut template = ColumnTemplate::parse_short(&label_key).map_err(de::Error::custom)?;
                template.name = name;
                Ok(template)
            }
        }

        deserializer.deserialize_any(ColumnTemplateVisitor)
    }
}
