//! Identifier types for board entities.
//!
//! Every entity on the board is keyed by an opaque string newtype. Ids that
//! the engine generates carry a per-kind prefix (`task-`, `column-`, ...), so
//! task and column ids never share a namespace. [`DragItem`] makes the
//! task-or-column distinction explicit for the drag engines.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix carried by generated ids of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a fresh, prefixed identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4().simple()))
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a task.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::TaskId;
    ///
    /// let id = TaskId::generate();
    /// assert!(id.as_str().starts_with("task-"));
    /// ```
    TaskId,
    "task"
);

string_id!(
    /// Unique identifier for a column.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::ColumnId;
    ///
    /// let id = ColumnId::generate();
    /// assert!(id.as_str().starts_with("column-"));
    /// ```
    ColumnId,
    "column"
);

string_id!(
    /// Identifier of a board member that can be assigned to tasks.
    MemberId,
    "member"
);

string_id!(
    /// Identifier of a checklist entry inside a task.
    ChecklistItemId,
    "item"
);

string_id!(
    /// Identifier of a file attached to a task.
    AttachmentId,
    "file"
);

/// Something the user can pick up or drop onto: a task card or a column.
///
/// The gesture layer reports both the dragged item and the drop target as a
/// `DragItem`, so the engines dispatch on the variant instead of guessing
/// from the id.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{DragItem, TaskId};
///
/// let item = DragItem::task("t1");
/// assert_eq!(item.as_task(), Some(&TaskId::from("t1")));
/// assert!(item.as_column().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    /// A task card.
    Task(TaskId),
    /// A whole column.
    Column(ColumnId),
}

impl DragItem {
    /// Shorthand for `DragItem::Task(id.into())`.
    #[must_use]
    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    /// Shorthand for `DragItem::Column(id.into())`.
    #[must_use]
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    /// Returns the task id if this item is a task.
    #[must_use]
    pub fn as_task(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            Self::Column(_) => None,
        }
    }

    /// Returns the column id if this item is a column.
    #[must_use]
    pub fn as_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Column(id) => Some(id),
            Self::Task(_) => None,
        }
    }

    /// Returns the raw identifier regardless of the variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Task(id) => id.as_str(),
            Self::Column(id) => id.as_str(),
        }
    }
}

impl fmt::Display for DragItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {id}"),
            Self::Column(id) => write!(f, "column {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_use_disjoint_prefixes() {
        let task = TaskId::generate();
        let column = ColumnId::generate();

        assert!(task.as_str().starts_with("task-"));
        assert!(column.as_str().starts_with("column-"));
        assert_ne!(task.as_str(), column.as_str());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&TaskId::from("t1")).expect("serialize");
        assert_eq!(json, r#""t1""#);
    }

    #[test]
    fn drag_item_json_format() {
        let json = serde_json::to_string(&DragItem::column("todo")).expect("serialize");
        assert_eq!(json, r#"{"kind":"column","id":"todo"}"#);

        let parsed: DragItem =
            serde_json::from_str(r#"{"kind":"task","id":"t9"}"#).expect("deserialize");
        assert_eq!(parsed, DragItem::task("t9"));
    }

    #[test]
    fn drag_item_display_names_the_kind() {
        assert_eq!(DragItem::task("t1").to_string(), "task t1");
        assert_eq!(DragItem::column("a").to_string(), "column a");
    }
}
