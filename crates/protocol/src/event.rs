//! Drag events reported by the gesture layer.
//!
//! The engine only cares about which item was picked up and what it was
//! released over; pointer coordinates never reach it.

use serde::{Deserialize, Serialize};

use crate::ids::DragItem;

/// A drag has begun on `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragStartEvent {
    pub active: DragItem,
}

impl DragStartEvent {
    #[must_use]
    pub fn new(active: DragItem) -> Self {
        Self { active }
    }
}

/// A drag has ended.
///
/// `over` is the item under the pointer at release time, or `None` when the
/// item was dropped over empty space.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{DragEndEvent, DragItem};
///
/// let event = DragEndEvent::new(DragItem::task("t1"), Some(DragItem::column("done")));
/// assert!(!event.is_cancelled());
///
/// let event = DragEndEvent::cancelled(DragItem::task("t1"));
/// assert!(event.is_cancelled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub active: DragItem,
    #[serde(default)]
    pub over: Option<DragItem>,
}

impl DragEndEvent {
    #[must_use]
    pub fn new(active: DragItem, over: Option<DragItem>) -> Self {
        Self { active, over }
    }

    /// A drag released over nothing.
    #[must_use]
    pub fn cancelled(active: DragItem) -> Self {
        Self { active, over: None }
    }

    /// Returns `true` if there is no drop target.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.over.is_none()
    }

    /// Returns `true` if the item was released over itself.
    #[must_use]
    pub fn is_self_drop(&self) -> bool {
        self.over.as_ref() == Some(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_drop_detection() {
        let event = DragEndEvent::new(DragItem::task("t1"), Some(DragItem::task("t1")));
        assert!(event.is_self_drop());

        let event = DragEndEvent::new(DragItem::task("t1"), Some(DragItem::column("t1")));
        assert!(!event.is_self_drop());
    }

    #[test]
    fn missing_over_deserializes_as_cancelled() {
        let event: DragEndEvent =
            serde_json::from_str(r#"{"active":{"kind":"task","id":"t1"}}"#).expect("deserialize");
        assert!(event.is_cancelled());
    }
}
