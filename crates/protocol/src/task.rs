//! Task-related types for the Kanban board.
//!
//! This module defines the task card itself together with its priority,
//! checklist and attachment types, and the [`TaskDraft`] that the creation
//! form hands to [`Board::add_task`](crate::Board::add_task).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{AttachmentId, ChecklistItemId, ColumnId, MemberId, TaskId};

/// How urgent a task is.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::Priority;
///
/// assert_eq!(Priority::default(), Priority::Medium);
/// assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Returns all priorities from most to least urgent.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Returns the lowercase name used in JSON and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::Priority;
    ///
    /// assert_eq!(Priority::Low.as_str(), "low");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown priority name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}', expected one of: high, medium, low")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(UnknownPriority(s.to_owned())),
        }
    }
}

/// A single entry of a task checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub title: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// Creates an unchecked entry with a generated id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::generate(),
            title: title.into(),
            checked: false,
        }
    }

    /// Replaces the generated id, for fixtures and imported data.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ChecklistItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Marks the entry as done.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A file attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub url: String,
    /// MIME type or a coarse kind such as `"image"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Attachment {
    /// Creates an attachment with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: AttachmentId::generate(),
            name: name.into(),
            url: url.into(),
            kind: kind.into(),
        }
    }

    /// Replaces the generated id, for fixtures and imported data.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<AttachmentId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Everything the creation form supplies for a new task.
///
/// The board assigns the id and the owning column when the draft is added.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{Priority, TaskDraft};
///
/// let draft = TaskDraft::new("Write release notes")
///     .with_description("Summarize the changes since 0.3")
///     .with_priority(Priority::High)
///     .with_assignee("alice");
/// assert_eq!(draft.assignees.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignees: Vec<MemberId>,
    pub checklist: Vec<ChecklistItem>,
    pub manual_progress: u8,
    pub due_date: Option<NaiveDate>,
    pub attachments: Vec<Attachment>,
}

impl TaskDraft {
    /// Starts a draft with the given title and everything else empty.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, member: impl Into<MemberId>) -> Self {
        self.assignees.push(member.into());
        self
    }

    #[must_use]
    pub fn with_checklist_item(mut self, item: ChecklistItem) -> Self {
        self.checklist.push(item);
        self
    }

    #[must_use]
    pub fn with_manual_progress(mut self, progress: u8) -> Self {
        self.manual_progress = progress.min(100);
        self
    }

    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// A task card on the board.
///
/// `column_id` mirrors which column's `task_ids` holds this task. It is kept
/// in sync by the board operations; an edit cannot change it.
///
/// # Examples
///
/// ```
/// use corkboard_protocol::{ColumnId, Task, TaskDraft, TaskId};
///
/// let task = Task::from_draft(TaskId::from("t1"), ColumnId::from("todo"), TaskDraft::new("Ship it"));
/// assert_eq!(task.title, "Ship it");
/// assert_eq!(task.progress(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignees: Vec<MemberId>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Progress tracked by hand; only used while the checklist is empty.
    #[serde(default)]
    pub manual_progress: u8,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Task {
    /// Materializes a draft into a task owned by `column_id`.
    #[must_use]
    pub fn from_draft(id: TaskId, column_id: ColumnId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            column_id,
            priority: draft.priority,
            assignees: draft.assignees,
            checklist: draft.checklist,
            manual_progress: draft.manual_progress.min(100),
            due_date: draft.due_date,
            attachments: draft.attachments,
        }
    }

    /// Completion percentage in `0..=100`.
    ///
    /// Derived from the checklist when it has entries, rounded to the nearest
    /// integer. Falls back to the manually tracked value otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use corkboard_protocol::{ChecklistItem, ColumnId, Task, TaskDraft, TaskId};
    ///
    /// let draft = TaskDraft::new("Migrate")
    ///     .with_checklist_item(ChecklistItem::new("schema").checked())
    ///     .with_checklist_item(ChecklistItem::new("data"))
    ///     .with_checklist_item(ChecklistItem::new("cutover"));
    /// let task = Task::from_draft(TaskId::from("t1"), ColumnId::from("a"), draft);
    /// assert_eq!(task.progress(), 33);
    /// ```
    #[must_use]
    pub fn progress(&self) -> u8 {
        if self.checklist.is_empty() {
            return self.manual_progress.min(100);
        }
        let checked = self.checklist.iter().filter(|item| item.checked).count();
        let ratio = checked as f64 / self.checklist.len() as f64;
        // ratio is in 0.0..=1.0, so the cast cannot truncate
        (ratio * 100.0).round() as u8
    }

    /// Returns `true` if at least one file is attached.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Returns `true` if `member` is among the assignees.
    #[must_use]
    pub fn is_assigned_to(&self, member: &MemberId) -> bool {
        self.assignees.contains(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(draft: TaskDraft) -> Task {
        Task::from_draft(TaskId::from("t1"), ColumnId::from("a"), draft)
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_json_format() {
        let json = serde_json::to_string(&Priority::High).expect("serialize");
        assert_eq!(json, r#""high""#);
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!(" LOW ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn progress_uses_manual_value_without_checklist() {
        let task = task_with(TaskDraft::new("t").with_manual_progress(40));
        assert_eq!(task.progress(), 40);
    }

    #[test]
    fn manual_progress_is_clamped() {
        let task = task_with(TaskDraft::new("t").with_manual_progress(250));
        assert_eq!(task.progress(), 100);
    }

    #[test]
    fn progress_rounds_checklist_ratio() {
        let task = task_with(
            TaskDraft::new("t")
                .with_manual_progress(90)
                .with_checklist_item(ChecklistItem::new("a").checked())
                .with_checklist_item(ChecklistItem::new("b").checked())
                .with_checklist_item(ChecklistItem::new("c")),
        );
        // 2/3 = 66.67 rounds up; the manual value is ignored
        assert_eq!(task.progress(), 67);
    }

    #[test]
    fn progress_half_rounds_away_from_zero() {
        let task = task_with(
            TaskDraft::new("t")
                .with_checklist_item(ChecklistItem::new("a").checked())
                .with_checklist_item(ChecklistItem::new("b")),
        );
        assert_eq!(task.progress(), 50);

        let mut items: Vec<ChecklistItem> = (0..8)
            .map(|i| ChecklistItem::new(format!("{i}")))
            .collect();
        items[0].checked = true;
        let mut task = task_with(TaskDraft::new("t"));
        task.checklist = items;
        // 1/8 = 12.5
        assert_eq!(task.progress(), 13);
    }

    #[test]
    fn attachment_kind_serializes_as_type() {
        let attachment = Attachment::new(
            "brief.pdf",
            "https://files.test/brief.pdf",
            "application/pdf",
        );
        let json = serde_json::to_value(&attachment).expect("serialize");
        assert_eq!(json["type"], "application/pdf");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn task_uses_camel_case_fields() {
        let task = task_with(TaskDraft::new("t"));
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["columnId"], "a");
        assert!(json.get("dueDate").is_some());
    }

    #[test]
    fn task_assignment_lookup() {
        let task = task_with(TaskDraft::new("t").with_assignee("alice"));
        assert!(task.is_assigned_to(&MemberId::from("alice")));
        assert!(!task.is_assigned_to(&MemberId::from("bob")));
    }
}
