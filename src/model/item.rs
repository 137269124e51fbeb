use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single event on the timeline.
///
/// The id is an opaque string, assigned once and never reassigned; hosts
/// that already track their own ids pass them through [`with_id`].
///
/// [`with_id`]: TimelineItem::with_id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl TimelineItem {
    /// Create a new item with a freshly minted id.
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, start, end)
    }

    /// Create an item under a host-supplied id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Merge a committed update into this item. Ignores updates addressed
    /// to a different id.
    pub fn apply(&mut self, update: &ItemUpdate) {
        if update.id != self.id {
            return;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
    }
}

/// A delta emitted when a gesture or rename commits. Only the fields that
/// actually changed are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl ItemUpdate {
    /// An update that only renames.
    pub fn rename(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            start: None,
            end: None,
        }
    }

    /// An update carrying new dates; `None` fields are left untouched.
    pub fn dates(
        id: impl Into<String>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            start,
            end,
        }
    }
}
