//! Core data types for the visitor list
//!
//! - `VisitorId`: stable identity of an entry, generated at creation time
//! - `VisitorEntry`: one visitor's name, message and visit date
//! - `VisitorRecord`: the loosely-typed shape served by the data source
//! - `Field`: names the two user-supplied text fields

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable unique identifier of a visitor entry
///
/// Generated ids are time-ordered UUIDs (v7). Ids supplied by the data
/// source are kept verbatim, so the inner value is free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    /// Generate a fresh time-ordered id
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VisitorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VisitorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VisitorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Mock payloads in the wild use numeric ids as often as strings
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
        })
    }
}

/// One visitor's entry in the guestbook
///
/// Immutable once created: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorEntry {
    id: VisitorId,
    full_name: String,
    message: String,
    visit_date: NaiveDate,
}

impl VisitorEntry {
    pub(crate) fn new(
        id: VisitorId,
        full_name: impl Into<String>,
        message: impl Into<String>,
        visit_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            message: message.into(),
            visit_date,
        }
    }

    pub fn id(&self) -> &VisitorId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }

    /// Visit date in ISO 8601 form (`YYYY-MM-DD`)
    pub fn visit_date_iso(&self) -> String {
        self.visit_date.format("%Y-%m-%d").to_string()
    }
}

/// A visitor as served by the data source
///
/// Only `fullName` and `message` are required; `visitDate` and `id` are
/// filled in on load when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    pub full_name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<VisitorId>,
}

/// An id that is neither text nor a number is dropped, so the record gets
/// a generated one instead of failing the whole payload.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<VisitorId>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeId {
        Id(VisitorId),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<MaybeId>::deserialize(deserializer)? {
        Some(MaybeId::Id(id)) => Some(id),
        Some(MaybeId::Other(_)) | None => None,
    })
}

impl VisitorRecord {
    pub fn new(full_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            message: message.into(),
            visit_date: None,
            id: None,
        }
    }

    /// Builder method: set the visit date
    pub fn visit_date(mut self, date: NaiveDate) -> Self {
        self.visit_date = Some(date);
        self
    }

    /// Builder method: set the id
    pub fn id(mut self, id: impl Into<VisitorId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// First blank required field, if any
    pub fn blank_field(&self) -> Option<Field> {
        Field::first_blank(&self.full_name, &self.message)
    }

    /// Convert into an entry, generating the id and defaulting the date
    /// to `today` when the record carries none.
    ///
    /// Returns `None` when a required field is blank.
    pub fn into_entry(self, today: NaiveDate) -> Option<VisitorEntry> {
        if self.blank_field().is_some() {
            return None;
        }

        Some(VisitorEntry::new(
            self.id.unwrap_or_else(VisitorId::generate),
            self.full_name,
            self.message,
            self.visit_date.unwrap_or(today),
        ))
    }
}

/// User-supplied text fields of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Message,
}

impl Field {
    /// The first of the two fields that is empty or whitespace-only
    pub fn first_blank(full_name: &str, message: &str) -> Option<Field> {
        if is_blank(full_name) {
            Some(Field::FullName)
        } else if is_blank(message) {
            Some(Field::Message)
        } else {
            None
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FullName => write!(f, "fullName"),
            Field::Message => write!(f, "message"),
        }
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
