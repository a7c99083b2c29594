//! Display fragments
//!
//! The rendered projection of one visitor entry, tagged with the entry's
//! id as its identity key.

use serde::Serialize;
use std::fmt;

use crate::visitors::{VisitorEntry, VisitorId};

/// Rendered form of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFragment {
    /// Identity key; always the entry's id
    pub key: VisitorId,
    pub full_name: String,
    pub message: String,
    /// ISO 8601 date text
    pub visit_date: String,
}

impl From<&VisitorEntry> for DisplayFragment {
    fn from(entry: &VisitorEntry) -> Self {
        Self {
            key: entry.id().clone(),
            full_name: entry.full_name().to_string(),
            message: entry.message().to_string(),
            visit_date: entry.visit_date_iso(),
        }
    }
}

impl DisplayFragment {
    /// Markup for one list item
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<li data-key="{key}" class="list-group-item d-flex-column justify-content-between align-items-center">"#,
                r#"<div class="lead">{name}</div>"#,
                r#"<div class="text-secondary light-text">{message}</div>"#,
                r#"<div class="text-muted light-text"><em>{date}</em></div>"#,
                "</li>"
            ),
            key = escape_html(self.key.as_str()),
            name = escape_html(&self.full_name),
            message = escape_html(&self.message),
            date = escape_html(&self.visit_date),
        )
    }
}

impl fmt::Display for DisplayFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}: {}", self.visit_date, self.full_name, self.message)
    }
}

/// Markup for a whole list, in fragment order
pub fn render_html(fragments: &[DisplayFragment]) -> String {
    let items: String = fragments.iter().map(DisplayFragment::to_html).collect();
    format!(r#"<ul class="list-group">{}</ul>"#, items)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
