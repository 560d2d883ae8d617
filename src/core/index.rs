//! `\index{...}` emission for index entries attached to document nodes

use serde::{Deserialize, Serialize};

use crate::utils::error::ConversionResult;

/// Suffix marking an index page number as bold.
pub const EMPHASIS_SUFFIX: &str = "|textbf";

/// How a sub-entry relates to its parent entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubEntryKind {
    /// Cross reference, rendered as `entry|see{value}`
    See,
    /// Cross reference, rendered as `entry|seealso{value}`
    SeeAlso,
    /// Nested entry, rendered as `entry!value`. Unknown kinds read as this.
    #[default]
    #[serde(other)]
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubEntry {
    pub value: String,
    #[serde(default)]
    pub kind: SubEntryKind,
}

/// A single index registration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub entry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_entry: Option<SubEntry>,
    #[serde(default)]
    pub emphasis: bool,
}

impl IndexEntry {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_entry(mut self, kind: SubEntryKind, value: impl Into<String>) -> Self {
        self.sub_entry = Some(SubEntry {
            value: value.into(),
            kind,
        });
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }
}

/// Output state the index formatter writes into.
pub trait IndexTarget {
    /// Append raw LaTeX to the output.
    fn write(&mut self, latex: &str);

    /// Record that the document needs an index package.
    fn set_has_index(&mut self);
}

/// Minimal [`IndexTarget`] collecting output in memory.
#[derive(Debug, Default, Clone)]
pub struct TexBuffer {
    pub out: String,
    pub has_index: bool,
}

impl IndexTarget for TexBuffer {
    fn write(&mut self, latex: &str) {
        self.out.push_str(latex);
    }

    fn set_has_index(&mut self) {
        self.has_index = true;
    }
}

/// Build the argument of `\index{...}` for one entry.
pub fn index_string(entry: &IndexEntry) -> String {
    let mut s = entry.entry.clone();
    if let Some(sub) = entry.sub_entry.as_ref().filter(|sub| !sub.value.is_empty()) {
        match sub.kind {
            SubEntryKind::See => {
                s.push_str("|see{");
                s.push_str(&sub.value);
                s.push('}');
            }
            SubEntryKind::SeeAlso => {
                s.push_str("|seealso{");
                s.push_str(&sub.value);
                s.push('}');
            }
            SubEntryKind::Entry => {
                s.push('!');
                s.push_str(&sub.value);
            }
        }
    }
    if entry.emphasis {
        s.push_str(EMPHASIS_SUFFIX);
    }
    s
}

/// Format one `\index{...}` directive.
pub fn format_index_entry(entry: &IndexEntry) -> String {
    format!("\\index{{{}}}", index_string(entry))
}

/// Write one `\index` directive per entry, in order.
///
/// Sets the has-index flag on `target` when at least one entry is written.
pub fn add_index_entries<T: IndexTarget + ?Sized>(entries: &[IndexEntry], target: &mut T) {
    if entries.is_empty() {
        return;
    }
    target.set_has_index();
    for entry in entries {
        target.write(&format_index_entry(entry));
    }
    log::debug!("registered {} index entries", entries.len());
}

/// Parse a JSON array of index entries.
pub fn parse_index_entries(json: &str) -> ConversionResult<Vec<IndexEntry>> {
    Ok(serde_json::from_str(json)?)
}
