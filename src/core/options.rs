//! Escaping options

use serde::{Deserialize, Serialize};

use super::escape::{escape_for_link_target, escape_math_only, escape_mixed_mode};
use super::whitespace::normalize_whitespace;

/// Which escaper to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Prose, with inline math where needed
    #[default]
    Text,
    /// Content of an existing math environment
    Math,
    /// Literal link target, reserved characters only
    Href,
    /// Whitespace cleanup only
    Whitespace,
}

/// Escaping options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeOptions {
    pub mode: EscapeMode,
    /// Replacement for no-break spaces in [`EscapeMode::Whitespace`]
    pub nbsp: String,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        Self {
            mode: EscapeMode::Text,
            nbsp: " ".to_string(),
        }
    }
}

impl EscapeOptions {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn math() -> Self {
        Self {
            mode: EscapeMode::Math,
            ..Self::default()
        }
    }

    pub fn href() -> Self {
        Self {
            mode: EscapeMode::Href,
            ..Self::default()
        }
    }

    pub fn whitespace(nbsp: impl Into<String>) -> Self {
        Self {
            mode: EscapeMode::Whitespace,
            nbsp: nbsp.into(),
        }
    }
}

/// Escape `text` according to `options`.
pub fn escape_with(text: &str, options: &EscapeOptions) -> String {
    match options.mode {
        EscapeMode::Text => escape_mixed_mode(text),
        EscapeMode::Math => escape_math_only(text),
        EscapeMode::Href => escape_for_link_target(text),
        EscapeMode::Whitespace => normalize_whitespace(text, &options.nbsp),
    }
}
