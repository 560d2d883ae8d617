//! MysTeX - Unicode-aware text and math escaping for LaTeX output
//!
//! Every leaf text node of a document passes through one of the escapers
//! here exactly once before it is embedded in generated LaTeX.
//!
//! ```
//! use mystex::{escape_for_link_target, escape_math_only, escape_mixed_mode};
//!
//! assert_eq!(escape_mixed_mode("50% of α"), "50\\% of $\\alpha$");
//! assert_eq!(escape_math_only("αβ"), "\\alpha \\beta");
//! assert_eq!(escape_for_link_target("a_b#c"), "a\\_b\\#c");
//! ```

pub mod core;
pub mod utils;
pub mod wasm;

pub use crate::core::classes::get_classes;
pub use crate::core::escape::{
    escape_for_link_target, escape_math_only, escape_mixed_mode, tokenize_runs, Run, RunMode,
    MATH_DELIMITER, NBSP,
};
pub use crate::core::image::{
    latex_image_width, ImageWidth, DEFAULT_IMAGE_WIDTH, DEFAULT_PAGE_WIDTH_PIXELS,
};
pub use crate::core::index::{
    add_index_entries, format_index_entry, parse_index_entries, IndexEntry, IndexTarget,
    SubEntry, SubEntryKind, TexBuffer,
};
pub use crate::core::options::{escape_with, EscapeMode, EscapeOptions};
pub use crate::core::whitespace::normalize_whitespace;
pub use crate::utils::error::{ConversionError, ConversionResult};
