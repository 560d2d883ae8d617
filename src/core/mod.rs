//! Escaping core
//!
//! - [`tables`]: replacement tables
//! - [`escape`]: link-target, mixed-mode and math-only escapers
//! - [`whitespace`]: no-break and zero-width space cleanup
//! - [`index`]: `\index` directives
//! - [`image`], [`classes`]: small helpers used next to the escapers

pub mod classes;
pub mod escape;
pub mod image;
pub mod index;
pub mod options;
pub mod tables;
pub mod whitespace;
