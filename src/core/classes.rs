//! Class name handling

use indexmap::IndexSet;

/// Split a space separated class attribute into unique, lower-cased names.
///
/// Order of first appearance is kept.
pub fn get_classes(class_name: Option<&str>) -> Vec<String> {
    let Some(class_name) = class_name else {
        return Vec::new();
    };
    class_name
        .split(' ')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
