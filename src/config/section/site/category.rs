//! `site.categoryMap`: display name to routing path.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category name as written in post front matter.
    pub name: String,
    /// Path segment used in category URLs. Unique across the map.
    pub path: String,
}

impl CategoryEntry {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Validate category entries.
///
/// Every `name` and `path` must be non-empty and `path` values must be
/// pairwise unique. An empty map is valid.
pub fn validate_categories(
    entries: &[CategoryEntry],
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (i, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            diag.error(field.indexed(i, "name"), "category name must not be empty");
        }

        let path = entry.path.trim();
        if path.is_empty() {
            diag.error(
                field.indexed(i, "path"),
                format!("category '{}' has an empty path", entry.name),
            );
            continue;
        }

        match seen.get(path) {
            Some(&first) => diag.error_with_hint(
                field.indexed(i, "path"),
                format!(
                    "path '{path}' is already used by entry {first} ('{}')",
                    entries[first].name
                ),
                "category paths must be unique",
            ),
            None => {
                seen.insert(path, i);
            }
        }
    }
}
