//! Materialized path helpers.
//!
//! The store never derives or checks a path; these helpers exist for
//! writers that want to build one from a parent's path.

/// Separator between path segments.
pub const PATH_DELIMITER: char = '/';

/// Path of a root-level entry.
pub fn root_path(name: &str) -> String {
    format!("{PATH_DELIMITER}{name}")
}

/// Path of an entry placed directly under `parent_path`.
pub fn child_path(parent_path: &str, name: &str) -> String {
    let parent = parent_path.trim_end_matches(PATH_DELIMITER);
    format!("{parent}{PATH_DELIMITER}{name}")
}
