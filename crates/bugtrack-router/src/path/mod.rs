//! Path utilities for validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use bugtrack_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/login"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login")); // Missing leading /
/// assert!(!is_valid_path("/login/")); // Trailing /
/// assert!(!is_valid_path("/login?next=/")); // Query string
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a browser path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
///
/// - Query and fragment: `/login?next=/` → `/login`
/// - Trailing slashes: `/login/` → `/login`
/// - Double slashes: `/a//b` → `/a/b`
/// - Backslashes: `\a\b` → `/a/b`
///
/// ```
/// use bugtrack_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
/// assert_eq!(normalize_path("/login/"), "/login");
/// assert_eq!(normalize_path("/register?ref=home#top"), "/register");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let without_query = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let normalized = without_query
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}
