//! # bugtrack router
//!
//! Ordered client-side route table. Each entry maps a URL path pattern to a
//! unique name and a page reference chosen by the application. Matching is
//! first-to-last, and every table ends with exactly one catch-all entry, so
//! resolving a path never fails.
//!
//! Pattern syntax:
//! - Static routes (`/login`)
//! - Parameters (`/projects/:id`)
//! - Catch-all as the final segment (`/*path`)
//!
//! ## Example
//!
//! ```
//! use bugtrack_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("/", "home", "Home")
//!     .route("/login", "login", "Login")
//!     .fallback("/*path", "not-found", "NotFound")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(*table.resolve("/login/").page(), "Login");
//! assert_eq!(*table.resolve("/nope").page(), "NotFound");
//! ```

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

pub mod path;
pub mod route;

pub use path::{is_valid_path, normalize_path};
pub use route::{RoutePattern, Segment};

/// Errors raised while building a [`RouteTable`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("route name for '{0}' is empty")]
    EmptyName(String),

    #[error("catch-all route '{0}' must be declared as the fallback (last entry)")]
    MisplacedCatchAll(String),

    #[error("fallback route '{0}' must end with a catch-all segment")]
    FallbackNotCatchAll(String),

    #[error("route table has no catch-all fallback")]
    MissingFallback,
}

/// A single entry in the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<P> {
    pattern: RoutePattern,
    name: String,
    page: P,
}

impl<P> RouteEntry<P> {
    /// URL pattern like "/projects/:id"
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Unique logical name used for navigation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page rendered for this route
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_catch_all()
    }
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, P> {
    /// The matched entry
    pub entry: &'a RouteEntry<P>,
    /// Parameters extracted from the path
    pub params: HashMap<String, String>,
}

impl<'a, P> RouteMatch<'a, P> {
    pub fn page(&self) -> &'a P {
        &self.entry.page
    }

    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    /// True when only the catch-all matched
    pub fn is_fallback(&self) -> bool {
        self.entry.is_catch_all()
    }
}

/// Immutable, ordered route table ending in a catch-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
}

impl<P> RouteTable<P> {
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder::new()
    }

    /// Entries in matching order; the catch-all is last
    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built table, which holds at least the fallback
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its logical name
    pub fn get(&self, name: &str) -> Option<&RouteEntry<P>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The catch-all entry
    pub fn fallback(&self) -> &RouteEntry<P> {
        // build() guarantees a trailing catch-all
        &self.entries[self.entries.len() - 1]
    }

    /// Resolves a browser path to the first matching entry
    ///
    /// The path is normalized first. Falls through to the catch-all when no
    /// other entry matches.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_, P> {
        let normalized = normalize_path(path);

        let found = self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(&normalized)
                .map(|params| RouteMatch { entry, params })
        });

        match found {
            Some(route_match) => {
                debug!(path = %normalized, route = %route_match.entry.name, "resolved route");
                route_match
            }
            None => {
                // Unreachable with a well-formed fallback, kept total anyway
                let entry = self.fallback();
                let mut params = HashMap::new();
                if let Some(Segment::CatchAll(name)) = entry.pattern.segments().last() {
                    params.insert(name.clone(), normalized.trim_start_matches('/').to_string());
                }
                RouteMatch { entry, params }
            }
        }
    }

    /// Generates the URL of a named route
    ///
    /// ```
    /// use bugtrack_router::RouteTable;
    /// use std::collections::HashMap;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/projects/:id", "project", ())
    ///     .fallback("/*path", "not-found", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    /// assert_eq!(table.url_for("project", &params), Some("/projects/7".to_string()));
    /// assert_eq!(table.url_for("missing", &params), None);
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.get(name)?.pattern.generate(params)
    }

    /// Same as [`RouteTable::url_for`] with borrowed key/value pairs
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.url_for(name, &params)
    }
}

/// Builder that validates table invariants in [`RouteTableBuilder::build`]
#[derive(Debug)]
pub struct RouteTableBuilder<P> {
    routes: Vec<(String, String, P)>,
    fallback: Option<(String, String, P)>,
}

impl<P> Default for RouteTableBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RouteTableBuilder<P> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }

    /// Appends a regular route; order is matching order
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, page: P) -> Self {
        self.routes.push((path.into(), name.into(), page));
        self
    }

    /// Sets the catch-all entry placed after every other route
    pub fn fallback(mut self, path: impl Into<String>, name: impl Into<String>, page: P) -> Self {
        self.fallback = Some((path.into(), name.into(), page));
        self
    }

    pub fn build(self) -> Result<RouteTable<P>, RouteTableError> {
        let mut seen_paths = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut entries = Vec::with_capacity(self.routes.len() + 1);

        for (path, name, page) in self.routes {
            let entry = make_entry(path, name, page, &mut seen_paths, &mut seen_names)?;
            if entry.is_catch_all() {
                return Err(RouteTableError::MisplacedCatchAll(entry.path().to_string()));
            }
            entries.push(entry);
        }

        let (path, name, page) = self.fallback.ok_or(RouteTableError::MissingFallback)?;
        let entry = make_entry(path, name, page, &mut seen_paths, &mut seen_names)?;
        if !entry.is_catch_all() {
            return Err(RouteTableError::FallbackNotCatchAll(entry.path().to_string()));
        }
        entries.push(entry);

        debug!(routes = entries.len(), "built route table");
        Ok(RouteTable { entries })
    }
}

fn make_entry<P>(
    path: String,
    name: String,
    page: P,
    seen_paths: &mut HashSet<String>,
    seen_names: &mut HashSet<String>,
) -> Result<RouteEntry<P>, RouteTableError> {
    let pattern = RoutePattern::parse(&path)?;

    if name.trim().is_empty() {
        return Err(RouteTableError::EmptyName(path));
    }
    // Compare the normalized form so "/login" and "/login/" collide
    if !seen_paths.insert(normalize_path(&path).into_owned()) {
        return Err(RouteTableError::DuplicatePath(path));
    }
    if !seen_names.insert(name.clone()) {
        return Err(RouteTableError::DuplicateName(name));
    }

    Ok(RouteEntry { pattern, name, page })
}
