//! Pattern parsing for route paths
//!
//! A pattern is a `/`-separated list of segments:
//! - static text: `login`
//! - parameter: `:id` (exactly one path segment)
//! - catch-all: `*path` (the rest of the path, possibly empty; last segment only)

use std::collections::HashMap;

use crate::RouteTableError;

/// One parsed pattern segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text segment
    Static(String),
    /// Named parameter: `:id`
    Param(String),
    /// Catch-all: `*path`
    CatchAll(String),
}

/// Classifies a single segment (pure function)
///
/// ```
/// use bugtrack_router::route::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("login"), Segment::Static("login".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
/// assert_eq!(classify_segment("*path"), Segment::CatchAll("path".to_string()));
/// ```
pub fn classify_segment(segment: &str) -> Segment {
    if let Some(name) = segment.strip_prefix('*') {
        return Segment::CatchAll(name.to_string());
    }

    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern, rejecting malformed ones
    ///
    /// ```
    /// use bugtrack_router::route::RoutePattern;
    ///
    /// let pattern = RoutePattern::parse("/users/:id").unwrap();
    /// assert_eq!(pattern.params(), vec!["id"]);
    /// assert!(RoutePattern::parse("users").is_err());
    /// assert!(RoutePattern::parse("/*rest/more").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        if !raw.starts_with('/') {
            return Err(RouteTableError::InvalidPath {
                path: raw.to_string(),
                reason: "must start with '/'",
            });
        }

        // normalize_path strips or rewrites these before matching
        if raw.contains(['?', '#', '\\']) {
            return Err(RouteTableError::InvalidPath {
                path: raw.to_string(),
                reason: "must not contain '?', '#' or '\\'",
            });
        }

        let segments: Vec<Segment> = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect();

        for (idx, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Param(name) | Segment::CatchAll(name) if name.is_empty() => {
                    return Err(RouteTableError::InvalidPath {
                        path: raw.to_string(),
                        reason: "parameter name is empty",
                    });
                }
                Segment::CatchAll(_) if idx + 1 != segments.len() => {
                    return Err(RouteTableError::InvalidPath {
                        path: raw.to_string(),
                        reason: "catch-all must be the final segment",
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this pattern ends with a catch-all segment
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Parameter names in order of appearance
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) | Segment::CatchAll(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Matches a normalized path, returning extracted parameters
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        // Tail-recursive walk over pattern and path segments
        fn match_segments(
            pattern: &[Segment],
            path: &[&str],
            mut params: HashMap<String, String>,
        ) -> Option<HashMap<String, String>> {
            match (pattern.split_first(), path.split_first()) {
                (None, None) => Some(params),
                (None, Some(_)) => None,
                (Some((Segment::CatchAll(name), _)), _) => {
                    params.insert(name.clone(), path.join("/"));
                    Some(params)
                }
                (Some(_), None) => None,
                (Some((Segment::Static(text), rest)), Some((seg, path_rest))) => {
                    if text == seg {
                        match_segments(rest, path_rest, params)
                    } else {
                        None
                    }
                }
                (Some((Segment::Param(name), rest)), Some((seg, path_rest))) => {
                    params.insert(name.clone(), (*seg).to_string());
                    match_segments(rest, path_rest, params)
                }
            }
        }

        match_segments(&self.segments, &path_segments, HashMap::new())
    }

    /// Builds a concrete path by substituting parameters
    ///
    /// Returns `None` if a required parameter is missing. A missing
    /// catch-all value is treated as empty.
    pub fn generate(&self, params: &HashMap<String, String>) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => parts.push(text.clone()),
                Segment::Param(name) => parts.push(params.get(name)?.clone()),
                Segment::CatchAll(name) => {
                    if let Some(rest) = params.get(name).filter(|rest| !rest.is_empty()) {
                        parts.push(rest.trim_matches('/').to_string());
                    }
                }
            }
        }

        Some(format!("/{}", parts.join("/")))
    }
}
