//! Route pattern parsing and matching
//!
//! Pure functions over pattern strings like `/users/:id` or `/*path`.

pub mod pattern;

pub use pattern::{classify_segment, RoutePattern, Segment};
