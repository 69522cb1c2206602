//! Integration tests for bugtrack-router
//!
//! Cover table construction rules, first-to-last matching, the catch-all
//! fallback and named-route URL generation.

use bugtrack_router::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Home,
    Login,
    Project,
    ProjectNew,
    Missing,
}

#[fixture]
fn table() -> RouteTable<View> {
    RouteTable::builder()
        .route("/", "home", View::Home)
        .route("/login", "login", View::Login)
        .route("/projects/new", "project-new", View::ProjectNew)
        .route("/projects/:id", "project", View::Project)
        .fallback("/*path", "not-found", View::Missing)
        .build()
        .unwrap()
}

#[rstest]
fn test_catch_all_is_last(table: RouteTable<View>) {
    let last = table.entries().last().unwrap();
    assert!(last.is_catch_all());
    assert_eq!(last.name(), "not-found");
    assert_eq!(table.fallback().name(), "not-found");
    assert!(table.entries()[..table.len() - 1]
        .iter()
        .all(|entry| !entry.is_catch_all()));
}

#[rstest]
fn test_paths_and_names_unique(table: RouteTable<View>) {
    let mut paths: Vec<&str> = table.entries().iter().map(|e| e.path()).collect();
    let mut names: Vec<&str> = table.entries().iter().map(|e| e.name()).collect();
    paths.sort();
    paths.dedup();
    names.sort();
    names.dedup();
    assert_eq!(paths.len(), table.len());
    assert_eq!(names.len(), table.len());
}

#[rstest]
#[case("/", View::Home)]
#[case("/login", View::Login)]
#[case("/login/", View::Login)]
#[case("//login", View::Login)]
#[case("/login?next=/projects", View::Login)]
#[case("/projects/new", View::ProjectNew)]
#[case("/projects/17", View::Project)]
#[case("/projects", View::Missing)]
#[case("/unknown/deep/path", View::Missing)]
#[case("/LOGIN", View::Missing)]
fn test_resolve(table: RouteTable<View>, #[case] path: &str, #[case] expected: View) {
    assert_eq!(*table.resolve(path).page(), expected);
}

#[rstest]
fn test_first_match_wins(table: RouteTable<View>) {
    // "/projects/new" would also match "/projects/:id"; declaration order decides
    let route_match = table.resolve("/projects/new");
    assert_eq!(route_match.name(), "project-new");
    assert!(route_match.params.is_empty());
}

#[rstest]
fn test_params_extracted(table: RouteTable<View>) {
    let route_match = table.resolve("/projects/17");
    assert_eq!(route_match.params.get("id").map(String::as_str), Some("17"));
    assert!(!route_match.is_fallback());
}

#[rstest]
fn test_fallback_captures_rest(table: RouteTable<View>) {
    let route_match = table.resolve("/a/b/c");
    assert!(route_match.is_fallback());
    assert_eq!(route_match.params.get("path").map(String::as_str), Some("a/b/c"));
}

#[rstest]
fn test_url_for(table: RouteTable<View>) {
    assert_eq!(table.url_for_params("login", &[]), Some("/login".to_string()));
    assert_eq!(
        table.url_for_params("project", &[("id", "3")]),
        Some("/projects/3".to_string())
    );
    assert_eq!(table.url_for_params("project", &[]), None);
    assert_eq!(table.url_for_params("nope", &[]), None);
}

#[rstest]
fn test_resolve_is_repeatable(table: RouteTable<View>) {
    for path in ["/", "/login", "/projects/9", "/x"] {
        assert_eq!(table.resolve(path), table.resolve(path));
    }
}

#[test]
fn test_missing_fallback_rejected() {
    let err = RouteTable::builder()
        .route("/", "home", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::MissingFallback);
}

#[test]
fn test_catch_all_outside_fallback_rejected() {
    let err = RouteTable::builder()
        .route("/*path", "everything", ())
        .route("/login", "login", ())
        .fallback("/*rest", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::MisplacedCatchAll("/*path".to_string()));
}

#[test]
fn test_fallback_must_be_catch_all() {
    let err = RouteTable::builder()
        .route("/", "home", ())
        .fallback("/404", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::FallbackNotCatchAll("/404".to_string()));
}

#[test]
fn test_duplicate_path_rejected() {
    let err = RouteTable::builder()
        .route("/login", "login", ())
        .route("/login/", "sign-in", ())
        .fallback("/*path", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicatePath("/login/".to_string()));
}

#[test]
fn test_duplicate_name_rejected() {
    let err = RouteTable::builder()
        .route("/login", "login", ())
        .route("/sign-in", "login", ())
        .fallback("/*path", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicateName("login".to_string()));
}

#[test]
fn test_relative_path_rejected() {
    let err = RouteTable::builder()
        .route("login", "login", ())
        .fallback("/*path", "not-found", ())
        .build()
        .unwrap_err();
    assert!(matches!(err, RouteTableError::InvalidPath { .. }));
    assert!(err.to_string().contains("must start with '/'"));
}

#[test]
fn test_empty_name_rejected() {
    let err = RouteTable::builder()
        .route("/login", " ", ())
        .fallback("/*path", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(err, RouteTableError::EmptyName("/login".to_string()));
}

#[test]
fn test_fragment_in_route_path_rejected() {
    let err = RouteTable::builder()
        .route("/login#x", "login", ())
        .fallback("/*path", "not-found", ())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RouteTableError::InvalidPath {
            path: "/login#x".to_string(),
            reason: "must not contain '?', '#' or '\\'",
        }
    );
}
