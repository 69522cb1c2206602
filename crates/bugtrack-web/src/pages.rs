// File: src/pages.rs
// Purpose: Page references and the application route table

use std::fmt;

use bugtrack_router::{RouteTable, RouteTableError};
use serde::{Deserialize, Serialize};

/// Pages the UI framework knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Login,
    Register,
    ForgotPassword,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::ForgotPassword,
        Page::NotFound,
    ];

    /// Logical route name of this page
    pub fn route_name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::ForgotPassword => "forgot-password",
            Page::NotFound => "not-found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Sign in",
            Page::Register => "Create account",
            Page::ForgotPassword => "Reset password",
            Page::NotFound => "Page not found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// The application route table. Order is matching order; the catch-all is last.
pub fn route_table() -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::builder()
        .route("/", Page::Home.route_name(), Page::Home)
        .route("/login", Page::Login.route_name(), Page::Login)
        .route("/register", Page::Register.route_name(), Page::Register)
        .route(
            "/forgot-password",
            Page::ForgotPassword.route_name(),
            Page::ForgotPassword,
        )
        .fallback("/*path", Page::NotFound.route_name(), Page::NotFound)
        .build()
}
