//! bugtrack web
//!
//! Front-end core of the bug tracker: the pages and their route table, the
//! authentication forms, theme data and the immutable application config
//! handed to [`App::bootstrap`].

pub mod app;
pub mod cli;
pub mod config;
pub mod forms;
pub mod logging;
pub mod pages;
pub mod theme;

pub use app::{App, Navigation};
pub use config::AppConfig;
pub use forms::{FormReport, ForgotPasswordForm, LoginForm, RegisterForm};
pub use pages::{route_table, Page};
pub use theme::{ThemeConfig, ThemePalette};
