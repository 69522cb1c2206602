// File: src/cli.rs
// Purpose: `bugtrack` command definitions and their rendered output

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bugtrack_validation::{
    validate_email, validate_password, validate_password_strict, validate_username,
    ValidationResult,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::forms::{FormReport, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::{App, Page};

#[derive(Debug, Parser)]
#[command(name = "bugtrack")]
#[command(version, about = "bugtrack front-end: routes and form validation", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the route table in matching order
    Routes,

    /// Show which page a path resolves to
    Resolve {
        /// Browser path, e.g. /login
        path: String,
    },

    /// Validate a single field value
    Validate { field: Field, value: String },

    /// Validate a whole form given as JSON
    Check {
        form: FormKind,
        /// Form fields as a JSON object
        json: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Field {
    Email,
    Password,
    PasswordStrict,
    Username,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormKind {
    Login,
    Register,
    ForgotPassword,
}

impl Field {
    pub fn validate(self, value: &str) -> ValidationResult {
        match self {
            Field::Email => validate_email(value),
            Field::Password => validate_password(value),
            Field::PasswordStrict => validate_password_strict(value),
            Field::Username => validate_username(value),
        }
    }
}

/// Renders the output of a command
pub fn run(app: &App, command: &Commands) -> Result<String> {
    match command {
        Commands::Routes => Ok(render_routes(app)),
        Commands::Resolve { path } => Ok(render_resolve(app, path)),
        Commands::Validate { field, value } => render_validation(*field, value),
        Commands::Check { form, json } => render_check(app, *form, json),
    }
}

pub fn render_routes(app: &App) -> String {
    let mut out = format!("{}\n", format!("Routes for {}", app.config().app.name).bold());
    for (idx, entry) in app.routes().entries().iter().enumerate() {
        let marker = if entry.is_catch_all() { " (fallback)" } else { "" };
        let _ = writeln!(
            out,
            "  {}. {:<20} {:<18} {}{}",
            idx + 1,
            entry.path().cyan(),
            entry.name(),
            entry.page().title(),
            marker.dimmed()
        );
    }
    out
}

pub fn render_resolve(app: &App, path: &str) -> String {
    let nav = app.navigate(path);
    let label = if nav.page == Page::NotFound {
        nav.route_name.red()
    } else {
        nav.route_name.green()
    };
    let mut out = format!("{} -> {} ({})\n", path, label, nav.page.title());

    let mut params: Vec<_> = nav.params.iter().collect();
    params.sort();
    for (key, value) in params {
        let _ = writeln!(out, "  {} = {:?}", key, value);
    }
    out
}

pub fn render_validation(field: Field, value: &str) -> Result<String> {
    let result = field.validate(value);
    Ok(format!("{}\n", serde_json::to_string_pretty(&result)?))
}

pub fn render_check(app: &App, form: FormKind, json: &str) -> Result<String> {
    let outcome = match form {
        FormKind::Login => parse_form::<LoginForm>(json)?.submit(),
        FormKind::Register => parse_form::<RegisterForm>(json)?.submit(),
        FormKind::ForgotPassword => parse_form::<ForgotPasswordForm>(json)?.submit(),
    };

    Ok(match outcome {
        Ok(next) => format!("{} next: {}\n", "valid".green().bold(), app.href(next)),
        Err(report) => render_report(&report),
    })
}

fn parse_form<T: serde::de::DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).context("Failed to parse form JSON")
}

fn render_report(report: &FormReport) -> String {
    let mut out = format!("{}\n", "invalid".red().bold());
    for (field, result) in report.fields() {
        if result.is_valid() {
            let _ = writeln!(out, "  {} {}", "ok".green(), field);
        } else {
            let _ = writeln!(out, "  {} {}: {}", "x".red(), field, result.error_message());
        }
    }
    out
}
