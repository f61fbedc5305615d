//! workhistory library root.
//! Exposes the work history view, its data source and report contracts,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod source;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Utc};
use clap::Parser;
use cli::commands::export::ExportArgs;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let now = resolve_now(cli.now.as_deref())?;

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force, cli.test),
        Commands::Config { print_config, path } => {
            cli::commands::config::handle(cfg, config_path, *print_config, *path)
        }
        Commands::Login { token } => cli::commands::session::login(cfg, token),
        Commands::Logout => cli::commands::session::logout(cfg),
        Commands::List { view } => cli::commands::list::handle(cfg, view, now),
        Commands::Export {
            format,
            file,
            out_dir,
            force,
            view,
        } => cli::commands::export::handle(
            cfg,
            ExportArgs {
                format: *format,
                file: file.as_deref(),
                out_dir: out_dir.as_deref(),
                force: *force,
                view,
            },
            now,
        ),
    }
}

/// `--now` override, or the system clock.
fn resolve_now(raw: Option<&str>) -> AppResult<DateTime<Utc>> {
    match raw {
        None => Ok(utils::date::now()),
        Some(s) => utils::date::parse_now(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(history) = &cli.history {
        cfg.history_file = history.clone();
    }
    if let Some(account) = &cli.account {
        cfg.account_file = account.clone();
    }
    if let Some(user) = &cli.user {
        cfg.user_id = user.clone();
    }
    if let Some(token_file) = &cli.token_file {
        cfg.token_file = token_file.clone();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&config_path)?
    };

    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg, &config_path)
}
