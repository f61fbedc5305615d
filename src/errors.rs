//! Unified application error type.
//! Every module (core, source, export, session, cli) returns AppError so
//! the binary can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid work record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Data source errors
    // ---------------------------
    #[error("Failed to fetch work history: {0}")]
    Fetch(String),

    #[error("Failed to fetch account details: {0}")]
    AccountDetails(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Session error: {0}")]
    Session(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
