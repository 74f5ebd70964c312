//! Unified application error type.
//! Store, session, config and CLI code all return AppError so the
//! binary has one place to print failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Operation requires an admin session (run `rainlog login`)")]
    Unauthorized,

    #[error("Wrong admin password")]
    InvalidCredentials,

    #[error("No record with id '{0}'")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
