//! Unified error types for dsnotify
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a notification delivery path
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Malformed trigger document
    #[error("Failed to parse trigger document: {0}")]
    Input(#[from] serde_json::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the email and agent delivery paths
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The operations-agent message binary is not installed
    #[error("Agent binary '{}' does not exist", .0.display())]
    MissingBinary(PathBuf),

    /// Email is enabled but an address is not configured
    #[error("Missing email address: '{0}' is required when email is enabled")]
    MissingAddress(&'static str),

    /// Malformed email address
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Failed to assemble the email message
    #[error("Failed to build email message: {0}")]
    MailBuild(#[from] lettre::error::Error),

    /// SMTP submission failed
    #[error("SMTP transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),

    /// Failed to launch or drain the agent binary
    #[error("Failed to run agent binary: {0}")]
    AgentIo(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
