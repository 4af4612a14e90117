//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging. The
//! configuration carries everything the automation engine used to supply
//! ambiently: appliance identity, email addresses, and agent settings.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default location of the HP Operations agent message binary
pub const DEFAULT_AGENT_PATH: &str = "/opt/OV/bin/opcmsg";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Appliance identity settings
    pub appliance: ApplianceConfig,
    /// Email delivery settings
    pub email: EmailConfig,
    /// Operations-agent forwarding settings
    pub agent: AgentConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Dry run mode - log deliveries without performing them
    pub dry_run: bool,
}

/// Appliance identity used when formatting the alert
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplianceConfig {
    /// Address used in the storage URL; falls back to the server IP
    /// from the trigger document when unset
    pub address: Option<String>,
    /// Signature line for the email footer
    pub signature: Option<String>,
}

/// Email delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmailConfig {
    /// Whether to send the alert email (bool or coercible string)
    pub enabled: FlagValue,
    /// Destination address
    pub to: Option<String>,
    /// Source address
    pub from: Option<String>,
    /// SMTP relay host; the local MTA is used when unset
    pub smtp_relay: Option<String>,
    /// Relay username (only used together with smtp_password)
    pub smtp_username: Option<String>,
    /// Relay password
    pub smtp_password: Option<String>,
}

/// Operations-agent forwarding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Path to the agent message binary
    pub path: PathBuf,
    /// Application name reported with each message
    pub application: String,
    /// Message severity
    pub severity: Severity,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_AGENT_PATH),
            application: String::new(),
            severity: Severity::default(),
        }
    }
}

/// Message severity levels understood by the operations agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, no action needed
    Normal,
    /// Attention recommended
    Warning,
    /// Minor degradation
    Minor,
    /// Action required soon
    #[default]
    Major,
    /// Immediate action required
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A boolean option that may arrive as a literal bool or a string.
///
/// Automation payloads routinely carry "true"/"yes"/"1"-style strings where
/// a boolean is meant; [`FlagValue::as_bool`] applies the coercion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// Literal boolean
    Bool(bool),
    /// String to be coerced
    Str(String),
}

impl Default for FlagValue {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl FlagValue {
    /// Coerce the value to a bool.
    ///
    /// Strings match on a case-insensitive suffix: `true|t|yes|y|1` is
    /// true, `false|f|no|n|0` is false. The truthy check runs first. Any
    /// other string logs a warning and resolves to false.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => coerce_bool_str(s),
        }
    }
}

const TRUTHY_SUFFIXES: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSY_SUFFIXES: [&str; 5] = ["false", "f", "no", "n", "0"];

fn coerce_bool_str(s: &str) -> bool {
    let lower = s.to_lowercase();
    if TRUTHY_SUFFIXES.iter().any(|t| lower.ends_with(t)) {
        return true;
    }
    if FALSY_SUFFIXES.iter().any(|t| lower.ends_with(t)) {
        return false;
    }

    log::warn!("Invalid boolean string <{}> detected, returning false", s);
    false
}
