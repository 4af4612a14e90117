//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile, FlagValue, Severity};
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            ConfigFile::load(path).ok()
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI dry-run flag
    pub fn with_dry_run(mut self, dry_run: Option<bool>) -> Self {
        if let Some(d) = dry_run {
            self.config.general.dry_run = d;
        }
        self
    }

    /// Override the email flag with a raw (coercible) string
    pub fn with_email_flag(mut self, email: Option<String>) -> Self {
        if let Some(e) = email {
            self.config.email.enabled = FlagValue::Str(e);
        }
        self
    }

    /// Override with CLI destination address
    pub fn with_to(mut self, to: Option<String>) -> Self {
        if let Some(t) = to {
            self.config.email.to = Some(t);
        }
        self
    }

    /// Override with CLI source address
    pub fn with_from(mut self, from: Option<String>) -> Self {
        if let Some(f) = from {
            self.config.email.from = Some(f);
        }
        self
    }

    /// Override with CLI severity
    pub fn with_severity(mut self, severity: Option<Severity>) -> Self {
        if let Some(s) = severity {
            self.config.agent.severity = s;
        }
        self
    }

    /// Override with CLI application name
    pub fn with_application(mut self, application: Option<String>) -> Self {
        if let Some(a) = application {
            self.config.agent.application = a;
        }
        self
    }

    /// Override with CLI agent binary path
    pub fn with_agent_path(mut self, path: Option<String>) -> Self {
        if let Some(p) = path {
            self.config.agent.path = PathBuf::from(p);
        }
        self
    }

    /// Override with CLI appliance address
    pub fn with_appliance(mut self, address: Option<String>) -> Self {
        if let Some(a) = address {
            self.config.appliance.address = Some(a);
        }
        self
    }

    /// Override with CLI signature line
    pub fn with_signature(mut self, signature: Option<String>) -> Self {
        if let Some(s) = signature {
            self.config.appliance.signature = Some(s);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
