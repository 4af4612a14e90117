//! External-agent forwarding
//!
//! Invokes the HP Operations Manager message binary (`opcmsg`) to raise
//! the alert with the local operations agent. The invocation blocks until
//! the process exits; its output streams are captured into the log.

use super::details::AlertDetails;
use super::notifier::Notifier;
use crate::config::{AgentConfig, Severity};
use crate::error::{NotifyError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Forwards alerts to the operations agent via its message binary.
pub struct AgentForwarder {
    path: PathBuf,
    application: String,
    severity: Severity,
    dry_run: bool,
}

impl AgentForwarder {
    /// Build a forwarder from the agent configuration section.
    pub fn from_config(config: &AgentConfig, dry_run: bool) -> Self {
        Self {
            path: config.path.clone(),
            application: config.application.clone(),
            severity: config.severity,
            dry_run,
        }
    }

    /// The five key=value arguments the agent binary expects.
    ///
    /// Each argument is a separate argv element; no shell is involved, so
    /// quote characters in field values pass through intact.
    fn build_args(&self, details: &AlertDetails) -> Vec<String> {
        vec![
            format!("application={}", self.application),
            format!("object={}", details.object),
            format!("msg_text={}", details.body),
            format!("severity={}", self.severity),
            format!("msg_grp={}", details.alert),
        ]
    }
}

impl Notifier for AgentForwarder {
    fn notify(&self, details: &AlertDetails) -> Result<()> {
        if !self.path.exists() {
            return Err(NotifyError::MissingBinary(self.path.clone()).into());
        }
        log::debug!("Found agent binary at {}", self.path.display());

        let args = self.build_args(details);
        log::info!("Calling {} {}", self.path.display(), args.join(" "));

        if self.dry_run {
            log::info!("Dry run, skipping agent invocation");
            return Ok(());
        }

        let output = Command::new(&self.path)
            .args(&args)
            .output()
            .map_err(NotifyError::AgentIo)?;

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            log::error!("Agent STDERR: {}", line.trim());
        }
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            log::info!("Agent STDOUT: {}", line.trim());
        }
        // Exit status is logged, not acted on
        log::info!("Agent exited with {}", output.status);

        Ok(())
    }

    fn name(&self) -> &str {
        "agent"
    }
}
