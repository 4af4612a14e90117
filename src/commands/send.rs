//! Send command implementation
//!
//! The alert handler proper: load the trigger document, format the alert,
//! and deliver it by email and to the operations agent.

use crate::alert::{AgentForwarder, AlertDetails, EmailNotifier, Notifier};
use crate::cli::args::SendArgs;
use crate::config::Config;
use crate::domain::trigger::TriggerDocument;
use crate::error::Result;

/// Execute the send command
pub fn run_send(args: &SendArgs, config: &Config) -> Result<()> {
    let mut trigger = TriggerDocument::load(&args.input)?;
    if let Some(alert) = &args.alert {
        trigger.alert_description = alert.clone();
    }

    handle(&trigger, config)
}

/// Deliver notifications for one alert.
///
/// Email is sent only when the email flag coerces true; the agent
/// forwarding always runs. The first delivery failure aborts the run.
pub fn handle(trigger: &TriggerDocument, config: &Config) -> Result<()> {
    let Some(storage) = trigger.storage.as_ref() else {
        log::warn!("Trigger document carries no storage entity, nothing to do");
        return Ok(());
    };

    let details = AlertDetails::build(storage, trigger, config);
    let dry_run = config.general.dry_run;

    if config.email.enabled.as_bool() {
        let notifier = EmailNotifier::from_config(&config.email, dry_run)?;
        notifier.notify(&details)?;
    } else {
        log::debug!("Email delivery disabled");
    }

    let forwarder = AgentForwarder::from_config(&config.agent, dry_run);
    forwarder.notify(&details)?;

    Ok(())
}
