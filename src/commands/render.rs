//! Render command implementation
//!
//! Formats the alert and prints it to stdout without delivering.

use crate::alert::AlertDetails;
use crate::cli::args::RenderArgs;
use crate::cli::output::print_output;
use crate::config::Config;
use crate::domain::trigger::TriggerDocument;
use crate::error::Result;

/// Execute the render command
pub fn run_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let mut trigger = TriggerDocument::load(&args.input)?;
    if let Some(alert) = &args.alert {
        trigger.alert_description = alert.clone();
    }

    let Some(storage) = trigger.storage.as_ref() else {
        log::warn!("Trigger document carries no storage entity, nothing to render");
        return Ok(());
    };

    let details = AlertDetails::build(storage, &trigger, config);
    print_output(&details, args.format)?;

    Ok(())
}
