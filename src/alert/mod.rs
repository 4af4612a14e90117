//! Alert formatting and delivery
//!
//! Builds the alert details record from a storage snapshot and delivers
//! it through the configured channels (email, operations agent).

mod details;
mod forwarder;
mod notifier;

pub use details::AlertDetails;
pub use forwarder::AgentForwarder;
pub use notifier::{EmailNotifier, Notifier};
