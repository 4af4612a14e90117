//! Alert detail formatting
//!
//! Builds the subject, object, and HTML body for a datastore capacity
//! alert. The subject and body double as the agent message group and
//! message text.

use crate::config::Config;
use crate::domain::storage::{gib, StorageSnapshot};
use crate::domain::trigger::TriggerDocument;
use serde::Serialize;

/// Formatted alert ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct AlertDetails {
    /// Object identifier reported to the operations agent
    pub object: String,
    /// Alert description; doubles as the agent message group
    pub alert: String,
    /// Email subject line
    pub subject: String,
    /// HTML email body; doubles as the agent message text
    pub body: String,
}

impl AlertDetails {
    /// Build the details record for one alert.
    ///
    /// The appliance address in the storage URL comes from the config,
    /// falling back to the raising server's IP address.
    pub fn build(storage: &StorageSnapshot, trigger: &TriggerDocument, config: &Config) -> Self {
        let alert = trigger.alert_description.clone();
        let appliance = config
            .appliance
            .address
            .clone()
            .unwrap_or_else(|| trigger.server.ipaddress.clone());
        let signature = config.appliance.signature.clone().unwrap_or_default();

        let object = format!("Datastore - {}", storage.name);
        let subject = format!("{} | Datastore: [{}]", alert, storage.name);

        let url = format!("https://{}/Storage/show/{}", appliance, storage.id);

        let mut body = String::from("Attention, ");
        body.push_str(&format!("<br>Appliance: {}", trigger.server.hostname));
        body.push_str(&format!("<br>Region: {}", trigger.server.region));
        body.push_str(&format!("<br>Alert: {}", alert));
        body.push_str("<br><br>");

        body.push_str(&format!("<br>Storage <b>{}</b> Properties:", storage.name));
        body.push_str(&format!("<br>Storage URL: <a href='{url}'>{url}</a>"));
        body.push_str(&format!("<br>Type: {}", storage.store_type));
        body.push_str(&format!(
            "<br>Free Space: {} GB ({}%)",
            gib(storage.free_space),
            storage.free_space_percent
        ));
        body.push_str(&format!(
            "<br>Used Space: {} GB ({}%)",
            gib(storage.used_space),
            storage.used_space_percent
        ));
        body.push_str(&format!("<br>Total Space: {} GB", gib(storage.total_space)));
        body.push_str("<br><br>");

        body.push_str("<br>Information for Registered VMs:");
        body.push_str(&format!(
            "<br>Used + Uncommitted Space: {} GB ({}%)",
            gib(storage.provisioned),
            storage.provisioned_percent
        ));
        body.push_str("<br><br>");

        body.push_str("<br>Content:");
        body.push_str(&format!(
            "<br>VM Provisioned Disk Files: {} GB ({}%)",
            gib(storage.disk_size),
            storage.disk_percent_of_used
        ));
        body.push_str(&format!(
            "<br>VM Snapshot Files: {} GB ({}%)",
            gib(storage.snapshot_size),
            storage.snapshot_percent_of_used
        ));
        body.push_str(&format!(
            "<br>VM Memory Files: {} GB ({}%)",
            gib(storage.memory_size),
            storage.memory_percent_of_used
        ));
        body.push_str("<br><br>");

        body.push_str("<br>Relationships:");
        body.push_str(&format!(
            "<br>Number of Hosts attached: {}",
            storage.host_count
        ));
        body.push_str(&format!("<br>Total Number of VMs: {}", storage.vm_count));
        body.push_str("<br><br>");

        body.push_str("<br>Datastore Tags:");
        body.push_str(&format!("<br>{:?}", storage.tags));
        body.push_str("<br><br>");

        body.push_str("<br>Regards,");
        body.push_str(&format!("<br>{}", signature));

        Self {
            object,
            alert,
            subject,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trigger::ServerInfo;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn sample_trigger() -> TriggerDocument {
        TriggerDocument {
            alert_description: "Datastore Free Space Low".to_string(),
            server: ServerInfo {
                hostname: "cfme01".to_string(),
                ipaddress: "10.1.2.3".to_string(),
                region: 0,
            },
            storage: None,
        }
    }

    fn sample_storage() -> StorageSnapshot {
        StorageSnapshot {
            name: "DS01".to_string(),
            id: 42,
            store_type: "VMFS".to_string(),
            free_space: 10 * GIB,
            used_space: 90 * GIB,
            total_space: 100 * GIB,
            free_space_percent: 10.0,
            used_space_percent: 90.0,
            provisioned: 120 * GIB,
            provisioned_percent: 120.0,
            disk_size: 80 * GIB,
            disk_percent_of_used: 88.9,
            snapshot_size: 5 * GIB,
            snapshot_percent_of_used: 5.6,
            memory_size: GIB,
            memory_percent_of_used: 1.1,
            host_count: 4,
            vm_count: 37,
            tags: vec!["prod".to_string(), "tier1".to_string()],
        }
    }

    #[test]
    fn test_subject_and_object() {
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &Config::default());
        assert_eq!(
            details.subject,
            "Datastore Free Space Low | Datastore: [DS01]"
        );
        assert_eq!(details.object, "Datastore - DS01");
        assert_eq!(details.alert, "Datastore Free Space Low");
    }

    #[test]
    fn test_body_space_metrics() {
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &Config::default());
        assert!(details.body.contains("Free Space: 10 GB (10%)"));
        assert!(details.body.contains("Used Space: 90 GB (90%)"));
        assert!(details.body.contains("Total Space: 100 GB"));
        assert!(details.body.contains("Used + Uncommitted Space: 120 GB (120%)"));
    }

    #[test]
    fn test_body_content_and_relationships() {
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &Config::default());
        assert!(details.body.contains("VM Provisioned Disk Files: 80 GB (88.9%)"));
        assert!(details.body.contains("VM Snapshot Files: 5 GB (5.6%)"));
        assert!(details.body.contains("VM Memory Files: 1 GB (1.1%)"));
        assert!(details.body.contains("Number of Hosts attached: 4"));
        assert!(details.body.contains("Total Number of VMs: 37"));
        assert!(details.body.contains(r#"["prod", "tier1"]"#));
    }

    #[test]
    fn test_gib_figures_are_floored() {
        let mut storage = sample_storage();
        storage.free_space = 10 * GIB + GIB / 2;
        let details = AlertDetails::build(&storage, &sample_trigger(), &Config::default());
        assert!(details.body.contains("Free Space: 10 GB"));
    }

    #[test]
    fn test_url_falls_back_to_server_ip() {
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &Config::default());
        assert!(details.body.contains("https://10.1.2.3/Storage/show/42"));
    }

    #[test]
    fn test_url_uses_configured_appliance() {
        let mut config = Config::default();
        config.appliance.address = Some("cfme.example.com".to_string());
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &config);
        assert!(details.body.contains("https://cfme.example.com/Storage/show/42"));
        assert!(!details.body.contains("https://10.1.2.3/"));
    }

    #[test]
    fn test_signature_in_footer() {
        let mut config = Config::default();
        config.appliance.signature = Some("Cloud Operations".to_string());
        let details = AlertDetails::build(&sample_storage(), &sample_trigger(), &config);
        assert!(details.body.ends_with("<br>Regards,<br>Cloud Operations"));
    }

    #[test]
    fn test_zeroed_snapshot_formats_cleanly() {
        let storage = StorageSnapshot {
            name: "DS01".to_string(),
            ..Default::default()
        };
        let details = AlertDetails::build(&storage, &sample_trigger(), &Config::default());
        assert!(details.body.contains("Free Space: 0 GB (0%)"));
        assert!(details.body.contains("Datastore Tags:<br>[]"));
    }
}
