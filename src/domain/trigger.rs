//! Trigger document
//!
//! The document handed to the handler by the automation engine when a
//! storage-capacity alert fires: the alert description, the identity of
//! the server that raised it, and a snapshot of the affected datastore.

use crate::domain::storage::StorageSnapshot;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Identity of the automation server that raised the alert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerInfo {
    /// Server hostname
    pub hostname: String,
    /// Server IP address; fallback appliance address for the storage URL
    #[serde(alias = "ip_address")]
    pub ipaddress: String,
    /// Region the server belongs to
    #[serde(alias = "region_number")]
    pub region: u32,
}

/// One alert's worth of input.
///
/// `storage` may be absent: the handler then has nothing to act on and
/// exits successfully without delivering anything.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TriggerDocument {
    /// Human-readable description of the triggering condition
    #[serde(alias = "miq_alert_description")]
    pub alert_description: String,
    /// Identity of the raising server
    #[serde(alias = "miq_server")]
    pub server: ServerInfo,
    /// Snapshot of the affected datastore
    pub storage: Option<StorageSnapshot>,
}

impl TriggerDocument {
    /// Read a trigger document from a file path, or stdin when the path is `-`.
    pub fn load(path: &str) -> Result<Self> {
        let contents = if path == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)?
        };

        Self::from_json(&contents)
    }

    /// Parse a trigger document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_DOC: &str = r#"{
        "alert_description": "Datastore Free Space Low",
        "server": {"hostname": "cfme01", "ipaddress": "10.1.2.3", "region": 0},
        "storage": {"name": "DS01", "free_space": 10737418240}
    }"#;

    #[test]
    fn test_parse_full_document() {
        let doc = TriggerDocument::from_json(FULL_DOC).unwrap();
        assert_eq!(doc.alert_description, "Datastore Free Space Low");
        assert_eq!(doc.server.hostname, "cfme01");
        assert_eq!(doc.server.ipaddress, "10.1.2.3");
        assert_eq!(doc.storage.unwrap().name, "DS01");
    }

    #[test]
    fn test_parse_null_storage() {
        let doc =
            TriggerDocument::from_json(r#"{"alert_description": "x", "storage": null}"#).unwrap();
        assert!(doc.storage.is_none());
    }

    #[test]
    fn test_parse_absent_storage() {
        let doc = TriggerDocument::from_json(r#"{"alert_description": "x"}"#).unwrap();
        assert!(doc.storage.is_none());
    }

    #[test]
    fn test_parse_engine_key_names() {
        let json = r#"{
            "miq_alert_description": "Datastore Free Space Low",
            "miq_server": {"hostname": "cfme01", "ip_address": "10.1.2.3", "region_number": 7}
        }"#;

        let doc = TriggerDocument::from_json(json).unwrap();
        assert_eq!(doc.alert_description, "Datastore Free Space Low");
        assert_eq!(doc.server.region, 7);
        assert_eq!(doc.server.ipaddress, "10.1.2.3");
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = TriggerDocument::from_json("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", FULL_DOC).unwrap();

        let doc = TriggerDocument::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(doc.alert_description, "Datastore Free Space Low");
    }

    #[test]
    fn test_load_missing_file() {
        let result = TriggerDocument::load("/nonexistent/trigger.json");
        assert!(result.is_err());
    }
}
