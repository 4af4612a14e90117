//! Storage snapshot domain type
//!
//! A point-in-time view of a datastore's capacity and usage metrics,
//! taken by the automation engine when the alert fired.

use serde::{Deserialize, Serialize};

const GIB: u64 = 1024 * 1024 * 1024;

/// Convert a byte count to whole gibibytes, rounding down.
pub fn gib(bytes: u64) -> u64 {
    bytes / GIB
}

/// Capacity and usage metrics for a single datastore.
///
/// Field names use the crate's vocabulary; serde aliases accept the
/// automation engine's raw attribute names so an engine-side dump can be
/// fed through unmodified. Absent numeric fields default to zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageSnapshot {
    /// Datastore name
    pub name: String,
    /// Engine-side record id, used to build the storage URL
    pub id: u64,
    /// Backing store type (VMFS, NFS, ...)
    pub store_type: String,
    /// Free space in bytes
    pub free_space: u64,
    /// Used space in bytes
    #[serde(alias = "v_used_space")]
    pub used_space: u64,
    /// Total capacity in bytes
    pub total_space: u64,
    /// Free space as a percentage of total
    #[serde(alias = "v_free_space_percent_of_total")]
    pub free_space_percent: f64,
    /// Used space as a percentage of total
    #[serde(alias = "v_used_space_percent_of_total")]
    pub used_space_percent: f64,
    /// Used plus uncommitted space in bytes
    #[serde(alias = "v_total_provisioned")]
    pub provisioned: u64,
    /// Provisioned space as a percentage of total
    #[serde(alias = "v_provisioned_percent_of_total")]
    pub provisioned_percent: f64,
    /// VM disk file bytes
    pub disk_size: u64,
    /// Disk files as a percentage of used space
    #[serde(alias = "v_disk_percent_of_used")]
    pub disk_percent_of_used: f64,
    /// VM snapshot file bytes
    pub snapshot_size: u64,
    /// Snapshot files as a percentage of used space
    #[serde(alias = "v_snapshot_percent_of_used")]
    pub snapshot_percent_of_used: f64,
    /// VM memory file bytes
    #[serde(alias = "v_total_memory_size")]
    pub memory_size: u64,
    /// Memory files as a percentage of used space
    #[serde(alias = "v_memory_percent_of_used")]
    pub memory_percent_of_used: f64,
    /// Number of hosts attached
    #[serde(alias = "v_total_hosts")]
    pub host_count: u64,
    /// Number of VMs registered
    #[serde(alias = "v_total_vms")]
    pub vm_count: u64,
    /// Tags assigned to the datastore
    pub tags: Vec<String>,
}
