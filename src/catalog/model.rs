//! Hardware Model Definitions
//!
//! Static description of a DBox chassis: drive layout, permitted QLC drive
//! sizes, and the vendor's advisory performance figures.

use serde::Serialize;

/// Absolute tolerance used when matching a requested drive size (TB)
pub const DISK_CAPACITY_TOLERANCE_TB: f64 = 1e-6;

// =============================================================================
// Hardware Model
// =============================================================================

/// A supported DBox hardware model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareModel {
    /// Total drive bays populated per chassis
    pub total_drives: u32,
    /// Storage-class memory drives (metadata tier)
    pub scm_drive_count: u32,
    /// QLC flash drives (bulk data tier)
    pub qlc_drive_count: u32,
    /// Human-readable model name
    pub display_name: &'static str,
    /// Short drive layout description
    pub description: &'static str,
    /// Permitted QLC drive sizes in TB, ascending
    #[serde(rename = "allowedDiskCapacitiesTB")]
    pub allowed_disk_capacities_tb: &'static [f64],
    /// Sequential read bandwidth per chassis (GB/s), advisory
    #[serde(rename = "sequentialReadBWGBs")]
    pub sequential_read_bw_gbs: f64,
    /// Sequential write bandwidth per chassis (GB/s), advisory
    #[serde(rename = "sequentialWriteBWGBs")]
    pub sequential_write_bw_gbs: f64,
    /// 4K random read IOPS per chassis, advisory
    #[serde(rename = "randomReadIOPS")]
    pub random_read_iops: u64,
    /// 4K random write IOPS per chassis, advisory
    #[serde(rename = "randomWriteIOPS")]
    pub random_write_iops: u64,
}

impl HardwareModel {
    /// Check whether a drive size is one this model ships with
    pub fn supports_capacity(&self, capacity_tb: f64) -> bool {
        self.allowed_disk_capacities_tb
            .iter()
            .any(|allowed| (allowed - capacity_tb).abs() < DISK_CAPACITY_TOLERANCE_TB)
    }

    /// Raw QLC capacity of a single chassis populated with `capacity_tb` drives
    ///
    /// SCM drives hold metadata and never count towards raw capacity.
    pub fn raw_capacity_per_chassis_tb(&self, capacity_tb: f64) -> f64 {
        capacity_tb * self.qlc_drive_count as f64
    }

    /// Largest drive size this model ships with
    pub fn max_disk_capacity_tb(&self) -> f64 {
        self.allowed_disk_capacities_tb
            .iter()
            .copied()
            .fold(0.0, f64::max)
    }

    /// Check the drive-count and capacity-list invariants
    pub fn is_consistent(&self) -> bool {
        let drives_add_up = self.scm_drive_count + self.qlc_drive_count == self.total_drives;
        let capacities_valid = !self.allowed_disk_capacities_tb.is_empty()
            && self.allowed_disk_capacities_tb.iter().all(|c| *c > 0.0)
            && self
                .allowed_disk_capacities_tb
                .windows(2)
                .all(|pair| pair[0] < pair[1]);
        let advisory_valid = self.sequential_read_bw_gbs > 0.0
            && self.sequential_write_bw_gbs > 0.0
            && self.random_read_iops > 0
            && self.random_write_iops > 0;

        drives_add_up && capacities_valid && advisory_valid
    }
}

impl std::fmt::Display for HardwareModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.description)
    }
}
