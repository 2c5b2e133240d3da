//! Capacity Request and Result Records

use super::topology::TopologyMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

/// Input to a single capacity calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRequest {
    /// Catalog key of the DBox model
    pub model_key: String,
    /// Size of each QLC drive (TB)
    #[serde(rename = "diskCapacityTB")]
    pub disk_capacity_tb: f64,
    /// Number of DBox chassis in the cluster
    pub chassis_count: u32,
    /// Cluster layout
    #[serde(default)]
    pub topology: TopologyMode,
}

impl CapacityRequest {
    /// Create a request
    pub fn new(
        model_key: impl Into<String>,
        disk_capacity_tb: f64,
        chassis_count: u32,
        topology: TopologyMode,
    ) -> Self {
        Self {
            model_key: model_key.into(),
            disk_capacity_tb,
            chassis_count,
            topology,
        }
    }

    /// Same request with a different chassis count
    pub fn with_chassis(&self, chassis_count: u32) -> Self {
        Self {
            chassis_count,
            ..self.clone()
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Overhead components applied between raw and usable capacity (%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverheadBreakdown {
    /// Parity strips relative to data strips
    pub erasure_coding_pct: f64,
    /// Metadata and journaling tier for the stripe width
    pub additional_pct: f64,
    /// Sum of both components
    pub total_pct: f64,
}

/// Capacity breakdown for a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacityResult {
    #[serde(rename = "rawCapacityTB")]
    pub raw_capacity_tb: f64,
    #[serde(rename = "usableCapacityTB")]
    pub usable_capacity_tb: f64,
    #[serde(rename = "effectiveCapacityTB")]
    pub effective_capacity_tb: f64,
    pub data_strip_count: u32,
    pub parity_strip_count: u32,
    #[serde(rename = "rawCapacityPerChassisTB")]
    pub raw_capacity_per_chassis_tb: f64,
    pub overhead: OverheadBreakdown,
    pub data_reduction_ratio: f64,
}

impl CapacityResult {
    /// Usable capacity as a fraction of raw (0.0 - 1.0)
    pub fn efficiency(&self) -> f64 {
        if self.raw_capacity_tb > 0.0 {
            self.usable_capacity_tb / self.raw_capacity_tb
        } else {
            0.0
        }
    }

    /// Stripe layout in `data+parity` notation
    pub fn stripe_layout(&self) -> String {
        format!("{}+{}", self.data_strip_count, self.parity_strip_count)
    }
}
