//! Advisory Cluster Performance
//!
//! Linear scale-out of the per-chassis vendor figures. Informational only;
//! nothing here feeds the capacity pipeline.

use super::calculator::CapacityEngine;
use super::topology::TopologyMode;
use crate::catalog::get_model;
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate advisory performance for a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPerformance {
    pub model_key: String,
    pub chassis_count: u32,
    #[serde(rename = "sequentialReadBWGBs")]
    pub sequential_read_bw_gbs: f64,
    #[serde(rename = "sequentialWriteBWGBs")]
    pub sequential_write_bw_gbs: f64,
    #[serde(rename = "randomReadIOPS")]
    pub random_read_iops: u64,
    #[serde(rename = "randomWriteIOPS")]
    pub random_write_iops: u64,
}

impl CapacityEngine {
    /// Estimate cluster performance from the model's per-chassis figures
    pub fn estimate_performance(
        &self,
        model_key: &str,
        chassis_count: u32,
    ) -> Result<ClusterPerformance> {
        let model = get_model(model_key)?;

        let range = self.chassis_range(TopologyMode::Standard);
        if !range.contains(&chassis_count) {
            return Err(Error::InvalidChassisCount {
                count: chassis_count,
                min: *range.start(),
                max: *range.end(),
                topology: TopologyMode::Standard.to_string(),
            });
        }

        let scale = chassis_count as f64;
        Ok(ClusterPerformance {
            model_key: model_key.to_string(),
            chassis_count,
            sequential_read_bw_gbs: model.sequential_read_bw_gbs * scale,
            sequential_write_bw_gbs: model.sequential_write_bw_gbs * scale,
            random_read_iops: model.random_read_iops * chassis_count as u64,
            random_write_iops: model.random_write_iops * chassis_count as u64,
        })
    }
}
