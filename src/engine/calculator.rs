//! Capacity Engine
//!
//! Validates a [`CapacityRequest`] against the model catalog and runs the
//! raw -> usable -> effective pipeline. No intermediate value is rounded;
//! formatting is left to the caller.

use super::request::{CapacityRequest, CapacityResult, OverheadBreakdown};
use super::strips::{
    additional_overhead_pct, data_strip_count, erasure_coding_overhead_pct, min_chassis,
    PARITY_STRIP_COUNT,
};
use super::topology::TopologyMode;
use crate::catalog::{get_model, HardwareModel};
use crate::config::SizerConfig;
use crate::error::{Error, Result};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

// =============================================================================
// Capacity Engine
// =============================================================================

/// Computes cluster capacity from a request
#[derive(Debug, Clone, Default)]
pub struct CapacityEngine {
    config: SizerConfig,
}

impl CapacityEngine {
    /// Create an engine with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom config
    pub fn with_config(config: SizerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SizerConfig {
        &self.config
    }

    /// Chassis counts accepted for a topology
    pub fn chassis_range(&self, topology: TopologyMode) -> RangeInclusive<u32> {
        min_chassis(topology)..=self.config.max_chassis
    }

    /// Validate a request, returning the model it refers to
    pub fn validate(&self, request: &CapacityRequest) -> Result<&'static HardwareModel> {
        let model = get_model(&request.model_key)?;

        if !model.supports_capacity(request.disk_capacity_tb) {
            return Err(Error::InvalidDiskCapacity {
                model: request.model_key.clone(),
                capacity_tb: request.disk_capacity_tb,
                allowed: model.allowed_disk_capacities_tb.to_vec(),
            });
        }

        let range = self.chassis_range(request.topology);
        if !range.contains(&request.chassis_count) {
            return Err(Error::InvalidChassisCount {
                count: request.chassis_count,
                min: *range.start(),
                max: *range.end(),
                topology: request.topology.to_string(),
            });
        }

        Ok(model)
    }

    /// Compute raw, usable, and effective capacity
    pub fn compute_capacity(&self, request: &CapacityRequest) -> Result<CapacityResult> {
        let model = self.validate(request).map_err(|e| {
            warn!(
                model = %request.model_key,
                disk_tb = request.disk_capacity_tb,
                chassis = request.chassis_count,
                topology = %request.topology,
                "Rejected capacity request: {}",
                e
            );
            e
        })?;

        let raw_per_chassis = model.raw_capacity_per_chassis_tb(request.disk_capacity_tb);
        let raw_total = raw_per_chassis * request.chassis_count as f64;

        // Validation bounds the chassis count so every accepted request has strips.
        let data_strips = data_strip_count(request.topology, request.chassis_count).ok_or_else(
            || Error::InvalidChassisCount {
                count: request.chassis_count,
                min: min_chassis(request.topology),
                max: self.config.max_chassis,
                topology: request.topology.to_string(),
            },
        )?;

        let overhead = overhead_for(data_strips);
        let usable = raw_total * (100.0 - overhead.total_pct) / 100.0;
        let effective = usable * self.config.data_reduction_ratio;

        debug!(
            model = %request.model_key,
            chassis = request.chassis_count,
            topology = %request.topology,
            data_strips,
            ec_overhead_pct = overhead.erasure_coding_pct,
            additional_overhead_pct = overhead.additional_pct,
            raw_tb = raw_total,
            usable_tb = usable,
            effective_tb = effective,
            "Computed capacity"
        );

        Ok(CapacityResult {
            raw_capacity_tb: raw_total,
            usable_capacity_tb: usable,
            effective_capacity_tb: effective,
            data_strip_count: data_strips,
            parity_strip_count: PARITY_STRIP_COUNT,
            raw_capacity_per_chassis_tb: raw_per_chassis,
            overhead,
            data_reduction_ratio: self.config.data_reduction_ratio,
        })
    }
}

/// Overhead percentages for a resolved stripe width
fn overhead_for(data_strips: u32) -> OverheadBreakdown {
    let erasure_coding_pct = erasure_coding_overhead_pct(data_strips);
    let additional_pct = additional_overhead_pct(data_strips);

    OverheadBreakdown {
        erasure_coding_pct,
        additional_pct,
        total_pct: erasure_coding_pct + additional_pct,
    }
}

/// Compute capacity with the default engine
pub fn compute_capacity(request: &CapacityRequest) -> Result<CapacityResult> {
    CapacityEngine::new().compute_capacity(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::list_models;
    use assert_matches::assert_matches;

    fn standard(model: &str, disk_tb: f64, chassis: u32) -> CapacityRequest {
        CapacityRequest::new(model, disk_tb, chassis, TopologyMode::Standard)
    }

    fn ha(model: &str, disk_tb: f64, chassis: u32) -> CapacityRequest {
        CapacityRequest::new(model, disk_tb, chassis, TopologyMode::DboxHa)
    }

    #[test]
    fn test_single_mavericks_end_to_end() {
        let result = compute_capacity(&standard("mavericks", 30.72, 1)).unwrap();

        assert!((result.raw_capacity_tb - 1351.68).abs() < 1e-9);
        assert_eq!(result.data_strip_count, 16);
        assert_eq!(result.parity_strip_count, 4);
        assert_eq!(result.overhead.erasure_coding_pct, 25.0);
        assert_eq!(result.overhead.additional_pct, 7.3);
        assert!((result.overhead.total_pct - 32.3).abs() < 1e-9);
        assert!((result.usable_capacity_tb - 915.08736).abs() < 1e-6);
        assert!((result.effective_capacity_tb - 1189.613568).abs() < 1e-6);
        assert!(result.usable_capacity_tb < result.raw_capacity_tb);
    }

    #[test]
    fn test_effective_is_usable_times_drr() {
        for chassis in [1, 2, 5, 10, 250] {
            let result = compute_capacity(&standard("mavericks", 30.72, chassis)).unwrap();
            assert_eq!(result.effective_capacity_tb, result.usable_capacity_tb * 1.30);
        }
        let result = compute_capacity(&ha("ceres", 122.88, 12)).unwrap();
        assert_eq!(result.effective_capacity_tb, result.usable_capacity_tb * 1.30);
    }

    #[test]
    fn test_usable_below_raw_for_all_models() {
        for (key, model) in list_models() {
            for &disk_tb in model.allowed_disk_capacities_tb {
                for chassis in [1, 3, 7, 40] {
                    let result = compute_capacity(&standard(key, disk_tb, chassis)).unwrap();
                    assert!(result.usable_capacity_tb < result.raw_capacity_tb);
                    assert!(result.usable_capacity_tb >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_capacity_monotonic_in_chassis() {
        for topology in TopologyMode::all() {
            let engine = CapacityEngine::new();
            let base = CapacityRequest::new("alletra", 15.36, 0, *topology);
            let mut previous: Option<CapacityResult> = None;

            for chassis in engine.chassis_range(*topology) {
                let result = engine.compute_capacity(&base.with_chassis(chassis)).unwrap();
                if let Some(prev) = &previous {
                    assert!(result.raw_capacity_tb > prev.raw_capacity_tb);
                    assert!(result.effective_capacity_tb > prev.effective_capacity_tb);
                }
                previous = Some(result);
            }
        }
    }

    #[test]
    fn test_strip_plateau() {
        let seven = compute_capacity(&standard("ceres", 15.36, 7)).unwrap();
        let twenty = compute_capacity(&standard("ceres", 15.36, 20)).unwrap();
        assert_eq!(seven.data_strip_count, 146);
        assert_eq!(twenty.data_strip_count, 146);
        assert_eq!(twenty.overhead.additional_pct, 8.88);
    }

    #[test]
    fn test_ha_diverges_from_standard() {
        for chassis in [5, 6, 7, 10, 20, 100] {
            let std_result = compute_capacity(&standard("mavericks", 30.72, chassis)).unwrap();
            let ha_result = compute_capacity(&ha("mavericks", 30.72, chassis)).unwrap();
            assert_ne!(std_result.data_strip_count, ha_result.data_strip_count);
            assert_eq!(std_result.raw_capacity_tb, ha_result.raw_capacity_tb);
        }
    }

    #[test]
    fn test_ha_small_clusters_rejected() {
        for chassis in 1..=4 {
            assert_matches!(
                compute_capacity(&ha("mavericks", 15.36, chassis)),
                Err(Error::InvalidChassisCount { count, min: 5, .. }) if count == chassis
            );
        }
    }

    #[test]
    fn test_ha_narrow_stripes_accepted() {
        for (chassis, strips) in [(5, 2), (6, 4)] {
            let result = compute_capacity(&ha("mavericks", 30.72, chassis)).unwrap();
            assert_eq!(result.data_strip_count, strips);
            assert!(result.overhead.total_pct >= 100.0);
            assert!(result.usable_capacity_tb <= result.raw_capacity_tb);
            assert_eq!(result.effective_capacity_tb, result.usable_capacity_tb * 1.30);
        }
    }

    #[test]
    fn test_ha_uses_same_overhead_tiers() {
        // 24 chassis -> 40 data strips, in the 58-strip tier
        let result = compute_capacity(&ha("alletra", 7.68, 24)).unwrap();
        assert_eq!(result.data_strip_count, 40);
        assert!((result.overhead.erasure_coding_pct - 10.0).abs() < 1e-9);
        assert_eq!(result.overhead.additional_pct, 8.54);
    }

    #[test]
    fn test_unknown_model() {
        assert_matches!(
            compute_capacity(&standard("nonexistent", 30.72, 1)),
            Err(Error::UnknownModel { key }) if key == "nonexistent"
        );
    }

    #[test]
    fn test_invalid_disk_capacity() {
        assert_matches!(
            compute_capacity(&standard("mavericks", 7.68, 1)),
            Err(Error::InvalidDiskCapacity { allowed, .. }) if allowed == vec![15.36, 30.72]
        );
        assert_matches!(
            compute_capacity(&standard("ceres", 0.0, 1)),
            Err(Error::InvalidDiskCapacity { .. })
        );
    }

    #[test]
    fn test_chassis_bounds() {
        assert_matches!(
            compute_capacity(&standard("mavericks", 30.72, 0)),
            Err(Error::InvalidChassisCount { min: 1, max: 250, .. })
        );
        assert!(compute_capacity(&standard("mavericks", 30.72, 250)).is_ok());
        assert_matches!(
            compute_capacity(&standard("mavericks", 30.72, 251)),
            Err(Error::InvalidChassisCount { count: 251, .. })
        );
    }

    #[test]
    fn test_validation_order() {
        // Unknown model wins over every other problem
        assert_matches!(
            compute_capacity(&ha("nonexistent", 1.0, 0)),
            Err(Error::UnknownModel { .. })
        );
        // Disk capacity is checked before chassis count
        assert_matches!(
            compute_capacity(&ha("alletra", 1.0, 0)),
            Err(Error::InvalidDiskCapacity { .. })
        );
    }

    #[test]
    fn test_custom_config() {
        let engine = CapacityEngine::with_config(SizerConfig {
            max_chassis: 8,
            data_reduction_ratio: 2.0,
        });

        let result = engine.compute_capacity(&standard("alletra", 30.72, 8)).unwrap();
        assert_eq!(result.effective_capacity_tb, result.usable_capacity_tb * 2.0);
        assert_eq!(result.data_reduction_ratio, 2.0);

        assert_matches!(
            engine.compute_capacity(&standard("alletra", 30.72, 9)),
            Err(Error::InvalidChassisCount { max: 8, .. })
        );
    }
}
