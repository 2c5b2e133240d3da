//! Erasure-Coding Stripe Layout
//!
//! Data-strip resolution per topology and the filesystem overhead tiers
//! keyed on the resolved strip count. Both tables are threshold lists
//! sorted ascending; the first threshold at or above the key wins and
//! anything past the last threshold falls into the plateau value.

use super::topology::TopologyMode;

// =============================================================================
// Layout Constants
// =============================================================================

/// Parity strips reserved in every stripe, regardless of scale
pub const PARITY_STRIP_COUNT: u32 = 4;

/// Chassis subtracted before scaling the HA stripe width
pub const HA_CHASSIS_OFFSET: u32 = 4;

/// Data strips gained per chassis above the HA offset
pub const HA_STRIPS_PER_CHASSIS: u32 = 2;

/// Smallest HA cluster with at least one data strip
///
/// Five and six chassis resolve to 2 and 4 data strips, i.e. 200% and 100%
/// parity overhead, so their usable capacity comes out negative.
pub const HA_MIN_CHASSIS: u32 = HA_CHASSIS_OFFSET + 1;

/// Data strips for standard clusters at or beyond the last tabulated size
pub const STANDARD_STRIP_PLATEAU: u32 = 146;

/// Standard layout: (chassis count, data strips)
pub const STANDARD_STRIP_TIERS: &[(u32, u32)] = &[
    (1, 16),
    (2, 36),
    (3, 58),
    (4, 80),
    (5, 102),
    (6, 124),
];

/// Additional filesystem overhead for stripes wider than every tier (%)
pub const FILESYSTEM_OVERHEAD_PLATEAU_PCT: f64 = 8.88;

/// Metadata/journaling overhead: (max data strips, additional overhead %)
pub const FILESYSTEM_OVERHEAD_TIERS: &[(u32, f64)] = &[
    (16, 7.3),
    (36, 8.22),
    (58, 8.54),
    (80, 8.70),
    (102, 8.79),
    (124, 8.84),
];

// =============================================================================
// Lookup
// =============================================================================

fn first_tier<T: Copy>(tiers: &[(u32, T)], key: u32, plateau: T) -> T {
    tiers
        .iter()
        .find(|(limit, _)| key <= *limit)
        .map(|(_, value)| *value)
        .unwrap_or(plateau)
}

/// Resolve the data-strip count for a cluster
///
/// Returns `None` when the layout yields no data strips (HA clusters of
/// four chassis or fewer, or an empty cluster).
pub fn data_strip_count(topology: TopologyMode, chassis_count: u32) -> Option<u32> {
    if chassis_count == 0 {
        return None;
    }

    let strips = match topology {
        TopologyMode::Standard => {
            first_tier(STANDARD_STRIP_TIERS, chassis_count, STANDARD_STRIP_PLATEAU)
        }
        TopologyMode::DboxHa => chassis_count
            .checked_sub(HA_CHASSIS_OFFSET)?
            .checked_mul(HA_STRIPS_PER_CHASSIS)?,
    };

    (strips > 0).then_some(strips)
}

/// Parity overhead as a percentage of the data strips
pub fn erasure_coding_overhead_pct(data_strips: u32) -> f64 {
    (PARITY_STRIP_COUNT as f64 / data_strips as f64) * 100.0
}

/// Additional filesystem overhead for a stripe width
pub fn additional_overhead_pct(data_strips: u32) -> f64 {
    first_tier(
        FILESYSTEM_OVERHEAD_TIERS,
        data_strips,
        FILESYSTEM_OVERHEAD_PLATEAU_PCT,
    )
}

/// Smallest chassis count accepted for a topology
pub fn min_chassis(topology: TopologyMode) -> u32 {
    match topology {
        TopologyMode::Standard => 1,
        TopologyMode::DboxHa => HA_MIN_CHASSIS,
    }
}
