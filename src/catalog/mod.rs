//! Model Catalog
//!
//! The fixed set of supported DBox hardware models, built once for the
//! lifetime of the process and only ever read afterwards.

pub mod model;

pub use model::*;

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::sync::LazyLock;

// =============================================================================
// Built-in Models
// =============================================================================

/// Catalog keyed by model identifier, in declaration order
static CATALOG: LazyLock<IndexMap<&'static str, HardwareModel>> = LazyLock::new(|| {
    let mut models = IndexMap::new();

    models.insert(
        "mavericks",
        HardwareModel {
            total_drives: 56,
            scm_drive_count: 12,
            qlc_drive_count: 44,
            display_name: "Mavericks (DF-5616/DF-5630)",
            description: "12 SCM (1.5TB) + 44 QLC SSDs",
            allowed_disk_capacities_tb: &[15.36, 30.72],
            sequential_read_bw_gbs: 40.0,
            sequential_write_bw_gbs: 5.0,
            random_read_iops: 2_000_000,
            random_write_iops: 400_000,
        },
    );

    models.insert(
        "alletra",
        HardwareModel {
            total_drives: 24,
            scm_drive_count: 4,
            qlc_drive_count: 20,
            display_name: "HPE Alletra MP",
            description: "4 SCM + 20 QLC SSDs",
            allowed_disk_capacities_tb: &[7.68, 15.36, 30.72],
            sequential_read_bw_gbs: 20.0,
            sequential_write_bw_gbs: 2.5,
            random_read_iops: 1_000_000,
            random_write_iops: 200_000,
        },
    );

    models.insert(
        "ceres",
        HardwareModel {
            total_drives: 30,
            scm_drive_count: 8,
            qlc_drive_count: 22,
            display_name: "Ceres",
            description: "8 SCM + 22 QLC SSDs",
            allowed_disk_capacities_tb: &[15.36, 61.44, 122.88],
            sequential_read_bw_gbs: 50.0,
            sequential_write_bw_gbs: 5.5,
            random_read_iops: 800_000,
            random_write_iops: 150_000,
        },
    );

    models
});

// =============================================================================
// Lookup
// =============================================================================

/// Look up a model by its exact key
pub fn get_model(key: &str) -> Result<&'static HardwareModel> {
    CATALOG
        .get(key)
        .ok_or_else(|| Error::UnknownModel {
            key: key.to_string(),
        })
}

/// All models in declaration order
pub fn list_models() -> impl Iterator<Item = (&'static str, &'static HardwareModel)> {
    CATALOG.iter().map(|(key, model)| (*key, model))
}

/// All model keys in declaration order
pub fn model_keys() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}
