//! DBox Sizer - Capacity Calculator
//!
//! Computes raw, usable, and effective capacity for clustered all-flash
//! DBox deployments from a hardware model, QLC drive size, chassis count,
//! and topology mode.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Request    │──▶│  Validation  │──▶│ Stripe Width │──▶│   Overhead   │
//! │ model/disk/  │   │  (catalog)   │   │ (topology +  │   │  EC + FS     │
//! │ chassis/topo │   │              │   │  scale)      │   │  tiers       │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────┬───────┘
//!                                                                 │
//!                    raw ──(1 - overhead)──▶ usable ──(× DRR)──▶ effective
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Hardware model definitions and lookup
//! - [`engine`]: Capacity pipeline, stripe layout, performance estimate
//! - [`config`]: Engine configuration
//! - [`error`]: Error types and handling

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use catalog::{get_model, list_models, HardwareModel};

pub use config::SizerConfig;

pub use engine::{
    compute_capacity, CapacityEngine, CapacityRequest, CapacityResult, ClusterPerformance,
    OverheadBreakdown, TopologyMode,
};

pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
