//! Capacity Engine Module
//!
//! Topology modes, stripe layout policy, and the raw -> usable -> effective
//! capacity pipeline.

pub mod calculator;
pub mod performance;
pub mod request;
pub mod strips;
pub mod topology;

pub use calculator::*;
pub use performance::*;
pub use request::*;
pub use topology::*;
