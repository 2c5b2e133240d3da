//! Error types for the DBox sizer
//!
//! Provides structured error types for request validation, configuration
//! loading, and the I/O done by the command-line front end.

use thiserror::Error;

/// Unified error type for the sizer
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Request Validation Errors
    // =========================================================================
    #[error("Unknown DBox model: {key}")]
    UnknownModel { key: String },

    #[error("Invalid disk capacity {capacity_tb} TB for model {model}: allowed {allowed:?}")]
    InvalidDiskCapacity {
        model: String,
        capacity_tb: f64,
        allowed: Vec<f64>,
    },

    #[error("Invalid chassis count {count} for {topology} topology: must be between {min} and {max}")]
    InvalidChassisCount {
        count: u32,
        min: u32,
        max: u32,
        topology: String,
    },

    #[error("Invalid topology mode: {value} (expected standard or dbox-ha)")]
    InvalidTopology { value: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Name of the request field this error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::UnknownModel { .. } => Some("model"),
            Error::InvalidDiskCapacity { .. } => Some("disk_capacity_tb"),
            Error::InvalidChassisCount { .. } => Some("chassis_count"),
            Error::InvalidTopology { .. } => Some("topology"),
            _ => None,
        }
    }

    /// Check if this error was raised while validating a request
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }

    /// Check if this error is retryable
    ///
    /// Sizing is a pure computation: the same input always fails the same way.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type alias for the sizer
pub type Result<T> = std::result::Result<T, Error>;
