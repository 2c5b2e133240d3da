//! Cluster Topology Modes

use crate::error::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment layout of the DBox cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TopologyMode {
    /// Independent chassis, stripe width from the tabulated layout policy
    #[default]
    Standard,
    /// DBox high-availability clustering, stripe width grows with chassis count
    DboxHa,
}

impl TopologyMode {
    /// Wire/CLI name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyMode::Standard => "standard",
            TopologyMode::DboxHa => "dbox-ha",
        }
    }

    /// All modes in presentation order
    pub fn all() -> &'static [TopologyMode] {
        &[TopologyMode::Standard, TopologyMode::DboxHa]
    }
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(TopologyMode::Standard),
            "dbox-ha" => Ok(TopologyMode::DboxHa),
            _ => Err(Error::InvalidTopology {
                value: s.to_string(),
            }),
        }
    }
}
