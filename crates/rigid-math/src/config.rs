// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loadable tolerance configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tolerance::{self, DEFAULT_TOLERANCE};
use crate::MathError;

/// Numerical policy that can be read from JSON and installed globally.
///
/// ```
/// use rigid_math::ToleranceConfig;
/// let cfg = ToleranceConfig::from_json(r#"{ "tolerance": 1e-9 }"#).unwrap();
/// assert_eq!(cfg.tolerance, 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Value installed by [`ToleranceConfig::apply`].
    pub tolerance: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ToleranceConfig {
    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, MathError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MathError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Snapshot of the currently installed policy.
    pub fn current() -> Self {
        Self {
            tolerance: tolerance::tolerance(),
        }
    }

    /// Installs this policy process-wide and returns the one it replaced.
    pub fn apply(&self) -> Self {
        Self {
            tolerance: tolerance::set_tolerance(self.tolerance),
        }
    }
}
