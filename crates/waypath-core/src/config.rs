//! Configuration for waypath
//!
//! A small TOML file tunes how the link index is materialized into a graph
//! and the default bound for enumeration queries. Everything has a default,
//! so the file is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Weight assigned to edges whose link carries no explicit weight.
    pub default_weight: f64,
    /// Hop bound used by enumeration queries when the caller gives none.
    pub default_max_hops: usize,
    /// Materialize each logical link as two directed edges.
    pub bidirectional: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_weight: 1.0,
            default_max_hops: 10,
            bidirectional: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.default_weight >= 0.0 && self.default_weight.is_finite()) {
            return Err(Error::InvalidWeight {
                value: self.default_weight,
            });
        }
        if self.default_max_hops == 0 {
            return Err(Error::InvalidBound { value: 0 });
        }
        Ok(())
    }
}
