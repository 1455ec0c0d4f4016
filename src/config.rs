//! Analysis configuration.
//!
//! The host decides how the configuration is stored, every field has a default so partial
//! documents deserialize.

use serde::{Deserialize, Serialize};

use crate::{
    centrality::DegreeMode,
    error::{Error, Result},
};

/// Settings shared by the centrality computations and their consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Whether centrality scores carry a normalized value distinct from the raw one.
    pub normalize: bool,
    /// Which edges count towards the degree of a vertex in directed graphs.
    pub degree_mode: DegreeMode,
    /// Vertices processed between two logged progress updates.
    pub progress_interval: usize,
    /// Number of entries a ranking keeps.
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            normalize: false,
            degree_mode: DegreeMode::Total,
            progress_interval: 100,
            top_k: 10,
        }
    }
}

impl AnalysisConfig {
    /// Checks the values are in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the progress interval or the ranking size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(Error::InvalidConfig("progress_interval must be greater than zero"));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be greater than zero"));
        }

        Ok(())
    }
}
