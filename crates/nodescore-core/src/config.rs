use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;
use crate::error::ScoreError;
use crate::normalize::DEFAULT_RANK_CEILING;

/// Tunables for a scoring run.
///
/// ```toml
/// rank_ceiling = 100
/// criteria = ["InboundEdges", "OutboundEdges"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Largest normalized rank handed to the renderer.
    #[serde(default = "default_rank_ceiling")]
    pub rank_ceiling: u32,
    /// Criteria applied when the caller does not name any.
    #[serde(default = "default_criteria")]
    pub criteria: Vec<Criterion>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rank_ceiling: default_rank_ceiling(),
            criteria: default_criteria(),
        }
    }
}

const fn default_rank_ceiling() -> u32 {
    DEFAULT_RANK_CEILING
}

fn default_criteria() -> Vec<Criterion> {
    Criterion::ALL.to_vec()
}

impl ScoringConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Config`] for malformed TOML or unknown keys and
    /// [`ScoreError::InvalidRankCeiling`] for a zero ceiling.
    pub fn from_toml_str(content: &str) -> Result<Self, ScoreError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ScoreError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidRankCeiling`] when `rank_ceiling` is 0.
    pub const fn validate(&self) -> Result<(), ScoreError> {
        if self.rank_ceiling == 0 {
            return Err(ScoreError::InvalidRankCeiling(self.rank_ceiling));
        }
        Ok(())
    }
}

/// Load a [`ScoringConfig`] from `path`, falling back to defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ScoringConfig> {
    if !path.exists() {
        return Ok(ScoringConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    ScoringConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
