//! Simulation configuration.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! rows = 12
//! columns = 24
//! delay_ms = 250
//! seed = 7
//! threads = 2
//! death_clock = "recorded"
//! max_generations = 1000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLUMNS: usize = 32;
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Whether deaths stamp the generation they happened in.
///
/// `Unrecorded` never stamps, so the six-generation timeout never fires and
/// every dead cell counts as awaiting revival. `Recorded` stamps every
/// rule-driven death.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathClock {
    #[default]
    Unrecorded,
    Recorded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of cells per row.
    pub columns: usize,

    /// Pause between generations when driven by [`crate::driver::run`].
    pub delay_ms: u64,

    /// Seed for the random revival pick. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Worker threads for rule evaluation (0 is treated as 1).
    pub threads: u8,

    pub death_clock: DeathClock,

    /// Stop the driver after this many generations even if not converged.
    pub max_generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
            threads: 1,
            death_clock: DeathClock::Unrecorded,
            max_generations: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
