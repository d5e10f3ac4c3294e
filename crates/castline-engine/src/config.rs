//! Scenario configuration for the runner binary.
//!
//! The canonical configuration lives in `castline-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file. The
//! demo spot placement is fixed; the config controls the run bounds and
//! the angler roster.

use std::path::Path;

use castline_types::{NpcId, Position, ToolOption};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level scenario configuration.
///
/// Mirrors the structure of `castline-config.yaml`. All fields have
/// defaults, so a missing file runs the stock demo scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// World-level settings (name, seed, run bounds).
    #[serde(default)]
    pub world: WorldConfig,

    /// The angler roster to spawn at tick zero.
    #[serde(default = "default_anglers")]
    pub anglers: Vec<AnglerConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            anglers: default_anglers(),
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable scenario name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of ticks to run before stopping.
    #[serde(default = "default_ticks")]
    pub ticks: u64,

    /// Real-time milliseconds per tick (0 = run flat out).
    #[serde(default)]
    pub tick_interval_ms: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            ticks: default_ticks(),
            tick_interval_ms: 0,
        }
    }
}

/// One scripted angler: where they stand and which spot they work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnglerConfig {
    /// Display name for the run report.
    pub name: String,

    /// Starting fishing level.
    #[serde(default = "default_level")]
    pub level: u32,

    /// Starting map position.
    pub position: Position,

    /// Spot kind to fish, by npc id.
    pub spot: NpcId,

    /// Which of the spot's two menu actions to use.
    #[serde(default = "default_option")]
    pub option: ToolOption,

    /// Units of the tool's bait to grant at spawn (ignored for
    /// baitless tools).
    #[serde(default)]
    pub bait: u32,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Castline Shard".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_ticks() -> u64 {
    120
}

const fn default_level() -> u32 {
    1
}

const fn default_option() -> ToolOption {
    ToolOption::Primary
}

fn default_anglers() -> Vec<AnglerConfig> {
    vec![
        AnglerConfig {
            name: "Wynn".to_owned(),
            level: 3,
            position: Position::new(3217, 3222),
            spot: NpcId::new(316),
            option: ToolOption::Primary,
            bait: 0,
        },
        AnglerConfig {
            name: "Tam".to_owned(),
            level: 25,
            position: Position::new(3222, 3218),
            spot: NpcId::new(316),
            option: ToolOption::Secondary,
            bait: 30,
        },
        AnglerConfig {
            name: "Ilsa".to_owned(),
            level: 40,
            position: Position::new(2928, 3178),
            spot: NpcId::new(312),
            option: ToolOption::Primary,
            bait: 0,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_runs_the_stock_roster() {
        let config = ScenarioConfig::default();
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.world.ticks, 120);
        assert_eq!(config.anglers.len(), 3);
        assert_eq!(config.anglers[0].name, "Wynn");
        assert_eq!(config.anglers[1].option, ToolOption::Secondary);
        assert_eq!(config.anglers[1].bait, 30);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  name: "Test Shard"
  seed: 123
  ticks: 40
  tick_interval_ms: 600

anglers:
  - name: "solo"
    level: 20
    position: { x: 3222, y: 3220 }
    spot: 316
    option: secondary
    bait: 12
"#;

        let config = ScenarioConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(ScenarioConfig::default);

        assert_eq!(config.world.name, "Test Shard");
        assert_eq!(config.world.seed, 123);
        assert_eq!(config.world.ticks, 40);
        assert_eq!(config.world.tick_interval_ms, 600);
        assert_eq!(config.anglers.len(), 1);
        assert_eq!(config.anglers[0].level, 20);
        assert_eq!(config.anglers[0].spot, NpcId::new(316));
        assert_eq!(config.anglers[0].option, ToolOption::Secondary);
        assert_eq!(config.anglers[0].bait, 12);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "world:\n  seed: 7\n";
        let config = ScenarioConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(ScenarioConfig::default);

        // Seed is overridden
        assert_eq!(config.world.seed, 7);
        // Everything else uses defaults
        assert_eq!(config.world.ticks, 120);
        assert_eq!(config.anglers.len(), 3);
    }

    #[test]
    fn parse_empty_yaml() {
        let yaml = "";
        let config = ScenarioConfig::parse(yaml);
        assert!(config.is_ok());
    }

    #[test]
    fn angler_defaults_fill_optional_fields() {
        let yaml = r#"
anglers:
  - name: "min"
    position: { x: 1, y: 2 }
    spot: 309
"#;
        let config = ScenarioConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(ScenarioConfig::default);
        assert_eq!(config.anglers.len(), 1);
        assert_eq!(config.anglers[0].level, 1);
        assert_eq!(config.anglers[0].option, ToolOption::Primary);
        assert_eq!(config.anglers[0].bait, 0);
    }
}
