use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CA_PREFILTER_DISTANCE: f64 = 9.0;
pub const DEFAULT_CHAIN_BREAK_DISTANCE: f64 = 2.5;
pub const DEFAULT_MIN_BRIDGE_SEPARATION: usize = 3;
pub const DEFAULT_BULGE_MAX_SOURCE_GAP: usize = 2;
pub const DEFAULT_BULGE_MAX_DEST_GAP: usize = 5;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to read configuration file '{path}': {message}", path = path.display())]
    Io { path: PathBuf, message: String },
}

/// Tunable thresholds of the assignment.
///
/// The defaults reproduce classic DSSP. The electrostatic constants of the
/// bond energy are fixed; see [`crate::core::energy`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    /// Cα–Cα distance (Å) at or beyond which no bond is evaluated.
    pub ca_prefilter_distance: f64,
    /// Largest C(i-1)–N(i) distance (Å) still treated as a peptide bond.
    pub chain_break_distance: f64,
    pub min_bridge_separation: usize,
    pub bulge_max_source_gap: usize,
    pub bulge_max_dest_gap: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            ca_prefilter_distance: DEFAULT_CA_PREFILTER_DISTANCE,
            chain_break_distance: DEFAULT_CHAIN_BREAK_DISTANCE,
            min_bridge_separation: DEFAULT_MIN_BRIDGE_SEPARATION,
            bulge_max_source_gap: DEFAULT_BULGE_MAX_SOURCE_GAP,
            bulge_max_dest_gap: DEFAULT_BULGE_MAX_DEST_GAP,
        }
    }
}

impl CalcConfig {
    pub fn builder() -> CalcConfigBuilder {
        CalcConfigBuilder::new()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.into_builder().build()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading calculation config from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

#[derive(Default)]
pub struct CalcConfigBuilder {
    ca_prefilter_distance: Option<f64>,
    chain_break_distance: Option<f64>,
    min_bridge_separation: Option<usize>,
    bulge_max_source_gap: Option<usize>,
    bulge_max_dest_gap: Option<usize>,
}

impl CalcConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ca_prefilter_distance(mut self, distance: f64) -> Self {
        self.ca_prefilter_distance = Some(distance);
        self
    }
    pub fn chain_break_distance(mut self, distance: f64) -> Self {
        self.chain_break_distance = Some(distance);
        self
    }
    pub fn min_bridge_separation(mut self, separation: usize) -> Self {
        self.min_bridge_separation = Some(separation);
        self
    }
    pub fn bulge_max_source_gap(mut self, gap: usize) -> Self {
        self.bulge_max_source_gap = Some(gap);
        self
    }
    pub fn bulge_max_dest_gap(mut self, gap: usize) -> Self {
        self.bulge_max_dest_gap = Some(gap);
        self
    }

    pub fn build(self) -> Result<CalcConfig, ConfigError> {
        let config = CalcConfig {
            ca_prefilter_distance: self
                .ca_prefilter_distance
                .unwrap_or(DEFAULT_CA_PREFILTER_DISTANCE),
            chain_break_distance: self
                .chain_break_distance
                .unwrap_or(DEFAULT_CHAIN_BREAK_DISTANCE),
            min_bridge_separation: self
                .min_bridge_separation
                .unwrap_or(DEFAULT_MIN_BRIDGE_SEPARATION),
            bulge_max_source_gap: self
                .bulge_max_source_gap
                .unwrap_or(DEFAULT_BULGE_MAX_SOURCE_GAP),
            bulge_max_dest_gap: self
                .bulge_max_dest_gap
                .unwrap_or(DEFAULT_BULGE_MAX_DEST_GAP),
        };
        require_positive_distance("ca_prefilter_distance", config.ca_prefilter_distance)?;
        require_positive_distance("chain_break_distance", config.chain_break_distance)?;
        if config.min_bridge_separation == 0 {
            return Err(ConfigError::InvalidValue {
                name: "min_bridge_separation",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(config)
    }
}

fn require_positive_distance(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("expected a positive finite distance, got {value}"),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileConfig {
    #[serde(default)]
    hbond: FileHbondConfig,
    #[serde(default)]
    chain_breaks: FileChainBreakConfig,
    #[serde(default)]
    beta: FileBetaConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileHbondConfig {
    ca_prefilter_distance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileChainBreakConfig {
    max_c_n_distance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileBetaConfig {
    min_bridge_separation: Option<usize>,
    bulge_max_source_gap: Option<usize>,
    bulge_max_dest_gap: Option<usize>,
}

impl FileConfig {
    fn into_builder(self) -> CalcConfigBuilder {
        CalcConfigBuilder {
            ca_prefilter_distance: self.hbond.ca_prefilter_distance,
            chain_break_distance: self.chain_breaks.max_c_n_distance,
            min_bridge_separation: self.beta.min_bridge_separation,
            bulge_max_source_gap: self.beta.bulge_max_source_gap,
            bulge_max_dest_gap: self.beta.bulge_max_dest_gap,
        }
    }
}
