//! Level configuration - read-only inputs fixed at level start.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Adjacency, ChipType, DEFAULT_COLS, DEFAULT_INITIAL_MOVES, DEFAULT_ROWS, DEFAULT_TARGET_SCORE,
    MIN_LINK_LENGTH, SHUFFLE_RETRY_LIMIT,
};

/// Parameters for one level, loadable from JSON.
///
/// Missing fields take their defaults, so `{"rows": 6}` is a valid level file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub rows: usize,
    pub cols: usize,
    pub initial_moves: u32,
    pub target_score: u32,
    pub min_link_length: usize,
    pub shuffle_retry_limit: u32,
    pub adjacency: Adjacency,
    pub enabled_types: Vec<ChipType>,
    /// Fixed RNG seed. `None` lets the caller choose.
    pub seed: Option<u32>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        LevelConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_moves: DEFAULT_INITIAL_MOVES,
            target_score: DEFAULT_TARGET_SCORE,
            min_link_length: MIN_LINK_LENGTH,
            shuffle_retry_limit: SHUFFLE_RETRY_LIMIT,
            adjacency: Adjacency::Orthogonal,
            enabled_types: ChipType::COLORS.to_vec(),
            seed: None,
        }
    }
}

impl LevelConfig {
    /// Parse and validate a level from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LevelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a level file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::Validation(format!(
                "grid must be at least 3x3, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.initial_moves == 0 {
            return Err(ConfigError::Validation("initial_moves must be > 0".into()));
        }
        if self.target_score == 0 {
            return Err(ConfigError::Validation("target_score must be > 0".into()));
        }
        if self.min_link_length < 2 {
            return Err(ConfigError::Validation(
                "min_link_length must be >= 2".into(),
            ));
        }
        if self.shuffle_retry_limit == 0 {
            return Err(ConfigError::Validation(
                "shuffle_retry_limit must be > 0".into(),
            ));
        }
        if self.enabled_types.len() < 2 {
            return Err(ConfigError::Validation(
                "enabled_types needs at least two colors".into(),
            ));
        }
        if self.enabled_types.iter().any(|c| c.is_empty()) {
            return Err(ConfigError::Validation(
                "enabled_types must not contain \"empty\"".into(),
            ));
        }
        for (i, chip) in self.enabled_types.iter().enumerate() {
            if self.enabled_types[..i].contains(chip) {
                return Err(ConfigError::Validation(format!(
                    "enabled_types lists \"{}\" twice",
                    chip.as_str()
                )));
            }
        }
        Ok(())
    }
}
