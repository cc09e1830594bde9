use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CYCLE_LENGTH: i64 = 28;
pub const DEFAULT_PERIOD_LENGTH: i64 = 6;
/// Period length of the placeholder pattern shown when no period date is known.
pub const DEMO_PERIOD_LENGTH: i64 = 5;
pub const FERTILE_WINDOW_START: i64 = 11;
pub const FERTILE_WINDOW_END: i64 = 17;
pub const OVULATION_START: i64 = 12;
pub const OVULATION_END: i64 = 16;
pub const IRREGULAR_VARIATION: i64 = 9;
pub const SOMEWHAT_IRREGULAR_VARIATION: i64 = 5;
pub const MIN_NORMAL_CYCLE_LENGTH: i64 = 21;
pub const MAX_NORMAL_CYCLE_LENGTH: i64 = 35;
pub const MIN_REGULARITY_SAMPLES: usize = 3;
pub const MAX_SYMPTOMS: usize = 10;
pub const MAX_MOODS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid threshold `{field}`: {reason}")]
    InvalidThreshold { field: &'static str, reason: String },
}

/// Every threshold the engine branches on. Missing keys in a TOML table
/// fall back to the constants above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub default_cycle_length: i64,
    pub default_period_length: i64,
    pub demo_period_length: i64,
    pub fertile_window_start: i64,
    pub fertile_window_end: i64,
    pub ovulation_start: i64,
    pub ovulation_end: i64,
    pub irregular_variation: i64,
    pub somewhat_irregular_variation: i64,
    pub min_normal_cycle_length: i64,
    pub max_normal_cycle_length: i64,
    pub min_regularity_samples: usize,
    pub max_symptoms: usize,
    pub max_moods: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: DEFAULT_CYCLE_LENGTH,
            default_period_length: DEFAULT_PERIOD_LENGTH,
            demo_period_length: DEMO_PERIOD_LENGTH,
            fertile_window_start: FERTILE_WINDOW_START,
            fertile_window_end: FERTILE_WINDOW_END,
            ovulation_start: OVULATION_START,
            ovulation_end: OVULATION_END,
            irregular_variation: IRREGULAR_VARIATION,
            somewhat_irregular_variation: SOMEWHAT_IRREGULAR_VARIATION,
            min_normal_cycle_length: MIN_NORMAL_CYCLE_LENGTH,
            max_normal_cycle_length: MAX_NORMAL_CYCLE_LENGTH,
            min_regularity_samples: MIN_REGULARITY_SAMPLES,
            max_symptoms: MAX_SYMPTOMS,
            max_moods: MAX_MOODS,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Reject tables the engine cannot classify against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("default_cycle_length", self.default_cycle_length)?;
        positive("default_period_length", self.default_period_length)?;
        positive("demo_period_length", self.demo_period_length)?;
        positive("fertile_window_start", self.fertile_window_start)?;
        positive("ovulation_start", self.ovulation_start)?;
        ordered(
            "fertile_window_end",
            self.fertile_window_start,
            self.fertile_window_end,
        )?;
        ordered("ovulation_end", self.ovulation_start, self.ovulation_end)?;
        ordered(
            "irregular_variation",
            self.somewhat_irregular_variation,
            self.irregular_variation,
        )?;
        ordered(
            "max_normal_cycle_length",
            self.min_normal_cycle_length,
            self.max_normal_cycle_length,
        )?;

        if self.min_regularity_samples < 2 {
            return Err(ConfigError::InvalidThreshold {
                field: "min_regularity_samples",
                reason: "variation needs at least 2 samples".into(),
            });
        }
        if self.max_symptoms == 0 || self.max_moods == 0 {
            return Err(ConfigError::InvalidThreshold {
                field: if self.max_symptoms == 0 {
                    "max_symptoms"
                } else {
                    "max_moods"
                },
                reason: "must keep at least one entry".into(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: i64) -> Result<(), ConfigError> {
    if value < 1 {
        return Err(ConfigError::InvalidThreshold {
            field,
            reason: format!("must be at least 1, got {value}"),
        });
    }
    Ok(())
}

fn ordered(field: &'static str, low: i64, high: i64) -> Result<(), ConfigError> {
    if high < low {
        return Err(ConfigError::InvalidThreshold {
            field,
            reason: format!("{high} is below its lower bound {low}"),
        });
    }
    Ok(())
}
