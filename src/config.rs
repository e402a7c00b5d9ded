#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Context, Result};
use bon::Builder;
use serde::Serialize;
use tracing::metadata::LevelFilter;

use crate::constants::{
    ACTIVITY_WEIGHT, BORDERLINE_PERCENT, EXAM_WEIGHT, LOG_ENV, MAX_GRADE, MIN_GRADE,
    NO_COLOR_ENV, STRONG_PERCENT, WEIGHT_TOTAL, WORK_WEIGHT,
};

/// Errors raised when a grading configuration is inconsistent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The weights do not add up to a whole.
    #[error("Weights must add up to 100 points, got {0}")]
    WeightsDoNotSumToWhole(u32),
    /// The lower bound is above the upper bound.
    #[error("Grade bounds are inverted: min {min} is greater than max {max}")]
    InvertedBounds {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
    /// The upper bound cannot be used as a divisor for classification.
    #[error("Maximum grade must be positive, got {0}")]
    NonPositiveMax(i32),
    /// Classification thresholds are out of order or above 100%.
    #[error(
        "Thresholds must satisfy borderline <= strong <= 100, got {borderline} and \
         {strong}"
    )]
    InvalidThresholds {
        /// Requested strong threshold, in percent.
        strong:     u32,
        /// Requested borderline threshold, in percent.
        borderline: u32,
    },
    /// The log level environment variable could not be parsed.
    #[error("`{0}` is not a valid log level")]
    InvalidLogLevel(String),
}

/// Relative weight of each assessment, in percentage points.
///
/// Points are unsigned, so the weights are never negative, and the constructor
/// enforces that they add up to [`WEIGHT_TOTAL`]. Together those guarantee that
/// the weighted average of in-range grades stays in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeWeights {
    /// Weight of the work grade.
    work:     u32,
    /// Weight of the activity grade.
    activity: u32,
    /// Weight of the exam grade.
    exam:     u32,
}

impl GradeWeights {
    /// Creates a set of weights, checking that they add up to a whole.
    pub fn new(work: u32, activity: u32, exam: u32) -> Result<Self, ConfigError> {
        let total = work.saturating_add(activity).saturating_add(exam);
        if total != WEIGHT_TOTAL {
            return Err(ConfigError::WeightsDoNotSumToWhole(total));
        }
        Ok(Self {
            work,
            activity,
            exam,
        })
    }

    /// Weight of the work grade, in points.
    pub fn work(&self) -> u32 {
        self.work
    }

    /// Weight of the activity grade, in points.
    pub fn activity(&self) -> u32 {
        self.activity
    }

    /// Weight of the exam grade, in points.
    pub fn exam(&self) -> u32 {
        self.exam
    }

    /// The weights as fractions of one, in `(work, activity, exam)` order.
    pub fn as_fractions(&self) -> (f64, f64, f64) {
        let total = f64::from(WEIGHT_TOTAL);
        (
            f64::from(self.work) / total,
            f64::from(self.activity) / total,
            f64::from(self.exam) / total,
        )
    }
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            work:     WORK_WEIGHT,
            activity: ACTIVITY_WEIGHT,
            exam:     EXAM_WEIGHT,
        }
    }
}

/// Closed range of accepted grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBounds {
    /// Lowest accepted grade.
    min: i32,
    /// Highest accepted grade.
    max: i32,
}

impl GradeBounds {
    /// Creates a bounds pair. `max` must be positive and not below `min`.
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if max <= 0 {
            return Err(ConfigError::NonPositiveMax(max));
        }
        Ok(Self { min, max })
    }

    /// Lowest accepted grade.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest accepted grade.
    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Default for GradeBounds {
    fn default() -> Self {
        Self {
            min: MIN_GRADE,
            max: MAX_GRADE,
        }
    }
}

/// Cut-off points, as a percentage of the maximum grade, used to classify a
/// final average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusThresholds {
    /// At or above this share the result is `Strong`.
    strong:     u32,
    /// At or above this share the result is `Borderline`.
    borderline: u32,
}

impl StatusThresholds {
    /// Creates a threshold pair, requiring `borderline <= strong <= 100`.
    pub fn new(strong: u32, borderline: u32) -> Result<Self, ConfigError> {
        if borderline > strong || strong > 100 {
            return Err(ConfigError::InvalidThresholds { strong, borderline });
        }
        Ok(Self { strong, borderline })
    }

    /// Strong threshold, in percent.
    pub fn strong(&self) -> u32 {
        self.strong
    }

    /// Borderline threshold, in percent.
    pub fn borderline(&self) -> u32 {
        self.borderline
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            strong:     STRONG_PERCENT,
            borderline: BORDERLINE_PERCENT,
        }
    }
}

/// Everything the calculator and the classifier need to know about the
/// grading scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Builder)]
pub struct GradingConfig {
    /// Assessment weights.
    #[builder(default)]
    weights:    GradeWeights,
    /// Accepted grade range.
    #[builder(default)]
    bounds:     GradeBounds,
    /// Classification cut-offs.
    #[builder(default)]
    thresholds: StatusThresholds,
}

impl GradingConfig {
    /// Assessment weights.
    pub fn weights(&self) -> GradeWeights {
        self.weights
    }

    /// Accepted grade range.
    pub fn bounds(&self) -> GradeBounds {
        self.bounds
    }

    /// Classification cut-offs.
    pub fn thresholds(&self) -> StatusThresholds {
        self.thresholds
    }
}

/// Process settings sourced from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Maximum tracing level emitted to stderr.
    log_level: LevelFilter,
    /// Whether terminal output may use ANSI colors.
    color:     bool,
}

impl Settings {
    /// Reads settings from the environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(std::env::var(LOG_ENV).ok(), std::env::var_os(NO_COLOR_ENV).is_some())
    }

    /// Builds settings from the raw values of [`LOG_ENV`] and whether
    /// [`NO_COLOR_ENV`] is set. A missing or blank level means `warn`.
    pub fn from_values(log_level: Option<String>, no_color: bool) -> Result<Self> {
        let log_level = match log_level {
            Some(value) if !value.trim().is_empty() => parse_log_level(&value)
                .with_context(|| format!("Could not read {LOG_ENV}"))?,
            _ => LevelFilter::WARN,
        };

        Ok(Self {
            log_level,
            color: !no_color,
        })
    }

    /// Maximum tracing level.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Whether colors are enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Returns a copy with colors forced on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
            color:     true,
        }
    }
}

/// Parses a level name such as `info` or `off`.
fn parse_log_level(value: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}

/// Shared settings handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<Settings>);

impl std::ops::Deref for ConfigHandle {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed settings.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<Settings>>>> = OnceLock::new();

/// Returns the mutex guarding the global settings slot.
fn slot() -> &'static Mutex<Option<Arc<Settings>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global settings have been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let mut guard = slot()
        .lock()
        .map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = Arc::new(Settings::from_env()?);
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// Replaces the global settings, e.g. after command line overrides.
pub fn install(settings: Settings) -> Result<ConfigHandle> {
    let mut guard = slot()
        .lock()
        .map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
    let cfg = Arc::new(settings);
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// Returns the active settings, falling back to defaults if the environment
/// could not be read.
pub fn get() -> ConfigHandle {
    ensure_initialized().unwrap_or_else(|_| ConfigHandle(Arc::new(Settings::default())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_from_values() {
        let defaults = Settings::from_values(None, false).unwrap();
        assert_eq!(defaults.log_level(), LevelFilter::WARN);
        assert!(defaults.color());

        let blank = Settings::from_values(Some("  ".into()), true).unwrap();
        assert_eq!(blank.log_level(), LevelFilter::WARN);
        assert!(!blank.color());

        let debug = Settings::from_values(Some("debug".into()), false).unwrap();
        assert_eq!(debug.log_level(), LevelFilter::DEBUG);

        let err = Settings::from_values(Some("chatty".into()), false).unwrap_err();
        assert!(err.to_string().contains(LOG_ENV));
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidLogLevel("chatty".into()))
        );
    }

    #[test]
    fn settings_read_from_environment() {
        // Only this test touches these variables.
        unsafe {
            std::env::set_var(LOG_ENV, "trace");
            std::env::set_var(NO_COLOR_ENV, "1");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.log_level(), LevelFilter::TRACE);
        assert!(!settings.color());

        unsafe {
            std::env::set_var(LOG_ENV, "nope");
        }
        assert!(Settings::from_env().is_err());

        unsafe {
            std::env::remove_var(LOG_ENV);
            std::env::remove_var(NO_COLOR_ENV);
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.log_level(), LevelFilter::WARN);
        assert!(settings.color());
    }

    #[test]
    fn installed_settings_are_returned_by_get() {
        install(Settings::default().with_color(false)).unwrap();
        assert!(!get().color());
        install(Settings::default()).unwrap();
        assert!(get().color());
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_log_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_log_level(" off ").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_log_level("loud"), Err(ConfigError::InvalidLogLevel(_))));
    }
}
