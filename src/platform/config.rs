// SliceUtils - platform/config.rs
//
// config.toml loading with startup validation.
//
// Two entry points share one validator:
//   - `load_config`: lenient. Problems become warnings and the affected
//     value falls back to its default.
//   - `load_config_strict`: fail-fast. The first problem is returned as a
//     `ConfigError`.

use crate::core::pipeline::{Pipeline, Step};
use crate::core::seq::Growth;
use crate::util::constants;
use crate::util::error::{ConfigError, PipelineError};
use std::path::{Path, PathBuf};

// =============================================================================
// Raw config.toml shape
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[pipeline]` section.
    pub pipeline: PipelineSection,
    /// `[push]` section.
    pub push: PushSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[pipeline]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Steps in text form, e.g. `["filter:even", "map:mul:2"]`.
    pub steps: Option<Vec<String>>,
}

/// `[push]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PushSection {
    /// Growth policy: "amortized" or "exact".
    pub growth: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

// =============================================================================
// Validated config
// =============================================================================

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Default pipeline steps, used when none are given on the command line.
    pub steps: Vec<Step>,
    /// Growth policy for `push` steps.
    pub growth: Growth,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Build the configured pipeline.
    ///
    /// Fails with `TooManySteps` when `steps` exceeds the pipeline limit.
    pub fn pipeline(&self) -> Result<Pipeline, PipelineError> {
        Ok(Pipeline::new(self.steps.clone())?.with_growth(self.growth))
    }
}

/// Validate a raw config, returning the resulting config and every problem
/// found. Each problem leaves the corresponding default in place.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut problems: Vec<ConfigError> = Vec::new();

    // -- Pipeline: steps --
    if let Some(steps) = raw.pipeline.steps {
        if steps.len() > constants::MAX_PIPELINE_STEPS {
            problems.push(ConfigError::ValueOutOfRange {
                field: "pipeline.steps".to_string(),
                value: format!("{} steps", steps.len()),
                expected: format!("at most {}", constants::MAX_PIPELINE_STEPS),
            });
        } else {
            let mut parsed = Vec::with_capacity(steps.len());
            let mut valid = true;
            for (index, text) in steps.iter().enumerate() {
                match text.parse::<Step>() {
                    Ok(step) => parsed.push(step),
                    Err(source) => {
                        valid = false;
                        problems.push(ConfigError::InvalidStep { index, source });
                    }
                }
            }
            // A partially valid list would run a different pipeline than the
            // one written; keep all or nothing.
            if valid {
                config.steps = parsed;
            }
        }
    }

    // -- Push: growth --
    if let Some(ref growth) = raw.push.growth {
        match growth.parse::<Growth>() {
            Ok(g) => config.growth = g,
            Err(_) => problems.push(ConfigError::ValueOutOfRange {
                field: "push.growth".to_string(),
                value: growth.clone(),
                expected: "\"amortized\" or \"exact\"".to_string(),
            }),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, problems)
}

/// Resolve the config path: an explicit path wins, otherwise
/// `config.toml` in the working directory.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(constants::CONFIG_FILE_NAME))
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate `config.toml` at `path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let raw = match read_raw(path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config file");

    let (config, problems) = validate(raw);
    let warnings: Vec<String> = problems
        .iter()
        .map(|p| format!("{p}. Using default."))
        .collect();

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Load and validate `config.toml` at `path`, failing on the first problem.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_strict(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = read_raw(path)?;
    let (config, problems) = validate(raw);
    match problems.into_iter().next() {
        Some(problem) => Err(problem),
        None => {
            tracing::info!(path = %path.display(), steps = config.steps.len(), "Loaded config file");
            Ok(config)
        }
    }
}
