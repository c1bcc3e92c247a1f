// SliceUtils - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The core sequence operations are infallible; these types cover the
// surfaces around them (step parsing, pipeline arithmetic, configuration).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SliceUtils operations.
#[derive(Debug)]
pub enum SliceUtilsError {
    /// Pipeline parsing or evaluation failed.
    Pipeline(PipelineError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// The result could not be serialised as JSON.
    Output { source: serde_json::Error },
}

impl fmt::Display for SliceUtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline(e) => write!(f, "Pipeline error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Output { source } => write!(f, "Output error: {source}"),
        }
    }
}

impl std::error::Error for SliceUtilsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pipeline(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Output { source } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Errors raised while parsing or running a step pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The step kind is not `filter`, `map` or `push`.
    UnknownStep { step: String },

    /// The predicate name is not recognised.
    UnknownPredicate { name: String },

    /// The transform name is not recognised.
    UnknownTransform { name: String },

    /// A predicate or transform that needs an operand was given none.
    MissingOperand { name: String },

    /// A predicate or transform that takes no operand was given one.
    UnexpectedOperand { name: String, operand: String },

    /// An operand is not a valid 64-bit signed integer.
    InvalidOperand { name: String, operand: String },

    /// The pipeline has more steps than allowed.
    TooManySteps { count: usize, max: usize },

    /// A single `push:` step lists more values than allowed.
    TooManyValues { count: usize, max: usize },

    /// Checked arithmetic overflowed while transforming an element.
    Overflow { transform: String, index: usize },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStep { step } => write!(
                f,
                "Unknown step '{step}'. Expected filter:<predicate>, map:<transform> or push:<values>"
            ),
            Self::UnknownPredicate { name } => write!(f, "Unknown predicate '{name}'"),
            Self::UnknownTransform { name } => write!(f, "Unknown transform '{name}'"),
            Self::MissingOperand { name } => {
                write!(f, "'{name}' requires an integer operand (e.g. '{name}:2')")
            }
            Self::UnexpectedOperand { name, operand } => {
                write!(f, "'{name}' takes no operand, got '{operand}'")
            }
            Self::InvalidOperand { name, operand } => {
                write!(f, "'{name}': operand '{operand}' is not a valid integer")
            }
            Self::TooManySteps { count, max } => {
                write!(f, "Pipeline has {count} steps, maximum is {max}")
            }
            Self::TooManyValues { count, max } => {
                write!(f, "push step lists {count} values, maximum is {max}")
            }
            Self::Overflow { transform, index } => {
                write!(f, "Transform '{transform}' overflowed at index {index}")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<PipelineError> for SliceUtilsError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// A `[pipeline] steps` entry failed to parse.
    InvalidStep { index: usize, source: PipelineError },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::InvalidStep { index, source } => {
                write!(f, "Config [pipeline] steps[{index}]: {source}")
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::InvalidStep { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SliceUtilsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for SliceUtils results.
pub type Result<T> = std::result::Result<T, SliceUtilsError>;
