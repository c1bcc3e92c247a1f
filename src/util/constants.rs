// SliceUtils - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "sliceutils";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pipeline limits
// =============================================================================

/// Maximum number of steps accepted in a single pipeline.
pub const MAX_PIPELINE_STEPS: usize = 256;

/// Maximum number of values a single `push:` step may append.
/// Keeps a mistyped config from allocating without bound.
pub const MAX_PUSH_VALUES: usize = 10_000;

/// Separator between a step kind and its argument (`map:mul:2`).
pub const STEP_SEPARATOR: char = ':';

/// Separator between values of a `push:` step (`push:4,5`).
pub const PUSH_VALUE_SEPARATOR: char = ',';

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name looked up in the working directory when
/// `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Process exit code for pipeline or configuration failures.
pub const EXIT_FAILURE: i32 = 2;
