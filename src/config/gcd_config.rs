// src/config/gcd_config.rs

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithms::GcdAlgorithm;
use crate::core::error::GcdError;
use crate::trace::render::{TraceRenderer, DEFAULT_SEPARATOR_WIDTH};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcdConfig {
    /// Algorithm selector (euclidean, prime, stein)
    pub algorithm: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Number of threads for batch evaluation
    pub threads: Option<usize>,

    /// Output configuration
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// How results and traces are printed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the step-by-step trace after the result
    pub show_trace: bool,

    /// Width of the rule printed after each stage (0 disables it)
    pub stage_separator_width: usize,

    pub format: OutputFormat,
}

impl Default for GcdConfig {
    fn default() -> Self {
        GcdConfig {
            algorithm: "euclidean".to_string(),
            log_level: "info".to_string(),
            threads: None, // Use Rayon's default
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            show_trace: true,
            stage_separator_width: DEFAULT_SEPARATOR_WIDTH,
            format: OutputFormat::Text,
        }
    }
}

impl GcdConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("algorithm", "euclidean")?
            .set_default("log_level", "info")?
            .set_default("output.show_trace", true)?
            .set_default("output.stage_separator_width", DEFAULT_SEPARATOR_WIDTH as u64)?
            .set_default("output.format", "text")
    }

    /// Environment variables use the `GCD_` prefix and `__` for nesting,
    /// e.g. `GCD_OUTPUT__SHOW_TRACE=false`.
    fn environment() -> Environment {
        Environment::with_prefix("GCD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("gcd.toml").exists() {
            builder = builder.add_source(File::with_name("gcd.toml"));
        } else if Path::new("gcd.yaml").exists() {
            builder = builder.add_source(File::with_name("gcd.yaml"));
        }

        builder = builder.add_source(Self::environment());

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        } else {
            return Err(ConfigError::NotFound(path.as_ref().display().to_string()));
        }

        builder = builder.add_source(Self::environment());

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolves the configured selector into the closed algorithm set.
    pub fn algorithm(&self) -> Result<GcdAlgorithm, GcdError> {
        self.algorithm.parse()
    }

    pub fn renderer(&self) -> TraceRenderer {
        TraceRenderer::new(self.output.stage_separator_width)
    }
}
