//! Configuration management module
//!
//! Handles loading and validation of the report configuration: where the
//! result tables live, where charts are written, image sizes and the
//! font search list.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    KvPlotError, Result, APP_NAME, COMBINED_CHART_FILE, CONFIG_FILE, DEFAULT_RESULTS_DIR,
    FONT_ENV_VAR, OPERATIONS_CHART_FILE, OPERATIONS_RESULTS_FILE, SEARCH_CHART_FILE,
    SEARCH_RESULTS_FILE,
};

/// Report configuration structure containing all rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding the input tables and receiving the charts
    pub results_dir: PathBuf,
    /// Input table for the search comparison
    pub search_input: String,
    /// Input table for the insert/get/scan measurements
    pub operations_input: String,
    /// Output file for the search comparison chart
    pub search_output: String,
    /// Output file for the stacked operations chart
    pub operations_output: String,
    /// Output file for the combined operations chart
    pub combined_output: String,
    /// Size in pixels of the single-panel charts
    pub chart_size: (u32, u32),
    /// Size in pixels of the three-panel chart
    pub stacked_size: (u32, u32),
    /// TrueType files tried in order for text rendering
    pub font_paths: Vec<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            search_input: SEARCH_RESULTS_FILE.to_string(),
            operations_input: OPERATIONS_RESULTS_FILE.to_string(),
            search_output: SEARCH_CHART_FILE.to_string(),
            operations_output: OPERATIONS_CHART_FILE.to_string(),
            combined_output: COMBINED_CHART_FILE.to_string(),
            chart_size: (1000, 600),
            stacked_size: (1000, 1200),
            font_paths: default_font_paths(),
        }
    }
}

/// Well-known locations of a sans-serif TrueType font per platform
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

impl ReportConfig {
    /// Create a new report configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.results_dir.as_os_str().is_empty() {
            return Err(KvPlotError::ConfigError(
                "Results directory must not be empty".to_string(),
            ));
        }

        let names = [
            ("search_input", &self.search_input),
            ("operations_input", &self.operations_input),
            ("search_output", &self.search_output),
            ("operations_output", &self.operations_output),
            ("combined_output", &self.combined_output),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(KvPlotError::ConfigError(format!("{} must not be empty", key)));
            }
        }

        // Outputs must not clobber each other or the inputs
        for (i, (key_a, a)) in names.iter().enumerate() {
            for (key_b, b) in names.iter().skip(i + 1) {
                if a == b {
                    return Err(KvPlotError::ConfigError(format!(
                        "{} and {} both name {}",
                        key_a, key_b, a
                    )));
                }
            }
        }

        const MIN_SIDE: u32 = 200;
        const MAX_SIDE: u32 = 8000;
        for (key, (w, h)) in [("chart_size", self.chart_size), ("stacked_size", self.stacked_size)] {
            if w < MIN_SIDE || h < MIN_SIDE || w > MAX_SIDE || h > MAX_SIDE {
                return Err(KvPlotError::ConfigError(format!(
                    "{} must be between {} and {} pixels per side, got {}x{}",
                    key, MIN_SIDE, MAX_SIDE, w, h
                )));
            }
        }

        Ok(())
    }

    /// Set the results directory
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Set the font search list
    pub fn with_font_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.font_paths = paths;
        self
    }

    /// Put the font named by `KVPLOT_FONT` ahead of the search list
    pub fn with_font_env_override(mut self) -> Self {
        if let Some(path) = std::env::var_os(FONT_ENV_VAR) {
            self.font_paths.insert(0, PathBuf::from(path));
        }
        self
    }

    pub fn search_input_path(&self) -> PathBuf {
        self.results_dir.join(&self.search_input)
    }

    pub fn operations_input_path(&self) -> PathBuf {
        self.results_dir.join(&self.operations_input)
    }

    pub fn search_output_path(&self) -> PathBuf {
        self.results_dir.join(&self.search_output)
    }

    pub fn operations_output_path(&self) -> PathBuf {
        self.results_dir.join(&self.operations_output)
    }

    pub fn combined_output_path(&self) -> PathBuf {
        self.results_dir.join(&self.combined_output)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            KvPlotError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            KvPlotError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/kvplot/kvplot.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            KvPlotError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
