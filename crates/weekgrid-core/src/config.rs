use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default appointment color used when a draft does not pick one.
pub const DEFAULT_COLOR: &str = "#3498db";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Calendar view preferences
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Which grid the calendar opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewModeSetting {
    #[default]
    Week,
    Day,
}

/// First day of the displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// View shown on startup
    #[serde(default)]
    pub default_view: ViewModeSetting,

    /// First day of the week
    #[serde(default)]
    pub week_start: WeekStart,

    /// Color given to new appointments (hex, e.g. "#3498db")
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Length of a new appointment created by clicking a cell
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// First displayed hour (inclusive)
    #[serde(default)]
    pub day_start_hour: u32,

    /// Last displayed hour (exclusive)
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekgrid")
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_duration_minutes() -> u32 {
    60
}

fn default_day_end_hour() -> u32 {
    24
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_view: ViewModeSetting::Week,
            week_start: WeekStart::Sunday,
            default_color: default_color(),
            default_duration_minutes: default_duration_minutes(),
            day_start_hour: 0,
            day_end_hour: default_day_end_hour(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            calendar: CalendarConfig::default(),
        }
    }
}

/// True for `#rgb` and `#rrggbb` hex colors.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl Config {
    /// Load configuration from the user config directory, creating a default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults there if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!("No config at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        config.into_validated()
    }

    fn into_validated(self) -> Result<(Self, ValidationResult)> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let cal = &self.calendar;

        if !is_hex_color(&cal.default_color) {
            result.add_error(
                "calendar.default_color",
                format!("Expected a hex color like #3498db, got: {}", cal.default_color),
            );
        }

        if cal.default_duration_minutes == 0 {
            result.add_error(
                "calendar.default_duration_minutes",
                "Default duration must be greater than 0",
            );
        } else if cal.default_duration_minutes > 24 * 60 {
            result.add_warning(
                "calendar.default_duration_minutes",
                "Default duration is longer than a day",
            );
        }

        if cal.day_end_hour > 24 {
            result.add_error("calendar.day_end_hour", "Hour must be between 0 and 24");
        }
        if cal.day_start_hour >= cal.day_end_hour {
            result.add_error(
                "calendar.day_start_hour",
                "Day start hour must be before day end hour",
            );
        }

        result
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("weekgrid");

        Ok(config_dir.join("config.toml"))
    }
}
