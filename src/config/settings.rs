//! User settings for pocket-budget
//!
//! Manages user preferences: currency symbol, balance policy, which optional
//! panels are shown, and export defaults.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::PocketPaths;
use crate::error::PocketError;

/// How the stored balance relates to recorded expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BalancePolicy {
    /// Balance only changes by explicit edits and deposits; remaining is
    /// computed as balance minus total spent
    #[default]
    Decoupled,
    /// Each new expense is deducted from the balance and restored when the
    /// expense is removed; remaining equals the balance
    Coupled,
}

impl std::fmt::Display for BalancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalancePolicy::Decoupled => write!(f, "decoupled"),
            BalancePolicy::Coupled => write!(f, "coupled"),
        }
    }
}

/// Which optional panels are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    #[serde(default = "enabled")]
    pub budget_bars: bool,
    #[serde(default = "enabled")]
    pub analytics: bool,
    #[serde(default = "enabled")]
    pub history: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            budget_bars: true,
            analytics: true,
            history: true,
        }
    }
}

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub format: ExportFormat,

    /// Add the category totals sheet
    #[serde(default = "enabled")]
    pub include_totals: bool,

    /// Add the chart section (rendered as a text placeholder)
    #[serde(default)]
    pub include_chart: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            include_totals: true,
            include_chart: false,
        }
    }
}

/// User settings for pocket-budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub balance_policy: BalancePolicy,

    #[serde(default)]
    pub panels: PanelSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            balance_policy: BalancePolicy::default(),
            panels: PanelSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketPaths) -> Result<Self, PocketError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PocketError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketPaths) -> Result<(), PocketError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PocketError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.balance_policy, BalancePolicy::Decoupled);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.panels.analytics);
        assert!(settings.panels.history);
        assert!(settings.panels.budget_bars);
        assert_eq!(settings.export.format, ExportFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.balance_policy = BalancePolicy::Coupled;
        settings.panels.history = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.balance_policy, BalancePolicy::Coupled);
        assert!(!loaded.panels.history);
        assert!(loaded.panels.analytics);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{"balance_policy": "coupled", "panels": {"analytics": false}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.balance_policy, BalancePolicy::Coupled);
        assert!(!settings.panels.analytics);
        assert!(settings.panels.history);
        assert_eq!(settings.currency_symbol, "$");
    }
}
