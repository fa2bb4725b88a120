//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Report layout (empty categories, weekend days)
//! - Default meeting export to read
//! - Extra or replacement keywords per category
//!
//! Configuration is stored at `~/.config/timecat/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::aggregate::TotalsMode;
use crate::category::Category;
use crate::error::{ConfigError, CoreError, Result};

/// Report layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// List categories with no meetings in totals.
    #[serde(default)]
    pub include_empty_categories: bool,
    /// Show Monday..Friday only in the daily breakdown.
    #[serde(default = "default_true")]
    pub weekdays_only: bool,
    /// Meeting export used when no `--input` is given.
    #[serde(default)]
    pub default_input: String,
}

/// Keyword adjustments applied on top of the built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Replace built-in keywords for categories that have a configured list.
    #[serde(default)]
    pub replace: bool,
    #[serde(default)]
    pub company_wide: Vec<String>,
    #[serde(default)]
    pub staff_team: Vec<String>,
    #[serde(default)]
    pub department: Vec<String>,
    #[serde(default)]
    pub onboarding: Vec<String>,
}

impl KeywordConfig {
    pub fn keywords_for(&self, category: Category) -> &[String] {
        match category {
            Category::CompanyWide => &self.company_wide,
            Category::StaffTeam => &self.staff_team,
            Category::Department => &self.department,
            Category::Onboarding => &self.onboarding,
            Category::Uncategorized => &[],
        }
    }

    /// Reject blank keywords, which would never compile into a pattern.
    ///
    /// # Errors
    /// Returns `InvalidValue` naming the offending list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::SCORED {
            if self.keywords_for(category).iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    key: format!("keywords.{}", category.key()),
                    message: "keyword must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/timecat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_empty_categories: false,
            weekdays_only: true,
            default_input: String::new(),
        }
    }
}

/// Returns the configuration directory.
///
/// `TIMECAT_CONFIG_DIR` wins when set; otherwise `~/.config/timecat[-dev]/`
/// based on `TIMECAT_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("TIMECAT_CONFIG_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TIMECAT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("timecat-dev")
            } else {
                base_dir.join("timecat")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    // Lists accept JSON (`["a","b"]`) or a comma-separated string.
                    serde_json::Value::Array(_) => match serde_json::from_str(value) {
                        Ok(serde_json::Value::Array(items)) => serde_json::Value::Array(items),
                        _ => serde_json::Value::Array(
                            value
                                .split(',')
                                .map(str::trim)
                                .filter(|s| !s.is_empty())
                                .map(|s| serde_json::Value::String(s.to_string()))
                                .collect(),
                        ),
                    },
                    serde_json::Value::Object(_) => {
                        return Err(invalid("cannot set a whole section".to_string()))
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there only when no file exists.
    ///
    /// An unreadable or malformed file is reported and left untouched.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                return Ok(cfg);
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        Self::from_toml(&content).map_err(|e| match e {
            CoreError::Config(ConfigError::ParseFailed(message)) => ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message,
            }
            .into(),
            other => other,
        })
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path` as pretty TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// existing value's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Self = serde_json::from_value(json)?;
        updated.keywords.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist it.
    ///
    /// # Errors
    ///
    /// Same as [`Config::apply`], plus failures writing the file.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Totals listing mode implied by `report.include_empty_categories`.
    pub fn totals_mode(&self) -> TotalsMode {
        if self.report.include_empty_categories {
            TotalsMode::IncludeEmpty
        } else {
            TotalsMode::PopulatedOnly
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default configuration");
                Self::default()
            }
        }
    }
}
