//! Configuration management for dayboard.
//!
//! Settings are stored as pretty-printed JSON in the per-user data directory
//! and grouped into three sections:
//!
//! - **Source**: which spreadsheet column holds which field, whether the
//!   first row is a header, and the text encoding of exported files
//! - **Analysis**: default trend window length
//! - **Labels**: fallback names for blank groups, projects and people, and
//!   the heading used for unselected projects
//!
//! Missing sections and missing files both resolve to defaults, so a fresh
//! install works without running `dayboard init`.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\dayboard\reports\config.json`
//! - **macOS**: `~/Library/Application Support/dayboard/reports/config.json`
//! - **Linux**: `~/.local/share/dayboard/reports/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use dayboard::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.analysis.default_days = 14;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::normalize::FallbackLabels;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard
    pub key: String,
    /// Name shown in the selection list
    pub name: String,
}

/// Zero-based column positions of each field in an imported sheet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub group: usize,
    pub name: usize,
    pub project: usize,
    pub issue: usize,
    pub content: usize,
    pub hours: usize,
    pub link: usize,
}

impl Default for ColumnMap {
    /// Layout of the team's shared daily report sheet.
    fn default() -> Self {
        ColumnMap {
            date: 0,
            group: 1,
            name: 2,
            project: 3,
            issue: 4,
            content: 5,
            hours: 6,
            link: 7,
        }
    }
}

/// How imported files are read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub columns: ColumnMap,
    /// Skip the first record of every file.
    pub has_headers: bool,
    /// WHATWG encoding label such as `big5` or `gbk`. UTF-8 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            columns: ColumnMap::default(),
            has_headers: true,
            encoding: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Length of the trend window when `--days` is not given.
    pub default_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig { default_days: 7 }
    }
}

/// Display labels substituted for missing values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LabelConfig {
    #[serde(flatten)]
    pub fallbacks: FallbackLabels,
    /// Bucket heading for projects hidden from a comparison trend.
    pub project_bucket: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            fallbacks: FallbackLabels::default(),
            project_bucket: "Projects".to_string(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub labels: LabelConfig,
}

impl Config {
    /// Loads the configuration, or defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard.
    ///
    /// The current configuration pre-fills every prompt. Sections the user
    /// does not select are left unchanged.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "source".to_string(),
                name: Message::ConfigModuleSource.to_string(),
            },
            ConfigModule {
                key: "analysis".to_string(),
                name: Message::ConfigModuleAnalysis.to_string(),
            },
            ConfigModule {
                key: "labels".to_string(),
                name: Message::ConfigModuleLabels.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "source" => {
                    msg_print!(Message::ConfigModuleSource, true);
                    config.source = Self::init_source(&config.source)?;
                }
                "analysis" => {
                    msg_print!(Message::ConfigModuleAnalysis, true);
                    config.analysis.default_days = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultDays.to_string())
                        .default(config.analysis.default_days)
                        .validate_with(|days: &u32| if *days > 0 { Ok(()) } else { Err("must be at least 1") })
                        .interact_text()?;
                }
                "labels" => {
                    msg_print!(Message::ConfigModuleLabels, true);
                    config.labels = Self::init_labels(&config.labels)?;
                }
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_source(current: &SourceConfig) -> Result<SourceConfig> {
        let column = |field: &str, default: usize| -> Result<usize> {
            Ok(Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptColumn(field.to_string()).to_string())
                .default(default)
                .interact_text()?)
        };

        let columns = ColumnMap {
            date: column("date", current.columns.date)?,
            group: column("group", current.columns.group)?,
            name: column("name", current.columns.name)?,
            project: column("project", current.columns.project)?,
            issue: column("issue", current.columns.issue)?,
            content: column("content", current.columns.content)?,
            hours: column("hours", current.columns.hours)?,
            link: column("link", current.columns.link)?,
        };

        let has_headers = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHasHeaders.to_string())
            .default(current.has_headers)
            .interact()?;

        Ok(SourceConfig {
            columns,
            has_headers,
            encoding: current.encoding.clone(),
        })
    }

    fn init_labels(current: &LabelConfig) -> Result<LabelConfig> {
        let label = |prompt: Message, default: &str| -> Result<String> {
            Ok(Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .default(default.to_string())
                .interact_text()?)
        };

        Ok(LabelConfig {
            fallbacks: FallbackLabels {
                group: label(Message::PromptGroupFallback, &current.fallbacks.group)?,
                project: label(Message::PromptProjectFallback, &current.fallbacks.project)?,
                person: label(Message::PromptPersonFallback, &current.fallbacks.person)?,
            },
            project_bucket: label(Message::PromptProjectBucket, &current.project_bucket)?,
        })
    }
}
