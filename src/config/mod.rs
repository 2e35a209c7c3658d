#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS, MIN_TIMEOUT_SECONDS};

#[cfg(feature = "cli")]
use clap::Parser;

/// 合併命令列、設定檔與預設值後的連線設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ClientSettings {
    /// 優先順序：命令列 > 設定檔 > 預設值
    pub fn resolve(
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let file_api = file.map(|config| &config.api);

        Self {
            base_url: base_url
                .or_else(|| file_api.and_then(|api| api.base_url.clone()))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: timeout_seconds.or_else(|| file_api.and_then(|api| api.timeout_seconds)),
        }
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range(
                "timeout_seconds",
                timeout,
                MIN_TIMEOUT_SECONDS,
                MAX_TIMEOUT_SECONDS,
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "placement-client")]
#[command(about = "Command-line client for the placement tracking API")]
pub struct CliConfig {
    /// API base URL, e.g. http://localhost:5000/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Print raw JSON instead of text views
    #[arg(long, global = true)]
    pub raw: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<ClientSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(ClientSettings::resolve(
            self.base_url.clone(),
            self.timeout_seconds,
            file.as_ref(),
        ))
    }
}
