pub mod toml_config;

use crate::core::{ConfigProvider, ProbeSettings};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// 命令列參數；未指定的欄位交給設定檔或預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "probe-cli")]
#[command(about = "Run the halving loop with a configurable start and threshold")]
pub struct CliConfig {
    /// Initial counter value
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// The verdict is `true` when the settled value is below this
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Stop with an error after this many decrements
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON on stderr")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Flags override the file, the file overrides the defaults.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<ProbeSettings> {
        self.validate()?;
        let base = match file {
            Some(file) => {
                file.validate()?;
                file.settings()
            }
            None => ProbeSettings::default(),
        };

        let format = match &self.format {
            Some(name) => name.parse()?,
            None => base.format,
        };

        Ok(ProbeSettings {
            start: self.start.unwrap_or(base.start),
            threshold: self.threshold.unwrap_or(base.threshold),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            format,
        })
    }
}
