use crate::core::ConfigProvider;
use crate::domain::model::{
    OutputFormat, DEFAULT_MAX_ITERATIONS, DEFAULT_START, DEFAULT_THRESHOLD,
};
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_one_of, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub probe: Option<ProbeSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeSection {
    pub start: Option<i64>,
    pub threshold: Option<i64>,
    pub max_iterations: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProbeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ProbeError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROBE_START})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn format_name(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn start(&self) -> i64 {
        self.probe.as_ref().and_then(|p| p.start).unwrap_or(DEFAULT_START)
    }

    fn threshold(&self) -> i64 {
        self.probe
            .as_ref()
            .and_then(|p| p.threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    fn max_iterations(&self) -> u64 {
        self.probe
            .as_ref()
            .and_then(|p| p.max_iterations)
            .unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    // validate() 先擋掉不支援的格式
    fn output_format(&self) -> OutputFormat {
        self.format_name()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max) = self.probe.as_ref().and_then(|p| p.max_iterations) {
            validate_positive_number("probe.max_iterations", max, 1)?;
        }
        if let Some(format) = self.format_name() {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}
