use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_one_of, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_START: i64 = 26;
pub const DEFAULT_THRESHOLD: i64 = 20;
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Where the halving loop came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settled {
    pub start: i64,
    pub final_value: i64,
    pub iterations: u64,
}

/// A settled loop compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub start: i64,
    pub threshold: i64,
    pub final_value: i64,
    pub iterations: u64,
    pub below_threshold: bool,
}

impl Verdict {
    pub fn token(&self) -> &'static str {
        if self.below_threshold {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        validate_one_of("output.format", s, &Self::NAMES)?;
        match s {
            "json" => Ok(OutputFormat::Json),
            _ => Ok(OutputFormat::Text),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub start: i64,
    pub threshold: i64,
    pub max_iterations: u64,
    pub format: OutputFormat,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            format: OutputFormat::Text,
        }
    }
}

impl Validate for ProbeSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("probe.max_iterations", self.max_iterations, 1)
    }
}
