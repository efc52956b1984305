pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{countdown, engine::ProbeEngine};
pub use crate::domain::model::{OutputFormat, ProbeSettings, Settled, Verdict};
pub use crate::utils::error::{ProbeError, Result};
