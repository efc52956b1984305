pub mod countdown;
pub mod engine;
pub mod report;

pub use crate::domain::model::{ProbeSettings, Settled, Verdict};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
