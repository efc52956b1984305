use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Loop starting at {start} did not settle within {budget} iterations")]
    IterationBudgetExceeded { start: i64, budget: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::ConfigParseError { .. } | ProbeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ProbeError::IterationBudgetExceeded { .. } => ErrorCategory::Computation,
            ProbeError::IoError(_) | ProbeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Computation => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度對應的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ProbeError::ConfigParseError { .. } => {
                "Check that the config file is valid TOML".to_string()
            }
            ProbeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            ProbeError::IterationBudgetExceeded { start, .. } => {
                format!("Raise --max-iterations to at least {}", start)
            }
            ProbeError::IoError(_) => "Check that stdout and the config path are accessible".to_string(),
            ProbeError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
