use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("Query tool failed ({command}): {message}")]
    SubprocessError { command: String, message: String },

    #[error("Cannot parse count from {raw:?}: {reason}")]
    ParseError { raw: String, reason: String },

    #[error("Cannot write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("TSV serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected API response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Query,
    Parse,
    Output,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatError::SubprocessError { .. } => ErrorCategory::Query,
            StatError::ParseError { .. } => ErrorCategory::Parse,
            StatError::FileWriteError { .. } | StatError::CsvError(_) | StatError::IoError(_) => {
                ErrorCategory::Output
            }
            StatError::ApiError(_) | StatError::SerializationError(_) => ErrorCategory::Network,
            StatError::ConfigError { .. }
            | StatError::InvalidConfigValueError { .. }
            | StatError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Query | ErrorCategory::Parse | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatError::SubprocessError { .. } => {
                "Check that the query tool is installed and runs on its own (e.g. `python pyinspire.py -s \"find date 2000\"`)"
            }
            StatError::ParseError { .. } => {
                "The query tool printed something other than a count; run it by hand for the failing year"
            }
            StatError::FileWriteError { .. } | StatError::IoError(_) => {
                "Check permissions and free space in the output directory"
            }
            StatError::ApiError(_) => "Check network access and the endpoint URL, then run again",
            StatError::SerializationError(_) => {
                "The endpoint did not answer like the INSPIRE literature API; check client.endpoint"
            }
            StatError::CsvError(_) => "This is an internal serialization failure; please report it",
            StatError::ConfigError { .. }
            | StatError::InvalidConfigValueError { .. }
            | StatError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatError::SubprocessError { message, .. } => {
                format!("Query tool failed: {}", message)
            }
            StatError::ParseError { raw, .. } => {
                format!("Query tool returned an unexpected result: {:?}", raw)
            }
            StatError::FileWriteError { path, .. } => {
                format!("Could not write the series to {}", path)
            }
            StatError::ConfigError { message } => format!("Configuration problem: {}", message),
            StatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            StatError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
