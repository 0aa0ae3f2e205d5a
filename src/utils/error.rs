use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptizerError {
    #[error("Backend unreachable at {endpoint}")]
    BackendUnreachable { endpoint: String },

    #[error("Backend request failed: {cause}")]
    RequestFailed { cause: String },

    #[error("Backend reply has no `response` field")]
    MalformedReply,

    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PromptizerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PromptizerError::BackendUnreachable { .. } => ErrorCategory::Network,
            PromptizerError::RequestFailed { .. } | PromptizerError::MalformedReply => {
                ErrorCategory::Backend
            }
            PromptizerError::EmptyPrompt => ErrorCategory::Input,
            PromptizerError::ConfigValidationError { .. }
            | PromptizerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PromptizerError::IoError(_) | PromptizerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Backend => ErrorSeverity::Medium,
            ErrorCategory::Network | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person at the terminal. Unreachable backend, unusable output and
    /// missing input are worded differently on purpose so they are never confused.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PromptizerError::BackendUnreachable { endpoint } => {
                format!("Cannot reach the inference backend at {}", endpoint)
            }
            PromptizerError::RequestFailed { cause } => {
                format!("The inference backend rejected the request: {}", cause)
            }
            PromptizerError::MalformedReply => {
                "The inference backend returned no usable output".to_string()
            }
            PromptizerError::EmptyPrompt => "Please provide a prompt to convert".to_string(),
            PromptizerError::IoError(e) => format!("Could not write the result: {}", e),
            PromptizerError::SerializationError(e) => {
                format!("Could not encode the request: {}", e)
            }
            PromptizerError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PromptizerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PromptizerError::BackendUnreachable { .. } => {
                "Check whether Ollama is running and listening on localhost:11434 (try `ollama serve`)"
            }
            PromptizerError::RequestFailed { .. } => {
                "Check that the model is installed (`ollama pull <model>`) and try again"
            }
            PromptizerError::MalformedReply => {
                "Try again or pick a different model with --model"
            }
            PromptizerError::EmptyPrompt => "Pass the text to convert as the first argument",
            PromptizerError::IoError(_) => "Check that the output path is writable",
            PromptizerError::SerializationError(_) => "Check the prompt for invalid characters",
            PromptizerError::ConfigValidationError { .. }
            | PromptizerError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptizerError>;
