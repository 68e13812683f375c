use thiserror::Error;

#[derive(Error, Debug)]
pub enum NegotiationError {
    #[error("No valid price found in message: {message}")]
    InvalidOffer { message: String },

    #[error("Unknown product: {product}")]
    UnknownProduct { product: String },

    #[error("Discount already fixed at {current} for this session")]
    DiscountAlreadyFixed { current: i64 },

    #[error("Sentiment service unavailable: {reason}")]
    SentimentServiceUnavailable { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    UserInput,
    Precondition,
    ExternalService,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NegotiationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOffer { .. } => ErrorCategory::UserInput,
            Self::UnknownProduct { .. } | Self::DiscountAlreadyFixed { .. } => {
                ErrorCategory::Precondition
            }
            Self::SentimentServiceUnavailable { .. } => ErrorCategory::ExternalService,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::ExternalService => ErrorSeverity::Medium,
            ErrorCategory::Precondition | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 可以在同一個會話中重新提交的錯誤
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidOffer { .. } | Self::SentimentServiceUnavailable { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidOffer { .. } => {
                "Include a whole-number price in your message, e.g. \"I can pay 750\"".to_string()
            }
            Self::UnknownProduct { .. } => {
                "Pick one of the products listed by /products or in the catalog file".to_string()
            }
            Self::DiscountAlreadyFixed { .. } => {
                "Check current_discount() before fixing a discount".to_string()
            }
            Self::SentimentServiceUnavailable { .. } => {
                "Check the sentiment endpoint and submit the offer again".to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Check the data being serialized".to_string(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the command line arguments or catalog file and restart".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidOffer { .. } => "Please enter a valid price in your message.".to_string(),
            Self::UnknownProduct { product } => format!("We don't sell '{}'.", product),
            Self::SentimentServiceUnavailable { .. } => {
                "We couldn't read the tone of your message right now. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NegotiationError>;
