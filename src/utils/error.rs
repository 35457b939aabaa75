use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No keywords found for industry {industry_id}")]
    NoKeywords { industry_id: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程式結束碼；Low 不視為失敗
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BrandError {
    pub fn validation(message: impl Into<String>) -> Self {
        BrandError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: &str) -> Self {
        BrandError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BrandError::Http(_) | BrandError::Backend { .. } => ErrorCategory::Network,
            BrandError::ConfigError { .. }
            | BrandError::MissingConfigError { .. }
            | BrandError::InvalidConfigValueError { .. }
            | BrandError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BrandError::Validation { .. }
            | BrandError::NoKeywords { .. }
            | BrandError::NotFound { .. } => ErrorCategory::Validation,
            BrandError::Io(_) => ErrorCategory::Storage,
            BrandError::Csv(_) | BrandError::Serialization(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BrandError::Http(_) | BrandError::Backend { .. } => ErrorSeverity::Medium,
            BrandError::Validation { .. }
            | BrandError::NotFound { .. }
            | BrandError::NoKeywords { .. }
            | BrandError::Csv(_)
            | BrandError::Serialization(_) => ErrorSeverity::High,
            BrandError::Io(_)
            | BrandError::ConfigError { .. }
            | BrandError::MissingConfigError { .. }
            | BrandError::InvalidConfigValueError { .. }
            | BrandError::ConfigValidationError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息（不含內部細節）
    pub fn user_friendly_message(&self) -> String {
        match self {
            BrandError::Http(_) => "Could not reach the catalog backend".to_string(),
            BrandError::Backend { status, .. } => {
                format!("The catalog backend rejected the request (HTTP {})", status)
            }
            BrandError::Csv(_) | BrandError::Serialization(_) => {
                "Failed to encode or decode catalog data".to_string()
            }
            BrandError::Io(e) => format!("File system error: {}", e),
            BrandError::ConfigError { message } => message.clone(),
            BrandError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            BrandError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            BrandError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            BrandError::Validation { message } => message.clone(),
            BrandError::NoKeywords { .. } => "No keywords found for this industry".to_string(),
            BrandError::NotFound { entity, id } => format!("{} '{}' does not exist", entity, id),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the backend URL, API key and network connectivity",
            ErrorCategory::Configuration => "Review the configuration file and environment variables",
            ErrorCategory::Validation => match self {
                BrandError::NoKeywords { .. } => {
                    "Add keywords to the industry with `keywords add` or `keywords import`"
                }
                BrandError::NotFound { .. } => "List existing records to find a valid id",
                _ => "Check the command arguments and try again",
            },
            ErrorCategory::Storage => "Make sure the catalog directory exists and is writable",
            ErrorCategory::Data => "The catalog file may be corrupted; restore it from a backup",
        }
    }
}

pub type Result<T> = std::result::Result<T, BrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_user_facing_validation() {
        let err = BrandError::NoKeywords {
            industry_id: "food".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "No keywords found for this industry");
        assert!(err.recovery_suggestion().contains("keywords"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = BrandError::MissingConfigError {
            field: "backend.url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let invalid = BrandError::ConfigValidationError {
            field: "backend.api_key".to_string(),
            message: "unresolved environment variable".to_string(),
        };
        assert_eq!(invalid.severity().exit_code(), 3);

        let unreachable = BrandError::Backend {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(unreachable.severity().exit_code(), 2);

        assert_eq!(BrandError::not_found("Industry", "x").severity().exit_code(), 1);
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
    }

    #[test]
    fn test_backend_error_message_includes_status() {
        let err = BrandError::Backend {
            status: 401,
            message: "JWT expired".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.user_friendly_message().contains("401"));
        assert_eq!(err.to_string(), "Backend returned 401: JWT expired");
    }
}
