use thiserror::Error;

const NOT_FOUND_MESSAGE: &str = "Who's that Pokémon? Nothing was found.";
const RATE_LIMITED_MESSAGE: &str = "Pikachu is overloaded right now. Try again later.";
const TIMEOUT_MESSAGE: &str = "Snorlax fell asleep... the request took too long.";
pub const NETWORK_FALLBACK_MESSAGE: &str = "Your team got lost on the way. Try again.";

#[derive(Error, Debug)]
pub enum PokeApiError {
    #[error("{} ({url})", NOT_FOUND_MESSAGE)]
    NotFound { url: String },

    #[error("{} ({url})", RATE_LIMITED_MESSAGE)]
    RateLimited { url: String },

    #[error("HTTP error {status} ({url})")]
    Http { status: u16, url: String },

    #[error("{} ({url} exceeded {timeout_ms} ms)", TIMEOUT_MESSAGE)]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Invalid query target '{value}': {reason}")]
    InvalidQuery { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for PokeApiError {
    fn from(err: serde_json::Error) -> Self {
        PokeApiError::Parse {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Transport,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PokeApiError {
    /// Builds a `Network` error, falling back to a fixed message when the
    /// underlying failure carries no text.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            NETWORK_FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        PokeApiError::Network { message }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PokeApiError::NotFound { .. }
            | PokeApiError::RateLimited { .. }
            | PokeApiError::Http { .. } => ErrorCategory::Upstream,
            PokeApiError::Timeout { .. } | PokeApiError::Network { .. } => {
                ErrorCategory::Transport
            }
            PokeApiError::Parse { .. } => ErrorCategory::Data,
            PokeApiError::InvalidQuery { .. }
            | PokeApiError::IoError(_)
            | PokeApiError::ConfigError { .. }
            | PokeApiError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PokeApiError::NotFound { .. } | PokeApiError::InvalidQuery { .. } => {
                ErrorSeverity::Low
            }
            PokeApiError::RateLimited { .. }
            | PokeApiError::Timeout { .. }
            | PokeApiError::Network { .. } => ErrorSeverity::Medium,
            PokeApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            PokeApiError::Http { .. } | PokeApiError::Parse { .. } => ErrorSeverity::High,
            PokeApiError::IoError(_)
            | PokeApiError::ConfigError { .. }
            | PokeApiError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether repeating the same idempotent request could succeed. The
    /// client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            PokeApiError::RateLimited { .. }
            | PokeApiError::Timeout { .. }
            | PokeApiError::Network { .. } => true,
            PokeApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PokeApiError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            PokeApiError::RateLimited { .. } => RATE_LIMITED_MESSAGE.to_string(),
            PokeApiError::Http { status, .. } => format!("HTTP error {}", status),
            PokeApiError::Timeout { .. } => TIMEOUT_MESSAGE.to_string(),
            PokeApiError::Network { message } => message.clone(),
            PokeApiError::Parse { .. } => "The Pokédex returned data it could not read.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PokeApiError::NotFound { .. } => "Check the id or name; names are lowercase slugs like 'mr-mime'",
            PokeApiError::RateLimited { .. } => "Wait a moment before sending more requests",
            PokeApiError::Http { .. } => "The upstream API is misbehaving; try again later",
            PokeApiError::Timeout { .. } => "Raise the timeout or check your connection",
            PokeApiError::Network { .. } => "Check your network connection and the API base URL",
            PokeApiError::Parse { .. } => "The upstream response was not valid JSON; report it if it persists",
            PokeApiError::InvalidQuery { .. } => "Use a positive numeric id or a lowercase name",
            PokeApiError::IoError(_) => "Check that the file exists and is readable",
            PokeApiError::ConfigError { .. } | PokeApiError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PokeApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_falls_back_on_empty_message() {
        match PokeApiError::network("  ") {
            PokeApiError::Network { message } => assert_eq!(message, NETWORK_FALLBACK_MESSAGE),
            other => panic!("unexpected error: {:?}", other),
        }

        match PokeApiError::network("connection refused") {
            PokeApiError::Network { message } => assert_eq!(message, "connection refused"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_classified_kinds_have_distinct_categories() {
        let not_found = PokeApiError::NotFound { url: "u".into() };
        let timeout = PokeApiError::Timeout {
            url: "u".into(),
            timeout_ms: 10,
        };
        let parse: PokeApiError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert_eq!(not_found.category(), ErrorCategory::Upstream);
        assert_eq!(timeout.category(), ErrorCategory::Transport);
        assert_eq!(parse.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_retryable() {
        assert!(PokeApiError::RateLimited { url: "u".into() }.is_retryable());
        assert!(PokeApiError::Http {
            status: 503,
            url: "u".into()
        }
        .is_retryable());
        assert!(!PokeApiError::Http {
            status: 400,
            url: "u".into()
        }
        .is_retryable());
        assert!(!PokeApiError::NotFound { url: "u".into() }.is_retryable());
    }

    #[test]
    fn test_user_friendly_message() {
        let err = PokeApiError::Http {
            status: 500,
            url: "https://pokeapi.co/api/v2/pokemon/1".into(),
        };
        assert_eq!(err.user_friendly_message(), "HTTP error 500");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let errors = [
            PokeApiError::ConfigError {
                message: "bad toml".into(),
            },
            PokeApiError::InvalidConfigValueError {
                field: "api.timeout_ms".into(),
                value: "0".into(),
                reason: "must be at least 1".into(),
            },
        ];

        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert_eq!(err.severity(), ErrorSeverity::Critical);
            assert!(!err.is_retryable());
        }
    }
}
