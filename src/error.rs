//! Error types for configuration loading.
//!
//! The per-frame simulation never fails; bad inputs there are sanitized.

use std::fmt;

/// Errors that can occur while building a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A tuning value is outside its usable range.
    InvalidSetting {
        name: &'static str,
        reason: &'static str,
    },
    /// Settings document could not be parsed.
    Config(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidSetting { name, reason } => {
                write!(f, "invalid setting `{}`: {}", name, reason)
            }
            SimError::Config(msg) => write!(f, "failed to parse settings: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SimError::InvalidSetting {
            name: "ease_up",
            reason: "must be in (0, 1]",
        };
        assert_eq!(err.to_string(), "invalid setting `ease_up`: must be in (0, 1]");
    }

    #[test]
    fn test_from_json_error() {
        let err: SimError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SimError::Config(_)));
    }
}
