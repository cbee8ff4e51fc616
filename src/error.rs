//! Error types for the projection engine

use thiserror::Error;

/// Result type used by all engine entry points
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors reported synchronously by engine calculations
///
/// The engine either fully succeeds or fails before producing output;
/// there is no partial-result case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// An input failed validation at the contract boundary
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A simulation loop would exceed its iteration safety bound
    /// without reaching its terminal condition
    #[error("simulation did not converge within {months} months")]
    NonConvergent {
        /// The iteration bound that was (or would be) exceeded
        months: u32,
    },
}

impl EngineError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::invalid("principal", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter `principal`: must be positive"
        );

        let err = EngineError::NonConvergent { months: 600 };
        assert_eq!(
            err.to_string(),
            "simulation did not converge within 600 months"
        );
    }
}
