use thiserror::Error;

use crate::dimensions::ParseSizeError;

/// Every way a plan request can fail. All variants are deterministic
/// input-validation outcomes: recoverable, never retried, never fatal.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Parse(#[from] ParseSizeError),
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("weight per box must be a positive number, got {0}")]
    InvalidWeight(f64),
    #[error("orientation must be one of L, W, or H, got `{0}`")]
    InvalidOrientationToken(String),
    #[error("no orientation of this box fits the pallet footprint in either alignment")]
    FootprintInfeasible,
    #[error("every orientation of this box exceeds the stack height limit")]
    HeightInfeasible,
}

impl PlanError {
    /// Caller-safe one-liner suitable for display to the requesting user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse(_) => {
                "Could not read the box size. Use three numbers like 27.3 x 15.9 x 32.9."
            }
            Self::InvalidQuantity => "Quantity must be a whole number of at least 1.",
            Self::InvalidWeight(_) => "Weight per box must be a positive number of pounds.",
            Self::InvalidOrientationToken(_) => "Orientation must be L, W, or H.",
            Self::FootprintInfeasible => "No orientation of this box fits on the pallet deck.",
            Self::HeightInfeasible => {
                "This box cannot stack even one layer within the height limit."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dimensions::ParseSizeError;
    use crate::errors::PlanError;

    #[test]
    fn parse_failures_convert_into_plan_errors() {
        let error = PlanError::from(ParseSizeError::NonPositive { value: -1.0 });
        assert!(matches!(error, PlanError::Parse(_)));
        assert_eq!(
            error.user_message(),
            "Could not read the box size. Use three numbers like 27.3 x 15.9 x 32.9."
        );
    }

    #[test]
    fn infeasibility_kinds_have_distinct_user_messages() {
        assert_ne!(
            PlanError::FootprintInfeasible.user_message(),
            PlanError::HeightInfeasible.user_message()
        );
    }
}
