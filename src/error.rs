use thiserror::Error;

/// Errors returned by planet generation.
///
/// Out-of-range values that have a sensible nearest value (subdivision level,
/// texel lookups, noise sums) are clamped instead of reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanetError {
    /// A parameter or intermediate value violates a precondition.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl PlanetError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PlanetError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
