//! Error types for checked spectral conversions.
//!
//! The raw conversions in [`airvacuum`](crate::airvacuum) and
//! [`wavenumber`](crate::wavenumber) never fail: bad input flows through IEEE-754
//! arithmetic as `inf` or `NaN`. [`SpectralError`] is only produced by the opt-in
//! checked functions in [`validate`](crate::validate).
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`InvalidInput`](SpectralError::InvalidInput) | Input is non-positive, non-finite, outside the configured window, or puts `s²` within the margin of a pole |
//! | [`InvalidOutput`](SpectralError::InvalidOutput) | The formula produced `inf`/`NaN` |

use thiserror::Error;

/// Classification of checked-conversion failures.
///
/// Used with both [`SpectralError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralErrorKind {
    /// Zero or negative wavelength/wavenumber.
    NonPositive,
    /// Value is NaN or infinite.
    NotFinite,
    /// `s²` lies within the configured margin of a dispersion pole.
    NearResonance,
    /// Value outside the configured wavelength window.
    OutOfRange,
}

/// Failure of a checked conversion.
///
/// Input checks (domain, window, resonance margin) run before the formula and raise
/// `InvalidInput`. Only a rejected non-finite result raises `InvalidOutput`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// The value handed to the conversion failed a domain, window or resonance check.
    #[error("Invalid input to {operation} ({kind:?}): {message}")]
    InvalidInput {
        operation: String,
        kind: SpectralErrorKind,
        message: String,
    },

    /// The conversion ran but its result was rejected.
    #[error("Invalid output from {operation} ({kind:?}): {message}")]
    InvalidOutput {
        operation: String,
        kind: SpectralErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SpectralError>`.
pub type SpectralResult<T> = Result<T, SpectralError>;

impl SpectralError {
    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(operation: &str, kind: SpectralErrorKind, reason: &str) -> Self {
        Self::InvalidInput {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidOutput`](Self::InvalidOutput) error.
    pub fn invalid_output(operation: &str, kind: SpectralErrorKind, reason: &str) -> Self {
        Self::InvalidOutput {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Classification carried by either variant.
    pub fn kind(&self) -> SpectralErrorKind {
        match self {
            Self::InvalidInput { kind, .. } | Self::InvalidOutput { kind, .. } => *kind,
        }
    }

    /// Name of the conversion that raised the error.
    pub fn operation(&self) -> &str {
        match self {
            Self::InvalidInput { operation, .. } | Self::InvalidOutput { operation, .. } => {
                operation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SpectralError::invalid_input(
            "vacuum_to_air",
            SpectralErrorKind::NonPositive,
            "wavelength -1 Å is not positive",
        );
        assert_eq!(
            err.to_string(),
            "Invalid input to vacuum_to_air (NonPositive): wavelength -1 Å is not positive"
        );
    }

    #[test]
    fn test_invalid_output_message() {
        let err = SpectralError::invalid_output(
            "air_to_vacuum",
            SpectralErrorKind::NotFinite,
            "result is inf",
        );
        assert!(err.to_string().contains("Invalid output from air_to_vacuum"));
        assert!(err.to_string().contains("NotFinite"));
    }

    #[test]
    fn test_accessors() {
        let err = SpectralError::invalid_input("nu2lambda", SpectralErrorKind::OutOfRange, "x");
        assert_eq!(err.kind(), SpectralErrorKind::OutOfRange);
        assert_eq!(err.operation(), "nu2lambda");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SpectralError>();
        _assert_sync::<SpectralError>();
    }
}
