/// Error type for the rank-correlation entry points.
///
/// There is exactly one recoverable failure mode: the two input samples have
/// different lengths. Everything else — empty input, single observations, NaN
/// values — is a valid input with documented output, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrelationError {
    /// The two samples do not pair up positionally.
    #[error(
        "Sample length mismatch: first sample has {left} observations, second has {right}. Pass two sequences of equal length."
    )]
    LengthMismatch {
        /// Length of the first sample.
        left: usize,
        /// Length of the second sample.
        right: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Fail fast when the two samples cannot be paired positionally.
pub(crate) fn check_paired_lengths(x: &[f64], y: &[f64]) -> CorrelationResult<()> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(CorrelationError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        })
    }
}
