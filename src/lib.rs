//! Kendall's tau rank correlation over paired `f64` samples.
//!
//! This crate provides:
//! - **Pairwise path**: [`kendall_tau_pairwise`], the O(n²) reference that
//!   classifies every index pair as concordant, discordant, or tied.
//! - **Knight path**: [`kendall_tau_knight`], the O(n log n) merge-sort
//!   inversion-counting formulation (Knight, 1966).
//! - **Primitives**: [`classify_pairs`] for the raw [`PairCounts`] totals and
//!   [`count_inversions`] for standalone inversion counting.
//!
//! Both tau entry points implement the same definition — tau-a with tied
//! pairs excluded from the numerator over the full C(n, 2) denominator — and
//! agree to within floating-point tolerance whenever neither sample contains
//! duplicate values; tied pairs diverge in documented ways (see
//! [`knight`]). Ties are detected by exact floating-point equality, never an
//! epsilon. Samples of fewer than two observations yield `0.0` exactly;
//! samples of unequal length fail with [`CorrelationError::LengthMismatch`].
//!
//! NaN observations are valid input with documented, deterministic behavior
//! (see the module docs of [`pairwise`] and [`knight`]); the two paths need
//! not agree in that case.
//!
//! No tracing subscriber is installed by this crate; both entry points emit
//! spans and debug events under the `rankcorr.*` targets for consumers that
//! bring one.

pub mod error;
pub mod inversion;
pub mod knight;
pub mod pairwise;

pub use error::{CorrelationError, CorrelationResult};
pub use inversion::count_inversions;
pub use knight::kendall_tau_knight;
pub use pairwise::{PairCounts, classify_pairs, kendall_tau_pairwise};
