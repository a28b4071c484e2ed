//! Naive pairwise Kendall tau: the O(n²) reference path.
//!
//! Every unordered index pair is classified by the sign of the product of
//! coordinate differences:
//!
//! ```text
//! dx = x[i] - x[j],  dy = y[i] - y[j]
//!
//! dx * dy > 0    concordant
//! dx * dy < 0    discordant
//! dx * dy == 0   tied (either coordinate difference exactly zero)
//!
//! tau = (concordant - discordant) / (n * (n - 1) / 2)
//! ```
//!
//! Tie detection is exact floating-point equality, never an epsilon
//! tolerance; tied pairs drop out of the numerator while the denominator
//! stays the full pair count. This is tau-a with ties discarded, not tau-b.
//!
//! A NaN difference product fails all three sign tests, so pairs touching a
//! NaN observation are counted nowhere: tau stays finite and its magnitude
//! shrinks toward zero as NaN pairs displace classified ones.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CorrelationResult, check_paired_lengths};

/// Classification totals over the unordered index pairs of two samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCounts {
    /// Pairs whose coordinate differences share a sign.
    pub concordant: u64,
    /// Pairs whose coordinate differences have opposite signs.
    pub discordant: u64,
    /// Pairs where either coordinate difference is exactly zero.
    pub tied: u64,
}

impl PairCounts {
    /// Total number of classified pairs.
    ///
    /// Equals n(n−1)/2 for NaN-free samples. Pairs whose difference product
    /// is NaN match no class, so the total falls short by one per such pair.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.concordant
            .saturating_add(self.discordant)
            .saturating_add(self.tied)
    }
}

/// Classify every unordered index pair of the two samples.
///
/// Runs the full O(n²) sweep and returns the concordant/discordant/tied
/// totals. Zero-length and single-observation samples classify no pairs and
/// return [`PairCounts::default`].
///
/// # Errors
///
/// [`CorrelationError::LengthMismatch`](crate::CorrelationError::LengthMismatch)
/// when the samples differ in length.
pub fn classify_pairs(x: &[f64], y: &[f64]) -> CorrelationResult<PairCounts> {
    check_paired_lengths(x, y)?;

    let mut counts = PairCounts::default();
    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            let product = dx * dy;
            if product > 0.0 {
                counts.concordant = counts.concordant.saturating_add(1);
            } else if product < 0.0 {
                counts.discordant = counts.discordant.saturating_add(1);
            } else if product == 0.0 {
                counts.tied = counts.tied.saturating_add(1);
            }
            // NaN products fall through unclassified.
        }
    }
    Ok(counts)
}

/// Kendall's tau via exhaustive pair comparison. O(n²) time, O(1) space.
///
/// The reference path: simple enough to trust by inspection, and the oracle
/// the optimized [`kendall_tau_knight`](crate::kendall_tau_knight) is
/// validated against. Computes `(concordant − discordant) / C(n, 2)` with
/// the full pair count as denominator.
///
/// Returns `0.0` exactly when `x.len() < 2` (tau is undefined for fewer
/// than two observations).
///
/// # Errors
///
/// [`CorrelationError::LengthMismatch`](crate::CorrelationError::LengthMismatch)
/// when the samples differ in length.
#[instrument(name = "rankcorr::pairwise", skip(x, y), fields(n = x.len()))]
pub fn kendall_tau_pairwise(x: &[f64], y: &[f64]) -> CorrelationResult<f64> {
    let counts = classify_pairs(x, y)?;

    let n = x.len();
    if n < 2 {
        return Ok(0.0);
    }

    let n_u64 = u64::try_from(n).unwrap_or(u64::MAX);
    let total_pairs = n_u64.saturating_mul(n_u64 - 1) / 2;

    #[allow(clippy::cast_precision_loss)]
    let numerator = counts.concordant as f64 - counts.discordant as f64;
    #[allow(clippy::cast_precision_loss)]
    let denominator = total_pairs as f64;
    let tau = numerator / denominator;

    debug!(
        target: "rankcorr.pairwise",
        concordant = counts.concordant,
        discordant = counts.discordant,
        tied = counts.tied,
        tau,
        "pairwise tau computed"
    );

    Ok(tau)
}
