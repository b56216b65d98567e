use crate::error::{FractionError, Result};
use log::info;
use std::sync::atomic::{AtomicU64, Ordering};

/// Relative tolerance used unless changed with `set_epsilon`
pub const DEFAULT_EPSILON: f64 = 1e-12;

// Bit pattern of DEFAULT_EPSILON
static EPSILON: AtomicU64 = AtomicU64::new(0x3d71_9799_812d_ea11);

/// Return the relative tolerance used to compensate rounding errors
pub fn epsilon() -> f64 {
    f64::from_bits(EPSILON.load(Ordering::Relaxed))
}
/// Change the relative tolerance for the whole process. A value of 0
/// disables compensation entirely.
pub fn set_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(FractionError::InvalidArgument("epsilon must be finite and not negative"));
    }
    EPSILON.store(epsilon.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// Collapse `numerator / denominator` to the nearest whole number if the
/// quotient lies within the relative tolerance of it. Repeated float
/// operations (especially roots) drift away from exact results, so 2.0000000000000004
/// is taken to be 2.
///
/// Returns the possibly replaced pair and whether it was replaced. A
/// replacement is reported through `log` under the `fractional::precision`
/// target. A pair that is already `n/1` with a whole `n` passes the
/// tolerance test too, but nothing changes, so it is neither flagged nor
/// logged.
pub(crate) fn compensate(numerator: f64, denominator: f64) -> (f64, f64, bool) {
    let quotient = numerator / denominator;
    // Same rounding as a banker's conversion to a 64-bit integer
    let nearest = quotient.round_ties_even() + 0.0;

    if (quotient - nearest).abs() < quotient.abs() * epsilon() {
        let changed = nearest != numerator || denominator != 1.0;
        if changed {
            info!(
                target: "fractional::precision",
                "compensated rounding error: {} / {} -> {}",
                numerator, denominator, nearest
            );
        }
        return (nearest, 1.0, changed);
    }
    (numerator, denominator, false)
}
