//! Contains the two-pass normalization that turns a raw escape
//! matrix into colormap intensities.
//!
//! The interesting structure of a Julia set lives well below the
//! iteration cap, so rescaling against the cap itself washes the
//! picture out behind the wall of cap values.  The first pass
//! instead finds the largest count that actually escaped, the
//! "second largest" count.  The second pass inverts each count so
//! that fast escapes render bright, then rescales against that
//! statistic.  Counts slower than the statistic land above the
//! intensity limit and are preserved as they are; saturating them is
//! the output stage's business.

use errors::RenderError;

/// The top of the intensity scale the rescale pass aims for.  One
/// cell of headroom below the statistic maps to exactly this much
/// intensity.
pub const INTENSITY_LIMIT: f64 = 255.0;

// The combine step of the statistic scan: keep the larger of two
// counts, ignoring anything at or past the cap.  Associative and
// commutative, so the scan could be sharded without changing its
// answer.
fn larger_escaped(largest: u32, count: u32, cap: u32) -> u32 {
    if count < cap && count > largest {
        count
    } else {
        largest
    }
}

/// The first pass: the largest count strictly below `max_iterations`
/// anywhere in the matrix, or 0 if there is none.  Zero counts take
/// part like any other value; they simply never win.
pub fn second_largest(counts: &[u32], max_iterations: u32) -> u32 {
    counts
        .iter()
        .fold(0, |largest, &count| larger_escaped(largest, count, max_iterations))
}

/// The second pass: consume the escape matrix and produce the
/// intensity matrix.  Cells that never iterated stay at 0.0, cells
/// that sat at the cap land on 0.0 through the inversion, and
/// everything else is inverted and rescaled against the
/// second-largest count.
///
/// Fails with InvalidStatistic when the statistic comes back 0 while
/// the matrix still holds nonzero counts, since the rescale would
/// divide by zero.  A matrix of nothing but zeros never reaches the
/// division and passes through unchanged.
pub fn normalize(counts: Vec<u32>, max_iterations: u32) -> Result<Vec<f64>, RenderError> {
    let largest = second_largest(&counts, max_iterations);
    debug!(
        "second largest count: {} (cap {}, {} cells)",
        largest,
        max_iterations,
        counts.len()
    );

    if largest == 0 {
        if counts.iter().any(|&count| count != 0) {
            return Err(RenderError::InvalidStatistic);
        }
        return Ok(vec![0.0; counts.len()]);
    }

    let multiplier = INTENSITY_LIMIT / f64::from(largest);
    Ok(counts
        .iter()
        .map(|&count| {
            if count == 0 {
                // Outside the escape circle before the first
                // application; stays dark.
                0.0
            } else {
                f64::from(max_iterations - count) * multiplier
            }
        })
        .collect())
}
