//! Contains the error taxonomy of the renderer.  Every failure is
//! knowable before any expensive work begins: bad requests are caught
//! before the first pixel is sampled, and a bad escape matrix is
//! caught before the rescale pass touches it.  In both cases the run
//! aborts without writing an output file.

/// The ways a render run can fail.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The requested grid, bounds, or iteration budget can never
    /// describe a meaningful sampling run.  Detected while the
    /// pipeline is being assembled.
    #[fail(display = "invalid configuration: {}", reason)]
    InvalidConfiguration {
        /// What was wrong with the request.
        reason: String,
    },

    /// The escape matrix had no count below the iteration cap to
    /// normalize against, so rescaling would divide by zero.
    /// Detected before the rescale pass runs.
    #[fail(display = "invalid statistic: no escape count below the iteration cap")]
    InvalidStatistic,
}
