//! Contains the GridGeometry struct, which describes the relationship
//! between the pixel grid of the output image and a rectangle of the
//! complex plane centered on the origin.  The rectangle is given by
//! its half-extent along each axis, so a bound of 1.2 covers real
//! coordinates from -1.2 up to just short of 1.2.
use num::Complex;

use errors::RenderError;

/// Describes the pixel grid and the centered region of the complex
/// plane it samples.  Row 0 of the grid sits at the bottom of the
/// region, at the most negative imaginary coordinate; callers that
/// want image coordinates flip rows themselves.
#[derive(Copy, Clone, Debug)]
pub struct GridGeometry {
    /// The number of pixel rows in the grid.
    pub height: usize,
    /// The number of pixel columns in the grid.
    pub width: usize,
    /// Half-extent of the sampled region along the real axis.
    pub xbound: f64,
    /// Half-extent of the sampled region along the imaginary axis.
    pub ybound: f64,
    // The plane distance covered by one pixel step along each axis.
    xfactor: f64,
    yfactor: f64,
}

impl GridGeometry {
    /// Constructor.  Takes the pixel dimensions of the grid and the
    /// half-extents of the plane region.  Each axis needs at least
    /// two pixels, since the step size along an axis is the bound
    /// divided by half the pixel count, and each bound must be a
    /// positive finite number.
    pub fn new(
        height: usize,
        width: usize,
        xbound: f64,
        ybound: f64,
    ) -> Result<GridGeometry, RenderError> {
        if height < 2 || width < 2 {
            return Err(RenderError::InvalidConfiguration {
                reason: format!("the grid must be at least 2x2 pixels, got {}x{}", width, height),
            });
        }

        if !(xbound.is_finite() && xbound > 0.0 && ybound.is_finite() && ybound > 0.0) {
            return Err(RenderError::InvalidConfiguration {
                reason: format!(
                    "the plane bounds must be positive finite numbers, got {},{}",
                    xbound, ybound
                ),
            });
        }

        // These are the multipliers taking centered pixel steps to
        // plane coordinates.
        let xfactor = xbound / ((width / 2) as f64);
        let yfactor = ybound / ((height / 2) as f64);

        Ok(GridGeometry {
            height,
            width,
            xbound,
            ybound,
            xfactor,
            yfactor,
        })
    }

    /// The total number of cells in the grid.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// Describes that the grid is of a size.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Given the row and column of a pixel, return the point on the
    /// complex plane that pixel samples.  Columns run along the real
    /// axis and rows along the imaginary axis, with row 0 at the
    /// bottom of the region.
    ///
    /// The grid is centered by floor division: row `r` samples
    /// centered step `r - height/2`.  An axis with an odd pixel count
    /// therefore puts its middle pixel exactly on the origin, while
    /// an even axis takes one more step on the negative side than the
    /// positive.
    pub fn pixel_to_point(&self, row: usize, column: usize) -> Complex<f64> {
        let h = column as i64 - (self.width / 2) as i64;
        let v = row as i64 - (self.height / 2) as i64;
        Complex::new((h as f64) * self.xfactor, (v as f64) * self.yfactor)
    }
}
