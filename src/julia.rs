// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is the Mandelbrot's cousin.  Both repeatedly square a
//! complex number and add a constant, measuring how quickly the
//! result goes to infinity.  The Mandelbrot draws one picture of all
//! possible constants; a Julia set fixes a single constant for the
//! whole picture and lets the pixel being drawn supply the starting
//! point instead.  Every choice of constant draws a different set.
//!
//! The number recorded per pixel is the "velocity": how many
//! applications of the map it took the orbit to get past a magnitude
//! of 2.0, at which point it is provably gone for good.  Orbits still
//! inside that circle when the iteration budget runs out are treated
//! as members of the set and report the budget itself.

extern crate crossbeam;
extern crate itertools;
extern crate num;

use itertools::iproduct;
use num::Complex;

use errors::RenderError;
use grid::GridGeometry;

/// The orbit magnitude at which a point has provably diverged.  Once
/// past this circle it can never come back.
pub const ESCAPE_MAGNITUDE: f64 = 2.0;

/// The iteration map z -> z^2 + c with its constant fixed at
/// construction.  Built once per render and never mutated, so it can
/// be shared freely across worker threads.
#[derive(Copy, Clone, Debug)]
pub struct QuadraticMap {
    c: Complex<f64>,
}

impl QuadraticMap {
    /// A map with the given fixed constant.
    pub fn new(c: Complex<f64>) -> QuadraticMap {
        QuadraticMap { c }
    }

    /// One application of the map to an orbit point.
    #[inline]
    pub fn apply(&self, z: Complex<f64>) -> Complex<f64> {
        z * z + self.c
    }
}

/// Counts how many applications of `map` it takes `sample` to reach
/// ESCAPE_MAGNITUDE, capped at `max_iterations`.  A sample already at
/// or past the magnitude reports zero without iterating at all;
/// everything else reports at least one.  The magnitude test uses the
/// full hypotenuse, not the squared-norm shortcut, so enormous
/// coordinates cannot overflow their way back inside the circle.
pub fn escape_time(sample: Complex<f64>, map: &QuadraticMap, max_iterations: u32) -> u32 {
    let mut z = sample;
    let mut count = 0;
    while z.norm() < ESCAPE_MAGNITUDE {
        count += 1;
        z = map.apply(z);
        if count >= max_iterations {
            break;
        }
    }
    count
}

/// Takes a grid geometry, an iteration map, and an iteration budget,
/// and renders the raw material of a Julia set out of them: the
/// matrix of escape counts, one per pixel, in row-major order with
/// row 0 at the bottom of the plane region.  The counts are raw on
/// purpose; rescaling them for display is the normalizer's job.
pub struct JuliaRenderer {
    geometry: GridGeometry,
    map: QuadraticMap,
    max_iterations: u32,
}

impl JuliaRenderer {
    /// Requires a validated geometry, the iteration map, and the
    /// number of iterations to perform before declaring a point a
    /// member of the set.  A budget of zero could never distinguish
    /// members from escapees and is rejected.
    pub fn new(
        geometry: GridGeometry,
        map: QuadraticMap,
        max_iterations: u32,
    ) -> Result<JuliaRenderer, RenderError> {
        if max_iterations == 0 {
            return Err(RenderError::InvalidConfiguration {
                reason: "the iteration budget must be at least 1".to_string(),
            });
        }
        Ok(JuliaRenderer {
            geometry,
            map,
            max_iterations,
        })
    }

    /// The geometry this renderer samples.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    // Renders one horizontal band of the grid.  `first_row` is the
    // absolute grid row of the first cell in `band`.
    fn fill_band(&self, first_row: usize, band: &mut [u32]) {
        let width = self.geometry.width;
        for (index, cell) in band.iter_mut().enumerate() {
            let sample = self
                .geometry
                .pixel_to_point(first_row + index / width, index % width);
            *cell = escape_time(sample, &self.map, self.max_iterations);
        }
    }

    /// The main function for single-threaded rendering.  Walks every
    /// cell of the grid in row-major order and produces the escape
    /// matrix.
    pub fn sample_grid(&self) -> Vec<u32> {
        let mut counts = vec![0 as u32; self.geometry.len()];
        for (row, column) in iproduct!(0..self.geometry.height, 0..self.geometry.width) {
            counts[row * self.geometry.width + column] = escape_time(
                self.geometry.pixel_to_point(row, column),
                &self.map,
                self.max_iterations,
            );
        }
        counts
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  The matrix is split into
    /// contiguous horizontal bands, one per thread, so the result is
    /// identical to the single-threaded version cell for cell.
    pub fn sample_grid_threaded(&self, threads: usize) -> Vec<u32> {
        let threads = if threads == 0 { 1 } else { threads };
        let band_rows = self.geometry.height / threads + 1;
        let mut counts = vec![0 as u32; self.geometry.len()];
        crossbeam::scope(|spawner| {
            for (band, cells) in counts.chunks_mut(band_rows * self.geometry.width).enumerate() {
                spawner.spawn(move |_| {
                    self.fill_band(band * band_rows, cells);
                });
            }
        })
        .unwrap();
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_outside_the_escape_circle_never_iterate() {
        let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
        assert_eq!(escape_time(Complex::new(2.0, 0.0), &map, 50), 0);
        assert_eq!(escape_time(Complex::new(0.0, -2.0), &map, 50), 0);
        assert_eq!(escape_time(Complex::new(1.5, 1.5), &map, 50), 0);
        assert_eq!(escape_time(Complex::new(-40.0, 7.0), &map, 50), 0);
    }

    #[test]
    fn bounded_orbits_report_the_budget() {
        // With c = 0 the orbit of any |z| < 1 point decays toward
        // the origin and never escapes.
        let map = QuadraticMap::new(Complex::new(0.0, 0.0));
        assert_eq!(escape_time(Complex::new(0.5, 0.0), &map, 50), 50);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), &map, 1), 1);
    }

    #[test]
    fn a_single_application_can_escape() {
        // |1.9| is inside the circle, but 1.9 squared is not.
        let map = QuadraticMap::new(Complex::new(0.0, 0.0));
        assert_eq!(escape_time(Complex::new(1.9, 0.0), &map, 50), 1);
    }

    #[test]
    fn the_origin_escapes_the_cauliflower_constant() {
        // On a 4x4 grid over +-1.2 the cell at (2, 2) is the origin
        // itself.
        let geometry = GridGeometry::new(4, 4, 1.2, 1.2).unwrap();
        let sample = geometry.pixel_to_point(2, 2);
        assert_eq!(sample, Complex::new(0.0, 0.0));

        let map = QuadraticMap::new(Complex::new(-0.7, -0.3));
        let count = escape_time(sample, &map, 50);
        assert!(
            count > 0 && count < 50,
            "the origin should escape below the budget, got {}",
            count
        );

        // Replay the recurrence with bare arithmetic and demand an
        // exact match.
        let (mut re, mut im) = (0.0_f64, 0.0_f64);
        let mut expected = 0;
        while re.hypot(im) < ESCAPE_MAGNITUDE {
            expected += 1;
            let next = (re * re - im * im - 0.7, re * im + im * re - 0.3);
            re = next.0;
            im = next.1;
            if expected >= 50 {
                break;
            }
        }
        assert_eq!(count, expected);
    }

    #[test]
    fn escape_time_is_deterministic() {
        let map = QuadraticMap::new(Complex::new(-0.7, 0.27015));
        let samples = [
            Complex::new(0.0, 0.0),
            Complex::new(0.3, -0.2),
            Complex::new(-1.1, 0.9),
            Complex::new(0.001, 1.1),
        ];
        for &sample in samples.iter() {
            assert_eq!(
                escape_time(sample, &map, 200),
                escape_time(sample, &map, 200)
            );
        }
    }

    #[test]
    fn counts_stay_within_the_iteration_budget() {
        // Every sample of a +-1.2 region starts inside the escape
        // circle, so every count lands in 1..=budget.
        let geometry = GridGeometry::new(6, 6, 1.2, 1.2).unwrap();
        let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
        let renderer = JuliaRenderer::new(geometry, map, 25).unwrap();
        for (cell, &count) in renderer.sample_grid().iter().enumerate() {
            assert!(
                count >= 1 && count <= 25,
                "cell {} out of range: {}",
                cell,
                count
            );
        }
    }

    #[test]
    fn grid_cells_match_per_pixel_evaluation() {
        let geometry = GridGeometry::new(4, 4, 1.2, 1.2).unwrap();
        let map = QuadraticMap::new(Complex::new(-0.7, -0.3));
        let renderer = JuliaRenderer::new(geometry, map, 50).unwrap();
        let counts = renderer.sample_grid();
        assert_eq!(counts.len(), geometry.len());
        for (row, column) in iproduct!(0..4, 0..4) {
            assert_eq!(
                counts[row * 4 + column],
                escape_time(geometry.pixel_to_point(row, column), &map, 50)
            );
        }
    }

    #[test]
    fn threaded_rendering_matches_single_threaded() {
        // Odd dimensions leave a ragged final band; the thread counts
        // exercise band splits both above and below the row count.
        let geometry = GridGeometry::new(5, 7, 1.2, 0.9).unwrap();
        let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
        let renderer = JuliaRenderer::new(geometry, map, 40).unwrap();
        let single = renderer.sample_grid();
        for threads in 1..8 {
            assert_eq!(renderer.sample_grid_threaded(threads), single);
        }
    }

    #[test]
    fn renderer_fails_on_a_zero_iteration_budget() {
        let geometry = GridGeometry::new(4, 4, 1.2, 1.2).unwrap();
        let map = QuadraticMap::new(Complex::new(0.0, 1.0));
        assert!(JuliaRenderer::new(geometry, map, 0).is_err());
    }
}
