#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is drawn with the same machinery as the Mandelbrot:
//! take a complex number, square it, add a constant, repeat, and
//! measure how quickly the result goes to infinity.  The difference
//! is which number is the variable.  The Mandelbrot varies the
//! constant and always starts its orbits at zero; a Julia set fixes
//! one constant for the entire picture and lets each pixel supply
//! the starting point.  Every constant draws a different set, from
//! bushy cauliflower shapes to sprays of frost.
//!
//! The pipeline here is deliberately small.  A grid geometry maps
//! pixels onto a window of the complex plane centered on the origin.
//! The renderer walks the grid and records each pixel's "velocity",
//! the count of iterations it took to get past a magnitude of 2.0.
//! The normalizer inverts the counts and rescales them against the
//! largest count that actually escaped, so the structure near the
//! set stays visible instead of drowning behind the pixels that
//! never escaped at all.  A colormap turns the rescaled intensities
//! into pixels, and the PNG goes to disk.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;

#[cfg(test)]
extern crate rand;

pub mod color;
pub mod errors;
pub mod grid;
pub mod julia;
pub mod normalize;
pub mod render;

pub use color::Colormap;
pub use errors::RenderError;
pub use grid::GridGeometry;
pub use julia::{escape_time, JuliaRenderer, QuadraticMap, ESCAPE_MAGNITUDE};
pub use normalize::{normalize, second_largest, INTENSITY_LIMIT};
pub use render::{render, write_image};
