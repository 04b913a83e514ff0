//! The output stage: push an intensity matrix through a colormap and
//! write the result to disk as a PNG.  The sampling and
//! normalization stages never touch the filesystem; everything that
//! can fail with an io::Error lives here.

use std::fs::File;
use std::io;
use std::path::Path;

use image::png::PNGEncoder;
use image::ColorType;
use num::clamp;

use color::Colormap;
use normalize::INTENSITY_LIMIT;

/// Maps every intensity through the colormap and writes the image to
/// `outfile`.  `bounds` is the (width, height) of the matrix, whose
/// row 0 holds the bottom of the plane region; rows are flipped here
/// so the picture comes out the right way up.  Intensities clamp
/// into [0, INTENSITY_LIMIT] before lookup, which is where counts
/// slower than the normalization statistic finally saturate.
pub fn render(
    intensities: &[f64],
    bounds: (usize, usize),
    colormap: Colormap,
    outfile: &str,
) -> io::Result<()> {
    assert_eq!(intensities.len(), bounds.0 * bounds.1);
    let mut pixels = vec![0 as u8; 3 * intensities.len()];
    for row in 0..bounds.1 {
        let source = bounds.1 - 1 - row;
        for column in 0..bounds.0 {
            let value = clamp(intensities[source * bounds.0 + column], 0.0, INTENSITY_LIMIT);
            let color = colormap.lookup(value / INTENSITY_LIMIT);
            let offset = 3 * (row * bounds.0 + column);
            pixels[offset] = color[0];
            pixels[offset + 1] = color[1];
            pixels[offset + 2] = color[2];
        }
    }
    write_image(outfile, &pixels, bounds)
}

/// Writes a raw RGB byte buffer of the given (width, height) as a
/// PNG file.
pub fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> io::Result<()> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::RGB(8))?;
    Ok(())
}
