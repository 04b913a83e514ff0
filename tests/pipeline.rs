extern crate image;
extern crate juliaset;
extern crate num;
extern crate tempfile;

use image::GenericImageView;
use num::Complex;

use juliaset::{normalize, render, Colormap, GridGeometry, JuliaRenderer, QuadraticMap};

#[test]
fn the_full_pipeline_writes_a_decodable_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("julia.png");
    let outfile = path.to_str().expect("utf-8 path");

    let geometry = GridGeometry::new(12, 16, 1.2, 1.2).unwrap();
    let map = QuadraticMap::new(Complex::new(-0.7, -0.35));
    let renderer = JuliaRenderer::new(geometry, map, 50).unwrap();

    let intensities = normalize(renderer.sample_grid(), 50).unwrap();
    assert!(intensities.iter().all(|value| value.is_finite()));

    render(&intensities, (16, 12), Colormap::Spectral, outfile).unwrap();
    let decoded = image::open(outfile).expect("decode png");
    assert_eq!(decoded.dimensions(), (16, 12));
}

#[test]
fn threaded_and_single_threaded_runs_write_identical_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let single_path = dir.path().join("single.png");
    let threaded_path = dir.path().join("threaded.png");

    let geometry = GridGeometry::new(9, 11, 1.2, 1.2).unwrap();
    let map = QuadraticMap::new(Complex::new(0.0, 1.0));
    let renderer = JuliaRenderer::new(geometry, map, 30).unwrap();

    let single = normalize(renderer.sample_grid(), 30).unwrap();
    render(
        &single,
        (11, 9),
        Colormap::Hot,
        single_path.to_str().unwrap(),
    )
    .unwrap();

    let threaded = normalize(renderer.sample_grid_threaded(3), 30).unwrap();
    render(
        &threaded,
        (11, 9),
        Colormap::Hot,
        threaded_path.to_str().unwrap(),
    )
    .unwrap();

    assert_eq!(
        std::fs::read(&single_path).unwrap(),
        std::fs::read(&threaded_path).unwrap()
    );
}

#[test]
fn the_bottom_matrix_row_lands_at_the_bottom_of_the_picture() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("flip.png");

    // A 2x2 matrix with one bright cell in its bottom row.
    let intensities = [0.0, 255.0, 0.0, 0.0];
    render(
        &intensities,
        (2, 2),
        Colormap::Grayscale,
        path.to_str().unwrap(),
    )
    .unwrap();

    let decoded = image::open(&path).expect("decode png");
    assert_eq!(decoded.get_pixel(1, 1), image::Rgba([255, 255, 255, 255]));
    assert_eq!(decoded.get_pixel(0, 0), image::Rgba([0, 0, 0, 255]));
    assert_eq!(decoded.get_pixel(1, 0), image::Rgba([0, 0, 0, 255]));
    assert_eq!(decoded.get_pixel(0, 1), image::Rgba([0, 0, 0, 255]));
}
