extern crate clap;
extern crate env_logger;
extern crate juliaset;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::str::FromStr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use juliaset::{
    normalize, render, Colormap, GridGeometry, JuliaRenderer, QuadraticMap, RenderError,
};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const BOUNDS: &str = "bounds";
const CONSTANT: &str = "constant";
const PRESET: &str = "preset";
const ITERATIONS: &str = "iterations";
const COLORMAP: &str = "colormap";
const THREADS: &str = "threads";

// The named constants the tool has always shipped with.
const PRESETS: [(&str, f64, f64); 3] = [
    ("cauliflower", -0.7, -0.3),
    ("dendrite", 0.0, 1.0),
    ("frost", -0.7, -0.35),
];

fn preset_constant(name: &str) -> Option<Complex<f64>> {
    PRESETS
        .iter()
        .find(|&&(preset, _, _)| preset == name)
        .map(|&(_, re, im)| Complex { re, im })
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (defaults to julia_<timestamp>.png)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(BOUNDS)
                .required(false)
                .long(BOUNDS)
                .short("b")
                .takes_value(true)
                .default_value("1.2,1.2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse plane bounds"))
                .help("Half-extents of the sampled plane region, real,imaginary"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .default_value("-0.7,-0.35")
                .validator(|s| {
                    validate_pair::<f64>(&s, ',', "Could not parse the iteration constant")
                })
                .help("The fixed constant of the iteration map, real,imaginary"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .conflicts_with(CONSTANT)
                .possible_values(&["cauliflower", "dendrite", "frost"])
                .help("A named iteration constant"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("50")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iterations before a point is declared a member of the set"),
        )
        .arg(
            Arg::with_name(COLORMAP)
                .required(false)
                .long(COLORMAP)
                .short("m")
                .takes_value(true)
                .default_value("spectral")
                .possible_values(&Colormap::NAMES)
                .help("Colormap to draw with"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .get_matches()
}

// Timestamped default output name, julia_<unix seconds>.png, in the
// current directory.
fn default_filename() -> String {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("julia_{}.png", stamp)
}

// Seconds elapsed since `start`, for the log lines.
fn seconds_since(start: Instant) -> f64 {
    start.elapsed().as_millis() as f64 / 1000.0
}

fn bail(e: RenderError) -> ! {
    eprintln!("Render failure: {}", e);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let matches = args();
    let image_size =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let plane_bounds =
        parse_pair(matches.value_of(BOUNDS).unwrap(), ',').expect("Error parsing plane bounds");
    let constant = match matches.value_of(PRESET) {
        Some(name) => preset_constant(name).expect("Error resolving preset name"),
        None => parse_complex(matches.value_of(CONSTANT).unwrap())
            .expect("Error parsing the iteration constant"),
    };
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let colormap = Colormap::from_str(matches.value_of(COLORMAP).unwrap())
        .expect("Could not parse colormap name.");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let outfile = match matches.value_of(OUTPUT) {
        Some(name) => name.to_string(),
        None => default_filename(),
    };

    let geometry = GridGeometry::new(image_size.1, image_size.0, plane_bounds.0, plane_bounds.1)
        .unwrap_or_else(|e| bail(e));
    let renderer = JuliaRenderer::new(geometry, QuadraticMap::new(constant), iterations)
        .unwrap_or_else(|e| bail(e));

    let start = Instant::now();
    let raw = if threads > 1 {
        renderer.sample_grid_threaded(threads)
    } else {
        renderer.sample_grid()
    };
    info!("sampled {} cells in {:.3}s", geometry.len(), seconds_since(start));

    let start = Instant::now();
    let intensities = normalize(raw, iterations).unwrap_or_else(|e| bail(e));
    info!("normalized in {:.3}s", seconds_since(start));

    render(
        &intensities,
        (geometry.width, geometry.height),
        colormap,
        &outfile,
    )
    .unwrap();
    info!("wrote {}", outfile);
}
