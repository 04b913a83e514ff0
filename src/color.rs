//! Contains the colormaps the renderer can draw with.  Each map is a
//! short table of gradient stops, and a lookup linearly interpolates
//! between the two stops bracketing the requested position.  The
//! named maps are the ColorBrewer Spectral ramp, the classic hot and
//! copper ramps, and a plain grayscale.

use std::str::FromStr;

use image::Rgb;
use num::clamp;

use errors::RenderError;

// One anchor of a gradient: a position in [0, 1] and the color the
// ramp passes through there.
#[derive(Copy, Clone, Debug)]
struct GradientStop {
    position: f64,
    color: [u8; 3],
}

const SPECTRAL_STOPS: [GradientStop; 11] = [
    GradientStop { position: 0.0, color: [158, 1, 66] },
    GradientStop { position: 0.1, color: [213, 62, 79] },
    GradientStop { position: 0.2, color: [244, 109, 67] },
    GradientStop { position: 0.3, color: [253, 174, 97] },
    GradientStop { position: 0.4, color: [254, 224, 139] },
    GradientStop { position: 0.5, color: [255, 255, 191] },
    GradientStop { position: 0.6, color: [230, 245, 152] },
    GradientStop { position: 0.7, color: [171, 221, 164] },
    GradientStop { position: 0.8, color: [102, 194, 165] },
    GradientStop { position: 0.9, color: [50, 136, 189] },
    GradientStop { position: 1.0, color: [94, 79, 162] },
];

const HOT_STOPS: [GradientStop; 4] = [
    GradientStop { position: 0.0, color: [11, 0, 0] },
    GradientStop { position: 0.365079, color: [255, 0, 0] },
    GradientStop { position: 0.746032, color: [255, 255, 0] },
    GradientStop { position: 1.0, color: [255, 255, 255] },
];

const COPPER_STOPS: [GradientStop; 3] = [
    GradientStop { position: 0.0, color: [0, 0, 0] },
    GradientStop { position: 0.809524, color: [255, 161, 103] },
    GradientStop { position: 1.0, color: [255, 199, 127] },
];

const GRAYSCALE_STOPS: [GradientStop; 2] = [
    GradientStop { position: 0.0, color: [0, 0, 0] },
    GradientStop { position: 1.0, color: [255, 255, 255] },
];

/// The colormaps the renderer knows by name.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Colormap {
    /// ColorBrewer's 11-class diverging Spectral ramp.
    Spectral,
    /// Black through red and yellow to white.
    Hot,
    /// Black up to a polished copper.
    Copper,
    /// Black to white.
    Grayscale,
}

impl Colormap {
    /// Every recognized colormap name, for option listings.
    pub const NAMES: [&'static str; 4] = ["spectral", "hot", "copper", "grayscale"];

    fn stops(&self) -> &'static [GradientStop] {
        match *self {
            Colormap::Spectral => &SPECTRAL_STOPS,
            Colormap::Hot => &HOT_STOPS,
            Colormap::Copper => &COPPER_STOPS,
            Colormap::Grayscale => &GRAYSCALE_STOPS,
        }
    }

    /// The color at position `t` on the ramp, where 0.0 is the dark
    /// end and 1.0 the bright end.  Positions outside [0, 1] clamp
    /// to the ends.
    pub fn lookup(&self, t: f64) -> Rgb<u8> {
        let stops = self.stops();
        let t = clamp(t, 0.0, 1.0);
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.position {
                let span = b.position - a.position;
                let f = if span > 0.0 { (t - a.position) / span } else { 0.0 };
                return Rgb([
                    channel(a.color[0], b.color[0], f),
                    channel(a.color[1], b.color[1], f),
                    channel(a.color[2], b.color[2], f),
                ]);
            }
        }
        Rgb(stops[stops.len() - 1].color)
    }
}

// Linear interpolation of a single channel.
fn channel(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + f * (f64::from(b) - f64::from(a))).round() as u8
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Colormap, RenderError> {
        match s.to_lowercase().as_str() {
            "spectral" => Ok(Colormap::Spectral),
            "hot" => Ok(Colormap::Hot),
            "copper" => Ok(Colormap::Copper),
            "grayscale" | "gray" => Ok(Colormap::Grayscale),
            _ => Err(RenderError::InvalidConfiguration {
                reason: format!("unknown colormap {:?}", s),
            }),
        }
    }
}
