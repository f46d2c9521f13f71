use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Sequential colour map
// ---------------------------------------------------------------------------

/// Anchor colours of matplotlib's perceptually-uniform "plasma" map,
/// sampled at even steps of 1/8.
const PLASMA: [(f32, f32, f32); 9] = [
    (0.050, 0.030, 0.528),
    (0.287, 0.010, 0.627),
    (0.494, 0.012, 0.658),
    (0.665, 0.139, 0.586),
    (0.798, 0.280, 0.470),
    (0.902, 0.417, 0.353),
    (0.973, 0.585, 0.252),
    (0.988, 0.773, 0.155),
    (0.940, 0.975, 0.131),
];

/// Maps `t ∈ [0, 1]` onto a colour by interpolating between anchors in
/// linear RGB.
#[derive(Debug, Clone)]
pub struct ColorMap {
    anchors: Vec<LinSrgb>,
}

impl ColorMap {
    pub fn plasma() -> Self {
        let anchors = PLASMA
            .iter()
            .map(|&(r, g, b)| Srgb::new(r, g, b).into_linear())
            .collect();
        ColorMap { anchors }
    }

    /// Colour at position `t`, clamped to `[0, 1]`. NaN maps to the low end.
    pub fn color_at(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) } as f32;
        let segments = (self.anchors.len() - 1) as f32;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(self.anchors.len() - 2);
        let frac = pos - i as f32;

        let lin = self.anchors[i].mix(self.anchors[i + 1], frac);
        let rgb: Srgb = Srgb::from_linear(lin);
        [
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        ]
    }
}

// ---------------------------------------------------------------------------
// Value → colour-map position
// ---------------------------------------------------------------------------

/// Linear normalisation of data values onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Scale spanning `[lo, hi]`. A zero-width range is widened by 0.5 on
    /// each side so the colour bar still has an axis.
    pub fn new(lo: f64, hi: f64) -> Self {
        if (hi - lo).abs() < f64::EPSILON {
            ValueScale {
                min: lo - 0.5,
                max: hi + 0.5,
            }
        } else {
            ValueScale { min: lo, max: hi }
        }
    }

    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }
}
