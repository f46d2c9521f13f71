use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

const POINTS_PER_LINE: usize = 110;
const LINES_PER_IMAGE: usize = 90;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Deterministic measurement noise: xoshiro256** (Blackman & Vigna)
/// seeded through splitmix64, with Box-Muller for the normal samples.
struct NoiseRng {
    s: [u64; 4],
}

impl NoiseRng {
    fn seeded(mut seed: u64) -> Self {
        let mut s = [0u64; 4];
        for slot in &mut s {
            seed = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = seed;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            *slot = z ^ (z >> 31);
        }
        NoiseRng { s }
    }

    fn next_u64(&mut self) -> u64 {
        let [a, b, c, d] = &mut self.s;
        let out = b.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *b << 17;
        *c ^= *a;
        *d ^= *b;
        *b ^= *c;
        *a ^= *d;
        *c ^= t;
        *d = d.rotate_left(45);
        out
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Zero-mean normal sample.
    fn noise(&mut self, sigma: f64) -> f64 {
        let u1 = self.unit().max(f64::MIN_POSITIVE);
        let u2 = self.unit();
        sigma * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// Peak centre and height at grid position `(line, point)`: the centre
/// drifts diagonally across the map, the height forms a bright spot.
fn peak_at(line: usize, point: usize) -> (f64, f64) {
    let u = point as f64 / (POINTS_PER_LINE - 1) as f64;
    let v = line as f64 / (LINES_PER_IMAGE - 1) as f64;
    let center = 244.0 + 6.0 * (u + v) / 2.0 + 0.8 * (6.0 * u).sin();
    let spot = (-((u - 0.6).powi(2) + (v - 0.4).powi(2)) / 0.05).exp();
    (center, 200.0 + 800.0 * spot)
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_map.txt".to_string());
    let mut rng = NoiseRng::seeded(42);

    // X-axis: 200 → 300, step 0.5
    let x_axis: Vec<f64> = (0..=200).map(|i| 200.0 + i as f64 * 0.5).collect();

    // One column per acquisition position, row-major over the grid.
    let columns: Vec<Vec<f64>> = (0..LINES_PER_IMAGE)
        .flat_map(|line| (0..POINTS_PER_LINE).map(move |point| (line, point)))
        .map(|(line, point)| {
            let (mu, amp) = peak_at(line, point);
            x_axis
                .iter()
                .map(|&x| {
                    // Broad background band plus the moving peak.
                    gaussian(x, 270.0, 12.0, 150.0)
                        + gaussian(x, mu, 1.5, amp)
                        + rng.noise(4.0)
                })
                .collect()
        })
        .collect();

    let file = File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);
    for (row, &x) in x_axis.iter().enumerate() {
        write!(out, "{x:.1}")?;
        for col in &columns {
            write!(out, " {:.3}", col[row])?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    println!(
        "Wrote {} positions ({} x {} grid, {} points each) to {output_path}",
        columns.len(),
        LINES_PER_IMAGE,
        POINTS_PER_LINE,
        x_axis.len()
    );
    Ok(())
}
