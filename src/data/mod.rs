/// Data layer: core types, loading, and peak extraction.
///
/// Architecture:
/// ```text
///   whitespace-delimited .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SpectralTable (loaded once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SpectralTable │  x-axis + one intensity column per position
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  peaks    │  region mask, top-3 selection → Vec<PeakResult>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  grid     │  row-major reshape for the heatmaps
///   └──────────┘
/// ```

pub mod grid;
pub mod loader;
pub mod model;
pub mod peaks;
