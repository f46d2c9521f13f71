use crate::data::model::Region;
use crate::error::{PeakMapError, Result};

pub const DEFAULT_REGION_START: f64 = 240.0;
pub const DEFAULT_REGION_END: f64 = 254.0;
pub const DEFAULT_POINTS_PER_LINE: usize = 110;
pub const DEFAULT_LINES_PER_IMAGE: usize = 90;

/// Validated analysis parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    pub region: Region,
    /// Grid columns.
    pub points_per_line: usize,
    /// Grid rows.
    pub lines_per_image: usize,
}

/// The raw text of the four parameter fields, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamInputs {
    pub region_start: String,
    pub region_end: String,
    pub points_per_line: String,
    pub lines_per_image: String,
}

impl Default for ParamInputs {
    fn default() -> Self {
        Self {
            region_start: DEFAULT_REGION_START.to_string(),
            region_end: DEFAULT_REGION_END.to_string(),
            points_per_line: DEFAULT_POINTS_PER_LINE.to_string(),
            lines_per_image: DEFAULT_LINES_PER_IMAGE.to_string(),
        }
    }
}

impl ParamInputs {
    /// Parse every field; the first invalid one is reported.
    pub fn parse(&self) -> Result<AnalysisParams> {
        let start = parse_number("region start", &self.region_start)?;
        let end = parse_number("region end", &self.region_end)?;
        let points_per_line = parse_dimension("points per line", &self.points_per_line)?;
        let lines_per_image = parse_dimension("lines per image", &self.lines_per_image)?;
        Ok(AnalysisParams {
            region: Region::new(start, end)?,
            points_per_line,
            lines_per_image,
        })
    }

    /// The region alone, for previewing it on the plot while editing.
    pub fn region(&self) -> Option<Region> {
        let start = parse_number("region start", &self.region_start).ok()?;
        let end = parse_number("region end", &self.region_end).ok()?;
        Region::new(start, end).ok()
    }
}

fn parse_number(name: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PeakMapError::InvalidParameter {
            name,
            value: text.to_string(),
        })
}

fn parse_dimension(name: &'static str, text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| PeakMapError::InvalidParameter {
            name,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let params = ParamInputs::default().parse().unwrap();
        assert_eq!(params.region.start(), 240.0);
        assert_eq!(params.region.end(), 254.0);
        assert_eq!(params.points_per_line, 110);
        assert_eq!(params.lines_per_image, 90);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let inputs = ParamInputs {
            region_start: " 1.5 ".into(),
            region_end: "2e1".into(),
            points_per_line: " 4".into(),
            lines_per_image: "3 ".into(),
        };
        let params = inputs.parse().unwrap();
        assert_eq!(params.region.start(), 1.5);
        assert_eq!(params.region.end(), 20.0);
        assert_eq!(params.points_per_line, 4);
        assert_eq!(params.lines_per_image, 3);
    }

    #[test]
    fn test_non_numeric_region() {
        let inputs = ParamInputs {
            region_start: "abc".into(),
            ..Default::default()
        };
        assert!(matches!(
            inputs.parse(),
            Err(PeakMapError::InvalidParameter {
                name: "region start",
                ..
            })
        ));
        assert!(inputs.region().is_none());
    }

    #[test]
    fn test_dimensions_must_be_positive_integers() {
        for bad in ["1.5", "-3", "0", "", "ten"] {
            let inputs = ParamInputs {
                lines_per_image: bad.into(),
                ..Default::default()
            };
            assert!(
                matches!(
                    inputs.parse(),
                    Err(PeakMapError::InvalidParameter {
                        name: "lines per image",
                        ..
                    })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_reversed_region() {
        let inputs = ParamInputs {
            region_start: "254".into(),
            region_end: "240".into(),
            ..Default::default()
        };
        assert!(matches!(
            inputs.parse(),
            Err(PeakMapError::InvalidRegion { .. })
        ));
        assert!(inputs.region().is_none());
    }

    #[test]
    fn test_infinite_region_rejected() {
        let inputs = ParamInputs {
            region_end: "inf".into(),
            ..Default::default()
        };
        assert!(matches!(
            inputs.parse(),
            Err(PeakMapError::InvalidParameter { .. })
        ));
    }
}
