use crate::dimension::MAX_PIXELS;
use crate::error::UnitError;

/// Pixels per typographic point, as used for the diagram's font metrics.
const PIXELS_PER_POINT: f64 = 0.75;

/// Convert a CSS font size (`12px`, `16pt`) to whole pixels.
pub fn text_size_to_pixels(size: &str) -> Result<u32, UnitError> {
    let size = size.trim();
    let (number, scale) = if let Some(n) = size.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = size.strip_suffix("pt") {
        (n, PIXELS_PER_POINT)
    } else {
        return Err(UnitError::UnsupportedUnit(size.to_string()));
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| UnitError::MalformedSize(size.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(UnitError::MalformedSize(size.to_string()));
    }
    let pixels = value * scale;
    if pixels > f64::from(MAX_PIXELS) {
        return Err(UnitError::TooLarge(size.to_string()));
    }
    Ok(pixels as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_pass_through() {
        assert_eq!(text_size_to_pixels("12px"), Ok(12));
        assert_eq!(text_size_to_pixels("12.9px"), Ok(12));
    }

    #[test]
    fn points_are_scaled() {
        assert_eq!(text_size_to_pixels("16pt"), Ok(12));
        assert_eq!(text_size_to_pixels("8pt"), Ok(6));
    }

    #[test]
    fn unknown_unit() {
        assert_eq!(
            text_size_to_pixels("1em"),
            Err(UnitError::UnsupportedUnit("1em".into()))
        );
    }

    #[test]
    fn malformed_number() {
        assert_eq!(
            text_size_to_pixels("bigpx"),
            Err(UnitError::MalformedSize("bigpx".into()))
        );
        assert!(text_size_to_pixels("-3pt").is_err());
    }

    #[test]
    fn huge_sizes_are_rejected() {
        assert_eq!(
            text_size_to_pixels("1e12px"),
            Err(UnitError::TooLarge("1e12px".into()))
        );
        assert_eq!(text_size_to_pixels("16777216px"), Ok(MAX_PIXELS));
    }
}
