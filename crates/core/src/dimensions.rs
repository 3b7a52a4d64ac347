use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outer dimensions of one box, inches. Immutable once parsed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseSizeError {
    #[error("expected three dimensions in `{input}`, found {found}")]
    WrongTokenCount { input: String, found: usize },
    #[error("`{token}` is not a number")]
    NotANumber { token: String },
    #[error("dimensions must be positive, got {value}")]
    NonPositive { value: f64 },
}

/// Parse a free-form size string into box dimensions.
///
/// Accepts three numeric tokens separated by any mix of `x`, `×`, commas,
/// and whitespace, e.g. `"27.3 x 15.9 x 32.9"` or `"27.3,15.9,32.9"`.
pub fn parse_dimensions(input: &str) -> Result<BoxDimensions, ParseSizeError> {
    let tokens: Vec<&str> = input
        .split(|c: char| matches!(c, 'x' | 'X' | '×' | ',') || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != 3 {
        return Err(ParseSizeError::WrongTokenCount {
            input: input.to_owned(),
            found: tokens.len(),
        });
    }

    let mut values = [0.0f64; 3];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        let parsed: f64 = token
            .parse()
            .map_err(|_| ParseSizeError::NotANumber { token: (*token).to_owned() })?;
        // f64::from_str accepts "inf" and "NaN"; neither is a usable extent.
        if !parsed.is_finite() {
            return Err(ParseSizeError::NotANumber { token: (*token).to_owned() });
        }
        if parsed <= 0.0 {
            return Err(ParseSizeError::NonPositive { value: parsed });
        }
        *slot = parsed;
    }

    Ok(BoxDimensions { length: values[0], width: values[1], height: values[2] })
}

#[cfg(test)]
mod tests {
    use super::{parse_dimensions, BoxDimensions, ParseSizeError};

    #[test]
    fn parses_spaced_x_separators() {
        let dims = parse_dimensions("27.3 x 15.9 x 32.9").expect("valid size");
        assert_eq!(dims, BoxDimensions { length: 27.3, width: 15.9, height: 32.9 });
    }

    #[test]
    fn parses_mixed_separators() {
        let dims = parse_dimensions("10×20,30").expect("valid size");
        assert_eq!(dims, BoxDimensions { length: 10.0, width: 20.0, height: 30.0 });
    }

    #[test]
    fn parses_whitespace_only_separators() {
        let dims = parse_dimensions("  10 20\t30 ").expect("valid size");
        assert_eq!(dims, BoxDimensions { length: 10.0, width: 20.0, height: 30.0 });
    }

    #[test]
    fn rejects_wrong_token_count() {
        let error = parse_dimensions("10 x 20").expect_err("two tokens");
        assert_eq!(error, ParseSizeError::WrongTokenCount { input: "10 x 20".to_owned(), found: 2 });

        let error = parse_dimensions("1x2x3x4").expect_err("four tokens");
        assert!(matches!(error, ParseSizeError::WrongTokenCount { found: 4, .. }));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let error = parse_dimensions("10 x tall x 30").expect_err("word token");
        assert_eq!(error, ParseSizeError::NotANumber { token: "tall".to_owned() });
    }

    #[test]
    fn rejects_non_finite_tokens() {
        assert!(matches!(
            parse_dimensions("inf x 2 x 3").expect_err("inf"),
            ParseSizeError::NotANumber { .. }
        ));
        assert!(matches!(
            parse_dimensions("NaN x 2 x 3").expect_err("nan"),
            ParseSizeError::NotANumber { .. }
        ));
    }

    #[test]
    fn rejects_non_positive_values() {
        let error = parse_dimensions("10 x 0 x 30").expect_err("zero extent");
        assert_eq!(error, ParseSizeError::NonPositive { value: 0.0 });

        assert!(parse_dimensions("10 x -2 x 30").is_err());
    }
}
