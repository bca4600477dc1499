//! # JSON Value Encoder
//!
//! Turns one attribute value, one id or one weight into JSON literal text.
//!
//! String escaping and shortest round-trip number formatting are delegated
//! to `serde_json`: `"`, `\` and control characters are escaped, all other
//! Unicode passes through. Non-finite floats are rejected here because
//! `serde_json` would otherwise write them as `null`.

use crate::AttributeValue;
use thiserror::Error;

/// Failure to encode a single literal.
///
/// Carries no component context; the assembler adds that when lifting it
/// into an `ExportError`.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("non-finite number {0}")]
    NonFinite(f64),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Encode text as a quoted, escaped JSON string.
pub fn encode_string(text: &str) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(text)?)
}

/// Encode an attribute value as its JSON literal.
pub fn encode_value(value: &AttributeValue) -> Result<String, EncodeError> {
    if let Some(number) = value.non_finite() {
        return Err(EncodeError::NonFinite(number));
    }
    let literal = serde_json::to_string(value)?;
    match value {
        AttributeValue::Float(_) | AttributeValue::Double(_) => Ok(with_fraction(literal)),
        _ => Ok(literal),
    }
}

/// Give exponent-form floats a fractional mantissa: `1e+20` becomes `1.0e+20`.
fn with_fraction(mut literal: String) -> String {
    if let Some(exponent) = literal.find(['e', 'E']) {
        if !literal[..exponent].contains('.') {
            literal.insert_str(exponent, ".0");
        }
    }
    literal
}

/// Encode a structural edge weight as a floating-point literal.
pub fn encode_weight(weight: f64) -> Result<String, EncodeError> {
    encode_value(&AttributeValue::Double(weight))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(encode_string("yellow").unwrap(), r#""yellow""#);
        assert_eq!(encode_string(r#"say "hi""#).unwrap(), r#""say \"hi\"""#);
        assert_eq!(encode_string(r"a\b").unwrap(), r#""a\\b""#);
        assert_eq!(encode_string("l1\nl2\t").unwrap(), r#""l1\nl2\t""#);
        assert_eq!(encode_string("\u{1}").unwrap(), r#""\u0001""#);
    }

    #[test]
    fn unicode_passes_through() {
        assert_eq!(encode_string("grüße/ü€").unwrap(), "\"grüße/ü€\"");
    }

    #[test]
    fn scalars_use_bare_literals() {
        assert_eq!(encode_value(&AttributeValue::Boolean(true)).unwrap(), "true");
        assert_eq!(encode_value(&AttributeValue::Boolean(false)).unwrap(), "false");
        assert_eq!(encode_value(&AttributeValue::Int(3)).unwrap(), "3");
        assert_eq!(encode_value(&AttributeValue::Int(i32::MIN)).unwrap(), "-2147483648");
        assert_eq!(encode_value(&AttributeValue::Long(3)).unwrap(), "3");
        assert_eq!(
            encode_value(&AttributeValue::Long(i64::MAX)).unwrap(),
            "9223372036854775807"
        );
    }

    #[test]
    fn floats_keep_a_fractional_part() {
        assert_eq!(encode_value(&AttributeValue::Double(3.4)).unwrap(), "3.4");
        assert_eq!(encode_value(&AttributeValue::Float(3.4)).unwrap(), "3.4");
        assert_eq!(encode_value(&AttributeValue::Double(100.0)).unwrap(), "100.0");
        assert_eq!(encode_weight(1.0).unwrap(), "1.0");
    }

    #[test]
    fn exponent_form_keeps_a_fractional_mantissa() {
        assert_eq!(encode_value(&AttributeValue::Double(1e20)).unwrap(), "1.0e+20");
        assert_eq!(encode_value(&AttributeValue::Double(1e16)).unwrap(), "1.0e+16");
        assert_eq!(encode_value(&AttributeValue::Double(1e-7)).unwrap(), "1.0e-7");
        assert_eq!(encode_value(&AttributeValue::Double(1.5e300)).unwrap(), "1.5e+300");
        assert_eq!(encode_weight(-2e-10).unwrap(), "-2.0e-10");

        let literal = encode_value(&AttributeValue::Double(1e20)).unwrap();
        let parsed: f64 = serde_json::from_str(&literal).unwrap();
        assert_eq!(parsed, 1e20);
    }

    #[test]
    fn custom_values_are_quoted() {
        let value = AttributeValue::Custom("x\"y".to_string());
        assert_eq!(encode_value(&value).unwrap(), r#""x\"y""#);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for value in [
            AttributeValue::Double(f64::NAN),
            AttributeValue::Double(f64::INFINITY),
            AttributeValue::Double(f64::NEG_INFINITY),
            AttributeValue::Float(f32::NAN),
        ] {
            assert!(matches!(
                encode_value(&value),
                Err(EncodeError::NonFinite(_))
            ));
        }
        assert!(matches!(
            encode_weight(f64::INFINITY),
            Err(EncodeError::NonFinite(_))
        ));
    }
}
