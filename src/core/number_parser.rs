// src/core/number_parser.rs

use num::{BigInt, BigRational, Zero};

use crate::core::error::{GcdError, Result};
use crate::core::numeric_value::NumericValue;

use GcdError::InvalidNumber;

/// Largest power of ten a decimal token may scale by, in either direction.
pub const MAX_DECIMAL_SCALE: u64 = 100_000;

/// Parses a single token as a fraction (`a/b`), an integer, or a decimal.
///
/// Decimals are converted to their exact rational value, so `2.5` becomes
/// `5/2` and `0.1` becomes `1/10`. The decimal scale (fractional digits
/// minus the exponent, or the exponent alone) may be at most
/// [`MAX_DECIMAL_SCALE`] in magnitude; longer decimals such as `0.` followed
/// by more than 100000 digits are rejected as `InvalidNumber`.
pub fn parse_number(token: &str) -> Result<NumericValue> {
    let token = token.trim();
    let invalid = || InvalidNumber(token.to_string());

    if let Some((numer, denom)) = token.split_once('/') {
        let numer = parse_integer(numer.trim()).ok_or_else(invalid)?;
        let denom = parse_integer(denom.trim()).ok_or_else(invalid)?;
        if denom.is_zero() {
            return Err(invalid());
        }
        return Ok(NumericValue::from_ratio(BigRational::new(numer, denom)));
    }

    if let Some(value) = parse_integer(token) {
        return Ok(NumericValue::Integer(value));
    }

    parse_decimal(token)
        .map(NumericValue::from_ratio)
        .ok_or_else(invalid)
}

/// Splits comma-separated input, drops empty tokens and parses the rest.
/// The first unparseable token aborts the whole parse.
pub fn parse_numbers(input: &str) -> Result<Vec<NumericValue>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_number)
        .collect()
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Strict base-10 integer: optional sign followed by ASCII digits only.
fn parse_integer(text: &str) -> Option<BigInt> {
    let (negative, digits) = split_sign(text);
    if !is_digits(digits) {
        return None;
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// `[sign] digits [. digits] [e [sign] digits]`, with at least one digit in
/// the mantissa.
fn parse_decimal(text: &str) -> Option<BigRational> {
    let (negative, body) = split_sign(text);

    let (mantissa, exponent) = match body.find(|c| c == 'e' || c == 'E') {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let whole_ok = whole.is_empty() || is_digits(whole);
    let fraction_ok = fraction.is_empty() || is_digits(fraction);
    if !whole_ok || !fraction_ok {
        return None;
    }

    let exponent: i64 = match exponent {
        Some(exp) => {
            let (exp_negative, exp_digits) = split_sign(exp);
            if !is_digits(exp_digits) {
                return None;
            }
            let value: i64 = exp_digits.parse().ok()?;
            if exp_negative { -value } else { value }
        }
        None => 0,
    };

    let digits = format!("{}{}", whole, fraction);
    let mut numer = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    if negative {
        numer = -numer;
    }

    // value = numer * 10^(exponent - fraction.len())
    let scale = exponent.checked_sub(fraction.len() as i64)?;
    let power = pow10(scale.unsigned_abs())?;
    let ratio = if scale >= 0 {
        BigRational::from_integer(numer * power)
    } else {
        BigRational::new(numer, power)
    };
    Some(ratio)
}

/// Refuses scales beyond `MAX_DECIMAL_SCALE` instead of allocating without bound.
fn pow10(exp: u64) -> Option<BigInt> {
    if exp > MAX_DECIMAL_SCALE {
        return None;
    }
    Some(num::pow(BigInt::from(10), exp as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> NumericValue {
        NumericValue::from(n)
    }

    #[test]
    fn test_parse_integer_tokens() {
        assert_eq!(parse_number("42").unwrap(), int(42));
        assert_eq!(parse_number("-17").unwrap(), int(-17));
        assert_eq!(parse_number("+8").unwrap(), int(8));
        assert_eq!(parse_number("  9 ").unwrap(), int(9));
    }

    #[test]
    fn test_parse_big_integer() {
        let text = "123456789012345678901234567890";
        let value = parse_number(text).unwrap();
        assert_eq!(value.to_string(), text);
    }

    #[test]
    fn test_parse_fraction_reduces_to_lowest_terms() {
        let value = parse_number("6/4").unwrap();
        assert_eq!(value.to_string(), "3/2");
        assert_eq!(value.normalized(), BigInt::from(3));
    }

    #[test]
    fn test_parse_fraction_with_negative_denominator() {
        assert_eq!(parse_number("3/-4").unwrap().to_string(), "-3/4");
    }

    #[test]
    fn test_parse_whole_fraction_collapses_to_integer() {
        assert_eq!(parse_number("10/5").unwrap(), int(2));
    }

    #[test]
    fn test_parse_decimal_is_exact() {
        assert_eq!(parse_number("2.5").unwrap().to_string(), "5/2");
        assert_eq!(parse_number("0.1").unwrap().to_string(), "1/10");
        assert_eq!(parse_number("-.75").unwrap().to_string(), "-3/4");
        assert_eq!(parse_number("4.0").unwrap(), int(4));
        assert_eq!(parse_number("1.5e2").unwrap(), int(150));
        assert_eq!(parse_number("25e-2").unwrap().to_string(), "1/4");
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let tokens = [
            "abc", "1/0", "1/2/3", "/3", "4/", ".", "1.2.3", "1_000", "--5", "3e", "0x10", "",
        ];
        for token in tokens {
            assert_eq!(
                parse_number(token),
                Err(InvalidNumber(token.to_string())),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_decimal_scale_limit() {
        let at_limit = format!("0.{}1", "0".repeat(MAX_DECIMAL_SCALE as usize - 1));
        assert!(parse_number(&at_limit).is_ok());

        let past_limit = format!("0.{}1", "0".repeat(MAX_DECIMAL_SCALE as usize));
        assert_eq!(parse_number(&past_limit), Err(InvalidNumber(past_limit.clone())));
        assert!(parse_number("1e100001").is_err());
    }

    #[test]
    fn test_parse_numbers_skips_empty_tokens() {
        let values = parse_numbers(" 12, ,18,24 ,").unwrap();
        assert_eq!(values, vec![int(12), int(18), int(24)]);
    }

    #[test]
    fn test_parse_numbers_fails_on_first_bad_token() {
        assert_eq!(
            parse_numbers("12, abc, 18"),
            Err(InvalidNumber("abc".to_string()))
        );
    }
}
