// src/domain/criteria.rs

use std::collections::HashMap;

/// Caller-supplied filters for `GET /api/properties`. Every field is optional
/// and an absent field places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum bedroom count. Always positive when set.
    pub bedrooms: Option<i64>,
    pub kind: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from decoded query parameters.
    ///
    /// Parsing never fails. A numeric parameter without a usable numeric
    /// prefix is dropped, as is a `bedrooms` value that is not positive.
    /// Empty parameters count as absent.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());

        FilterCriteria {
            min_price: get("minPrice").and_then(parse_leading_float),
            max_price: get("maxPrice").and_then(parse_leading_float),
            bedrooms: get("bedrooms")
                .and_then(parse_leading_int)
                .filter(|n| *n > 0),
            kind: get("type").map(str::to_string),
            state: get("state").map(str::to_string),
            city: get("city").map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Reads the longest decimal number at the start of `input`, ignoring
/// leading whitespace. `"450000abc"` gives 450000, `"abc"` gives `None`.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // exponent only counts when it carries at least one digit
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Reads the longest integer at the start of `input`, ignoring leading
/// whitespace. `"2.5"` gives 2 and a `0x` prefix reads hexadecimal, so
/// `"0x1f"` gives 31. Values beyond `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let unsigned = &s[sign_len..];

    // a 0x prefix switches to hexadecimal and needs at least one hex digit
    let parsed = match unsigned.as_bytes() {
        [b'0', b'x' | b'X', rest @ ..] => {
            let hex_digits = rest.iter().take_while(|b| b.is_ascii_hexdigit()).count();
            if hex_digits == 0 {
                return None;
            }
            i64::from_str_radix(&unsigned[2..2 + hex_digits], 16)
        }
        digits => {
            let digits = count_digits(digits);
            if digits == 0 {
                return None;
            }
            unsigned[..digits].parse::<i64>()
        }
    };

    Some(match parsed {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
