//! Conversions from raw parameter strings to typed values.
//!
//! Every function here is pure and total: malformed input always comes back as
//! a typed [`Error`], never as a panic.

use chrono::{DateTime, FixedOffset, ParseError, Utc};

use crate::config::MILLISECONDS_THRESHOLD;
use crate::error::{Error, NumberKind, Result};

/// Parses a boolean out of a closed set of tokens.
///
/// Accepts `1 t T true True TRUE on On ON` as true and
/// `0 f F false False FALSE off Off OFF` as false. The lookup is case
/// sensitive, so `tRuE` is not recognized.
///
/// # Errors
///
/// Returns [`Error::UnknownValue`] for any other string, the empty string
/// included.
pub fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "true" | "True" | "TRUE" | "on" | "On" | "ON" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" | "off" | "Off" | "OFF" => Ok(false),
        _ => Err(Error::UnknownValue(value.to_string())),
    }
}

/// Parses a signed 64-bit integer, honouring base prefixes.
///
/// `0x`/`0X` selects hex, `0o`/`0O` and a bare leading `0` select octal, `0b`/`0B`
/// selects binary, and anything else is decimal. A single leading `+` or `-`
/// is accepted. Underscores may separate digits, as in `1_000` or `0x_ff`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the string is not a well formed number
/// or does not fit in an `i64`.
pub fn parse_int64(value: &str) -> Result<i64> {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let magnitude =
        parse_prefixed(unsigned).ok_or_else(|| Error::invalid_number(value, NumberKind::Int))?;

    if negative && magnitude == i64::MIN.unsigned_abs() {
        return Ok(i64::MIN);
    }

    let signed =
        i64::try_from(magnitude).map_err(|_| Error::invalid_number(value, NumberKind::Int))?;
    Ok(if negative { -signed } else { signed })
}

/// Parses an unsigned 64-bit integer with the same prefix rules as
/// [`parse_int64`]. No sign is accepted, not even `+`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the string is not a well formed number
/// or does not fit in a `u64`.
pub fn parse_uint64(value: &str) -> Result<u64> {
    parse_prefixed(value).ok_or_else(|| Error::invalid_number(value, NumberKind::Uint))
}

/// Parses a double precision float.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the string is not a decimal float.
pub fn parse_float64(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::invalid_number(value, NumberKind::Float))
}

/// Parses a timestamp, guessing its encoding.
///
/// A string made entirely of a base 10 integer is read as Unix epoch time:
/// seconds when the integer is at most [`MILLISECONDS_THRESHOLD`], milliseconds
/// above it. Anything else is parsed as an RFC 3339 date-time, optionally
/// wrapped in double quotes the way JSON encodes it. The result is always UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] when neither reading applies.
///
/// # Examples
///
/// ```
/// use simple_query_core::coercion::parse_time;
///
/// let seconds = parse_time("123").unwrap();
/// assert_eq!(seconds.to_rfc3339(), "1970-01-01T00:02:03+00:00");
///
/// let millis = parse_time("252460800000").unwrap();
/// assert_eq!(millis.to_rfc3339(), "1978-01-01T00:00:00+00:00");
/// ```
pub fn parse_time(value: &str) -> Result<DateTime<Utc>> {
    if let Some(time) = value.parse::<i64>().ok().and_then(from_epoch) {
        return Ok(time);
    }

    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    parse_rfc3339(unquoted)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| Error::invalid_timestamp(value, e))
}

/// Splits a raw value on `separator`.
///
/// The result always has at least one element: splitting `""` gives `[""]`.
/// An empty separator splits between characters.
pub fn split_list(value: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        if value.is_empty() {
            return vec![String::new()];
        }
        return value.chars().map(String::from).collect();
    }

    value.split(separator).map(ToString::to_string).collect()
}

/// RFC 3339 with an upper case `T` between date and time.
fn parse_rfc3339(value: &str) -> std::result::Result<DateTime<FixedOffset>, ParseError> {
    let time = DateTime::parse_from_rfc3339(value)?;
    if value.as_bytes().get(10) == Some(&b'T') {
        return Ok(time);
    }

    // chrono also takes `t` or a space there, the literal `T` below rejects them
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%:z")
}

fn from_epoch(epoch: i64) -> Option<DateTime<Utc>> {
    if epoch > MILLISECONDS_THRESHOLD {
        let nanos = u32::try_from(epoch % 1000).ok()? * 1_000_000;
        DateTime::from_timestamp(epoch / 1000, nanos)
    } else {
        DateTime::from_timestamp(epoch, 0)
    }
}

/// Parses an unsigned magnitude, detecting the radix from its prefix.
fn parse_prefixed(value: &str) -> Option<u64> {
    let bytes = value.as_bytes();
    let (radix, digits) = match bytes {
        [] => return None,
        [b'0', prefix, _, ..] if prefix.to_ascii_lowercase() == b'b' => (2, &value[2..]),
        [b'0', prefix, _, ..] if prefix.to_ascii_lowercase() == b'o' => (8, &value[2..]),
        [b'0', prefix, _, ..] if prefix.to_ascii_lowercase() == b'x' => (16, &value[2..]),
        [b'0', ..] => (8, &value[1..]),
        _ => (10, value),
    };

    if digits.contains('_') && !underscores_ok(value) {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() {
        // Only a lone "0" gets here with nothing left to read.
        return (radix == 8).then_some(0);
    }
    if !cleaned.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    u64::from_str_radix(&cleaned, radix).ok()
}

/// Underscores must sit between digits, where a base prefix counts as a digit.
fn underscores_ok(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut start = 0;
    let mut hex = false;
    let mut last_was_underscore = false;
    let mut last_was_digit = false;

    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        start = 2;
        last_was_digit = true;
        hex = bytes[1].to_ascii_lowercase() == b'x';
    }

    for &byte in &bytes[start..] {
        if byte.is_ascii_digit() || (hex && byte.is_ascii_hexdigit()) {
            last_was_digit = true;
            last_was_underscore = false;
        } else if byte == b'_' {
            if !last_was_digit {
                return false;
            }
            last_was_digit = false;
            last_was_underscore = true;
        } else {
            if last_was_underscore {
                return false;
            }
            last_was_digit = false;
        }
    }

    !last_was_underscore
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_bool_recognized_tokens() {
        for token in ["1", "t", "T", "true", "True", "TRUE", "on", "On", "ON"] {
            assert!(parse_bool(token).unwrap(), "{token} should be true");
        }
        for token in ["0", "f", "F", "false", "False", "FALSE", "off", "Off", "OFF"] {
            assert!(!parse_bool(token).unwrap(), "{token} should be false");
        }
    }

    #[test]
    fn test_parse_bool_unknown_tokens() {
        for token in ["", "00", "10", "a", "tRuE", "yes", " true"] {
            let result = parse_bool(token);
            assert!(
                matches!(result, Err(Error::UnknownValue(ref v)) if v == token),
                "{token:?} should be unknown"
            );
        }
    }

    #[test]
    fn test_parse_int64_decimal() {
        assert_eq!(parse_int64("12").unwrap(), 12);
        assert_eq!(parse_int64("-12").unwrap(), -12);
        assert_eq!(parse_int64("+7").unwrap(), 7);
        assert_eq!(parse_int64("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_int64("-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn test_parse_int64_prefixes() {
        assert_eq!(parse_int64("0x1F").unwrap(), 31);
        assert_eq!(parse_int64("0X1f").unwrap(), 31);
        assert_eq!(parse_int64("-0x10").unwrap(), -16);
        assert_eq!(parse_int64("017").unwrap(), 15);
        assert_eq!(parse_int64("0o17").unwrap(), 15);
        assert_eq!(parse_int64("0b101").unwrap(), 5);
        assert_eq!(parse_int64("0").unwrap(), 0);
        assert_eq!(parse_int64("0x_ff").unwrap(), 255);
    }

    #[test]
    fn test_parse_int64_underscores() {
        assert_eq!(parse_int64("1_000").unwrap(), 1000);
        assert_eq!(parse_int64("-1_000").unwrap(), -1000);
        assert_eq!(parse_int64("0_17").unwrap(), 15);
        assert_eq!(parse_int64("0b1_01").unwrap(), 5);
        assert_eq!(parse_uint64("1_000").unwrap(), 1000);
        for value in ["1__0", "_1", "1_", "-_1", "0_", "_"] {
            assert!(parse_int64(value).is_err(), "{value:?} should be rejected");
            assert!(parse_uint64(value).is_err(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_int64_invalid() {
        let invalid = [
            "", "-", "+", "--5", "0x", "08", "12a", "0x+5", "0x1__0", "0x10_",
            "9223372036854775808",
        ];
        for value in invalid {
            let result = parse_int64(value);
            assert!(
                matches!(result, Err(Error::InvalidNumber { value: ref v, kind: NumberKind::Int }) if v == value),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_uint64() {
        assert_eq!(parse_uint64("12").unwrap(), 12);
        assert_eq!(parse_uint64("0xff").unwrap(), 255);
        assert_eq!(parse_uint64("18446744073709551615").unwrap(), u64::MAX);
        assert!(matches!(
            parse_uint64("+12"),
            Err(Error::InvalidNumber { kind: NumberKind::Uint, .. })
        ));
        assert!(parse_uint64("-1").is_err());
        assert!(parse_uint64("").is_err());
        assert!(parse_uint64("18446744073709551616").is_err());
    }

    #[test]
    fn test_parse_float64() {
        assert_eq!(parse_float64("12.3").unwrap(), 12.3);
        assert_eq!(parse_float64("-12.3").unwrap(), -12.3);
        assert_eq!(parse_float64("1e3").unwrap(), 1000.0);
        assert!(matches!(
            parse_float64(""),
            Err(Error::InvalidNumber { kind: NumberKind::Float, .. })
        ));
        assert!(parse_float64("1,5").is_err());
    }

    #[test]
    fn test_parse_time_epoch_seconds() {
        assert_eq!(
            parse_time("0").unwrap(),
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("1445486493").unwrap(),
            Utc.with_ymd_and_hms(2015, 10, 22, 4, 1, 33).unwrap()
        );
        assert_eq!(
            parse_time("2524608000").unwrap(),
            Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap()
        );
        // The threshold itself is still read as seconds
        assert_eq!(
            parse_time("4102444800").unwrap(),
            Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_time_epoch_milliseconds() {
        assert_eq!(
            parse_time("252460800000").unwrap(),
            Utc.with_ymd_and_hms(1978, 1, 1, 0, 0, 0).unwrap()
        );
        let with_millis = parse_time("4102444801123").unwrap();
        assert_eq!(with_millis.timestamp(), 4_102_444_801);
        assert_eq!(with_millis.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_time_rfc3339() {
        assert_eq!(
            parse_time("2016-02-03T15:04:05Z").unwrap(),
            Utc.with_ymd_and_hms(2016, 2, 3, 15, 4, 5).unwrap()
        );
        assert_eq!(
            parse_time("2016-02-03T17:04:05+02:00").unwrap(),
            Utc.with_ymd_and_hms(2016, 2, 3, 15, 4, 5).unwrap()
        );
        assert_eq!(
            parse_time("\"2016-02-03T15:04:05.5Z\"")
                .unwrap()
                .timestamp_subsec_millis(),
            500
        );
    }

    #[test]
    fn test_parse_time_invalid() {
        let invalid = [
            "1445486493A",
            "",
            "2016.02.03",
            "wrong time value",
            "2016-02-03 15:04:05Z",
            "2016-02-03t15:04:05Z",
        ];
        for value in invalid {
            let result = parse_time(value);
            assert!(
                matches!(result, Err(Error::InvalidTimestamp { value: ref v, .. }) if v == value),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_time_error_message() {
        let error = parse_time("wrong time value").unwrap_err();
        assert!(error.to_string().starts_with("Error parsing time \"wrong time value\""));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split_list("a,,c", ","), vec!["a", "", "c"]);
        assert_eq!(split_list("a|b", "|"), vec!["a", "b"]);
        assert_eq!(split_list("a::b", "::"), vec!["a", "b"]);
        assert_eq!(split_list("abc", ";"), vec!["abc"]);
    }

    #[test]
    fn test_split_list_never_empty() {
        assert_eq!(split_list("", ","), vec![""]);
        assert_eq!(split_list("", ""), vec![""]);
        assert_eq!(split_list("ab", ""), vec!["a", "b"]);
    }
}
