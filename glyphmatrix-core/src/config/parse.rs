//! Simple TOML parser for board configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `board.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - [section] headers
//! - Key = value pairs (integer, string)
//! - Basic `"..."` and literal `'...'` strings, without escapes
//! - Decimal integers with an optional `+`, and `0x` hex, with `_` separators
//! - Comments (# ...), whole-line and trailing
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys and nested sections

use super::types::BoardConfig;
use crate::matrix::{ChannelOrder, Intensity};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid for the current section
    UnknownKey,
    /// Value has the wrong type or cannot be parsed
    InvalidValue,
    /// Value parsed but is outside the allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Matrix,
    Buttons,
    Display,
    Serial,
    Refresh,
}

/// Parse TOML text into a [`BoardConfig`]
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') || line.len() < 2 {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "matrix" => Ok(Section::Matrix),
        "buttons" => Ok(Section::Buttons),
        "display" => Ok(Section::Display),
        "serial" => Ok(Section::Serial),
        "refresh" => Ok(Section::Refresh),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut BoardConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Matrix, "red") => config.matrix.color.r = parse_ranged(value, 0, 255)? as u8,
        (Section::Matrix, "green") => config.matrix.color.g = parse_ranged(value, 0, 255)? as u8,
        (Section::Matrix, "blue") => config.matrix.color.b = parse_ranged(value, 0, 255)? as u8,
        (Section::Matrix, "intensity_percent") => {
            let percent = parse_ranged(value, 0, 100)? as u8;
            config.matrix.intensity = Intensity::from_percent(percent);
        }
        (Section::Matrix, "channel_order") => {
            let name = parse_string(value)?;
            config.matrix.channel_order =
                ChannelOrder::from_name(name).ok_or(ParseError::InvalidValue)?;
        }

        (Section::Buttons, "debounce_us") => config.buttons.debounce_us = parse_int(value)?,

        (Section::Display, "address") => {
            // 7-bit address, excluding the reserved ranges
            config.display.address = parse_ranged(value, 0x08, 0x77)? as u8;
        }
        (Section::Display, "i2c_frequency_hz") => {
            config.display.i2c_frequency_hz = parse_ranged(value, 1, 1_000_000)? as u32;
        }

        (Section::Serial, "baudrate") => {
            config.serial.baudrate = parse_ranged(value, 1, 4_000_000)? as u32;
        }
        (Section::Serial, "poll_interval_ms") => {
            config.serial.poll_interval_ms = parse_ranged(value, 1, u32::MAX as u64)? as u32;
        }

        (Section::Refresh, "period_ms") => {
            config.refresh.period_ms = parse_ranged(value, 1, u32::MAX as u64)? as u32;
        }

        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing comment, ignoring `#` inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in line.char_indices() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            // Escapes and embedded quotes are outside the subset
            if inner.contains(quote) || (quote == '"' && inner.contains('\\')) {
                return Err(ParseError::InvalidValue);
            }
            return Ok(inner);
        }
    }
    Err(ParseError::InvalidValue)
}

/// Parse a non-negative integer, decimal (optionally `+`-signed) or `0x` hex
fn parse_int(value: &str) -> Result<u64, ParseError> {
    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value.strip_prefix('+').unwrap_or(value), 10),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(ParseError::InvalidValue);
    }

    let mut result: u64 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(radix as u64)
            .and_then(|r| r.checked_add(digit as u64))
            .ok_or(ParseError::OutOfRange)?;
    }
    Ok(result)
}

/// Parse an integer and check it against an inclusive range
fn parse_ranged(value: &str, min: u64, max: u64) -> Result<u64, ParseError> {
    let n = parse_int(value)?;
    if n < min || n > max {
        return Err(ParseError::OutOfRange);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Rgb;

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), BoardConfig::default());
        assert_eq!(parse_config("# nothing here\n\n").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("200000").unwrap(), 200_000);
        assert_eq!(parse_int("200_000").unwrap(), 200_000);
        assert_eq!(parse_int("0x3C").unwrap(), 60);
        assert_eq!(parse_int("-1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("0x"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("_1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("99999999999999999999999"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_parse_int_plus_sign() {
        assert_eq!(parse_int("+10").unwrap(), 10);
        assert_eq!(parse_int("+1_000").unwrap(), 1000);
        assert_eq!(parse_int("+"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("++1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("+0x10"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("red = 10 # comment"), "red = 10 ");
        assert_eq!(strip_comment("name = \"a#b\""), "name = \"a#b\"");
        assert_eq!(strip_comment("name = 'a#b' # c"), "name = 'a#b' ");
    }

    #[test]
    fn test_literal_string_value() {
        let config = parse_config("[matrix]\nchannel_order = 'rgb'\n").unwrap();
        assert_eq!(config.matrix.channel_order, ChannelOrder::Rgb);
        assert_eq!(parse_string("'grb'").unwrap(), "grb");
        assert_eq!(parse_string("\"grb\"").unwrap(), "grb");
        assert_eq!(parse_string("'grb\""), Err(ParseError::InvalidValue));
        assert_eq!(parse_string("\"g\\u0072b\""), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_signed_value_in_section() {
        let config = parse_config("[matrix]\nred = +10\n").unwrap();
        assert_eq!(config.matrix.color.r, 10);
    }

    #[test]
    fn test_inline_table_rejected() {
        assert_eq!(
            parse_config("matrix = { red = 10 }"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[matrix]\nred = { value = 10 }"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_full_config() {
        let input = r#"
# Reference board
[matrix]
red = 255
green = 16
blue = 0
intensity_percent = 25
channel_order = "rgb"

[buttons]
debounce_us = 150_000

[display]
address = 0x3D
i2c_frequency_hz = 100000

[serial]
baudrate = 9600
poll_interval_ms = 100   # faster polling

[refresh]
period_ms = 250
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.matrix.color, Rgb::new(255, 16, 0));
        assert_eq!(config.matrix.intensity.percent(), 25);
        assert_eq!(config.matrix.channel_order, ChannelOrder::Rgb);
        assert_eq!(config.buttons.debounce_us, 150_000);
        assert_eq!(config.display.address, 0x3D);
        assert_eq!(config.display.i2c_frequency_hz, 100_000);
        assert_eq!(config.serial.baudrate, 9600);
        assert_eq!(config.serial.poll_interval_ms, 100);
        assert_eq!(config.refresh.period_ms, 250);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = parse_config("[matrix]\nintensity_percent = 50\n").unwrap();
        assert_eq!(config.matrix.color, Rgb::new(191, 0, 191));
        assert_eq!(config.matrix.intensity.percent(), 50);
        assert_eq!(config.refresh.period_ms, 1000);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_config("[leds]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[matrix"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("red = 1"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[matrix]\nwhite = 1"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[matrix]\nred = 256"), Err(ParseError::OutOfRange));
        assert_eq!(
            parse_config("[matrix]\nintensity_percent = 101"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[matrix]\nchannel_order = \"bgr\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[matrix]\nchannel_order = grb"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[refresh]\nperiod_ms = 0"), Err(ParseError::OutOfRange));
        assert_eq!(parse_config("[display]\naddress = 0x80"), Err(ParseError::OutOfRange));
        assert_eq!(parse_config("[serial]\nbaudrate"), Err(ParseError::InvalidValue));
    }
}
