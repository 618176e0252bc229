//! The comma separated sample format.
//!
//! A sample array is written as decimal integers joined by single commas,
//! with nothing before the first value and nothing after the last one:
//! `0,1,-1,32767,-32768`. An empty array is an empty string.

use std::num::{IntErrorKind, NonZeroUsize};

use crate::errors::{Result, WavTextError};
use crate::quantize::saturate;

pub const DELIMITER: char = ',';
const DELIMITER_STR: &str = ",";

/// Serialize every `jump`th sample, starting with the first.
pub fn encode(samples: &[i16], jump: NonZeroUsize) -> String {
    samples
        .iter()
        .step_by(jump.get())
        .map(|sample| sample.to_string())
        .collect::<Vec<_>>()
        .join(DELIMITER_STR)
}

/// Parse text produced by `encode`.
///
/// ASCII whitespace around a value is ignored, so a file that picked up a
/// trailing newline still parses. Values outside the 16 bit range are pinned
/// to the nearest bound. Empty text is an empty array; an empty value anywhere else
/// is an error.
pub fn decode(text: &str) -> Result<Vec<i16>> {
    if trim_ascii_whitespace(text).is_empty() {
        return Ok(Vec::new());
    }
    text.split(DELIMITER)
        .enumerate()
        .map(|(index, token)| parse_sample(index, token))
        .collect()
}

fn parse_sample(index: usize, token: &str) -> Result<i16> {
    let trimmed = trim_ascii_whitespace(token);
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(saturate(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i16::MAX),
            IntErrorKind::NegOverflow => Ok(i16::MIN),
            _ => Err(WavTextError::InvalidSample {
                index,
                token: token.to_string(),
            }),
        },
    }
}

fn trim_ascii_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}
