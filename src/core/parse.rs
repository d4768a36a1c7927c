use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{
    error::{Result, SizeError},
    size::SizeValue,
    unit::Unit,
};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

const RATE_SUFFIX: &str = "/S";

impl SizeValue {
    /// Best-effort parse of strings such as `10 GB/s`, `5MB` or `1024B`.
    ///
    /// The magnitude is the first run of digits, so `5.5MB` reads as `5 MB`.
    /// The unit is the longest unit name found anywhere in the text.
    /// A trailing `/s` rate marker is dropped.
    pub fn parse(text: &str) -> Result<SizeValue> {
        let text = text.to_uppercase().replace(RATE_SUFFIX, "");

        let digits = DIGITS
            .find(&text)
            .ok_or_else(|| SizeError::Parse("no valid number found".to_string()))?;
        let magnitude: f64 = digits
            .as_str()
            .parse()
            .map_err(|err| SizeError::Parse(format!("invalid number '{}': {err}", digits.as_str())))?;
        if !magnitude.is_finite() {
            return Err(SizeError::Parse(format!(
                "number out of range: {}",
                digits.as_str()
            )));
        }

        let (unit, name) = Unit::BY_NAME_LONGEST_FIRST
            .into_iter()
            .find(|(_, name)| text.contains(name))
            .ok_or_else(|| SizeError::Parse("unit could not be determined".to_string()))?;
        log::trace!("Parsed '{text}' as {magnitude} with unit token {name}");

        SizeValue::new(magnitude, unit)
    }

    /// Like [`SizeValue::parse`], but discards the reason for failure.
    pub fn try_parse(text: &str) -> Option<SizeValue> {
        Self::parse(text).ok()
    }
}

impl FromStr for SizeValue {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
