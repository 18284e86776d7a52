// Version Domain Model

use crate::constants::{DIGIT_PATTERN, VERSION_PATTERN};
use crate::domain::Component;
use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(VERSION_PATTERN).expect("Invalid version regex pattern"));

static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DIGIT_PATTERN).expect("Invalid digit regex pattern"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit
///
/// Nd characters come in contiguous runs of ten, each starting at zero, and
/// some runs sit back to back (U+1D7CE..U+1D7FF). The value is the distance
/// from the start of the contiguous block, modulo ten.
fn decimal_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(u64::from(d));
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some(u64::from((c as u32 - start) % 10))
}

/// Convert a matched digit group, checking for `u64` overflow
fn parse_digits(digits: &str) -> std::result::Result<u64, &'static str> {
    digits.chars().try_fold(0u64, |acc, c| {
        let d = decimal_value(c).ok_or("not a decimal digit")?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or("number too large to fit in u64")
    })
}

/// A `MAJOR.MINOR.PATCH` triple.
///
/// Values are immutable once parsed; [`Version::bump`] returns a new one.
/// Ordering is lexicographic over (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `[v|V]MAJOR.MINOR.PATCH`
    ///
    /// The whole string must match: surrounding whitespace or any other
    /// extra character is rejected. Digit groups may use any Unicode decimal
    /// digits. A group that does not fit in a `u64` is rejected the same way.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = VERSION_REGEX
            .captures(input)
            .ok_or_else(|| VersionError::invalid(input, "does not match MAJOR.MINOR.PATCH"))?;

        let group = |idx: usize, name: &str| -> Result<u64> {
            parse_digits(&caps[idx])
                .map_err(|e| VersionError::invalid(input, format!("{} component: {}", name, e)))
        };

        Ok(Self {
            major: group(1, "major")?,
            minor: group(2, "minor")?,
            patch: group(3, "patch")?,
        })
    }

    /// Produce the next version for the selected component
    ///
    /// - Major: `(M+1).0.0`
    /// - Minor: `M.(m+1).0`
    /// - Patch: `M.m.(p+1)`
    ///
    /// A component already at `u64::MAX` has no successor and yields
    /// `InvalidVersion`.
    pub fn bump(self, component: Component) -> Result<Self> {
        let overflow = || VersionError::invalid(self.to_string(), format!("{} overflow", component));

        match component {
            Component::Major => Ok(Self::new(
                self.major.checked_add(1).ok_or_else(overflow)?,
                0,
                0,
            )),
            Component::Minor => Ok(Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            )),
            Component::Patch => Ok(Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            )),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
