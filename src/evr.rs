//! The EVR domain type and parser
//!
//! Provides a validated triple of (epoch, version, release) parsed from an
//! `[epoch:]version[-release]` string.

use crate::compare::compare_evr;
use crate::error::ParseError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An RPM epoch-version-release triple
///
/// Immutable once parsed. The epoch defaults to 0 when absent; the release
/// defaults to the empty string. Ordering follows rpm's `labelCompare`:
/// epoch first, then version, then release, each later field consulted only
/// when the earlier ones tie.
#[derive(Debug, Clone, Serialize)]
pub struct Evr {
    epoch: u64,
    version: String,
    release: String,
}

impl Evr {
    /// Create an EVR from already-split components
    pub fn new(epoch: u64, version: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// Parse an `[epoch:]version[-release]` string
    ///
    /// The epoch is everything before the first `:`; the release is
    /// everything after the *last* `-` of the remainder.
    ///
    /// # Errors
    /// Returns `ParseError` if the string is empty, the epoch is
    /// non-numeric or negative, or the version component is empty.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let (epoch, rest) = match input.split_once(':') {
            Some((raw, rest)) => {
                let value: i64 = raw
                    .parse()
                    .map_err(|_| ParseError::InvalidEpoch(raw.to_string()))?;
                if value < 0 {
                    return Err(ParseError::NegativeEpoch(value));
                }
                (value as u64, rest)
            }
            None => (0, input),
        };

        let (version, release) = match rest.rsplit_once('-') {
            Some((version, release)) => (version, release),
            None => (rest, ""),
        };

        if version.is_empty() {
            return Err(ParseError::EmptyVersion);
        }

        Ok(Self::new(epoch, version, release))
    }

    /// The epoch value (0 when the string carried none)
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The version component
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release component (empty when the string carried none)
    #[inline]
    pub fn release(&self) -> &str {
        &self.release
    }
}

impl FromStr for Evr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.version)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

// Equality is ordering-equality: "1.05" and "1.5" are the same version to
// rpm, so they are the same Evr. No Hash impl for that reason.
impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        compare_evr(self, other) == Ordering::Equal
    }
}

impl Eq for Evr {}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_evr(self, other)
    }
}
