//! Dotted numeric versions and minimum-version comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SetupError};

/// A version as an ordered list of non-negative integer components.
///
/// Components are compared numerically, so `3.9.0` sorts before `3.10.1`.
/// When two versions have different lengths the shorter one is treated as if
/// it were right-padded with zeros: `3.10` equals `3.10.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Build a version from its components.
    pub fn new(components: Vec<u64>) -> Self {
        Self { components }
    }

    /// Parse a dotted version string such as `3.10.1`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MalformedVersion`] if the string is empty or any
    /// dot-separated component is not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || SetupError::MalformedVersion {
            input: input.to_string(),
        };

        let components = input
            .split('.')
            .map(|part| {
                // u64::from_str accepts a leading '+', which is not a version digit.
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                part.parse::<u64>().map_err(|_| malformed())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { components })
    }

    /// The numeric components in order (major, minor, patch, ...).
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Compare two versions component by component, padding with zeros.
    pub fn compare(&self, other: &Version) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Whether this version satisfies `minimum` (equal counts as satisfied).
    pub fn is_at_least(&self, minimum: &Version) -> bool {
        self.compare(minimum) != Ordering::Less
    }
}

impl FromStr for Version {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
