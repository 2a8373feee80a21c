//! Numeric release versions and their extraction from free-form text

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// One or more dot-separated digit groups, e.g. `5.12.3`
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("version pattern is valid"));

/// A version anchored at the end of a ref name: `release-5.13`, `v5.13.3`, `5.13.3`
static TRAILING_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\d.])(\d+(?:\.\d+)+)$").expect("ref pattern is valid"));

/// A three-part numeric version whose patch level may be absent.
///
/// Ordering compares major, minor and patch numerically in that order. An
/// absent patch sorts before any present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: Option<u64>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: Option<u64>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a dot-separated numeric string.
    ///
    /// Only the first three components are read; anything after them (build
    /// numbers, hashes) is ignored. Returns `None` unless major and minor are
    /// present and numeric.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(part) => Some(part.parse().ok()?),
            None => None,
        };
        Some(Self::new(major, minor, patch))
    }

    /// Finds the first parseable numeric version anywhere in `text`
    pub fn extract(text: &str) -> Option<Self> {
        VERSION_RE
            .find_iter(text)
            .find_map(|m| Self::parse(m.as_str()))
    }

    /// Reads the version that ends a branch or tag name.
    ///
    /// Names with a suffix after the version (`v5.13.0-rc1`) are rejected.
    pub fn from_ref_name(name: &str) -> Option<Self> {
        TRAILING_VERSION_RE
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Self::parse(m.as_str()))
    }

    /// Formats only `major.minor`
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
