//! Version comparison and status classification

use std::cmp::Ordering;

use crate::config::Precision;
use crate::error::CheckError;
use crate::version::number::Version;

/// Monitoring status, ordered by exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Monitoring-plugin exit code
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

/// Direction of the difference between the running and the latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    UpToDate,
    /// Running version is behind the latest release
    TooOld,
    /// Running version is ahead of the latest release
    TooNew,
}

/// Outcome of comparing the running version with the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: Status,
    pub drift: Drift,
    /// The deciding comparison was on the patch level
    pub patch_level: bool,
}

impl Classification {
    fn new(status: Status, drift: Drift, patch_level: bool) -> Self {
        Self {
            status,
            drift,
            patch_level,
        }
    }
}

/// Extracts the running version from a raw version header
pub fn determine_current_version(
    raw_header: &str,
    product: &str,
    url: &str,
) -> Result<Version, CheckError> {
    Version::extract(raw_header).ok_or_else(|| CheckError::VersionHeaderNotFound {
        product: product.to_string(),
        url: url.to_string(),
    })
}

/// Picks the highest version among branch or tag names.
///
/// Names without a trailing numeric version are skipped. With
/// `Precision::Patch` names without a patch level are skipped as well.
/// Returns `None` when nothing usable remains.
pub fn select_latest_version<S: AsRef<str>>(
    candidates: &[S],
    precision: Precision,
) -> Option<Version> {
    candidates
        .iter()
        .filter_map(|name| Version::from_ref_name(name.as_ref()))
        .filter(|v| precision == Precision::Minor || v.patch.is_some())
        .max()
}

/// Classifies the running version against the latest release.
///
/// Levels are compared in order: major, minor, then patch when `check_patch`
/// is set. The first unequal level decides. Falling behind on major or minor is
/// CRITICAL, running ahead is WARNING. Any patch difference is WARNING.
pub fn classify(current: &Version, latest: &Version, check_patch: bool) -> Classification {
    let release_line = latest
        .major
        .cmp(&current.major)
        .then(latest.minor.cmp(&current.minor));

    match release_line {
        Ordering::Greater => Classification::new(Status::Critical, Drift::TooOld, false),
        Ordering::Less => Classification::new(Status::Warning, Drift::TooNew, false),
        Ordering::Equal if !check_patch => {
            Classification::new(Status::Ok, Drift::UpToDate, false)
        }
        Ordering::Equal => match latest.patch.cmp(&current.patch) {
            Ordering::Greater => Classification::new(Status::Warning, Drift::TooOld, true),
            Ordering::Less => Classification::new(Status::Warning, Drift::TooNew, true),
            Ordering::Equal => Classification::new(Status::Ok, Drift::UpToDate, true),
        },
    }
}
