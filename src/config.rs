use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Product name used in every status message
pub const DEFAULT_PRODUCT: &str = "Mattermost";

/// Response header carrying the running server's version
pub const DEFAULT_VERSION_HEADER: &str = "X-Version-Id";

/// Upstream repository whose branches and tags define the known releases
pub const DEFAULT_REPOSITORY: &str = "https://github.com/mattermost/mattermost.git";

/// `git ls-remote` pattern selecting release branches
pub const DEFAULT_BRANCH_PATTERN: &str = "release-*";

/// Timeout for network operations in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// External commands that must be on `PATH` before a check can run
pub const REQUIRED_COMMANDS: &[&str] = &["git"];

/// How precisely the running version is compared against upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// major.minor only, against release branches
    Minor,
    /// major.minor.patch, against tags
    Patch,
}

/// Immutable settings for a single check invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Base URL of the monitored server
    pub url: String,
    /// Compare patch levels against tags instead of release branches
    pub check_patch: bool,
    pub header: String,
    pub repository: String,
    pub branch_pattern: String,
    pub timeout: Duration,
    pub product: String,
}

impl CheckConfig {
    /// Creates a configuration for `url` with every other setting at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            check_patch: false,
            header: DEFAULT_VERSION_HEADER.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            branch_pattern: DEFAULT_BRANCH_PATTERN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            product: DEFAULT_PRODUCT.to_string(),
        }
    }

    pub fn with_patch(mut self, check_patch: bool) -> Self {
        self.check_patch = check_patch;
        self
    }

    pub fn precision(&self) -> Precision {
        if self.check_patch {
            Precision::Patch
        } else {
            Precision::Minor
        }
    }
}
