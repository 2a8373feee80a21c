//! Check pipeline and monitoring-plugin output
//!
//! Startup runs the dependency check before validating the URL. A check then
//! runs strictly in sequence: read the running version, list the upstream
//! releases, classify, report. Any failure ends the check with an UNKNOWN
//! result.

use std::fmt;

use tracing::{debug, info, warn};

use crate::cli::CheckOptions;
use crate::config::{CheckConfig, Precision};
use crate::error::CheckError;
use crate::version::checker::{
    Classification, Drift, Status, classify, determine_current_version, select_latest_version,
};
use crate::version::number::Version;
use crate::version::probe::VersionProbe;
use crate::version::registry::{RefKind, Registry};

/// Status and message printed at the end of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    /// Builds the status line for a completed comparison
    pub fn from_classification(
        product: &str,
        current: &Version,
        latest: &Version,
        classification: Classification,
    ) -> Self {
        let shown = if classification.patch_level {
            latest.to_string()
        } else {
            latest.major_minor()
        };

        let message = match classification.drift {
            Drift::UpToDate => format!("{product} version {current} is up to date"),
            Drift::TooOld => format!("{product} version {current} is too old. Latest: {shown}"),
            Drift::TooNew => format!("{product} version {current} is too new. Latest: {shown}"),
        };

        Self::new(classification.status, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

impl From<CheckError> for CheckResult {
    fn from(err: CheckError) -> Self {
        Self::unknown(err.to_string())
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Unknown => write!(f, "{}", self.message),
            status => write!(f, "[{}] {}", status.label(), self.message),
        }
    }
}

/// Fails with the first of `commands` that cannot be found on `PATH`
pub fn ensure_dependencies(commands: &[&str]) -> Result<(), CheckError> {
    for command in commands {
        if which::which(command).is_err() {
            return Err(CheckError::MissingDependency {
                command: command.to_string(),
            });
        }
        debug!("Found required command {}", command);
    }
    Ok(())
}

/// Checks that `required_commands` exist, then validates the options
pub fn prepare(
    options: &CheckOptions,
    required_commands: &[&str],
) -> Result<CheckConfig, CheckError> {
    ensure_dependencies(required_commands)?;
    options.config()
}

/// Prepares and runs one check, touching the network only once startup succeeded
pub async fn start(
    options: &CheckOptions,
    required_commands: &[&str],
    probe: &dyn VersionProbe,
    registry: &dyn Registry,
) -> CheckResult {
    match prepare(options, required_commands) {
        Ok(config) => {
            debug!(url = %config.url, patch = config.check_patch, "starting check");
            run(&config, probe, registry).await
        }
        Err(err) => err.into(),
    }
}

/// Runs one check against the configured server
pub async fn check(
    config: &CheckConfig,
    probe: &dyn VersionProbe,
    registry: &dyn Registry,
) -> Result<CheckResult, CheckError> {
    // An unreachable server is reported the same way as a missing header
    let raw_header = probe
        .fetch_version_header(&config.url)
        .await
        .inspect_err(|e| warn!("Failed to fetch version header from {}: {}", config.url, e))
        .ok()
        .flatten()
        .unwrap_or_default();

    let current = determine_current_version(&raw_header, &config.product, &config.url)?;
    info!("Running version of {} is {}", config.url, current);

    let precision = config.precision();
    if precision == Precision::Patch && current.patch.is_none() {
        return Err(CheckError::PatchLevelMissing {
            product: config.product.clone(),
            version: current,
        });
    }

    let kind = match precision {
        Precision::Minor => RefKind::ReleaseBranches,
        Precision::Patch => RefKind::Tags,
    };
    let names = registry.list_refs(&config.repository, kind).await?;
    debug!("Listed {} {:?} from {}", names.len(), kind, config.repository);

    let latest = select_latest_version(&names, precision).ok_or_else(|| {
        CheckError::NoRemoteVersionsFound {
            product: config.product.clone(),
            current,
        }
    })?;
    info!("Latest upstream release is {}", latest);

    let classification = classify(&current, &latest, config.check_patch);
    Ok(CheckResult::from_classification(
        &config.product,
        &current,
        &latest,
        classification,
    ))
}

/// Runs one check and folds any failure into an UNKNOWN result
pub async fn run(
    config: &CheckConfig,
    probe: &dyn VersionProbe,
    registry: &dyn Registry,
) -> CheckResult {
    check(config, probe, registry)
        .await
        .unwrap_or_else(CheckResult::from)
}
