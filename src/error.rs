use thiserror::Error;

use crate::version::error::RegistryError;
use crate::version::number::Version;

/// Every reason a check ends without a verdict. All of them report UNKNOWN.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("URL to {product} server missing")]
    MissingArgument { product: String },

    #[error("Unknown argument: {argument}\n{usage}")]
    UnrecognizedArgument { argument: String, usage: String },

    #[error("Could not determine {product} version from {url}")]
    VersionHeaderNotFound { product: String, url: String },

    #[error("{product} version {version} does not include a patch level")]
    PatchLevelMissing { product: String, version: Version },

    #[error("No remote versions found for {product} version {current}")]
    NoRemoteVersionsFound { product: String, current: Version },

    #[error("Required command not found: {command}")]
    MissingDependency { command: String },

    #[error("Failed to list remote versions: {0}")]
    RemoteListingFailed(#[from] RegistryError),
}
