//! Registry trait for listing release refs from a remote repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Which refs of the remote repository describe releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// Heads matching the release-branch pattern
    ReleaseBranches,
    /// Every tag
    Tags,
}

/// Trait for fetching release ref names from a remote repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Lists ref names without their `refs/heads/` or `refs/tags/` prefix
    ///
    /// # Arguments
    /// * `repository` - Remote repository URL
    /// * `kind` - Whether to list release branches or tags
    async fn list_refs(&self, repository: &str, kind: RefKind)
    -> Result<Vec<String>, RegistryError>;
}
