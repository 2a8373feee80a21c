//! Probe and registry test doubles

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use check_release_version::version::error::{ProbeError, RegistryError};
use check_release_version::version::probe::VersionProbe;
use check_release_version::version::registry::{RefKind, Registry};

/// Probe answering every request with the same header value
pub struct FixedProbe {
    header: Option<String>,
    calls: AtomicUsize,
}

impl FixedProbe {
    pub fn new(header: &str) -> Self {
        Self {
            header: Some(header.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_header() -> Self {
        Self {
            header: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionProbe for FixedProbe {
    async fn fetch_version_header(&self, _url: &str) -> Result<Option<String>, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.header.clone())
    }
}

/// Mock registry for testing
pub struct MockRegistry {
    branches: Vec<String>,
    tags: Vec<String>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            tags: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_branches(mut self, branches: Vec<&str>) -> Self {
        self.branches = branches.into_iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn list_refs(
        &self,
        _repository: &str,
        kind: RefKind,
    ) -> Result<Vec<String>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match kind {
            RefKind::ReleaseBranches => Ok(self.branches.clone()),
            RefKind::Tags => Ok(self.tags.clone()),
        }
    }
}
