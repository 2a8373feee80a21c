//! Remote ref listing through `git ls-remote`

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::{RefKind, Registry};

const DEFAULT_PROGRAM: &str = "git";

/// Registry implementation backed by the `git` command line client
pub struct GitRegistry {
    program: String,
    branch_pattern: String,
    timeout: Duration,
}

impl GitRegistry {
    /// Creates a GitRegistry listing release branches that match `branch_pattern`
    pub fn new(branch_pattern: &str, timeout: Duration) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            branch_pattern: branch_pattern.to_string(),
            timeout,
        }
    }

    #[cfg(test)]
    fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    fn ls_remote_args<'a>(&'a self, repository: &'a str, kind: RefKind) -> Vec<&'a str> {
        match kind {
            RefKind::ReleaseBranches => {
                vec!["ls-remote", "--heads", repository, self.branch_pattern.as_str()]
            }
            RefKind::Tags => vec!["ls-remote", "--tags", "--refs", repository],
        }
    }
}

#[async_trait::async_trait]
impl Registry for GitRegistry {
    async fn list_refs(
        &self,
        repository: &str,
        kind: RefKind,
    ) -> Result<Vec<String>, RegistryError> {
        let args = self.ls_remote_args(repository, kind);
        debug!("Running {} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(&args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RegistryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| RegistryError::Timeout(self.timeout.as_secs()))?
            .map_err(|source| RegistryError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("git ls-remote failed for {}: {}", repository, stderr);
            return Err(RegistryError::CommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let refs = parse_ls_remote(&String::from_utf8_lossy(&output.stdout));
        debug!("Found {} refs in {}", refs.len(), repository);
        Ok(refs)
    }
}

/// Parses `git ls-remote` output (`<sha>\t<ref>` per line) into short ref names
fn parse_ls_remote(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .map(|(_, reference)| reference.trim())
        .filter(|reference| !reference.ends_with("^{}"))
        .map(|reference| {
            reference
                .strip_prefix("refs/heads/")
                .or_else(|| reference.strip_prefix("refs/tags/"))
                .unwrap_or(reference)
                .to_string()
        })
        .collect()
}
