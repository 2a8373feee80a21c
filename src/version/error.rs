use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git ls-remote timed out after {0} seconds")]
    Timeout(u64),

    #[error("git ls-remote exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
}
