//! Command-line parsing into [`CheckOptions`] and an immutable [`CheckConfig`]

use std::ffi::OsString;
use std::time::Duration;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::config::{
    CheckConfig, DEFAULT_BRANCH_PATTERN, DEFAULT_PRODUCT, DEFAULT_REPOSITORY,
    DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION_HEADER,
};
use crate::error::CheckError;

const ABOUT: &str = "Compare a running Mattermost server's version with the upstream releases";

const LONG_ABOUT: &str = "\
Compare a running Mattermost server's version with the upstream releases.

The running version is read from the server's version response header. The
latest release is taken from the release branches of the upstream git
repository, or from its tags when --patch is given.

Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN";

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT, long_about = LONG_ABOUT, disable_version_flag = true)]
struct Args {
    #[arg(short, long, value_name = "URL", help = "Base URL of the server to check")]
    url: Option<String>,

    #[arg(short, long, help = "Also compare the patch level, using tags")]
    patch: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,

    #[arg(long, value_name = "NAME", default_value = DEFAULT_VERSION_HEADER, help = "Response header carrying the version")]
    header: String,

    #[arg(long, value_name = "URL", default_value = DEFAULT_REPOSITORY, help = "Upstream git repository")]
    repository: String,

    #[arg(long, value_name = "GLOB", default_value = DEFAULT_BRANCH_PATTERN, help = "Pattern selecting release branches")]
    branch_pattern: String,

    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, help = "Network timeout in seconds")]
    timeout: u64,
}

/// Parsed settings of a check whose URL has not been validated yet
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    pub url: Option<String>,
    pub check_patch: bool,
    pub header: String,
    pub repository: String,
    pub branch_pattern: String,
    pub timeout: Duration,
}

impl CheckOptions {
    /// Validates the URL and builds the immutable configuration
    pub fn config(&self) -> Result<CheckConfig, CheckError> {
        let Some(url) = self.url.as_deref().filter(|url| !url.trim().is_empty()) else {
            return Err(missing_url());
        };

        Ok(CheckConfig {
            header: self.header.clone(),
            repository: self.repository.clone(),
            branch_pattern: self.branch_pattern.clone(),
            timeout: self.timeout,
            ..CheckConfig::new(url).with_patch(self.check_patch)
        })
    }
}

impl Args {
    fn into_options(self) -> CheckOptions {
        CheckOptions {
            url: self.url,
            check_patch: self.patch,
            header: self.header,
            repository: self.repository,
            branch_pattern: self.branch_pattern,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// What the process should do after parsing its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Run a check
    Check { options: CheckOptions, verbose: bool },
    /// Print help text and exit successfully
    Help(String),
    /// Print version information and exit successfully
    Version(String),
}

/// Name, version, author and license of this plugin
pub fn version_text() -> String {
    format!(
        "{} {}\nAuthor: {}\nLicense: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
    )
}

fn missing_url() -> CheckError {
    CheckError::MissingArgument {
        product: DEFAULT_PRODUCT.to_string(),
    }
}

/// Parses process arguments, the first item being the program name.
///
/// The URL is not validated here; see [`CheckOptions::config`].
pub fn parse_args<I, T>(args: I) -> Result<Invocation, CheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            return Ok(Invocation::Help(err.render().to_string()));
        }
        Err(err) => {
            let argument = err
                .get(ContextKind::InvalidArg)
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| err.kind().as_str().unwrap_or("invalid input").to_string());

            // `-u` without a value
            if err.kind() == ErrorKind::InvalidValue && argument.starts_with("--url") {
                return Err(missing_url());
            }

            return Err(CheckError::UnrecognizedArgument {
                argument,
                usage: Args::command().render_usage().to_string(),
            });
        }
    };

    if args.version {
        return Ok(Invocation::Version(version_text()));
    }

    let verbose = args.verbose;
    Ok(Invocation::Check {
        options: args.into_options(),
        verbose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Invocation, CheckError> {
        parse_args(std::iter::once("check-release-version").chain(args.iter().copied()))
    }

    fn parse_config(args: &[&str]) -> Result<(CheckConfig, bool), CheckError> {
        match parse(args)? {
            Invocation::Check { options, verbose } => Ok((options.config()?, verbose)),
            other => panic!("expected a check invocation, got {other:?}"),
        }
    }

    #[test]
    fn parse_args_builds_config_from_short_flags() {
        let (config, verbose) = parse_config(&["-u", "https://chat.example.com", "-p"]).unwrap();

        assert_eq!(
            config,
            CheckConfig::new("https://chat.example.com").with_patch(true)
        );
        assert!(!verbose);
    }

    #[test]
    fn parse_args_accepts_long_flags_and_overrides() {
        let (config, verbose) = parse_config(&[
            "--url",
            "https://chat.example.com",
            "--header",
            "X-Build",
            "--repository",
            "https://git.example.com/server.git",
            "--branch-pattern",
            "stable-*",
            "--timeout",
            "5",
            "--verbose",
        ])
        .unwrap();

        assert!(verbose);
        assert!(!config.check_patch);
        assert_eq!(config.header, "X-Build");
        assert_eq!(config.repository, "https://git.example.com/server.git");
        assert_eq!(config.branch_pattern, "stable-*");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn parse_args_defers_missing_url_to_config() {
        let Invocation::Check { options, .. } = parse(&["-p"]).unwrap() else {
            panic!("expected a check invocation");
        };
        assert_eq!(options.url, None);

        let err = options.config().unwrap_err();
        assert!(matches!(err, CheckError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "URL to Mattermost server missing");
    }

    #[test]
    fn parse_args_treats_empty_url_as_missing() {
        assert!(matches!(
            parse_config(&["-u", ""]),
            Err(CheckError::MissingArgument { .. })
        ));
    }

    #[rstest]
    #[case(&["-u"])]
    #[case(&["--url"])]
    #[case(&["-p", "-u"])]
    fn parse_args_treats_url_without_value_as_missing(#[case] args: &[&str]) {
        let err = parse(args).unwrap_err();

        assert!(matches!(err, CheckError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "URL to Mattermost server missing");
    }

    #[test]
    fn parse_args_rejects_unknown_argument_with_usage() {
        let err = parse(&["-u", "https://chat.example.com", "--bogus"]).unwrap_err();

        let CheckError::UnrecognizedArgument { argument, usage } = &err else {
            panic!("expected an unrecognized argument error, got {err:?}");
        };
        assert_eq!(argument, "--bogus");
        assert!(usage.contains("Usage"));
        assert!(err.to_string().starts_with("Unknown argument: --bogus"));
    }

    #[test]
    fn parse_args_returns_help_text() {
        let Invocation::Help(text) = parse(&["--help"]).unwrap() else {
            panic!("expected help");
        };
        assert!(text.contains("--url"));
        assert!(text.contains("--patch"));
    }

    #[test]
    fn parse_args_returns_version_even_without_url() {
        let invocation = parse(&["-V"]).unwrap();

        assert_eq!(invocation, Invocation::Version(version_text()));
        assert!(version_text().contains("License: MIT"));
    }
}
