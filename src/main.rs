use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use check_release_version::cli::{self, CheckOptions, Invocation};
use check_release_version::config::REQUIRED_COMMANDS;
use check_release_version::plugin::{self, CheckResult};
use check_release_version::version::probe::HttpProbe;
use check_release_version::version::registries::GitRegistry;

fn main() -> ExitCode {
    let (options, verbose) = match cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Check { options, verbose }) => (options, verbose),
        Ok(Invocation::Help(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version(text)) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(err) => return report(err.into()),
    };

    init_logging(verbose);

    let result = run(&options).unwrap_or_else(|err| {
        tracing::error!(error = ?err, "check could not be set up");
        CheckResult::unknown(format!("{err:#}"))
    });
    report(result)
}

/// Logs go to stderr so that stdout carries only the status line
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &CheckOptions) -> Result<CheckResult> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let probe = HttpProbe::new(&options.header, options.timeout)
            .context("Failed to create HTTP client")?;
        let registry = GitRegistry::new(&options.branch_pattern, options.timeout);
        Ok::<_, anyhow::Error>(
            plugin::start(options, REQUIRED_COMMANDS, &probe, &registry).await,
        )
    })
}

fn report(result: CheckResult) -> ExitCode {
    println!("{result}");
    ExitCode::from(result.exit_code())
}
