//! folio - search the portfolio content from a terminal.
//!
//! Wraps the folio-core library: ranked and grouped search, project lookup,
//! the project catalog filter, and the skill taxonomy. Results print as text
//! or, with `--json`, as the same JSON shapes the site consumes.

mod commands;
mod render;
mod wrapper;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folio_core::config::AppConfig;
use folio_core::Portfolio;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::Command;

#[derive(Parser, Debug)]
#[command(name = AppConfig::APP_NAME)]
#[command(about = "Search portfolio projects, skills, experience and education")]
#[command(version)]
pub struct Args {
    /// JSON content file to use instead of the embedded portfolio
    #[arg(long, global = true, env = AppConfig::CONTENT_ENV_VAR)]
    content: Option<PathBuf>,

    /// Print JSON instead of text; logs on stderr become JSON lines too
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if args.json {
                println!("{}", wrapper::wrap_error(&e));
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Build the log filter: valid `RUST_LOG` directives win over `--debug`.
fn log_filter(debug: bool, env_directives: Option<&str>) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

fn init_logging(args: &Args) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(args.debug, env_directives.as_deref());

    // Logs go to stderr so JSON on stdout stays parseable
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if args.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let portfolio = Portfolio::builder()
        .maybe_content_file(args.content.clone())
        .build()?;
    debug!(
        "Portfolio loaded with {} searchable entities",
        portfolio.store().entity_count()
    );

    let output = commands::execute(&portfolio, &args.command)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else {
        print!("{}", output.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn test_log_filter_defaults() {
        assert_eq!(directives(log_filter(false, None)), "info");
        assert_eq!(directives(log_filter(true, None)), "debug");
        assert_eq!(directives(log_filter(true, Some("  "))), "debug");
    }

    #[test]
    fn test_log_filter_prefers_env_directives() {
        let filter = log_filter(true, Some("folio_core=trace"));
        assert_eq!(directives(filter), "folio_core=trace");
    }

    #[test]
    fn test_log_filter_ignores_invalid_env_directives() {
        let filter = log_filter(false, Some("folio_core=notalevel"));
        assert_eq!(directives(filter), "info");
    }

    #[test]
    fn test_args_use_app_name() {
        use clap::CommandFactory;
        assert_eq!(Args::command().get_name(), AppConfig::APP_NAME);
    }
}
