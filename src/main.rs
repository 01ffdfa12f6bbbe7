use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use webstalker::cli::Cli;
use webstalker::{ConsoleLogger, WebsiteScanner};

/// 诊断日志写到stderr，默认只输出warn，--verbose 时输出debug
fn init_tracing(verbose: bool) {
    let level = if verbose { "webstalker=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let scanner = WebsiteScanner::new(cli.to_config()).context("failed to initialise scanner")?;
    match scanner.run(&cli.url, &ConsoleLogger).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("扫描中止：{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
