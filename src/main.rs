use crate::report::SourceReport;
use crate::report_config::ReportConfig;
use clap::Parser;
use futures::future::join_all;
use log::{LevelFilter, error, warn};
use robots_tags::{RobotsSource, SourceError};
use std::process;
use std::sync::Arc;
use tokio::select;
use tokio::task::JoinHandle;

mod report;
mod report_config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// URLs or file paths to read robots directives from
    #[arg(long, value_name = "URL_OR_PATH", required = true)]
    source: Vec<String>,

    /// User agents to report on (defaults to every agent found)
    #[arg(long, value_name = "AGENT")]
    agent: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    let report_config = ReportConfig::new(args.agent.clone(), args.json);

    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            eprintln!("Received Ctrl+C, shutting down...");
            shutdown_notify.notify_waiters();
        })?;
    }

    let handles = args
        .source
        .iter()
        .cloned()
        .map(|source| {
            tokio::task::spawn(async move {
                let loaded = RobotsSource::load(&source).await;
                (source, loaded)
            })
        })
        .collect::<Vec<JoinHandle<(String, Result<RobotsSource, SourceError>)>>>();

    let results = select! {
        results = join_all(handles) => results,
        _ = shutdown_notify.notified() => {
            return Ok(());
        }
    };

    let mut reports: Vec<SourceReport> = Vec::new();
    let mut failures = 0;
    for result in results {
        match result {
            Ok((_, Ok(robots_source))) => {
                reports.push(SourceReport::new(&robots_source, &report_config));
            }
            Ok((source, Err(e))) => {
                warn!("skipping {}: {}", source, e);
                eprintln!("Error: {}", e);
                failures += 1;
            }
            Err(e) => {
                error!("source task failed: {}", e);
                failures += 1;
            }
        }
    }

    report::print_reports(&reports, &report_config)?;

    if failures > 0 {
        anyhow::bail!("{} of {} sources could not be read", failures, args.source.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
