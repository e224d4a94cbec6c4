mod commands;
mod config;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use config::{Args, Command};
use prometheus_bridge::ComplianceMetrics;
use route_guards::RoutePaths;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn run(args: &Args, metrics: &ComplianceMetrics) -> Result<String> {
    let paths = RoutePaths::from_env();
    debug!(?paths, "route paths");
    match &args.command {
        Command::Evaluate(eval) => commands::evaluate(eval, metrics),
        Command::Navigate { path, session } => {
            commands::navigate(path, session.session.as_deref(), &paths, metrics)
        }
        Command::Menu { session } => commands::menu(session.session.as_deref(), &paths),
        Command::CheckRules { rules } => commands::check_rules(rules),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let metrics = ComplianceMetrics::new()?;
    let output = run(&args, &metrics)?;
    println!("{output}");

    if args.metrics {
        print!("{}", metrics.encode()?);
    }
    Ok(())
}
