use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solinfor")]
#[command(about = "Dose compliance and route permission checks for Solinfor data")]
pub struct Args {
    /// Log filter directive (e.g. "info", "dose_guards=debug")
    #[arg(long, env = "SOLINFOR_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "SOLINFOR_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Print the Prometheus text exposition after the command
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate every activity in a snapshot and list the rows
    Evaluate(EvaluateArgs),
    /// Resolve a navigation path for a session
    Navigate {
        #[arg(long)]
        path: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Show the navigation menu a session would see
    Menu {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Check rule sets the way the settings editor does before saving
    CheckRules {
        /// JSON array of activity rule sets
        #[arg(long)]
        rules: PathBuf,
    },
}

#[derive(ClapArgs, Debug)]
pub struct EvaluateArgs {
    /// JSON snapshot with activity_types, fields, activities, movements, rules
    #[arg(long)]
    pub snapshot: PathBuf,

    #[arg(long)]
    pub activity_type: Option<u64>,

    #[arg(long)]
    pub field: Option<u64>,

    /// Print the listing as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug)]
pub struct SessionArgs {
    /// Validated session or bare user JSON; omitted means signed out
    #[arg(long, env = "SOLINFOR_SESSION")]
    pub session: Option<PathBuf>,
}
