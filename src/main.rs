//! Belongings Tracker MCP Server - Main Entry Point
//!
//! This is the main entry point for the belongings tracker MCP server.
//! The actual implementation is in the `belongings_tracker` library.

use anyhow::Result;
use belongings_tracker::inventory::ReminderSource;
use belongings_tracker::{Identity, TrackerConfig, TrackerServerHandler};
use clap::{CommandFactory, Parser, ValueEnum};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Belongings Tracker MCP Server - follow clothes between two homes and school via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the items data file (TOML)
    file: PathBuf,

    /// Optional configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Signed-in user id; only items owned by this user are shown
    #[arg(long)]
    user: Option<String>,

    /// Display name for the signed-in user
    #[arg(long, requires = "user")]
    user_name: Option<String>,

    /// Show all items marked for today regardless of the location filter
    #[arg(long)]
    today_ignores_location_filter: bool,

    /// Which items count as reminders
    #[arg(long, value_enum)]
    reminders: Option<ReminderArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReminderArg {
    /// Items with the reminder flag set
    Flag,
    /// Items currently at school
    School,
}

impl From<ReminderArg> for ReminderSource {
    fn from(arg: ReminderArg) -> Self {
        match arg {
            ReminderArg::Flag => ReminderSource::Flag,
            ReminderArg::School => ReminderSource::AtSchool,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("belongings_tracker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    }
    .with_overrides(
        args.today_ignores_location_filter,
        args.reminders.map(ReminderSource::from),
    );

    let identity = match args.user {
        Some(user_id) => {
            let name = args.user_name.unwrap_or_else(|| user_id.clone());
            Identity::user(user_id, name)
        }
        None => Identity::anonymous(),
    };

    info!(file = %args.file.display(), user = identity.display_name(), "starting server");
    let handler = TrackerServerHandler::open(&args.file, identity, config.views).await;
    let queue = handler.persistence_queue();

    serve_stdio(handler).await?;

    if let Err(e) = queue.flush().await {
        warn!(error = %e, "pending writes may not have been saved");
    }
    Ok(())
}
