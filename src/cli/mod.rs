use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing_subscriber::EnvFilter;

use crate::application::WalletService;
use crate::domain::{parse_amount, Clock, ManualClock};
use crate::io::{ReplayResult, Replayer};

pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::{Prompt, Terminal};
pub use render::render_wallet;
pub use session::{run_session, Action};

/// Borsello - Personal Wallet
#[derive(Parser)]
#[command(name = "borsello")]
#[command(about = "A single-screen personal wallet with a date-grouped transaction history")]
#[command(version)]
pub struct Cli {
    /// Opening balance for this session (e.g., "1340.56")
    #[arg(short, long, global = true, env = "BORSELLO_BALANCE", default_value = "1340.56")]
    pub balance: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive wallet session (default)
    Session,

    /// Apply a script of deposits and withdrawals, then print the wallet
    Replay {
        /// Script file, one "deposit <amount>" or "withdraw <amount>" per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Pin every transaction to this date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,

        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    /// Install the global tracing subscriber. RUST_LOG takes precedence over --verbose.
    pub fn init_tracing(&self) {
        let default = if self.verbose { "borsello=debug" } else { "borsello=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub async fn run(self) -> Result<()> {
        let opening_balance = parse_amount(&self.balance)
            .with_context(|| format!("Invalid opening balance '{}'", self.balance))?;

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let mut service = WalletService::new(opening_balance)?;
                let mut terminal = Terminal::new(
                    tokio::io::BufReader::new(tokio::io::stdin()),
                    tokio::io::stdout(),
                );
                run_session(&mut service, &mut terminal).await?;
            }

            Commands::Replay {
                input,
                date,
                format,
            } => {
                let script = match &input {
                    Some(path) => tokio::fs::read_to_string(path)
                        .await
                        .with_context(|| format!("Cannot open '{}'", path))?,
                    None => read_script(tokio::io::stdin())
                        .await
                        .context("Cannot read script from stdin")?,
                };

                match date {
                    Some(date_str) => {
                        let clock = pinned_clock(&date_str).with_context(|| {
                            format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                        })?;
                        let service = WalletService::with_clock(opening_balance, clock)?;
                        run_replay(service, &script, &format)?;
                    }
                    None => {
                        let service = WalletService::new(opening_balance)?;
                        run_replay(service, &script, &format)?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn run_replay<C: Clock>(
    mut service: WalletService<C>,
    script: &str,
    format: &str,
) -> Result<()> {
    let result = Replayer::new(&mut service).replay(script.as_bytes())?;
    print_replay_summary(&result);

    let view = service.view();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&view)?),
        "table" => print!("{}", render_wallet(&view)),
        other => anyhow::bail!("Unknown format '{}'. Use table or json", other),
    }
    Ok(())
}

/// Read a whole replay script without blocking the runtime.
async fn read_script<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut script = String::new();
    reader.read_to_string(&mut script).await?;
    Ok(script)
}

fn print_replay_summary(result: &ReplayResult) {
    eprintln!("Replay complete");
    eprintln!("  Applied: {}", result.applied);
    eprintln!("  Skipped: {}", result.skipped);
    eprintln!("  Errors:  {}", result.errors.len());

    if !result.errors.is_empty() {
        eprintln!("\nErrors:");
        for error in result.errors.iter().take(10) {
            eprintln!("  Line {}: {}", error.line, error.error);
        }
        if result.errors.len() > 10 {
            eprintln!("  ... and {} more errors", result.errors.len() - 10);
        }
    }
}

/// A clock fixed at noon of `date_str` in the local time zone.
fn pinned_clock(date_str: &str) -> Result<ManualClock> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .context("Invalid time of day")?;
    let local = Local
        .from_local_datetime(&noon)
        .earliest()
        .with_context(|| format!("{} does not exist in the local time zone", noon))?;
    tracing::debug!(at = %local, "replay clock pinned");
    Ok(ManualClock::new(local.fixed_offset()))
}
