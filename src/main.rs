//! Roshambo Binary
//!
//! Plays rock-paper-scissors (or the lizard-spock extension)
//! against the computer until you decline a rematch.

use clap::Parser;
use roshambo::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rule variant to play, skipping the mode menu
    #[arg(short, long, value_enum)]
    mode: Option<Variant>,
    /// Points needed to win, skipping the target prompt
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(TARGET_MIN as i64..=TARGET_MAX as i64))]
    target: Option<Score>,
    /// Seed the computer's choices for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    bye();
    let session = Session::default()
        .with_variant(args.mode)
        .with_target(args.target)
        .with_seed(args.seed);
    tokio::task::spawn_blocking(move || session.run(&mut Terminal::default())).await??;
    Ok(())
}
