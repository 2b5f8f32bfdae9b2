use std::str::FromStr as _;

use anyhow::Context;
use clap::Parser;
use cli::{FeeMarketCLI, FeeMarketCommand};
use feemarket_core::types::GenesisState;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod replay;

fn main() -> anyhow::Result<()> {
    let FeeMarketCLI { log_level, command } = FeeMarketCLI::parse();

    let log_filter = EnvFilter::builder()
        .with_default_directive(
            Directive::from_str(&log_level).context("Not supported log level provided")?,
        )
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    match command {
        FeeMarketCommand::Replay {
            genesis,
            blocks,
            start_height,
        } => {
            let genesis = replay::read_genesis_file(&genesis)?;
            let replay_file = replay::read_replay_file(&blocks)?;
            for outcome in replay::replay(&genesis, &replay_file, start_height)? {
                println!("{}", serde_json::to_string(&outcome)?);
            }
        }
        FeeMarketCommand::DefaultGenesis => {
            println!(
                "{}",
                serde_json::to_string_pretty(&GenesisState::default())?
            );
        }
    }
    Ok(())
}
