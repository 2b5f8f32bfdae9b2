use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "feemarket", author, version = VERSION_STRING, about, long_about = None)]
pub struct FeeMarketCLI {
    #[arg(
        long = "log.level",
        default_value = "info",
        global = true,
        value_name = "LOG_LEVEL",
        help = "The verbosity level used for logs, e.g. info, debug, feemarket_blockchain=trace"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: FeeMarketCommand,
}

#[derive(Subcommand)]
pub enum FeeMarketCommand {
    #[clap(about = "Replay a sequence of blocks and print the fee market outcome of each one.")]
    Replay {
        #[arg(long, value_name = "GENESIS_FILE_PATH", help = "Fee market genesis JSON file")]
        genesis: PathBuf,
        #[arg(long, value_name = "BLOCKS_FILE_PATH", help = "Blocks to replay, JSON file")]
        blocks: PathBuf,
        #[arg(
            long,
            default_value_t = 1,
            value_name = "HEIGHT",
            help = "Height of the first replayed block"
        )]
        start_height: u64,
    },
    #[clap(about = "Print a genesis file holding the default fee market params.")]
    DefaultGenesis,
}
