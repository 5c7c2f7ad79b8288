// crates/ndfield-cli/src/main.rs

use clap::{Parser, Subcommand};

use ndfield_cli::{cmd, logging};

#[derive(Parser)]
#[command(name = "ndfield")]
#[command(about = "NDField point cloud encoder / decoder", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub log: logging::LogArgs,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a point table into an NDField file
    Encode(cmd::encode::EncodeArgs),

    /// Decode an NDField particle cloud back into a point table
    Decode(cmd::decode::DecodeArgs),

    /// Inspect an NDField file (blocks, header fields, checksums)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
