// crates/ndfield-cli/src/logging.rs

use std::io::Write;

use chrono::NaiveDateTime;
use clap::Args;
use log::LevelFilter;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Verbosity flags shared by every subcommand.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct LogArgs {
    /// Enable debug logs
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Show only errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Disable all logs
    #[arg(long = "no-logs", global = true)]
    pub no_logs: bool,
}

impl LogArgs {
    /// `--no-logs` beats `--quiet`, which beats `--debug`.
    pub fn level(&self) -> LevelFilter {
        if self.no_logs {
            LevelFilter::Off
        } else if self.quiet {
            LevelFilter::Error
        } else if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Install the stderr logger: `<timestamp> [<LEVEL>] : <message>`.
pub fn init(args: &LogArgs) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(args.level())
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] : {}",
                timestamp(chrono::Local::now().naive_local()),
                record.level(),
                record.args()
            )
        });
    builder.init();
}

fn timestamp(t: NaiveDateTime) -> String {
    t.format(TIME_FORMAT).to_string()
}
