use clap::Args;
use log::{debug, info};

use crate::io::{ndfield_file, points_table};

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input NDField path
    #[arg(short, long)]
    pub input: String,

    /// Output point table path
    #[arg(short, long)]
    pub output: String,

    /// Column names for the table header (default: x0,x1,...)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Field delimiter of the output table
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    info!("Reading NDfield {}...", args.input);
    let doc = ndfield_file::load_ndfield(&args.input)?;

    let (Some(ncomponents), Some(points)) = (doc.ncomponents(), doc.points()) else {
        anyhow::bail!("{} is a grid field; only particle clouds convert to tables", args.input);
    };

    let columns = if args.columns.is_empty() {
        (0..ncomponents).map(|i| format!("x{i}")).collect()
    } else {
        anyhow::ensure!(
            args.columns.len() == ncomponents,
            "{} column names given, file has {} components",
            args.columns.len(),
            ncomponents
        );
        args.columns.clone()
    };

    let text = points_table::render(&columns, points, args.delimiter);
    ndfield_file::write_atomic(&args.output, text.as_bytes())?;

    debug!(
        "Table saved on: {}, number of points: {}, dimensions: {}",
        args.output,
        doc.npoints().unwrap_or(0),
        ncomponents
    );
    info!("Processing completed!");
    Ok(())
}
