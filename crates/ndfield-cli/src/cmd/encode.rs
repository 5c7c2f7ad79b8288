use anyhow::Context;
use clap::Args;
use log::{debug, info, warn};
use ndfield_core::format::header::COMMENT_SIZE;
use ndfield_core::{checksum, NdFieldDocument};

use crate::io::{ndfield_file, points_table};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input point table (delimited text, header row of column names)
    #[arg(short, long)]
    pub input: String,

    /// Output NDField path
    #[arg(short, long)]
    pub output: String,

    /// Coordinate columns, in order. Every named column must exist.
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["umap_0", "umap_1", "umap_2"]
    )]
    pub columns: Vec<String>,

    /// Header comment (ASCII, truncated to 80 bytes)
    #[arg(long, default_value = "Rust NDfield")]
    pub comment: String,

    /// Field delimiter of the input table
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    info!("Parsing the point table...");
    let table = points_table::read_table(&args.input, args.delimiter)?;
    let points = table
        .select(&args.columns)
        .with_context(|| format!("select columns from {}", args.input))?;
    anyhow::ensure!(!points.is_empty(), "no points in {}", args.input);

    if args.comment.len() > COMMENT_SIZE {
        warn!("comment longer than {COMMENT_SIZE} bytes; truncating");
    }

    let doc = NdFieldDocument::from_points(&args.comment, &points)
        .with_context(|| format!("build ndfield from {}", args.input))?;
    ndfield_file::save_ndfield(&args.output, &doc)?;

    debug!(
        "NDfield saved on: {}, number of points: {}, dimensions: {}, id: {}",
        args.output,
        points.len(),
        points[0].len(),
        checksum::document_id_hex(&doc)?
    );
    info!("Processing completed!");
    Ok(())
}
