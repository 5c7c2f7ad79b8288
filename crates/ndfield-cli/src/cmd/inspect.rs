use clap::Args;
use ndfield_core::{byte_order, checksum};

use crate::io::ndfield_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input NDField path
    #[arg(short, long)]
    pub input: String,

    /// Also print the first N points (particle clouds only)
    #[arg(long, default_value_t = 0)]
    pub points: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let doc = ndfield_file::load_ndfield(&args.input)?;
    let h = doc.header();

    println!("--- ndfield-inspect ---");
    println!("file         = {}", args.input);
    println!("blocks_ok    = true (tag + header + data lengths verified)");
    println!("byte_order   = {} (host)", byte_order::HOST);
    println!("comment      = {:?}", h.comment);
    println!("ndims        = {}", h.ndims);
    println!("dims         = {:?}", h.shape());
    println!("fdims_index  = {} ({:?})", h.layout.code(), h.layout);
    println!("datatype     = {} ({})", h.datatype.code(), h.datatype.name());
    println!("x0           = {:?}", &h.x0[..h.ndims]);
    println!("delta        = {:?}", &h.delta[..h.ndims]);
    println!("values       = {}", doc.data().len());
    println!("data_crc32   = {:08x}", checksum::payload_crc32(&doc));
    println!("document_id  = {}", checksum::document_id_hex(&doc)?);

    if args.points > 0 {
        if let Some(points) = doc.points() {
            println!("--- first {} points ---", args.points);
            for (i, p) in points.take(args.points).enumerate() {
                println!("{i:>6}: {p:?}");
            }
        }
    }

    Ok(())
}
