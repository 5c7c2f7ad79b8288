// crates/ndfield-core/src/format/tag.rs

use crate::error::{NdFieldError, Result};
use crate::format::block;

pub const TAG: &str = "NDFIELD";
pub const TAG_SIZE: usize = 16;

fn tag_bytes() -> [u8; TAG_SIZE] {
    let mut b = [0u8; TAG_SIZE];
    b[..TAG.len()].copy_from_slice(TAG.as_bytes());
    b
}

/// Append the framed tag block.
pub fn encode(out: &mut Vec<u8>) {
    block::encode(&tag_bytes(), out);
}

/// Check a tag block payload. The tag carries no value beyond its presence.
pub fn decode(payload: &[u8]) -> Result<()> {
    let trimmed = trim_nuls(payload);
    if payload.len() != TAG_SIZE || trimmed != TAG.as_bytes() {
        return Err(NdFieldError::UnrecognizedFormat(
            String::from_utf8_lossy(trimmed).into_owned(),
        ));
    }
    Ok(())
}

fn trim_nuls(b: &[u8]) -> &[u8] {
    let end = b.iter().rposition(|&c| c != 0).map_or(0, |p| p + 1);
    &b[..end]
}
