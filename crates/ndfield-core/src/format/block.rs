// crates/ndfield-core/src/format/block.rs

use crate::byte_order::{get_u32, put_u32};
use crate::error::{NdFieldError, Result};
use crate::format::BlockKind;

/// Width of each of the two length fields that frame a block.
pub const LEN_FIELD: usize = 4;

/// Largest payload the downstream reader can address (its lengths are C `int`).
pub const MAX_PAYLOAD: usize = i32::MAX as usize;

/// Frame layout (host-native byte order):
/// len:u32
/// payload[len]
/// len:u32            (must equal the leading len)
///
/// Callers keep `payload.len() <= MAX_PAYLOAD`; header validation enforces
/// this for data blocks, tag and header payloads are fixed and small.
pub fn encode(payload: &[u8], out: &mut Vec<u8>) {
    debug_assert!(payload.len() <= MAX_PAYLOAD);
    let len = payload.len() as u32;
    out.reserve(payload.len() + 2 * LEN_FIELD);
    put_u32(out, len);
    out.extend_from_slice(payload);
    put_u32(out, len);
}

pub fn encode_to_vec(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 2 * LEN_FIELD);
    encode(payload, &mut out);
    out
}

/// Read one block starting at `cursor`. Returns the payload and the cursor
/// just past the trailing length.
pub fn decode(stream: &[u8], cursor: usize, kind: BlockKind) -> Result<(&[u8], usize)> {
    let available = stream.len().saturating_sub(cursor);
    if available < LEN_FIELD {
        return Err(NdFieldError::TruncatedInput {
            block: kind,
            needed: LEN_FIELD,
            available,
        });
    }

    let leading = get_u32(&stream[cursor..cursor + LEN_FIELD]);
    let needed = (leading as usize).saturating_add(2 * LEN_FIELD);
    if available < needed {
        return Err(NdFieldError::TruncatedInput {
            block: kind,
            needed,
            available,
        });
    }

    let start = cursor + LEN_FIELD;
    let end = start + leading as usize;
    let trailing = get_u32(&stream[end..end + LEN_FIELD]);
    if trailing != leading {
        return Err(NdFieldError::CorruptBlock {
            block: kind,
            leading,
            trailing,
        });
    }

    Ok((&stream[start..end], cursor + needed))
}

/// Sequential reader over a stream of blocks.
pub struct BlockReader<'a> {
    b: &'a [u8],
    i: usize,
}

impl<'a> BlockReader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, i: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.b.len() - self.i
    }

    pub fn is_eof(&self) -> bool {
        self.i == self.b.len()
    }

    pub fn next_block(&mut self, kind: BlockKind) -> Result<&'a [u8]> {
        let (payload, next) = decode(self.b, self.i, kind)?;
        self.i = next;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_repeats_length_on_both_sides() {
        let framed = encode_to_vec(b"abc");
        assert_eq!(framed.len(), 3 + 2 * LEN_FIELD);
        assert_eq!(&framed[..4], &3u32.to_ne_bytes());
        assert_eq!(&framed[4..7], b"abc");
        assert_eq!(&framed[7..], &3u32.to_ne_bytes());
    }

    #[test]
    fn empty_payload_is_a_valid_block() {
        let framed = encode_to_vec(&[]);
        let (payload, next) = decode(&framed, 0, BlockKind::Data).unwrap();
        assert!(payload.is_empty());
        assert_eq!(next, 8);
    }

    #[test]
    fn reader_walks_consecutive_blocks() {
        let mut stream = Vec::new();
        encode(b"first", &mut stream);
        encode(b"second!", &mut stream);

        let mut r = BlockReader::new(&stream);
        assert_eq!(r.next_block(BlockKind::Tag).unwrap(), b"first");
        assert_eq!(r.remaining(), 7 + 2 * LEN_FIELD);
        assert_eq!(r.next_block(BlockKind::Header).unwrap(), b"second!");
        assert!(r.is_eof());
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn short_length_prefix_is_truncation() {
        let err = decode(&[1, 0], 0, BlockKind::Tag).unwrap_err();
        assert!(matches!(
            err,
            NdFieldError::TruncatedInput { needed: 4, available: 2, .. }
        ));
    }

    #[test]
    fn cursor_past_end_is_truncation() {
        let framed = encode_to_vec(b"xy");
        let err = decode(&framed, framed.len() + 3, BlockKind::Data).unwrap_err();
        assert!(matches!(err, NdFieldError::TruncatedInput { available: 0, .. }));
    }

    #[test]
    fn mismatched_trailer_reports_both_lengths() {
        let mut framed = encode_to_vec(b"payload");
        let n = framed.len();
        framed[n - 4..].copy_from_slice(&6u32.to_ne_bytes());
        match decode(&framed, 0, BlockKind::Header).unwrap_err() {
            NdFieldError::CorruptBlock { block, leading, trailing } => {
                assert_eq!(block, BlockKind::Header);
                assert_eq!(leading, 7);
                assert_eq!(trailing, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
