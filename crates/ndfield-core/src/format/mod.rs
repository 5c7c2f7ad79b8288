//! The NDField binary layout.
//!
//! A file is exactly three framed blocks, in this order:
//!
//! ```text
//! TAG     16 bytes   "NDFIELD" NUL-padded
//! HEADER  652 bytes  comment, ndims, dims[20], fdims_index, datatype,
//!                    x0[20], delta[20], reserved[160]
//! DATA    n bytes    product(dims[..ndims]) elements of `datatype`
//! ```
//!
//! All three share the framing in [`block`]; [`BlockKind`] names which
//! payload schema a block is read with.

use std::fmt;

pub mod block;
pub mod data;
pub mod document;
pub mod header;
pub mod tag;

/// Fixed capacity of the `dims`, `x0` and `delta` arrays.
pub const MAX_DIMS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Tag,
    Header,
    Data,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Tag => f.write_str("tag"),
            BlockKind::Header => f.write_str("header"),
            BlockKind::Data => f.write_str("data"),
        }
    }
}
