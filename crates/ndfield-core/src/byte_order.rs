//! Byte order policy for NDField files.
//!
//! Every integer and float in an NDField file (block lengths included) is
//! written in the byte order of the host that produced it. The file carries
//! no byte-order marker, and the downstream C reader makes the same
//! assumption, so this crate does the same: encode and decode both use the
//! host's native order.
//!
//! Consequence: a file written on a little-endian host is unreadable on a
//! big-endian host (and vice versa). The mismatch usually surfaces as a
//! `TruncatedInput` or `CorruptBlock` on the tag block, since the leading
//! length no longer reads as 16.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// The order used for every value this crate reads or writes.
pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
    ByteOrder::Big
} else {
    ByteOrder::Little
};

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => f.write_str("little-endian"),
            ByteOrder::Big => f.write_str("big-endian"),
        }
    }
}

pub(crate) fn put_i32(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_ne_bytes());
}

pub(crate) fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_ne_bytes());
}

pub(crate) fn put_f64(out: &mut Vec<u8>, v: f64) {
    out.extend_from_slice(&v.to_ne_bytes());
}

pub(crate) fn get_u32(s: &[u8]) -> u32 {
    u32::from_ne_bytes([s[0], s[1], s[2], s[3]])
}

pub(crate) fn get_i32(s: &[u8]) -> i32 {
    i32::from_ne_bytes([s[0], s[1], s[2], s[3]])
}

pub(crate) fn get_f64(s: &[u8]) -> f64 {
    f64::from_ne_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]])
}
