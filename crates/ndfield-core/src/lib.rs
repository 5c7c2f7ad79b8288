//! Codec for NDField, the block-structured binary format used to hand point
//! clouds and fields to an external computational-geometry toolchain.
//!
//! ```
//! use ndfield_core::NdFieldDocument;
//!
//! let doc = NdFieldDocument::from_points("demo", &[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
//! let bytes = doc.encode().unwrap();
//! assert_eq!(NdFieldDocument::decode(&bytes).unwrap(), doc);
//! ```
//!
//! Numbers are packed in host-native byte order; see [`byte_order`].

pub mod error;
pub mod validate;

pub mod byte_order;
pub mod checksum;
pub mod datatype;
pub mod format;

pub use crate::datatype::Datatype;
pub use crate::error::{NdFieldError, Result};
pub use crate::format::document::{decode, encode, encode_points, NdFieldDocument};
pub use crate::format::header::{FieldHeader, FieldLayout};
pub use crate::format::{BlockKind, MAX_DIMS};
