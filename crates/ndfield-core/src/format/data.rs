// crates/ndfield-core/src/format/data.rs

use crate::byte_order::{get_f64, put_f64};
use crate::datatype::Datatype;
use crate::error::{NdFieldError, Result};
use crate::format::block;
use crate::format::header::FieldHeader;

/// Append the framed data block. Values are written in order, which makes
/// `dims[0]` the fastest-varying axis.
pub fn encode(values: &[f64], datatype: Datatype, out: &mut Vec<u8>) {
    let mut payload = Vec::with_capacity(values.len() * datatype.element_size());
    match datatype {
        Datatype::Float64 => {
            for &v in values {
                put_f64(&mut payload, v);
            }
        }
    }
    block::encode(&payload, out);
}

/// Parse a data block payload against the shape its header declares.
pub fn decode(payload: &[u8], header: &FieldHeader) -> Result<Vec<f64>> {
    let expected = header.data_size()?;
    if payload.len() != expected {
        return Err(NdFieldError::SizeMismatch {
            expected,
            found: payload.len(),
        });
    }

    let width = header.datatype.element_size();
    let values = match header.datatype {
        Datatype::Float64 => payload.chunks_exact(width).map(get_f64).collect(),
    };
    Ok(values)
}
