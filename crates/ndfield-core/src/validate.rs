use crate::error::{NdFieldError, Result};
use crate::format::block::MAX_PAYLOAD;
use crate::format::header::{FieldHeader, COMMENT_SIZE};
use crate::format::MAX_DIMS;

/// Shape and comment checks shared by header encode and decode.
pub fn validate_header(h: &FieldHeader) -> Result<()> {
    if !(1..=MAX_DIMS).contains(&h.ndims) {
        return Err(NdFieldError::InvalidHeader(format!(
            "ndims {} outside 1..={MAX_DIMS}",
            h.ndims
        )));
    }

    if let Some((axis, d)) = h.shape().iter().enumerate().find(|(_, &d)| d <= 0) {
        return Err(NdFieldError::InvalidHeader(format!(
            "dims[{axis}] = {d} must be positive"
        )));
    }

    // Slots past ndims are part of the wire contract: always zero.
    if let Some(axis) = (h.ndims..MAX_DIMS).find(|&a| h.dims[a] != 0) {
        return Err(NdFieldError::InvalidHeader(format!(
            "dims[{axis}] = {} beyond ndims {} must be 0",
            h.dims[axis], h.ndims
        )));
    }

    if h.data_size()? > MAX_PAYLOAD {
        return Err(NdFieldError::InvalidHeader(format!(
            "data block would exceed {MAX_PAYLOAD} bytes"
        )));
    }

    if !h.comment.is_ascii() {
        return Err(NdFieldError::InvalidHeader("comment is not ASCII".into()));
    }
    if h.comment.len() > COMMENT_SIZE {
        return Err(NdFieldError::InvalidHeader(format!(
            "comment is {} bytes, max {COMMENT_SIZE}",
            h.comment.len()
        )));
    }
    if h.comment.contains('\0') {
        return Err(NdFieldError::InvalidHeader("comment contains NUL".into()));
    }

    Ok(())
}
