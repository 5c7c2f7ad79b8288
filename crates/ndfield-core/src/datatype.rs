use crate::error::{NdFieldError, Result};

/// Element types an NDField data block may carry.
///
/// The catalog is closed: codes not listed here are rejected with
/// `UnsupportedDatatype`, never mapped to a guessed width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Datatype {
    /// IEEE-754 binary64 (`ND_DOUBLE`).
    Float64,
}

impl Datatype {
    pub const FLOAT64_CODE: i32 = 512;

    pub fn code(self) -> i32 {
        match self {
            Datatype::Float64 => Self::FLOAT64_CODE,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            Self::FLOAT64_CODE => Ok(Datatype::Float64),
            other => Err(NdFieldError::UnsupportedDatatype(other)),
        }
    }

    /// Size in bytes of a single element.
    pub fn element_size(self) -> usize {
        match self {
            Datatype::Float64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Datatype::Float64 => "float64",
        }
    }
}
