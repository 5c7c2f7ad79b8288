// crates/ndfield-core/src/format/header.rs

use crate::byte_order::{get_f64, get_i32, put_f64, put_i32};
use crate::datatype::Datatype;
use crate::error::{NdFieldError, Result};
use crate::format::{block, MAX_DIMS};
use crate::validate::validate_header;

pub const COMMENT_SIZE: usize = 80;
pub const RESERVED_SIZE: usize = 160;

/// Header payload size. Constant: the arrays are always written at full
/// capacity, whatever `ndims` is.
pub const HEADER_SIZE: usize =
    (MAX_DIMS + 3) * 4 + 2 * MAX_DIMS * 8 + RESERVED_SIZE + COMMENT_SIZE;

/// How `dims` is interpreted (`fdims_index` on disk).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldLayout {
    /// Regular grid; every dim is a spatial axis.
    Grid,
    /// Particle coordinates; `dims[0]` = components, `dims[1]` = points.
    ParticleCloud,
}

impl FieldLayout {
    pub fn code(self) -> i32 {
        match self {
            FieldLayout::Grid => 0,
            FieldLayout::ParticleCloud => 1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(FieldLayout::Grid),
            1 => Ok(FieldLayout::ParticleCloud),
            other => Err(NdFieldError::InvalidHeader(format!(
                "unknown fdims_index {other}"
            ))),
        }
    }
}

/// Decoded header block.
///
/// `dims`, `x0` and `delta` always hold `MAX_DIMS` slots; only the first
/// `ndims` are meaningful. Unused `dims` slots are 0, unused `x0` slots 0.0
/// and unused `delta` slots 1.0. The 160 reserved bytes are not kept: they
/// are written as zeros and skipped on read.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldHeader {
    pub comment: String,
    pub ndims: usize,
    pub dims: [i32; MAX_DIMS],
    pub layout: FieldLayout,
    pub datatype: Datatype,
    pub x0: [f64; MAX_DIMS],
    pub delta: [f64; MAX_DIMS],
}

impl FieldHeader {
    /// Header for `npoints` points of `ncomponents` coordinates each.
    pub fn particle_cloud(comment: &str, ncomponents: i32, npoints: i32) -> Self {
        let mut dims = [0i32; MAX_DIMS];
        dims[0] = ncomponents;
        dims[1] = npoints;
        Self {
            comment: comment.to_string(),
            ndims: 2,
            dims,
            layout: FieldLayout::ParticleCloud,
            datatype: Datatype::Float64,
            x0: [0.0; MAX_DIMS],
            delta: [1.0; MAX_DIMS],
        }
    }

    /// The meaningful prefix of `dims`.
    pub fn shape(&self) -> &[i32] {
        &self.dims[..self.ndims.min(MAX_DIMS)]
    }

    /// `product(dims[..ndims])`, failing on non-positive dims or overflow.
    pub fn element_count(&self) -> Result<usize> {
        self.shape().iter().try_fold(1usize, |acc, &d| {
            if d <= 0 {
                return Err(NdFieldError::InvalidHeader(format!(
                    "dimension {d} must be positive"
                )));
            }
            acc.checked_mul(d as usize)
                .ok_or_else(|| NdFieldError::InvalidHeader("element count overflows".into()))
        })
    }

    /// Byte count the data block must hold.
    pub fn data_size(&self) -> Result<usize> {
        self.element_count()?
            .checked_mul(self.datatype.element_size())
            .ok_or_else(|| NdFieldError::InvalidHeader("data size overflows".into()))
    }

    /// Append the framed header block.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        validate_header(self)?;
        block::encode(&self.payload(), out);
        Ok(())
    }

    fn payload(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(HEADER_SIZE);

        let mut comment = [0u8; COMMENT_SIZE];
        let n = self.comment.len().min(COMMENT_SIZE);
        comment[..n].copy_from_slice(&self.comment.as_bytes()[..n]);
        b.extend_from_slice(&comment);

        put_i32(&mut b, self.ndims as i32);
        for &d in &self.dims {
            put_i32(&mut b, d);
        }
        put_i32(&mut b, self.layout.code());
        put_i32(&mut b, self.datatype.code());
        for &x in &self.x0 {
            put_f64(&mut b, x);
        }
        for &d in &self.delta {
            put_f64(&mut b, d);
        }
        b.extend_from_slice(&[0u8; RESERVED_SIZE]);

        debug_assert_eq!(b.len(), HEADER_SIZE);
        b
    }

    /// Parse a header block payload.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        if payload.len() != HEADER_SIZE {
            return Err(NdFieldError::InvalidHeader(format!(
                "header block is {} bytes, expected {HEADER_SIZE}",
                payload.len()
            )));
        }
        let mut f = Fields { b: payload, i: 0 };

        let comment_raw = f.take(COMMENT_SIZE);
        let comment_end = comment_raw
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(COMMENT_SIZE);
        let comment_raw = &comment_raw[..comment_end];
        if !comment_raw.is_ascii() {
            return Err(NdFieldError::InvalidHeader("comment is not ASCII".into()));
        }
        let comment = String::from_utf8_lossy(comment_raw).into_owned();

        let ndims_raw = f.take_i32();
        if !(1..=MAX_DIMS as i32).contains(&ndims_raw) {
            return Err(NdFieldError::InvalidHeader(format!(
                "ndims {ndims_raw} outside 1..={MAX_DIMS}"
            )));
        }

        let mut dims = [0i32; MAX_DIMS];
        for d in dims.iter_mut() {
            *d = f.take_i32();
        }
        let layout = FieldLayout::from_code(f.take_i32())?;
        let datatype = Datatype::from_code(f.take_i32())?;

        let mut x0 = [0f64; MAX_DIMS];
        for x in x0.iter_mut() {
            *x = f.take_f64();
        }
        let mut delta = [0f64; MAX_DIMS];
        for d in delta.iter_mut() {
            *d = f.take_f64();
        }
        // reserved[160]: opaque, ignored

        let header = Self {
            comment,
            ndims: ndims_raw as usize,
            dims,
            layout,
            datatype,
            x0,
            delta,
        };
        validate_header(&header)?;
        Ok(header)
    }
}

/// Field cursor over a payload whose length has already been checked.
struct Fields<'a> {
    b: &'a [u8],
    i: usize,
}

impl<'a> Fields<'a> {
    fn take(&mut self, n: usize) -> &'a [u8] {
        let s = &self.b[self.i..self.i + n];
        self.i += n;
        s
    }

    fn take_i32(&mut self) -> i32 {
        get_i32(self.take(4))
    }

    fn take_f64(&mut self) -> f64 {
        get_f64(self.take(8))
    }
}
