// crates/ndfield-core/src/format/document.rs

use std::io::{Read, Write};
use std::slice::ChunksExact;

use crate::error::{NdFieldError, Result};
use crate::format::block::{BlockReader, LEN_FIELD};
use crate::format::header::{FieldHeader, FieldLayout, COMMENT_SIZE, HEADER_SIZE};
use crate::format::tag::TAG_SIZE;
use crate::format::{data, tag, BlockKind};
use crate::validate::validate_header;

/// A complete NDField file: header plus the flattened values it describes.
///
/// Built once, either from points or from bytes, and never mutated; the
/// header/data consistency checked at construction holds for its lifetime.
///
/// `==` compares values with IEEE float rules (`NaN != NaN`, `-0.0 == 0.0`);
/// the codec itself preserves every value bit-for-bit.
#[derive(Clone, Debug, PartialEq)]
pub struct NdFieldDocument {
    header: FieldHeader,
    data: Vec<f64>,
}

impl NdFieldDocument {
    pub fn new(header: FieldHeader, data: Vec<f64>) -> Result<Self> {
        validate_header(&header)?;
        let expected = header.element_count()?;
        if data.len() != expected {
            let width = header.datatype.element_size();
            return Err(NdFieldError::SizeMismatch {
                expected: expected * width,
                found: data.len() * width,
            });
        }
        Ok(Self { header, data })
    }

    /// Particle cloud from `points[npoints][ncomponents]`.
    ///
    /// Comments longer than the 80-byte header slot are truncated. Every row
    /// must have the same number of components.
    pub fn from_points<P: AsRef<[f64]>>(comment: &str, points: &[P]) -> Result<Self> {
        let ncomponents = points.first().map_or(0, |p| p.as_ref().len());
        if let Some(row) = points.iter().position(|p| p.as_ref().len() != ncomponents) {
            return Err(NdFieldError::InvalidHeader(format!(
                "row {row} has {} components, expected {ncomponents}",
                points[row].as_ref().len()
            )));
        }

        let ncomponents_i32 = i32::try_from(ncomponents)
            .map_err(|_| NdFieldError::InvalidHeader("too many components".into()))?;
        let npoints_i32 = i32::try_from(points.len())
            .map_err(|_| NdFieldError::InvalidHeader("too many points".into()))?;

        let comment: String = comment.chars().take(COMMENT_SIZE).collect();
        let header = FieldHeader::particle_cloud(&comment, ncomponents_i32, npoints_i32);

        let mut data = Vec::with_capacity(ncomponents * points.len());
        for p in points {
            data.extend_from_slice(p.as_ref());
        }
        Self::new(header, data)
    }

    pub fn header(&self) -> &FieldHeader {
        &self.header
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_parts(self) -> (FieldHeader, Vec<f64>) {
        (self.header, self.data)
    }

    /// Components per point, for particle clouds.
    pub fn ncomponents(&self) -> Option<usize> {
        match self.header.layout {
            FieldLayout::ParticleCloud => Some(self.header.dims[0] as usize),
            FieldLayout::Grid => None,
        }
    }

    /// Point count, for particle clouds.
    pub fn npoints(&self) -> Option<usize> {
        match self.header.layout {
            FieldLayout::ParticleCloud => Some(self.data.len() / self.header.dims[0] as usize),
            FieldLayout::Grid => None,
        }
    }

    /// One slice per point, for particle clouds.
    pub fn points(&self) -> Option<ChunksExact<'_, f64>> {
        self.ncomponents().map(|n| self.data.chunks_exact(n))
    }

    /// Encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        let frames = 3 * 2 * LEN_FIELD;
        frames + TAG_SIZE + HEADER_SIZE + self.data.len() * self.header.datatype.element_size()
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        tag::encode(&mut out);
        self.header.encode(&mut out)?;
        data::encode(&self.data, self.header.datatype, &mut out);
        Ok(out)
    }

    /// Read tag, header and data strictly in that order, stopping at the
    /// first block that fails to validate.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut r = BlockReader::new(bytes);

        tag::decode(r.next_block(BlockKind::Tag)?)?;
        let header = FieldHeader::decode(r.next_block(BlockKind::Header)?)?;
        let data = data::decode(r.next_block(BlockKind::Data)?, &header)?;

        if !r.is_eof() {
            return Err(NdFieldError::TrailingBytes(r.remaining()));
        }
        Ok(Self { header, data })
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.encode()?)?;
        Ok(())
    }

    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        Self::decode(&bytes)
    }
}

pub fn encode(doc: &NdFieldDocument) -> Result<Vec<u8>> {
    doc.encode()
}

pub fn decode(bytes: &[u8]) -> Result<NdFieldDocument> {
    NdFieldDocument::decode(bytes)
}

/// Encode `points[npoints][ncomponents]` as a particle-cloud NDField file.
pub fn encode_points<P: AsRef<[f64]>>(comment: &str, points: &[P]) -> Result<Vec<u8>> {
    NdFieldDocument::from_points(comment, points)?.encode()
}
