use crate::byte_order::put_f64;
use crate::error::Result;
use crate::format::document::NdFieldDocument;

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// A stable document identifier: blake3_16 over the full encoded file.
/// Identical documents encoded on hosts of the same byte order share an id.
pub fn document_id_16(doc: &NdFieldDocument) -> Result<[u8; 16]> {
    Ok(blake3_16(&doc.encode()?))
}

pub fn document_id_hex(doc: &NdFieldDocument) -> Result<String> {
    Ok(hex16(&document_id_16(doc)?))
}

/// crc32 over the data block payload (values only, no framing).
pub fn payload_crc32(doc: &NdFieldDocument) -> u32 {
    let mut payload = Vec::with_capacity(doc.data().len() * 8);
    for &v in doc.data() {
        put_f64(&mut payload, v);
    }
    crc32(&payload)
}

pub fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_crc_matches_crc_of_packed_values() {
        let doc = NdFieldDocument::from_points("crc", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let mut packed = Vec::new();
        for v in [1.0f64, 2.0, 3.0, 4.0] {
            packed.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(payload_crc32(&doc), crc32(&packed));
    }

    #[test]
    fn hex16_is_lowercase_and_32_chars() {
        let s = hex16(&[0xAB; 16]);
        assert_eq!(s.len(), 32);
        assert!(s.starts_with("abab"));
    }
}
