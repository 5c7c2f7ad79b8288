use ndfield_core::format::block;
use ndfield_core::format::header::HEADER_SIZE;
use ndfield_core::{Datatype, FieldHeader, FieldLayout, NdFieldDocument, NdFieldError, MAX_DIMS};

// Byte offsets inside an encoded file.
const HEADER_PAYLOAD: usize = 24 + 4;
const NDIMS_AT: usize = HEADER_PAYLOAD + 80;
const DATATYPE_AT: usize = HEADER_PAYLOAD + 168;
const FDIMS_AT: usize = HEADER_PAYLOAD + 164;

fn sample_bytes() -> Vec<u8> {
    ndfield_core::encode_points("layout", &[[1.0, 2.0], [3.0, 4.0]]).unwrap()
}

fn put_i32(bytes: &mut [u8], at: usize, v: i32) {
    bytes[at..at + 4].copy_from_slice(&v.to_ne_bytes());
}

fn grid_header(ndims: usize) -> FieldHeader {
    let mut dims = [0i32; MAX_DIMS];
    for d in dims.iter_mut().take(ndims) {
        *d = 2;
    }
    FieldHeader {
        comment: String::new(),
        ndims,
        dims,
        layout: FieldLayout::Grid,
        datatype: Datatype::Float64,
        x0: [0.0; MAX_DIMS],
        delta: [1.0; MAX_DIMS],
    }
}

#[test]
fn header_size_is_independent_of_ndims() {
    let mut two = Vec::new();
    grid_header(2).encode(&mut two).unwrap();
    let mut five = Vec::new();
    grid_header(5).encode(&mut five).unwrap();

    assert_eq!(two.len(), five.len());
    assert_eq!(two.len(), HEADER_SIZE + 8);
    assert_eq!(HEADER_SIZE, (20 + 3) * 4 + 2 * 20 * 8 + 160 + 80);
}

#[test]
fn foreign_tag_is_unrecognized() {
    let clean = sample_bytes();
    let mut tag = [0u8; 16];
    tag[..9].copy_from_slice(b"NOTAFIELD");

    let mut bytes = block::encode_to_vec(&tag);
    bytes.extend_from_slice(&clean[24..]);

    match NdFieldDocument::decode(&bytes) {
        Err(NdFieldError::UnrecognizedFormat(found)) => assert_eq!(found, "NOTAFIELD"),
        other => panic!("expected UnrecognizedFormat, got {other:?}"),
    }
}

#[test]
fn unknown_datatype_is_unsupported() {
    let mut bytes = sample_bytes();
    put_i32(&mut bytes, DATATYPE_AT, 999);
    assert!(matches!(
        NdFieldDocument::decode(&bytes),
        Err(NdFieldError::UnsupportedDatatype(999))
    ));
}

#[test]
fn float32_code_is_not_guessed() {
    let mut bytes = sample_bytes();
    put_i32(&mut bytes, DATATYPE_AT, 256);
    assert!(matches!(
        NdFieldDocument::decode(&bytes),
        Err(NdFieldError::UnsupportedDatatype(256))
    ));
}

#[test]
fn ndims_out_of_range_is_invalid_header() {
    for bad in [0, -1, 21, i32::MAX] {
        let mut bytes = sample_bytes();
        put_i32(&mut bytes, NDIMS_AT, bad);
        assert!(
            matches!(NdFieldDocument::decode(&bytes), Err(NdFieldError::InvalidHeader(_))),
            "ndims {bad} accepted"
        );
    }
}

#[test]
fn unknown_fdims_index_is_invalid_header() {
    let mut bytes = sample_bytes();
    put_i32(&mut bytes, FDIMS_AT, 4);
    assert!(matches!(
        NdFieldDocument::decode(&bytes),
        Err(NdFieldError::InvalidHeader(_))
    ));
}

#[test]
fn wrong_header_size_is_invalid_header() {
    let clean = sample_bytes();
    let mut bytes = clean[..24].to_vec();
    block::encode(&clean[HEADER_PAYLOAD..HEADER_PAYLOAD + HEADER_SIZE - 4], &mut bytes);
    bytes.extend_from_slice(&clean[HEADER_PAYLOAD + HEADER_SIZE + 4..]);

    assert!(matches!(
        NdFieldDocument::decode(&bytes),
        Err(NdFieldError::InvalidHeader(_))
    ));
}

#[test]
fn data_block_shorter_than_shape_is_size_mismatch() {
    let clean = sample_bytes();
    let data_payload = HEADER_PAYLOAD + HEADER_SIZE + 4 + 4;
    let mut bytes = clean[..data_payload - 4].to_vec();
    block::encode(&clean[data_payload..data_payload + 24], &mut bytes);

    match NdFieldDocument::decode(&bytes) {
        Err(NdFieldError::SizeMismatch { expected, found }) => {
            assert_eq!(expected, 32);
            assert_eq!(found, 24);
        }
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

#[test]
fn encode_rejects_bad_shapes() {
    let mut h = grid_header(2);
    h.ndims = 21;
    assert!(matches!(h.encode(&mut Vec::new()), Err(NdFieldError::InvalidHeader(_))));

    let mut h = grid_header(2);
    h.ndims = 0;
    assert!(matches!(h.encode(&mut Vec::new()), Err(NdFieldError::InvalidHeader(_))));

    let mut h = grid_header(3);
    h.dims[1] = 0;
    assert!(matches!(h.encode(&mut Vec::new()), Err(NdFieldError::InvalidHeader(_))));

    let mut h = grid_header(2);
    h.dims[7] = 4;
    assert!(matches!(h.encode(&mut Vec::new()), Err(NdFieldError::InvalidHeader(_))));

    let mut h = grid_header(2);
    h.comment = "caf\u{e9}".into();
    assert!(matches!(h.encode(&mut Vec::new()), Err(NdFieldError::InvalidHeader(_))));
}

#[test]
fn point_matrix_preconditions() {
    let empty: [[f64; 3]; 0] = [];
    assert!(matches!(
        NdFieldDocument::from_points("", &empty),
        Err(NdFieldError::InvalidHeader(_))
    ));

    let no_components: [[f64; 0]; 2] = [[], []];
    assert!(matches!(
        NdFieldDocument::from_points("", &no_components),
        Err(NdFieldError::InvalidHeader(_))
    ));

    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert!(matches!(
        NdFieldDocument::from_points("", &ragged),
        Err(NdFieldError::InvalidHeader(_))
    ));
}

#[test]
fn document_new_checks_data_length() {
    let header = FieldHeader::particle_cloud("", 3, 2);
    let err = NdFieldDocument::new(header, vec![0.0; 5]).unwrap_err();
    assert!(matches!(err, NdFieldError::SizeMismatch { expected: 48, found: 40 }));
}

#[test]
fn reserved_bytes_are_ignored_on_decode() {
    let mut bytes = sample_bytes();
    let reserved = HEADER_PAYLOAD + 492;
    for b in &mut bytes[reserved..reserved + 160] {
        *b = 0x5A;
    }
    let doc = NdFieldDocument::decode(&bytes).unwrap();
    assert_eq!(doc.data(), &[1.0, 2.0, 3.0, 4.0]);
}
