//! Files that must fail to load, and how they fail.

use crate::{i64_le_bytes, npy_bytes};
use npyfile::{load, DType, FormatError, NdArray, ReadNpyError, ReadNpyExt};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.npy");
    match load::<NdArray<i64>, _>(&path) {
        Err(ReadNpyError::NotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn truncated_mid_payload() {
    let full = fs::read("resources/two_d.npy").unwrap();
    let header_len = full.len() - 256 * 8;
    for cut in &[1, 8, 100, 256 * 8 - 1] {
        let file = write_temp(&full[..full.len() - cut]);
        match load::<NdArray<i64>, _>(file.path()) {
            Err(ReadNpyError::TruncatedData { expected, found }) => {
                assert_eq!(expected, 256 * 8);
                assert_eq!(found, 256 * 8 - cut);
            }
            other => panic!("unexpected result for cut {}: {:?}", cut, other),
        }
    }
    // No payload at all is still a data error, not a header error.
    let file = write_temp(&full[..header_len]);
    assert!(matches!(
        load::<NdArray<i64>, _>(file.path()),
        Err(ReadNpyError::TruncatedData { found: 0, .. })
    ));
}

#[test]
fn truncated_header() {
    let full = fs::read("resources/one_d.npy").unwrap();
    for &len in &[0, 5, 8, 9, 50] {
        assert!(matches!(
            NdArray::<i64>::read_npy(&full[..len]),
            Err(ReadNpyError::Format(FormatError::TruncatedHeader))
        ));
    }
}

#[test]
fn extra_bytes() {
    let mut bytes = fs::read("resources/one_d.npy").unwrap();
    bytes.extend_from_slice(&[0; 5]);
    assert!(matches!(
        NdArray::<i64>::read_npy(&bytes[..]),
        Err(ReadNpyError::ExtraBytes(5))
    ));
}

#[test]
fn bad_magic() {
    let mut bytes = fs::read("resources/one_d.npy").unwrap();
    bytes[0] = b'N';
    let file = write_temp(&bytes);
    assert!(matches!(
        load::<NdArray<i64>, _>(file.path()),
        Err(ReadNpyError::Format(FormatError::MagicString))
    ));
}

#[test]
fn unknown_version() {
    let mut bytes = fs::read("resources/one_d.npy").unwrap();
    bytes[6] = 9;
    match NdArray::<i64>::read_npy(&bytes[..]) {
        Err(ReadNpyError::Format(FormatError::Version { major, minor })) => {
            assert_eq!((major, minor), (9, 0));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn fortran_order() {
    let bytes = npy_bytes("<i8", true, &[2, 3], &i64_le_bytes(0..6));
    assert!(matches!(
        NdArray::<i64>::read_npy(&bytes[..]),
        Err(ReadNpyError::Format(FormatError::FortranOrder))
    ));
}

#[test]
fn fortran_order_with_one_long_axis() {
    for shape in &[&[6usize][..], &[1, 6], &[6, 1, 1], &[], &[0, 6]] {
        let len = shape.iter().product::<usize>();
        let bytes = npy_bytes("<i8", true, shape, &i64_le_bytes(0..len as i64));
        let arr = NdArray::<i64>::read_npy(&bytes[..]).unwrap();
        assert_eq!(arr.shape(), *shape);
        assert_eq!(arr.as_slice(), &(0..len as i64).collect::<Vec<_>>()[..]);
    }
}

#[test]
fn unsupported_descriptor() {
    let bytes = npy_bytes("<c16", false, &[1], &[0; 16]);
    assert!(matches!(
        NdArray::<i64>::read_npy(&bytes[..]),
        Err(ReadNpyError::Format(FormatError::UnsupportedDescriptor(_)))
    ));
}

#[test]
fn wrong_element_type() {
    match load::<NdArray<f64>, _>("resources/one_d.npy") {
        Err(ReadNpyError::WrongDescriptor(desc)) => assert_eq!(desc.dtype, DType::Int64),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn bad_bool() {
    let bytes = npy_bytes("|b1", false, &[3], &[1, 0, 2]);
    match NdArray::<bool>::read_npy(&bytes[..]) {
        Err(err @ ReadNpyError::ParseData(_)) => assert_eq!(
            err.to_string(),
            "error parsing data: error parsing value 0x02 as a bool"
        ),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn shape_overflow() {
    let bytes = npy_bytes("<i8", false, &[usize::MAX, 2], &[]);
    assert!(matches!(
        NdArray::<i64>::read_npy(&bytes[..]),
        Err(ReadNpyError::LengthOverflow)
    ));
}

#[test]
fn errors_expose_source() {
    use std::error::Error;

    let err = NdArray::<i64>::read_npy(&b"\x93NUMPY\x05\x00"[..]).unwrap_err();
    assert_eq!(err.to_string(), "error parsing header: unknown version number: 5.0");
    assert!(err.source().is_some());
}
