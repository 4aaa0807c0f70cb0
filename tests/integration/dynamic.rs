//! Loading arrays whose element type is chosen by the file.

use crate::npy_bytes;
use npyfile::{load_dyn, DType, DynArray, ReadNpyError, ReadNpyExt};

#[test]
fn load_dyn_two_d() {
    let arr = load_dyn("resources/two_d.npy").unwrap();
    assert_eq!(arr.dtype(), DType::Int64);
    assert_eq!(arr.shape(), &[16, 16]);
    assert_eq!(arr.ndim(), 2);
    assert_eq!(arr.len(), 256);
    assert!(arr.as_u64().is_none());
    let arr = arr.as_i64().unwrap();
    assert_eq!(arr[[15, 15]], 255);
}

#[test]
fn every_dtype() {
    let cases: &[(&str, Vec<u8>, DType)] = &[
        ("|b1", vec![0, 1], DType::Bool),
        ("|i1", vec![0xff, 1], DType::Int8),
        ("|u1", vec![0xff, 1], DType::UInt8),
        ("<i2", vec![0xff, 0xff, 1, 0], DType::Int16),
        (">u2", vec![0, 0xff, 0, 1], DType::UInt16),
        ("<i4", [-1i32, 1].iter().flat_map(|x| x.to_le_bytes()).collect(), DType::Int32),
        (">u4", [255u32, 1].iter().flat_map(|x| x.to_be_bytes()).collect(), DType::UInt32),
        ("<i8", [-1i64, 1].iter().flat_map(|x| x.to_le_bytes()).collect(), DType::Int64),
        ("<u8", [255u64, 1].iter().flat_map(|x| x.to_le_bytes()).collect(), DType::UInt64),
        (">f4", [-1f32, 1.].iter().flat_map(|x| x.to_be_bytes()).collect(), DType::Float32),
        ("<f8", [-1f64, 1.].iter().flat_map(|x| x.to_le_bytes()).collect(), DType::Float64),
    ];
    for (descr, payload, dtype) in cases {
        let bytes = npy_bytes(descr, false, &[2], payload);
        let arr = DynArray::read_npy(&bytes[..]).unwrap();
        assert_eq!(arr.dtype(), *dtype, "descr {}", descr);
        assert_eq!(arr.shape(), &[2]);
    }
}

#[test]
fn values_by_dtype() {
    let bytes = npy_bytes("|i1", false, &[2], &[0xff, 1]);
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.into_i8().unwrap().into_raw_vec(), vec![-1, 1]);

    let bytes = npy_bytes(">u2", false, &[2], &[0, 0xff, 0, 1]);
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.as_u16().unwrap().as_slice(), &[255, 1]);

    let bytes = npy_bytes("|b1", false, &[2], &[0, 1]);
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.as_bool().unwrap().as_slice(), &[false, true]);
}

#[test]
fn scalar_and_empty() {
    let bytes = npy_bytes("<f8", false, &[], &2.5f64.to_le_bytes());
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.ndim(), 0);
    assert_eq!(arr.as_f64().unwrap()[[]], 2.5);

    let bytes = npy_bytes("<i4", false, &[3, 0], &[]);
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.shape(), &[3, 0]);
    assert!(arr.is_empty());

    let huge = i64::MAX as usize;
    let bytes = npy_bytes("<i8", false, &[0, huge, 4], &[]);
    let arr = DynArray::read_npy(&bytes[..]).unwrap();
    assert_eq!(arr.shape(), &[0, huge, 4]);
    assert!(arr.is_empty());
    assert_eq!(arr.as_i64().unwrap().strides(), &[0, 0, 0]);
}

#[test]
fn load_dyn_missing_file() {
    assert!(matches!(
        load_dyn("resources/does_not_exist.npy"),
        Err(ReadNpyError::NotFound { .. })
    ));
}
