//! Loading the example files in `resources/`.

use npyfile::{load, load_dyn, DType, NdArray};

#[test]
fn one_d() {
    let arr: NdArray<i64> = load("resources/one_d.npy").unwrap();
    assert_eq!(arr.shape(), &[32]);
    assert_eq!(arr.strides(), &[1]);
    assert_eq!(arr.as_slice(), &(0..32).collect::<Vec<i64>>()[..]);
}

#[test]
fn two_d() {
    let arr: NdArray<i64> = load("resources/two_d.npy").unwrap();
    assert_eq!(arr.shape(), &[16, 16]);
    assert_eq!(arr.row(0).unwrap(), &(0..16).collect::<Vec<i64>>()[..]);
    assert_eq!(arr.column(0).unwrap(), (0..256).step_by(16).collect::<Vec<i64>>());
    for i in 0..16 {
        for j in 0..16 {
            assert_eq!(arr[[i, j]], (i * 16 + j) as i64);
            assert_eq!(arr[[i, j]], arr.as_slice()[i * arr.shape()[1] + j]);
        }
    }
}

#[test]
fn two_d_big_endian() {
    let little: NdArray<i64> = load("resources/two_d.npy").unwrap();
    let big: NdArray<i64> = load("resources/two_d_big_endian.npy").unwrap();
    assert_eq!(little, big);
}

#[test]
fn legacy_one_d_u4() {
    let arr = load_dyn("resources/legacy_one_d_u4.npy").unwrap();
    assert_eq!(arr.dtype(), DType::UInt32);
    assert_eq!(arr.shape(), &[32]);
    let arr = arr.into_u32().unwrap();
    assert_eq!(arr.as_slice(), &(0..32).collect::<Vec<u32>>()[..]);
}

#[test]
fn legacy_two_d_f8() {
    let arr: NdArray<f64> = load("resources/legacy_two_d_f8.npy").unwrap();
    assert_eq!(arr.shape(), &[16, 16]);
    let row: Vec<f64> = (0..16u32).map(f64::from).collect();
    assert_eq!(arr.row(0).unwrap(), &row[..]);
    let column: Vec<f64> = (0..256u32).step_by(16).map(f64::from).collect();
    assert_eq!(arr.column(0).unwrap(), column);
}

#[test]
fn index_axis_matches_row_and_column() {
    let arr: NdArray<i64> = load("resources/two_d.npy").unwrap();
    for k in 0..16 {
        let row = arr.index_axis(0, k).unwrap();
        assert_eq!(row.shape(), &[16]);
        assert_eq!(row.as_slice(), arr.row(k).unwrap());

        let column = arr.index_axis(1, k).unwrap();
        assert_eq!(column.into_raw_vec(), arr.column(k).unwrap());
    }
}

#[cfg(feature = "ndarray")]
#[test]
fn into_ndarray() {
    use ndarray::Array2;

    let arr: NdArray<i64> = load("resources/two_d.npy").unwrap();
    let arr: Array2<i64> = arr.into_ndarray().into_dimensionality().unwrap();
    assert_eq!(arr.row(3).to_vec(), (48..64).collect::<Vec<i64>>());
    assert_eq!(arr.column(5).to_vec(), (0..16).map(|i| i * 16 + 5).collect::<Vec<i64>>());
}
