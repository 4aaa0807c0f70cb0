//! Integration tests.

use std::fmt::Write as _;

mod dynamic;
mod errors;
mod examples;

/// Encodes an `.npy` version 1.0 file with the given header fields and raw
/// payload bytes.
///
/// The header is padded with spaces so that the payload starts at a multiple
/// of 64 bytes, and ends with a newline.
pub fn npy_bytes(descr: &str, fortran_order: bool, shape: &[usize], payload: &[u8]) -> Vec<u8> {
    let mut dict = String::new();
    write!(
        dict,
        "{{'descr': '{}', 'fortran_order': {}, 'shape': (",
        descr,
        if fortran_order { "True" } else { "False" },
    )
    .unwrap();
    for len in shape {
        write!(dict, "{}, ", len).unwrap();
    }
    dict.push_str("), }");

    const PREFIX_LEN: usize = 10;
    const NEWLINE_LEN: usize = 1;
    while (PREFIX_LEN + dict.len() + NEWLINE_LEN) % 64 != 0 {
        dict.push(' ');
    }
    dict.push('\n');

    let mut out = b"\x93NUMPY\x01\x00".to_vec();
    out.extend_from_slice(&(dict.len() as u16).to_le_bytes());
    out.extend_from_slice(dict.as_bytes());
    out.extend_from_slice(payload);
    out
}

/// Little-endian payload bytes of `values`.
pub fn i64_le_bytes(values: impl IntoIterator<Item = i64>) -> Vec<u8> {
    values.into_iter().flat_map(|x| x.to_le_bytes()).collect()
}
