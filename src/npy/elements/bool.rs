//! Trait implementation for `bool`.

use super::{check_descriptor, read_payload, ReadDataError, ReadableElement};
use crate::npy::dtype::{DType, TypeDescriptor};
use std::error::Error;
use std::fmt;
use std::io;

/// An error parsing a `bool` from a byte.
#[derive(Debug)]
struct ParseBoolError {
    bad_value: u8,
}

impl Error for ParseBoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error parsing value {:#04x} as a bool", self.bad_value)
    }
}

impl From<ParseBoolError> for ReadDataError {
    fn from(err: ParseBoolError) -> ReadDataError {
        ReadDataError::ParseData(Box::new(err))
    }
}

/// NumPy stores `False` as `0x00` and `True` as `0x01`; any other byte is
/// rejected.
fn parse_bool(byte: u8) -> Result<bool, ParseBoolError> {
    match byte {
        0x00 => Ok(false),
        0x01 => Ok(true),
        bad_value => Err(ParseBoolError { bad_value }),
    }
}

impl ReadableElement for bool {
    const DTYPE: DType = DType::Bool;

    fn read_to_end_exact_vec<R: io::Read>(
        reader: R,
        type_desc: &TypeDescriptor,
        len: usize,
    ) -> Result<Vec<Self>, ReadDataError> {
        check_descriptor::<Self>(type_desc)?;
        let bytes = read_payload(reader, type_desc, len)?;
        Ok(bytes
            .into_iter()
            .map(parse_bool)
            .collect::<Result<Vec<_>, _>>()?)
    }
}
