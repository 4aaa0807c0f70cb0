//! Implementations of the `ReadableElement` trait.

use super::dtype::{DType, TypeDescriptor};
use std::error::Error;
use std::fmt;
use std::io::{self, Read};
use tracing::trace;

/// An error reading array data.
#[derive(Debug)]
pub enum ReadDataError {
    /// An error caused by I/O.
    Io(io::Error),
    /// The type descriptor does not match the element type.
    WrongDescriptor(TypeDescriptor),
    /// The number of bytes in the payload overflows `usize`.
    LengthOverflow,
    /// The file ended before all the declared elements were read.
    TruncatedData { expected: usize, found: usize },
    /// Extra bytes are present after the end of the data.
    ExtraBytes(usize),
    /// The data is invalid for the element type.
    ParseData(Box<dyn Error + Send + Sync>),
}

impl Error for ReadDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadDataError::Io(err) => Some(err),
            ReadDataError::WrongDescriptor(_) => None,
            ReadDataError::LengthOverflow => None,
            ReadDataError::TruncatedData { .. } => None,
            ReadDataError::ExtraBytes(_) => None,
            ReadDataError::ParseData(err) => Some(&**err),
        }
    }
}

impl fmt::Display for ReadDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadDataError::Io(err) => write!(f, "I/O error: {}", err),
            ReadDataError::WrongDescriptor(desc) => {
                write!(f, "incorrect descriptor ({}) for this type", desc)
            }
            ReadDataError::LengthOverflow => write!(f, "overflow computing length of data"),
            ReadDataError::TruncatedData { expected, found } => write!(
                f,
                "reached EOF after {} of {} bytes of array data",
                found, expected
            ),
            ReadDataError::ExtraBytes(num_extra_bytes) => {
                write!(f, "file had {} extra bytes before EOF", num_extra_bytes)
            }
            ReadDataError::ParseData(err) => write!(f, "error parsing data: {}", err),
        }
    }
}

impl From<io::Error> for ReadDataError {
    fn from(err: io::Error) -> ReadDataError {
        ReadDataError::Io(err)
    }
}

/// An array element type that can be read from an `.npy` file.
pub trait ReadableElement: Sized {
    /// The element type this Rust type is read from.
    const DTYPE: DType;

    /// Reads exactly `len` elements of type `type_desc` from `reader` and
    /// checks that the reader is then at EOF.
    ///
    /// Returns `ReadDataError::TruncatedData` if the reader ends early and
    /// `ReadDataError::ExtraBytes` if data remains after the last element.
    fn read_to_end_exact_vec<R: io::Read>(
        reader: R,
        type_desc: &TypeDescriptor,
        len: usize,
    ) -> Result<Vec<Self>, ReadDataError>;
}

/// Returns `Ok(_)` iff `type_desc` describes elements of type `A`.
fn check_descriptor<A: ReadableElement>(type_desc: &TypeDescriptor) -> Result<(), ReadDataError> {
    if type_desc.dtype == A::DTYPE {
        Ok(())
    } else {
        Err(ReadDataError::WrongDescriptor(*type_desc))
    }
}

/// Returns `Ok(_)` iff the `reader` had no more bytes on entry to this
/// function.
///
/// **Warning** This will consume the remainder of the reader.
fn check_for_extra_bytes<R: io::Read>(reader: &mut R) -> Result<(), ReadDataError> {
    let num_extra_bytes = reader.read_to_end(&mut Vec::new())?;
    if num_extra_bytes == 0 {
        Ok(())
    } else {
        Err(ReadDataError::ExtraBytes(num_extra_bytes))
    }
}

/// Reads the raw bytes of `len` elements of type `type_desc`, followed by a
/// check for trailing data.
fn read_payload<R: io::Read>(
    mut reader: R,
    type_desc: &TypeDescriptor,
    len: usize,
) -> Result<Vec<u8>, ReadDataError> {
    let expected = len
        .checked_mul(type_desc.dtype.size())
        .ok_or(ReadDataError::LengthOverflow)?;
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut bytes)?;
    if bytes.len() < expected {
        return Err(ReadDataError::TruncatedData {
            expected,
            found: bytes.len(),
        });
    }
    check_for_extra_bytes(&mut reader)?;
    trace!(bytes = expected, descr = %type_desc, "read npy payload");
    Ok(bytes)
}

mod bool;
mod primitive;
