pub mod dtype;
mod elements;
pub mod header;

pub use self::elements::{ReadDataError, ReadableElement};

use self::dtype::TypeDescriptor;
use self::header::{FormatError, Header, ReadHeaderError};
use crate::NdArray;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An error reading a `.npy` file.
#[derive(Debug)]
pub enum ReadNpyError {
    /// The file does not exist.
    NotFound { path: PathBuf, source: io::Error },
    /// An error caused by I/O.
    Io(io::Error),
    /// The magic string, version or metadata of the header is invalid or
    /// unsupported.
    Format(FormatError),
    /// Overflow while computing the length of the array from the shape
    /// described in the file header.
    LengthOverflow,
    /// The type descriptor in the header does not match the requested
    /// element type.
    WrongDescriptor(TypeDescriptor),
    /// The file ended before all the elements declared by the header were
    /// read.
    TruncatedData { expected: usize, found: usize },
    /// Extra bytes are present between the end of the data and the end of
    /// the file.
    ExtraBytes(usize),
    /// An error caused by parsing the data as the element type.
    ParseData(Box<dyn Error + Send + Sync>),
}

impl Error for ReadNpyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadNpyError::NotFound { source, .. } => Some(source),
            ReadNpyError::Io(err) => Some(err),
            ReadNpyError::Format(err) => Some(err),
            ReadNpyError::LengthOverflow => None,
            ReadNpyError::WrongDescriptor(_) => None,
            ReadNpyError::TruncatedData { .. } => None,
            ReadNpyError::ExtraBytes(_) => None,
            ReadNpyError::ParseData(err) => Some(&**err),
        }
    }
}

impl fmt::Display for ReadNpyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadNpyError::NotFound { path, .. } => {
                write!(f, "file not found: {}", path.display())
            }
            ReadNpyError::Io(err) => write!(f, "I/O error: {}", err),
            ReadNpyError::Format(err) => write!(f, "error parsing header: {}", err),
            ReadNpyError::LengthOverflow => write!(f, "overflow computing length from shape"),
            ReadNpyError::WrongDescriptor(desc) => {
                write!(f, "incorrect descriptor ({}) for this type", desc)
            }
            ReadNpyError::TruncatedData { expected, found } => write!(
                f,
                "reached EOF after {} of {} bytes of array data",
                found, expected
            ),
            ReadNpyError::ExtraBytes(num_extra_bytes) => {
                write!(f, "file had {} extra bytes before EOF", num_extra_bytes)
            }
            ReadNpyError::ParseData(err) => write!(f, "error parsing data: {}", err),
        }
    }
}

impl From<io::Error> for ReadNpyError {
    fn from(err: io::Error) -> ReadNpyError {
        ReadNpyError::Io(err)
    }
}

impl From<FormatError> for ReadNpyError {
    fn from(err: FormatError) -> ReadNpyError {
        ReadNpyError::Format(err)
    }
}

impl From<ReadHeaderError> for ReadNpyError {
    fn from(err: ReadHeaderError) -> ReadNpyError {
        match err {
            ReadHeaderError::Io(err) => ReadNpyError::Io(err),
            ReadHeaderError::Format(err) => ReadNpyError::Format(err),
        }
    }
}

impl From<ReadDataError> for ReadNpyError {
    fn from(err: ReadDataError) -> ReadNpyError {
        match err {
            ReadDataError::Io(err) => ReadNpyError::Io(err),
            ReadDataError::WrongDescriptor(desc) => ReadNpyError::WrongDescriptor(desc),
            ReadDataError::LengthOverflow => ReadNpyError::LengthOverflow,
            ReadDataError::TruncatedData { expected, found } => {
                ReadNpyError::TruncatedData { expected, found }
            }
            ReadDataError::ExtraBytes(num_extra_bytes) => {
                ReadNpyError::ExtraBytes(num_extra_bytes)
            }
            ReadDataError::ParseData(err) => ReadNpyError::ParseData(err),
        }
    }
}

/// Extension trait for reading arrays from `.npy` files.
///
/// # Example
///
/// ```no_run
/// use npyfile::{NdArray, ReadNpyError, ReadNpyExt};
/// use std::fs::File;
///
/// let reader = File::open("array.npy")?;
/// let arr = NdArray::<i64>::read_npy(reader)?;
/// println!("shape = {:?}", arr.shape());
/// # Ok::<_, ReadNpyError>(())
/// ```
pub trait ReadNpyExt: Sized {
    /// Reads the array from `reader` in [`.npy`
    /// format](https://numpy.org/doc/stable/reference/generated/numpy.lib.format.html).
    ///
    /// The reader must be positioned at the start of the file and must end
    /// with the last element of the array.
    fn read_npy<R: io::Read>(reader: R) -> Result<Self, ReadNpyError>;
}

/// Reads the header and checks that the array is stored in row-major order.
///
/// A Fortran-order flag is accepted when at most one axis is longer than 1,
/// since both orders then lay out the elements identically.
///
/// Returns the header and the number of elements it declares.
pub(crate) fn read_c_order_header<R: io::Read>(
    reader: R,
) -> Result<(Header, usize), ReadNpyError> {
    let header = Header::from_reader(reader)?;
    if header.fortran_order && header.shape.iter().filter(|&&len| len > 1).count() > 1 {
        return Err(FormatError::FortranOrder.into());
    }
    let len = header.num_elements().ok_or(ReadNpyError::LengthOverflow)?;
    Ok((header, len))
}

impl<A: ReadableElement> ReadNpyExt for NdArray<A> {
    fn read_npy<R: io::Read>(mut reader: R) -> Result<Self, ReadNpyError> {
        let (header, len) = read_c_order_header(&mut reader)?;
        let data = A::read_to_end_exact_vec(reader, &header.type_descriptor, len)?;
        Ok(NdArray::from_shape_vec_unchecked(header.shape, data))
    }
}

/// Opens `path` for buffered reading, distinguishing a missing file from
/// other I/O errors.
fn open(path: &Path) -> Result<BufReader<File>, ReadNpyError> {
    debug!(path = %path.display(), "opening npy file");
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ReadNpyError::NotFound {
            path: path.to_owned(),
            source: err,
        }),
        Err(err) => Err(ReadNpyError::Io(err)),
    }
}

/// Loads an array from the `.npy` file at `path`.
///
/// `T` is usually an [`NdArray`] of the element type stored in the file, or
/// a [`DynArray`](crate::DynArray) when the element type is only known at
/// runtime.
///
/// # Example
///
/// ```no_run
/// use npyfile::{load, NdArray, ReadNpyError};
///
/// let arr: NdArray<i64> = load("two_d.npy")?;
/// assert_eq!(arr.shape(), &[16, 16]);
/// assert_eq!(arr[[1, 0]], 16);
/// # Ok::<_, ReadNpyError>(())
/// ```
pub fn load<T, P>(path: P) -> Result<T, ReadNpyError>
where
    T: ReadNpyExt,
    P: AsRef<Path>,
{
    T::read_npy(open(path.as_ref())?)
}
