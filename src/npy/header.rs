use super::dtype::TypeDescriptor;
use byteorder::{ByteOrder, LittleEndian};
use num_traits::ToPrimitive;
use py_literal::{ParseError as PyValueParseError, Value as PyValue};
use std::error::Error;
use std::fmt;
use std::io;
use tracing::debug;

/// Magic string to indicate npy format.
const MAGIC_STRING: &[u8] = b"\x93NUMPY";

/// An error in the preamble or metadata of an `.npy` file.
#[derive(Debug)]
pub enum FormatError {
    MagicString,
    Version {
        major: u8,
        minor: u8,
    },
    /// The file ended before the end of the header.
    TruncatedHeader,
    /// Indicates that the array format string contains non-ASCII characters.
    /// This is an error for .npy format versions 1.0 and 2.0.
    NonAscii,
    /// Error parsing the array format string as UTF-8. This does not apply to
    /// .npy format versions 1.0 and 2.0, which require the array format string
    /// to be ASCII.
    Utf8Parse(std::str::Utf8Error),
    UnknownKey(PyValue),
    MissingKey(String),
    IllegalValue {
        key: String,
        value: PyValue,
    },
    DictParse(PyValueParseError),
    MetaNotDict(PyValue),
    /// The `descr` string names a type this crate cannot decode.
    UnsupportedDescriptor(String),
    /// The array is stored in column-major order.
    FortranOrder,
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use FormatError::*;
        match self {
            MagicString => None,
            Version { .. } => None,
            TruncatedHeader => None,
            NonAscii => None,
            Utf8Parse(err) => Some(err),
            UnknownKey(_) => None,
            MissingKey(_) => None,
            IllegalValue { .. } => None,
            DictParse(err) => Some(err),
            MetaNotDict(_) => None,
            UnsupportedDescriptor(_) => None,
            FortranOrder => None,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FormatError::*;
        match self {
            MagicString => write!(f, "start does not match magic string"),
            Version { major, minor } => write!(f, "unknown version number: {}.{}", major, minor),
            TruncatedHeader => write!(f, "file ended before the end of the header"),
            NonAscii => write!(f, "non-ascii in array format string; this is not supported in .npy format versions 1.0 and 2.0"),
            Utf8Parse(err) => write!(f, "error parsing array format string as UTF-8: {}", err),
            UnknownKey(key) => write!(f, "unknown key: {}", key),
            MissingKey(key) => write!(f, "missing key: {}", key),
            IllegalValue { key, value } => write!(f, "illegal value for key {}: {}", key, value),
            DictParse(err) => write!(f, "error parsing metadata dict: {}", err),
            MetaNotDict(value) => write!(f, "metadata is not a dict: {}", value),
            UnsupportedDescriptor(descr) => write!(f, "unsupported type descriptor: {:?}", descr),
            FortranOrder => write!(f, "fortran-ordered arrays are not supported"),
        }
    }
}

impl From<std::str::Utf8Error> for FormatError {
    fn from(err: std::str::Utf8Error) -> FormatError {
        FormatError::Utf8Parse(err)
    }
}

impl From<PyValueParseError> for FormatError {
    fn from(err: PyValueParseError) -> FormatError {
        FormatError::DictParse(err)
    }
}

#[derive(Debug)]
pub enum ReadHeaderError {
    Io(io::Error),
    Format(FormatError),
}

impl Error for ReadHeaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadHeaderError::Io(err) => Some(err),
            ReadHeaderError::Format(err) => Some(err),
        }
    }
}

impl fmt::Display for ReadHeaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadHeaderError::Io(err) => write!(f, "I/O error: {}", err),
            ReadHeaderError::Format(err) => write!(f, "error parsing header: {}", err),
        }
    }
}

impl From<io::Error> for ReadHeaderError {
    fn from(err: io::Error) -> ReadHeaderError {
        ReadHeaderError::Io(err)
    }
}

impl From<FormatError> for ReadHeaderError {
    fn from(err: FormatError) -> ReadHeaderError {
        ReadHeaderError::Format(err)
    }
}

/// Fills `buf` from `reader`, reporting a short read as a truncated header.
fn read_header_bytes<R: io::Read>(mut reader: R, buf: &mut [u8]) -> Result<(), ReadHeaderError> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => ReadHeaderError::Format(FormatError::TruncatedHeader),
        _ => ReadHeaderError::Io(err),
    })
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Version {
    V1_0,
    V2_0,
    V3_0,
}

impl Version {
    /// Number of bytes taken up by version number (1 byte for major version, 1
    /// byte for minor version).
    const VERSION_NUM_BYTES: usize = 2;

    fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        debug_assert_eq!(bytes.len(), Self::VERSION_NUM_BYTES);
        match (bytes[0], bytes[1]) {
            (0x01, 0x00) => Ok(Version::V1_0),
            (0x02, 0x00) => Ok(Version::V2_0),
            (0x03, 0x00) => Ok(Version::V3_0),
            (major, minor) => Err(FormatError::Version { major, minor }),
        }
    }

    /// Number of bytes in representation of header length.
    fn header_len_num_bytes(&self) -> usize {
        match *self {
            Version::V1_0 => 2,
            Version::V2_0 | Version::V3_0 => 4,
        }
    }

    /// Read header length.
    fn read_header_len<R: io::Read>(&self, reader: R) -> Result<usize, ReadHeaderError> {
        let mut buf = [0; 4];
        read_header_bytes(reader, &mut buf[..self.header_len_num_bytes()])?;
        match *self {
            Version::V1_0 => Ok(LittleEndian::read_u16(&buf) as usize),
            Version::V2_0 | Version::V3_0 => Ok(LittleEndian::read_u32(&buf) as usize),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::V1_0 => write!(f, "1.0"),
            Version::V2_0 => write!(f, "2.0"),
            Version::V3_0 => write!(f, "3.0"),
        }
    }
}

/// The metadata dictionary of an `.npy` file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub type_descriptor: TypeDescriptor,
    pub fortran_order: bool,
    pub shape: Vec<usize>,
}

impl Header {
    fn from_py_value(value: PyValue) -> Result<Self, FormatError> {
        if let PyValue::Dict(dict) = value {
            let mut type_descriptor: Option<TypeDescriptor> = None;
            let mut fortran_order: Option<bool> = None;
            let mut shape: Option<Vec<usize>> = None;
            for (key, value) in dict {
                match key {
                    PyValue::String(ref k) if k == "descr" => {
                        if let PyValue::String(ref descr) = value {
                            let parsed = descr.parse::<TypeDescriptor>().map_err(|_| {
                                FormatError::UnsupportedDescriptor(descr.clone())
                            })?;
                            type_descriptor = Some(parsed);
                        } else {
                            return Err(FormatError::IllegalValue {
                                key: "descr".to_owned(),
                                value,
                            });
                        }
                    }
                    PyValue::String(ref k) if k == "fortran_order" => {
                        if let PyValue::Boolean(b) = value {
                            fortran_order = Some(b);
                        } else {
                            return Err(FormatError::IllegalValue {
                                key: "fortran_order".to_owned(),
                                value,
                            });
                        }
                    }
                    PyValue::String(ref k) if k == "shape" => {
                        fn parse_shape(value: &PyValue) -> Option<Vec<usize>> {
                            value
                                .as_tuple()?
                                .iter()
                                .map(|elem| elem.as_integer()?.to_usize())
                                .collect()
                        }
                        if let Some(s) = parse_shape(&value) {
                            shape = Some(s);
                        } else {
                            return Err(FormatError::IllegalValue {
                                key: "shape".to_owned(),
                                value,
                            });
                        }
                    }
                    k => return Err(FormatError::UnknownKey(k)),
                }
            }
            match (type_descriptor, fortran_order, shape) {
                (Some(type_descriptor), Some(fortran_order), Some(shape)) => Ok(Header {
                    type_descriptor,
                    fortran_order,
                    shape,
                }),
                (None, _, _) => Err(FormatError::MissingKey("descr".to_owned())),
                (_, None, _) => Err(FormatError::MissingKey("fortran_order".to_owned())),
                (_, _, None) => Err(FormatError::MissingKey("shape".to_owned())),
            }
        } else {
            Err(FormatError::MetaNotDict(value))
        }
    }

    /// Reads the preamble and metadata dictionary, leaving `reader`
    /// positioned at the first byte of the payload.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self, ReadHeaderError> {
        // Check for magic string.
        let mut buf = vec![0; MAGIC_STRING.len()];
        read_header_bytes(&mut reader, &mut buf)?;
        if buf != MAGIC_STRING {
            return Err(FormatError::MagicString.into());
        }

        // Get version number.
        let mut buf = [0; Version::VERSION_NUM_BYTES];
        read_header_bytes(&mut reader, &mut buf)?;
        let version = Version::from_bytes(&buf)?;

        // Get `HEADER_LEN`.
        let header_len = version.read_header_len(&mut reader)?;

        // Parse the dictionary describing the array's format.
        let mut buf = vec![0; header_len];
        read_header_bytes(&mut reader, &mut buf)?;
        // The format asks for a terminating newline, but some writers pad
        // with spaces after it, so only the trailing whitespace matters.
        let end = buf
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |pos| pos + 1);
        let trimmed = &buf[..end];
        let header_str = match version {
            Version::V1_0 | Version::V2_0 => {
                if trimmed.is_ascii() {
                    std::str::from_utf8(trimmed).map_err(FormatError::from)?
                } else {
                    return Err(FormatError::NonAscii.into());
                }
            }
            Version::V3_0 => std::str::from_utf8(trimmed).map_err(FormatError::from)?,
        };
        let header_dict: PyValue = header_str.parse().map_err(FormatError::from)?;
        let header = Header::from_py_value(header_dict)?;
        debug!(
            %version,
            header_len,
            descr = %header.type_descriptor,
            shape = ?header.shape,
            fortran_order = header.fortran_order,
            "parsed npy header"
        );
        Ok(header)
    }

    /// Number of elements declared by the shape, or `None` on overflow.
    pub fn num_elements(&self) -> Option<usize> {
        crate::array::shape_size(&self.shape)
    }
}
