//! Element types and the `descr` field of the header.

use std::fmt;
use std::str::FromStr;

/// Byte order of multi-byte elements in the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the target platform.
    pub fn native() -> Endian {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    fn prefix(self) -> char {
        match self {
            Endian::Little => '<',
            Endian::Big => '>',
        }
    }
}

/// Element type of an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl DType {
    /// Size of one element in bytes.
    pub fn size(self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 => 8,
        }
    }

    /// NumPy name of the type, e.g. `"int64"`.
    pub fn name(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::UInt8 => "uint8",
            DType::Int16 => "int16",
            DType::UInt16 => "uint16",
            DType::Int32 => "int32",
            DType::UInt32 => "uint32",
            DType::Int64 => "int64",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    fn kind(self) -> char {
        match self {
            DType::Bool => 'b',
            DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64 => 'i',
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64 => 'u',
            DType::Float32 | DType::Float64 => 'f',
        }
    }

    fn from_kind_and_size(kind: char, size: usize) -> Option<DType> {
        let dtype = match (kind, size) {
            ('b', 1) => DType::Bool,
            ('i', 1) => DType::Int8,
            ('u', 1) => DType::UInt8,
            ('i', 2) => DType::Int16,
            ('u', 2) => DType::UInt16,
            ('i', 4) => DType::Int32,
            ('u', 4) => DType::UInt32,
            ('i', 8) => DType::Int64,
            ('u', 8) => DType::UInt64,
            ('f', 4) => DType::Float32,
            ('f', 8) => DType::Float64,
            _ => return None,
        };
        Some(dtype)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed `descr` value: element type plus the byte order of the payload.
///
/// Accepted forms are `[<>=|]?[biuf][1248]`, limited to the combinations
/// listed in [`DType`]. For one-byte types the byte order is irrelevant and
/// is recorded as native.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub dtype: DType,
    pub endian: Endian,
}

impl TypeDescriptor {
    pub fn new(dtype: DType, endian: Endian) -> TypeDescriptor {
        TypeDescriptor { dtype, endian }
    }
}

/// Error returned when a `descr` string is not a supported type descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedDescriptor(pub String);

impl std::error::Error for UnsupportedDescriptor {}

impl fmt::Display for UnsupportedDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unsupported type descriptor: {:?}", self.0)
    }
}

impl FromStr for TypeDescriptor {
    type Err = UnsupportedDescriptor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || UnsupportedDescriptor(s.to_owned());

        let mut chars = s.chars().peekable();
        let order = match chars.peek() {
            Some(&c @ ('<' | '>' | '=' | '|')) => {
                chars.next();
                Some(c)
            }
            _ => None,
        };
        let kind = chars.next().ok_or_else(unsupported)?;
        let size = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(unsupported)? as usize;
        if chars.next().is_some() {
            return Err(unsupported());
        }
        let dtype = DType::from_kind_and_size(kind, size).ok_or_else(unsupported)?;

        let endian = match (order, dtype.size()) {
            (Some('<'), _) => Endian::Little,
            (Some('>'), _) => Endian::Big,
            (Some('|'), 1) | (Some('='), _) | (None, _) => Endian::native(),
            // `|` means "not applicable", which is only true of one-byte types.
            _ => return Err(unsupported()),
        };
        Ok(TypeDescriptor { dtype, endian })
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = if self.dtype.size() == 1 {
            '|'
        } else {
            self.endian.prefix()
        };
        write!(f, "{}{}{}", prefix, self.dtype.kind(), self.dtype.size())
    }
}
