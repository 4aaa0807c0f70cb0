//! Arrays whose element type is determined by the file.

use crate::npy::dtype::DType;
use crate::npy::header::Header;
use crate::npy::{read_c_order_header, ReadNpyError, ReadNpyExt, ReadableElement};
use crate::NdArray;
use std::io;
use std::path::Path;

/// An array of any supported element type.
#[derive(Clone, Debug, PartialEq)]
pub enum DynArray {
    Bool(NdArray<bool>),
    Int8(NdArray<i8>),
    UInt8(NdArray<u8>),
    Int16(NdArray<i16>),
    UInt16(NdArray<u16>),
    Int32(NdArray<i32>),
    UInt32(NdArray<u32>),
    Int64(NdArray<i64>),
    UInt64(NdArray<u64>),
    Float32(NdArray<f32>),
    Float64(NdArray<f64>),
}

/// Applies `$body` to the array inside any variant of `$value`.
macro_rules! with_array {
    ($value:expr, $arr:ident => $body:expr) => {
        match $value {
            DynArray::Bool($arr) => $body,
            DynArray::Int8($arr) => $body,
            DynArray::UInt8($arr) => $body,
            DynArray::Int16($arr) => $body,
            DynArray::UInt16($arr) => $body,
            DynArray::Int32($arr) => $body,
            DynArray::UInt32($arr) => $body,
            DynArray::Int64($arr) => $body,
            DynArray::UInt64($arr) => $body,
            DynArray::Float32($arr) => $body,
            DynArray::Float64($arr) => $body,
        }
    };
}

macro_rules! impl_accessors {
    ($($variant:ident, $elem:ty, $as_fn:ident, $into_fn:ident;)*) => {
        impl DynArray {
            $(
                #[doc = concat!("Returns the array if its elements are `", stringify!($elem), "`.")]
                pub fn $as_fn(&self) -> Option<&NdArray<$elem>> {
                    match self {
                        DynArray::$variant(arr) => Some(arr),
                        _ => None,
                    }
                }

                #[doc = concat!("Converts into the inner array if its elements are `", stringify!($elem), "`.")]
                pub fn $into_fn(self) -> Option<NdArray<$elem>> {
                    match self {
                        DynArray::$variant(arr) => Some(arr),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<NdArray<$elem>> for DynArray {
                fn from(arr: NdArray<$elem>) -> DynArray {
                    DynArray::$variant(arr)
                }
            }
        )*
    };
}

impl_accessors! {
    Bool, bool, as_bool, into_bool;
    Int8, i8, as_i8, into_i8;
    UInt8, u8, as_u8, into_u8;
    Int16, i16, as_i16, into_i16;
    UInt16, u16, as_u16, into_u16;
    Int32, i32, as_i32, into_i32;
    UInt32, u32, as_u32, into_u32;
    Int64, i64, as_i64, into_i64;
    UInt64, u64, as_u64, into_u64;
    Float32, f32, as_f32, into_f32;
    Float64, f64, as_f64, into_f64;
}

impl DynArray {
    /// Element type of the array.
    pub fn dtype(&self) -> DType {
        fn dtype_of<A: ReadableElement>(_: &NdArray<A>) -> DType {
            A::DTYPE
        }
        with_array!(self, arr => dtype_of(arr))
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, arr => arr.shape())
    }

    pub fn ndim(&self) -> usize {
        with_array!(self, arr => arr.ndim())
    }

    pub fn len(&self) -> usize {
        with_array!(self, arr => arr.len())
    }

    pub fn is_empty(&self) -> bool {
        with_array!(self, arr => arr.is_empty())
    }
}

impl ReadNpyExt for DynArray {
    fn read_npy<R: io::Read>(mut reader: R) -> Result<Self, ReadNpyError> {
        fn read_data<A, R>(
            reader: R,
            header: Header,
            len: usize,
        ) -> Result<NdArray<A>, ReadNpyError>
        where
            A: ReadableElement,
            R: io::Read,
        {
            let data = A::read_to_end_exact_vec(reader, &header.type_descriptor, len)?;
            Ok(NdArray::from_shape_vec_unchecked(header.shape, data))
        }

        let (header, len) = read_c_order_header(&mut reader)?;
        Ok(match header.type_descriptor.dtype {
            DType::Bool => read_data::<bool, _>(reader, header, len)?.into(),
            DType::Int8 => read_data::<i8, _>(reader, header, len)?.into(),
            DType::UInt8 => read_data::<u8, _>(reader, header, len)?.into(),
            DType::Int16 => read_data::<i16, _>(reader, header, len)?.into(),
            DType::UInt16 => read_data::<u16, _>(reader, header, len)?.into(),
            DType::Int32 => read_data::<i32, _>(reader, header, len)?.into(),
            DType::UInt32 => read_data::<u32, _>(reader, header, len)?.into(),
            DType::Int64 => read_data::<i64, _>(reader, header, len)?.into(),
            DType::UInt64 => read_data::<u64, _>(reader, header, len)?.into(),
            DType::Float32 => read_data::<f32, _>(reader, header, len)?.into(),
            DType::Float64 => read_data::<f64, _>(reader, header, len)?.into(),
        })
    }
}

/// Loads an array of whichever element type the `.npy` file at `path`
/// declares.
///
/// # Example
///
/// ```no_run
/// use npyfile::{load_dyn, DType, ReadNpyError};
///
/// let arr = load_dyn("one_d.npy")?;
/// if arr.dtype() == DType::UInt32 {
///     let arr = arr.into_u32().unwrap();
///     println!("{:?}", arr.as_slice());
/// }
/// # Ok::<_, ReadNpyError>(())
/// ```
pub fn load_dyn<P: AsRef<Path>>(path: P) -> Result<DynArray, ReadNpyError> {
    crate::npy::load(path)
}
