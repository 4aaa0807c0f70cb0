//! Trait implementations for primitive numeric types.

use super::{check_descriptor, read_payload, ReadDataError, ReadableElement};
use crate::npy::dtype::{DType, Endian, TypeDescriptor};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io;

impl ReadableElement for u8 {
    const DTYPE: DType = DType::UInt8;

    fn read_to_end_exact_vec<R: io::Read>(
        reader: R,
        type_desc: &TypeDescriptor,
        len: usize,
    ) -> Result<Vec<Self>, ReadDataError> {
        check_descriptor::<Self>(type_desc)?;
        read_payload(reader, type_desc, len)
    }
}

impl ReadableElement for i8 {
    const DTYPE: DType = DType::Int8;

    fn read_to_end_exact_vec<R: io::Read>(
        reader: R,
        type_desc: &TypeDescriptor,
        len: usize,
    ) -> Result<Vec<Self>, ReadDataError> {
        check_descriptor::<Self>(type_desc)?;
        let bytes = read_payload(reader, type_desc, len)?;
        Ok(bytes.into_iter().map(|byte| byte as i8).collect())
    }
}

macro_rules! impl_readable_primitive_multi_byte {
    ($elem:ty, $dtype:expr, $zero:expr, $read_into:ident) => {
        impl ReadableElement for $elem {
            const DTYPE: DType = $dtype;

            fn read_to_end_exact_vec<R: io::Read>(
                reader: R,
                type_desc: &TypeDescriptor,
                len: usize,
            ) -> Result<Vec<Self>, ReadDataError> {
                check_descriptor::<Self>(type_desc)?;
                let bytes = read_payload(reader, type_desc, len)?;
                let mut out = vec![$zero; len];
                match type_desc.endian {
                    Endian::Little => LittleEndian::$read_into(&bytes, &mut out),
                    Endian::Big => BigEndian::$read_into(&bytes, &mut out),
                }
                Ok(out)
            }
        }
    };
}

impl_readable_primitive_multi_byte!(i16, DType::Int16, 0, read_i16_into);
impl_readable_primitive_multi_byte!(i32, DType::Int32, 0, read_i32_into);
impl_readable_primitive_multi_byte!(i64, DType::Int64, 0, read_i64_into);

impl_readable_primitive_multi_byte!(u16, DType::UInt16, 0, read_u16_into);
impl_readable_primitive_multi_byte!(u32, DType::UInt32, 0, read_u32_into);
impl_readable_primitive_multi_byte!(u64, DType::UInt64, 0, read_u64_into);

impl_readable_primitive_multi_byte!(f32, DType::Float32, 0., read_f32_into);
impl_readable_primitive_multi_byte!(f64, DType::Float64, 0., read_f64_into);
