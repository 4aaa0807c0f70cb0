//! This crate reads NumPy [`.npy`] files into owned, row-major arrays.
//!
//! [`.npy`]: https://numpy.org/doc/stable/reference/generated/numpy.lib.format.html
//!
//! Use [`load`] when the element type is known at compile time and
//! [`load_dyn`] when it is chosen by the file. Any `io::Read` source can be
//! decoded with [`ReadNpyExt`].
//!
//! ```no_run
//! use npyfile::{load, NdArray, ReadNpyError};
//!
//! let arr: NdArray<i64> = load("one_d.npy")?;
//! assert_eq!(arr.shape(), &[32]);
//! # Ok::<_, ReadNpyError>(())
//! ```
//!
#![cfg_attr(
    feature = "ndarray",
    doc = "With the `ndarray` feature (enabled by default), arrays convert into"
)]
#![cfg_attr(
    feature = "ndarray",
    doc = "[`ndarray::ArrayD`] with [`NdArray::into_ndarray`]."
)]
//!
//! Events are emitted through [`tracing`] at `debug` and `trace` level; the
//! crate never installs a subscriber.
//!
//! # Limitations
//!
//! * Only `bool`, fixed-size integers and `float32`/`float64` elements are
//!   supported, in either byte order.
//!
//! * Arrays stored in Fortran (column-major) order are rejected, unless at
//!   most one axis is longer than 1.
//!
//! * Writing `.npy` files and reading `.npz` archives are not supported.

mod array;
mod dynamic;
mod npy;

pub use crate::array::{NdArray, ShapeError};
pub use crate::dynamic::{load_dyn, DynArray};
pub use crate::npy::dtype::{DType, Endian, TypeDescriptor, UnsupportedDescriptor};
pub use crate::npy::header::{FormatError, Header, ReadHeaderError};
pub use crate::npy::{load, ReadDataError, ReadNpyError, ReadNpyExt, ReadableElement};
