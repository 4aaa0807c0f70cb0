//! An owned, row-major N-dimensional array.

use std::error::Error;
use std::fmt;
use std::ops::Index;

/// An error constructing an [`NdArray`] from a shape and a data vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The product of the shape does not equal the number of elements.
    IncompatibleShape { shape: Vec<usize>, len: usize },
    /// The product of the shape overflows `usize`.
    Overflow,
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::IncompatibleShape { shape, len } => write!(
                f,
                "shape {:?} is incompatible with {} elements",
                shape, len
            ),
            ShapeError::Overflow => write!(f, "number of elements overflows usize"),
        }
    }
}

/// Number of elements in an array of `shape`, or `None` on overflow.
///
/// A shape with a zero-length axis always holds zero elements, however large
/// the other axes are.
pub(crate) fn shape_size(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &len| acc.checked_mul(len))
}

/// Row-major strides, in elements, for `shape`.
///
/// All strides are zero if any axis has length zero. Otherwise the caller
/// must ensure that the product of `shape` does not overflow.
fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    if shape.contains(&0) {
        return vec![0; shape.len()];
    }
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// An owned N-dimensional array stored contiguously in row-major order.
///
/// The last axis varies fastest, so for a 2-D array the element at
/// `[i, j]` is `as_slice()[i * shape[1] + j]`.
///
/// # Example
///
/// ```
/// use npyfile::NdArray;
///
/// let arr = NdArray::from_shape_vec(vec![2, 3], vec![1, 2, 3, 4, 5, 6])?;
/// assert_eq!(arr.strides(), &[3, 1]);
/// assert_eq!(arr[[1, 0]], 4);
/// assert_eq!(arr.row(1), Some(&[4, 5, 6][..]));
/// assert_eq!(arr.column(2), Some(vec![3, 6]));
/// # Ok::<_, npyfile::ShapeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NdArray<A> {
    data: Vec<A>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<A> NdArray<A> {
    /// Creates an array from a shape and the elements in row-major order.
    ///
    /// **Errors** if the product of `shape` is not `data.len()`.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<A>) -> Result<Self, ShapeError> {
        let size = shape_size(&shape).ok_or(ShapeError::Overflow)?;
        if size != data.len() {
            return Err(ShapeError::IncompatibleShape {
                shape,
                len: data.len(),
            });
        }
        Ok(Self::from_shape_vec_unchecked(shape, data))
    }

    /// Creates an array without checking the shape against `data`.
    pub(crate) fn from_shape_vec_unchecked(shape: Vec<usize>, data: Vec<A>) -> Self {
        debug_assert_eq!(shape_size(&shape), Some(data.len()));
        let strides = row_major_strides(&shape);
        NdArray {
            data,
            shape,
            strides,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major strides of each axis, counted in elements.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Position in the flat buffer of the element at `index`, or `None` if
    /// `index` has the wrong length or is out of bounds.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &len), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= len {
                return None;
            }
            offset += i * stride;
        }
        Some(offset)
    }

    /// Returns a reference to the element at `index`, or `None` if the index
    /// is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&A> {
        self.offset(index).map(|offset| &self.data[offset])
    }

    /// Returns row `i` of a 2-D array.
    ///
    /// Returns `None` if the array is not 2-D or `i` is out of bounds.
    pub fn row(&self, i: usize) -> Option<&[A]> {
        match *self.shape {
            [rows, cols] if i < rows => Some(&self.data[i * cols..(i + 1) * cols]),
            _ => None,
        }
    }

    /// Returns a copy of column `j` of a 2-D array.
    ///
    /// Returns `None` if the array is not 2-D or `j` is out of bounds.
    pub fn column(&self, j: usize) -> Option<Vec<A>>
    where
        A: Clone,
    {
        match *self.shape {
            [rows, cols] if j < cols => {
                Some((0..rows).map(|i| self.data[i * cols + j].clone()).collect())
            }
            _ => None,
        }
    }

    /// Returns a copy of the sub-array at `index` along `axis`, which has one
    /// fewer dimension than `self`.
    ///
    /// Returns `None` if `axis` or `index` is out of bounds.
    pub fn index_axis(&self, axis: usize, index: usize) -> Option<NdArray<A>>
    where
        A: Clone,
    {
        if axis >= self.ndim() || index >= self.shape[axis] {
            return None;
        }
        let len = self.shape[axis];
        let stride = self.strides[axis];
        // The data is a sequence of blocks of `len * stride` elements, from
        // each of which one run of `stride` elements is kept.
        let data = if self.data.is_empty() {
            Vec::new()
        } else {
            self.data
                .chunks(len * stride)
                .flat_map(|block| block[index * stride..(index + 1) * stride].iter().cloned())
                .collect()
        };
        let mut shape = self.shape.clone();
        shape.remove(axis);
        Some(NdArray::from_shape_vec_unchecked(shape, data))
    }
}

impl<A> Index<&[usize]> for NdArray<A> {
    type Output = A;

    /// **Panics** if `index` is out of bounds.
    fn index(&self, index: &[usize]) -> &A {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!(
                "index {:?} is out of bounds for array of shape {:?}",
                index, self.shape
            ),
        }
    }
}

impl<A, const N: usize> Index<[usize; N]> for NdArray<A> {
    type Output = A;

    /// **Panics** if `index` is out of bounds.
    fn index(&self, index: [usize; N]) -> &A {
        &self[&index[..]]
    }
}

#[cfg(feature = "ndarray")]
mod ndarray_impls {
    use super::NdArray;
    use ndarray::{ArrayD, IxDyn};

    impl<A> NdArray<A> {
        /// Converts into an [`ndarray::ArrayD`] in standard layout.
        pub fn into_ndarray(self) -> ArrayD<A> {
            let NdArray { data, shape, .. } = self;
            match ArrayD::from_shape_vec(IxDyn(&shape), data) {
                Ok(arr) => arr,
                // The shape was checked against the data on construction.
                Err(err) => unreachable!("inconsistent NdArray: {}", err),
            }
        }
    }

    impl<A> From<NdArray<A>> for ArrayD<A> {
        fn from(arr: NdArray<A>) -> ArrayD<A> {
            arr.into_ndarray()
        }
    }
}
