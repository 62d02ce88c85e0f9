//! Vector-width-aware array operations.
//!
//! `simdarray` reduces, maps, builds and searches arrays of numbers one lane
//! group at a time, where a lane group holds as many elements as the build
//! target's widest vector register. Every operation stays exact for arrays
//! whose length is not a multiple of that width: the trailing elements are
//! either padded in a way that cannot change the answer, covered by an
//! overlapping final window, or finished with a scalar loop.
//!
//! ```rust
//! use simdarray::array;
//!
//! let data = [1, 2, 3, 4, 5, 6, 7];
//! assert_eq!(array::sum(&data), 28);
//! assert_eq!(array::max(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), 9);
//! assert!(array::simple_exists(5, &[3, 1, 4, 1, 5, 9, 2, 6]));
//! assert_eq!(array::create(5, 9), vec![9, 9, 9, 9, 9]);
//! ```

pub mod array;
pub mod error;
pub mod ndarray_ext;
pub mod simd;

pub use array::SimdSliceExt;
pub use error::{ArrayError, Result};
pub use ndarray_ext::{NdArraySimdExt, NdArraySimdMutExt};
pub use simd::{width, LaneGroup, SimdElement, REGISTER_BYTES};
