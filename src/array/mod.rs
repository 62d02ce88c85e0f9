//! The vectorized array engine.
//!
//! Every operation walks its array in strides of `N = width::<T>()` elements
//! and deals with the trailing `len % N` elements explicitly, so any array
//! length is handled without reading or writing out of bounds.
//!
//! # Available Operations
//!
//! ## Reductions
//! - [`fold`], [`reduce`]: generic lane-wise accumulation plus a lane combiner
//! - [`sum`], [`average`]
//!
//! ## Transforms
//! - [`map`], [`map_in_place`]: elementwise lane-group functions
//! - [`create`], [`init`], [`clear`]: construction and reset
//!
//! ## Searches and order statistics
//! - [`exists`], [`forall`], [`simple_exists`]
//! - [`max`], [`min`]
//!
//! ## Leftover helpers
//! - [`build_leftover`], [`merge_leftover`]: for callers writing their own loops
//!
//! # Thread Safety
//!
//! All operations run to completion on the calling thread and keep their
//! working state on the stack. [`map_in_place`] and [`clear`] take `&mut`
//! access to the caller's array for the duration of the call.

mod ext;
mod leftover;
mod reduce;
mod search;
mod transform;

pub use ext::SimdSliceExt;
pub use leftover::{build_leftover, merge_leftover};
pub use reduce::{average, fold, reduce, sum};
pub use search::{exists, forall, max, min, simple_exists};
pub use transform::{clear, create, init, map, map_in_place};
