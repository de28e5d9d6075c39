//! # TenSlice Core
//!
//! Tensor container and strided-slice resolution for TenSlice.
//!
//! The crate covers one operator family: multi-dimensional strided slicing
//! with Python-style negative indices, negative steps, and TensorFlow-style
//! `begin`/`end`/`ellipsis` masks. [`SliceSpec::resolve`] turns a raw
//! descriptor into one [`NormalizedRange`] per dimension, and
//! [`ops::strided_slice`] gathers the selected elements. The matching
//! gradient scatter lives in `tenslice-autograd`.

pub mod error;
pub mod ops;
pub mod shape;
pub mod strided;
pub mod tensor;

pub use error::{Result, TensorError};
pub use shape::Shape;
pub use strided::{NormalizedRange, SliceSpec};
pub use tensor::Tensor;
