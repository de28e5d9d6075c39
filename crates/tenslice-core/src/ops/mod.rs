//! Tensor operations.

pub mod indexing;

pub use indexing::strided_slice;
