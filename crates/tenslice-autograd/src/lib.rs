//! # TenSlice Automatic Differentiation
//!
//! Gradient operations for the TenSlice strided-slice operator pair.
//!
//! For `y = strided_slice(x, spec)`, [`strided_slice_grad`] maps the gradient
//! flowing into `y` back onto `x`'s shape: a zero-filled tensor with each
//! upstream element scattered to the input coordinate it was sliced from.
//! No graph or tape machinery is involved; the surrounding framework calls
//! the function directly with whatever upstream gradient it holds.

pub mod grad_ops;

pub use grad_ops::strided_slice_grad;
