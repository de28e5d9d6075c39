//! Gradient computation for the strided-slice operation.

use num_traits::Zero;
use scirs2_core::ndarray::{ArrayD, IxDyn};
use tenslice_core::strided::{sliced_shape, IndexIter, SliceSpec};
use tenslice_core::{Result, Tensor, TensorError};

/// Backward pass for the strided-slice operation.
///
/// For `y = strided_slice(x, spec)` with `x` of shape `input_shape`, returns
/// `dL/dx` given `grad_output = dL/dy`: a tensor of `input_shape` that is
/// zero everywhere except at the sliced coordinates, which receive the
/// corresponding upstream values.
///
/// `grad_output`'s shape must equal the slice output shape computed from
/// `spec` and `input_shape`; resolution errors and the shape check are
/// reported before any output is allocated.
pub fn strided_slice_grad<T>(
    grad_output: &Tensor<T>,
    input_shape: &[usize],
    spec: &SliceSpec,
) -> Result<Tensor<T>>
where
    T: Clone + Zero,
{
    let ranges = spec.resolve(input_shape)?;
    let out_shape = sliced_shape(&ranges);
    if grad_output.shape().dims() != out_shape.as_slice() {
        return Err(TensorError::shape_mismatch(
            "strided_slice_grad",
            format!("{out_shape:?}"),
            format!("{:?}", grad_output.shape().dims()),
        ));
    }

    let mut grad_input = ArrayD::<T>::zeros(IxDyn(input_shape));
    let mut dst = vec![0usize; ranges.len()];
    for src_index in IndexIter::new(&out_shape) {
        for (dim, (&j, range)) in src_index.iter().zip(&ranges).enumerate() {
            dst[dim] = range.index_at(j);
        }
        // Each dimension's index sequence is strictly monotonic, so every
        // destination coordinate is touched at most once; a plain write is
        // sufficient.
        grad_input[IxDyn(&dst)] = grad_output.array()[IxDyn(&src_index)].clone();
    }

    Ok(Tensor::from_array(grad_input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grad_1d_step() {
        let upstream = Tensor::from_data(vec![10.0f32, 20.0, 30.0], &[3]).unwrap();
        let spec = SliceSpec::new(vec![0], vec![6], vec![2]);
        let grad = strided_slice_grad(&upstream, &[6], &spec).unwrap();
        assert_eq!(grad.as_slice().unwrap(), &[10.0, 0.0, 20.0, 0.0, 30.0, 0.0]);
    }

    #[test]
    fn test_grad_1d_reverse_order() {
        let upstream = Tensor::from_data(vec![1.0f32, 2.0], &[2]).unwrap();
        let spec = SliceSpec::new(vec![4], vec![0], vec![-2]);
        let grad = strided_slice_grad(&upstream, &[5], &spec).unwrap();
        // Index sequence is 4, 2: descending by 2, stopping above 0.
        assert_eq!(grad.as_slice().unwrap(), &[0.0, 0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_grad_rejects_wrong_upstream_shape() {
        let upstream = Tensor::<f32>::ones(&[2, 2]);
        let spec = SliceSpec::new(vec![0], vec![2], vec![1]);
        let err = strided_slice_grad(&upstream, &[4, 4], &spec).unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_grad_propagates_resolver_errors() {
        let upstream = Tensor::<f32>::ones(&[2]);
        let spec = SliceSpec::new(vec![0], vec![2], vec![0]);
        let err = strided_slice_grad(&upstream, &[4], &spec).unwrap_err();
        assert_eq!(err, TensorError::invalid_stride("strided_slice", 0));
    }
}
