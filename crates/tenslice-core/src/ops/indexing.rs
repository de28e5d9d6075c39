//! Strided-slice forward gather.

use crate::strided::{sliced_shape, IndexIter, SliceSpec};
use crate::{Result, Tensor};
use num_traits::Zero;
use scirs2_core::ndarray::{ArrayD, IxDyn};

/// Extract the strided slice of `tensor` described by `spec`.
///
/// The output shape is the per-dimension selection count; element
/// `(j_0, ..., j_{R-1})` of the output is element
/// `(start_0 + j_0 * step_0, ..., start_{R-1} + j_{R-1} * step_{R-1})` of the
/// input.
pub fn strided_slice<T>(tensor: &Tensor<T>, spec: &SliceSpec) -> Result<Tensor<T>>
where
    T: Clone + Zero,
{
    let ranges = spec.resolve(tensor.shape().dims())?;
    let out_shape = sliced_shape(&ranges);

    let mut result = ArrayD::<T>::zeros(IxDyn(&out_shape));
    let mut src = vec![0usize; ranges.len()];
    for out_index in IndexIter::new(&out_shape) {
        for (dim, (&j, range)) in out_index.iter().zip(&ranges).enumerate() {
            src[dim] = range.index_at(j);
        }
        result[IxDyn(&out_index)] = tensor.array()[IxDyn(&src)].clone();
    }

    Ok(Tensor::from_array(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota(shape: &[usize]) -> Tensor<f32> {
        let len: usize = shape.iter().product();
        Tensor::from_data((0..len).map(|v| v as f32).collect(), shape).unwrap()
    }

    #[test]
    fn test_strided_slice_1d_step() {
        let x = iota(&[6]);
        let out = strided_slice(&x, &SliceSpec::new(vec![1], vec![6], vec![2])).unwrap();
        assert_eq!(out.shape().dims(), &[3]);
        assert_eq!(out.as_slice().unwrap(), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_strided_slice_1d_reverse() {
        let x = iota(&[5]);
        let spec = SliceSpec::with_masks(vec![4], vec![0], vec![-1], 0, 0b1, 0);
        let out = strided_slice(&x, &spec).unwrap();
        assert_eq!(out.as_slice().unwrap(), &[4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_strided_slice_2d() {
        let x = iota(&[3, 4]);
        let out = strided_slice(&x, &SliceSpec::new(vec![0, 1], vec![3, 4], vec![2, 2])).unwrap();
        assert_eq!(out.shape().dims(), &[2, 2]);
        assert_eq!(out.as_slice().unwrap(), &[1.0, 3.0, 9.0, 11.0]);
    }

    #[test]
    fn test_strided_slice_4d() {
        let x = iota(&[2, 3, 4, 5]);
        let spec = SliceSpec::new(vec![1, 0, 0, 2], vec![2, 2, 2, 4], vec![1, 1, 1, 1]);
        let out = strided_slice(&x, &spec).unwrap();
        assert_eq!(out.shape().dims(), &[1, 2, 2, 2]);
        // out[0, i1, i2, i3] == x[1, i1, i2, 2 + i3]
        assert_eq!(out.get(&[0, 0, 0, 0]), x.get(&[1, 0, 0, 2]));
        assert_eq!(out.get(&[0, 1, 1, 1]), x.get(&[1, 1, 1, 3]));
    }

    #[test]
    fn test_strided_slice_empty_result() {
        let x = iota(&[4]);
        let out = strided_slice(&x, &SliceSpec::new(vec![2], vec![2], vec![1])).unwrap();
        assert_eq!(out.shape().dims(), &[0]);
    }
}
