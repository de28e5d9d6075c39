//! Dense CPU tensor container.
//!
//! A thin wrapper over `ArrayD` that carries its `Shape` alongside the data.
//! Device placement and execution mode are explicit non-concerns here: every
//! tensor lives in host memory and every operation is a synchronous pass over
//! it.

use crate::{Result, Shape, TensorError};
use num_traits::{One, Zero};
use scirs2_core::ndarray::{ArrayD, IxDyn};

#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    data: ArrayD<T>,
    shape: Shape,
}

impl<T> Tensor<T> {
    /// Get the shape of the tensor
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the number of dimensions (rank)
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Get the total number of elements
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    /// Get the underlying data as a contiguous slice
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Get a reference to the underlying ndarray storage
    pub fn array(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Get the value at a specific multi-index
    pub fn get(&self, index: &[usize]) -> Option<T>
    where
        T: Clone,
    {
        if index.len() != self.data.ndim() {
            return None;
        }
        self.data.get(index).cloned()
    }
}

impl<T: Clone> Tensor<T> {
    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self
    where
        T: Zero,
    {
        Self::from_array(ArrayD::zeros(IxDyn(shape)))
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self
    where
        T: One,
    {
        Self::from_array(ArrayD::ones(IxDyn(shape)))
    }

    /// Create a tensor from raw data with the specified shape
    pub fn from_data(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let total_elements: usize = shape.iter().product();
        if data.len() != total_elements {
            return Err(TensorError::invalid_shape(
                "from_data",
                format!(
                    "Data length {} does not match shape {:?} (expected {} elements)",
                    data.len(),
                    shape,
                    total_elements
                ),
            ));
        }

        let array = ArrayD::from_shape_vec(IxDyn(shape), data)
            .map_err(|e| TensorError::invalid_shape("from_data", e.to_string()))?;
        Ok(Self::from_array(array))
    }

    /// Create a tensor from an existing ndarray
    pub fn from_array(array: ArrayD<T>) -> Self {
        let shape = Shape::from_slice(array.shape());
        Self { data: array, shape }
    }
}
