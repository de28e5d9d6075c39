//! Strided-slice descriptor resolution.
//!
//! Turns a possibly-sparse, possibly-negative, mask-augmented slice
//! descriptor into one normalized `(start, stop, step)` range per tensor
//! dimension, with Python slice semantics: negative indices count from the
//! end, out-of-range bounds clamp instead of failing, and a negative step
//! walks the dimension in reverse.

use crate::{Result, TensorError};

/// Raw strided-slice descriptor.
///
/// `begin`, `end` and `strides` hold one entry per specified dimension and
/// may be shorter than the tensor rank; unspecified trailing dimensions are
/// fully selected. Bit `i` (from the least-significant end) of each mask
/// applies to entry `i`: a `begin_mask`/`end_mask` bit replaces the literal
/// bound with its step-direction default, an `ellipsis_mask` bit selects
/// whole dimensions. A single ellipsis bit consumes as many dimensions as
/// needed for the entries after it to line up with the last dimensions of
/// the shape; with multiple bits set, each flagged entry full-selects its
/// own dimension only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceSpec {
    pub begin: Vec<isize>,
    pub end: Vec<isize>,
    pub strides: Vec<isize>,
    pub begin_mask: u32,
    pub end_mask: u32,
    pub ellipsis_mask: u32,
}

/// How the bounds of a single dimension are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimPolicy {
    /// Ellipsis-consumed, or no governing entry: whole dimension, step 1.
    FullSelect,
    /// Governed by spec entry `entry`; either bound may still be replaced by
    /// its masked default.
    Explicit {
        entry: usize,
        begin_masked: bool,
        end_masked: bool,
    },
}

impl SliceSpec {
    /// Create a descriptor with no masks set.
    pub fn new(begin: Vec<isize>, end: Vec<isize>, strides: Vec<isize>) -> Self {
        Self::with_masks(begin, end, strides, 0, 0, 0)
    }

    /// Create a descriptor with explicit mask bit-sets.
    pub fn with_masks(
        begin: Vec<isize>,
        end: Vec<isize>,
        strides: Vec<isize>,
        begin_mask: u32,
        end_mask: u32,
        ellipsis_mask: u32,
    ) -> Self {
        Self {
            begin,
            end,
            strides,
            begin_mask,
            end_mask,
            ellipsis_mask,
        }
    }

    /// Resolve this descriptor against a concrete shape, producing one
    /// normalized range per dimension of `shape`.
    ///
    /// Resolution is deterministic: identical inputs always produce
    /// identical ranges. Fails before producing any range when a stride is
    /// zero or the descriptor names more dimensions than `shape` has.
    pub fn resolve(&self, shape: &[usize]) -> Result<Vec<NormalizedRange>> {
        let rank = shape.len();
        let spec_len = self
            .begin
            .len()
            .max(self.end.len())
            .max(self.strides.len());
        if spec_len > rank {
            return Err(TensorError::rank_mismatch("strided_slice", spec_len, rank));
        }
        for (dim, &stride) in self.strides.iter().enumerate() {
            if stride == 0 {
                return Err(TensorError::invalid_stride("strided_slice", dim));
            }
        }

        let entries = self.entry_map(rank, spec_len);
        Ok(shape
            .iter()
            .zip(entries)
            .map(|(&size, entry)| self.resolve_dim(entry, size))
            .collect())
    }

    /// Map each dimension to the spec entry that governs it, `None` for
    /// dimensions with no entry.
    ///
    /// Without an ellipsis (or with several ellipsis bits) entry `i` binds to
    /// dimension `i`. A single ellipsis bit consumes its own dimension plus
    /// the `rank - spec_len` unspecified ones, so the entries after it bind
    /// to the last dimensions of the shape.
    fn entry_map(&self, rank: usize, spec_len: usize) -> Vec<Option<usize>> {
        let mut map = vec![None; rank];
        let single_ellipsis = (self.ellipsis_mask.count_ones() == 1)
            .then(|| self.ellipsis_mask.trailing_zeros() as usize)
            .filter(|&pos| pos < spec_len);
        match single_ellipsis {
            Some(pos) => {
                let gap = rank - spec_len + 1;
                for entry in 0..pos {
                    map[entry] = Some(entry);
                }
                for entry in pos + 1..spec_len {
                    map[entry + gap - 1] = Some(entry);
                }
            }
            None => {
                for entry in 0..spec_len {
                    map[entry] = Some(entry);
                }
            }
        }
        map
    }

    fn policy(&self, entry: Option<usize>) -> DimPolicy {
        let entry = match entry {
            Some(entry) => entry,
            None => return DimPolicy::FullSelect,
        };
        if mask_bit(self.ellipsis_mask, entry) {
            return DimPolicy::FullSelect;
        }
        let explicit = entry < self.begin.len()
            && entry < self.end.len()
            && entry < self.strides.len();
        if !explicit {
            return DimPolicy::FullSelect;
        }
        DimPolicy::Explicit {
            entry,
            begin_masked: mask_bit(self.begin_mask, entry),
            end_masked: mask_bit(self.end_mask, entry),
        }
    }

    fn resolve_dim(&self, entry: Option<usize>, size: usize) -> NormalizedRange {
        let size = size as isize;
        match self.policy(entry) {
            DimPolicy::FullSelect => NormalizedRange::full(size),
            DimPolicy::Explicit {
                entry,
                begin_masked,
                end_masked,
            } => {
                let step = self.strides[entry];
                let start = if begin_masked {
                    if step > 0 {
                        0
                    } else {
                        size - 1
                    }
                } else {
                    clamp_index(self.begin[entry], size, step)
                };
                let stop = if end_masked {
                    if step > 0 {
                        size
                    } else {
                        -1
                    }
                } else {
                    clamp_index(self.end[entry], size, step)
                };
                NormalizedRange::new(start, stop, step)
            }
        }
    }
}

/// Normalize a possibly-negative index and clamp it to the valid bound
/// interval for the step direction: `[0, size]` for a forward step,
/// `[-1, size - 1]` for a backward one.
fn clamp_index(raw: isize, size: isize, step: isize) -> isize {
    let index = if raw < 0 { raw + size } else { raw };
    if step > 0 {
        index.clamp(0, size)
    } else {
        index.clamp(-1, size - 1)
    }
}

fn mask_bit(mask: u32, dim: usize) -> bool {
    dim < u32::BITS as usize && mask & (1 << dim) != 0
}

/// Python-slice-equivalent index range for one dimension.
///
/// Selects `start, start + step, start + 2 * step, ...` while the value stays
/// strictly on `start`'s side of `stop`; `count` is the length of that
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRange {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub count: usize,
}

impl NormalizedRange {
    /// Build a range from already-clamped bounds. `step` must be non-zero.
    pub fn new(start: isize, stop: isize, step: isize) -> Self {
        debug_assert!(step != 0);
        let span = stop - start;
        let count = if span == 0 || (span > 0) != (step > 0) {
            0
        } else {
            ((span.abs() + step.abs() - 1) / step.abs()) as usize
        };
        Self {
            start,
            stop,
            step,
            count,
        }
    }

    /// The range selecting an entire dimension of `size` elements.
    pub fn full(size: isize) -> Self {
        Self::new(0, size, 1)
    }

    /// Source index in the original dimension for output position `j`.
    pub fn index_at(&self, j: usize) -> usize {
        debug_assert!(j < self.count);
        (self.start + j as isize * self.step) as usize
    }
}

/// Shape of the slice output: the per-dimension selection counts.
pub fn sliced_shape(ranges: &[NormalizedRange]) -> Vec<usize> {
    ranges.iter().map(|r| r.count).collect()
}

/// Iterator over all multi-indices of a shape, in row-major order.
pub struct IndexIter {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl IndexIter {
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            done: shape.contains(&0),
        }
    }
}

impl Iterator for IndexIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        if self.shape.is_empty() {
            // Rank-0 shape has exactly one (empty) multi-index.
            self.done = true;
            return Some(result);
        }

        for i in (0..self.shape.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.shape[i] {
                break;
            }
            if i == 0 {
                self.done = true;
            } else {
                self.current[i] = 0;
            }
        }

        Some(result)
    }
}
