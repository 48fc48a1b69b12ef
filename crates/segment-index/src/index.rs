//! Segment tree answering range minimum queries with point updates
//!
//! The tree is stored in a flat array with 1-based numbering: the root is node `1`, and the
//! children of node `k` are `2k` and `2k + 1`. Each node covers a contiguous interval of leaves
//! and stores the *position* of the minimum leaf in it, not the value itself.
//!
//! The number of leaves is always a power of two, so the tree is perfect and the leaf of
//! position `p` lives at node `capacity + p`. Indices with other lengths are padded with
//! [`Value::PADDING`], which never wins a comparison against a real value.
//!
//! When several positions hold the same minimal value, the leftmost one is reported. This rule
//! is applied both when merging children after an update and when combining partial results of
//! a query.

use std::ops::{Bound, RangeBounds};

use crate::{Error, Result, num_traits::Value};

const ROOT: usize = 1;

/// Minimum value of a range together with its position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinAndPos<V> {
    value: V,
    pos: usize,
}

impl<V: Copy> MinAndPos<V> {
    pub fn new(value: V, pos: usize) -> Self {
        Self { value, pos }
    }

    pub fn val(&self) -> V {
        self.value
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}

/// An index over a fixed number of values, supporting point updates and range argmin queries
/// in `O(log n)`.
#[derive(Debug, Clone)]
pub struct SegmentIndex<V: Value> {
    len: usize,       // Number of real positions
    values: Vec<V>,   // Leaf values, padded to a power of two
    tree: Vec<usize>, // Position of the minimum of each node, slot 0 is unused
}

impl<V: Value> SegmentIndex<V> {
    /// Create an index of `len` positions, all holding [`Value::ZERO`]
    ///
    /// Until real data is loaded with [`update`](Self::update), every query reports the leftmost
    /// position of its range.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            log::debug!("rejected segment index without leaves");
            return Err(Error::Empty);
        }
        let mut values = vec![V::ZERO; len];
        values.resize(len.next_power_of_two(), V::PADDING);
        Ok(Self::with_leaves(len, values))
    }

    /// Create an index holding the given values
    pub fn from_values(values: &[V]) -> Result<Self> {
        Self::try_from_iter(values.iter().copied())
    }

    /// Create an index from an iterator of values, building the tree bottom-up in `O(n)`
    pub fn try_from_iter(iter: impl IntoIterator<Item = V>) -> Result<Self> {
        let mut values: Vec<V> = iter.into_iter().collect();
        let len = values.len();
        if len == 0 {
            log::debug!("rejected segment index without leaves");
            return Err(Error::Empty);
        }
        if let Some(position) = values.iter().position(|value| value.is_nan()) {
            log::debug!("rejected NaN at position {position} of initial values");
            return Err(Error::NotANumber { position });
        }
        values.resize(len.next_power_of_two(), V::PADDING);
        Ok(Self::with_leaves(len, values))
    }

    fn with_leaves(len: usize, values: Vec<V>) -> Self {
        let capacity = values.len();
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(len <= capacity);

        let mut tree = vec![0; capacity << 1];
        for (pos, leaf) in tree[capacity..].iter_mut().enumerate() {
            *leaf = pos;
        }

        let mut index = Self { len, values, tree };
        for node in (ROOT..capacity).rev() {
            index.pull(node);
        }

        log::debug!("built segment index of {len} positions over {capacity} leaves");
        index
    }

    /// Number of positions in the index
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false, as an index has at least one position
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves of the tree, i.e. `len` rounded up to a power of two
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Value stored at `position`, or `None` if it is out of range
    pub fn get(&self, position: usize) -> Option<V> {
        (position < self.len).then(|| self.values[position])
    }

    /// All values in position order, without padding
    pub fn values(&self) -> &[V] {
        &self.values[..self.len]
    }

    /// Set the value at `position` and repair the tree along the path to the root
    ///
    /// `NaN` is rejected, leaving the index unchanged.
    pub fn update(&mut self, position: usize, value: V) -> Result<()> {
        self.check_position(position)?;
        if value.is_nan() {
            log::debug!("rejected NaN update of position {position}");
            return Err(Error::NotANumber { position });
        }
        log::trace!("update position {position} to {value:?}");
        self.update_node(ROOT, 0, self.capacity() - 1, position, value);
        Ok(())
    }

    /// Position of the minimum value in the inclusive interval `[low, high]`
    pub fn min_position(&self, low: usize, high: usize) -> Result<usize> {
        self.check_position(high)?;
        if low > high {
            log::debug!("rejected query of inverted range [{low}, {high}]");
            return Err(Error::InvalidRange { low, high });
        }
        // A validated range always overlaps the root
        self.query_node(ROOT, 0, self.capacity() - 1, low, high)
            .ok_or(Error::InvalidRange { low, high })
    }

    /// Minimum value and its position within `range`
    pub fn min_in(&self, range: impl RangeBounds<usize>) -> Result<MinAndPos<V>> {
        let low = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => match start.checked_add(1) {
                Some(low) => low,
                None => {
                    log::debug!("rejected query starting after position {start}");
                    return Err(Error::OutOfRange {
                        position: start,
                        len: self.len,
                    });
                }
            },
            Bound::Unbounded => 0,
        };
        let high = match range.end_bound() {
            Bound::Included(&end) => end,
            Bound::Excluded(&end) => match end.checked_sub(1) {
                Some(high) => high,
                None => {
                    log::debug!("rejected query of empty range ending at 0");
                    return Err(Error::EmptyRange);
                }
            },
            Bound::Unbounded => self.len - 1,
        };
        if low > high {
            log::debug!("rejected query of empty range [{low}, {high}]");
            return Err(Error::EmptyRange);
        }

        let pos = self.min_position(low, high)?;
        Ok(MinAndPos::new(self.values[pos], pos))
    }

    /// Minimum value over all positions, in `O(1)`
    pub fn argmin(&self) -> MinAndPos<V> {
        // Padding sits right of every real position and never compares smaller,
        // so the leftmost minimum of the root is always a real position.
        let pos = self.tree[ROOT];
        debug_assert!(pos < self.len);
        MinAndPos::new(self.values[pos], pos)
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.len {
            Ok(())
        } else {
            log::debug!(
                "rejected position {position} of segment index with {} positions",
                self.len
            );
            Err(Error::OutOfRange {
                position,
                len: self.len,
            })
        }
    }

    /// Leftmost of two candidate positions holding the smaller value
    ///
    /// `left` must be lower than `right`.
    #[inline]
    fn leftmost_min(&self, left: usize, right: usize) -> usize {
        if self.values[right] < self.values[left] {
            right
        } else {
            left
        }
    }

    /// Recompute `node` from its two children
    #[inline]
    fn pull(&mut self, node: usize) {
        let left = self.tree[node << 1];
        let right = self.tree[(node << 1) | 1];
        self.tree[node] = self.leftmost_min(left, right);
    }

    /// `node` covers `[i, j]` which must contain `position`
    fn update_node(&mut self, node: usize, i: usize, j: usize, position: usize, value: V) {
        if i == j {
            self.values[position] = value;
            self.tree[node] = i;
            return;
        }

        let mid = i + (j - i) / 2;
        if position <= mid {
            self.update_node(node << 1, i, mid, position, value);
        } else {
            self.update_node((node << 1) | 1, mid + 1, j, position, value);
        }
        self.pull(node);
    }

    /// `node` covers `[i, j]`, returns `None` if it is disjoint from `[low, high]`
    fn query_node(
        &self,
        node: usize,
        i: usize,
        j: usize,
        low: usize,
        high: usize,
    ) -> Option<usize> {
        if low <= i && j <= high {
            return Some(self.tree[node]);
        }
        if j < low || i > high {
            return None;
        }

        let mid = i + (j - i) / 2;
        let best_left = self.query_node(node << 1, i, mid, low, high);
        let best_right = self.query_node((node << 1) | 1, mid + 1, j, low, high);
        match (best_left, best_right) {
            (Some(left), Some(right)) => Some(self.leftmost_min(left, right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}
