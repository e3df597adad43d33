//! Range query tree (segment tree) over an associative operator.
//!
//! Variables:
//!   n        : usize   — number of user values
//!   H        : usize   — leaf window size, next power of two >= n
//!   tree     : Vec<T>  — 1-indexed implicit binary tree, length 2H
//!   combine  : (T,T)→T — associative operator with identity e
//!
//! Equations:
//!   leaves: tree[H + k] = seq[k]  for k < n,  tree[H + k] = e  for n <= k < H
//!   tree[i] = combine(tree[2i], tree[2i+1])   for 1 <= i < H
//!
//!   level(i) = floor(log2 i)
//!   span(i)  = H >> level(i)
//!   range(i) = [(i - 2^level(i)) * span(i),  (i - 2^level(i) + 1) * span(i) - 1]
//!
//!   update(k, v): tree[H+k] = v, recompute tree[(H+k) >> 1 ..] to the root   O(log n)
//!   query(i, j) = combine over seq[i..=j]                                    O(log n)

use std::fmt;
use std::ops::Index;

use num_traits::{Bounded, One, Zero};

use crate::error::{AlgorithmError, Result};

pub type Combine<T> = fn(&T, &T) -> T;

pub struct RangeQueryTree<T, F = Combine<T>> {
    tree: Vec<T>,
    len: usize,
    half: usize,
    combine: F,
    identity: T,
}

impl<T: Clone, F: Fn(&T, &T) -> T> RangeQueryTree<T, F> {
    /// Builds the tree bottom-up. `combine` must be associative with
    /// `identity` as its neutral element; neither is checked.
    pub fn new(sequence: impl IntoIterator<Item = T>, combine: F, identity: T) -> Result<Self> {
        let values: Vec<T> = sequence.into_iter().collect();
        if values.is_empty() {
            return Err(AlgorithmError::invalid("range query tree needs at least one value"));
        }
        let len = values.len();
        let half = len.next_power_of_two();
        let mut tree = vec![identity.clone(); 2 * half];
        for (slot, value) in tree[half..].iter_mut().zip(values) {
            *slot = value;
        }
        for i in (1..half).rev() {
            tree[i] = combine(&tree[2 * i], &tree[2 * i + 1]);
        }
        Ok(Self { tree, len, half, combine, identity })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The user values, in order.
    pub fn leaves(&self) -> &[T] {
        &self.tree[self.half..self.half + self.len]
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.tree[self.half + index])
    }

    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let mut node = self.half + index;
        self.tree[node] = value;
        node /= 2;
        while node >= 1 {
            self.tree[node] = (self.combine)(&self.tree[2 * node], &self.tree[2 * node + 1]);
            node /= 2;
        }
        tracing::trace!(index, "range query tree leaf updated");
        Ok(())
    }

    /// Fold of `combine` over the inclusive range `[i, j]`.
    ///
    /// An index past the end is `OutOfRange`, while `j < i` is reported as
    /// `InvertedRange`. Use [`AlgorithmError::is_out_of_range`] to
    /// catch both.
    pub fn query(&self, i: usize, j: usize) -> Result<T> {
        self.check_index(i)?;
        self.check_index(j)?;
        if j < i {
            return Err(AlgorithmError::InvertedRange { start: i, end: j });
        }
        Ok(self.query_node(1, i, j))
    }

    fn query_node(&self, node: usize, i: usize, j: usize) -> T {
        let (lo, hi) = self.node_range(node);
        if i <= lo && hi <= j {
            return self.tree[node].clone();
        }
        if hi < i || j < lo {
            return self.identity.clone();
        }
        let left = self.query_node(2 * node, i, j);
        let right = self.query_node(2 * node + 1, i, j);
        (self.combine)(&left, &right)
    }

    /// External index range covered by `node`, inclusive.
    fn node_range(&self, node: usize) -> (usize, usize) {
        let level = node.ilog2();
        let span = self.half >> level;
        let lo = (node - (1 << level)) * span;
        (lo, lo + span - 1)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(AlgorithmError::OutOfRange { index, len: self.len })
        }
    }
}

fn add<T: Clone + Zero>(a: &T, b: &T) -> T {
    a.clone() + b.clone()
}

fn mul<T: Clone + One>(a: &T, b: &T) -> T {
    a.clone() * b.clone()
}

fn min<T: Clone + PartialOrd>(a: &T, b: &T) -> T {
    if b < a { b.clone() } else { a.clone() }
}

fn max<T: Clone + PartialOrd>(a: &T, b: &T) -> T {
    if b > a { b.clone() } else { a.clone() }
}

impl<T: Clone + Zero> RangeQueryTree<T> {
    pub fn sum(sequence: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::new(sequence, add::<T> as Combine<T>, T::zero())
    }
}

impl<T: Clone + One> RangeQueryTree<T> {
    pub fn product(sequence: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::new(sequence, mul::<T> as Combine<T>, T::one())
    }
}

impl<T: Clone + PartialOrd + Bounded> RangeQueryTree<T> {
    pub fn min(sequence: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::new(sequence, min::<T> as Combine<T>, T::max_value())
    }

    pub fn max(sequence: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::new(sequence, max::<T> as Combine<T>, T::min_value())
    }
}

impl<T, F> Index<usize> for RangeQueryTree<T, F> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &self.tree[self.half + index]
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RangeQueryTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tree[self.half..self.half + self.len]).finish()
    }
}
