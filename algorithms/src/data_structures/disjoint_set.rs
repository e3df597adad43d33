//! Disjoint-set (union-find) over arbitrary hashable elements.
//!
//! Variables:
//!   parent[x] : T      — forest link, x is a root iff parent[x] == x
//!   rank[r]   : u32    — upper bound on the height of the tree rooted at r
//!   sets      : usize  — number of roots
//!
//! Equations:
//!   find(x)     = x                     if parent[x] == x
//!               = find(parent[x])       otherwise, then parent[v] = root for every v visited
//!   union(x,y):  rx = find(x), ry = find(y)
//!                rank[rx] <  rank[ry] → parent[rx] = ry
//!                rank[rx] >  rank[ry] → parent[ry] = rx
//!                rank[rx] == rank[ry] → parent[ry] = rx, rank[rx] += 1
//!
//!   m operations on n elements: O(m · α(n))

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{AlgorithmError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawDisjointSet<T>",
        bound(deserialize = "T: serde::Deserialize<'de> + Clone")
    )
)]
pub struct DisjointSet<T: Hash + Eq> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
    sets: usize,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Every element of `universe` starts as its own singleton set.
    pub fn new(universe: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self { parent: HashMap::new(), rank: HashMap::new(), sets: 0 };
        set.add(universe);
        set
    }

    /// Registers new singleton sets. Elements already tracked keep their
    /// current set.
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            if self.parent.contains_key(&item) {
                continue;
            }
            self.parent.insert(item.clone(), item.clone());
            self.rank.insert(item, 0);
            self.sets += 1;
        }
    }

    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Root of `x`'s set, compressing the path walked to reach it.
    pub fn find(&mut self, x: &T) -> Result<T> {
        let mut current = x.clone();
        let mut parent = self.parent.get(x).ok_or(AlgorithmError::NotFound)?.clone();
        let mut chain = Vec::new();
        while current != parent {
            let next = self.parent[&parent].clone();
            chain.push(current);
            current = parent;
            parent = next;
        }
        for item in chain {
            self.parent.insert(item, current.clone());
        }
        Ok(current)
    }

    /// Root of `x`'s set without touching the forest.
    pub fn peek_root(&self, x: &T) -> Result<&T> {
        let mut current = self.parent.get_key_value(x).ok_or(AlgorithmError::NotFound)?.0;
        loop {
            let parent = &self.parent[current];
            if parent == current {
                return Ok(current);
            }
            current = parent;
        }
    }

    /// Merges the sets of `x` and `y`, returning the surviving root.
    pub fn union(&mut self, x: &T, y: &T) -> Result<T> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(root_x);
        }
        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];
        self.sets -= 1;
        if rank_x < rank_y {
            self.parent.insert(root_x, root_y.clone());
            Ok(root_y)
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x.clone());
            Ok(root_x)
        } else {
            self.parent.insert(root_y, root_x.clone());
            self.rank.insert(root_x.clone(), rank_x + 1);
            Ok(root_x)
        }
    }

    /// Folds `union` over `items`, merging all of them into one set.
    pub fn union_all(&mut self, items: impl IntoIterator<Item = T>) -> Result<T> {
        let mut items = items.into_iter();
        let first = items
            .next()
            .ok_or_else(|| AlgorithmError::invalid("union of an empty sequence"))?;
        let mut root = self.find(&first)?;
        for item in items {
            root = self.union(&root, &item)?;
        }
        Ok(root)
    }

    pub fn in_same_set(&mut self, x: &T, y: &T) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    #[cfg(test)]
    fn rank_of(&self, x: &T) -> Option<u32> {
        self.rank.get(x).copied()
    }
}

/// Unchecked field-for-field form of a [`DisjointSet`], as read from a
/// serialized snapshot.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDisjointSet<T: Hash + Eq> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
    sets: usize,
}

/// Accepts a snapshot only when it is a forest union-by-rank could have
/// built: every link points at a tracked element of strictly higher rank,
/// so every walk ends at a root, and `sets` counts those roots.
#[cfg(feature = "serde")]
impl<T: Hash + Eq + Clone> TryFrom<RawDisjointSet<T>> for DisjointSet<T> {
    type Error = AlgorithmError;

    fn try_from(raw: RawDisjointSet<T>) -> Result<Self> {
        let RawDisjointSet { parent, rank, sets } = raw;
        if rank.len() != parent.len() {
            return Err(AlgorithmError::invalid("every element needs exactly one rank"));
        }
        let mut roots = 0;
        for (item, link) in &parent {
            let own = *rank.get(item).ok_or_else(|| AlgorithmError::invalid("element without a rank"))?;
            if item == link {
                roots += 1;
                continue;
            }
            let above = *rank
                .get(link)
                .ok_or_else(|| AlgorithmError::invalid("parent link to an untracked element"))?;
            if above <= own {
                return Err(AlgorithmError::invalid("parent rank must exceed child rank"));
            }
        }
        if roots != sets {
            return Err(AlgorithmError::invalid(format!(
                "set count {sets} does not match {roots} roots"
            )));
        }
        Ok(Self { parent, rank, sets })
    }
}
