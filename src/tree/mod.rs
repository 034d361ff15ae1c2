//! A self-balancing Binary Search Tree (specifically, an AVL tree) of unique keys.
//!
//! Every node owns its children outright through a `Box`, so there are no parent pointers and
//! no shared nodes. After every public operation each node's left and right subtree heights
//! differ by at most one.
//!
//! # Examples
//!
//! ```
//! use avl::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting the same key again is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.search(&1));
//! ```

mod node;
mod rotation;
mod traversal;

use std::fmt;

use log::debug;

use self::node::{InsertResult, Link};

pub use self::traversal::Iter;

/// An AVL tree. This can be used for inserting, searching, and removing keys, and for
/// answering structural questions (traversals, lowest common ancestors, distances).
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// Checks if the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root to
    /// a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns whether `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = [1, 2].into_iter().collect();
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.find(key).is_some()
    }

    /// Inserts `key` into the tree, rebalancing as needed. Returns `false` and leaves the tree
    /// exactly as it was if `key` was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// // Ascending inserts would make a plain BST a linked list.
    /// for key in 1..=7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 3);
    /// assert!(!tree.insert(4));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match self.root.insert(key) {
            InsertResult::Inserted(_) => {
                self.len += 1;
                debug!("inserted key, tree now holds {} keys", self.len);
                true
            }
            InsertResult::Duplicate => {
                debug!("ignored duplicate key");
                false
            }
        }
    }

    /// Removes `key` from the tree, rebalancing every ancestor of the removed node. Returns
    /// `false` if the tree did not contain `key`, in which case nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.in_order(), Ok(vec![&1, &3]));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        match self.root.remove(key) {
            Some(_) => {
                self.len -= 1;
                debug!("removed key, tree now holds {} keys", self.len);
                true
            }
            None => {
                debug!("key to remove was not found");
                false
            }
        }
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::HashSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a hashset.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of keys in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
    where
        K: std::hash::Hash + Eq + Clone + Ord + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    assert_eq!(bst.insert(k.clone()), set.insert(k.clone()));
                }
                Op::Remove(k) => {
                    assert_eq!(bst.remove(k), set.remove(k));
                }
                Op::Iter => {
                    let mut expected: Vec<_> = set.iter().collect();
                    expected.sort();
                    assert_eq!(bst.iter().collect::<Vec<_>>(), expected);
                }
            }
            assert!(bst.is_valid());
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = HashSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|key| tree.search(key))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.search(x))
        }
    }
}
