//! Read-only walks over a [`Tree`]: the depth-first and breadth-first traversals plus the
//! structural queries (validity, lowest common ancestor, distances) built on BST descent.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::{Link, Node};
use super::Tree;
use crate::Error;

/// An in-order iterator over the keys of a [`Tree`], smallest first.
///
/// Created by [`Tree::iter`].
#[derive(Clone)]
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet, the next one on top. Each node's right subtree
    /// is pushed only once the node itself is popped.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.node());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.node();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.node());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn pre_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link.node() {
        keys.push(&node.key);
        pre_order(&node.left, keys);
        pre_order(&node.right, keys);
    }
}

fn post_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link.node() {
        post_order(&node.left, keys);
        post_order(&node.right, keys);
        keys.push(&node.key);
    }
}

/// Recomputes the height of the subtree in `link`, returning `None` as soon as some node is
/// out of balance, carries a stale height, or has a key outside of the open interval
/// `(lower, upper)` its ancestors allow.
fn checked_height<K>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> Option<usize>
where
    K: Ord,
{
    let Some(node) = link.node() else {
        return Some(0);
    };
    if lower.map_or(false, |lower| &node.key <= lower)
        || upper.map_or(false, |upper| &node.key >= upper)
    {
        return None;
    }

    let left = checked_height(&node.left, lower, Some(&node.key))?;
    let right = checked_height(&node.right, Some(&node.key), upper)?;
    let height = left.max(right) + 1;

    (left.abs_diff(right) <= 1 && node.height == height).then_some(height)
}

impl<K> Tree<K> {
    /// Gets an iterator over the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Returns the keys in in-order (left subtree, node, right subtree), which for a BST is
    /// ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no keys.
    pub fn in_order(&self) -> Result<Vec<&K>, Error> {
        self.ensure_not_empty()?;
        Ok(self.iter().collect())
    }

    /// Returns the keys in pre-order (node, left subtree, right subtree).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no keys.
    pub fn pre_order(&self) -> Result<Vec<&K>, Error> {
        self.ensure_not_empty()?;
        let mut keys = Vec::with_capacity(self.len);
        pre_order(&self.root, &mut keys);
        Ok(keys)
    }

    /// Returns the keys in post-order (left subtree, right subtree, node).
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no keys.
    pub fn post_order(&self) -> Result<Vec<&K>, Error> {
        self.ensure_not_empty()?;
        let mut keys = Vec::with_capacity(self.len);
        post_order(&self.root, &mut keys);
        Ok(keys)
    }

    /// Returns the keys level by level from the root down, left to right within a level.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the tree has no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    ///
    /// assert_eq!(tree.level_order(), Ok(vec![&4, &2, &6, &1, &3, &5, &7]));
    /// assert!(Tree::<i32>::new().level_order().is_err());
    /// ```
    pub fn level_order(&self) -> Result<Vec<&K>, Error> {
        let root = self.root.node().ok_or(Error::Empty)?;
        let mut keys = Vec::with_capacity(self.len);
        let mut pending = VecDeque::from([root]);

        while let Some(node) = pending.pop_front() {
            keys.push(&node.key);
            pending.extend(node.left.node());
            pending.extend(node.right.node());
        }

        Ok(keys)
    }

    /// Checks that this is a valid AVL tree: every node's subtree heights differ by at most
    /// one, every stored height is accurate and keys are strictly ordered. An empty tree is
    /// valid.
    pub fn is_valid(&self) -> bool
    where
        K: Ord,
    {
        checked_height(&self.root, None, None).is_some()
    }

    /// Finds the lowest common ancestor of `a` and `b`: the deepest key that has both of them
    /// in its subtree, where a key counts as being in its own subtree.
    ///
    /// Returns `None` if either key is missing from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30, 5, 15, 25, 35].into_iter().collect();
    ///
    /// assert_eq!(tree.find_lca(&5, &15), Some(&10));
    /// assert_eq!(tree.find_lca(&5, &35), Some(&20));
    /// assert_eq!(tree.find_lca(&5, &10), Some(&10));
    /// assert_eq!(tree.find_lca(&5, &16), None);
    /// ```
    pub fn find_lca(&self, a: &K, b: &K) -> Option<&K>
    where
        K: Ord,
    {
        if !self.search(a) || !self.search(b) {
            return None;
        }

        let mut current = self.root.node();
        while let Some(node) = current {
            current = if a < &node.key && b < &node.key {
                node.left.node()
            } else if a > &node.key && b > &node.key {
                node.right.node()
            } else {
                return Some(&node.key);
            };
        }

        None
    }

    /// Counts the edges between the root and the node holding `key`. The root itself is at
    /// distance 0. Returns `None` if `key` is not in the tree.
    pub fn distance_from_root(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root.node();
        let mut distance = 0;

        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.node(),
                Ordering::Equal => return Some(distance),
                Ordering::Greater => node.right.node(),
            };
            distance += 1;
        }

        None
    }

    /// Counts the edges on the path between `a` and `b`, which always passes through their
    /// lowest common ancestor. Returns `None` if either key is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30, 5, 15, 25, 35].into_iter().collect();
    ///
    /// assert_eq!(tree.find_distance(&5, &15), Some(2));
    /// assert_eq!(tree.find_distance(&5, &35), Some(4));
    /// assert_eq!(tree.find_distance(&5, &5), Some(0));
    /// ```
    pub fn find_distance(&self, a: &K, b: &K) -> Option<usize>
    where
        K: Ord,
    {
        let lca = self.find_lca(a, b)?;
        let to_a = self.distance_from_root(a)?;
        let to_b = self.distance_from_root(b)?;
        let to_lca = self.distance_from_root(lca)?;

        Some(to_a + to_b - 2 * to_lca)
    }

    fn ensure_not_empty(&self) -> Result<(), Error> {
        if self.is_empty() {
            Err(Error::Empty)
        } else {
            Ok(())
        }
    }
}
