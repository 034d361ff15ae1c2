//! The owned pieces a [`Tree`](super::Tree) is made of. A [`Node`] owns its children
//! through [`Link`]s, and a `Link` is the slot a rotation swaps a new subtree root into.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::rotation::Rotation;

/// An owned, possibly empty, subtree. The parent (or the `Tree`, for the root) is the only
/// owner of the `Node` inside, so dropping a `Link` drops the whole subtree.
#[derive(Clone)]
pub(crate) struct Link<K>(pub(crate) Option<Box<Node<K>>>);

/// What happened when inserting a key into a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InsertResult {
    /// The key was already present so the subtree is unchanged.
    Duplicate,
    /// The key was added. The `Ordering` is how the key compared to the key at the root of the
    /// subtree that returned this, which is `Equal` when that root is the new leaf itself.
    Inserted(Ordering),
}

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> fmt::Debug for Link<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node().fmt(f)
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// The difference in height between the left and right subtrees. Positive means the left
    /// side is taller.
    pub(crate) fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.find(key),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.find(key),
        }
    }
}

impl<K> Link<K> {
    pub(crate) fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<K>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Height of the subtree in this slot. An empty slot has height 0.
    pub(crate) fn height(&self) -> usize {
        self.node().map_or(0, |n| n.height)
    }

    /// Balance factor of the node in this slot, or 0 for an empty slot.
    pub(crate) fn balance_factor(&self) -> isize {
        self.node().map_or(0, Node::balance_factor)
    }

    pub(crate) fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.node().and_then(|n| n.find(key))
    }

    /// Inserts `key` into this subtree, rebalancing every node on the way back up.
    pub(crate) fn insert(&mut self, key: K) -> InsertResult
    where
        K: Ord,
    {
        let Some(node) = self.node_mut() else {
            self.0 = Some(Node::new_boxed(key));
            return InsertResult::Inserted(Ordering::Equal);
        };

        let side = key.cmp(&node.key);
        let child_result = match side {
            Ordering::Less => node.left.insert(key),
            Ordering::Equal => InsertResult::Duplicate,
            Ordering::Greater => node.right.insert(key),
        };
        let InsertResult::Inserted(child_side) = child_result else {
            return InsertResult::Duplicate;
        };

        node.fix_height();
        if let Some(rotation) = Rotation::after_insert(node, child_side) {
            self.rotate(rotation);
        }
        self.debug_assert_balanced();

        InsertResult::Inserted(side)
    }

    /// Removes `key` from this subtree and returns it. Every node on the path back up is
    /// rebalanced. Returns `None`, leaving the subtree untouched, if `key` isn't present.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let node = self.node_mut()?;
        let removed = match key.cmp(&node.key) {
            Ordering::Less => node.left.remove(key)?,
            Ordering::Equal => self.remove_root()?,
            Ordering::Greater => node.right.remove(key)?,
        };
        self.rebalance_after_remove();

        Some(removed)
    }

    /// Unlinks the node in this slot and returns its key. A node with a single child is
    /// replaced by that child. A node with two children takes the key of its in-order
    /// successor, which is removed from the right subtree instead.
    fn remove_root(&mut self) -> Option<K> {
        let mut node = self.0.take()?;
        let removed = match (node.left.take(), node.right.take()) {
            (child, Link(None)) | (Link(None), child) => {
                *self = child;
                let Node { key, .. } = *node;
                key
            }
            (left, Link(Some(right))) => {
                let (rest, successor) = Self::pop_min(right);
                node.left = left;
                node.right = rest;
                let removed = mem::replace(&mut node.key, successor);
                self.0 = Some(node);
                removed
            }
        };

        Some(removed)
    }

    /// Removes the smallest key from the subtree rooted at `node`. Returns what is left of
    /// the subtree, rebalanced, along with that key.
    fn pop_min(mut node: Box<Node<K>>) -> (Self, K) {
        match node.left.take().0 {
            None => {
                let Node { key, right, .. } = *node;
                (right, key)
            }
            Some(left) => {
                let (rest, min) = Self::pop_min(left);
                node.left = rest;
                let mut link = Link(Some(node));
                link.rebalance_after_remove();
                (link, min)
            }
        }
    }

    /// Restores the height and balance of the node in this slot after a removal somewhere
    /// below it.
    fn rebalance_after_remove(&mut self) {
        let Some(node) = self.node_mut() else {
            return;
        };
        node.fix_height();
        if let Some(rotation) = Rotation::after_remove(node) {
            self.rotate(rotation);
        }
        self.debug_assert_balanced();
    }

    fn debug_assert_balanced(&self) {
        if cfg!(debug_assertions) {
            let Some(node) = self.node() else {
                return;
            };
            let left_height = node.left.height();
            let right_height = node.right.height();
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }
}
