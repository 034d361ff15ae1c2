//! Structural rotations that restore the AVL invariant. See [the Wikipedia page][wiki] for the
//! terminology used here.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use std::cmp::Ordering;

use log::trace;

use super::node::{Link, Node};

/// The four ways an unbalanced node can be fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    /// Right-Right case: the right child moves up.
    Left,
    /// Left-Left case: the left child moves up.
    Right,
    /// Left-Right case: rotate the left child left, then this node right.
    LeftRight,
    /// Right-Left case: rotate the right child right, then this node left.
    RightLeft,
}

impl Rotation {
    /// Picks the rotation for `node` after an insertion into one of its subtrees. `side` is how
    /// the inserted key compared to the key of the taller child.
    pub(crate) fn after_insert<K>(node: &Node<K>, side: Ordering) -> Option<Self> {
        match node.balance_factor() {
            b if b > 1 => match side {
                Ordering::Greater => Some(Self::LeftRight),
                _ => Some(Self::Right),
            },
            b if b < -1 => match side {
                Ordering::Less => Some(Self::RightLeft),
                _ => Some(Self::Left),
            },
            _ => None,
        }
    }

    /// Picks the rotation for `node` after a removal from one of its subtrees. The removed key
    /// says nothing about which grandchild is taller so the taller child's own balance factor
    /// decides.
    pub(crate) fn after_remove<K>(node: &Node<K>) -> Option<Self> {
        match node.balance_factor() {
            b if b > 1 => match node.left.balance_factor() {
                n if n >= 0 => Some(Self::Right),
                _ => Some(Self::LeftRight),
            },
            b if b < -1 => match node.right.balance_factor() {
                n if n <= 0 => Some(Self::Left),
                _ => Some(Self::RightLeft),
            },
            _ => None,
        }
    }
}

impl<K> Link<K> {
    pub(crate) fn rotate(&mut self, rotation: Rotation) {
        trace!("applying {rotation:?} rotation");
        match rotation {
            Rotation::Left => self.rotate_left(),
            Rotation::Right => self.rotate_right(),
            Rotation::LeftRight => self.rotate_left_right(),
            Rotation::RightLeft => self.rotate_right_left(),
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. As such, it
    /// must only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")    new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    fn rotate_right(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Mirror image of [`Link::rotate_right`]: the right child moves up.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(&mut self) {
        let mut old_root = self.0.take().expect("Rotating a tree requires a root");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    fn rotate_left_right(&mut self) {
        self.node_mut()
            .expect("Rotating a tree requires a root")
            .left
            .rotate_left();
        self.rotate_right();
    }

    fn rotate_right_left(&mut self) {
        self.node_mut()
            .expect("Rotating a tree requires a root")
            .right
            .rotate_right();
        self.rotate_left();
    }
}
