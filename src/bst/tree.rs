use super::node::{self, Link, Node};
use super::traversal;

/// A binary search tree without rebalancing.
/// Values equal to an existing one are kept and placed in its right subtree
#[derive(Debug)]
pub struct BinarySearchTree<T: Ord> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Create a tree from an already built node graph.
    /// The nodes are expected to respect the search order
    pub fn with_root(root: Node<T>) -> Self {
        let len = traversal::pre_order(Some(&root)).len();
        BinarySearchTree {
            root: Some(Box::new(root)),
            len,
        }
    }

    /// Insert a new value as a leaf, walking down iteratively
    pub fn insert(&mut self, value: T) -> &mut Self {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        self
    }

    /// Same as `insert`, but walking down recursively
    pub fn insert_recursive(&mut self, value: T) -> &mut Self {
        node::insert(&mut self.root, value);
        self.len += 1;
        self
    }

    /// Return the first node holding `value`, looking from the root down
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *value == node.value {
                return Some(node);
            }
            current = if *value < node.value {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }

    /// Same as `find`, but walking down recursively
    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>> {
        node::find(&self.root, value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Remove one occurrence of `value`, returning it.
    ///
    /// When the node holding it has two children, the node is kept in place and receives
    /// the value of its in-order successor instead, so a node that held the removed value
    /// may afterwards hold another one
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = node::remove(&mut self.root, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn dfs_pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.root())
    }

    /// Return all values in non-decreasing order
    pub fn dfs_in_order(&self) -> Vec<&T> {
        traversal::in_order(self.root())
    }

    pub fn dfs_post_order(&self) -> Vec<&T> {
        traversal::post_order(self.root())
    }

    /// Return all values level by level
    pub fn bfs(&self) -> Vec<&T> {
        traversal::breadth_first(self.root())
    }

    /// Return whether, at every node, the heights of the two subtrees differ by at most one.
    /// An empty tree is balanced
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(&self.root)
    }

    /// Return the second highest value, by walking from the root towards the maximum.
    /// Return None if the tree has less than two nodes
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        if current.is_leaf() {
            return None;
        }

        loop {
            match (current.left(), current.right()) {
                // The right child is the maximum
                (_, Some(right)) if right.is_leaf() => return Some(&current.value),
                // The current node is the maximum
                (Some(left), None) => return Some(&node::max_node(left).value),
                (_, Some(right)) => current = right,
                (None, None) => return None,
            }
        }
    }

    /// Return the number of edges in the longest path from the root, or None for an empty tree
    pub fn height(&self) -> Option<usize> {
        match node::height(&self.root) {
            -1 => None,
            height => Some(height as usize),
        }
    }

    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| &node::min_node(root).value)
    }

    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| &node::max_node(root).value)
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Return the total number of values in the tree, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        BinarySearchTree::new()
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: node::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Unlink nodes one by one: the default recursive drop would overflow the stack
        // on degenerate trees
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for BinarySearchTree<T> {
    /// Create a tree by inserting the values in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}
