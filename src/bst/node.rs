use std::cmp::max;

/// An owning subtree slot: either empty or holding exactly one node
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A tree node owning its two subtrees.
///
/// `Clone` and `PartialEq` walk the subtree without recursion, but dropping a `Node`
/// is recursive: hand deep node graphs to `BinarySearchTree::with_root`, which releases
/// them iteratively
#[derive(Debug)]
pub struct Node<T: Ord> {
    pub(super) value: T,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T: Ord> Node<T> {
    /// Create a leaf node
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    /// Create a node owning the given subtrees.
    /// It is up to the caller to respect the ordering between `value` and the children,
    /// otherwise lookups on a tree seeded with this node will miss values.
    /// Long chains built this way should end up inside a `BinarySearchTree` before they
    /// are dropped
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Node {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Return whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: Ord + Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            left: clone_link(&self.left),
            right: clone_link(&self.right),
        }
    }
}

impl<T: Ord> PartialEq for Node<T> {
    /// Two nodes are equal when their subtrees have the same shape and values
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            let children = [(a.left(), b.left()), (a.right(), b.right())];
            for &(x, y) in children.iter() {
                match (x, y) {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Ord> Eq for Node<T> {}

/// Recursive implementation of `BinarySearchTree::insert_recursive`.
/// Equal values are routed to the right
pub(super) fn insert<T: Ord>(link: &mut Link<T>, value: T) {
    match link {
        None => *link = Some(Box::new(Node::new(value))),
        Some(node) if value < node.value => insert(&mut node.left, value),
        Some(node) => insert(&mut node.right, value),
    }
}

/// Recursive implementation of `BinarySearchTree::find_recursive`
pub(super) fn find<'a, T: Ord>(link: &'a Link<T>, value: &T) -> Option<&'a Node<T>> {
    let node = link.as_deref()?;
    if *value == node.value {
        Some(node)
    } else if *value < node.value {
        find(&node.left, value)
    } else {
        find(&node.right, value)
    }
}

/// Remove the first node holding `value` (top-down) from the subtree and return that value.
/// The slot holding the node is rebuilt in place: emptied for a leaf, replaced by the only
/// child, or kept with the in-order successor's value moved into it
pub(super) fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> Option<T> {
    let mut slot = link;
    loop {
        let go_left = match slot.as_deref() {
            None => return None,
            Some(node) if *value == node.value => break,
            Some(node) => *value < node.value,
        };
        slot = match slot {
            Some(node) => {
                if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                }
            }
            None => return None,
        };
    }

    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node.value),
        (None, Some(child)) | (Some(child), None) => {
            *slot = Some(child);
            Some(node.value)
        }
        (Some(left), Some(right)) => {
            // Pull the in-order successor up into this node
            let mut right = Some(right);
            let successor = take_min(&mut right);
            node.left = Some(left);
            node.right = right;
            let removed = successor.map(|successor| std::mem::replace(&mut node.value, successor));
            *slot = Some(node);
            removed
        }
    }
}

/// Detach the leftmost node of the subtree and return its value.
/// The minimum node has no left child, so its slot receives its right subtree
fn take_min<T: Ord>(link: &mut Link<T>) -> Option<T> {
    let mut slot = link;
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }
    let node = slot.take()?;
    let Node { value, right, .. } = *node;
    *slot = right;
    Some(value)
}

/// Return the leftmost node of the subtree
pub(super) fn min_node<T: Ord>(mut node: &Node<T>) -> &Node<T> {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

/// Return the rightmost node of the subtree
pub(super) fn max_node<T: Ord>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    node
}

enum Step<'a, T: Ord> {
    Visit(&'a Link<T>),
    Combine(&'a T),
}

/// Fold a subtree bottom-up on an explicit stack.
/// `empty` is the result for an empty slot and `combine` builds the result of a node from
/// its value and the results of its left and right subtrees
fn fold<'a, T, R, E, C>(link: &'a Link<T>, empty: E, mut combine: C) -> R
where
    T: Ord,
    E: Fn() -> R,
    C: FnMut(&'a T, R, R) -> R,
{
    let mut steps = vec![Step::Visit(link)];
    let mut results: Vec<R> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => results.push(empty()),
            Step::Visit(Some(node)) => {
                steps.push(Step::Combine(&node.value));
                steps.push(Step::Visit(&node.right));
                steps.push(Step::Visit(&node.left));
            }
            Step::Combine(value) => {
                // The left result was pushed first
                let right = results.pop();
                let left = results.pop();
                if let (Some(left), Some(right)) = (left, right) {
                    results.push(combine(value, left, right));
                }
            }
        }
    }
    results.pop().unwrap_or_else(empty)
}

/// Deep copy of a subtree
pub(super) fn clone_link<T: Ord + Clone>(link: &Link<T>) -> Link<T> {
    fold(
        link,
        || None,
        |value, left, right| {
            Some(Box::new(Node {
                value: value.clone(),
                left,
                right,
            }))
        },
    )
}

/// Length of the longest downward path. An empty subtree has height -1
pub(super) fn height<T: Ord>(link: &Link<T>) -> isize {
    fold(link, || -1, |_, left: isize, right: isize| max(left, right) + 1)
}

/// Check that the heights of both children differ by at most one, at every node
pub(super) fn is_balanced<T: Ord>(link: &Link<T>) -> bool {
    // Carry the height of each subtree as long as every node in it is balanced
    let balanced_height = fold(
        link,
        || Some(-1),
        |_, left: Option<isize>, right: Option<isize>| match (left, right) {
            (Some(left), Some(right)) if (left - right).abs() <= 1 => Some(max(left, right) + 1),
            _ => None,
        },
    );
    balanced_height.is_some()
}
