use super::node::Node;
use std::collections::VecDeque;

/// Visit the node, then its left and right subtrees.
/// Uses an explicit stack, so degenerate trees do not exhaust the call stack
pub(super) fn pre_order<T: Ord>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut result = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        result.push(&node.value);
        // Right is pushed first so that left is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }
    result
}

/// Visit the left subtree, the node, then the right subtree
pub(super) fn in_order<T: Ord>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut result = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        // Walk down the left spine
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            None => return result,
            Some(node) => {
                result.push(&node.value);
                current = node.right();
            }
        }
    }
}

/// Visit the left and right subtrees, then the node
pub(super) fn post_order<T: Ord>(root: Option<&Node<T>>) -> Vec<&T> {
    // Build node-right-left order and reverse it
    let mut result = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        result.push(&node.value);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    result.reverse();
    result
}

/// Visit nodes level by level, left to right
pub(super) fn breadth_first<T: Ord>(root: Option<&Node<T>>) -> Vec<&T> {
    let root = match root {
        None => return Vec::new(),
        Some(root) => root,
    };

    let mut result = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        result.push(&node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }
    result
}
