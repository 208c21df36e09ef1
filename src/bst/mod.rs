mod node;
mod traversal;
mod tree;

pub use node::Node;
pub use tree::BinarySearchTree;
