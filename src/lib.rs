#[cfg(test)]
#[macro_use]
extern crate lazy_static;


pub mod bst;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use bst::{BinarySearchTree, Node};
