//! This crate exposes a linked Binary Search Tree (BST) that keeps every item it is given,
//! duplicates included, and only restores its balance when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values are always added
//!    to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing here keeps the height near `O(lg N)`
//! while items come and go: adding already sorted items produces a tree that is really a linked
//! list. [`Tree::is_balanced`] tells you when that happened and [`Tree::rebalance`] rebuilds the
//! tree with the smallest possible height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), vec![&3, &4, &5, &6, &8, &19]);
//! assert_eq!(tree.successor(&5), Some(&6));
//! assert_eq!(tree.range_find(&4, &8), Some(vec![&4, &5, &6, &8]));
//!
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.remove(&5), Err(linked_bst::Error::NotFound));
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod mutation;
mod search;
mod traversal;
mod tree;

pub use error::{Error, Result};
pub use traversal::Iter;
pub use tree::Tree;
