//! This crate holds two small exercises in moving heap nodes around, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`tree::Tree`] keeps these invariants without ever rebalancing, so its height is whatever
//! the insertion order makes it. Deleting a `Node` with two children moves that `Node`'s
//! in-order successor (the smallest `Node` of its right subtree) into its place.
//!
//! ## Linked Deck
//!
//! [`deck::Deck`] is a singly linked list of playing cards. Cards are inserted and removed
//! "after" a position, with a sentinel position before the first card, and the deck is sorted
//! by relinking whole nodes. Because the sort always takes the first of several equally ranked
//! cards, it is stable.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod deck;
pub mod tree;
