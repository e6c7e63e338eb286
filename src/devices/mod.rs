//! Device implementations
//!
//! Only simulated devices live in-tree; bindings to real hardware implement
//! the [`crate::hal`] traits in their own crate.

pub mod mock;
