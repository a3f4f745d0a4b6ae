//! Model layer
//!
//! Content catalogs, toy-simulator state, chat transcript, generated-asset
//! state, and the view router enums. Everything here is either a fixed
//! literal or a small set of numeric fields scoped to one widget.

pub mod catalog;
pub mod chat;
pub mod foundry_sim;
pub mod gen;
pub mod ml_sim;
pub mod tree;
pub mod view;
