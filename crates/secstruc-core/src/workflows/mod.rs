//! High-level entry points that run every engine stage in order.

pub mod assign;
