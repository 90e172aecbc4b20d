//! Leaf components.
//!
//! Pure rendering functions that forward caller-supplied attributes to
//! native elements. Nothing here owns state or performs I/O.

pub mod button;
pub mod input;
