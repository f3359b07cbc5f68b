//! Kernel operations on polygons and curves.

pub mod boolean;
pub mod offset;
pub mod overlap;
pub mod relation;
pub mod transform;
pub(crate) mod utils;
