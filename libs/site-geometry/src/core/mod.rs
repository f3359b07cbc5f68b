//! Core value types of the planar kernel.
//!
//! Includes the vector alias (`Vec2`) and the validated `Polygon` and `Curve`.

pub mod curve;
pub mod polygon;
pub mod vec2;
