//! Armillary engine crate.
//!
//! A small GPU layer for drawing static scenes of solid-colored line and
//! triangle geometry. Geometry is authored directly in clip space, uploaded
//! once, and drawn on demand.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod window;
