//! GPU rendering subsystem.
//!
//! The renderer consumes a `scene::Scene` and issues GPU commands via wgpu.
//! Scene objects are uploaded once (vertex buffer + color uniform each);
//! drawing re-binds the prepared resources without touching the queue.
//!
//! Convention:
//! - CPU geometry is in GL-style clip space (x, y, z in [-1, 1]).
//! - The vertex shader remaps z to wgpu's [0, 1] depth range.

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::SceneRenderer;
