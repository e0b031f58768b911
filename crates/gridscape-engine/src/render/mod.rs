//! GPU rendering subsystem.
//!
//! The grid pass runs a fragment shader over a full-screen quad; all pattern
//! logic lives in the shader, the CPU side only uploads uniforms.

mod ctx;
mod grid;

pub use ctx::{RenderCtx, RenderTarget};
pub use grid::GridRenderer;
