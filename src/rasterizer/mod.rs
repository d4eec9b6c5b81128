//! Software triangle rasterizer
//!
//! Features:
//! - RGBA8888 framebuffer with clipped pixel writes
//! - Edge-function coverage at pixel centers, either winding
//! - Flat and Gouraud (barycentric) fills

mod error;
mod framebuffer;
mod math;
mod matrix;
mod types;
mod render;

pub use error::*;
pub use framebuffer::*;
pub use math::*;
pub use matrix::*;
pub use types::*;
pub use render::*;
