//! Mesh utilities that live beside the rasterizer
//!
//! Not used by the fill path; kept for callers lighting their own geometry.

mod normals;

pub use normals::*;
