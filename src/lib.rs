//! softraster: a minimal software rasterization pipeline
//!
//! A fixed-size RGBA framebuffer plus flat and Gouraud triangle fills.
//! The core knows nothing about windows; callers read the raw bytes out
//! with [`rasterizer::Framebuffer::data`] and display them however they like.

pub mod mesh;
pub mod rasterizer;
pub mod scene;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
