//! Scenes: a render target description plus an ordered triangle list
//!
//! Scenes are plain data and round-trip through RON, so the viewer can
//! load any of them from disk without recompiling.

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};

use crate::rasterizer::{draw_colored_triangle, draw_triangle, Color, Framebuffer, RasterError, Vec2};

/// One triangle to draw, in pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneTriangle {
    /// Single color fill
    Flat { points: [Vec2; 3], color: Color },
    /// Per-vertex colors blended across the face
    Gouraud { points: [Vec2; 3], colors: [Color; 3] },
}

impl SceneTriangle {
    pub fn draw(&self, fb: &mut Framebuffer) {
        match *self {
            SceneTriangle::Flat { points: [a, b, c], color } => {
                draw_triangle(fb, a, b, c, color);
            }
            SceneTriangle::Gouraud { points: [a, b, c], colors: [ca, cb, cc] } => {
                draw_colored_triangle(fb, a, b, c, ca, cb, cc);
            }
        }
    }
}

/// Largest frame a scene may describe, in pixels (4096 x 4096, 64 MiB of RGBA).
///
/// Scene files are untrusted input; this keeps a typo like `width: 100000`
/// from turning into a multi-gigabyte allocation.
pub const MAX_SCENE_PIXELS: u64 = 4096 * 4096;

fn default_scale() -> u32 {
    2
}

/// Everything needed to produce one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub clear: Color,
    /// Integer upscale factor for the viewer window
    #[serde(default = "default_scale")]
    pub scale: u32,
    #[serde(default)]
    pub triangles: Vec<SceneTriangle>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clear: Color::BLACK,
            scale: default_scale(),
            triangles: Vec::new(),
        }
    }

    /// Reject empty frames and frames over [`MAX_SCENE_PIXELS`]
    pub fn check_size(&self) -> Result<(), RasterError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        if u64::from(width) * u64::from(height) > MAX_SCENE_PIXELS {
            return Err(RasterError::TooLarge { width, height });
        }
        Ok(())
    }

    /// Allocate a framebuffer of the scene's size and draw into it
    pub fn render(&self) -> Result<Framebuffer, SceneError> {
        self.check_size()?;
        let mut fb = Framebuffer::new(self.width, self.height)?;
        self.render_into(&mut fb);
        Ok(fb)
    }

    /// Clear `fb` and draw every triangle in order, later ones on top
    pub fn render_into(&self, fb: &mut Framebuffer) {
        fb.clear(self.clear);
        for tri in &self.triangles {
            tri.draw(fb);
        }
    }
}

impl Default for Scene {
    /// Built-in demo: a flat backdrop triangle under an RGB Gouraud triangle
    fn default() -> Self {
        let mut scene = Scene::new(320, 240);
        scene.clear = Color::new(30, 30, 40);
        scene.triangles = vec![
            SceneTriangle::Flat {
                points: [Vec2::new(20.0, 220.0), Vec2::new(300.0, 220.0), Vec2::new(160.0, 120.0)],
                color: Color::new(60, 60, 80),
            },
            SceneTriangle::Gouraud {
                points: [Vec2::new(160.0, 20.0), Vec2::new(280.0, 200.0), Vec2::new(40.0, 200.0)],
                colors: [Color::RED, Color::GREEN, Color::BLUE],
            },
        ];
        scene
    }
}
