//! Triangle rasterization
//!
//! Both fills walk the triangle's integer bounding box, sample every pixel at
//! its center and keep the pixels where the three edge functions agree in
//! sign. Points exactly on an edge count as inside, for either winding.

use super::framebuffer::Framebuffer;
use super::math::Vec2;
use super::types::Color;

/// Twice the signed area of triangle (a, b, c).
///
/// The sign tells which side of the directed line a -> b the point c is on.
#[inline]
pub fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Normalized barycentric weights of `p` in triangle (a, b, c).
///
/// Returns `None` for a zero-area triangle. The weights always sum to 1;
/// all three are non-negative only when `p` is inside or on the triangle.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<[f32; 3]> {
    let area = edge(a, b, c);
    if area == 0.0 {
        return None;
    }
    Some(normalized(edge_values(a, b, c, p), area))
}

/// Edge values opposite each vertex: `[edge(b,c,p), edge(c,a,p), edge(a,b,p)]`
#[inline]
fn edge_values(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> [f32; 3] {
    [edge(b, c, p), edge(c, a, p), edge(a, b, p)]
}

#[inline]
fn normalized(w: [f32; 3], area: f32) -> [f32; 3] {
    [w[0] / area, w[1] / area, w[2] / area]
}

/// Inclusive integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Pixels whose index spans the triangle: floor of the min and max coordinates
    pub fn of_triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            min_x: a.x.min(b.x).min(c.x).floor() as i32,
            min_y: a.y.min(b.y).min(c.y).floor() as i32,
            max_x: a.x.max(b.x).max(c.x).floor() as i32,
            max_y: a.y.max(b.y).max(c.y).floor() as i32,
        }
    }

    /// Intersect with `[0, width) x [0, height)`, `None` when nothing is left
    pub fn clip(self, width: u32, height: u32) -> Option<Self> {
        let last_x = width.min(i32::MAX as u32) as i32 - 1;
        let last_y = height.min(i32::MAX as u32) as i32 - 1;
        let clipped = Self {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(last_x),
            max_y: self.max_y.min(last_y),
        };
        if clipped.min_x > clipped.max_x || clipped.min_y > clipped.max_y {
            return None;
        }
        Some(clipped)
    }

    #[cfg(test)]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[inline]
fn covered(w: [f32; 3]) -> bool {
    (w[0] >= 0.0 && w[1] >= 0.0 && w[2] >= 0.0) || (w[0] <= 0.0 && w[1] <= 0.0 && w[2] <= 0.0)
}

/// Visit every covered pixel of the triangle that lies inside a
/// `width x height` target, passing its barycentric weights.
fn for_each_covered<F>(width: u32, height: u32, a: Vec2, b: Vec2, c: Vec2, mut visit: F)
where
    F: FnMut(i32, i32, [f32; 3]),
{
    let area = edge(a, b, c);
    if area == 0.0 {
        log::trace!("skipping degenerate triangle {} {} {}", a, b, c);
        return;
    }

    // Pixels outside the target would be dropped by set_pixel anyway
    let Some(bbox) = BoundingBox::of_triangle(a, b, c).clip(width, height) else {
        return;
    };

    for y in bbox.min_y..=bbox.max_y {
        for x in bbox.min_x..=bbox.max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w = edge_values(a, b, c, p);
            if covered(w) {
                visit(x, y, normalized(w, area));
            }
        }
    }
}

/// Fill a triangle with one color
pub fn draw_triangle(fb: &mut Framebuffer, a: Vec2, b: Vec2, c: Vec2, color: Color) {
    let (width, height) = (fb.width(), fb.height());
    for_each_covered(width, height, a, b, c, |x, y, _| {
        fb.set_pixel(x, y, color);
    });
}

/// Fill a triangle, blending the vertex colors by barycentric weight (Gouraud)
pub fn draw_colored_triangle(
    fb: &mut Framebuffer,
    a: Vec2,
    b: Vec2,
    c: Vec2,
    color_a: Color,
    color_b: Color,
    color_c: Color,
) {
    let (width, height) = (fb.width(), fb.height());
    for_each_covered(width, height, a, b, c, |x, y, weights| {
        fb.set_pixel(x, y, Color::interpolate(weights, color_a, color_b, color_c));
    });
}
