//! Core types for the rasterizer

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Blend three colors by barycentric weights.
    ///
    /// Each channel is clamped to 0..=255 and rounded to the nearest value,
    /// so weights that stray slightly outside the triangle never wrap around.
    pub fn interpolate(weights: [f32; 3], a: Color, b: Color, c: Color) -> Self {
        let [alpha, beta, gamma] = weights;
        let mix = |ca: u8, cb: u8, cc: u8| {
            let v = alpha * ca as f32 + beta * cb as f32 + gamma * cc as f32;
            v.clamp(0.0, 255.0).round() as u8
        };
        Self {
            r: mix(a.r, b.r, c.r),
            g: mix(a.g, b.g, c.g),
            b: mix(a.b, b.b, c.b),
            a: mix(a.a, b.a, c.a),
        }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::with_alpha(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alpha_is_opaque() {
        assert_eq!(Color::new(1, 2, 3).a, 255);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_interpolate_vertex_weight() {
        let c = Color::interpolate([1.0, 0.0, 0.0], Color::RED, Color::GREEN, Color::BLUE);
        assert_eq!(c, Color::RED);
        let c = Color::interpolate([0.0, 0.0, 1.0], Color::RED, Color::GREEN, Color::BLUE);
        assert_eq!(c, Color::BLUE);
    }

    #[test]
    fn test_interpolate_clamps() {
        let c = Color::interpolate([1.5, -0.25, -0.25], Color::WHITE, Color::BLACK, Color::BLACK);
        assert_eq!(c, Color::WHITE);
        let c = Color::interpolate([-1.0, 1.0, 1.0], Color::WHITE, Color::BLACK, Color::BLACK);
        assert_eq!(c.r, 0);
    }

    #[test]
    fn test_interpolate_rounds() {
        let third = 1.0 / 3.0;
        let c = Color::interpolate(
            [third, third, third],
            Color::new(10, 0, 0),
            Color::new(10, 0, 0),
            Color::new(11, 0, 0),
        );
        assert_eq!(c.r, 10);
        let c = Color::interpolate(
            [third, third, third],
            Color::new(10, 0, 0),
            Color::new(11, 0, 0),
            Color::new(11, 0, 0),
        );
        assert_eq!(c.r, 11);
        let c = Color::interpolate([0.5, 0.5, 0.0], Color::WHITE, Color::BLACK, Color::BLACK);
        assert_eq!(c.g, 128);
    }

    #[test]
    fn test_byte_round_trip() {
        let c = Color::with_alpha(9, 8, 7, 6);
        assert_eq!(c.to_bytes(), [9, 8, 7, 6]);
        assert_eq!(Color::from_bytes(c.to_bytes()), c);
    }
}
