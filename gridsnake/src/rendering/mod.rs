pub mod draw_buffer;

use tetra::{
    graphics::Color,
    math::Vec2,
};

pub use draw_buffer::{
    DrawBuffer,
    DrawCommand,
};

/// Four corners in normalized device coordinates, `y` pointing up.
///
/// Corners are ordered top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub points: [Vec2<f32>; 4],
}

impl Quad {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> Self {
        Quad {
            points: [
                Vec2::new(x0, y0),
                Vec2::new(x1, y1),
                Vec2::new(x2, y2),
                Vec2::new(x3, y3),
            ],
        }
    }

    /// The quad covering `[left, right] x [bottom, top]`
    pub fn from_bounds(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Quad::new(left, top, right, top, right, bottom, left, bottom)
    }

    /// Top-left corner and size in window pixels, when the quad is an axis-aligned rectangle
    pub fn screen_rect(&self, width: f32, height: f32) -> Option<(Vec2<f32>, Vec2<f32>)> {
        let p = self.points;
        let aligned = p[0].y == p[1].y && p[1].x == p[2].x && p[2].y == p[3].y && p[3].x == p[0].x;
        if !aligned {
            return None;
        }

        let screen = self.to_screen(width, height);
        let min = Vec2::new(screen[0].x.min(screen[2].x), screen[0].y.min(screen[2].y));
        let max = Vec2::new(screen[0].x.max(screen[2].x), screen[0].y.max(screen[2].y));
        Some((min, max - min))
    }

    /// Converts every corner with `ndc_to_screen`
    pub fn to_screen(&self, width: f32, height: f32) -> [Vec2<f32>; 4] {
        let mut out = self.points;
        for point in out.iter_mut() {
            *point = ndc_to_screen(*point, width, height);
        }
        out
    }
}

/// The immediate-mode drawing primitive that game objects render through
pub trait QuadSink {
    /// Starts a new frame filled with `color`
    fn clear(&mut self, color: Color);

    fn draw_quad(&mut self, quad: Quad, color: Color);
}

/// Maps `[-1, 1]` device coordinates onto a `width` x `height` pixel window with the origin top left
pub fn ndc_to_screen(point: Vec2<f32>, width: f32, height: f32) -> Vec2<f32> {
    Vec2::new(
        (point.x + 1.0) * 0.5 * width,
        (1.0 - point.y) * 0.5 * height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_device_space_map_to_window_corners() {
        assert_eq!(ndc_to_screen(Vec2::new(-1.0, 1.0), 800.0, 600.0), Vec2::new(0.0, 0.0));
        assert_eq!(ndc_to_screen(Vec2::new(1.0, -1.0), 800.0, 600.0), Vec2::new(800.0, 600.0));
        assert_eq!(ndc_to_screen(Vec2::new(0.0, 0.0), 800.0, 600.0), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn bounds_keep_vertex_order() {
        let quad = Quad::from_bounds(0.0, 0.5, 0.25, 0.0);
        assert_eq!(quad.points, [
            Vec2::new(0.0, 0.5),
            Vec2::new(0.25, 0.5),
            Vec2::new(0.25, 0.0),
            Vec2::new(0.0, 0.0),
        ]);

        let screen = quad.to_screen(100.0, 100.0);
        assert_eq!(screen[0], Vec2::new(50.0, 25.0));
        assert_eq!(screen[2], Vec2::new(62.5, 50.0));
    }

    #[test]
    fn rectangles_map_to_a_screen_rect() {
        let quad = Quad::from_bounds(0.0, 0.5, 0.25, 0.0);
        assert_eq!(quad.screen_rect(100.0, 100.0), Some((Vec2::new(50.0, 25.0), Vec2::new(12.5, 25.0))));
    }

    #[test]
    fn skewed_quads_have_no_screen_rect() {
        let quad = Quad::new(0.0, 0.5, 0.25, 0.6, 0.25, 0.0, 0.0, 0.0);
        assert_eq!(quad.screen_rect(100.0, 100.0), None);
    }
}
