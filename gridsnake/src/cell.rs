use tetra::graphics::Color;
use crate::layout::CellLayout;
use crate::rendering::{Quad, QuadSink};

/// One square of the play field, anchored at its top-left corner in device coordinates
#[derive(Clone)]
pub struct GridCell {
    x: f32,
    y: f32,
    layout: CellLayout,
}

impl GridCell {
    pub fn new(layout: &CellLayout, x: f32, y: f32) -> Self {
        GridCell {
            x,
            y,
            layout: layout.clone(),
        }
    }

    /// Emits the quad `[x, x + offset] x [y - length, y]`
    pub fn draw(&self, sink: &mut dyn QuadSink, color: Color) {
        let offset = self.layout.offset();
        let length = self.layout.length();
        sink.draw_quad(Quad::from_bounds(self.x, self.y, self.x + offset, self.y - length), color);
    }

    pub fn reposition(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }
}

impl std::fmt::Debug for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridCell")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
