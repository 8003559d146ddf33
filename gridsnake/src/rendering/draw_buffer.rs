use tetra::{
    graphics::{
        self,
        mesh::{
            Mesh,
            ShapeStyle,
        },
        Color,
        DrawParams,
        Rectangle,
    },
    math::Vec2,
    Context,
};
use tracing::trace;
use super::{
    Quad,
    QuadSink,
};

/// Collects one frame of draw calls so they can be flushed to the window in one go
pub struct DrawBuffer {
    clear_color: Option<Color>,
    commands: Vec<DrawCommand>,
    unit_quad: Option<Mesh>,
}

impl DrawBuffer {
    pub fn new() -> Self {
        DrawBuffer {
            clear_color: None,
            commands: vec![],
            unit_quad: None,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The color requested by the last `clear` this frame
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn is_empty(&self) -> bool {
        self.clear_color.is_none() && self.commands.is_empty()
    }

    /// Draws every buffered command to `ctx`, converting device coordinates with `width`/`height`,
    /// then empties the buffer.
    ///
    /// Axis-aligned quads reuse one unit-square mesh scaled into place. Anything else gets its own polygon.
    pub fn flush(&mut self, ctx: &mut Context, width: f32, height: f32) -> tetra::Result {
        trace!(commands = %self.debug_command_buffer(), "flushing draw buffer");

        if let Some(color) = self.clear_color.take() {
            graphics::clear(ctx, color);
        }

        if self.unit_quad.is_none() {
            self.unit_quad = Some(Mesh::rectangle(ctx, ShapeStyle::Fill, Rectangle::new(0.0, 0.0, 1.0, 1.0))?);
        }

        for cmd in self.commands.iter() {
            match (cmd.quad.screen_rect(width, height), self.unit_quad.as_ref()) {
                (Some((position, size)), Some(unit_quad)) => {
                    unit_quad.draw(ctx, DrawParams::new()
                        .position(position)
                        .scale(Vec2::new(size.x, size.y))
                        .color(cmd.color));
                }
                _ => {
                    let points = cmd.quad.to_screen(width, height);
                    let mesh = Mesh::polygon(ctx, ShapeStyle::Fill, &points)?;
                    mesh.draw(ctx, DrawParams::new().color(cmd.color));
                }
            }
        }

        self.commands.clear();
        Ok(())
    }

    pub fn debug_command_buffer(&self) -> String {
        let mut output: String = "START:".into();
        for elem in self.commands.iter() {
            let p = elem.quad.points;
            output = format!("{}\n(x: {}, y: {}) -> (x: {}, y: {})", output, p[0].x, p[0].y, p[2].x, p[2].y);
        }
        format!("{}\nEND", output)
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        DrawBuffer::new()
    }
}

impl QuadSink for DrawBuffer {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.commands.clear();
    }

    fn draw_quad(&mut self, quad: Quad, color: Color) {
        self.commands.push(DrawCommand::new(quad).color(color));
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCommand {
    /// Corners in device coordinates
    pub quad: Quad,

    /// Fill color. Defaults to `Color::WHITE`.
    pub color: Color,
}

impl DrawCommand {
    pub fn new(quad: Quad) -> Self {
        DrawCommand {
            quad,
            color: Color::WHITE,
        }
    }

    /// Sets the fill color.
    pub fn color(mut self, color: Color) -> DrawCommand {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_starts_a_new_frame() {
        let mut buffer = DrawBuffer::new();
        assert!(buffer.is_empty());

        buffer.draw_quad(Quad::from_bounds(0.0, 0.0, 0.1, -0.1), Color::RED);
        buffer.clear(Color::BLACK);
        buffer.draw_quad(Quad::from_bounds(0.5, 0.5, 0.6, 0.4), Color::GREEN);

        assert_eq!(buffer.clear_color(), Some(Color::BLACK));
        assert_eq!(buffer.commands().len(), 1);
        assert_eq!(buffer.commands()[0].color, Color::GREEN);
    }

    #[test]
    fn debug_output_lists_commands() {
        let mut buffer = DrawBuffer::new();
        buffer.draw_quad(Quad::from_bounds(0.0, 0.5, 0.25, 0.0), Color::WHITE);
        let out = buffer.debug_command_buffer();
        assert!(out.contains("(x: 0, y: 0.5) -> (x: 0.25, y: 0)"));
    }
}
