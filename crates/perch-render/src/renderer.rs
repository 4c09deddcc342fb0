//! Drawing surface abstraction.

use crate::types::{Color, Rect};

/// The operations overlay decorations need from a drawing backend.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a soft shadow cast by `rect`, blurred `depth` pixels outward.
    fn draw_shadow(&mut self, rect: Rect, depth: f32, color: Color);
}

/// A single recorded draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle fill.
    FillRect { rect: Rect, color: Color },
    /// Drop shadow.
    Shadow { rect: Rect, depth: f32, color: Color },
}

/// A renderer that records commands instead of drawing them.
///
/// Useful for compositing tests and for replaying a frame onto another
/// backend.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replay the recorded commands onto another renderer.
    pub fn replay(&self, target: &mut dyn Renderer) {
        for command in &self.commands {
            match *command {
                DrawCommand::FillRect { rect, color } => target.fill_rect(rect, color),
                DrawCommand::Shadow { rect, depth, color } => {
                    target.draw_shadow(rect, depth, color)
                }
            }
        }
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        tracing::trace!(?rect, ?color, "record fill_rect");
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_shadow(&mut self, rect: Rect, depth: f32, color: Color) {
        tracing::trace!(?rect, depth, "record draw_shadow");
        self.commands.push(DrawCommand::Shadow { rect, depth, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_replay() {
        let mut first = RecordingRenderer::new();
        first.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        first.draw_shadow(Rect::new(0.0, 0.0, 1.0, 1.0), 2.0, Color::BLACK);

        let mut second = RecordingRenderer::new();
        first.replay(&mut second);
        assert_eq!(first.commands(), second.commands());

        assert_eq!(second.take().len(), 2);
        assert!(second.commands().is_empty());
    }
}
