//! Drawing surface abstraction.
//!
//! The canvas issues every primitive in world coordinates after calling
//! [`Surface::set_transform`]; the surface is responsible for applying the
//! translate-then-scale mapping. Angles are in radians, measured clockwise
//! from the positive x axis (screen y points down).

use egui::{Color32, Pos2, Stroke, Vec2};

use super::transform::Transform;

pub trait Surface {
    /// Current pixel size of the drawable area.
    fn size(&self) -> Vec2;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn set_transform(&mut self, transform: Transform);

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke);

    /// Filled pie slice from `start_angle` sweeping `sweep` radians.
    fn fill_wedge(&mut self, center: Pos2, radius: f32, start_angle: f32, sweep: f32, color: Color32);

    /// Text centred horizontally and vertically on `center`.
    fn text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetTransform(Transform),
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Pos2,
        radius: f32,
        stroke: Stroke,
    },
    FillWedge {
        center: Pos2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        color: Color32,
    },
    Text {
        center: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Headless surface that records every call. Two renders are
/// pixel-identical exactly when their command lists are equal.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent [`Surface::clear`].
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| *command == DrawCommand::Clear)
            .map_or(0, |index| index + 1);
        &self.commands[start..]
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text strings of the last frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn fill_wedge(&mut self, center: Pos2, radius: f32, start_angle: f32, sweep: f32, color: Color32) {
        self.commands.push(DrawCommand::FillWedge {
            center,
            radius,
            start_angle,
            sweep,
            color,
        });
    }

    fn text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            center,
            text: text.to_string(),
            font_size,
            color,
        });
    }
}
