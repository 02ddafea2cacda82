use serde::{Deserialize, Serialize};
use vectorscape_common::LineStyle;

/// Abstract 2D drawing surface capable of stroked line segments.
///
/// A canvas is exclusively owned by the renderer that draws to it. When the
/// owning scene ends, the canvas is handed back through an explicit release
/// path (`into_canvas`/`into_commands`) or dropped with its owner; it is
/// never shared between renderers.
pub trait LineCanvas {
    /// Reset the surface for a new frame.
    fn clear(&mut self);

    /// Stroke a straight line between two surface points.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: LineStyle);
}

/// One recorded line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCommand {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: LineStyle,
}

/// Canvas backend that records stroke commands per frame.
///
/// Downstream hosts replay the command list into whatever graphics API they
/// own; tests read it to count and inspect draw calls.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<LineCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[LineCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded commands, consuming the list.
    pub fn into_commands(self) -> Vec<LineCommand> {
        self.commands
    }
}

impl LineCanvas for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: LineStyle) {
        self.commands.push(LineCommand {
            x1,
            y1,
            x2,
            y2,
            style,
        });
    }
}
