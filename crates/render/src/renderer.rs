use glam::{DMat3, DVec3};
use vectorscape_common::{Color, LineStyle, ScreenPoint};
use vectorscape_model::WireframeModel;

use crate::camera::Camera3D;
use crate::canvas::LineCanvas;
use crate::clip;

/// Floor for depth-faded edge opacity, so edges never vanish at range.
const MIN_EDGE_ALPHA: f64 = 0.3;

/// Per-frame renderer counters, reset by [`WireframeRenderer::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Edges that produced a stroke command.
    pub edges_drawn: usize,
    /// Drawn edges that needed near-plane clipping first.
    pub edges_clipped: usize,
    /// Edges skipped with both endpoints at or behind the near plane.
    pub edges_culled: usize,
}

/// Draws wireframe model instances through a camera onto an owned canvas.
///
/// One renderer serves every instance in the scene; the per-instance
/// position/rotation/color arrive with each [`render`](Self::render) call.
/// The host clears once per frame, then renders each visible instance.
pub struct WireframeRenderer<C: LineCanvas> {
    canvas: C,
    line_width: f64,
    stats: FrameStats,
    // Scratch projection cache, reused across calls to avoid per-instance
    // allocation at 60 Hz.
    screen_points: Vec<Option<ScreenPoint>>,
}

impl<C: LineCanvas> WireframeRenderer<C> {
    /// Default stroke width in surface pixels.
    pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

    pub fn new(canvas: C) -> Self {
        Self::with_line_width(canvas, Self::DEFAULT_LINE_WIDTH)
    }

    pub fn with_line_width(canvas: C, line_width: f64) -> Self {
        Self {
            canvas,
            line_width,
            stats: FrameStats::default(),
            screen_points: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Release the canvas back to the caller, consuming the renderer.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Counters accumulated since the last [`clear`](Self::clear).
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Reset the canvas and the frame counters. Call once per frame before
    /// the first instance is drawn.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.stats = FrameStats::default();
    }

    /// Draw one model instance at a world position and yaw.
    ///
    /// Edge color precedence: per-edge override, then `color_override`,
    /// then the model color.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        camera: &Camera3D,
        model: &WireframeModel,
        position: DVec3,
        rotation: f64,
        screen_w: f64,
        screen_h: f64,
        color_override: Option<Color>,
    ) {
        let instance_color = color_override.unwrap_or(model.color());
        let rot = DMat3::from_rotation_y(rotation);

        self.screen_points.clear();
        self.screen_points.extend(
            model
                .vertices()
                .iter()
                .map(|&v| camera.world_to_screen(rot * v + position, screen_w, screen_h)),
        );

        let mut drawn = 0usize;
        let mut clipped = 0usize;
        let mut culled = 0usize;

        for edge in model.edges() {
            let color = edge.color.unwrap_or(instance_color);
            match (self.screen_points[edge.start], self.screen_points[edge.end]) {
                (Some(p1), Some(p2)) => {
                    self.stroke_edge(camera.far_clip(), p1, p2, color);
                    drawn += 1;
                }
                _ => {
                    // At least one endpoint is at or behind the near plane;
                    // clip in camera space, then project the survivor.
                    let cam_a = camera
                        .world_to_camera_space(rot * model.vertices()[edge.start] + position);
                    let cam_b = camera
                        .world_to_camera_space(rot * model.vertices()[edge.end] + position);
                    match clip::clip_near(cam_a, cam_b, camera.near_clip()) {
                        Some((a, b)) => {
                            let p1 = camera.project_camera_space(a, screen_w, screen_h);
                            let p2 = camera.project_camera_space(b, screen_w, screen_h);
                            self.stroke_edge(camera.far_clip(), p1, p2, color);
                            drawn += 1;
                            clipped += 1;
                        }
                        None => culled += 1,
                    }
                }
            }
        }

        self.stats.edges_drawn += drawn;
        self.stats.edges_clipped += clipped;
        self.stats.edges_culled += culled;
        tracing::trace!(drawn, clipped, culled, "instance rendered");
    }

    /// Stroke a line directly in surface coordinates (HUD overlays).
    pub fn draw_screen_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        alpha: f64,
    ) {
        let style = LineStyle {
            width: self.line_width,
            color,
            alpha,
        };
        self.canvas.stroke_line(x1, y1, x2, y2, style);
    }

    /// Stroke one visible edge, fading opacity with mean depth.
    fn stroke_edge(&mut self, far_clip: f64, p1: ScreenPoint, p2: ScreenPoint, color: Color) {
        let avg_depth = (p1.z + p2.z) / 2.0;
        let alpha = (1.0 - avg_depth / far_clip).max(MIN_EDGE_ALPHA);
        let style = LineStyle {
            width: self.line_width,
            color,
            alpha,
        };
        self.canvas.stroke_line(p1.x, p1.y, p2.x, p2.y, style);
    }
}
