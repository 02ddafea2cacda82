use glam::DVec3;
use vectorscape_common::{Color, LineStyle};
use vectorscape_model::palette;

use crate::camera::Camera3D;
use crate::canvas::LineCanvas;
use crate::clip;

/// Ground grid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Spacing between adjacent grid lines, world units.
    pub cell_size: f64,
    /// Half-extent of generated lines around the camera, world units.
    pub extent: f64,
    /// Height of the ground plane.
    pub ground_y: f64,
    pub color: Color,
    pub line_width: f64,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
            extent: 4000.0,
            ground_y: 0.0,
            color: palette::GRID,
            line_width: 3.0,
            alpha: 0.85,
        }
    }
}

/// Procedurally generated ground plane.
///
/// Grid lines are regenerated around the camera every frame instead of
/// stored, so memory stays bounded no matter how far the viewer travels.
/// Line positions snap to multiples of the cell size, which keeps the
/// plane fixed in world space as the camera moves.
///
/// Unlike model edges, a grid line can run from behind the eye to past the
/// horizon, so each one is clipped against both the near and far planes.
pub struct GroundGrid<C: LineCanvas> {
    canvas: C,
    config: GridConfig,
}

impl<C: LineCanvas> GroundGrid<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, GridConfig::default())
    }

    pub fn with_config(canvas: C, config: GridConfig) -> Self {
        assert!(config.cell_size > 0.0, "cell_size must be positive");
        assert!(config.extent > 0.0, "extent must be positive");
        Self { canvas, config }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Release the canvas back to the caller, consuming the grid.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Regenerate and draw the grid for the camera's current position.
    /// Clears this grid's canvas first; call once per frame.
    pub fn render(&mut self, camera: &Camera3D, screen_w: f64, screen_h: f64) {
        let _span = tracing::trace_span!("ground_grid").entered();
        self.canvas.clear();

        let cell = self.config.cell_size;
        let y = self.config.ground_y;

        // Cell indices covering position +/- extent, snapped to the lattice.
        let first_x = ((camera.position.x - self.config.extent) / cell).floor() as i64;
        let last_x = ((camera.position.x + self.config.extent) / cell).ceil() as i64;
        let first_z = ((camera.position.z - self.config.extent) / cell).floor() as i64;
        let last_z = ((camera.position.z + self.config.extent) / cell).ceil() as i64;

        let start_x = first_x as f64 * cell;
        let end_x = last_x as f64 * cell;
        let start_z = first_z as f64 * cell;
        let end_z = last_z as f64 * cell;

        // Lines parallel to the Z axis.
        for ix in first_x..=last_x {
            let x = ix as f64 * cell;
            self.draw_grid_line(
                camera,
                DVec3::new(x, y, start_z),
                DVec3::new(x, y, end_z),
                screen_w,
                screen_h,
            );
        }

        // Lines parallel to the X axis.
        for iz in first_z..=last_z {
            let z = iz as f64 * cell;
            self.draw_grid_line(
                camera,
                DVec3::new(start_x, y, z),
                DVec3::new(end_x, y, z),
                screen_w,
                screen_h,
            );
        }
    }

    fn draw_grid_line(
        &mut self,
        camera: &Camera3D,
        p1: DVec3,
        p2: DVec3,
        screen_w: f64,
        screen_h: f64,
    ) {
        let a = camera.world_to_camera_space(p1);
        let b = camera.world_to_camera_space(p2);
        let Some((a, b)) = clip::clip_depth_range(a, b, camera.near_clip(), camera.far_clip())
        else {
            return;
        };
        let s1 = camera.project_camera_space(a, screen_w, screen_h);
        let s2 = camera.project_camera_space(b, screen_w, screen_h);
        let style = LineStyle {
            width: self.config.line_width,
            color: self.config.color,
            alpha: self.config.alpha,
        };
        self.canvas.stroke_line(s1.x, s1.y, s2.x, s2.y, style);
    }
}
