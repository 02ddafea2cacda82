use std::f64::consts::TAU;

use glam::DVec3;
use vectorscape_common::{Color, LineStyle, ScreenPoint};
use vectorscape_model::palette;

use crate::camera::Camera3D;
use crate::canvas::LineCanvas;

/// Horizon mountain ring configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainsConfig {
    /// Distance from the camera to the ring of peaks.
    pub distance: f64,
    /// Number of peaks around the full circle.
    pub peak_count: usize,
    /// Peaks taller than this get a vertical accent line to the horizon.
    pub accent_height: f64,
    pub color: Color,
}

impl Default for MountainsConfig {
    fn default() -> Self {
        Self {
            distance: 4000.0,
            peak_count: 24,
            accent_height: 250.0,
            color: palette::MOUNTAINS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Peak {
    angle: f64,
    height: f64,
}

/// Index of the one designated tall peak.
const VOLCANO_PEAK: usize = 6;
/// Ground offset of the base line drawn under the ridge.
const BASE_LINE_LIFT: f64 = 20.0;

const RIDGE_WIDTH: f64 = 2.0;
const RIDGE_ALPHA: f64 = 0.8;
const ACCENT_WIDTH: f64 = 1.0;
const ACCENT_ALPHA: f64 = 0.4;
const BASE_WIDTH: f64 = 1.0;
const BASE_ALPHA: f64 = 0.5;

/// Distant mountain ridge wrapping the full horizon.
///
/// The ring follows the camera horizontally, so it always reads as
/// infinitely far away. Peak placement comes from a splitmix64 sequence
/// seeded at construction: every frame, and every run with the same seed,
/// sees the same ridge.
pub struct Mountains<C: LineCanvas> {
    canvas: C,
    config: MountainsConfig,
    peaks: Vec<Peak>,
}

impl<C: LineCanvas> Mountains<C> {
    pub fn new(canvas: C, seed: u64) -> Self {
        Self::with_config(canvas, seed, MountainsConfig::default())
    }

    pub fn with_config(canvas: C, seed: u64, config: MountainsConfig) -> Self {
        assert!(config.peak_count >= 2, "a ridge needs at least two peaks");
        let step = TAU / config.peak_count as f64;
        let mut state = seed;
        let mut peaks = Vec::with_capacity(config.peak_count);
        for i in 0..config.peak_count {
            state = splitmix64(state);
            let jitter = (unit_f64(state) - 0.5) * step * 0.5;
            state = splitmix64(state);
            let roll = unit_f64(state);
            let height = if i == VOLCANO_PEAK {
                500.0 + roll * 100.0
            } else {
                150.0 + roll * 350.0
            };
            peaks.push(Peak {
                angle: i as f64 * step + jitter,
                height,
            });
        }
        peaks.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        Self {
            canvas,
            config,
            peaks,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Release the canvas back to the caller.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Draw the ridge for the camera's current position and yaw. Clears
    /// this layer's canvas first; call once per frame.
    pub fn render(&mut self, camera: &Camera3D, screen_w: f64, screen_h: f64) {
        let _span = tracing::trace_span!("mountains").entered();
        self.canvas.clear();

        let mut visible: Vec<(ScreenPoint, Peak)> = Vec::with_capacity(self.peaks.len());
        for &peak in &self.peaks {
            let world = self.peak_world_position(camera, peak.angle, peak.height);
            if let Some(sp) = camera.world_to_screen(world, screen_w, screen_h) {
                visible.push((sp, peak));
            }
        }
        if visible.len() < 2 {
            return;
        }
        visible.sort_by(|a, b| a.0.x.total_cmp(&b.0.x));

        // Ridge outline across the visible peaks.
        let ridge = LineStyle {
            width: RIDGE_WIDTH,
            color: self.config.color,
            alpha: RIDGE_ALPHA,
        };
        for pair in visible.windows(2) {
            let (a, b) = (pair[0].0, pair[1].0);
            self.canvas.stroke_line(a.x, a.y, b.x, b.y, ridge);
        }

        // Vertical accents from the tall peaks down to the horizon.
        let horizon_y = screen_h / 2.0;
        let accent = LineStyle {
            width: ACCENT_WIDTH,
            color: self.config.color,
            alpha: ACCENT_ALPHA,
        };
        for &(sp, peak) in &visible {
            if peak.height > self.config.accent_height {
                self.canvas.stroke_line(sp.x, sp.y, sp.x, horizon_y, accent);
            }
        }

        // Base line along the foot of the ridge.
        let base = LineStyle {
            width: BASE_WIDTH,
            color: self.config.color,
            alpha: BASE_ALPHA,
        };
        let mut previous: Option<ScreenPoint> = None;
        for &(_, peak) in &visible {
            let world = self.peak_world_position(camera, peak.angle, BASE_LINE_LIFT);
            let Some(ground) = camera.world_to_screen(world, screen_w, screen_h) else {
                continue;
            };
            if let Some(prev) = previous {
                self.canvas.stroke_line(prev.x, prev.y, ground.x, ground.y, base);
            }
            previous = Some(ground);
        }
    }

    fn peak_world_position(&self, camera: &Camera3D, angle: f64, height: f64) -> DVec3 {
        DVec3::new(
            camera.position.x + angle.sin() * self.config.distance,
            height,
            camera.position.z + angle.cos() * self.config.distance,
        )
    }
}

/// Splitmix64 step function: fast, deterministic, good distribution.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Map a u64 to `[0, 1)` using the top 53 bits.
fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::canvas::DisplayList;

    const W: f64 = 1024.0;
    const H: f64 = 768.0;

    fn camera() -> Camera3D {
        let mut cam = Camera3D::new(Projection::default()).unwrap();
        cam.position = DVec3::new(0.0, 50.0, 0.0);
        cam
    }

    #[test]
    fn same_seed_same_ridge() {
        let cam = camera();
        let mut m1 = Mountains::new(DisplayList::new(), 7);
        let mut m2 = Mountains::new(DisplayList::new(), 7);
        m1.render(&cam, W, H);
        m2.render(&cam, W, H);
        assert_eq!(m1.canvas().commands(), m2.canvas().commands());
        assert!(!m1.canvas().is_empty());
    }

    #[test]
    fn different_seeds_diverge() {
        let cam = camera();
        let mut m1 = Mountains::new(DisplayList::new(), 1);
        let mut m2 = Mountains::new(DisplayList::new(), 2);
        m1.render(&cam, W, H);
        m2.render(&cam, W, H);
        assert_ne!(m1.canvas().commands(), m2.canvas().commands());
    }

    #[test]
    fn only_the_forward_half_is_visible() {
        // Peaks behind the camera project to None; roughly half the ring
        // survives, and the ridge has one fewer segment than peaks.
        let cam = camera();
        let mut m = Mountains::new(DisplayList::new(), 42);
        m.render(&cam, W, H);
        let ridge_segments = m
            .canvas()
            .commands()
            .iter()
            .filter(|c| c.style.width == RIDGE_WIDTH && c.style.alpha == RIDGE_ALPHA)
            .count();
        assert!(ridge_segments >= 4, "expected a visible ridge");
        assert!(ridge_segments < 24, "the full ring can never be on screen");
    }

    #[test]
    fn peak_heights_stay_in_band() {
        let m = Mountains::new(DisplayList::new(), 99);
        for (i, peak) in m.peaks.iter().enumerate() {
            if i == VOLCANO_PEAK {
                assert!((500.0..600.0).contains(&peak.height));
            } else {
                assert!((150.0..500.0).contains(&peak.height));
            }
        }
    }

    #[test]
    fn ridge_follows_the_camera() {
        // Moving the camera far sideways leaves the ridge geometry
        // identical relative to the viewer.
        let mut m = Mountains::new(DisplayList::new(), 5);
        let cam_a = camera();
        m.render(&cam_a, W, H);
        let first: Vec<_> = m.canvas().commands().to_vec();

        let mut cam_b = camera();
        cam_b.position += DVec3::new(120_000.0, 0.0, -80_000.0);
        m.render(&cam_b, W, H);
        let second = m.canvas().commands();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second) {
            assert!((a.x1 - b.x1).abs() < 1e-6);
            assert!((a.y1 - b.y1).abs() < 1e-6);
        }
    }
}
