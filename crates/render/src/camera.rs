use glam::DVec3;
use vectorscape_common::{ScreenPoint, math};

/// Projection parameters for a [`Camera3D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Distance from the eye to the projection plane, in surface pixels.
    pub focal_length: f64,
    /// Minimum forward depth at which a point is representable.
    pub near_clip: f64,
    /// Maximum forward depth, used for depth fading and grid culling.
    pub far_clip: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            focal_length: 400.0,
            near_clip: 1.0,
            far_clip: 5000.0,
        }
    }
}

/// Errors from camera construction.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("focal length must be positive, got {0}")]
    NonPositiveFocalLength(f64),
    #[error("near clip must be positive, got {0}")]
    NonPositiveNearClip(f64),
    #[error("far clip ({far}) must exceed near clip ({near})")]
    FarNotBeyondNear { near: f64, far: f64 },
}

/// First-person yaw-only perspective camera.
///
/// Created once per scene; the host moves `position` and `rotation` every
/// frame to track the viewer. The camera never pitches or rolls, so the
/// horizon always sits at the vertical center of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: DVec3,
    /// Yaw in radians; increases for a clockwise turn viewed from above.
    pub rotation: f64,
    projection: Projection,
}

impl Camera3D {
    /// Build a camera at the origin facing `+Z`. Projection parameters are
    /// validated here so rendering never has to re-check them.
    pub fn new(projection: Projection) -> Result<Self, CameraError> {
        if projection.focal_length <= 0.0 {
            return Err(CameraError::NonPositiveFocalLength(projection.focal_length));
        }
        if projection.near_clip <= 0.0 {
            return Err(CameraError::NonPositiveNearClip(projection.near_clip));
        }
        if projection.far_clip <= projection.near_clip {
            return Err(CameraError::FarNotBeyondNear {
                near: projection.near_clip,
                far: projection.far_clip,
            });
        }
        Ok(Self {
            position: DVec3::ZERO,
            rotation: 0.0,
            projection,
        })
    }

    pub fn focal_length(&self) -> f64 {
        self.projection.focal_length
    }

    pub fn near_clip(&self) -> f64 {
        self.projection.near_clip
    }

    pub fn far_clip(&self) -> f64 {
        self.projection.far_clip
    }

    /// Unit forward direction in world space; rotation 0 faces `+Z`.
    pub fn forward(&self) -> DVec3 {
        DVec3::new(self.rotation.sin(), 0.0, self.rotation.cos())
    }

    /// Translate by `-position`, then rotate by `-rotation`. The returned
    /// `z` is the forward depth from the eye; `x`/`y` are lateral/vertical
    /// offsets.
    pub fn world_to_camera_space(&self, world: DVec3) -> DVec3 {
        math::rotate_y(world - self.position, -self.rotation)
    }

    /// Project a world point onto the surface.
    ///
    /// `None` when the point's camera-space depth is at or behind the near
    /// plane; such points are not representable without clipping.
    pub fn world_to_screen(
        &self,
        world: DVec3,
        screen_w: f64,
        screen_h: f64,
    ) -> Option<ScreenPoint> {
        let cam = self.world_to_camera_space(world);
        if cam.z <= self.projection.near_clip {
            return None;
        }
        Some(self.project_camera_space(cam, screen_w, screen_h))
    }

    /// Project a camera-space point whose depth is already known positive
    /// (clipped points land at `near_clip + EPS` or beyond). The depth
    /// precondition belongs to the caller.
    pub fn project_camera_space(&self, cam: DVec3, screen_w: f64, screen_h: f64) -> ScreenPoint {
        debug_assert!(cam.z > 0.0, "projection requires positive depth");
        ScreenPoint {
            x: cam.x / cam.z * self.projection.focal_length + screen_w / 2.0,
            y: screen_h / 2.0 - cam.y / cam.z * self.projection.focal_length,
            z: cam.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn test_camera() -> Camera3D {
        Camera3D::new(Projection::default()).unwrap()
    }

    #[test]
    fn rejects_non_positive_focal_length() {
        let err = Camera3D::new(Projection {
            focal_length: 0.0,
            ..Projection::default()
        })
        .unwrap_err();
        assert!(matches!(err, CameraError::NonPositiveFocalLength(_)));
    }

    #[test]
    fn rejects_non_positive_near_clip() {
        let err = Camera3D::new(Projection {
            near_clip: -1.0,
            ..Projection::default()
        })
        .unwrap_err();
        assert!(matches!(err, CameraError::NonPositiveNearClip(_)));
    }

    #[test]
    fn rejects_far_clip_at_or_before_near() {
        let err = Camera3D::new(Projection {
            near_clip: 10.0,
            far_clip: 10.0,
            ..Projection::default()
        })
        .unwrap_err();
        assert!(matches!(err, CameraError::FarNotBeyondNear { .. }));
    }

    #[test]
    fn center_invariant_on_forward_ray() {
        let cam = test_camera();
        for depth in [2.0, 100.0, 4999.0] {
            let p = cam
                .world_to_screen(DVec3::new(0.0, 0.0, depth), 1024.0, 768.0)
                .unwrap();
            assert_eq!((p.x, p.y), (512.0, 384.0));
            assert_eq!(p.z, depth);
        }
    }

    #[test]
    fn lateral_offset_projects_right_of_center() {
        // 100/100 * 400 + 512 = 912, per the projection formula.
        let cam = test_camera();
        let p = cam
            .world_to_screen(DVec3::new(100.0, 0.0, 100.0), 1024.0, 768.0)
            .unwrap();
        assert_eq!((p.x, p.y), (912.0, 384.0));
    }

    #[test]
    fn points_at_or_behind_near_clip_are_none() {
        let cam = test_camera();
        assert!(cam.world_to_screen(DVec3::new(0.0, 0.0, 0.5), 1024.0, 768.0).is_none());
        assert!(cam.world_to_screen(DVec3::new(0.0, 0.0, 1.0), 1024.0, 768.0).is_none());
        assert!(cam.world_to_screen(DVec3::new(0.0, 0.0, -50.0), 1024.0, 768.0).is_none());
        assert!(cam.world_to_screen(DVec3::new(0.0, 0.0, 1.01), 1024.0, 768.0).is_some());
    }

    #[test]
    fn forward_convention() {
        let mut cam = test_camera();
        assert!((cam.forward() - DVec3::Z).length() < 1e-12);
        cam.rotation = FRAC_PI_2;
        assert!((cam.forward() - DVec3::X).length() < 1e-9);
    }

    #[test]
    fn camera_space_follows_yaw() {
        // A point due east of the eye lands dead ahead after a quarter turn.
        let mut cam = test_camera();
        cam.position = DVec3::new(10.0, 50.0, -20.0);
        cam.rotation = FRAC_PI_2;
        let cs = cam.world_to_camera_space(DVec3::new(110.0, 50.0, -20.0));
        assert!((cs - DVec3::new(0.0, 0.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn camera_behind_target_after_half_turn() {
        let mut cam = test_camera();
        cam.rotation = PI;
        let cs = cam.world_to_camera_space(DVec3::new(0.0, 0.0, 100.0));
        assert!((cs.z - (-100.0)).abs() < 1e-9);
    }

    #[test]
    fn higher_world_points_project_upward() {
        let cam = test_camera();
        let low = cam.world_to_screen(DVec3::new(0.0, 0.0, 100.0), 1024.0, 768.0).unwrap();
        let high = cam.world_to_screen(DVec3::new(0.0, 50.0, 100.0), 1024.0, 768.0).unwrap();
        assert!(high.y < low.y, "surface y grows downward");
    }
}
