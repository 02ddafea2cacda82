use glam::{DMat3, DVec3};

/// Rotate `v` about the vertical axis by `theta` radians.
///
/// Convention: `x' = x*cos(theta) + z*sin(theta)` and
/// `z' = -x*sin(theta) + z*cos(theta)` with `y` untouched,
/// so positive `theta` is a clockwise turn viewed from above. The rotation
/// preserves magnitude and is 2π-periodic.
///
/// Other vector operations (add, scale, unclamped `lerp`) come straight
/// from glam. For normalization, `DVec3::normalize_or_zero` is the crate
/// convention: a zero-length input yields the zero vector.
pub fn rotate_y(v: DVec3, theta: f64) -> DVec3 {
    DMat3::from_rotation_y(theta) * v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!(
            (a - b).length() < TOLERANCE,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn rotate_y_zero_is_identity() {
        let v = DVec3::new(3.0, -2.0, 7.0);
        assert_close(rotate_y(v, 0.0), v);
    }

    #[test]
    fn rotate_y_full_turn_is_identity() {
        let v = DVec3::new(3.0, -2.0, 7.0);
        assert_close(rotate_y(v, TAU), v);
    }

    #[test]
    fn rotate_y_preserves_magnitude() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        for theta in [
            0.0,
            PI / 4.0,
            FRAC_PI_2,
            PI,
            3.0 * PI / 2.0,
            TAU,
            -PI / 3.0,
        ] {
            let rotated = rotate_y(v, theta);
            assert!(
                (rotated.length() - v.length()).abs() < TOLERANCE,
                "magnitude changed at theta={theta}"
            );
        }
    }

    #[test]
    fn rotate_y_quarter_turn_maps_z_to_x() {
        // +Z swings to +X under a clockwise quarter turn.
        assert_close(rotate_y(DVec3::Z, FRAC_PI_2), DVec3::X);
        assert_close(rotate_y(DVec3::X, FRAC_PI_2), -DVec3::Z);
    }

    #[test]
    fn rotate_y_leaves_vertical_untouched() {
        let v = DVec3::new(0.0, 5.0, 0.0);
        assert_close(rotate_y(v, 1.234), v);
    }

    #[test]
    fn rotate_y_is_periodic() {
        let v = DVec3::new(-4.0, 1.0, 2.5);
        let theta = 0.7;
        assert_close(rotate_y(v, theta + TAU), rotate_y(v, theta));
    }

    #[test]
    fn normalize_or_zero_on_zero_vector() {
        assert_eq!(DVec3::ZERO.normalize_or_zero(), DVec3::ZERO);
    }
}
