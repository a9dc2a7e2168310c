use glam::{Mat4, Vec3};

/// Movement speed while no boost key is held, in units per second.
pub const NORMAL_SPEED: f32 = 2.0;
/// Movement speed while the boost key is held.
pub const BOOST_SPEED: f32 = 10.0;

/// Fly camera with position, yaw/pitch in degrees, and projection parameters.
///
/// Angles are kept in degrees to match the mouse sensitivity unit
/// (degrees per pixel of cursor travel); conversion happens at the
/// trigonometry boundary.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: 90.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
            speed: NORMAL_SPEED,
            sensitivity: 0.2,
        }
    }
}

impl Camera {
    /// Unit forward vector derived from the current yaw/pitch.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Unit right vector (forward x world-up).
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Apply a cursor delta. `dy` is expected pre-inverted (positive = look
    /// up); pitch is clamped to avoid the look-at degeneracy at the poles.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-89.0, 89.0);
    }

    /// Move along a summed direction for one frame.
    ///
    /// The sum of held-key unit directions is renormalized before scaling,
    /// so diagonal movement covers the same distance as axis-aligned
    /// movement. A zero sum moves nothing.
    pub fn translate(&mut self, direction_sum: Vec3, dt: f32) {
        if direction_sum != Vec3::ZERO {
            self.position += direction_sum.normalize() * self.speed * dt;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn forward_is_unit_after_any_look() {
        let mut cam = Camera::default();
        for (dx, dy) in [(100.0, 0.0), (-37.5, 512.0), (0.1, -9000.0), (4.2, 4.2)] {
            cam.look(dx, dy);
            assert!((cam.forward().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut cam = Camera::default();
        cam.look(0.0, 100_000.0);
        assert_eq!(cam.pitch, 89.0);
        cam.look(0.0, -200_000.0);
        assert_eq!(cam.pitch, -89.0);
    }

    #[test]
    fn yaw_twenty_degrees_scenario() {
        let mut cam = Camera::default();
        cam.look(100.0, 0.0);
        assert!((cam.yaw - 20.0).abs() < EPS);
        assert_eq!(cam.pitch, 0.0);
        let fwd = cam.forward();
        assert!((fwd.x - 20.0_f32.to_radians().cos()).abs() < EPS);
        assert!(fwd.y.abs() < EPS);
        assert!((fwd.z - 20.0_f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn zero_direction_does_not_move() {
        let mut cam = Camera::default();
        cam.translate(Vec3::ZERO, 1.0);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut cam = Camera::default();
        let dt = 0.016;
        cam.translate(cam.forward() + cam.right(), dt);
        let expected = NORMAL_SPEED * dt;
        assert!((cam.position.length() - expected).abs() < EPS);
    }

    #[test]
    fn view_matrix_is_finite() {
        let mut cam = Camera::default();
        cam.position = Vec3::new(1.0, 2.0, 3.0);
        cam.look(45.0, -10.0);
        let vp = cam.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
