use glam::Vec3;

/// Radius of the point light's orbit around the origin, in the XZ plane.
const ORBIT_RADIUS: f32 = 3.0;

/// Light rig: a flat ambient term plus one orbiting point light.
///
/// Colors/strengths are written by the input sampler; the position is
/// written only by [`Lights::orbit`] once per frame.
pub struct Lights {
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub point_position: Vec3,
    pub point_strength: f32,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::splat(0.5),
            ambient_strength: 1.0,
            point_position: Vec3::ZERO,
            point_strength: 1.0,
        }
    }
}

impl Lights {
    /// Step one ambient channel, clamped to [0, 1].
    pub fn step_channel(&mut self, channel: usize, delta: f32) {
        let v = &mut self.ambient_color[channel];
        *v = (*v + delta).clamp(0.0, 1.0);
    }

    /// Step the ambient strength. Deliberately unclamped.
    pub fn step_ambient_strength(&mut self, delta: f32) {
        self.ambient_strength += delta;
    }

    /// Step the point-light strength. Deliberately unclamped.
    pub fn step_point_strength(&mut self, delta: f32) {
        self.point_strength += delta;
    }

    /// Advance the point light along its orbit for the given elapsed time
    /// in seconds since startup.
    pub fn orbit(&mut self, elapsed: f32) {
        self.point_position = Vec3::new(
            elapsed.cos() * ORBIT_RADIUS,
            0.0,
            elapsed.sin() * ORBIT_RADIUS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_steps_stay_in_unit_range() {
        let mut lights = Lights::default();
        for _ in 0..500 {
            lights.step_channel(0, 0.005);
        }
        assert_eq!(lights.ambient_color.x, 1.0);
        for _ in 0..500 {
            lights.step_channel(0, -0.005);
        }
        assert_eq!(lights.ambient_color.x, 0.0);
    }

    #[test]
    fn strengths_are_unclamped() {
        let mut lights = Lights::default();
        for _ in 0..30 {
            lights.step_ambient_strength(0.1);
            lights.step_point_strength(-0.1);
        }
        assert!(lights.ambient_strength > 1.0);
        assert!(lights.point_strength < 0.0);
    }

    #[test]
    fn orbit_stays_on_radius_three_circle() {
        let mut lights = Lights::default();
        for t in [0.0, 0.7, 2.4, 10.3] {
            lights.orbit(t);
            let p = lights.point_position;
            assert_eq!(p.y, 0.0);
            assert!((Vec3::new(p.x, 0.0, p.z).length() - ORBIT_RADIUS).abs() < 1e-5);
        }
    }
}
