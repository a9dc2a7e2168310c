use crate::control::{Control, HeldControls};
use cubefract_scene::{BOOST_SPEED, Camera, Lights, NORMAL_SPEED};
use glam::Vec3;

/// Per-frame step for the ambient and point-light strengths.
pub const STRENGTH_STEP: f32 = 0.1;
/// Per-frame step for one ambient color channel.
pub const COLOR_STEP: f32 = 0.005;

/// Apply one frame of held controls to the camera and lights.
///
/// Movement directions sum before normalization so opposite keys cancel and
/// diagonals are not faster. The speed level is re-sampled after movement:
/// a freshly held boost key changes the speed the camera reads this frame
/// but scales displacement from the next frame.
pub fn sample(held: &HeldControls, camera: &mut Camera, lights: &mut Lights, dt: f32) {
    if held.is_held(Control::AmbientStrengthUp) {
        lights.step_ambient_strength(STRENGTH_STEP);
    }
    if held.is_held(Control::AmbientStrengthDown) {
        lights.step_ambient_strength(-STRENGTH_STEP);
    }

    if held.is_held(Control::PointStrengthUp) {
        lights.step_point_strength(STRENGTH_STEP);
    }
    if held.is_held(Control::PointStrengthDown) {
        lights.step_point_strength(-STRENGTH_STEP);
    }

    let channel_steps = [
        (Control::AmbientRedUp, 0, COLOR_STEP),
        (Control::AmbientRedDown, 0, -COLOR_STEP),
        (Control::AmbientGreenUp, 1, COLOR_STEP),
        (Control::AmbientGreenDown, 1, -COLOR_STEP),
        (Control::AmbientBlueUp, 2, COLOR_STEP),
        (Control::AmbientBlueDown, 2, -COLOR_STEP),
    ];
    for (control, channel, delta) in channel_steps {
        if held.is_held(control) {
            lights.step_channel(channel, delta);
        }
    }

    let mut direction = Vec3::ZERO;
    if held.is_held(Control::MoveForward) {
        direction += camera.forward();
    }
    if held.is_held(Control::MoveBack) {
        direction -= camera.forward();
    }
    if held.is_held(Control::StrafeLeft) {
        direction -= camera.right();
    }
    if held.is_held(Control::StrafeRight) {
        direction += camera.right();
    }
    camera.translate(direction, dt);

    camera.speed = if held.is_held(Control::Boost) {
        BOOST_SPEED
    } else {
        NORMAL_SPEED
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn frame(held: &HeldControls, camera: &mut Camera, lights: &mut Lights) {
        sample(held, camera, lights, DT);
    }

    #[test]
    fn no_movement_keys_means_no_movement() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        frame(&HeldControls::new(), &mut camera, &mut lights);
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();
        held.set(Control::MoveForward, true);
        held.set(Control::MoveBack, true);
        frame(&held, &mut camera, &mut lights);
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn diagonal_displacement_equals_speed_times_dt() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();
        held.set(Control::MoveForward, true);
        held.set(Control::StrafeRight, true);
        frame(&held, &mut camera, &mut lights);
        let expected = NORMAL_SPEED * DT;
        assert!((camera.position.length() - expected).abs() < 1e-5);
    }

    #[test]
    fn boost_is_a_two_level_switch() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();

        held.set(Control::Boost, true);
        frame(&held, &mut camera, &mut lights);
        assert_eq!(camera.speed, BOOST_SPEED);

        held.set(Control::Boost, false);
        frame(&held, &mut camera, &mut lights);
        assert_eq!(camera.speed, NORMAL_SPEED);
    }

    #[test]
    fn boost_scales_displacement_from_the_next_frame() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();
        held.set(Control::Boost, true);
        held.set(Control::MoveForward, true);

        // Frame 1 still moves at the normal speed sampled last frame.
        frame(&held, &mut camera, &mut lights);
        assert!((camera.position.length() - NORMAL_SPEED * DT).abs() < 1e-5);

        // Frame 2 moves at the boosted speed.
        let before = camera.position;
        frame(&held, &mut camera, &mut lights);
        assert!(((camera.position - before).length() - BOOST_SPEED * DT).abs() < 1e-4);
    }

    #[test]
    fn color_steps_clamp_but_strength_steps_do_not() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();
        held.set(Control::AmbientRedUp, true);
        held.set(Control::AmbientStrengthUp, true);

        for _ in 0..300 {
            frame(&held, &mut camera, &mut lights);
        }
        assert_eq!(lights.ambient_color.x, 1.0);
        assert!((lights.ambient_strength - (1.0 + 300.0 * STRENGTH_STEP)).abs() < 1e-3);
    }

    #[test]
    fn strafe_moves_along_the_right_vector() {
        let mut camera = Camera::default();
        let mut lights = Lights::default();
        let mut held = HeldControls::new();
        held.set(Control::StrafeRight, true);
        frame(&held, &mut camera, &mut lights);
        let expected = camera.right() * NORMAL_SPEED * DT;
        assert!((camera.position - expected).length() < 1e-5);
    }
}
