use std::collections::HashSet;

/// A semantic control the sampler understands.
///
/// The application maps physical keys to these once, at the event boundary,
/// so the sampler and its tests never touch windowing types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    Boost,
    AmbientRedUp,
    AmbientRedDown,
    AmbientGreenUp,
    AmbientGreenDown,
    AmbientBlueUp,
    AmbientBlueDown,
    PointStrengthUp,
    PointStrengthDown,
    AmbientStrengthUp,
    AmbientStrengthDown,
}

/// The set of controls currently held down.
#[derive(Debug, Default)]
pub struct HeldControls {
    set: HashSet<Control>,
}

impl HeldControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, held: bool) {
        if held {
            self.set.insert(control);
        } else {
            self.set.remove(&control);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.set.contains(&control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut held = HeldControls::new();
        assert!(!held.is_held(Control::Boost));
        held.set(Control::Boost, true);
        assert!(held.is_held(Control::Boost));
        held.set(Control::Boost, false);
        assert!(!held.is_held(Control::Boost));
    }

    #[test]
    fn release_of_unheld_control_is_harmless() {
        let mut held = HeldControls::new();
        held.set(Control::MoveForward, false);
        assert!(!held.is_held(Control::MoveForward));
    }
}
