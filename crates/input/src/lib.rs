//! Input sampling: held semantic controls applied to scene state once per
//! frame.
//!
//! Raw window events are mapped to [`Control`] values at the application
//! boundary; nothing in here knows about key codes or the windowing crate.
//!
//! # Invariants
//! - No edge detection: a held control re-applies its effect every frame.
//! - Movement is delta-time scaled; color/strength steps are per-frame.

pub mod control;
pub mod sampler;

pub use control::{Control, HeldControls};
pub use sampler::sample;
