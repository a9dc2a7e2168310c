//! Scene state for the cube renderer.
//!
//! Everything here is plain data mutated once per frame from the one render
//! thread: the fly camera, the light rig, cursor-delta tracking, the frame
//! clock, and the procedural fractal layout.
//!
//! # Invariants
//! - Camera pitch is clamped before the forward vector is recomputed.
//! - One writer per field per frame: the input sampler owns camera movement
//!   and light colors/strengths, the orbit update owns the light position.
//! - The fractal layout is generated once and read-only afterwards.

mod camera;
mod clock;
mod cursor;
mod layout;
mod light;

pub use camera::{BOOST_SPEED, Camera, NORMAL_SPEED};
pub use clock::{FpsCounter, FrameClock};
pub use cursor::CursorTracker;
pub use layout::{LAYOUT_CAPACITY, LayoutCube, fractal_layout, layout_positions};
pub use light::Lights;
