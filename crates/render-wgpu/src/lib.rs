//! wgpu render backend for the cube demo.
//!
//! One-time setup uploads the static cube mesh and the one texture, compiles
//! the two shader stages from disk, and links them into the single pipeline
//! used for the whole process lifetime. Per frame the renderer writes the
//! frame uniforms and instance transforms and issues one instanced draw.
//!
//! # Invariants
//! - The renderer never mutates scene state; it only reads camera and lights.
//! - Attribute and binding slots live in [`bindings`] and must match the
//!   shader source files verbatim.
//! - Every setup failure (file read, stage compile, pipeline link, texture
//!   decode) is fatal and carries a diagnostic for the caller to print.

pub mod bindings;
mod gpu;
mod mesh;
mod shader;
mod texture;

pub use gpu::{CubeRenderer, InitError, RenderMode, RenderSources};
pub use shader::{ShaderError, ShaderStage};
pub use texture::TextureError;
