//! Attribute and binding slot contract shared with the shader source files.
//!
//! These numbers are a wire contract between the pipeline setup here and the
//! `@location`/`@binding` attributes in `shaders/cube.vert.wgsl` and
//! `shaders/cube.frag.wgsl`. Change one side and the other must follow.
//!
//! The texcoord slot is deliberately sparse (8, not 2): slots 2 through 5
//! carry the per-instance model matrix columns.

/// Vertex position, `vec3<f32>`.
pub const ATTR_POSITION: u32 = 0;
/// Vertex normal, `vec3<f32>`.
pub const ATTR_NORMAL: u32 = 1;
/// Per-instance model matrix columns, `vec4<f32>` each.
pub const ATTR_MODEL_COL0: u32 = 2;
pub const ATTR_MODEL_COL1: u32 = 3;
pub const ATTR_MODEL_COL2: u32 = 4;
pub const ATTR_MODEL_COL3: u32 = 5;
/// Vertex texture coordinate, `vec2<f32>`.
pub const ATTR_TEXCOORD: u32 = 8;

/// Frame uniform buffer (view-projection + lighting + camera position).
pub const BIND_FRAME_UNIFORMS: u32 = 0;
/// The cube texture.
pub const BIND_TEXTURE: u32 = 1;
/// The cube texture's sampler.
pub const BIND_SAMPLER: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_slots_do_not_collide() {
        let slots = [
            ATTR_POSITION,
            ATTR_NORMAL,
            ATTR_MODEL_COL0,
            ATTR_MODEL_COL1,
            ATTR_MODEL_COL2,
            ATTR_MODEL_COL3,
            ATTR_TEXCOORD,
        ];
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
