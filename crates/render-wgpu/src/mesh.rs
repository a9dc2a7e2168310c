use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

const fn v(position: [f32; 3], normal: [f32; 3], texcoord: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        texcoord,
    }
}

/// The static unit cube: 12 triangles, 36 vertices, non-indexed.
///
/// Winding is mixed across faces (the pipeline does not cull), so the data
/// can stay in the face order the texture coordinates were authored for.
pub(crate) fn cube_vertices() -> Vec<Vertex> {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // -Z face
        v([-p, -p, -p], [0.0, 0.0, -1.0], [0.0, 0.0]),
        v([ p, -p, -p], [0.0, 0.0, -1.0], [1.0, 0.0]),
        v([ p,  p, -p], [0.0, 0.0, -1.0], [1.0, 1.0]),
        v([ p,  p, -p], [0.0, 0.0, -1.0], [1.0, 1.0]),
        v([-p,  p, -p], [0.0, 0.0, -1.0], [0.0, 1.0]),
        v([-p, -p, -p], [0.0, 0.0, -1.0], [0.0, 0.0]),
        // +Z face
        v([-p, -p,  p], [0.0, 0.0, 1.0], [0.0, 0.0]),
        v([ p, -p,  p], [0.0, 0.0, 1.0], [1.0, 0.0]),
        v([ p,  p,  p], [0.0, 0.0, 1.0], [1.0, 1.0]),
        v([ p,  p,  p], [0.0, 0.0, 1.0], [1.0, 1.0]),
        v([-p,  p,  p], [0.0, 0.0, 1.0], [0.0, 1.0]),
        v([-p, -p,  p], [0.0, 0.0, 1.0], [0.0, 0.0]),
        // -X face
        v([-p,  p,  p], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        v([-p,  p, -p], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        v([-p, -p, -p], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        v([-p, -p, -p], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        v([-p, -p,  p], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        v([-p,  p,  p], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        // +X face
        v([ p,  p,  p], [1.0, 0.0, 0.0], [1.0, 0.0]),
        v([ p,  p, -p], [1.0, 0.0, 0.0], [1.0, 1.0]),
        v([ p, -p, -p], [1.0, 0.0, 0.0], [0.0, 1.0]),
        v([ p, -p, -p], [1.0, 0.0, 0.0], [0.0, 1.0]),
        v([ p, -p,  p], [1.0, 0.0, 0.0], [0.0, 0.0]),
        v([ p,  p,  p], [1.0, 0.0, 0.0], [1.0, 0.0]),
        // -Y face
        v([-p, -p, -p], [0.0, -1.0, 0.0], [0.0, 1.0]),
        v([ p, -p, -p], [0.0, -1.0, 0.0], [1.0, 1.0]),
        v([ p, -p,  p], [0.0, -1.0, 0.0], [1.0, 0.0]),
        v([ p, -p,  p], [0.0, -1.0, 0.0], [1.0, 0.0]),
        v([-p, -p,  p], [0.0, -1.0, 0.0], [0.0, 0.0]),
        v([-p, -p, -p], [0.0, -1.0, 0.0], [0.0, 1.0]),
        // +Y face
        v([-p,  p, -p], [0.0, 1.0, 0.0], [0.0, 1.0]),
        v([ p,  p, -p], [0.0, 1.0, 0.0], [1.0, 1.0]),
        v([ p,  p,  p], [0.0, 1.0, 0.0], [1.0, 0.0]),
        v([ p,  p,  p], [0.0, 1.0, 0.0], [1.0, 0.0]),
        v([-p,  p,  p], [0.0, 1.0, 0.0], [0.0, 0.0]),
        v([-p,  p, -p], [0.0, 1.0, 0.0], [0.0, 1.0]),
    ];
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_six_vertices() {
        assert_eq!(cube_vertices().len(), 36);
    }

    #[test]
    fn normals_are_unit_and_axis_aligned() {
        for vert in cube_vertices() {
            let n = vert.normal;
            let len2 = n[0] * n[0] + n[1] * n[1] + n[2] * n[2];
            assert_eq!(len2, 1.0);
            assert_eq!(n.iter().filter(|c| **c != 0.0).count(), 1);
        }
    }

    #[test]
    fn positions_lie_on_the_unit_cube() {
        for vert in cube_vertices() {
            for c in vert.position {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }

    #[test]
    fn texcoords_are_corner_values() {
        for vert in cube_vertices() {
            for c in vert.texcoord {
                assert!(c == 0.0 || c == 1.0);
            }
        }
    }

    #[test]
    fn vertex_stride_matches_pipeline_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
