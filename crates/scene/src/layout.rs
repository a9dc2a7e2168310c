use glam::Vec3;

/// Upper bound on generated layout positions.
pub const LAYOUT_CAPACITY: usize = 180;

/// One cube of the fractal arrangement: where to draw it and how big.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCube {
    pub position: Vec3,
    pub scale: f32,
}

/// Generate the recursive cube positions, breadth-first.
///
/// Position 0 is the origin. Each parent at generation `g` spawns three
/// children at per-axis offset `8 / scale_g`, where the offset scale starts
/// at 2 and doubles each generation; a generation holds `3^g` parents.
/// Termination predicate: stop once fewer than 3 free slots remain.
pub fn layout_positions(capacity: usize) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(capacity);
    positions.push(Vec3::ZERO);

    let mut parent = 0;
    let mut scale = 2.0_f32;
    let mut remaining = 1u32; // parents left in the current generation
    let mut generation = 1u32;

    while positions.len() + 3 <= capacity && parent < positions.len() {
        let offset = 8.0 / scale;
        let p = positions[parent];
        positions.push(p + Vec3::new(-offset, -offset, 0.0));
        positions.push(p + Vec3::new(0.0, offset, 0.0));
        positions.push(p + Vec3::new(offset, -offset, 0.0));

        remaining -= 1;
        if remaining == 0 {
            scale *= 2.0;
            remaining = 3u32.pow(generation);
            generation += 1;
        }
        parent += 1;
    }

    positions
}

/// Full fractal layout: positions paired with a draw scale that starts at
/// 2 and halves each generation, on the same `3^g` cadence.
pub fn fractal_layout() -> Vec<LayoutCube> {
    let positions = layout_positions(LAYOUT_CAPACITY);
    let mut cubes = Vec::with_capacity(positions.len());

    let mut scale = 2.0_f32;
    let mut remaining = 1u32;
    let mut generation = 1u32;

    for position in positions {
        cubes.push(LayoutCube { position, scale });
        remaining -= 1;
        if remaining == 0 {
            scale /= 2.0;
            remaining = 3u32.pow(generation);
            generation += 1;
        }
    }

    cubes
}
