use macroquad::prelude::{vec2, vec3, vec4, Mesh, Vertex, WHITE};

pub const POINTS_PER_MESH: usize = 800; // 4 vertices, 6 indices each: under the 10000/5000 batch limits

const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPoint {
    pub iteration: u32, // map applications minus one
    pub step: u32,      // time offset in units of dt
}

impl GridPoint {
    // rows and columns 0 and 1 stay white
    pub fn uses_palette(&self) -> bool {
        self.iteration > 1 && self.step > 1
    }
}

/// All `(iteration, step)` pairs, row-major: `index = iteration * steps + step`.
pub fn point_grid(iters: usize, steps: usize) -> Vec<GridPoint> {
    let mut points = Vec::with_capacity(iters * steps);
    for iteration in 0..iters as u32 {
        for step in 0..steps as u32 {
            points.push(GridPoint { iteration, step });
        }
    }
    points
}

/// Static quad meshes for the whole grid. `position` holds the grid point,
/// `uv` the corner, `normal` the palette texel and the palette flag.
pub fn build_meshes(points: &[GridPoint], iters: usize, steps: usize) -> Vec<Mesh> {
    points
        .chunks(POINTS_PER_MESH)
        .map(|chunk| {
            let mut vertices = Vec::with_capacity(chunk.len() * 4);
            let mut indices = Vec::with_capacity(chunk.len() * 6);

            for (local, point) in chunk.iter().enumerate() {
                let base = (local * 4) as u16;
                let grid = vec3(point.iteration as f32, point.step as f32, 0.0);
                let texel_u = (point.step as f32 + 0.5) / steps as f32;
                let texel_v = (point.iteration as f32 + 0.5) / iters as f32;
                let flag = if point.uses_palette() { 1.0 } else { 0.0 };

                for (cx, cy) in CORNERS {
                    vertices.push(Vertex {
                        position: grid,
                        uv: vec2(cx, cy),
                        color: WHITE.into(),
                        normal: vec4(texel_u, texel_v, flag, 0.0),
                    });
                }
                indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }

            Mesh {
                vertices,
                indices,
                texture: None,
            }
        })
        .collect()
}
