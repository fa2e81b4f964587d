//! Point cloud rendering.
//!
//! The CPU never moves the points: each frame only uploads the coefficients
//! and the time window, and the vertex shader iterates the map for every
//! grid point on its own.

pub mod grid;
pub mod palette;
pub mod shaders;

use log::{debug, info};
use macroquad::miniquad::CullFace;
use macroquad::prelude::*;

use crate::coefficients::{Axis, CoefficientVector};
use crate::error::{RenderError, RenderResult};
use crate::simulation::Frame;
use crate::viewport::Viewport;

pub use shaders::MAX_GPU_ITERATIONS;

/// Uniform names, in declaration order.
pub const UNIFORMS: [&str; 5] = ["Ortho", "Mx", "My", "Frame", "Surface"];
const PALETTE_TEXTURE: &str = "Palette";

/// Values uploaded to the material for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub ortho: Mat4,
    pub mx: Mat4,
    pub my: Mat4,
    /// `(t, dt, point size in px, 0)`
    pub frame: Vec4,
    /// Surface size in physical pixels.
    pub surface: Vec2,
}

impl FrameUniforms {
    pub fn new(
        coefficients: &CoefficientVector,
        frame: &Frame,
        viewport: &Viewport,
        surface: (f32, f32),
        dpi_scale: f32,
        point_size: f32,
    ) -> Self {
        Self {
            ortho: viewport.projection(),
            mx: coefficient_matrix(coefficients, Axis::X),
            my: coefficient_matrix(coefficients, Axis::Y),
            frame: vec4(frame.t as f32, frame.dt as f32, point_size * dpi_scale, 0.0),
            surface: vec2(surface.0 * dpi_scale, surface.1 * dpi_scale),
        }
    }
}

/// One axis row as a 3×3 block: column 0 weighs `x², y², t²`, column 1
/// `xy, xt, yt` and column 2 `x, y, t`.
pub fn coefficient_matrix(coefficients: &CoefficientVector, axis: Axis) -> Mat4 {
    let r = coefficients.row_f32(axis);
    Mat4::from_cols(
        vec4(r[0], r[1], r[2], 0.0),
        vec4(r[3], r[4], r[5], 0.0),
        vec4(r[6], r[7], r[8], 0.0),
        Vec4::ZERO,
    )
}

fn uniform_layout() -> Vec<UniformDesc> {
    UNIFORMS
        .iter()
        .map(|&name| {
            let kind = match name {
                "Frame" => UniformType::Float4,
                "Surface" => UniformType::Float2,
                _ => UniformType::Mat4,
            };
            UniformDesc::new(name, kind)
        })
        .collect()
}

/// Owns every GPU resource of the point cloud: the material, the palette
/// texture and the static grid meshes. Built once; dropping it releases them.
pub struct PointCloudRenderer {
    material: Material,
    palette: Texture2D,
    meshes: Vec<Mesh>,
    point_size: f32,
    points: usize,
}

impl PointCloudRenderer {
    pub fn new(iters: usize, steps: usize, point_size: f32) -> RenderResult<Self> {
        let limit = u16::MAX as usize;
        if iters > limit || steps > limit {
            return Err(RenderError::Palette {
                width: steps,
                height: iters,
            });
        }

        let palette = Texture2D::from_rgba8(steps as u16, iters as u16, &palette::palette_rgba(iters, steps));
        palette.set_filter(FilterMode::Nearest);

        let pipeline_params = PipelineParams {
            depth_write: false,
            depth_test: Comparison::Always,
            cull_face: CullFace::Nothing,
            color_blend: None,
            alpha_blend: None,
            ..Default::default()
        };
        let material = load_material(
            ShaderSource::Glsl {
                vertex: shaders::POINT_VERTEX,
                fragment: shaders::POINT_FRAGMENT,
            },
            MaterialParams {
                pipeline_params,
                uniforms: uniform_layout(),
                textures: vec![PALETTE_TEXTURE.to_string()],
                ..Default::default()
            },
        )?;
        material.set_texture(PALETTE_TEXTURE, palette.clone());

        let points = grid::point_grid(iters, steps);
        let meshes = grid::build_meshes(&points, iters, steps);
        info!(
            "Point cloud ready: {} points ({} iterations x {} steps) in {} meshes",
            points.len(),
            iters,
            steps,
            meshes.len()
        );

        Ok(Self {
            material,
            palette,
            meshes,
            point_size,
            points: points.len(),
        })
    }

    /// Issues the draw calls for one frame. Nothing is read back.
    pub fn draw(
        &self,
        coefficients: &CoefficientVector,
        frame: &Frame,
        viewport: &Viewport,
        surface: (f32, f32),
        dpi_scale: f32,
    ) {
        let u = FrameUniforms::new(coefficients, frame, viewport, surface, dpi_scale, self.point_size);
        self.material.set_uniform("Ortho", u.ortho);
        self.material.set_uniform("Mx", u.mx);
        self.material.set_uniform("My", u.my);
        self.material.set_uniform("Frame", u.frame);
        self.material.set_uniform("Surface", u.surface);

        gl_use_material(&self.material);
        for mesh in &self.meshes {
            draw_mesh(mesh);
        }
        gl_use_default_material();
    }

    pub fn points(&self) -> usize {
        self.points
    }
}

impl Drop for PointCloudRenderer {
    fn drop(&mut self) {
        debug!(
            "Releasing point cloud: {} meshes, {}x{} palette",
            self.meshes.len(),
            self.palette.width(),
            self.palette.height()
        );
    }
}
