use log::info;
use macroquad::math::Mat4;

pub const HALF_WIDTH: f64 = 5.0; // world units; the height follows the aspect ratio

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub sx: f64, // half extents, centered on the origin
    pub sy: f64,
}

impl Viewport {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    pub fn for_surface(width: f32, height: f32) -> Self {
        let aspect = if width > 0.0 { height as f64 / width as f64 } else { 1.0 };
        Self::new(HALF_WIDTH, HALF_WIDTH * aspect)
    }

    // border points are outside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.abs() < self.sx && y.abs() < self.sy
    }

    pub fn projection(&self) -> Mat4 {
        let (sx, sy) = (self.sx as f32, self.sy as f32);
        Mat4::orthographic_rh_gl(-sx, sx, -sy, sy, -1.0, 1.0)
    }
}

/// Tracks the window surface. Call [`ViewportManager::sync`] at the top of a
/// frame, before anything reads the viewport.
#[derive(Clone, Debug)]
pub struct ViewportManager {
    width: f32,
    height: f32,
    dpi_scale: f32,
    viewport: Viewport,
}

impl ViewportManager {
    pub fn new(width: f32, height: f32, dpi_scale: f32) -> Self {
        Self {
            width,
            height,
            dpi_scale,
            viewport: Viewport::for_surface(width, height),
        }
    }

    pub fn sync(&mut self, width: f32, height: f32, dpi_scale: f32) -> bool {
        if width == self.width && height == self.height && dpi_scale == self.dpi_scale {
            return false;
        }
        info!(
            "Surface resized: {}x{} -> {}x{} (dpi {:.2})",
            self.width, self.height, width, height, dpi_scale
        );
        *self = Self::new(width, height, dpi_scale);
        true
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }
}
