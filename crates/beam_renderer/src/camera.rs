//! Camera for ray generation.

use crate::Ray;
use beam_math::Vec3;

/// Depth of the plane every primary ray starts on.
pub const IMAGE_PLANE_Z: f32 = -1000.0;

/// Orthographic camera: one ray per pixel, all looking down +Z.
///
/// Pixel `(i, j)` starts at `(i - width/2, j - height/2, IMAGE_PLANE_Z)`
/// using integer halving, so one world unit spans one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
}

impl Camera {
    /// Create a camera for an image of the given resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Get the primary ray for pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = i64::from(i) - i64::from(self.image_width / 2);
        let y = i64::from(j) - i64::from(self.image_height / 2);
        Ray::new(Vec3::new(x as f32, y as f32, IMAGE_PLANE_Z), Vec3::Z)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(512, 512)
    }
}
