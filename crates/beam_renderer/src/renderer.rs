//! Core Whitted-style renderer.
//!
//! Implements the shading loop with:
//! - Ambient term per surface hit
//! - Lambertian diffuse per point light, with hard shadow rays
//! - Mirror reflection, bounded by depth and remaining intensity

use crate::{Camera, Color, Ray, Scene};
use beam_math::{reflect, Interval, EPSILON};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of surface hits followed per pixel
    pub max_depth: u32,
    /// Remaining reflection intensity below which tracing stops
    pub min_intensity: f32,
    /// Ignore occluders farther away than the light itself
    pub bounded_shadows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_intensity: 0.01,
            bounded_shadows: false,
        }
    }
}

/// Ray counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Camera rays traced
    pub primary_rays: u64,
    /// Rays cast toward lights
    pub shadow_rays: u64,
    /// Surface hits shaded, across all bounces
    pub surface_hits: u64,
}

/// Compute the color seen by a ray with default shading settings.
pub fn trace(scene: &Scene, ray: Ray, max_depth: u32) -> Color {
    let config = RenderConfig {
        max_depth,
        ..RenderConfig::default()
    };
    trace_with_stats(scene, ray, &config, &mut RenderStats::default())
}

/// Compute the color seen by a ray.
///
/// Follows mirror bounces until nothing is hit, `max_depth` hits have been
/// shaded, or the remaining intensity drops below `min_intensity`. Misses
/// contribute nothing, so the background is black.
pub fn trace_with_stats(
    scene: &Scene,
    ray: Ray,
    config: &RenderConfig,
    stats: &mut RenderStats,
) -> Color {
    let mut color = Color::ZERO;
    let mut intensity = 1.0;
    let mut ray = ray;

    for _ in 0..config.max_depth {
        let Some(rec) = scene.closest_hit(&ray) else {
            return color;
        };
        stats.surface_hits += 1;

        // Lift the hit point off the surface so follow-up rays don't re-hit it
        let hit_position = rec.p + rec.normal * EPSILON;
        let material = rec.material;

        color += material.ambient_term(intensity);

        for light in scene.lights() {
            let to_light = light.position - hit_position;
            let light_direction = to_light.normalize_or_zero();
            let cos_theta = rec.normal.dot(light_direction);

            // Light is behind the surface
            if cos_theta <= 0.0 {
                continue;
            }

            stats.shadow_rays += 1;
            let max_distance = if config.bounded_shadows {
                to_light.length()
            } else {
                f32::INFINITY
            };
            if scene.occluded(&Ray::new(hit_position, light_direction), max_distance) {
                continue;
            }

            color += material.diffuse_term(intensity, cos_theta, light.color);
        }

        intensity *= material.reflect;
        if intensity < config.min_intensity {
            return color;
        }

        let direction = reflect(ray.direction, rec.normal).normalize_or_zero();
        ray = Ray::new(hit_position, direction);
    }

    color
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1] and rounded; no gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    render_with_stats(scene, camera, config).0
}

/// Render the entire scene, one pixel after another, and report ray counts.
///
/// Pixel (x, y) of the image holds the color traced from `camera.get_ray(x, y)`.
pub fn render_with_stats(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> (ImageBuffer, RenderStats) {
    log::info!(
        "Rendering {}x{} (max depth {}, {} primitives, {} lights)",
        camera.image_width,
        camera.image_height,
        config.max_depth,
        scene.len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let mut stats = RenderStats::default();

    for y in 0..camera.image_height {
        if y % 64 == 0 {
            log::debug!("Row {}/{}", y, camera.image_height);
        }
        for x in 0..camera.image_width {
            let ray = camera.get_ray(x, y);
            stats.primary_rays += 1;
            let color = trace_with_stats(scene, ray, config, &mut stats);
            image.set(x, y, color);
        }
    }

    log::info!(
        "Rendered in {:?}: {} primary rays, {} shadow rays, {} surface hits",
        start.elapsed(),
        stats.primary_rays,
        stats.shadow_rays,
        stats.surface_hits
    );

    (image, stats)
}
