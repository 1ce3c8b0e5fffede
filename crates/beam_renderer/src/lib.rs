//! Beamburst renderer - Whitted-style CPU ray tracing
//!
//! Traces one orthographic ray per pixel through a scene of spheres and
//! triangles lit by point lights, with hard shadows and mirror reflection
//! bounded by depth and accumulated reflectivity.

mod camera;
pub mod description;
mod hittable;
mod light;
mod material;
pub mod output;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use camera::{Camera, IMAGE_PLANE_Z};
pub use description::{DescriptionError, SceneDescription};
pub use hittable::{HitRecord, Hittable};
pub use light::Light;
pub use material::{Color, Material};
pub use output::{save_png, OutputError};
pub use renderer::{
    color_to_rgba, render, render_with_stats, trace, trace_with_stats, ImageBuffer, RenderConfig,
    RenderStats,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from beam_math
pub use beam_math::{Interval, Ray, Vec3, EPSILON};
