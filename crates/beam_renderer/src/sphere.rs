//! Sphere primitive for ray tracing.

use crate::{hittable::Hittable, Material, Ray};
use beam_math::{Interval, Vec3, EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Geometric form; assumes a unit-length direction
        let h = self.center - ray.origin;
        let m = h.dot(ray.direction);
        let g = m * m - h.length_squared() + self.radius * self.radius;
        if g < 0.0 {
            return None;
        }

        let sqrtg = g.sqrt();
        let ray_t = Interval::new(EPSILON, ray.t);

        // Find the nearest root in the acceptable range
        let mut root = m - sqrtg;
        if !ray_t.surrounds(root) {
            root = m + sqrtg;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        Some(root)
    }

    fn normal(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
