//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then checks containment with
//! barycentric coordinates solved in the (e1, e2) edge basis.

use crate::{hittable::Hittable, Material, Ray};
use beam_math::{Interval, Vec3, EPSILON};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    vertices: [Vec3; 3],
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self {
            vertices: [v0, v1, v2],
            material,
        }
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Barycentric coordinates (beta, gamma) of a point on the triangle's
    /// plane, weighting v1 and v2 respectively.
    ///
    /// Returns None when the edge basis is degenerate.
    pub fn barycentric(&self, p: Vec3) -> Option<(f32, f32)> {
        let [v0, v1, v2] = self.vertices;
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let ep = p - v0;

        let d11 = e1.dot(e1);
        let d12 = e1.dot(e2);
        let d22 = e2.dot(e2);
        let d1p = e1.dot(ep);
        let d2p = e2.dot(ep);

        let det = d11 * d22 - d12 * d12;
        if !det.is_normal() {
            return None;
        }

        let beta = (d22 * d1p - d12 * d2p) / det;
        let gamma = (d11 * d2p - d12 * d1p) / det;
        Some((beta, gamma))
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let [v0, v1, v2] = self.vertices;
        let n = (v1 - v0).cross(v2 - v0);
        let d = -v0.dot(n);

        // Ray is parallel to the plane (or the triangle is degenerate)
        let denominator = n.dot(ray.direction);
        if !denominator.is_normal() {
            return None;
        }

        // Plane is behind the ray origin
        let time = -(d + n.dot(ray.origin)) / denominator;
        if time.is_sign_negative() {
            return None;
        }

        if !Interval::new(EPSILON, ray.t).surrounds(time) {
            return None;
        }

        let (beta, gamma) = self.barycentric(ray.at(time))?;
        let unit = Interval::UNIT;
        if !(unit.contains(beta) && unit.contains(gamma) && unit.contains(beta + gamma)) {
            return None;
        }

        Some(time)
    }

    fn normal(&self, p: Vec3) -> Vec3 {
        let [v0, _, v2] = self.vertices;
        (p - v0).cross(v2 - v0).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
