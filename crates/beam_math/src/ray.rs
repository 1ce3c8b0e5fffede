use crate::Vec3;

/// Absolute distance below which an intersection is treated as the ray
/// re-hitting the surface it starts on.
pub const EPSILON: f32 = f32::EPSILON * 250.0;

/// Mirror `direction` about the surface normal `normal`.
///
/// Returns: direction - 2 * dot(direction, normal) * normal
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// A ray in 3D space with origin, direction, and closest hit distance.
///
/// `t` starts at infinity and is lowered by every accepted intersection, so
/// after a pass over a set of primitives it holds the nearest hit found.
/// Intersection code assumes `direction` has unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t: f32,
}

impl Ray {
    /// Create a new ray with no hit recorded yet.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t: f32::INFINITY,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Point of the closest hit recorded so far.
    #[inline]
    pub fn hit_position(&self) -> Vec3 {
        self.at(self.t)
    }

    /// True once some intersection has lowered `t`.
    #[inline]
    pub fn has_hit(&self) -> bool {
        self.t.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.t, f32::INFINITY);
        assert!(!ray.has_hit());
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hit_position() {
        let mut ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        ray.t = 3.0;

        assert!(ray.has_hit());
        assert_eq!(ray.hit_position(), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut ray2 = ray1; // Copy, not move
        ray2.t = 1.0;

        // Lowering t on the copy leaves the original untouched
        assert_eq!(ray1.t, f32::INFINITY);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }

    #[test]
    fn test_reflect() {
        // 45 degree bounce off the XZ plane
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(d, Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);

        // Head-on reflection reverses direction
        assert_eq!(reflect(Vec3::Z, -Vec3::Z), -Vec3::Z);
    }

    #[test]
    fn test_epsilon_is_small_and_positive() {
        assert!(EPSILON > 0.0);
        assert!(EPSILON < 1e-4);
    }
}
