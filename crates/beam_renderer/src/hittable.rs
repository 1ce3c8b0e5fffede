//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use beam_math::Vec3;

/// Record of the nearest ray-object intersection found by a scene query.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (not oriented against the ray)
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build the record for `object` hit by `ray` at distance `t`.
    pub fn new(ray: &Ray, t: f32, object: &'a dyn Hittable) -> Self {
        let p = ray.at(t);
        Self {
            t,
            p,
            normal: object.normal(p),
            material: object.material(),
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance to the nearest intersection inside `(EPSILON, ray.t)`.
    ///
    /// Never modifies the ray; `None` means no acceptable intersection.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at a point on the object.
    fn normal(&self, p: Vec3) -> Vec3;

    /// Material attached to the object.
    fn material(&self) -> &Material;

    /// Test the ray and, if this object is closer than anything seen so far,
    /// lower `ray.t` to the new distance.
    ///
    /// Returns true if hit.
    fn hit(&self, ray: &mut Ray) -> bool {
        match self.intersect(ray) {
            Some(t) => {
                ray.t = t;
                true
            }
            None => false,
        }
    }
}
