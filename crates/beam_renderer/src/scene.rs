//! Scene container for primitives and lights.
//!
//! The scene is built once and then only queried: every nearest-hit and
//! shadow query is a pass over the primitives in insertion order.

use crate::{HitRecord, Hittable, Light, Ray};

/// Owns every primitive and light in a render.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
        log::debug!("Added primitive #{}", self.objects.len() - 1);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: Light) {
        log::debug!(
            "Added light at {:?} with color {:?}",
            light.position,
            light.color
        );
        self.lights.push(light);
    }

    /// Primitives in insertion order.
    pub fn objects(&self) -> &[Box<dyn Hittable>] {
        &self.objects
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest primitive along `ray`.
    ///
    /// The ray itself is left untouched; a private copy carries the closest
    /// distance so far through the pass, so every accepted hit is strictly
    /// closer than the previous one.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut probe = *ray;
        let mut closest = None;

        for object in &self.objects {
            if object.hit(&mut probe) {
                closest = Some(object.as_ref());
            }
        }

        closest.map(|object| HitRecord::new(ray, probe.t, object))
    }

    /// True if any primitive intersects `ray` closer than `max_distance`.
    ///
    /// Pass `f32::INFINITY` to count hits beyond the light as occluders.
    pub fn occluded(&self, ray: &Ray, max_distance: f32) -> bool {
        let mut probe = Ray {
            t: max_distance,
            ..*ray
        };
        self.objects.iter().any(|object| object.hit(&mut probe))
    }
}
