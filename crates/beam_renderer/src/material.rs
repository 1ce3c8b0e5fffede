//! Surface shading coefficients.

use beam_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Phong-style material without a specular highlight term.
///
/// All coefficients are conventionally in `[0, 1]` but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Base surface color
    pub color: Color,
    /// Fraction of the base color emitted regardless of lighting
    pub ambient: f32,
    /// Weight of the Lambertian term for each visible light
    pub diffuse: f32,
    /// Fraction of the remaining intensity carried by the mirror bounce
    pub reflect: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(color: Color, ambient: f32, diffuse: f32, reflect: f32) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            reflect,
        }
    }

    /// A material that only shows its ambient color and never reflects.
    pub fn flat(color: Color) -> Self {
        Self::new(color, 1.0, 0.0, 0.0)
    }

    /// Ambient contribution for a bounce carrying `intensity`.
    #[inline]
    pub fn ambient_term(&self, intensity: f32) -> Color {
        intensity * self.ambient * self.color
    }

    /// Diffuse contribution of one light at incidence cosine `cos_theta`.
    #[inline]
    pub fn diffuse_term(&self, intensity: f32, cos_theta: f32, light_color: Color) -> Color {
        intensity * self.diffuse * cos_theta * light_color * self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        let m = Material::default();
        assert_eq!(m.color, Color::ZERO);
        assert_eq!(m.ambient, 0.0);
        assert_eq!(m.diffuse, 0.0);
        assert_eq!(m.reflect, 0.0);
    }

    #[test]
    fn test_ambient_term() {
        let m = Material::new(Color::new(1.0, 0.8, 0.6), 0.5, 0.7, 0.2);
        let c = m.ambient_term(0.5);
        assert!((c - Color::new(0.25, 0.2, 0.15)).length() < 1e-6);
    }

    #[test]
    fn test_diffuse_term_is_elementwise() {
        let m = Material::new(Color::new(1.0, 0.5, 0.0), 0.0, 1.0, 0.0);
        let light = Color::new(0.0, 1.0, 1.0);

        // Only the green channel survives the elementwise product
        let c = m.diffuse_term(1.0, 1.0, light);
        assert_eq!(c, Color::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_flat_material() {
        let m = Material::flat(Color::ONE);
        assert_eq!(m.ambient_term(1.0), Color::ONE);
        assert_eq!(m.reflect, 0.0);
    }
}
