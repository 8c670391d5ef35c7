use std::ops::{Add, AddAssign, Mul, Sub};

use crate::{
    math::{approx_eq, Lerp},
    pattern::Pattern,
};

/// A linear RGB color. Channels are nominally 0-1 but may exceed that range
/// while light is being accumulated.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn blue() -> Self {
        Self::new(0., 0., 1.)
    }

    /// Instantiate a new Color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp each channel to 0-1 and scale to a byte.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f64| (c.clamp(0., 1.) * 255.).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_rgb8())
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Hadamard product, used to filter one color through another.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, t: f64) -> Self {
        Color {
            r: self.r.lerp(other.r, t),
            g: self.g.lerp(other.g, t),
            b: self.b.lerp(other.b, t),
        }
    }
}

/// Surface appearance of a shape under the Phong model, plus the
/// reflection and refraction coefficients used for secondary rays.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color, used when there is no pattern.
    pub color: Color,

    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,

    /// Specular exponent; larger values give a tighter highlight.
    pub shininess: f64,

    /// Spatial color function that overrides `color` when present.
    pub pattern: Option<Pattern>,

    /// The reflectiveness (0 to 1) of this material.
    pub reflective: f64,

    /// The transparency of this material. At 1, the material is completely transparent. At 0, it is completely opaque.
    pub transparency: f64,

    /// The index of refraction of this material. Vacuum is 1, glass about 1.5.
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            pattern: None,
            reflective: 0.,
            transparency: 0.,
            refractive_index: 1.,
        }
    }
}

impl Material {
    /// The material of a solid glass object.
    pub fn glass() -> Self {
        Self {
            transparency: 1.,
            refractive_index: 1.5,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material() {
        let m = Material::default();
        assert_eq!(m.color, Color::white());
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.);
        assert_eq!(m.reflective, 0.);
        assert_eq!(m.transparency, 0.);
        assert_eq!(m.refractive_index, 1.);
        assert!(m.pattern.is_none());
    }

    #[test]
    fn color_arithmetic() {
        let a = Color::new(0.9, 0.6, 0.75);
        let b = Color::new(0.7, 0.1, 0.25);
        assert_eq!(a + b, Color::new(1.6, 0.7, 1.0));
        assert_eq!(a - b, Color::new(0.2, 0.5, 0.5));
        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2., Color::new(0.4, 0.6, 0.8));
        assert_eq!(
            Color::new(1., 0.2, 0.4) * Color::new(0.9, 1., 0.1),
            Color::new(0.9, 0.2, 0.04)
        );
    }

    #[test]
    fn bytes_are_clamped() {
        assert_eq!(Color::new(1.5, 0., -0.5).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::new(0.5, 0., 0.).to_rgb8(), [128, 0, 0]);
    }

    #[test]
    fn lerp_colors() {
        assert_eq!(
            Color::white().lerp(Color::black(), 0.25),
            Color::new(0.75, 0.75, 0.75)
        );
    }
}
