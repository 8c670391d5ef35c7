use crate::{material::Color, math::Tuple};

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Tuple::point(-10., 10., -10.), Color::white())
    }
}
