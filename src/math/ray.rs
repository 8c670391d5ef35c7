use super::{Matrix4, Tuple};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Instantiate a new Ray. The origin should be a point and the direction a vector;
    /// the direction is not normalized, so `t` scales with its length.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along this ray.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply a transformation matrix to both origin and direction.
    pub fn transform(&self, m: &Matrix4) -> Ray {
        Ray::new(*m * self.origin, *m * self.direction)
    }
}
