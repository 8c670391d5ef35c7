mod matrix;
mod ray;
pub mod transform;
mod tuple;

pub use matrix::*;
pub use ray::*;
pub use tuple::*;

/// Tolerance used for every approximate comparison (tuple, matrix and color
/// equality, parallel-ray tests).
pub const EPSILON: f64 = 0.00001;

/// Determinants at or below this magnitude are treated as singular. Kept far
/// below [`EPSILON`] since a determinant scales with the cube of the
/// transform's scale: `scaling(0.02, 0.02, 0.02)` has determinant 8e-6.
pub const SINGULAR_DETERMINANT: f64 = 1e-12;

/// Distance a hit point is nudged along its normal before casting shadow,
/// reflection or refraction rays, so they do not re-hit the same surface.
pub const SURFACE_OFFSET: f64 = 0.0001;

/// Compare two floats within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Linearly interpolate between two values.
pub fn lerp(a: f64, b: f64, c: f64) -> f64 {
    a + (b - a) * c
}

/// A type that can be linearly interpolated between two values of itself.
pub trait Lerp {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        lerp(self, other, t)
    }
}

/// Snell's law for a ray arriving along `-eye` at a surface with `normal`
/// (both normalized, on the same side), where `n_ratio = n1 / n2`.
///
/// Returns `None` under total internal reflection.
pub fn refract(eye: Tuple, normal: Tuple, n_ratio: f64) -> Option<Tuple> {
    let cos_i = eye.dot(normal);
    let sin2_t = n_ratio * n_ratio * (1. - cos_i * cos_i);
    if sin2_t >= 1. {
        return None;
    }

    let cos_t = (1. - sin2_t).sqrt();
    Some(normal * (n_ratio * cos_i - cos_t) - eye * n_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_between_values() {
        assert_eq!(lerp(2., 4., 0.5), 3.);
        assert_eq!(1f64.lerp(3., 0.25), 1.5);
    }

    #[test]
    fn refract_straight_through_keeps_direction() {
        let eye = Tuple::vector(0., 0., -1.);
        let normal = Tuple::vector(0., 0., -1.);
        let dir = refract(eye, normal, 1. / 1.5).unwrap();
        assert_eq!(dir, Tuple::vector(0., 0., 1.));
    }

    #[test]
    fn refract_total_internal_reflection() {
        let s = 2f64.sqrt() / 2.;
        let eye = Tuple::vector(0., s, -s).normalize();
        let normal = Tuple::vector(0., 1., 0.);
        assert!(refract(eye, normal, 1.5).is_none());
    }
}
