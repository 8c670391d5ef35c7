use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::approx_eq;

/// A homogeneous 4-component tuple. `w == 1` marks a point, `w == 0` a vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// Instantiate a raw tuple.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// A point in space (`w = 1`).
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.)
    }

    /// A direction (`w = 0`).
    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.)
    }

    pub fn origin() -> Self {
        Self::point(0., 0., 0.)
    }

    pub fn is_point(self) -> bool {
        approx_eq(self.w, 1.)
    }

    pub fn is_vector(self) -> bool {
        approx_eq(self.w, 0.)
    }

    /// Find the dot product between two tuples.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross two tuples. The result is always a vector.
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            -self.x * other.z + self.z * other.x,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Find the magnitude of this tuple.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2)).sqrt()
    }

    /// Normalize this tuple by dividing it by its own magnitude.
    ///
    /// The zero vector has no direction; normalizing it yields NaN components.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Reflect this vector about `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * 2. * self.dot(normal)
    }

    /// The same tuple with `w` forced to zero.
    pub fn to_vector(self) -> Self {
        Self { w: 0., ..self }
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl AddAssign for Tuple {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_vector_tags() {
        let p = Tuple::point(4.3, -4.2, 3.1);
        assert!(p.is_point());
        assert!(!p.is_vector());
        let v = Tuple::vector(4.3, -4.2, 3.1);
        assert!(v.is_vector());
    }

    #[test]
    fn subtracting_points_gives_vector() {
        let v = Tuple::point(3., 2., 1.) - Tuple::point(5., 6., 7.);
        assert_eq!(v, Tuple::vector(-2., -4., -6.));
    }

    #[test]
    fn point_minus_vector_is_point() {
        let p = Tuple::point(3., 2., 1.) - Tuple::vector(5., 6., 7.);
        assert_eq!(p, Tuple::point(-2., -4., -6.));
    }

    #[test]
    fn negate_scale_divide() {
        let a = Tuple::new(1., -2., 3., -4.);
        assert_eq!(-a, Tuple::new(-1., 2., -3., 4.));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1., 1.5, -2.));
        assert_eq!(a / 2., Tuple::new(0.5, -1., 1.5, -2.));
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_eq!(Tuple::vector(1., 2., 3.).magnitude(), 14f64.sqrt());
        let n = Tuple::vector(1., 2., 3.).normalize();
        assert_eq!(n, Tuple::vector(0.26726, 0.53452, 0.80178));
        assert!(approx_eq(n.magnitude(), 1.));
    }

    #[test]
    fn dot_and_cross() {
        let a = Tuple::vector(1., 2., 3.);
        let b = Tuple::vector(2., 3., 4.);
        assert_eq!(a.dot(b), 20.);
        assert_eq!(a.cross(b), Tuple::vector(-1., 2., -1.));
        assert_eq!(b.cross(a), Tuple::vector(1., -2., 1.));
    }

    #[test]
    fn cross_of_points_is_still_a_vector() {
        let c = Tuple::point(1., 0., 0.).cross(Tuple::point(0., 1., 0.));
        assert_eq!(c.w, 0.);
    }

    #[test]
    fn reflect_vectors() {
        let v = Tuple::vector(1., -1., 0.);
        assert_eq!(v.reflect(Tuple::vector(0., 1., 0.)), Tuple::vector(1., 1., 0.));

        let s = 2f64.sqrt() / 2.;
        let v = Tuple::vector(0., -1., 0.);
        assert_eq!(v.reflect(Tuple::vector(s, s, 0.)), Tuple::vector(1., 0., 0.));
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Tuple::point(1., 2., 3.), Tuple::point(1.000001, 2., 3.));
        assert_ne!(Tuple::point(1., 2., 3.), Tuple::point(1.001, 2., 3.));
    }
}
