use crate::{
    intersection::Intersection,
    math::{Ray, Tuple, EPSILON},
};

use super::{Intersect, ShapeId};

/// A radius-1 tube around the y axis, truncated to `minimum..maximum`
/// (exclusive) and optionally closed with end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub minimum: f64,
    pub maximum: f64,
    pub closed: bool,
}

impl Cylinder {
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false)
    }
}

/// Solve `a*t^2 + b*t + c = 0`, treating a slightly negative discriminant as a
/// tangent. Roots are returned in ascending order.
pub(super) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let mut disc = b * b - 4. * a * c;
    if disc < 0. {
        if disc.abs() >= EPSILON {
            return None;
        }
        disc = 0.;
    }

    let root = disc.sqrt();
    let t0 = (-b - root) / (2. * a);
    let t1 = (-b + root) / (2. * a);
    Some(if t0 > t1 { (t1, t0) } else { (t0, t1) })
}

/// Keep the wall roots whose height lies strictly between the bounds.
pub(super) fn push_wall_hits(
    ray: &Ray,
    object: ShapeId,
    (minimum, maximum): (f64, f64),
    roots: (f64, f64),
    xs: &mut Vec<Intersection>,
) {
    for t in [roots.0, roots.1] {
        let y = ray.origin.y + t * ray.direction.y;
        if minimum < y && y < maximum {
            xs.push(Intersection::new(t, object));
        }
    }
}

/// Does the ray at `t` fall inside a cap disc of squared radius `radius2`?
fn check_cap(ray: &Ray, t: f64, radius2: f64) -> bool {
    let x = ray.origin.x + t * ray.direction.x;
    let z = ray.origin.z + t * ray.direction.z;
    x * x + z * z <= radius2 + EPSILON
}

/// Intersect the end caps at `minimum` and `maximum`. `radius2` maps a cap's
/// height to the squared radius of its disc.
pub(super) fn push_cap_hits<F>(
    ray: &Ray,
    object: ShapeId,
    (minimum, maximum): (f64, f64),
    radius2: F,
    xs: &mut Vec<Intersection>,
) where
    F: Fn(f64) -> f64,
{
    // a ray parallel to the caps can only cross the wall
    if ray.direction.y.abs() < EPSILON {
        return;
    }

    for y in [minimum, maximum] {
        let t = (y - ray.origin.y) / ray.direction.y;
        if check_cap(ray, t, radius2(y)) {
            xs.push(Intersection::new(t, object));
        }
    }
}

impl Intersect for Cylinder {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        let (o, d) = (ray.origin, ray.direction);
        let bounds = (self.minimum, self.maximum);
        let mut xs = Vec::new();

        let a = d.x * d.x + d.z * d.z;
        // a vertical ray can only hit the caps
        if a.abs() >= EPSILON {
            let b = 2. * (o.x * d.x + o.z * d.z);
            let c = o.x * o.x + o.z * o.z - 1.;
            match solve_quadratic(a, b, c) {
                Some(roots) => push_wall_hits(ray, object, bounds, roots, &mut xs),
                None => return xs,
            }
        }

        if self.closed {
            push_cap_hits(ray, object, bounds, |_| 1., &mut xs);
        }
        xs
    }

    fn local_normal_at(&self, point: Tuple, _: &Intersection) -> Tuple {
        let dist = point.x * point.x + point.z * point.z;

        if dist < 1. && point.y >= self.maximum - EPSILON {
            Tuple::vector(0., 1., 0.)
        } else if dist < 1. && point.y <= self.minimum + EPSILON {
            Tuple::vector(0., -1., 0.)
        } else {
            Tuple::vector(point.x, 0., point.z)
        }
    }
}
