use crate::{
    intersection::Intersection,
    math::{Ray, Tuple, EPSILON},
};

use super::{
    cylinder::{push_cap_hits, push_wall_hits, solve_quadratic},
    Intersect, ShapeId,
};

/// A double-napped cone `x^2 + z^2 = y^2` around the y axis, truncated to
/// `minimum..maximum` and optionally capped. Cap radius equals `|y|` at each bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub minimum: f64,
    pub maximum: f64,
    pub closed: bool,
}

impl Cone {
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }
}

impl Default for Cone {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false)
    }
}

impl Intersect for Cone {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        let (o, d) = (ray.origin, ray.direction);
        let bounds = (self.minimum, self.maximum);
        let mut xs = Vec::new();

        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2. * (o.x * d.x - o.y * d.y + o.z * d.z);
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        if a.abs() < EPSILON {
            // parallel to one nappe: the quadratic degenerates to b*t + c = 0
            if b.abs() >= EPSILON {
                let t = -c / b;
                let y = o.y + t * d.y;
                if self.minimum < y && y < self.maximum {
                    xs.push(Intersection::new(t, object));
                }
            }
        } else {
            match solve_quadratic(a, b, c) {
                Some(roots) => push_wall_hits(ray, object, bounds, roots, &mut xs),
                None => return xs,
            }
        }

        if self.closed {
            push_cap_hits(ray, object, bounds, |y| y * y, &mut xs);
        }
        xs
    }

    fn local_normal_at(&self, point: Tuple, _: &Intersection) -> Tuple {
        let dist = point.x * point.x + point.z * point.z;

        if dist < point.y * point.y && point.y >= self.maximum - EPSILON {
            Tuple::vector(0., 1., 0.)
        } else if dist < point.y * point.y && point.y <= self.minimum + EPSILON {
            Tuple::vector(0., -1., 0.)
        } else {
            let y = if point.y > 0. { -dist.sqrt() } else { dist.sqrt() };
            Tuple::vector(point.x, y, point.z)
        }
    }
}
