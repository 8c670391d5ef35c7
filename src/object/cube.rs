use crate::{
    intersection::Intersection,
    math::{approx_eq, Ray, Tuple, EPSILON},
};

use super::{Intersect, ShapeId};

/// An axis-aligned cube spanning -1..1 on every axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube;

/// Entry and exit `t` of the slab between -1 and 1 along one axis.
fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1. - origin;
    let tmax_numerator = 1. - origin;

    let (tmin, tmax) = if direction.abs() >= EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (
            tmin_numerator * f64::INFINITY,
            tmax_numerator * f64::INFINITY,
        )
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

impl Intersect for Cube {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x);
        let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y);
        let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);

        if tmin > tmax {
            return vec![];
        }

        vec![Intersection::new(tmin, object), Intersection::new(tmax, object)]
    }

    fn local_normal_at(&self, point: Tuple, _: &Intersection) -> Tuple {
        let (ax, ay, az) = (point.x.abs(), point.y.abs(), point.z.abs());
        let maxc = ax.max(ay).max(az);

        if approx_eq(ax, maxc) {
            Tuple::vector(point.x, 0., 0.)
        } else if approx_eq(ay, maxc) {
            Tuple::vector(0., point.y, 0.)
        } else {
            Tuple::vector(0., 0., point.z)
        }
    }
}
