use crate::{
    intersection::Intersection,
    math::{Ray, Tuple, EPSILON},
};

use super::{Intersect, ShapeId};

/// The infinite xz plane (y = 0) in object space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Intersect for Plane {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        // parallel (or coplanar) rays never cross the plane
        if ray.direction.y.abs() < EPSILON {
            return vec![];
        }

        let t = -ray.origin.y / ray.direction.y;
        vec![Intersection::new(t, object)]
    }

    fn local_normal_at(&self, _: Tuple, _: &Intersection) -> Tuple {
        Tuple::vector(0., 1., 0.)
    }
}
