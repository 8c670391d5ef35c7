use crate::{
    intersection::Intersection,
    math::{Ray, Tuple},
};

use super::{Intersect, ShapeId};

/// A unit sphere centered at the object space origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere;

impl Intersect for Sphere {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        let sphere_to_ray = ray.origin - Tuple::origin();
        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return vec![];
        }

        let root = discriminant.sqrt();
        let t0 = (-b - root) / (2. * a);
        let t1 = (-b + root) / (2. * a);
        vec![Intersection::new(t0, object), Intersection::new(t1, object)]
    }

    fn local_normal_at(&self, point: Tuple, _: &Intersection) -> Tuple {
        point - Tuple::origin()
    }
}
