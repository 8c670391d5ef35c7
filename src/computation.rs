use crate::{
    intersection::Intersection,
    material::Material,
    math::{Ray, Tuple, SURFACE_OFFSET},
    object::{SceneGraph, ShapeId},
};

/// Everything the shading stage needs to know about a single hit.
#[derive(Clone, Debug)]
pub struct Computation<'a> {
    pub t: f64,
    pub object: ShapeId,
    pub material: &'a Material,
    pub point: Tuple,
    pub eye: Tuple,
    pub normal: Tuple,
    /// The hit is on the inside of the surface; `normal` has been flipped to
    /// face the eye.
    pub inside: bool,
    /// `point` nudged out along the normal; origin for shadow and reflection rays.
    pub over_point: Tuple,
    /// `point` nudged in along the normal; origin for refraction rays.
    pub under_point: Tuple,
    pub reflect: Tuple,
    /// Refractive index of the medium being left.
    pub n1: f64,
    /// Refractive index of the medium being entered.
    pub n2: f64,
}

impl<'a> Computation<'a> {
    /// Derive the shading state for `hit`. `xs` is the full, sorted list of
    /// intersections along `ray`, used to work out which transparent volumes
    /// the ray is leaving and entering. With an empty `xs` both indices stay 1.
    pub fn prepare(hit: &Intersection, ray: &Ray, objects: &'a SceneGraph, xs: &[Intersection]) -> Self {
        let point = ray.position(hit.t);
        let eye = -ray.direction;
        let mut normal = objects.normal_at(hit.object, point, hit);

        let inside = normal.dot(eye) < 0.;
        if inside {
            normal = -normal;
        }

        let (n1, n2) = refractive_indices(hit, objects, xs);

        Self {
            t: hit.t,
            object: hit.object,
            material: &objects[hit.object].material,
            point,
            eye,
            normal,
            inside,
            over_point: point + normal * SURFACE_OFFSET,
            under_point: point - normal * SURFACE_OFFSET,
            reflect: ray.direction.reflect(normal),
            n1,
            n2,
        }
    }
}

/// Walk the intersections in order, tracking the volumes the ray is inside
/// of, until the hit is reached.
fn refractive_indices(hit: &Intersection, objects: &SceneGraph, xs: &[Intersection]) -> (f64, f64) {
    let index_of = |containers: &[ShapeId]| {
        containers
            .last()
            .map_or(1., |&id| objects[id].material.refractive_index)
    };

    let mut containers: Vec<ShapeId> = Vec::new();
    let mut n1 = 1.;

    for candidate in xs {
        let is_hit = candidate == hit;
        if is_hit {
            n1 = index_of(&containers);
        }

        match containers.iter().position(|&id| id == candidate.object) {
            Some(pos) => {
                containers.remove(pos);
            }
            None => containers.push(candidate.object),
        }

        if is_hit {
            return (n1, index_of(&containers));
        }
    }

    (1., 1.)
}
