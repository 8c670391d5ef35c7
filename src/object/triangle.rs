use crate::{
    intersection::Intersection,
    math::{Ray, Tuple, EPSILON},
};

use super::{Intersect, ShapeId};

/// A flat triangle with precomputed edges and face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Tuple,
    pub p2: Tuple,
    pub p3: Tuple,
    pub e1: Tuple,
    pub e2: Tuple,
    pub normal: Tuple,
}

/// Möller–Trumbore result: `t` plus the barycentric `u`/`v` of the crossing.
struct TriIntersect {
    t: f64,
    u: f64,
    v: f64,
}

impl Triangle {
    pub fn new(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal: e2.cross(e1).normalize(),
        }
    }

    fn intersect_uv(&self, ray: &Ray) -> Option<TriIntersect> {
        let dir_cross_e2 = ray.direction.cross(self.e2);
        let det = self.e1.dot(dir_cross_e2);
        if det.abs() < EPSILON {
            return None;
        }

        let f = 1. / det;
        let p1_to_origin = ray.origin - self.p1;
        let u = f * p1_to_origin.dot(dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let origin_cross_e1 = p1_to_origin.cross(self.e1);
        let v = f * ray.direction.dot(origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.e2.dot(origin_cross_e1);
        Some(TriIntersect { t, u, v })
    }
}

impl Intersect for Triangle {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        self.intersect_uv(ray)
            .map(|i| Intersection::new(i.t, object))
            .into_iter()
            .collect()
    }

    fn local_normal_at(&self, _: Tuple, _: &Intersection) -> Tuple {
        self.normal
    }
}

/// A triangle whose normal is interpolated from per-vertex normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothTriangle {
    pub triangle: Triangle,
    pub n1: Tuple,
    pub n2: Tuple,
    pub n3: Tuple,
}

impl SmoothTriangle {
    pub fn new(p1: Tuple, p2: Tuple, p3: Tuple, n1: Tuple, n2: Tuple, n3: Tuple) -> Self {
        Self {
            triangle: Triangle::new(p1, p2, p3),
            n1,
            n2,
            n3,
        }
    }
}

impl Intersect for SmoothTriangle {
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection> {
        self.triangle
            .intersect_uv(ray)
            .map(|i| Intersection::with_uv(i.t, object, i.u, i.v))
            .into_iter()
            .collect()
    }

    /// # Panics
    ///
    /// If `hit` carries no barycentric coordinates, i.e. it was not produced
    /// by a smooth triangle.
    fn local_normal_at(&self, _: Tuple, hit: &Intersection) -> Tuple {
        let uv = match hit.uv {
            Some(uv) => uv,
            None => panic!("smooth triangle normal needs an intersection with u/v"),
        };
        self.n2 * uv.u + self.n3 * uv.v + self.n1 * (1. - uv.u - uv.v)
    }
}
