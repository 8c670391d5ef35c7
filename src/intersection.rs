use std::cmp::Ordering;

use crate::object::ShapeId;

/// Barycentric weights of a hit inside a triangle, relative to its second and third vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub u: f64,
    pub v: f64,
}

/// A single ray/shape crossing at parameter `t`.
///
/// Only smooth triangles tag their hits with barycentric coordinates; every
/// other shape leaves `uv` empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub object: ShapeId,
    pub uv: Option<Barycentric>,
}

impl Intersection {
    pub fn new(t: f64, object: ShapeId) -> Self {
        Self {
            t,
            object,
            uv: None,
        }
    }

    pub fn with_uv(t: f64, object: ShapeId, u: f64, v: f64) -> Self {
        Self {
            t,
            object,
            uv: Some(Barycentric { u, v }),
        }
    }
}

/// Stable ascending sort by `t`; equal values keep their input order.
pub fn sort_intersections(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));
}

/// The visible intersection: the smallest non-negative `t`, with ties going
/// to whichever came first. Works on unsorted input.
pub fn hit(xs: &[Intersection]) -> Option<&Intersection> {
    let mut best: Option<&Intersection> = None;
    for i in xs.iter().filter(|i| i.t >= 0.) {
        match best {
            Some(b) if b.t <= i.t => {}
            _ => best = Some(i),
        }
    }
    best
}
