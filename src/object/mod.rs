mod cone;
mod cube;
mod cylinder;
mod graph;
mod group;
mod mesh;
mod plane;
mod sphere;
mod triangle;

use std::fmt;

use crate::{
    error::{Error, Result},
    intersection::Intersection,
    material::Material,
    math::{Matrix4, Ray, Tuple},
};

pub use cone::*;
pub use cube::*;
pub use cylinder::*;
pub use graph::*;
pub use group::*;
pub use plane::*;
pub use sphere::*;
pub use triangle::*;

/// Handle to a shape stored in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the shape in its graph's storage.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A trait that represents any primitive that can be intersected by a Ray in its own object space.
pub trait Intersect {
    /// Find every crossing between the (object space) ray and this primitive,
    /// tagging each with `object`.
    fn local_intersect(&self, ray: &Ray, object: ShapeId) -> Vec<Intersection>;

    /// The surface normal at an object space point. `hit` is the intersection
    /// that produced the point; only smooth triangles look at it.
    fn local_normal_at(&self, point: Tuple, hit: &Intersection) -> Tuple;
}

/// The closed set of shape variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
    Cylinder(Cylinder),
    Cone(Cone),
    Triangle(Triangle),
    SmoothTriangle(SmoothTriangle),
    Group(Group),
}

impl Geometry {
    /// The intersectable surface of this variant, or `None` for a group, which
    /// has no surface of its own.
    pub fn primitive(&self) -> Option<&dyn Intersect> {
        match self {
            Self::Sphere(s) => Some(s),
            Self::Plane(p) => Some(p),
            Self::Cube(c) => Some(c),
            Self::Cylinder(c) => Some(c),
            Self::Cone(c) => Some(c),
            Self::Triangle(t) => Some(t),
            Self::SmoothTriangle(t) => Some(t),
            Self::Group(_) => None,
        }
    }
}

/// A node of the scene graph: geometry placed in its parent's space by a
/// transform, with a material.
///
/// The inverse and inverse-transpose of the transform are computed once when
/// the transform is assigned, which is also where singular transforms are
/// rejected.
#[derive(Clone, Debug)]
pub struct Shape {
    geometry: Geometry,
    pub material: Material,
    transform: Matrix4,
    inverse: Matrix4,
    normal_matrix: Matrix4,
    parent: Option<ShapeId>,
}

impl Shape {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            material: Material::default(),
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            normal_matrix: Matrix4::identity(),
            parent: None,
        }
    }

    /// A unit sphere centered at the origin.
    pub fn sphere() -> Self {
        Self::new(Geometry::Sphere(Sphere))
    }

    /// A unit sphere made of glass.
    pub fn glass_sphere() -> Self {
        Self::sphere().with_material(Material::glass())
    }

    /// The xz plane.
    pub fn plane() -> Self {
        Self::new(Geometry::Plane(Plane))
    }

    /// An axis-aligned cube spanning -1..1 on every axis.
    pub fn cube() -> Self {
        Self::new(Geometry::Cube(Cube))
    }

    /// An infinite, open unit cylinder around the y axis.
    pub fn cylinder() -> Self {
        Self::new(Geometry::Cylinder(Cylinder::default()))
    }

    /// A unit cylinder truncated to `minimum..maximum` on y, optionally capped.
    pub fn bounded_cylinder(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self::new(Geometry::Cylinder(Cylinder::new(minimum, maximum, closed)))
    }

    /// An infinite, open double cone with its apex at the origin.
    pub fn cone() -> Self {
        Self::new(Geometry::Cone(Cone::default()))
    }

    /// A double cone truncated to `minimum..maximum` on y, optionally capped.
    pub fn bounded_cone(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self::new(Geometry::Cone(Cone::new(minimum, maximum, closed)))
    }

    pub fn triangle(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
        Self::new(Geometry::Triangle(Triangle::new(p1, p2, p3)))
    }

    pub fn smooth_triangle(p1: Tuple, p2: Tuple, p3: Tuple, n1: Tuple, n2: Tuple, n3: Tuple) -> Self {
        Self::new(Geometry::SmoothTriangle(SmoothTriangle::new(
            p1, p2, p3, n1, n2, n3,
        )))
    }

    /// An empty group. Children are attached through [`SceneGraph::add_child`].
    pub fn group() -> Self {
        Self::new(Geometry::Group(Group::default()))
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Replace the transform, failing if it cannot be inverted.
    ///
    /// # Errors
    ///
    /// [`Error::NonInvertible`] when the determinant's magnitude is at or
    /// below [`SINGULAR_DETERMINANT`](crate::math::SINGULAR_DETERMINANT).
    /// The shape keeps its previous transform.
    pub fn set_transform(&mut self, transform: Matrix4) -> Result<()> {
        let inverse = transform
            .inverse()
            .ok_or_else(|| Error::NonInvertible(transform.determinant()))?;

        self.transform = transform;
        self.inverse = inverse;
        self.normal_matrix = inverse.transpose();
        Ok(())
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn inverse_transform(&self) -> &Matrix4 {
        &self.inverse
    }

    /// The inverse-transpose of the transform, which carries normals out of object space.
    pub fn normal_matrix(&self) -> &Matrix4 {
        &self.normal_matrix
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The group this shape hangs from, if any. Only used to compose
    /// transforms; the group owns the child, never the other way round.
    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    pub fn is_group(&self) -> bool {
        matches!(self.geometry, Geometry::Group(_))
    }

    /// Children of a group; empty for every other shape.
    pub fn children(&self) -> &[ShapeId] {
        match &self.geometry {
            Geometry::Group(group) => group.children(),
            _ => &[],
        }
    }
}
