use std::ops::Index;

use log::debug;

use crate::{
    error::{Error, Result},
    intersection::{sort_intersections, Intersection},
    math::{Ray, Tuple},
};

use super::{Geometry, Shape, ShapeId};

/// Arena owning every shape of a scene.
///
/// Groups refer to their children by [`ShapeId`] and children point back at
/// their group through [`Shape::parent`]. Shapes with no parent are roots and
/// are what a world intersects against.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    shapes: Vec<Shape>,
    roots: Vec<ShapeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a shape into the graph as a new root.
    pub fn insert(&mut self, mut shape: Shape) -> ShapeId {
        let id = ShapeId::from_index(self.shapes.len());
        shape.parent = None;
        if let Geometry::Group(group) = &mut shape.geometry {
            group.clear();
        }
        debug!("inserted shape {}", id);
        self.shapes.push(shape);
        self.roots.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.index())
    }

    /// Shapes without a parent, in insertion order.
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    /// A handle that pairs a shape with the graph it lives in, for queries
    /// that need to walk the parent chain.
    pub fn object(&self, id: ShapeId) -> ShapeRef<'_> {
        ShapeRef { graph: self, id }
    }

    fn check(&self, id: ShapeId) -> Result<()> {
        if id.index() < self.shapes.len() {
            Ok(())
        } else {
            Err(Error::UnknownShape(id))
        }
    }

    /// Attach `child` to `group`. The child's transform becomes relative to
    /// the group, and the child stops being a root.
    pub fn add_child(&mut self, group: ShapeId, child: ShapeId) -> Result<()> {
        self.check(group)?;
        self.check(child)?;

        if !self[group].is_group() {
            return Err(Error::NotAGroup(group));
        }
        if let Some(parent) = self[child].parent {
            return Err(Error::AlreadyOwned { child, parent });
        }

        // walking up from the group must never reach the child
        let mut cursor = Some(group);
        while let Some(id) = cursor {
            if id == child {
                return Err(Error::Cycle { group, child });
            }
            cursor = self[id].parent;
        }

        self.shapes[child.index()].parent = Some(group);
        if let Geometry::Group(g) = &mut self.shapes[group.index()].geometry {
            g.push(child);
        }
        self.roots.retain(|&root| root != child);
        debug!("attached shape {} to group {}", child, group);
        Ok(())
    }

    /// Deep copy the subtree rooted at `id`. The copy hangs from nothing and
    /// is registered as a new root.
    pub fn duplicate(&mut self, id: ShapeId) -> Result<ShapeId> {
        self.check(id)?;

        let shape = self[id].clone();
        let copy = self.insert(shape);
        let children = self[id].children().to_vec();
        for child in children {
            let child_copy = self.duplicate(child)?;
            self.add_child(copy, child_copy)?;
        }
        Ok(copy)
    }

    /// Intersect a world (or parent) space ray with the shape `id` and, for a
    /// group, everything beneath it. Results are sorted by `t`.
    pub fn intersect(&self, id: ShapeId, ray: &Ray) -> Vec<Intersection> {
        let shape = &self[id];
        let local = ray.transform(shape.inverse_transform());

        match shape.geometry.primitive() {
            Some(primitive) => primitive.local_intersect(&local, id),
            None => {
                let mut xs: Vec<Intersection> = shape
                    .children()
                    .iter()
                    .flat_map(|&child| self.intersect(child, &local))
                    .collect();
                sort_intersections(&mut xs);
                xs
            }
        }
    }

    /// Carry a world space point into the object space of `id`, applying every
    /// ancestor's inverse transform from the root down.
    pub fn world_to_object(&self, id: ShapeId, point: Tuple) -> Tuple {
        let shape = &self[id];
        let point = match shape.parent {
            Some(parent) => self.world_to_object(parent, point),
            None => point,
        };
        *shape.inverse_transform() * point
    }

    /// Carry an object space normal of `id` out to world space, normalizing at
    /// every level.
    pub fn normal_to_world(&self, id: ShapeId, normal: Tuple) -> Tuple {
        let shape = &self[id];
        let normal = (*shape.normal_matrix() * normal).to_vector().normalize();
        match shape.parent {
            Some(parent) => self.normal_to_world(parent, normal),
            None => normal,
        }
    }

    /// World space surface normal of `id` at a world space point.
    ///
    /// # Panics
    ///
    /// Groups have no surface; asking one for a normal is a logic error.
    pub fn normal_at(&self, id: ShapeId, point: Tuple, hit: &Intersection) -> Tuple {
        let primitive = match self[id].geometry.primitive() {
            Some(primitive) => primitive,
            None => panic!("shape {} is a group and has no surface normal", id),
        };
        let local_point = self.world_to_object(id, point);
        let local_normal = primitive.local_normal_at(local_point, hit);
        self.normal_to_world(id, local_normal)
    }
}

impl Index<ShapeId> for SceneGraph {
    type Output = Shape;

    fn index(&self, id: ShapeId) -> &Self::Output {
        &self.shapes[id.index()]
    }
}

/// A shape together with the graph it belongs to.
#[derive(Clone, Copy)]
pub struct ShapeRef<'a> {
    graph: &'a SceneGraph,
    id: ShapeId,
}

impl<'a> ShapeRef<'a> {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn shape(&self) -> &'a Shape {
        &self.graph[self.id]
    }

    pub fn world_to_object(&self, point: Tuple) -> Tuple {
        self.graph.world_to_object(self.id, point)
    }

    pub fn normal_at(&self, point: Tuple, hit: &Intersection) -> Tuple {
        self.graph.normal_at(self.id, point, hit)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::math::transform::{rotation_y, rotation_z, scaling, shearing, translation};

    fn nested() -> (SceneGraph, ShapeId) {
        let mut graph = SceneGraph::new();
        let g1 = graph.insert(Shape::group().with_transform(rotation_y(PI / 2.)).unwrap());
        let g2 = graph.insert(Shape::group().with_transform(scaling(1., 2., 3.)).unwrap());
        let s = graph.insert(Shape::sphere().with_transform(translation(5., 0., 0.)).unwrap());
        graph.add_child(g1, g2).unwrap();
        graph.add_child(g2, s).unwrap();
        (graph, s)
    }

    #[test]
    fn adding_a_child_links_both_ways() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group());
        let s = graph.insert(Shape::sphere());
        graph.add_child(g, s).unwrap();

        assert_eq!(graph[g].children(), &[s]);
        assert_eq!(graph[s].parent(), Some(g));
        assert_eq!(graph.roots(), &[g]);
    }

    #[test]
    fn add_child_rejects_bad_links() {
        let mut graph = SceneGraph::new();
        let g1 = graph.insert(Shape::group());
        let g2 = graph.insert(Shape::group());
        let s = graph.insert(Shape::sphere());

        assert!(matches!(graph.add_child(s, g1), Err(Error::NotAGroup(_))));
        assert!(matches!(graph.add_child(g1, g1), Err(Error::Cycle { .. })));
        assert!(matches!(
            graph.add_child(g1, ShapeId::from_index(42)),
            Err(Error::UnknownShape(_))
        ));

        graph.add_child(g1, g2).unwrap();
        assert!(matches!(graph.add_child(g2, g1), Err(Error::Cycle { .. })));

        graph.add_child(g1, s).unwrap();
        assert!(matches!(
            graph.add_child(g2, s),
            Err(Error::AlreadyOwned { parent, .. }) if parent == g1
        ));
    }

    #[test]
    fn empty_group_is_never_hit() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group());
        let ray = Ray::new(Tuple::origin(), Tuple::vector(0., 0., 1.));
        assert!(graph.intersect(g, &ray).is_empty());
    }

    #[test]
    fn group_intersections_are_sorted() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group());
        let s1 = graph.insert(Shape::sphere());
        let s2 = graph.insert(Shape::sphere().with_transform(translation(0., 0., -3.)).unwrap());
        let s3 = graph.insert(Shape::sphere().with_transform(translation(5., 0., 0.)).unwrap());
        for s in [s1, s2, s3] {
            graph.add_child(g, s).unwrap();
        }

        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        let xs = graph.intersect(g, &ray);
        let objects: Vec<_> = xs.iter().map(|i| i.object).collect();
        assert_eq!(objects, vec![s2, s2, s1, s1]);
    }

    #[test]
    fn group_transform_applies_to_children() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group().with_transform(scaling(2., 2., 2.)).unwrap());
        let s = graph.insert(Shape::sphere().with_transform(translation(5., 0., 0.)).unwrap());
        graph.add_child(g, s).unwrap();

        let ray = Ray::new(Tuple::point(10., 0., -10.), Tuple::vector(0., 0., 1.));
        assert_eq!(graph.intersect(g, &ray).len(), 2);
    }

    #[test]
    fn group_scale_doubles_hit_distances() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group().with_transform(scaling(2., 2., 2.)).unwrap());
        let s = graph.insert(Shape::sphere());
        graph.add_child(g, s).unwrap();

        let ray = Ray::new(Tuple::point(0., 0., -10.), Tuple::vector(0., 0., 1.));
        let ts: Vec<_> = graph.intersect(g, &ray).iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![8., 12.]);
    }

    #[test]
    fn world_normals_are_unit_vectors_under_shear_and_nonuniform_scale() {
        let shapes = vec![
            (Shape::sphere(), Tuple::point(0., 0., 0.)),
            (Shape::plane(), Tuple::point(0., 0., 0.)),
            (Shape::cube(), Tuple::point(0., 0., 0.)),
            (Shape::bounded_cylinder(-1., 1., true), Tuple::point(0., 0., 0.)),
            (Shape::bounded_cone(-1., 1., true), Tuple::point(0., 0.5, 0.)),
            (
                Shape::triangle(Tuple::point(0., 1., 0.), Tuple::point(-1., 0., 0.), Tuple::point(1., 0., 0.)),
                Tuple::point(0., 1. / 3., 0.),
            ),
            (
                Shape::smooth_triangle(
                    Tuple::point(0., 1., 0.),
                    Tuple::point(-1., 0., 0.),
                    Tuple::point(1., 0., 0.),
                    Tuple::vector(0., 1., 0.),
                    Tuple::vector(-1., 0., 0.),
                    Tuple::vector(1., 0., 0.),
                ),
                Tuple::point(0., 1. / 3., 0.),
            ),
        ];
        let transform = translation(0.2, 0.1, 0.)
            * rotation_z(0.4)
            * shearing(0.3, 0., 0.2, 0., 0., 0.1)
            * scaling(1., 0.7, 1.3);

        for (shape, local_target) in shapes {
            let mut graph = SceneGraph::new();
            let g = graph.insert(Shape::group().with_transform(scaling(1., 2., 1.)).unwrap());
            let s = graph.insert(shape.with_transform(transform).unwrap());
            graph.add_child(g, s).unwrap();

            let target = *graph[g].transform() * (*graph[s].transform() * local_target);
            let origin = Tuple::point(0.3, 0.7, -9.);
            let ray = Ray::new(origin, (target - origin).normalize());

            let xs = graph.intersect(g, &ray);
            assert!(!xs.is_empty());
            for i in &xs {
                let n = graph.normal_at(i.object, ray.position(i.t), i);
                assert!((n.magnitude() - 1.).abs() < 1e-6, "|n| = {}", n.magnitude());
                assert_eq!(n.w, 0.);
            }
        }
    }

    #[test]
    fn scaled_shape_reports_world_distances() {
        let mut graph = SceneGraph::new();
        let s = graph.insert(Shape::sphere().with_transform(scaling(2., 2., 2.)).unwrap());
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        let ts: Vec<_> = graph.intersect(s, &ray).iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![3., 7.]);
    }

    #[test]
    fn translated_shape_can_be_missed() {
        let mut graph = SceneGraph::new();
        let s = graph.insert(Shape::sphere().with_transform(translation(5., 0., 0.)).unwrap());
        let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
        assert!(graph.intersect(s, &ray).is_empty());
    }

    #[test]
    fn point_from_world_to_nested_object_space() {
        let (graph, s) = nested();
        let p = graph.world_to_object(s, Tuple::point(-2., 0., -10.));
        assert_eq!(p, Tuple::point(0., 0., -1.));
    }

    #[test]
    fn normal_from_nested_object_to_world_space() {
        let (graph, s) = nested();
        let k = 3f64.sqrt() / 3.;
        let n = graph.normal_to_world(s, Tuple::vector(k, k, k));
        assert!((n.x - 0.2857).abs() < 1e-4);
        assert!((n.y - 0.4286).abs() < 1e-4);
        assert!((n.z + 0.8571).abs() < 1e-4);
    }

    #[test]
    fn normal_on_nested_child() {
        let (graph, s) = nested();
        let hit = Intersection::new(0., s);
        let n = graph.normal_at(s, Tuple::point(1.7321, 1.1547, -5.5774), &hit);
        assert!((n.x - 0.2857).abs() < 1e-4);
        assert!((n.y - 0.4286).abs() < 1e-4);
        assert!((n.z + 0.8571).abs() < 1e-4);
    }

    #[test]
    fn normal_on_transformed_sphere() {
        let mut graph = SceneGraph::new();
        let s = graph.insert(Shape::sphere().with_transform(translation(0., 1., 0.)).unwrap());
        let hit = Intersection::new(0., s);
        let n = graph.normal_at(s, Tuple::point(0., 1.70711, -0.70711), &hit);
        assert_eq!(n, Tuple::vector(0., 0.70711, -0.70711));
    }

    #[test]
    #[should_panic(expected = "group")]
    fn group_has_no_normal() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group());
        graph.normal_at(g, Tuple::origin(), &Intersection::new(0., g));
    }

    #[test]
    fn duplicate_copies_the_subtree() {
        let mut graph = SceneGraph::new();
        let g = graph.insert(Shape::group());
        let s = graph.insert(Shape::sphere());
        graph.add_child(g, s).unwrap();

        let copy = graph.duplicate(g).unwrap();
        assert_ne!(copy, g);
        assert_eq!(graph[copy].children().len(), 1);
        assert_ne!(graph[copy].children()[0], s);
        assert_eq!(graph.roots(), &[g, copy]);
        assert_eq!(graph[s].parent(), Some(g));
    }
}
