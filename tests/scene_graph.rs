use std::f64::consts::PI;

use whitted::{
    hit,
    math::{
        transform::{rotation_y, rotation_z, scaling, translation},
        Ray, Tuple,
    },
    Color, Error, Material, PointLight, SceneGraph, Shape, ShapeId, World,
};

/// One spoke of a hexagon: a sphere at the corner and a cylinder along the edge.
fn hexagon_side(graph: &mut SceneGraph) -> ShapeId {
    let side = graph.insert(Shape::group());
    let corner = graph.insert(
        Shape::sphere()
            .with_transform(translation(0., 0., -1.) * scaling(0.25, 0.25, 0.25))
            .unwrap(),
    );
    let edge = graph.insert(
        Shape::bounded_cylinder(0., 1., false)
            .with_transform(
                translation(0., 0., -1.)
                    * rotation_y(-PI / 6.)
                    * rotation_z(-PI / 2.)
                    * scaling(0.25, 1., 0.25),
            )
            .unwrap(),
    );
    graph.add_child(side, corner).unwrap();
    graph.add_child(side, edge).unwrap();
    side
}

fn hexagon(graph: &mut SceneGraph) -> ShapeId {
    let hex = graph.insert(Shape::group());
    for n in 0..6 {
        let side = hexagon_side(graph);
        graph
            .get_mut(side)
            .unwrap()
            .set_transform(rotation_y(n as f64 * PI / 3.))
            .unwrap();
        graph.add_child(hex, side).unwrap();
    }
    hex
}

#[test]
fn hexagon_has_one_root() {
    let mut graph = SceneGraph::new();
    let hex = hexagon(&mut graph);
    assert_eq!(graph.roots(), &[hex]);
    assert_eq!(graph[hex].children().len(), 6);
    assert_eq!(graph.len(), 1 + 6 * 3);
}

#[test]
fn ray_hits_the_nearest_corner_of_the_hexagon() {
    let mut graph = SceneGraph::new();
    let hex = hexagon(&mut graph);

    let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
    let xs = graph.intersect(hex, &ray);
    let first = hit(&xs).unwrap();

    // the corner sphere on the -z axis is the closest surface
    assert!((first.t - 3.75).abs() < 1e-5);
    assert!(xs.windows(2).all(|w| w[0].t <= w[1].t));
}

#[test]
fn duplicated_group_is_independent() {
    let mut graph = SceneGraph::new();
    let hex = hexagon(&mut graph);
    let copy = graph.duplicate(hex).unwrap();
    graph
        .get_mut(copy)
        .unwrap()
        .set_transform(translation(0., 10., 0.))
        .unwrap();

    let ray = Ray::new(Tuple::point(0., 0., -5.), Tuple::vector(0., 0., 1.));
    assert!(!graph.intersect(hex, &ray).is_empty());
    assert!(graph.intersect(copy, &ray).is_empty());
    assert_eq!(graph.roots(), &[hex, copy]);
}

#[test]
fn group_members_cast_shadows_in_a_world() {
    let mut world = World::new();
    world.lights.push(PointLight::new(Tuple::point(0., 10., 0.), Color::white()));

    let group = world
        .objects
        .insert(Shape::group().with_transform(translation(0., 2., 0.)).unwrap());
    let blocker = world.objects.insert(Shape::cube());
    world.objects.add_child(group, blocker).unwrap();
    world.objects.insert(Shape::plane());

    let light = world.lights[0];
    assert!(world.is_shadowed(&light, Tuple::point(0., 0.0001, 0.)));
    assert!(!world.is_shadowed(&light, Tuple::point(5., 0.0001, 0.)));
}

#[test]
fn reparenting_is_refused() {
    let mut graph = SceneGraph::new();
    let a = graph.insert(Shape::group());
    let b = graph.insert(Shape::group());
    let s = graph.insert(Shape::sphere().with_material(Material::glass()));
    graph.add_child(a, s).unwrap();

    let err = graph.add_child(b, s).unwrap_err();
    assert!(matches!(err, Error::AlreadyOwned { child, parent } if child == s && parent == a));
    assert!(err.to_string().contains("already owned"));
}
