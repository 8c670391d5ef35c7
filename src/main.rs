use std::{f64::consts::PI, time::Instant};

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info};

use whitted::{
    math::{
        transform::{rotation_x, rotation_y, rotation_z, scaling, translation, view_transform},
        Tuple,
    },
    Camera, Color, Material, Pattern, PointLight, Result, Scene, Shape, World,
};

/// A checkered room with a glass ball, a mirror cube and a grouped pair of
/// bounded cylinder and cone.
fn showcase(matches: &ArgMatches) -> Result<World> {
    let mut world = World::new();
    world.lights.push(PointLight::new(Tuple::point(-10., 10., -10.), Color::white()));

    let objects = &mut world.objects;

    let floor = Shape::plane().with_material(Material {
        pattern: Some(Pattern::checkers(Color::white(), Color::new(0.15, 0.15, 0.15))),
        specular: 0.,
        reflective: 0.2,
        ..Default::default()
    });
    objects.insert(floor);

    let wall = Shape::plane()
        .with_transform(translation(0., 0., 8.) * rotation_x(PI / 2.))?
        .with_material(Material {
            pattern: Some(
                Pattern::stripe(Color::new(0.6, 0.7, 0.9), Color::new(0.45, 0.55, 0.75))
                    .with_transform(rotation_y(PI / 4.) * scaling(0.5, 0.5, 0.5))?,
            ),
            specular: 0.,
            ..Default::default()
        });
    objects.insert(wall);

    let mut glass = Shape::glass_sphere().with_transform(translation(-0.5, 1., 0.5))?;
    glass.material.color = Color::new(0.1, 0.1, 0.1);
    glass.material.diffuse = 0.1;
    glass.material.reflective = 0.9;
    glass.material.shininess = 300.;
    objects.insert(glass);

    let cube = Shape::cube()
        .with_transform(translation(2., 0.5, 1.5) * rotation_y(PI / 5.) * scaling(0.5, 0.5, 0.5))?
        .with_material(Material {
            color: Color::new(0.2, 0.2, 0.25),
            reflective: 0.7,
            ..Default::default()
        });
    objects.insert(cube);

    let group = objects.insert(Shape::group().with_transform(translation(-2.5, 0., 2.))?);
    let cylinder = objects.insert(
        Shape::bounded_cylinder(0., 1.5, true)
            .with_transform(scaling(0.4, 1., 0.4))?
            .with_material(Material {
                pattern: Some(
                    Pattern::ring(Color::new(0.9, 0.3, 0.2), Color::new(0.9, 0.8, 0.3))
                        .with_transform(scaling(0.2, 0.2, 0.2))?,
                ),
                ..Default::default()
            }),
    );
    let cone = objects.insert(
        Shape::bounded_cone(-1., 0., true)
            .with_transform(translation(0., 2.5, 0.) * scaling(0.4, 1., 0.4))?
            .with_material(Material {
                pattern: Some(
                    Pattern::gradient(Color::new(0.2, 0.8, 0.3), Color::new(0.1, 0.3, 0.8))
                        .with_transform(rotation_z(PI / 2.))?,
                ),
                ..Default::default()
            }),
    );
    objects.add_child(group, cylinder)?;
    objects.add_child(group, cone)?;

    if let Some(obj) = matches.value_of("obj") {
        let model = objects.load_obj(
            obj,
            Material {
                color: Color::new(0.8, 0.5, 0.3),
                ..Default::default()
            },
        )?;
        if let Some(shape) = objects.get_mut(model) {
            shape.set_transform(translation(1.5, 0., -1.))?;
        }
    }

    Ok(world)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let width = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit());
    let fov = value_t!(matches, "fov", f64).unwrap_or_else(|e| e.exit());
    let depth = value_t!(matches, "depth", u32).unwrap_or_else(|e| e.exit());

    let now = Instant::now();
    let world = showcase(matches)?;
    let camera = Camera::new(width, height, fov.to_radians()).with_transform(view_transform(
        Tuple::point(0., 2.5, -6.),
        Tuple::point(0., 0.8, 0.),
        Tuple::vector(0., 1., 0.),
    ))?;
    info!("scene constructed in {:.3}s", now.elapsed().as_secs_f64());

    let mut scene = Scene::new(world, camera);
    scene.options.max_ray_depth = depth;

    let output = matches.value_of("output").unwrap_or("render.png");
    scene.render_to(output)?;
    info!("operation complete in {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("whitted")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders a showcase scene with a Whitted-style ray tracer")
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("The output file; the image format follows the extension")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("Image width in pixels")
                .default_value("800"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("Image height in pixels")
                .default_value("450"),
        )
        .arg(
            Arg::with_name("fov")
                .long("fov")
                .help("Field of view in degrees")
                .default_value("60"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .help("Maximum number of reflection/refraction bounces")
                .default_value("5"),
        )
        .arg(
            Arg::with_name("obj")
                .long("obj")
                .takes_value(true)
                .help("A Wavefront OBJ model to place in the scene"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("failed to render: {}", e);
        std::process::exit(1);
    }
}
