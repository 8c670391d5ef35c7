use crate::{
    computation::Computation,
    intersection::{hit, sort_intersections, Intersection},
    lighting::{lighting, schlick, PointLight},
    material::{Color, Material},
    math::{refract, transform::scaling, Ray, Tuple, EPSILON},
    object::{SceneGraph, Shape},
};

/// Everything that can be seen: the shapes and the lights shining on them.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub objects: SceneGraph,
    pub lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two concentric spheres lit from the upper left: the fixture most of the
    /// shading behaviour is checked against.
    pub fn default_world() -> Self {
        let mut objects = SceneGraph::new();
        objects.insert(Shape::sphere().with_material(Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        }));
        objects.insert(
            Shape::sphere()
                .with_transform(scaling(0.5, 0.5, 0.5))
                .expect("uniform scaling is invertible"),
        );

        Self {
            objects,
            lights: vec![PointLight::default()],
        }
    }

    /// Every intersection of `ray` with every top-level shape, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let mut xs: Vec<Intersection> = self
            .objects
            .roots()
            .iter()
            .flat_map(|&id| self.objects.intersect(id, ray))
            .collect();
        sort_intersections(&mut xs);
        xs
    }

    /// Whether something sits between `point` and the light.
    pub fn is_shadowed(&self, light: &PointLight, point: Tuple) -> bool {
        let to_light = light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize());

        match hit(&self.intersect(&ray)) {
            Some(h) => h.t < distance,
            None => false,
        }
    }

    /// Color contributed by a prepared hit: direct light from every light
    /// plus whatever reflection and refraction bring in.
    pub fn shade_hit(&self, comps: &Computation<'_>, remaining: u32) -> Color {
        let object = self.objects.object(comps.object);
        let surface = self.lights.iter().fold(Color::black(), |acc, light| {
            let shadowed = self.is_shadowed(light, comps.over_point);
            acc + lighting(
                comps.material,
                object,
                light,
                comps.over_point,
                comps.eye,
                comps.normal,
                shadowed,
            )
        });

        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);

        let material = comps.material;
        if material.reflective > 0. && material.transparency > 0. {
            let reflectance = schlick(comps);
            surface + reflected * reflectance + refracted * (1. - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    /// Trace a ray into the world. `remaining` bounds how many more times the
    /// ray may be reflected or refracted.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> Color {
        let xs = self.intersect(ray);
        match hit(&xs) {
            Some(h) => {
                let comps = Computation::prepare(h, ray, &self.objects, &xs);
                self.shade_hit(&comps, remaining)
            }
            None => Color::black(),
        }
    }

    pub fn reflected_color(&self, comps: &Computation<'_>, remaining: u32) -> Color {
        let reflective = comps.material.reflective;
        if remaining == 0 || reflective.abs() < EPSILON {
            return Color::black();
        }

        let ray = Ray::new(comps.over_point, comps.reflect);
        self.color_at(&ray, remaining - 1) * reflective
    }

    pub fn refracted_color(&self, comps: &Computation<'_>, remaining: u32) -> Color {
        let transparency = comps.material.transparency;
        if remaining == 0 || transparency.abs() < EPSILON {
            return Color::black();
        }

        match refract(comps.eye, comps.normal, comps.n1 / comps.n2) {
            Some(direction) => {
                let ray = Ray::new(comps.under_point, direction);
                self.color_at(&ray, remaining - 1) * transparency
            }
            None => Color::black(),
        }
    }
}
