mod point;

use crate::{
    computation::Computation,
    material::{Color, Material},
    math::Tuple,
    object::ShapeRef,
};

pub use point::*;

/// Phong shading of a single point under a single light.
///
/// The ambient term is always applied. Diffuse and specular only contribute
/// when the point is lit and faces the light.
pub fn lighting(
    material: &Material,
    object: ShapeRef<'_>,
    light: &PointLight,
    point: Tuple,
    eye: Tuple,
    normal: Tuple,
    in_shadow: bool,
) -> Color {
    let color = match &material.pattern {
        Some(pattern) => pattern.color_at_shape(object, point),
        None => material.color,
    };

    let effective = color * light.intensity;
    let ambient = effective * material.ambient;

    let to_light = (light.position - point).normalize();
    let light_dot_normal = to_light.dot(normal);
    if in_shadow || light_dot_normal < 0. {
        return ambient;
    }

    let diffuse = effective * material.diffuse * light_dot_normal;

    let reflect_dir = (-to_light).reflect(normal);
    let reflect_dot_eye = reflect_dir.dot(eye);
    let specular = if reflect_dot_eye > 0. {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    } else {
        Color::black()
    };

    ambient + diffuse + specular
}

/// Schlick's approximation of the Fresnel reflectance at the hit: the share of
/// light that is reflected rather than refracted.
pub fn schlick(comps: &Computation<'_>) -> f64 {
    let mut cos = comps.eye.dot(comps.normal);

    if comps.n1 > comps.n2 {
        let n = comps.n1 / comps.n2;
        let sin2_t = n * n * (1. - cos * cos);
        if sin2_t >= 1. {
            return 1.;
        }
        cos = (1. - sin2_t).sqrt();
    }

    let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
    r0 + (1. - r0) * (1. - cos).powi(5)
}
