//! Builders for the affine transforms used by shapes, patterns and the camera.
//!
//! Compose right to left: `translation(..) * scaling(..)` scales first.

use super::{Matrix4, Tuple};

#[rustfmt::skip]
pub fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        [1., 0., 0., x],
        [0., 1., 0., y],
        [0., 0., 1., z],
        [0., 0., 0., 1.],
    ])
}

#[rustfmt::skip]
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
    Matrix4::new([
        [x, 0., 0., 0.],
        [0., y, 0., 0.],
        [0., 0., z, 0.],
        [0., 0., 0., 1.],
    ])
}

#[rustfmt::skip]
pub fn rotation_x(r: f64) -> Matrix4 {
    Matrix4::new([
        [1., 0., 0., 0.],
        [0., r.cos(), -r.sin(), 0.],
        [0., r.sin(), r.cos(), 0.],
        [0., 0., 0., 1.],
    ])
}

#[rustfmt::skip]
pub fn rotation_y(r: f64) -> Matrix4 {
    Matrix4::new([
        [r.cos(), 0., r.sin(), 0.],
        [0., 1., 0., 0.],
        [-r.sin(), 0., r.cos(), 0.],
        [0., 0., 0., 1.],
    ])
}

#[rustfmt::skip]
pub fn rotation_z(r: f64) -> Matrix4 {
    Matrix4::new([
        [r.cos(), -r.sin(), 0., 0.],
        [r.sin(), r.cos(), 0., 0.],
        [0., 0., 1., 0.],
        [0., 0., 0., 1.],
    ])
}

/// Each component moves in proportion to another, e.g. `xy` moves x in proportion to y.
#[rustfmt::skip]
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4 {
    Matrix4::new([
        [1., xy, xz, 0.],
        [yx, 1., yz, 0.],
        [zx, zy, 1., 0.],
        [0., 0., 0., 1.],
    ])
}

/// Orient the world relative to an eye at `from` looking at `to`.
///
/// `up` only needs to be roughly up; it must not be parallel to the view direction.
#[rustfmt::skip]
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Matrix4 {
    let forward = (to - from).normalize();
    let left = forward.cross(up.normalize());
    let true_up = left.cross(forward);

    let orientation = Matrix4::new([
        [left.x, left.y, left.z, 0.],
        [true_up.x, true_up.y, true_up.z, 0.],
        [-forward.x, -forward.y, -forward.z, 0.],
        [0., 0., 0., 1.],
    ]);

    orientation * translation(-from.x, -from.y, -from.z)
}
