use crate::{
    error::{Error, Result},
    math::{Matrix4, Ray, Tuple},
};

/// A pinhole camera. Represents a viewable area that a scene can be rendered to.
///
/// The canvas sits one unit in front of the eye (at `z = -1` in camera space)
/// and the view transform places the camera in the world.
#[derive(Clone, Debug)]
pub struct Camera {
    pub hsize: u32,
    pub vsize: u32,
    /// Horizontal (or vertical, for portrait canvases) field of view in radians.
    pub fov: f64,
    transform: Matrix4,
    inverse: Matrix4,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: u32, vsize: u32, fov: f64) -> Self {
        let half_view = (fov / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            fov,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2. / hsize as f64,
        }
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Place the camera, usually with a [`view_transform`](crate::math::transform::view_transform).
    pub fn set_transform(&mut self, transform: Matrix4) -> Result<()> {
        self.inverse = transform
            .inverse()
            .ok_or_else(|| Error::NonInvertible(transform.determinant()))?;
        self.transform = transform;
        Ok(())
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// World space size of one pixel on the canvas.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The ray from the eye through the centre of pixel (`px`, `py`), where
    /// (0, 0) is the top-left of the image.
    pub fn ray_for_pixel(&self, px: u32, py: u32) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // the camera looks toward -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self.inverse * Tuple::point(world_x, world_y, -1.);
        let origin = self.inverse * Tuple::origin();
        Ray::new(origin, (pixel - origin).normalize())
    }
}
