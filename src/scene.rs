use std::{path::Path, time::Instant};

use log::info;
use rayon::prelude::*;

use crate::{camera::Camera, canvas::Canvas, error::Result, material::Color, world::World};

/// Render options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// The maximum number of bounces a ray can reflect/refract from an initial ray.
    pub max_ray_depth: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { max_ray_depth: 5 }
    }
}

/// A world, a camera to view it from, and the options to render it with.
pub struct Scene {
    pub world: World,
    pub camera: Camera,
    pub options: RenderOptions,
}

impl Scene {
    pub fn new(world: World, camera: Camera) -> Self {
        Self {
            world,
            camera,
            options: RenderOptions::default(),
        }
    }

    /// Trace out a pixel, where top-left of the image is (0, 0).
    pub fn trace_pixel(&self, x: u32, y: u32) -> Color {
        let ray = self.camera.ray_for_pixel(x, y);
        self.world.color_at(&ray, self.options.max_ray_depth)
    }

    /// Render every pixel. Pixels are independent, so they are traced in
    /// parallel on rayon's global pool.
    pub fn render(&self) -> Canvas {
        let (w, h) = (self.camera.hsize, self.camera.vsize);
        info!(
            "rendering {}x{} ({} shapes, {} lights, depth {})",
            w,
            h,
            self.world.objects.len(),
            self.world.lights.len(),
            self.options.max_ray_depth
        );

        let start = Instant::now();
        let width = w as usize;
        let pixels = (0..width * h as usize)
            .into_par_iter()
            .map(|i| self.trace_pixel((i % width) as u32, (i / width) as u32))
            .collect::<Vec<_>>();
        info!("render complete in {:.3}s", start.elapsed().as_secs_f64());

        Canvas::from_pixels(w, h, pixels)
    }

    /// Render the image out to the desired save file.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.render().save(path)?;
        info!("wrote {}", path.display());
        Ok(())
    }
}
