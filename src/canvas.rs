use std::path::Path;

use crate::{error::Result, material::Color};

/// A `width × height` grid of colors, stored row by row.
#[derive(Clone, Debug)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas with every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width as usize * height as usize],
        }
    }

    /// Wrap pixels that are already laid out row by row.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize, "pixel count does not match canvas size");
        Self {
            width,
            height,
            pixels,
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    pub fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        self.pixels[i] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Clamp and quantize to 8 bits per channel.
    pub fn to_image(&self) -> image::RgbImage {
        image::ImageBuffer::from_fn(self.width, self.height, |x, y| self.pixel_at(x, y).into())
    }

    /// Plain (P3) PPM text, with lines kept under 70 characters.
    pub fn to_ppm(&self) -> String {
        let mut ppm = format!("P3\n{} {}\n255\n", self.width, self.height);

        for row in self.pixels.chunks(self.width.max(1) as usize) {
            let mut line = String::new();
            for value in row.iter().flat_map(|c| c.to_rgb8()) {
                let value = value.to_string();
                if !line.is_empty() && line.len() + 1 + value.len() > 70 {
                    ppm.push_str(&line);
                    ppm.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&value);
            }
            ppm.push_str(&line);
            ppm.push('\n');
        }

        ppm
    }

    /// Write the canvas to disk; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}
