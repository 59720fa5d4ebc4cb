//! PNG output for the SWR rasterizer
//!
//! Provides an [`ImageCanvas`] backed by an `image::RgbaImage` so the core
//! renderer can draw straight into an encodable buffer.
use std::path::Path;

use image::{imageops, Rgba, RgbaImage};
use swr_core::{Canvas, Color, Mesh, RenderParams, RenderStats};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing an image.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The encoder or the file write failed.
    #[error("failed to write {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Canvas that writes into an RGBA image buffer
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_bytes())),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as PNG at `path`
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| OutputError::Encode {
                path: path.display().to_string(),
                source,
            })?;
        info!(
            path = %path.display(),
            width = self.image.width(),
            height = self.image.height(),
            "Image saved"
        );
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgba(color.to_bytes()));
        }
    }

    fn flip_vertical(&mut self) {
        imageops::flip_vertical_in_place(&mut self.image);
    }
}

/// Render `mesh` into a new image canvas
pub fn render_image(mesh: &Mesh, params: &RenderParams) -> (ImageCanvas, RenderStats) {
    swr_core::render_with(mesh, params, ImageCanvas::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swr_core::{parse_obj, render, Shading};

    #[test]
    fn test_set_pixel_bounds() {
        let mut canvas = ImageCanvas::new(3, 2, Color::BLACK);
        canvas.set_pixel(2, 1, Color::RED);
        canvas.set_pixel(3, 1, Color::RED);
        canvas.set_pixel(-1, 0, Color::RED);
        assert_eq!(canvas.image().get_pixel(2, 1), &Rgba([255, 0, 0, 255]));
        let red = canvas.image().pixels().filter(|p| p.0 == [255, 0, 0, 255]).count();
        assert_eq!(red, 1);
    }

    #[test]
    fn test_flip_vertical() {
        let mut canvas = ImageCanvas::new(2, 2, Color::BLACK);
        canvas.set_pixel(0, 0, Color::GREEN);
        canvas.flip_vertical();
        assert_eq!(canvas.image().get_pixel(0, 1), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.image().get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_matches_pixel_canvas() {
        let mesh = parse_obj("v 0 0 0\nv 3 0 0\nv 1 2 0\nv 3 2 0\nf 1 2 3\nf 2 4 3\n").unwrap();
        let params = RenderParams::default()
            .with_target_width(33)
            .with_margin(3)
            .with_shading(Shading::Random { seed: 11 });

        let (image, image_stats) = render_image(&mesh, &params);
        let (pixels, pixel_stats) = render(&mesh, &params);
        assert_eq!(image_stats, pixel_stats);
        assert_eq!((image.width(), image.height()), (33, 23));

        for (p, c) in image.image().pixels().zip(pixels.pixels()) {
            assert_eq!(p.0, c.to_bytes());
        }
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join(format!("swr-png-{}.png", std::process::id()));
        let canvas = ImageCanvas::new(4, 4, Color::BLUE);
        canvas.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
    }
}
