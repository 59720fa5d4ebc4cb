//! Render configuration and presets.

use crate::canvas::Color;
use crate::vector::V3f;

/// How each face picks its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Every face gets the same color.
    Flat(Color),

    /// Every face gets a random opaque color drawn from a generator seeded
    /// with `seed`, in face order.
    Random { seed: u64 },

    /// `base` scaled by the dot product of the unit face normal and `light`.
    /// Faces with a non-positive product are not drawn.
    Lambert { base: Color, light: V3f },
}

/// What gets rasterized for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Solid triangles.
    Filled,
    /// The three edges only.
    Wireframe,
}

/// Parameters for rendering a mesh to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Canvas width in pixels; the mesh x-range maps to `target_width - margin`.
    pub target_width: u32,

    /// Pixels added to both canvas dimensions beyond the scaled mesh extent.
    pub margin: u32,

    /// Initial color of every pixel.
    pub background: Color,

    pub shading: Shading,

    pub mode: RenderMode,

    /// Mirror the finished canvas so mesh +y points up in the image.
    pub flip_vertical: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            target_width: 750,
            margin: 5,
            background: Color::BLACK,
            shading: Shading::Random { seed: 0 },
            mode: RenderMode::Filled,
            flip_vertical: true,
        }
    }
}

impl RenderParams {
    /// White faces lit head-on from the viewer.
    #[must_use]
    pub fn lambert() -> Self {
        Self {
            shading: Shading::Lambert {
                base: Color::WHITE,
                light: V3f::new(0.0, 0.0, -1.0),
            },
            ..Default::default()
        }
    }

    /// White edges on black.
    #[must_use]
    pub fn wireframe() -> Self {
        Self {
            shading: Shading::Flat(Color::WHITE),
            mode: RenderMode::Wireframe,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_target_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self
    }

    #[must_use]
    pub const fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub const fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }
}
