//! SWR Core - integer software rasterizer
//!
//! Loads a triangulated mesh from Wavefront-style text, fits it onto a pixel
//! grid and fills its faces with Bresenham-style scanline walks. Image
//! encoding lives outside this crate; everything here draws through the
//! [`Canvas`] trait.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod line;
pub mod obj;
pub mod params;
pub mod projection;
pub mod triangle;
pub mod vector;

// Re-export commonly used types
pub use canvas::{Canvas, Color, PixelCanvas};
pub use error::{IndexList, LoadError, LoadResult, ParseError, ParseErrorKind};
pub use geometry::{Face, FaceCorner, GeometricVertex, Mesh, TextureVertex, VertexNormal};
pub use line::draw_line;
pub use obj::{load_obj, parse_obj, read_obj};
pub use params::{RenderMode, RenderParams, Shading};
pub use projection::{render, render_with, Projection, RenderStats, MAX_CANVAS_SIDE};
pub use triangle::{barycentric, barycentric_cross, fill_triangle};
pub use vector::{V2f, V2i, V3f};
