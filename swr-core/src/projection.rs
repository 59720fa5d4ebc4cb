//! Mesh-to-image projection and the render loop
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::canvas::{Canvas, Color, PixelCanvas};
use crate::geometry::{GeometricVertex, Mesh};
use crate::line::draw_line;
use crate::params::{RenderMode, RenderParams, Shading};
use crate::triangle::fill_triangle;
use crate::vector::{normalize_or_self, V2i, V3f};

/// Largest width or height [`Projection::fit`] will produce
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Orthographic fit of a mesh's bounding box onto a pixel grid.
///
/// x and y are translated so the box minimum lands on the origin, then scaled
/// uniformly so the x-range spans `target_width - margin` pixels. z is
/// ignored. The scale is reduced when either side would exceed
/// [`MAX_CANVAS_SIDE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub offset: V3f,
    pub scale: f32,
    pub width: u32,
    pub height: u32,
}

impl Projection {
    pub fn fit(mesh: &Mesh, target_width: u32, margin: u32) -> Self {
        let offset = mesh.offset();
        let extent = mesh.extent();

        // A mesh with no x extent collapses onto column 0 instead of dividing by zero
        let usable = target_width.saturating_sub(margin) as f32;
        let mut scale = if extent.x > 0.0 { usable / extent.x } else { 0.0 };

        let longest = extent.x.max(extent.y);
        let limit = MAX_CANVAS_SIDE.saturating_sub(margin) as f32;
        if longest * scale > limit {
            let clamped = limit / longest;
            warn!(
                requested = scale,
                clamped,
                max_side = MAX_CANVAS_SIDE,
                "Fitted canvas exceeds the size limit, clamping scale"
            );
            scale = clamped;
        }

        let size = extent * scale;
        let width = (size.x + margin as f32) as u32;
        let height = (size.y + margin as f32) as u32;

        info!(scale, width, height, "Fitted projection");

        Self {
            offset,
            scale,
            width,
            height,
        }
    }

    /// Pixel coordinate of a vertex, truncated toward zero
    pub fn project(&self, vertex: &GeometricVertex) -> V2i {
        let [x, y, _] = vertex.fit(&self.offset, &V3f::repeat(self.scale));
        V2i::new(x, y)
    }
}

/// Face counts from one pass over a mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    /// Faces facing away from the light
    pub culled: usize,
    /// Faces that projected to a line or a point
    pub degenerate: usize,
}

/// Render `mesh` onto a new in-memory canvas
pub fn render(mesh: &Mesh, params: &RenderParams) -> (PixelCanvas, RenderStats) {
    render_with(mesh, params, PixelCanvas::new)
}

/// Render `mesh` onto a canvas built by `make_canvas(width, height, background)`.
///
/// The canvas is sized by [`Projection::fit`], every face is drawn in mesh
/// order with no depth test (later faces overwrite earlier ones), and the
/// result is flipped vertically if `params.flip_vertical` is set.
pub fn render_with<C, F>(mesh: &Mesh, params: &RenderParams, make_canvas: F) -> (C, RenderStats)
where
    C: Canvas,
    F: FnOnce(u32, u32, Color) -> C,
{
    let projection = Projection::fit(mesh, params.target_width, params.margin);
    let mut canvas = make_canvas(projection.width, projection.height, params.background);
    let stats = draw_mesh(mesh, &projection, &mut canvas, params);
    if params.flip_vertical {
        canvas.flip_vertical();
    }
    (canvas, stats)
}

/// Draw every face of `mesh` through `projection`
pub fn draw_mesh<C: Canvas + ?Sized>(
    mesh: &Mesh,
    projection: &Projection,
    canvas: &mut C,
    params: &RenderParams,
) -> RenderStats {
    let mut shader = FaceShader::new(params.shading);
    let mut stats = RenderStats::default();

    for i in 0..mesh.faces().len() {
        let (Some(v0), Some(v1), Some(v2)) = (
            mesh.face_vertex(i, 0),
            mesh.face_vertex(i, 1),
            mesh.face_vertex(i, 2),
        ) else {
            stats.degenerate += 1;
            continue;
        };

        let Some(color) = shader.color([v0.position, v1.position, v2.position]) else {
            stats.culled += 1;
            continue;
        };

        let p0 = projection.project(v0);
        let p1 = projection.project(v1);
        let p2 = projection.project(v2);

        let drawn = match params.mode {
            RenderMode::Filled => fill_triangle(p0, p1, p2, canvas, color),
            RenderMode::Wireframe => {
                draw_line(p0, p1, canvas, color);
                draw_line(p1, p2, canvas, color);
                draw_line(p2, p0, canvas, color);
                true
            }
        };
        if drawn {
            stats.drawn += 1;
        } else {
            stats.degenerate += 1;
        }
    }

    debug!(
        drawn = stats.drawn,
        culled = stats.culled,
        degenerate = stats.degenerate,
        "Mesh drawn"
    );
    stats
}

/// Unit normal of the face `v` using the renderer's winding convention
pub fn face_normal(v: [V3f; 3]) -> V3f {
    normalize_or_self((v[2] - v[0]).cross(&(v[1] - v[0])))
}

enum FaceShader {
    Flat(Color),
    Random(StdRng),
    Lambert { base: Color, light: V3f },
}

impl FaceShader {
    fn new(shading: Shading) -> Self {
        match shading {
            Shading::Flat(color) => Self::Flat(color),
            Shading::Random { seed } => Self::Random(StdRng::seed_from_u64(seed)),
            Shading::Lambert { base, light } => Self::Lambert {
                base,
                light: normalize_or_self(light),
            },
        }
    }

    /// `None` when the face is culled
    fn color(&mut self, v: [V3f; 3]) -> Option<Color> {
        match self {
            Self::Flat(color) => Some(*color),
            Self::Random(rng) => Some(Color::random(rng)),
            Self::Lambert { base, light } => {
                let intensity = face_normal(v).dot(light);
                (intensity > 0.0).then(|| base.shade(intensity))
            }
        }
    }
}
