//! Scanline triangle fill and barycentric weights
//!
//! A triangle is sorted by y and split at its middle vertex into at most two
//! triangles that each have one horizontal edge. Each part is then filled by
//! walking its two slanted edges from the shared apex with a pair of
//! Bresenham error terms, one horizontal run per row.
use tracing::trace;

use crate::canvas::{Canvas, Color};
use crate::vector::{collinear, round_half_away, sgn, sort_by_y, V2f, V2i, V3f};

/// Sine of the corner angle at `a` below which a triangle counts as collinear
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Collinearity test shared by both barycentric forms.
///
/// Compares the signed area `ab x ac` against `|ab| |ac|`, which makes the
/// cutoff independent of the triangle's size.
fn is_degenerate(ab: V2f, ac: V2f) -> bool {
    let area = ab.x * ac.y - ab.y * ac.x;
    area.abs() <= DEGENERATE_EPSILON * ab.norm() * ac.norm()
}

/// Fill the triangle `abc` with a solid color.
///
/// Returns `false` without touching the canvas when the points are collinear.
pub fn fill_triangle<C: Canvas + ?Sized>(
    a: V2i,
    b: V2i,
    c: V2i,
    canvas: &mut C,
    color: Color,
) -> bool {
    if collinear(a, b, c) {
        trace!(%a, %b, %c, "Skipping collinear triangle");
        return false;
    }

    let mut p = [a, b, c];
    sort_by_y(&mut p);
    let [p0, p1, p2] = p;

    if p0.y == p1.y {
        // flat bottom, walked down from the apex p2
        edge_walk(p2.y - p0.y, p0.x - p2.x, p1.x - p2.x, |x0, x1, y| {
            span(canvas, p2.x + x0, p2.x + x1, p2.y - y, color)
        });
    } else if p1.y == p2.y {
        // flat top, walked up from the apex p0
        edge_walk(p1.y - p0.y, p1.x - p0.x, p2.x - p0.x, |x0, x1, y| {
            span(canvas, p0.x + x0, p0.x + x1, p0.y + y, color)
        });
    } else {
        let k = split_x(p0, p1, p2);
        edge_walk(p2.y - p1.y, p1.x - p2.x, k - p2.x, |x0, x1, y| {
            span(canvas, p2.x + x0, p2.x + x1, p2.y - y, color)
        });
        edge_walk(p1.y - p0.y, p1.x - p0.x, k - p0.x, |x0, x1, y| {
            span(canvas, p0.x + x0, p0.x + x1, p0.y + y, color)
        });
    }
    true
}

/// X coordinate where the row through `p1` crosses the long edge `p0 p2`.
///
/// Points must be sorted by y with `p0.y < p2.y`.
pub fn split_x(p0: V2i, p1: V2i, p2: V2i) -> i32 {
    let t = f64::from(p1.y - p0.y) * f64::from(p2.x - p0.x) / f64::from(p2.y - p0.y);
    p0.x + round_half_away(t as f32)
}

/// Walk two edges that leave a shared apex.
///
/// `dy` is the height of the part and `dx0`, `dx1` the horizontal distance
/// from the apex to the far end of each edge. `span(x0, x1, row)` is called
/// for rows `0..=dy` with x offsets relative to the apex and `x0 <= x1`.
pub fn edge_walk<F: FnMut(i32, i32, i32)>(dy: i32, dx0: i32, dx1: i32, mut span: F) {
    let (dx0, dx1) = if dx0 > dx1 { (dx1, dx0) } else { (dx0, dx1) };

    if dy <= 0 {
        span(dx0.min(0), dx1.max(0), 0);
        return;
    }

    let inc0 = sgn(dx0);
    let inc1 = sgn(dx1);
    let step0 = 2 * dx0.abs();
    let step1 = 2 * dx1.abs();
    let step_y = 2 * dy;

    let (mut x0, mut x1) = (0, 0);
    let (mut err0, mut err1) = (0, 0);

    for y in 0..=dy {
        span(x0.min(x1), x0.max(x1), y);

        err0 += step0;
        while err0 >= dy {
            x0 += inc0;
            err0 -= step_y;
        }

        err1 += step1;
        while err1 >= dy {
            x1 += inc1;
            err1 -= step_y;
        }
    }
}

// Clipped to the canvas bounds
fn span<C: Canvas + ?Sized>(canvas: &mut C, x0: i32, x1: i32, y: i32, color: Color) {
    if y < 0 || y >= canvas.height() as i32 {
        return;
    }
    for x in x0.max(0)..=x1.min(canvas.width() as i32 - 1) {
        canvas.set_pixel(x, y, color);
    }
}

/// Weights `(w0, w1, w2)` with `p = w0 * a + w1 * b + w2 * c`.
///
/// Solved from the dot products of the edge vectors. `None` for a zero-area
/// triangle.
pub fn barycentric(a: V2f, b: V2f, c: V2f, p: V2f) -> Option<V3f> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;
    if is_degenerate(v0, v1) {
        return None;
    }

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let denom = d00 * d11 - d01 * d01;

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some(V3f::new(1.0 - v - w, v, w))
}

/// Same weights as [`barycentric`], from one 3D cross product.
pub fn barycentric_cross(a: V2f, b: V2f, c: V2f, p: V2f) -> Option<V3f> {
    let ab = b - a;
    let ac = c - a;
    let pa = a - p;

    if is_degenerate(ab, ac) {
        return None;
    }
    let x = V3f::new(ab.x, ac.x, pa.x).cross(&V3f::new(ab.y, ac.y, pa.y));

    let v = x.x / x.z;
    let w = x.y / x.z;
    Some(V3f::new(1.0 - v - w, v, w))
}
