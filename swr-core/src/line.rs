//! Integer line rasterizer
//!
//! Sloped lines are walked in a canonical space where the major axis always
//! steps by +1 and the minor axis by 0 or +1. An [`Octant`] picked once per
//! line maps each canonical (major, minor) step back to pixel space, so the
//! error-term loop exists exactly once.
use crate::canvas::{Canvas, Color};
use crate::vector::V2i;

/// Mapping from canonical (major, minor) steps to a pixel offset.
///
/// The first axis named is the major axis, followed by the direction of the
/// x and y steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    XMajorRightDown,
    XMajorRightUp,
    XMajorLeftDown,
    XMajorLeftUp,
    YMajorRightDown,
    YMajorRightUp,
    YMajorLeftDown,
    YMajorLeftUp,
}

impl Octant {
    /// Classify a non-zero delta
    pub fn from_delta(dx: i32, dy: i32) -> Self {
        let right = dx >= 0;
        let down = dy >= 0;
        if dx.abs() >= dy.abs() {
            match (right, down) {
                (true, true) => Self::XMajorRightDown,
                (true, false) => Self::XMajorRightUp,
                (false, true) => Self::XMajorLeftDown,
                (false, false) => Self::XMajorLeftUp,
            }
        } else {
            match (right, down) {
                (true, true) => Self::YMajorRightDown,
                (true, false) => Self::YMajorRightUp,
                (false, true) => Self::YMajorLeftDown,
                (false, false) => Self::YMajorLeftUp,
            }
        }
    }

    /// Offset from the start point of canonical step (major, minor)
    pub fn map(self, major: i32, minor: i32) -> (i32, i32) {
        match self {
            Self::XMajorRightDown => (major, minor),
            Self::XMajorRightUp => (major, -minor),
            Self::XMajorLeftDown => (-major, minor),
            Self::XMajorLeftUp => (-major, -minor),
            Self::YMajorRightDown => (minor, major),
            Self::YMajorRightUp => (minor, -major),
            Self::YMajorLeftDown => (-minor, major),
            Self::YMajorLeftUp => (-minor, -major),
        }
    }

    /// True when the major coordinate grows along the walk
    pub fn major_ascending(self) -> bool {
        matches!(
            self,
            Self::XMajorRightDown
                | Self::XMajorRightUp
                | Self::YMajorRightDown
                | Self::YMajorLeftDown
        )
    }
}

/// Draw a line from `p0` to `p1`, both end points included.
pub fn draw_line<C: Canvas + ?Sized>(p0: V2i, p1: V2i, canvas: &mut C, color: Color) {
    walk_line(p0, p1, |x, y| canvas.set_pixel(x, y, color));
}

/// Every pixel of the line from `p0` to `p1`, in walk order
pub fn line_points(p0: V2i, p1: V2i) -> Vec<V2i> {
    let mut points = Vec::new();
    walk_line(p0, p1, |x, y| points.push(V2i::new(x, y)));
    points
}

fn walk_line<F: FnMut(i32, i32)>(p0: V2i, p1: V2i, mut plot: F) {
    if p0 == p1 {
        plot(p0.x, p0.y);
    } else if p0.x == p1.x {
        for y in p0.y.min(p1.y)..=p0.y.max(p1.y) {
            plot(p0.x, y);
        }
    } else if p0.y == p1.y {
        for x in p0.x.min(p1.x)..=p0.x.max(p1.x) {
            plot(x, p0.y);
        }
    } else {
        let d = p1 - p0;
        let octant = Octant::from_delta(d.x, d.y);
        let major_delta = d.x.abs().max(d.y.abs());
        let minor_delta = d.x.abs().min(d.y.abs());
        // An exact half-pixel tie steps toward the larger major coordinate,
        // which keeps the pixel set independent of the walk direction.
        let ascending = octant.major_ascending();

        let mut err = 0;
        let mut minor = 0;
        for major in 0..=major_delta {
            let (x, y) = octant.map(major, minor);
            plot(p0.x + x, p0.y + y);
            err += 2 * minor_delta;
            if err > major_delta || (ascending && err == major_delta) {
                minor += 1;
                err -= 2 * major_delta;
            }
        }
    }
}
