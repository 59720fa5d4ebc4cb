//! Vector aliases and the small integer helpers the rasterizers share
use nalgebra::{Vector2, Vector3};

/// Integer pixel coordinate
pub type V2i = Vector2<i32>;
/// 2D float vector
pub type V2f = Vector2<f32>;
/// 3D float vector
pub type V3f = Vector3<f32>;

/// Normalize `v`, returning it unchanged when its length is zero.
pub fn normalize_or_self(v: V3f) -> V3f {
    let length = v.norm();
    if length == 0.0 {
        v
    } else {
        v / length
    }
}

/// Z component of the cross product of two 2D integer vectors, widened to
/// `i64` so pixel coordinates past 46341 cannot overflow the products.
pub fn cross_2d(a: V2i, b: V2i) -> i64 {
    i64::from(a.x) * i64::from(b.y) - i64::from(a.y) * i64::from(b.x)
}

/// True when the three points have zero signed area.
pub fn collinear(a: V2i, b: V2i, c: V2i) -> bool {
    cross_2d(b - a, c - b) == 0
}

pub fn sgn(x: i32) -> i32 {
    x.signum()
}

/// Round half away from zero; values strictly inside (-0.5, 0.5) become 0.
pub fn round_half_away(x: f32) -> i32 {
    if x <= -0.5 {
        (x - 0.5) as i32
    } else if x >= 0.5 {
        (x + 0.5) as i32
    } else {
        0
    }
}

/// Order three points by ascending y with three compare-and-swap passes.
pub fn sort_by_y(p: &mut [V2i; 3]) {
    if p[0].y > p[1].y {
        p.swap(0, 1);
    }
    if p[1].y > p[2].y {
        p.swap(1, 2);
    }
    if p[0].y > p[1].y {
        p.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_ops() {
        let a = V3f::new(1.0, 2.0, 3.0);
        let b = V3f::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, V3f::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, V3f::new(3.0, 3.0, 3.0));
        assert_eq!(a.cross(&b), V3f::new(-3.0, 6.0, -3.0));
        assert_eq!(a * 2.0, V3f::new(2.0, 4.0, 6.0));
        assert_relative_eq!(a.dot(&b), 32.0);
        assert_relative_eq!(a.norm(), 14.0f32.sqrt());
    }

    #[test]
    fn test_normalize() {
        let a = V3f::new(1.0, 2.0, 3.0);
        let n = normalize_or_self(a);
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.x, 1.0 / 14.0f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let n = normalize_or_self(V3f::zeros());
        assert_eq!(n, V3f::zeros());
        assert!(!n.x.is_nan());
    }

    #[test]
    fn test_collinear() {
        assert!(collinear(V2i::new(0, 0), V2i::new(1, 1), V2i::new(5, 5)));
        assert!(collinear(V2i::new(3, 3), V2i::new(3, 3), V2i::new(3, 3)));
        assert!(!collinear(V2i::new(0, 0), V2i::new(4, 0), V2i::new(0, 4)));
    }

    #[test]
    fn test_cross_2d_large_coordinates() {
        let a = V2i::new(60_000, 0);
        let b = V2i::new(0, 60_000);
        assert_eq!(cross_2d(a, b), 3_600_000_000);
        assert_eq!(cross_2d(b, a), -3_600_000_000);

        let origin = V2i::new(0, 0);
        assert!(collinear(origin, V2i::new(60_000, 60_000), V2i::new(120_000, 120_000)));
        assert!(!collinear(origin, a, b));
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(0.49), 0);
        assert_eq!(round_half_away(-0.49), 0);
        assert_eq!(round_half_away(0.5), 1);
        assert_eq!(round_half_away(-0.5), -1);
        assert_eq!(round_half_away(2.4), 2);
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(-2.5), -3);
    }

    #[test]
    fn test_sort_by_y() {
        let mut p = [V2i::new(0, 9), V2i::new(1, 3), V2i::new(2, 5)];
        sort_by_y(&mut p);
        assert_eq!(p, [V2i::new(1, 3), V2i::new(2, 5), V2i::new(0, 9)]);
    }
}
