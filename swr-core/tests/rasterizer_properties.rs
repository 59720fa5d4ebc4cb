//! Rasterizer and loader properties checked through the public API.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use approx::assert_relative_eq;
use swr_core::line::line_points;
use swr_core::vector::{normalize_or_self, V3f};
use swr_core::{
    barycentric, draw_line, fill_triangle, load_obj, parse_obj, render, Canvas, Color,
    IndexList, LoadError, ParseErrorKind, PixelCanvas, RenderParams, Shading, V2f, V2i,
};

const INK: Color = Color::WHITE;

fn pixels_of_line(a: V2i, b: V2i) -> Vec<(i32, i32)> {
    let mut canvas = PixelCanvas::new(64, 64, Color::BLACK);
    draw_line(a, b, &mut canvas, INK);
    canvas.positions_of(INK)
}

#[test]
fn line_point_sets_one_pixel() {
    for (x, y) in [(0, 0), (7, 3), (63, 63), (31, 0)] {
        let p = V2i::new(x, y);
        assert_eq!(pixels_of_line(p, p), vec![(x, y)]);
    }
}

#[test]
fn line_is_symmetric() {
    let points = [
        V2i::new(1, 1),
        V2i::new(60, 9),
        V2i::new(13, 50),
        V2i::new(40, 40),
        V2i::new(2, 33),
        V2i::new(33, 2),
        V2i::new(61, 58),
    ];
    for &a in &points {
        for &b in &points {
            assert_eq!(pixels_of_line(a, b), pixels_of_line(b, a), "{a} -> {b}");
        }
    }
}

#[test]
fn axis_aligned_line_counts() {
    let vertical = pixels_of_line(V2i::new(10, 3), V2i::new(10, 42));
    assert_eq!(vertical.len(), 40);
    assert!(vertical.iter().all(|&(x, _)| x == 10));

    let horizontal = pixels_of_line(V2i::new(50, 7), V2i::new(5, 7));
    assert_eq!(horizontal.len(), 46);
    assert!(horizontal.iter().all(|&(_, y)| y == 7));
}

#[test]
fn sloped_line_is_connected() {
    let points = line_points(V2i::new(3, 40), V2i::new(58, 12));
    assert_eq!(points.len(), 56);
    for pair in points.windows(2) {
        let d = pair[1] - pair[0];
        assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
    }
}

#[test]
fn collinear_triangles_write_nothing() {
    let mut canvas = PixelCanvas::new(32, 32, Color::BLACK);
    let lines = [
        (V2i::new(0, 0), V2i::new(3, 6), V2i::new(6, 12)),
        (V2i::new(20, 1), V2i::new(20, 30), V2i::new(20, 15)),
        (V2i::new(9, 9), V2i::new(9, 9), V2i::new(9, 9)),
    ];
    for (a, b, c) in lines {
        assert!(!fill_triangle(a, b, c, &mut canvas, INK));
    }
    assert_eq!(canvas.count(INK), 0);
}

#[test]
fn filled_rows_are_monotone() {
    let mut canvas = PixelCanvas::new(40, 40, Color::BLACK);
    assert!(fill_triangle(
        V2i::new(3, 2),
        V2i::new(35, 17),
        V2i::new(12, 38),
        &mut canvas,
        INK
    ));

    let runs: Vec<(i32, i32)> = (0..40)
        .filter_map(|y| {
            let xs: Vec<i32> = (0..40)
                .filter(|&x| canvas.get_pixel(x, y) == Some(INK))
                .collect();
            let (lo, hi) = (*xs.first()?, *xs.last()?);
            assert_eq!(xs.len() as i32, hi - lo + 1, "gap in row {y}");
            Some((lo, hi))
        })
        .collect();
    assert_eq!(runs.len(), 37);

    // the left boundary follows edges that both lean right; the right
    // boundary grows until the middle vertex and shrinks after it
    let widest = runs.iter().map(|r| r.1).max().unwrap();
    assert_eq!(widest, 35);
    let peak = runs.iter().position(|r| r.1 == widest).unwrap();
    assert!(runs[..=peak].windows(2).all(|w| w[1].1 >= w[0].1));
    assert!(runs[peak..].windows(2).all(|w| w[1].1 <= w[0].1));
    assert!(runs.windows(2).all(|w| w[1].0 >= w[0].0));
}

#[test]
fn barycentric_center_point() {
    let w = barycentric(
        V2f::new(0.0, 0.0),
        V2f::new(2.0, 0.0),
        V2f::new(0.0, 2.0),
        V2f::new(1.0, 1.0),
    )
    .unwrap();
    assert_relative_eq!(w.sum(), 1.0, epsilon = 1e-6);
    assert!(w.iter().all(|&x| (0.0..=1.0).contains(&x)));
}

#[test]
fn normalize_zero_is_zero() {
    let n = normalize_or_self(V3f::zeros());
    assert_eq!(n, V3f::zeros());
    assert!(n.iter().all(|x| x.is_finite()));
}

#[test]
fn load_single_triangle() {
    let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
    assert_eq!(mesh.vertices().len(), 3);
    assert_eq!(mesh.faces().len(), 1);
    assert_eq!(mesh.extent(), V3f::new(1.0, 1.0, 0.0));
}

#[test]
fn load_rejects_undeclared_vertex() {
    let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap_err();
    assert_eq!(err.line, 4);
    assert!(matches!(
        err.kind,
        ParseErrorKind::IndexOutOfRange {
            list: IndexList::Vertex,
            index: 4,
            ..
        }
    ));
    assert!(err.to_string().ends_with("at line 4"));
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("swr-core-{}.obj", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# square\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4").unwrap();
    drop(file);

    let mesh = load_obj(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(mesh.faces().len(), 2);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_obj("/nonexistent/swr/mesh.obj").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn render_fills_fitted_canvas() {
    let mesh = parse_obj("v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\nf 1 2 3\nf 1 3 4\n").unwrap();
    let params = RenderParams::default()
        .with_target_width(55)
        .with_margin(5)
        .with_shading(Shading::Flat(INK));
    let (canvas, stats) = render(&mesh, &params);

    assert_eq!((canvas.width(), canvas.height()), (55, 55));
    assert_eq!(stats.drawn, 2);
    // the square covers x, y in 0..=50; the margin stays background
    assert_eq!(canvas.count(INK), 51 * 51);
    assert_eq!(canvas.get_pixel(54, 54), Some(Color::BLACK));
}
