//! Wavefront-style mesh text parser
//!
//! The format is line oriented:
//!
//! ```text
//! # comment
//! v x y z [w]
//! vt u v [w]
//! vn x y z
//! f v[/vt[/vn]] v[/vt[/vn]] v[/vt[/vn]]
//! ```
//!
//! `o`, `g`, `s`, `mtllib`, `usemtl` and `l` are accepted and ignored. Lines
//! that start with `#` or with whitespace are skipped. Face indices are
//! 1-based and may only refer to elements declared on earlier lines.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nom::{
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    number::complete::float,
    IResult,
};
use tracing::{debug, info};

use crate::error::{IndexList, LoadResult, ParseError, ParseErrorKind};
use crate::geometry::{Face, FaceCorner, GeometricVertex, Mesh, TextureVertex, VertexNormal};

/// Parse mesh text held in memory
pub fn parse_obj(input: &str) -> Result<Mesh, ParseError> {
    let mut builder = MeshBuilder::new();
    for (i, line) in input.lines().enumerate() {
        builder.feed(i + 1, line)?;
    }
    Ok(builder.finish())
}

/// Parse mesh text from a reader, one line at a time
pub fn read_obj<R: BufRead>(reader: R) -> LoadResult<Mesh> {
    let mut builder = MeshBuilder::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        builder.feed(i + 1, &line)?;
    }
    Ok(builder.finish())
}

/// Load a mesh file from disk
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<Mesh> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading mesh");
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Accumulates elements while scanning. Dropped on the first error, so a
/// partially built mesh never escapes.
struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    fn new() -> Self {
        Self { mesh: Mesh::new() }
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<(), ParseError> {
        if line.starts_with('#') || line.starts_with(char::is_whitespace) {
            return Ok(());
        }

        let mut fields = line.split_whitespace();
        let Some(element) = fields.next() else {
            return Ok(());
        };
        let args: Vec<&str> = fields.collect();

        self.element(element, &args)
            .map_err(|kind| ParseError::new(line_number, kind))
    }

    fn element(&mut self, element: &str, args: &[&str]) -> Result<(), ParseErrorKind> {
        match element {
            "o" | "g" | "s" | "mtllib" | "usemtl" | "l" => Ok(()),
            "v" => {
                check_field_count("v", args.len(), 3, 4)?;
                let x = parse_floats(args)?;
                let w = x.get(3).copied().unwrap_or(1.0);
                self.mesh
                    .add_vertex(GeometricVertex::with_weight(x[0], x[1], x[2], w));
                Ok(())
            }
            "vt" => {
                check_field_count("vt", args.len(), 2, 3)?;
                let x = parse_floats(args)?;
                let w = x.get(2).copied().unwrap_or(0.0);
                self.mesh.add_texture_vertex(TextureVertex::new(x[0], x[1], w));
                Ok(())
            }
            "vn" => {
                if args.len() != 3 {
                    return Err(ParseErrorKind::WrongFieldCount("vn"));
                }
                let x = parse_floats(args)?;
                self.mesh.add_normal(VertexNormal::new(x[0], x[1], x[2]));
                Ok(())
            }
            "f" => {
                if args.len() != 3 {
                    return Err(ParseErrorKind::WrongFieldCount("f"));
                }
                let face = Face::new(
                    self.face_corner(args[0])?,
                    self.face_corner(args[1])?,
                    self.face_corner(args[2])?,
                );
                self.mesh.add_face(face);
                Ok(())
            }
            other => Err(ParseErrorKind::UnrecognizedElement(other.to_string())),
        }
    }

    /// Parse `v`, `v/vt`, `v//vn` or `v/vt/vn` against the lists read so far
    fn face_corner(&self, token: &str) -> Result<FaceCorner, ParseErrorKind> {
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() > 3 {
            return Err(ParseErrorKind::BadFaceCorner(token.to_string()));
        }

        let vertex = self.resolve(IndexList::Vertex, parts[0])?;
        let texture = match parts.get(1) {
            Some(vt) if !vt.is_empty() => self.resolve(IndexList::Texture, vt)?,
            _ => 0,
        };
        let normal = match parts.get(2) {
            Some(vn) => self.resolve(IndexList::Normal, vn)?,
            None => 0,
        };
        Ok(FaceCorner::new(vertex, texture, normal))
    }

    fn resolve(&self, list: IndexList, token: &str) -> Result<usize, ParseErrorKind> {
        let (_, index) = all_consuming(face_index)(token).map_err(|_| ParseErrorKind::BadIndex {
            list,
            token: token.to_string(),
        })?;

        let len = match list {
            IndexList::Vertex => self.mesh.vertices().len(),
            IndexList::Texture => self.mesh.texture_vertices().len(),
            IndexList::Normal => self.mesh.normals().len(),
        };
        if index == 0 || index > len {
            return Err(ParseErrorKind::IndexOutOfRange { list, index, len });
        }
        Ok(index)
    }

    fn finish(self) -> Mesh {
        info!(
            vertices = self.mesh.vertices().len(),
            texture_vertices = self.mesh.texture_vertices().len(),
            normals = self.mesh.normals().len(),
            faces = self.mesh.faces().len(),
            "Mesh loaded"
        );
        self.mesh
    }
}

fn check_field_count(
    element: &'static str,
    n: usize,
    min: usize,
    max: usize,
) -> Result<(), ParseErrorKind> {
    if n < min {
        Err(ParseErrorKind::NotEnoughFields(element))
    } else if n > max {
        Err(ParseErrorKind::TooManyFields(element))
    } else {
        Ok(())
    }
}

fn parse_floats(args: &[&str]) -> Result<Vec<f32>, ParseErrorKind> {
    args.iter()
        .map(|&token| {
            all_consuming(number)(token)
                .map(|(_, x)| x)
                .map_err(|_| ParseErrorKind::BadFloat(token.to_string()))
        })
        .collect()
}

fn number(input: &str) -> IResult<&str, f32> {
    float(input)
}

fn face_index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}
