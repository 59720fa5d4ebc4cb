//! Mesh model: vertex lists and triangular faces referencing them
use std::fmt;

use nalgebra::Vector3;

use crate::vector::V3f;

/// A geometric vertex with homogeneous weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricVertex {
    pub position: Vector3<f32>,
    pub w: f32,
}

impl GeometricVertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::with_weight(x, y, z, 1.0)
    }

    pub fn with_weight(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            w,
        }
    }

    pub fn position(&self) -> V3f {
        self.position
    }

    /// Translate by `offset`, scale per axis and truncate to integers
    pub fn fit(&self, offset: &V3f, scale: &V3f) -> [i32; 3] {
        let p = (self.position + offset).component_mul(scale);
        [p.x as i32, p.y as i32, p.z as i32]
    }
}

/// A texture vertex; the third component defaults to 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureVertex {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

impl TextureVertex {
    pub fn new(u: f32, v: f32, w: f32) -> Self {
        Self { u, v, w }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexNormal {
    pub normal: Vector3<f32>,
}

impl VertexNormal {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            normal: Vector3::new(x, y, z),
        }
    }
}

/// One corner of a face as 1-based indices; 0 means "unset" for texture and normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCorner {
    pub vertex: usize,
    pub texture: usize,
    pub normal: usize,
}

impl FaceCorner {
    pub fn new(vertex: usize, texture: usize, normal: usize) -> Self {
        Self {
            vertex,
            texture,
            normal,
        }
    }

    pub fn has_texture(&self) -> bool {
        self.texture != 0
    }

    pub fn has_normal(&self) -> bool {
        self.normal != 0
    }
}

/// A triangle face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub corners: [FaceCorner; 3],
}

impl Face {
    pub fn new(c0: FaceCorner, c1: FaceCorner, c2: FaceCorner) -> Self {
        Self {
            corners: [c0, c1, c2],
        }
    }
}

/// A triangulated mesh.
///
/// The lists are only appended to by the loader; once a load returns the
/// mesh is read-only.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<GeometricVertex>,
    texture_vertices: Vec<TextureVertex>,
    normals: Vec<VertexNormal>,
    faces: Vec<Face>,
}

impl Mesh {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_vertex(&mut self, v: GeometricVertex) {
        self.vertices.push(v);
    }

    pub(crate) fn add_texture_vertex(&mut self, vt: TextureVertex) {
        self.texture_vertices.push(vt);
    }

    pub(crate) fn add_normal(&mut self, vn: VertexNormal) {
        self.normals.push(vn);
    }

    pub(crate) fn add_face(&mut self, f: Face) {
        self.faces.push(f);
    }

    pub fn vertices(&self) -> &[GeometricVertex] {
        &self.vertices
    }

    pub fn texture_vertices(&self) -> &[TextureVertex] {
        &self.texture_vertices
    }

    pub fn normals(&self) -> &[VertexNormal] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Geometric vertex referenced by `corner` of face `face`.
    ///
    /// Returns `None` when either index is out of range. Loaded meshes always
    /// resolve, since the loader validates every reference.
    pub fn face_vertex(&self, face: usize, corner: usize) -> Option<&GeometricVertex> {
        let index = self.faces.get(face)?.corners.get(corner)?.vertex;
        self.vertices.get(index.checked_sub(1)?)
    }

    /// Smallest coordinate on `axis` (0 = x, 1 = y, 2 = z); 0 for an empty mesh
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2` and the mesh has at least one vertex.
    pub fn min(&self, axis: usize) -> f32 {
        self.fold_axis(axis, f32::min)
    }

    /// Largest coordinate on `axis`; 0 for an empty mesh
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2` and the mesh has at least one vertex.
    pub fn max(&self, axis: usize) -> f32 {
        self.fold_axis(axis, f32::max)
    }

    /// `max(axis) - min(axis)`
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2` and the mesh has at least one vertex.
    pub fn range(&self, axis: usize) -> f32 {
        self.max(axis) - self.min(axis)
    }

    /// Translation that moves the bounding box minimum to the origin
    pub fn offset(&self) -> V3f {
        V3f::new(-self.min(0), -self.min(1), -self.min(2))
    }

    /// Per-axis extent of the bounding box
    pub fn extent(&self) -> V3f {
        V3f::new(self.range(0), self.range(1), self.range(2))
    }

    // Full scan on every call, seeded from the first vertex.
    fn fold_axis(&self, axis: usize, pick: fn(f32, f32) -> f32) -> f32 {
        let mut coords = self.vertices.iter().map(|v| v.position[axis]);
        match coords.next() {
            Some(first) => coords.fold(first, pick),
            None => 0.0,
        }
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geometric vertices {}", self.vertices.len())?;
        writeln!(f, "texture vertices {}", self.texture_vertices.len())?;
        writeln!(f, "vertex normals {}", self.normals.len())?;
        writeln!(f, "faces {}", self.faces.len())?;
        writeln!(f, "bounds-x {:.6} {:.6}", self.min(0), self.max(0))?;
        writeln!(f, "bounds-y {:.6} {:.6}", self.min(1), self.max(1))?;
        write!(f, "bounds-z {:.6} {:.6}", self.min(2), self.max(2))
    }
}
