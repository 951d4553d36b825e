//! Geometry and material primitives for the single surface mesh.
//!
//! A [`Plane`] is a lattice of shared vertices centred on the origin (x grows
//! to the right, y grows upwards). Triangles reference vertices by index, so
//! moving a vertex moves every triangle that touches it.

use crate::color::Color;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: DVec3,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }
}

/// Centroid and unit normal of one triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub centroid: DVec3,
    pub normal: DVec3,
}

impl Face {
    pub fn from_points(points: &[DVec3; 3]) -> Self {
        Self {
            centroid: (points[0] + points[1] + points[2]) / 3.0,
            normal: (points[1] - points[0])
                .cross(points[2] - points[0])
                .normalize_or_zero(),
        }
    }
}

/// Rectangular vertex grid with `columns × rows` cells.
#[derive(Clone, Debug)]
pub struct Plane {
    pub width: f64,
    pub height: f64,
    pub columns: u32,
    pub rows: u32,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<[usize; 3]>,
    /// Per-triangle data, valid while `dirty` is false.
    faces: Vec<Face>,
    /// Set when vertex positions change; cleared by [`Plane::update_faces`].
    pub dirty: bool,
}

impl Plane {
    pub fn new(width: f64, height: f64, columns: u32, rows: u32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let cell_w = width / columns as f64;
        let cell_h = height / rows as f64;
        let offset_x = width * -0.5;
        let offset_y = height * 0.5;

        let stride = rows as usize + 1;
        let mut vertices = Vec::with_capacity((columns as usize + 1) * stride);
        for x in 0..=columns {
            for y in 0..=rows {
                vertices.push(Vertex::new(
                    offset_x + x as f64 * cell_w,
                    offset_y - y as f64 * cell_h,
                    0.0,
                ));
            }
        }

        let index = |x: u32, y: u32| x as usize * stride + y as usize;
        let mut triangles = Vec::with_capacity(columns as usize * rows as usize * 2);
        for x in 0..columns {
            for y in 0..rows {
                let v0 = index(x, y);
                let v1 = index(x, y + 1);
                let v2 = index(x + 1, y);
                let v3 = index(x + 1, y + 1);
                triangles.push([v0, v1, v2]);
                triangles.push([v2, v1, v3]);
            }
        }

        let mut plane = Self {
            width,
            height,
            columns,
            rows,
            vertices,
            triangles,
            faces: Vec::new(),
            dirty: true,
        };
        plane.update_faces();
        plane
    }

    /// Recompute cached faces if vertices moved. Returns true when it did.
    pub fn update_faces(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.faces = self
            .triangles
            .iter()
            .map(|tri| Face::from_points(&self.triangle_points(tri)))
            .collect();
        self.dirty = false;
        true
    }

    /// Face of triangle `index`; computed on the spot while the cache is stale.
    #[inline]
    pub fn face(&self, index: usize) -> Face {
        if self.dirty {
            Face::from_points(&self.triangle_points(&self.triangles[index]))
        } else {
            self.faces[index]
        }
    }

    #[inline]
    pub fn triangle_points(&self, tri: &[usize; 3]) -> [DVec3; 3] {
        [
            self.vertices[tri[0]].position,
            self.vertices[tri[1]].position,
            self.vertices[tri[2]].position,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
}

impl Material {
    pub fn new(
        ambient: Color,
        diffuse: Color,
        fill_opacity: f64,
        stroke_opacity: f64,
        stroke_width: f64,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            fill_opacity,
            stroke_opacity,
            stroke_width,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Plane,
    pub material: Material,
}

impl Mesh {
    pub fn new(geometry: Plane, material: Material) -> Self {
        Self { geometry, material }
    }
}
