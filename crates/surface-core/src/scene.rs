use crate::color::Color;
use crate::geometry::{Face, Mesh};
use crate::light::Light;
use glam::DVec3;

/// The single mesh and the ordered lights that shade it.
#[derive(Clone, Debug)]
pub struct Scene {
    pub mesh: Mesh,
    pub lights: Vec<Light>,
}

/// One flat-shaded triangle ready for a backend to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedTriangle {
    pub points: [DVec3; 3],
    pub color: Color,
}

impl Scene {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            lights: Vec::new(),
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Flat shading: each triangle sums, per light, the ambient product and
    /// the diffuse product scaled by the cosine between the triangle normal
    /// and the direction from its centroid to the light.
    pub fn shade(&self) -> Vec<ShadedTriangle> {
        let geometry = &self.mesh.geometry;
        let material = &self.mesh.material;
        geometry
            .triangles
            .iter()
            .enumerate()
            .map(|(i, tri)| {
                let points = geometry.triangle_points(tri);
                let Face { centroid, normal } = geometry.face(i);
                let mut color = Color::TRANSPARENT;
                for light in &self.lights {
                    color = color.add(&material.ambient.modulate(&light.ambient));
                    let ray = (light.position - centroid).normalize_or_zero();
                    let illuminance = normal.dot(ray);
                    color = color.add(&material.diffuse.modulate(&light.diffuse).scale(illuminance));
                }
                ShadedTriangle {
                    points,
                    color: color.clamped(),
                }
            })
            .collect()
    }
}
