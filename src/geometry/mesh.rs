//! Mesh data shared by the wall and floor builders
//!
//! Positions, UVs, and normals with u16 triangle indices. Converted to a
//! macroquad `Mesh` only when the scene is assembled.

use macroquad::color::Color;
use macroquad::math::{vec3, Vec2, Vec3};
use macroquad::models::{Mesh, Vertex};
use macroquad::texture::Texture2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub pos: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Append a quad as two triangles, corners in winding order
    pub fn push_quad(&mut self, quad: [MeshVertex; 4]) {
        let base = self.vertices.len() as u16;
        self.vertices.extend_from_slice(&quad);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Rotate every vertex around the Y axis by `yaw`, then translate by
    /// `offset`. Normals rotate with the positions.
    pub fn rotate_y_translate(&mut self, yaw: f32, offset: Vec3) {
        let (sin_y, cos_y) = yaw.sin_cos();
        for v in &mut self.vertices {
            let rx = v.pos.x * cos_y - v.pos.z * sin_y;
            let rz = v.pos.x * sin_y + v.pos.z * cos_y;
            v.pos = vec3(rx + offset.x, v.pos.y + offset.y, rz + offset.z);
            v.normal = vec3(
                v.normal.x * cos_y - v.normal.z * sin_y,
                v.normal.y,
                v.normal.x * sin_y + v.normal.z * cos_y,
            );
        }
    }

    /// Convert to a library mesh for submission
    pub fn to_mesh(&self, texture: Option<Texture2D>, color: Color) -> Mesh {
        Mesh {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(v.pos.x, v.pos.y, v.pos.z, v.uv.x, v.uv.y, color))
                .collect(),
            indices: self.indices.clone(),
            texture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;
    use std::f32::consts::FRAC_PI_2;

    fn vert(x: f32, y: f32, z: f32) -> MeshVertex {
        MeshVertex {
            pos: vec3(x, y, z),
            uv: vec2(0.0, 0.0),
            normal: vec3(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn test_push_quad_indices() {
        let mut mesh = MeshData::new();
        mesh.push_quad([
            vert(0.0, 0.0, 0.0),
            vert(1.0, 0.0, 0.0),
            vert(1.0, 1.0, 0.0),
            vert(0.0, 1.0, 0.0),
        ]);
        mesh.push_quad([
            vert(0.0, 0.0, 1.0),
            vert(1.0, 0.0, 1.0),
            vert(1.0, 1.0, 1.0),
            vert(0.0, 1.0, 1.0),
        ]);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_rotate_y_translate() {
        let mut mesh = MeshData::new();
        mesh.vertices.push(MeshVertex {
            pos: vec3(1.0, 0.0, 0.0),
            uv: vec2(0.0, 0.0),
            normal: vec3(1.0, 0.0, 0.0),
        });

        // Quarter turn carries +X onto +Z, then shift
        mesh.rotate_y_translate(FRAC_PI_2, vec3(10.0, 5.0, 10.0));

        let v = mesh.vertices[0];
        assert!((v.pos.x - 10.0).abs() < 0.001);
        assert!((v.pos.y - 5.0).abs() < 0.001);
        assert!((v.pos.z - 11.0).abs() < 0.001);
        assert!((v.normal.z - 1.0).abs() < 0.001);
    }
}
