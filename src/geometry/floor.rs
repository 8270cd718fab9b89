//! Floor polygon and planar UV projection
//!
//! The floor mesh is built in plan space: position triples are (x, y, 0)
//! with plan X at stride offset 0 and plan Y at offset 1. The plan-to-world
//! mapping happens at scene assembly.
//!
//! Every outline point becomes a mesh vertex, including the double-inserted
//! corners between adjacent walls. Ear clipping is not robust to coincident
//! neighbors, so triangulation runs over a collapsed ring (consecutive
//! duplicates and the closing point removed) and the resulting indices are
//! mapped back; collapsed duplicates stay in the buffer unreferenced.

use macroquad::math::{vec2, vec3, Vec2};

use super::{MeshData, MeshVertex};

/// Coincident-corner tolerance, squared
const WELD_EPSILON_SQ: f32 = 1e-6;

/// Triangulated floor polygon in plan space
#[derive(Debug, Clone)]
pub struct FloorMesh {
    pub mesh: MeshData,
}

impl FloorMesh {
    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }
}

/// Build the floor mesh from the wall outline.
///
/// An outline with fewer than 3 distinct points produces a mesh with
/// vertices but no triangles; it never fails.
pub fn build_floor(outline: &[Vec2]) -> FloorMesh {
    let up = vec3(0.0, 0.0, 1.0);
    let mut mesh = MeshData {
        vertices: outline
            .iter()
            .map(|p| MeshVertex {
                pos: vec3(p.x, p.y, 0.0),
                uv: vec2(0.0, 0.0),
                normal: up,
            })
            .collect(),
        indices: Vec::new(),
    };

    let ring = collapse_ring(outline);
    if ring.len() >= 3 {
        let mut flat = Vec::with_capacity(ring.len() * 2);
        for &i in &ring {
            flat.push(outline[i].x as f64);
            flat.push(outline[i].y as f64);
        }
        // A self-intersecting or zero-area ring triangulates to whatever
        // earcut makes of it; the outline is not validated
        let triangles = earcutr::earcut(&flat, &[], 2).unwrap_or_default();
        mesh.indices = triangles.iter().map(|&i| ring[i] as u16).collect();
    }

    assign_planar_uvs(&mut mesh);
    FloorMesh { mesh }
}

/// Indices of outline points with consecutive duplicates and the closing
/// point removed, preserving input order
fn collapse_ring(outline: &[Vec2]) -> Vec<usize> {
    let mut ring: Vec<usize> = Vec::with_capacity(outline.len());
    for (i, p) in outline.iter().enumerate() {
        match ring.last() {
            Some(&prev) if outline[prev].distance_squared(*p) < WELD_EPSILON_SQ => {}
            _ => ring.push(i),
        }
    }
    while ring.len() > 1 {
        let first = outline[ring[0]];
        let last = outline[*ring.last().unwrap()];
        if first.distance_squared(last) < WELD_EPSILON_SQ {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}

/// Assign one UV pair per vertex by mapping plan (x, y) into [0,1] via the
/// mesh's own axis-aligned bounding box.
///
/// The bounding box is read from the position triples by stride: offset 0
/// for X, offset 1 for Y. An axis with no extent maps to 0.5 on that axis.
pub fn assign_planar_uvs(mesh: &mut MeshData) {
    if mesh.vertices.is_empty() {
        return;
    }

    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for v in &mesh.vertices {
        min_x = min_x.min(v.pos.x);
        max_x = max_x.max(v.pos.x);
        min_y = min_y.min(v.pos.y);
        max_y = max_y.max(v.pos.y);
    }

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;

    for v in &mut mesh.vertices {
        let u = if span_x > 0.0 {
            (v.pos.x - min_x) / span_x
        } else {
            0.5
        };
        let vv = if span_y > 0.0 {
            (v.pos.y - min_y) / span_y
        } else {
            0.5
        };
        v.uv = vec2(u, vv);
    }
}
