//! Wall extrusion
//!
//! Turns each plan segment into a world-space box mesh: length along the
//! segment, `wall_height` tall, `wall_thickness` deep, centered on the
//! segment midpoint and resting on the ground plane.

use macroquad::math::{vec2, vec3, Vec2, Vec3};

use crate::plan::{Plan, WallSegment};

use super::{MeshData, MeshVertex};

/// A wall segment extruded into a box
#[derive(Debug, Clone)]
pub struct WallBox {
    pub length: f32,
    pub yaw: f32,
    pub center: Vec3,
    /// World-space box mesh
    pub mesh: MeshData,
}

/// Build all walls plus the flattened floor outline.
///
/// Both endpoints of every segment are appended to the outline in input
/// order; shared corners between adjacent walls are double-inserted.
pub fn build_walls(plan: &Plan) -> (Vec<WallBox>, Vec<Vec2>) {
    let mut outline = Vec::with_capacity(plan.segments.len() * 2);
    let walls = plan
        .segments
        .iter()
        .map(|seg| {
            outline.push(seg.start());
            outline.push(seg.end());
            build_wall(seg, plan.wall_height, plan.wall_thickness)
        })
        .collect();
    (walls, outline)
}

/// Extrude a single segment
pub fn build_wall(seg: &WallSegment, height: f32, thickness: f32) -> WallBox {
    let length = seg.length();
    let yaw = seg.yaw();
    let mid = seg.midpoint();
    let center = vec3(mid.x, height * 0.5, mid.y);

    let mut mesh = box_mesh(length, height, thickness);
    mesh.rotate_y_translate(yaw, center);

    WallBox {
        length,
        yaw,
        center,
        mesh,
    }
}

fn quad_corner(pos: Vec3, uv: Vec2, normal: Vec3) -> MeshVertex {
    MeshVertex { pos, uv, normal }
}

/// Axis-aligned box centered at the origin: 6 quads, 24 vertices.
/// Zero extents are legal; the quads just collapse.
fn box_mesh(length: f32, height: f32, thickness: f32) -> MeshData {
    let hx = length * 0.5;
    let hy = height * 0.5;
    let hz = thickness * 0.5;

    // Per-face UVs: bottom-left, bottom-right, top-right, top-left
    let uvs = [vec2(0.0, 1.0), vec2(1.0, 1.0), vec2(1.0, 0.0), vec2(0.0, 0.0)];

    let mut mesh = MeshData::new();

    // +Z and -Z long faces
    let n = vec3(0.0, 0.0, 1.0);
    mesh.push_quad([
        quad_corner(vec3(-hx, -hy, hz), uvs[0], n),
        quad_corner(vec3(hx, -hy, hz), uvs[1], n),
        quad_corner(vec3(hx, hy, hz), uvs[2], n),
        quad_corner(vec3(-hx, hy, hz), uvs[3], n),
    ]);
    let n = vec3(0.0, 0.0, -1.0);
    mesh.push_quad([
        quad_corner(vec3(hx, -hy, -hz), uvs[0], n),
        quad_corner(vec3(-hx, -hy, -hz), uvs[1], n),
        quad_corner(vec3(-hx, hy, -hz), uvs[2], n),
        quad_corner(vec3(hx, hy, -hz), uvs[3], n),
    ]);

    // +X and -X end caps
    let n = vec3(1.0, 0.0, 0.0);
    mesh.push_quad([
        quad_corner(vec3(hx, -hy, hz), uvs[0], n),
        quad_corner(vec3(hx, -hy, -hz), uvs[1], n),
        quad_corner(vec3(hx, hy, -hz), uvs[2], n),
        quad_corner(vec3(hx, hy, hz), uvs[3], n),
    ]);
    let n = vec3(-1.0, 0.0, 0.0);
    mesh.push_quad([
        quad_corner(vec3(-hx, -hy, -hz), uvs[0], n),
        quad_corner(vec3(-hx, -hy, hz), uvs[1], n),
        quad_corner(vec3(-hx, hy, hz), uvs[2], n),
        quad_corner(vec3(-hx, hy, -hz), uvs[3], n),
    ]);

    // Top and bottom
    let n = vec3(0.0, 1.0, 0.0);
    mesh.push_quad([
        quad_corner(vec3(-hx, hy, hz), uvs[0], n),
        quad_corner(vec3(hx, hy, hz), uvs[1], n),
        quad_corner(vec3(hx, hy, -hz), uvs[2], n),
        quad_corner(vec3(-hx, hy, -hz), uvs[3], n),
    ]);
    let n = vec3(0.0, -1.0, 0.0);
    mesh.push_quad([
        quad_corner(vec3(-hx, -hy, -hz), uvs[0], n),
        quad_corner(vec3(hx, -hy, -hz), uvs[1], n),
        quad_corner(vec3(hx, -hy, hz), uvs[2], n),
        quad_corner(vec3(-hx, -hy, hz), uvs[3], n),
    ]);

    mesh
}
