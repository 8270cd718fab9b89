//! Scene assembly
//!
//! Composes walls, floor, and camera into one context. `build_scene` is
//! pure plan-to-data; `upload_scene` converts to library meshes and is the
//! only step that touches a texture handle.

mod texture;

pub use texture::{checkerboard_pixels, load_floor_texture};

use macroquad::camera::{set_camera, set_default_camera, Camera3D};
use macroquad::color::{BLACK, WHITE};
use macroquad::math::{vec3, Vec3};
use macroquad::models::{draw_mesh, Mesh};
use macroquad::texture::Texture2D;
use macroquad::window::clear_background;

use crate::camera::OrbitCamera;
use crate::geometry::{build_floor, build_walls, FloorMesh, MeshData, WallBox};
use crate::plan::Plan;

/// Hand-tuned framing of the sample plans; not derived from input bounds
pub const CAMERA_POSITION: Vec3 = Vec3::new(500.0, 500.0, 2000.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(500.0, 0.0, 500.0);

/// Floor offset below the wall base plane, avoids coplanar flicker
pub const FLOOR_DROP: f32 = -1.4;

/// Default floor texture path when the plan names none
pub const DEFAULT_FLOOR_TEXTURE: &str = "assets/textures/wood.jpg";

/// Everything the render loop needs, built once at startup.
///
/// The camera pose is the only part that mutates after construction.
pub struct SceneContext {
    pub walls: Vec<WallBox>,
    pub floor: FloorMesh,
    pub camera: OrbitCamera,
}

/// Build the full scene from a plan
pub fn build_scene(plan: &Plan) -> SceneContext {
    let (walls, outline) = build_walls(plan);
    let floor = build_floor(&outline);
    SceneContext {
        walls,
        floor,
        camera: OrbitCamera::from_pose(CAMERA_POSITION, CAMERA_TARGET),
    }
}

/// Library meshes ready for per-frame submission
pub struct SceneMeshes {
    pub walls: Vec<Mesh>,
    pub floor: Mesh,
}

/// Convert scene geometry to library meshes. Walls are untextured white;
/// the floor carries the given texture.
pub fn upload_scene(ctx: &SceneContext, floor_texture: Option<Texture2D>) -> SceneMeshes {
    SceneMeshes {
        walls: ctx
            .walls
            .iter()
            .map(|w| w.mesh.to_mesh(None, WHITE))
            .collect(),
        floor: floor_world_mesh(&ctx.floor).to_mesh(floor_texture, WHITE),
    }
}

/// Map the plan-space floor into the world: (x, y, 0) -> (x, FLOOR_DROP, y)
fn floor_world_mesh(floor: &FloorMesh) -> MeshData {
    let mut mesh = floor.mesh.clone();
    for v in &mut mesh.vertices {
        v.pos = vec3(v.pos.x, FLOOR_DROP, v.pos.y);
        v.normal = vec3(0.0, 1.0, 0.0);
    }
    mesh
}

/// Present one frame of the scene from the given camera
pub fn draw_scene(meshes: &SceneMeshes, camera: &Camera3D) {
    clear_background(BLACK);
    set_camera(camera);
    for wall in &meshes.walls {
        draw_mesh(wall);
    }
    draw_mesh(&meshes.floor);
    set_default_camera();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::square_room;

    #[test]
    fn test_build_scene_square_room() {
        let ctx = build_scene(&square_room());
        assert_eq!(ctx.walls.len(), 4);
        assert_eq!(ctx.floor.mesh.vertices.len(), 8);

        let pos = ctx.camera.position();
        assert!((pos - CAMERA_POSITION).length() < 0.5);
    }

    #[test]
    fn test_floor_world_mapping() {
        let ctx = build_scene(&square_room());
        let world = floor_world_mesh(&ctx.floor);
        for (plan_v, world_v) in ctx.floor.mesh.vertices.iter().zip(&world.vertices) {
            assert!((world_v.pos.x - plan_v.pos.x).abs() < 0.001);
            assert!((world_v.pos.y - FLOOR_DROP).abs() < 0.001);
            assert!((world_v.pos.z - plan_v.pos.y).abs() < 0.001);
            // UVs ride along unchanged
            assert_eq!(world_v.uv, plan_v.uv);
        }
    }

    #[test]
    fn test_upload_scene_headless() {
        let ctx = build_scene(&square_room());
        let meshes = upload_scene(&ctx, None);
        assert_eq!(meshes.walls.len(), 4);
        assert_eq!(meshes.walls[0].vertices.len(), 24);
        assert_eq!(meshes.floor.vertices.len(), 8);
        assert!(meshes.floor.texture.is_none());
    }
}
