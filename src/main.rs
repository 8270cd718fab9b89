//! PLANVIEW: extruded 3D viewer for 2D floor plans
//!
//! Walls are boxes extruded from plan segments, the floor is the segment
//! polygon triangulated and textured by planar UV projection, and an orbit
//! camera circles the result. One-shot geometry construction, then an
//! unbounded presentation loop.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod camera;
mod geometry;
mod plan;
mod render;
mod scene;

use macroquad::prelude::*;

use render::{Presenter, RealClock, RenderLoop};
use scene::{build_scene, draw_scene, load_floor_texture, upload_scene, SceneContext, SceneMeshes};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("planview v{}", VERSION),
        window_width: 1200,
        window_height: 1000,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Submits the uploaded meshes from the scene's damped camera pose
struct ScreenPresenter {
    meshes: SceneMeshes,
}

impl Presenter for ScreenPresenter {
    fn present(&mut self, scene: &SceneContext) {
        draw_scene(&self.meshes, &scene.camera.to_camera3d());
    }
}

/// Plan named by the single optional argument, else the built-in square
/// room. A broken plan file falls back rather than aborting.
fn startup_plan() -> plan::Plan {
    match std::env::args().nth(1) {
        Some(path) => match plan::load_plan(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("failed to load plan {}: {}", path, e);
                plan::square_room()
            }
        },
        None => plan::square_room(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let plan = startup_plan();
    let mut ctx = build_scene(&plan);

    let texture_path = plan
        .floor_texture
        .as_deref()
        .unwrap_or(scene::DEFAULT_FLOOR_TEXTURE);
    let texture = load_floor_texture(texture_path);

    let mut presenter = ScreenPresenter {
        meshes: upload_scene(&ctx, Some(texture)),
    };
    let mut frame_loop = RenderLoop::new(RealClock);

    loop {
        ctx.camera.handle_input();
        frame_loop.tick(&mut ctx, &mut presenter);
        next_frame().await;
    }
}
