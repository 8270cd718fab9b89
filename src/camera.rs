//! Orbit camera
//!
//! Azimuth/elevation/distance around a target point, with a damped view
//! pose that trails the input pose. Input handling reads the pointer
//! directly; everything else is pure so the camera is testable headless.

use macroquad::input::{
    is_key_down, is_mouse_button_down, mouse_position, mouse_wheel, KeyCode, MouseButton,
};
use macroquad::camera::Camera3D;
use macroquad::math::{vec3, Vec3};

const ROTATE_SENSITIVITY: f32 = 0.005;
const ELEVATION_LIMIT: f32 = 1.4;
const DISTANCE_MIN: f32 = 100.0;
const DISTANCE_MAX: f32 = 20000.0;
/// Exponential smoothing rate for the damped view pose
const DAMPING_RATE: f32 = 8.0;
const SNAP_EPSILON: f32 = 1e-3;

/// One orbit pose: where the camera looks from, as orbit parameters
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitPose {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    elevation: f32,
}

impl OrbitPose {
    /// Unit vector from camera toward target
    fn forward(&self) -> Vec3 {
        let (sin_p, cos_p) = self.elevation.sin_cos();
        let (sin_y, cos_y) = self.azimuth.sin_cos();
        vec3(cos_p * sin_y, -sin_p, cos_p * cos_y)
    }

    fn position(&self) -> Vec3 {
        self.target - self.forward() * self.distance
    }
}

/// Interactive orbit camera with damped presentation pose
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Pose the user is steering toward
    goal: OrbitPose,
    /// Pose actually presented, trailing the goal
    view: OrbitPose,
    last_mouse: Option<(f32, f32)>,
}

impl OrbitCamera {
    /// Recover orbit parameters from an explicit camera position and target
    pub fn from_pose(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::MIN_POSITIVE);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        // forward = (target - position) / distance
        let azimuth = (-offset.x).atan2(-offset.z);
        let pose = OrbitPose {
            target,
            distance,
            azimuth,
            elevation,
        };
        Self {
            goal: pose,
            view: pose,
            last_mouse: None,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.goal.target
    }

    pub fn distance(&self) -> f32 {
        self.goal.distance
    }

    pub fn azimuth(&self) -> f32 {
        self.goal.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.goal.elevation
    }

    /// Camera position implied by the goal pose
    pub fn position(&self) -> Vec3 {
        self.goal.position()
    }

    /// Rotate around the target
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal.azimuth += dx * ROTATE_SENSITIVITY;
        self.goal.elevation = (self.goal.elevation + dy * ROTATE_SENSITIVITY)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Pan the target along the camera basis
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = self.goal.forward();
        let right = vec3(self.goal.azimuth.cos(), 0.0, -self.goal.azimuth.sin());
        let up = forward.cross(right);
        let pan_speed = self.goal.distance * 0.002;
        self.goal.target -= right * dx * pan_speed;
        self.goal.target += up * dy * pan_speed;
    }

    /// Scale the orbit distance (wheel zoom)
    pub fn zoom(&mut self, factor: f32) {
        self.goal.distance = (self.goal.distance * factor).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Consume this frame's pointer input: left-drag rotates, right-drag or
    /// shift+left-drag pans, wheel zooms.
    pub fn handle_input(&mut self) {
        let mouse = mouse_position();
        let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
        let left = is_mouse_button_down(MouseButton::Left);
        let right = is_mouse_button_down(MouseButton::Right);

        if left || right {
            if let Some(last) = self.last_mouse {
                let dx = mouse.0 - last.0;
                let dy = mouse.1 - last.1;
                if right || shift {
                    self.pan(dx, dy);
                } else {
                    self.rotate(dx, dy);
                }
            }
            self.last_mouse = Some(mouse);
        } else {
            self.last_mouse = None;
        }

        let (_, scroll) = mouse_wheel();
        if scroll != 0.0 {
            self.zoom(if scroll > 0.0 { 0.9 } else { 1.1 });
        }
    }

    /// Advance the damped view pose toward the goal. Once it arrives it
    /// snaps and stays put, so ticks without input do not drift.
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - (-DAMPING_RATE * dt.max(0.0)).exp();
        self.view.azimuth = approach(self.view.azimuth, self.goal.azimuth, t);
        self.view.elevation = approach(self.view.elevation, self.goal.elevation, t);
        self.view.distance = approach(self.view.distance, self.goal.distance, t);
        self.view.target.x = approach(self.view.target.x, self.goal.target.x, t);
        self.view.target.y = approach(self.view.target.y, self.goal.target.y, t);
        self.view.target.z = approach(self.view.target.z, self.goal.target.z, t);
    }

    /// The presented pose as a library camera
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.view.position(),
            target: self.view.target,
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }

    /// Presented camera position (damped)
    pub fn view_position(&self) -> Vec3 {
        self.view.position()
    }
}

fn approach(current: f32, goal: f32, t: f32) -> f32 {
    let next = current + (goal - current) * t;
    if (goal - next).abs() < SNAP_EPSILON {
        goal
    } else {
        next
    }
}
