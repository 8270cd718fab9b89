//! Frame loop
//!
//! The loop itself is owned by the host (macroquad's frame callback); this
//! module holds the per-tick bookkeeping behind injectable clock and
//! presenter seams so a tick runs without a live surface.

use crate::scene::SceneContext;

/// Monotonic time source in seconds
pub trait FrameClock {
    fn now(&self) -> f64;
}

/// Wall-clock time from the windowing library
pub struct RealClock;

impl FrameClock for RealClock {
    fn now(&self) -> f64 {
        macroquad::time::get_time()
    }
}

/// One presentation target per tick
pub trait Presenter {
    fn present(&mut self, scene: &SceneContext);
}

/// Timing of a single tick
#[derive(Debug, Clone, Copy)]
pub struct FrameTiming {
    /// Seconds since the loop started; recorded each tick, reserved for
    /// future animation
    pub elapsed: f64,
    /// Seconds since the previous tick
    pub delta: f32,
}

/// Per-tick bookkeeping: elapsed time, damped camera update, one present
pub struct RenderLoop<C: FrameClock> {
    clock: C,
    start: f64,
    last: f64,
    frames: u64,
}

impl<C: FrameClock> RenderLoop<C> {
    pub fn new(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            start: now,
            last: now,
            frames: 0,
        }
    }

    /// Run one frame: advance the damped camera, then present exactly once.
    /// Scheduling the next tick is the host's job.
    pub fn tick<P: Presenter>(&mut self, scene: &mut SceneContext, presenter: &mut P) -> FrameTiming {
        let now = self.clock.now();
        let timing = FrameTiming {
            elapsed: now - self.start,
            delta: (now - self.last) as f32,
        };
        self.last = now;

        scene.camera.update(timing.delta);
        presenter.present(scene);
        self.frames += 1;
        timing
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
