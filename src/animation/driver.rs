//! Start / stop controller of the per-frame animation

use bevy::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Frame loop of one mount
///
/// Bevy runs the schedule every frame no matter what a system does, so the
/// loop cannot break on its own; `stop` is the only way out and is final for
/// this instance. A remount installs a fresh loop.
#[derive(Resource, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    started_at: Duration,
    elapsed_ms: f32,
    frames: u64,
}

impl FrameLoop {
    pub fn running_since(now: Duration) -> Self {
        let mut frame_loop = Self::default();
        frame_loop.start(now);
        frame_loop
    }

    /// Start an idle loop; returns false if it already ran
    pub fn start(&mut self, now: Duration) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        self.started_at = now;
        self.elapsed_ms = 0.0;
        true
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Advance to `now`; returns the elapsed milliseconds since start while running
    ///
    /// Elapsed time counts up from zero (`now - start`), so the globe and
    /// forward satellites turn with positive angles.
    pub fn tick(&mut self, now: Duration) -> Option<f32> {
        if !self.is_running() {
            return None;
        }
        self.elapsed_ms = now.saturating_sub(self.started_at).as_secs_f32() * 1000.0;
        self.frames += 1;
        Some(self.elapsed_ms)
    }

    /// Milliseconds since start as of the last tick
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Run condition: a frame loop exists and has not been stopped
pub fn frame_loop_running(frame_loop: Option<Res<FrameLoop>>) -> bool {
    frame_loop.is_some_and(|frame_loop| frame_loop.is_running())
}
