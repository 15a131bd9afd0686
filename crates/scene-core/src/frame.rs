//! Frame-loop plumbing that does not depend on the host scheduler.

use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::controller::SceneController;
use crate::error::SceneError;
use crate::renderer::Renderer;
use instant::{Duration, Instant};
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a running loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, PartialEq)]
pub enum FrameOutcome {
    /// The loop was stopped; nothing was scheduled or drawn.
    Cancelled,
    Drawn,
    /// The draw call failed. The next frame is already scheduled.
    Failed(SceneError),
}

/// Run one loop iteration: schedule the next one, update the scene, draw.
pub fn run_frame<R: Renderer>(
    token: &CancelToken,
    controller: &mut SceneController<R>,
    schedule_next: impl FnOnce(),
) -> FrameOutcome {
    if token.is_cancelled() {
        return FrameOutcome::Cancelled;
    }
    schedule_next();
    match controller.frame() {
        Ok(()) => FrameOutcome::Drawn,
        Err(e) => FrameOutcome::Failed(e),
    }
}

/// Counts frames and yields an average rate once per interval.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    interval: Duration,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self::with_interval(now, Duration::from_secs_f32(FRAME_STATS_INTERVAL_SEC))
    }

    pub fn with_interval(now: Instant, interval: Duration) -> Self {
        Self {
            window_start: now,
            frames: 0,
            interval,
        }
    }

    /// Count a frame at `now`; returns frames per second when an interval
    /// has elapsed, then starts a new window.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = if now > self.window_start {
            now - self.window_start
        } else {
            Duration::ZERO
        };
        if elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}
