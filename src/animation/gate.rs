use crate::animation::{engine::Animation, scheduler::FrameScheduler};

/// Outcome of feeding one scroll position to a [`ScrollGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateChange {
    Paused,
    Resumed,
    Unchanged,
}

/// Pauses the animation once the page scrolls past `threshold_px` and resumes it when the
/// page scrolls back. Only transitions reach the animation.
#[derive(Clone, Copy, Debug)]
pub struct ScrollGate {
    threshold_px: f64,
    paused: bool,
}

impl ScrollGate {
    pub const DEFAULT_THRESHOLD_PX: f64 = 500.0;

    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn on_scroll<S: FrameScheduler>(
        &mut self,
        scroll_y: f64,
        anim: &mut Animation<S>,
        now_ms: f64,
    ) -> GateChange {
        let should_pause = scroll_y > self.threshold_px;
        match (should_pause, self.paused) {
            (true, false) => {
                self.paused = true;
                anim.stop();
                GateChange::Paused
            }
            (false, true) => {
                self.paused = false;
                anim.start(now_ms);
                GateChange::Resumed
            }
            _ => GateChange::Unchanged,
        }
    }
}

impl Default for ScrollGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD_PX)
    }
}
