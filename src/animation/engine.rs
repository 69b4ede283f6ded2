use crate::{
    animation::{
        clock::Clock,
        light::Light,
        particle::Particle,
        scheduler::{FrameHandle, FrameScheduler, ManualScheduler},
    },
    foundation::{
        core::{Color, Point, Viewport},
        error::FolioResult,
    },
    render::{
        frame::FrameRGBA,
        raster::{fill_disc, fill_radial_fade},
        surface::Surface,
    },
    scene::config::SceneConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimState {
    Stopped,
    Running,
}

/// The background animation: owns its lights, particles, surface and the pending frame.
///
/// `start`/`stop` are idempotent. While running exactly one frame is pending with the
/// scheduler; each frame callback repaints and requests the next one, so the loop only ends
/// through [`Animation::stop`].
pub struct Animation<S: FrameScheduler> {
    lights: Vec<Light>,
    particles: Vec<Particle>,
    particle_color: Color,
    background: Option<Color>,
    surface: Surface,
    scheduler: S,
    state: AnimState,
    pending: Option<FrameHandle>,
    last_time_ms: f64,
    frames_painted: u64,
}

impl<S: FrameScheduler> Animation<S> {
    pub fn new(scene: &SceneConfig, viewport: Viewport, scheduler: S) -> FolioResult<Self> {
        scene.validate()?;
        let particles = scene.particles.spawn(scene.seed);
        tracing::debug!(
            lights = scene.lights.len(),
            particles = particles.len(),
            width = viewport.css_width,
            height = viewport.css_height,
            "animation created"
        );
        Ok(Self {
            lights: scene.lights.clone(),
            particles,
            particle_color: scene.particles.color,
            background: scene.clear,
            surface: Surface::new(viewport)?,
            scheduler,
            state: AnimState::Stopped,
            pending: None,
            last_time_ms: 0.0,
            frames_painted: 0,
        })
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimState::Running
    }

    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    pub fn snapshot(&self) -> FrameRGBA {
        self.surface.snapshot()
    }

    /// Begin the frame loop. No-op while already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.is_running() {
            return;
        }
        self.state = AnimState::Running;
        self.last_time_ms = now_ms;
        self.pending = Some(self.scheduler.request_frame());
        tracing::debug!(now_ms, "animation started");
    }

    /// Cancel the pending frame and halt. No-op while already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.is_running() {
            tracing::debug!(frames = self.frames_painted, "animation stopped");
        }
        self.state = AnimState::Stopped;
    }

    /// Track a new viewport size. The next paint uses it.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        self.surface.resize(viewport)?;
        tracing::debug!(
            width = self.surface.width(),
            height = self.surface.height(),
            "surface resized"
        );
        Ok(())
    }

    /// Frame callback for `handle` at `time_ms`.
    ///
    /// Returns `false` without painting when stopped or when `handle` is not the pending
    /// frame (a stale callback delivered after a stop/start).
    pub fn on_frame(&mut self, handle: FrameHandle, time_ms: f64) -> bool {
        if !self.is_running() || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        let dt = (time_ms - self.last_time_ms).max(0.0);
        self.last_time_ms = time_ms;
        self.advance_frame(time_ms, dt);

        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Move particles by `dt_ms` and repaint the surface for `time_ms`.
    pub fn advance_frame(&mut self, time_ms: f64, dt_ms: f64) {
        for p in &mut self.particles {
            p.advance(dt_ms);
        }
        self.paint(time_ms);
    }

    /// Clear and redraw the whole surface for `time_ms` without moving particles.
    pub fn paint(&mut self, time_ms: f64) {
        let viewport = self.surface.viewport();
        let dpr = viewport.device_pixel_ratio;
        let to_device = |p: Point| Point::new(p.x * dpr, p.y * dpr);

        self.surface.begin_frame(self.background);

        for light in &self.lights {
            for g in light.place(time_ms, viewport) {
                fill_radial_fade(
                    &mut self.surface,
                    to_device(g.center),
                    g.fade_radius * dpr,
                    g.color,
                    light.opacity,
                );
            }
        }

        for p in &self.particles {
            let opacity = p.opacity_at(time_ms);
            if opacity <= 0.0 {
                continue;
            }
            fill_disc(
                &mut self.surface,
                to_device(viewport.to_css(p.position)),
                p.size_px * dpr,
                self.particle_color,
                opacity,
            );
        }
        self.surface.end_frame();

        self.frames_painted += 1;
    }
}

/// What a frame-loop observer wants after each painted frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Drive the frame loop of `anim` until nothing is pending.
///
/// Each due frame is delivered at `clock.now_ms()`; `on_painted` sees the animation after
/// every painted frame together with the 1-based frame count and may stop the loop. Returns
/// the number of frames painted.
pub fn run_frames<C, F>(
    anim: &mut Animation<ManualScheduler>,
    clock: &C,
    mut on_painted: F,
) -> FolioResult<u64>
where
    C: Clock,
    F: FnMut(&mut Animation<ManualScheduler>, u64) -> FolioResult<LoopControl>,
{
    let mut painted = 0u64;
    while let Some(handle) = anim.scheduler_mut().take_due() {
        if !anim.on_frame(handle, clock.now_ms()) {
            continue;
        }
        painted += 1;
        if on_painted(anim, painted)? == LoopControl::Stop {
            anim.stop();
        }
    }
    Ok(painted)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
