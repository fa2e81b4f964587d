use log::info;

use crate::codec;
use crate::coefficients::CoefficientVector;
use crate::config::Settings;
use crate::fragment::{initial_coefficients, FragmentStore};
use crate::generator::CoefficientSource;
use crate::hud::Hud;
use crate::simulation::{Frame, Reset, SimulationClock, SimulationState};
use crate::viewport::{Viewport, ViewportManager};

/// Glues the estimator, the renderer and the reset logic into one tick per
/// displayed frame. There is a single running state; the only transition is
/// a reset once the time window is used up.
pub struct AnimationDriver<S: CoefficientSource, F: FragmentStore> {
    state: SimulationState,
    viewport: ViewportManager,
    hud: Hud,
    source: S,
    fragment: F,
    frames: u64,
    last_frame: Option<Frame>,
}

impl<S: CoefficientSource, F: FragmentStore> AnimationDriver<S, F> {
    pub fn new(settings: &Settings, mut source: S, fragment: F, surface: (f32, f32), dpi_scale: f32) -> Self {
        let coefficients = initial_coefficients(&fragment, || source.generate());
        info!("Attractor {}: {}", codec::encode(&coefficients), coefficients);

        let clock = SimulationClock::new(settings.t_start, settings.t_end);
        let state = SimulationState::new(coefficients, clock, settings.bounds, settings.iters, settings.steps);
        let hud = Hud::new(&coefficients, clock.t);

        Self {
            state,
            viewport: ViewportManager::new(surface.0, surface.1, dpi_scale),
            hud,
            source,
            fragment,
            frames: 0,
            last_frame: None,
        }
    }

    /// One frame: pick up any resize, size the time step, render, then move
    /// time forward and reset if the window ran out.
    pub fn tick<R>(&mut self, surface: (f32, f32), dpi_scale: f32, render: R) -> Option<Reset>
    where
        R: FnOnce(&CoefficientVector, &Frame, &Viewport, (f32, f32), f32),
    {
        self.viewport.sync(surface.0, surface.1, dpi_scale);
        let viewport = self.viewport.viewport();

        let frame = self.state.begin_frame(&viewport);
        self.hud.set_time(frame.t);
        render(
            self.state.coefficients(),
            &frame,
            &viewport,
            self.viewport.surface(),
            self.viewport.dpi_scale(),
        );
        self.frames += 1;
        self.last_frame = Some(frame);

        let reset = self.state.end_frame(&frame, &mut self.source)?;
        self.fragment.publish(&reset.code);
        self.hud.set_coefficients(&reset.coefficients);
        Some(reset)
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recently rendered frame, if any.
    pub fn last_frame(&self) -> Option<Frame> {
        self.last_frame
    }
}
