//! Frame driver
//!
//! One call to [`Game::frame`] per display refresh: read the clock, poll
//! input, tick the simulation. Rendering and HUD then read the state.

use crate::platform::{FrameClock, InputProvider, InputSampler};
use crate::renderer::{DrawInstruction, SpriteAtlas, SpriteInstance, build_instances, draw_list};
use crate::settings::Settings;
use crate::sim::{GameState, tick};
use crate::ui::{self, StatusSink};

/// Game instance holding all per-session state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    clock: FrameClock,
    sampler: InputSampler,
    atlas: SpriteAtlas,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let clock = FrameClock::new(settings.max_frame_dt);
        Self {
            state: GameState::with_settings(seed, settings),
            clock,
            sampler: InputSampler::new(),
            atlas: SpriteAtlas::breakout(),
        }
    }

    /// Read-only view for renderers and tests
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame at host time `now_ms`
    ///
    /// Returns true if the simulation advanced. Degenerate frames still
    /// apply a pause toggle but simulate nothing.
    pub fn frame(&mut self, now_ms: f64, input: &impl InputProvider) -> bool {
        let tick_input = self.sampler.sample(input);
        let frames_before = self.state.frames;

        // dt of 0 is rejected inside tick
        let dt = self.clock.advance(now_ms).unwrap_or(0.0);
        tick(&mut self.state, &tick_input, dt);

        self.state.frames != frames_before
    }

    /// This frame's draw list
    pub fn draw_list(&self) -> Vec<DrawInstruction> {
        draw_list(&self.state)
    }

    /// This frame's sprites, packed for upload
    pub fn sprite_instances(&self) -> Vec<SpriteInstance> {
        build_instances(&self.draw_list(), &self.atlas)
    }

    pub fn publish_status(&self, sink: &mut impl StatusSink) {
        ui::publish(&self.state, sink);
    }

    /// Throw away the current session and start a fresh one
    pub fn restart(&mut self, seed: u64) {
        let settings = self.state.settings.clone();
        self.state = GameState::with_settings(seed, settings);
        self.clock.reset();
        self.sampler = InputSampler::new();
        log::info!("Game restarted with seed {}", seed);
    }
}
