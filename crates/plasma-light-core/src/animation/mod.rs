//! Animation engine
//!
//! An endless dispatch loop over [`Mode`]. Each iteration reads the control
//! state, runs the matching routine and returns once the routine notices the
//! mode has changed. Routines poll the mode only between frames, after the
//! frame's sleep has elapsed, so a switch takes effect within one frame
//! interval of the running routine. Routine state (hues, offsets, direction)
//! is created on entry and dropped on exit.

mod blinky;
mod fire;
mod idle;
mod off;
mod rainbows;
mod spooky;

pub use blinky::BlinkyState;
pub use rainbows::RainbowState;
pub use spooky::SpookyState;

use embedded_hal::digital::OutputPin;

use crate::{
    config::AnimationConfig,
    driver::PixelSink,
    mode::Mode,
    random::RandomSource,
    state::ControlState,
};

/// Renders the current mode onto a pixel sink.
///
/// `indicator` is the onboard status LED used by the `Off` heartbeat.
pub struct AnimationEngine<'a, S, L, R> {
    state: &'a ControlState,
    sink: S,
    indicator: L,
    rng: R,
    config: AnimationConfig,
}

impl<'a, S, L, R> AnimationEngine<'a, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    pub fn new(
        state: &'a ControlState,
        sink: S,
        indicator: L,
        rng: R,
        config: AnimationConfig,
    ) -> Self {
        Self {
            state,
            sink,
            indicator,
            rng,
            config,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Run the dispatch loop forever.
    pub async fn run(&mut self) {
        loop {
            self.step().await;
        }
    }

    /// Run one dispatch: the routine for the current mode, until it yields.
    ///
    /// Returns the mode that was dispatched.
    pub async fn step(&mut self) -> Mode {
        let mode = self.state.mode();
        match mode {
            Mode::Off => self.play_off().await,
            Mode::Blinky => self.play_blinky().await,
            Mode::Fire => self.play_fire().await,
            Mode::Rainbows => self.play_rainbows().await,
            Mode::Spooky => self.play_spooky().await,
            Mode::Unknown => self.idle().await,
        }
        mode
    }

    fn is_active(&self, mode: Mode) -> bool {
        self.state.mode() == mode
    }
}
