use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{driver::PixelSink, random::RandomSource};

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    /// Unrecognized mode: leave the strip alone and wait before polling again.
    pub(super) async fn idle(&mut self) {
        info!("animation: unknown mode '{}'", self.state.get().as_str());
        Timer::after(self.config.idle_interval).await;
    }
}
