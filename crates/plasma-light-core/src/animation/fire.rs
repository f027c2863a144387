use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{color::Hsv, driver::PixelSink, mode::Mode, random::RandomSource};

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    /// Every pixel gets a fresh red-orange hue and brightness each frame.
    pub(super) async fn play_fire(&mut self) {
        info!("animation: fire");
        let config = self.config.fire;

        while self.is_active(Mode::Fire) {
            for i in 0..self.sink.len() {
                let hue = self.rng.uniform(0.0, config.max_hue);
                let value = self.rng.next_f32();
                self.sink.set_hsv(i, Hsv::from_degrees(hue, 1.0, value));
            }
            self.sink.show();
            Timer::after(config.interval).await;
        }
    }
}
