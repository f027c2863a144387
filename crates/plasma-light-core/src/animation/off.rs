use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{color::BLACK, driver::PixelSink, mode::Mode, random::RandomSource};

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    /// Blank the strip once, then blink the status indicator.
    pub(super) async fn play_off(&mut self) {
        info!("animation: off");
        for i in 0..self.sink.len() {
            self.sink.set_rgb(i, BLACK);
        }
        self.sink.show();

        let config = self.config.off;
        while self.is_active(Mode::Off) {
            // Indicator errors are ignored
            let _ = self.indicator.set_high();
            Timer::after(config.indicator_on).await;
            let _ = self.indicator.set_low();
            Timer::after(config.indicator_off).await;
        }
    }
}
