use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{
    color::{Hsv, wrap_hue},
    driver::PixelSink,
    mode::Mode,
    random::RandomSource,
};

/// Scrolling rainbow gradient.
///
/// The phase offset is kept reduced to `0.0..1.0`; hue is periodic so the
/// rendered colours are the same as with an ever growing offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowState {
    offset: f32,
    step: f32,
}

impl RainbowState {
    pub fn new(speed: f32) -> Self {
        Self {
            offset: 0.0,
            step: speed / 2000.0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Move the gradient one tick forward.
    pub fn advance(&mut self) {
        self.offset = wrap_hue(self.offset + self.step);
    }

    /// Hue of pixel `index` on a strip of `len` pixels.
    #[allow(clippy::cast_precision_loss)]
    pub fn hue(&self, index: usize, len: usize) -> f32 {
        if len == 0 {
            return self.offset;
        }
        wrap_hue(index as f32 / len as f32 + self.offset)
    }
}

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    pub(super) async fn play_rainbows(&mut self) {
        info!("animation: rainbows");
        let config = self.config.rainbows;
        let interval = Duration::from_hz(config.updates_per_second.max(1));
        let len = self.sink.len();

        let mut rainbow = RainbowState::new(config.speed);
        while self.is_active(Mode::Rainbows) {
            rainbow.advance();
            for i in 0..len {
                let hue = rainbow.hue(i, len);
                self.sink.set_hsv(i, Hsv::new(hue, 1.0, config.brightness));
            }
            self.sink.show();
            Timer::after(interval).await;
        }
    }
}
