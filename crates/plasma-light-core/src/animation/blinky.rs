use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{color::Hsv, driver::PixelSink, mode::Mode, random::RandomSource};

/// Two-tone strobe: even and odd pixels swap hues every period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkyState {
    first: u16,
    second: u16,
    swapped: bool,
}

impl BlinkyState {
    /// Hues are given in degrees.
    pub const fn new(first: u16, second: u16) -> Self {
        Self {
            first,
            second,
            swapped: false,
        }
    }

    /// Hue in degrees of the pixel at `index` for the current frame.
    pub fn hue(&self, index: usize) -> u16 {
        let even = index % 2 == 0;
        if even != self.swapped {
            self.first
        } else {
            self.second
        }
    }

    /// Swap which half of the strip shows which hue.
    pub fn flip(&mut self) {
        self.swapped = !self.swapped;
    }
}

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    pub(super) async fn play_blinky(&mut self) {
        let config = self.config.blinky;
        let (low, high) = config.lower_hue;
        let first = self.rng.range_inclusive(low, high);
        let (low, high) = config.upper_hue;
        let second = self.rng.range_inclusive(low, high);
        info!("animation: blinky, hues {} and {}", first, second);

        let mut blinky = BlinkyState::new(first, second);
        while self.is_active(Mode::Blinky) {
            for i in 0..self.sink.len() {
                let hue = f32::from(blinky.hue(i));
                self.sink
                    .set_hsv(i, Hsv::from_degrees(hue, 1.0, config.brightness));
            }
            self.sink.show();
            Timer::after(config.period).await;
            blinky.flip();
        }
    }
}
