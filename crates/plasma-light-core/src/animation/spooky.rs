use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use log::info;

use super::AnimationEngine;
use crate::{color::Hsv, driver::PixelSink, mode::Mode, random::RandomSource};

/// Comet that bounces between the two ends of the strip.
///
/// Intensity is a tent of half-width `len / 3` centred at `distance`. The
/// direction flips once `distance` has left `0.0..=len`, so `distance` never
/// goes further than one step outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpookyState {
    distance: f32,
    direction: f32,
    speed: f32,
}

impl SpookyState {
    pub fn new(speed: f32) -> Self {
        Self {
            distance: 0.0,
            direction: speed,
            speed,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Comet intensity in `0.0..=1.0` at pixel `index`.
    #[allow(clippy::cast_precision_loss)]
    pub fn intensity(&self, index: usize, len: usize) -> f32 {
        let half_width = len as f32 / 3.0;
        if half_width <= 0.0 {
            return 0.0;
        }
        let offset = libm::fabsf(self.distance - index as f32);
        (1.0 - offset / half_width).max(0.0)
    }

    /// Move one step and bounce at the strip ends.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, len: usize) {
        self.distance += self.direction;
        if self.distance > len as f32 {
            self.direction = -self.speed;
        }
        if self.distance < 0.0 {
            self.direction = self.speed;
        }
    }
}

impl<S, L, R> AnimationEngine<'_, S, L, R>
where
    S: PixelSink,
    L: OutputPin,
    R: RandomSource,
{
    pub(super) async fn play_spooky(&mut self) {
        info!("animation: spooky");
        let config = self.config.spooky;
        let len = self.sink.len();

        let mut comet = SpookyState::new(config.speed);
        while self.is_active(Mode::Spooky) {
            for i in 0..len {
                let intensity = comet.intensity(i, len);
                let hue = config.hue_start + intensity * (config.hue_end - config.hue_start);
                self.sink
                    .set_hsv(i, Hsv::from_degrees(hue, 1.0, config.brightness));
            }
            self.sink.show();
            comet.advance(len);
            Timer::after(config.interval).await;
        }
    }
}
