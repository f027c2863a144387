use esp_hal::gpio::Output;
use plasma_light_core::{AnimationEngine, PixelBuffer};

use crate::{
    config::LED_COUNT,
    infrastructure::drivers::{EspLedDriver, EspRandom},
};

pub type LedStrip = PixelBuffer<EspLedDriver<'static>, LED_COUNT>;

pub type Engine = AnimationEngine<'static, LedStrip, Output<'static>, EspRandom>;
