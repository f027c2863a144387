use static_cell::make_static;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{
    gpio::interconnect::PeripheralOutput,
    peripherals::RMT,
    rmt::{Error as RmtError, Rmt},
    time::Rate,
};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use log::warn;
use smart_leds::SmartLedsWrite;

use plasma_light_core::{LedDriver, Rgb};

use crate::config::LED_COUNT;

/// WS2812 strip on the RMT peripheral.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LED_COUNT) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a driver on RMT channel 0 with `pin` as the data line.
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Result<Self, RmtError>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80))?;

        let rmt_buffer = make_static!(smart_led_buffer!(LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Ok(Self { adapter })
    }
}

impl LedDriver<LED_COUNT> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[Rgb; LED_COUNT]) {
        // WS2812 timing breaks if an interrupt lands mid-frame
        let result = interrupt::free(|| self.adapter.write(colors.iter().copied()));
        if let Err(e) = result {
            warn!("led: frame write failed: {:?}", e);
        }
    }
}
