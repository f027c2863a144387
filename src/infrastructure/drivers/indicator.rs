use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;

/// Short power-on blink on the status LED, left lit afterwards.
pub async fn boot_blink<P: OutputPin>(pin: &mut P) {
    let _ = pin.set_high();
    Timer::after(Duration::from_millis(100)).await;
    let _ = pin.set_low();
    Timer::after(Duration::from_millis(500)).await;
    let _ = pin.set_high();
}
