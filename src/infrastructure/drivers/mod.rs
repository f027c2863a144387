mod indicator;
mod led_ws2812;
mod network;
mod random;

pub use indicator::boot_blink;
pub use led_ws2812::EspLedDriver;
pub use network::{NetworkError, bootstrap_network};
pub use random::EspRandom;
pub(crate) use random::get_seed;
