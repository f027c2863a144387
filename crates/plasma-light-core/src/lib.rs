#![no_std]

//! Hardware independent core of the plasma light firmware.
//!
//! Layers:
//! - `state` - the single shared [`ControlState`] cell holding the current mode
//! - `mode` - mode names and their parsed [`Mode`] form
//! - `http` - request line handling and the status page responder
//! - `animation` - the dispatch loop and per-mode rendering routines
//! - `driver` - pixel sink abstraction over an LED driver
//! - `net` - known network selection and the access point DHCP wire format
//!
//! Everything here is generic over `embedded-hal`/`embedded-io-async` traits,
//! so the same code runs on the device and under host tests.

pub mod animation;
pub mod color;
pub mod config;
pub mod driver;
pub mod http;
pub mod mode;
pub mod net;
pub mod random;
pub mod state;

pub use animation::AnimationEngine;
pub use color::{Hsv, Rgb};
pub use config::AnimationConfig;
pub use driver::{LedDriver, PixelBuffer, PixelSink};
pub use mode::{Mode, ModeName};
pub use random::RandomSource;
pub use state::ControlState;
