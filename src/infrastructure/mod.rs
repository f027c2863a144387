//! Hardware side of the device: ESP32 drivers and the embassy tasks that
//! drive them.

pub mod drivers;
pub mod tasks;
pub mod types;
