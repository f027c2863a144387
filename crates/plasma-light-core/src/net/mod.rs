//! Network bootstrap helpers that do not depend on the radio.

pub mod dhcp;
mod known;

pub use known::{WifiCredentials, select_known_network};
