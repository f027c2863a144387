//! Compile-time device configuration.
//!
//! Wi-Fi credentials come from the `WIFI_SSID` / `WIFI_PASSWORD` environment
//! variables at build time. Without them no network is known and the device
//! always starts its own access point.

use embassy_net::Ipv4Address;
use embassy_time::Duration;
use plasma_light_core::{AnimationConfig, net::WifiCredentials};

/// Read a build-time environment variable, empty when unset.
macro_rules! build_env {
    ($name:literal) => {
        match option_env!($name) {
            Some(value) => value,
            None => "",
        }
    };
}

pub struct AccessPointConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub address: Ipv4Address,
    pub prefix_len: u8,
}

/// Number of pixels on the strip.
pub const LED_COUNT: usize = 50;

pub const HOSTNAME: &str = "plasma-light";

/// Networks to look for, in order of preference.
pub const KNOWN_NETWORKS: &[WifiCredentials] = &[WifiCredentials {
    ssid: build_env!("WIFI_SSID"),
    password: build_env!("WIFI_PASSWORD"),
}];

pub const STATION_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback access point started when no known network is visible.
pub const ACCESS_POINT: AccessPointConfig = AccessPointConfig {
    ssid: "Skull-AP",
    password: "12345678",
    address: Ipv4Address::new(192, 168, 4, 1),
    prefix_len: 24,
};

pub const HTTP_PORT: u16 = 80;
/// Connections served in parallel. Keep in sync with the task pool size.
pub const HTTP_WORKERS: usize = 2;
pub const HTTP_RX_BUFFER_SIZE: usize = 1024;
pub const HTTP_TX_BUFFER_SIZE: usize = 2048;

pub const ANIMATION: AnimationConfig = AnimationConfig::DEFAULT;

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

#[macro_export]
macro_rules! indicator_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}
