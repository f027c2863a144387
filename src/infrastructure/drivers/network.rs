//! Network bootstrap.
//!
//! Scan in station mode and join the first known network that is visible.
//! When none is visible, start a WPA2 access point with a fixed address and
//! a small DHCP server. Every failure along the way is returned to the
//! caller; there is no retry.

use embassy_executor::{SpawnError, Spawner};
use embassy_net::{DhcpConfig, Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer, with_timeout};
use esp_hal::peripherals::WIFI;
use esp_radio::{
    InitializationError,
    wifi::{
        AccessPointConfig,
        AuthMethod,
        ClientConfig,
        Config,
        ModeConfig,
        PowerSaveMode,
        ScanConfig,
        WifiController,
        WifiDevice,
        WifiError,
    },
};
use heapless::String;
use log::{debug, info};
use plasma_light_core::net::{WifiCredentials, select_known_network};
use static_cell::make_static;

use super::random::get_seed;
use crate::{
    config,
    infrastructure::tasks::{
        access_point_task,
        dhcp_server_task,
        network_runner_task,
        station_link_task,
    },
};

const MAX_NETWORK_CONNECTIONS: usize = 6;

#[derive(Debug)]
pub enum NetworkError {
    Radio(InitializationError),
    Wifi(WifiError),
    Spawn(SpawnError),
    ConnectTimeout,
    InvalidHostname,
}

impl From<WifiError> for NetworkError {
    fn from(e: WifiError) -> Self {
        Self::Wifi(e)
    }
}

impl From<SpawnError> for NetworkError {
    fn from(e: SpawnError) -> Self {
        Self::Spawn(e)
    }
}

/// Bring the network up and return the stack the HTTP server listens on.
pub async fn bootstrap_network(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
) -> Result<Stack<'static>, NetworkError> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().map_err(NetworkError::Radio)?);
    let (mut controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())?;

    controller.set_config(&ModeConfig::Client(ClientConfig::default()))?;
    controller.start_async().await?;

    let visible = controller
        .scan_with_config_async(ScanConfig::default())
        .await?;
    for ap in &visible {
        debug!("network: visible '{}' ({} dBm)", ap.ssid.as_str(), ap.signal_strength);
    }
    let known = select_known_network(
        config::KNOWN_NETWORKS,
        visible.iter().map(|ap| ap.ssid.as_str()),
    );

    match known {
        Some(network) => {
            start_station(spawner, controller, interfaces.sta, network).await
        }
        None => {
            info!("network: no known network in range");
            start_access_point(spawner, controller, interfaces.ap).await
        }
    }
}

async fn start_station(
    spawner: Spawner,
    mut controller: WifiController<'static>,
    device: WifiDevice<'static>,
    network: &WifiCredentials,
) -> Result<Stack<'static>, NetworkError> {
    info!("network: joining '{}'", network.ssid);

    let client_config = if network.password.is_empty() {
        ClientConfig::default()
            .with_ssid(network.ssid.into())
            .with_auth_method(AuthMethod::None)
    } else {
        ClientConfig::default()
            .with_ssid(network.ssid.into())
            .with_password(network.password.into())
    };
    controller.set_config(&ModeConfig::Client(client_config))?;
    controller.set_power_saving(PowerSaveMode::None)?;

    with_timeout(config::STATION_CONNECT_TIMEOUT, controller.connect_async())
        .await
        .map_err(|_| NetworkError::ConnectTimeout)??;

    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Some(
        String::try_from(config::HOSTNAME).map_err(|()| NetworkError::InvalidHostname)?,
    );

    let network_resources =
        make_static!(StackResources::<{ MAX_NETWORK_CONNECTIONS }>::new());
    let (stack, runner) = embassy_net::new(
        device,
        embassy_net::Config::dhcpv4(dhcp_config),
        network_resources,
        get_seed(),
    );

    spawner.spawn(network_runner_task(runner))?;
    spawner.spawn(station_link_task(controller))?;

    let ip = wait_for_connection(stack).await;
    info!("network: station up, address {}", ip.address);

    Ok(stack)
}

async fn start_access_point(
    spawner: Spawner,
    mut controller: WifiController<'static>,
    device: WifiDevice<'static>,
) -> Result<Stack<'static>, NetworkError> {
    let ap = &config::ACCESS_POINT;
    info!("network: starting access point '{}'", ap.ssid);

    controller.stop_async().await?;
    let ap_config = AccessPointConfig::default()
        .with_ssid(ap.ssid.into())
        .with_password(ap.password.into())
        .with_auth_method(AuthMethod::Wpa2Personal);
    controller.set_config(&ModeConfig::AccessPoint(ap_config))?;
    controller.start_async().await?;

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(ap.address, ap.prefix_len),
        gateway: Some(ap.address),
        dns_servers: heapless::Vec::default(),
    };
    let network_resources = make_static!(StackResources::<MAX_NETWORK_CONNECTIONS>::new());
    let (stack, runner) = embassy_net::new(
        device,
        embassy_net::Config::ipv4_static(static_config),
        network_resources,
        get_seed(),
    );

    spawner.spawn(network_runner_task(runner))?;
    spawner.spawn(access_point_task(controller))?;

    stack.wait_link_up().await;
    spawner.spawn(dhcp_server_task(stack, ap.address))?;
    info!("network: access point up, address {}", ap.address);

    Ok(stack)
}

/// Wait for link and a DHCP lease.
async fn wait_for_connection(stack: Stack<'_>) -> StaticConfigV4 {
    stack.wait_link_up().await;
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}

