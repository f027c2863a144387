use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{WifiController, WifiDevice, WifiEvent, WifiStaState};
use log::{debug, info, warn};

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Keeps an established station link alive.
///
/// The controller is already configured and connected when this starts.
#[embassy_executor::task]
pub async fn station_link_task(mut controller: WifiController<'static>) {
    loop {
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            warn!("network: station link lost");
            Timer::after(Duration::from_millis(2000)).await;
        }

        debug!("network: reconnecting");
        match controller.connect_async().await {
            Ok(()) => info!("network: station link restored"),
            Err(e) => {
                warn!("network: reconnect failed: {:?}", e);
                Timer::after(Duration::from_millis(5000)).await;
            }
        }
    }
}

/// Owns the controller while the access point is up.
#[embassy_executor::task]
pub async fn access_point_task(controller: WifiController<'static>) {
    let _controller = controller;
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
