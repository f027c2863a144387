#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
use log::info;

use plasma_light::config;
use plasma_light::controllers::ModeController;
use plasma_light::infrastructure::drivers::{
    EspLedDriver,
    EspRandom,
    boot_blink,
    bootstrap_network,
};
use plasma_light::infrastructure::tasks::{animation_task, http_server_task};
use plasma_light::infrastructure::types::LedStrip;
use plasma_light::{indicator_gpio, led_gpio, mk_static};
use plasma_light_core::{AnimationEngine, ControlState};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    info!("plasma-light: starting");

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory (64 + 32 KB), the radio driver needs it
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut indicator = Output::new(
        indicator_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );
    boot_blink(&mut indicator).await;

    let driver = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals))
        .expect("LED strip init failed");
    let strip = LedStrip::new(driver);

    let state: &'static ControlState = mk_static!(ControlState, ControlState::new());

    let stack = bootstrap_network(spawner, peripherals.WIFI)
        .await
        .expect("network bootstrap failed");

    let controller: &'static ModeController =
        mk_static!(ModeController, ModeController::new(state));
    for worker in 0..config::HTTP_WORKERS {
        spawner
            .spawn(http_server_task(stack, controller, worker))
            .ok();
    }

    let engine = AnimationEngine::new(
        state,
        strip,
        indicator,
        EspRandom::new(),
        config::ANIMATION,
    );
    spawner.spawn(animation_task(engine)).ok();

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
