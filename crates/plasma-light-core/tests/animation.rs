mod common;

use common::{Event, EventLog, RecordingPin, RecordingSink, XorShift, close, event_log};
use embassy_futures::{
    block_on,
    select::{Either, select},
};
use embassy_time::{Duration, Timer};
use plasma_light_core::{
    AnimationConfig,
    AnimationEngine,
    ControlState,
    Mode,
    animation::{BlinkyState, RainbowState, SpookyState},
    config::{BlinkyConfig, OffConfig},
    http::serve_client,
};

const LEDS: usize = 50;

type TestEngine<'a> = AnimationEngine<'a, RecordingSink, RecordingPin, XorShift>;

fn engine<'a>(state: &'a ControlState, log: &EventLog, config: AnimationConfig) -> TestEngine<'a> {
    AnimationEngine::new(
        state,
        RecordingSink::new(LEDS, log),
        RecordingPin::new(log),
        XorShift(0x1234_5678),
        config,
    )
}

/// Defaults with every interval short enough for a test run.
fn fast_config() -> AnimationConfig {
    AnimationConfig {
        off: OffConfig {
            indicator_on: Duration::from_millis(2),
            indicator_off: Duration::from_millis(3),
        },
        blinky: BlinkyConfig {
            period: Duration::from_millis(10),
            ..AnimationConfig::DEFAULT.blinky
        },
        idle_interval: Duration::from_millis(5),
        ..AnimationConfig::DEFAULT
    }
}

/// Run the engine until `script` finishes.
fn run_with<F: Future<Output = ()>>(engine: &mut TestEngine<'_>, script: F) {
    match block_on(select(engine.run(), script)) {
        Either::First(()) => unreachable!("engine loop returned"),
        Either::Second(()) => {}
    }
}

fn run_for(engine: &mut TestEngine<'_>, millis: u64) {
    run_with(engine, Timer::after(Duration::from_millis(millis)));
}

fn count(log: &EventLog, predicate: impl Fn(&Event) -> bool) -> usize {
    log.borrow().iter().filter(|event| predicate(event)).count()
}

/// HSV colours of the first complete frame after `skip` frames.
fn frame(log: &EventLog, skip: usize) -> Vec<(usize, plasma_light_core::Hsv)> {
    log.borrow()
        .split(|event| *event == Event::Show)
        .nth(skip)
        .expect("frame not rendered")
        .iter()
        .filter_map(|event| match event {
            Event::Hsv(index, color) => Some((*index, *color)),
            _ => None,
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Dispatch
// -----------------------------------------------------------------------------

#[test]
fn unknown_modes_never_touch_pixels() {
    for name in ["UnKnown", "Disco", "fire", ""] {
        let state = ControlState::new();
        state.set(name);
        let log = event_log();
        let mut engine = engine(&state, &log, fast_config());

        run_for(&mut engine, 30);

        assert!(log.borrow().is_empty(), "mode {name:?} wrote {:?}", log.borrow());
    }
}

#[test]
fn step_reports_dispatched_mode() {
    let state = ControlState::new();
    state.set("Whatever");
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    assert_eq!(block_on(engine.step()), Mode::Unknown);
}

#[test]
fn off_blanks_strip_before_heartbeat() {
    let state = ControlState::new();
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    run_for(&mut engine, 30);

    let events = log.borrow();
    let first_indicator = events
        .iter()
        .position(|event| matches!(event, Event::Indicator(_)))
        .expect("no heartbeat");
    assert_eq!(first_indicator, LEDS + 1);
    for (index, event) in events[..LEDS].iter().enumerate() {
        assert_eq!(*event, Event::Rgb(index, plasma_light_core::color::BLACK));
    }
    assert_eq!(events[LEDS], Event::Show);
    assert_eq!(events[first_indicator], Event::Indicator(true));
    // Heartbeat keeps going, pixels are written only once
    let beats = events.iter().filter(|e| **e == Event::Indicator(true)).count();
    let shows = events.iter().filter(|e| **e == Event::Show).count();
    assert!(beats > 1);
    assert_eq!(shows, 1);
}

// -----------------------------------------------------------------------------
// Blinky
// -----------------------------------------------------------------------------

#[test]
fn blinky_state_swaps_neighbours_on_flip() {
    let mut blinky = BlinkyState::new(40, 285);
    assert_eq!((blinky.hue(0), blinky.hue(1)), (40, 285));

    blinky.flip();
    assert_eq!((blinky.hue(0), blinky.hue(1)), (285, 40));
    assert_eq!((blinky.hue(48), blinky.hue(49)), (285, 40));
}

#[test]
fn blinky_frames_alternate() {
    let state = ControlState::new();
    state.set("Blinky");
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    run_for(&mut engine, 35);

    let first = frame(&log, 0);
    let second = frame(&log, 1);
    assert_eq!(first.len(), LEDS);
    assert_eq!(second.len(), LEDS);

    let lower = first[0].1.hue * 360.0;
    let upper = first[1].1.hue * 360.0;
    assert!((0.0..180.0).contains(&lower), "lower hue {lower}");
    assert!((180.0..360.0).contains(&upper), "upper hue {upper}");

    for i in (0..LEDS).step_by(2) {
        assert!(close(first[i].1.hue, second[i + 1].1.hue));
        assert!(close(first[i + 1].1.hue, second[i].1.hue));
        assert!(close(first[i].1.value, 0.5));
        assert!(close(first[i].1.saturation, 1.0));
    }
}

// -----------------------------------------------------------------------------
// Fire
// -----------------------------------------------------------------------------

#[test]
fn fire_stays_in_red_orange_band() {
    let state = ControlState::new();
    state.set("Fire");
    let log = event_log();
    let config = AnimationConfig {
        fire: plasma_light_core::config::FireConfig {
            interval: Duration::from_millis(5),
            ..AnimationConfig::DEFAULT.fire
        },
        ..fast_config()
    };
    let mut engine = engine(&state, &log, config);

    run_for(&mut engine, 30);

    let first = frame(&log, 0);
    let second = frame(&log, 1);
    assert_eq!(first.len(), LEDS);
    for (_, color) in first.iter().chain(second.iter()) {
        assert!((0.0..50.0 / 360.0).contains(&color.hue));
        assert!((0.0..1.0).contains(&color.value));
        assert!(close(color.saturation, 1.0));
    }
    assert_ne!(first, second, "fire frames are re-randomized");
}

// -----------------------------------------------------------------------------
// Rainbows
// -----------------------------------------------------------------------------

#[test]
#[allow(clippy::cast_precision_loss)]
fn rainbow_offset_advances_per_tick() {
    let speed = 20.0;
    let mut rainbow = RainbowState::new(speed);
    for k in 1..=250u32 {
        rainbow.advance();
        let expected = (k as f32 * speed / 2000.0) % 1.0;
        let diff = (rainbow.offset() - expected).abs();
        assert!(diff < 1e-3 || (1.0 - diff) < 1e-3, "tick {k}: {}", rainbow.offset());

        for i in [0, 7, 49] {
            let hue = (i as f32 / LEDS as f32 + expected) % 1.0;
            let diff = (rainbow.hue(i, LEDS) - hue).abs();
            assert!(diff < 1e-3 || (1.0 - diff) < 1e-3);
        }
    }
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn rainbows_render_scrolling_gradient() {
    let state = ControlState::new();
    state.set("Rainbows");
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    run_for(&mut engine, 40);

    let first = frame(&log, 0);
    assert_eq!(first.len(), LEDS);
    for (index, color) in &first {
        assert!(close(color.hue, *index as f32 / LEDS as f32 + 0.01));
        assert!(close(color.value, 0.5));
    }
}

// -----------------------------------------------------------------------------
// Spooky
// -----------------------------------------------------------------------------

#[test]
#[allow(clippy::cast_precision_loss)]
fn spooky_bounces_within_one_step_of_the_strip() {
    let speed = 0.3;
    let mut comet = SpookyState::new(speed);
    let mut reversals = 0;

    for _ in 0..2000 {
        let direction = comet.direction();
        comet.advance(LEDS);

        let distance = comet.distance();
        assert!(distance >= -speed - 1e-3 && distance <= LEDS as f32 + speed + 1e-3);

        if comet.direction() != direction {
            reversals += 1;
            assert!(distance > LEDS as f32 || distance < 0.0);
        }
        // Outside the strip the comet is always heading back
        if distance > LEDS as f32 {
            assert!(comet.direction() < 0.0);
        }
        if distance < 0.0 {
            assert!(comet.direction() > 0.0);
        }
    }
    assert!(reversals >= 4);
}

#[test]
fn spooky_intensity_is_a_tent() {
    let comet = SpookyState::new(0.3);
    // distance 0: peak at pixel 0, zero from N/3 on
    assert!(close(comet.intensity(0, 30), 1.0));
    assert!(close(comet.intensity(5, 30), 0.5));
    assert!(close(comet.intensity(10, 30), 0.0));
    assert!(close(comet.intensity(29, 30), 0.0));
}

#[test]
fn spooky_renders_comet_hues() {
    let state = ControlState::new();
    state.set("Spooky");
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    run_for(&mut engine, 20);

    let first = frame(&log, 0);
    assert!(close(first[0].1.hue, 140.0 / 360.0));
    assert!(close(first[LEDS - 1].1.hue, 30.0 / 360.0));
}

// -----------------------------------------------------------------------------
// Mode switching
// -----------------------------------------------------------------------------

#[test]
fn switch_waits_for_inflight_frame() {
    let state = ControlState::new();
    state.set("Blinky");
    let log = event_log();
    let config = AnimationConfig {
        blinky: BlinkyConfig {
            period: Duration::from_millis(200),
            ..AnimationConfig::DEFAULT.blinky
        },
        ..fast_config()
    };
    let mut engine = engine(&state, &log, config);

    let script = async {
        Timer::after(Duration::from_millis(50)).await;
        state.set("Off");
        Timer::after(Duration::from_millis(100)).await;
        // Blinky is still sleeping through its first period
        assert_eq!(count(&log, |e| matches!(e, Event::Indicator(_))), 0);
        assert_eq!(count(&log, |e| matches!(e, Event::Rgb(..))), 0);
        Timer::after(Duration::from_millis(150)).await;
    };
    run_with(&mut engine, script);

    assert_eq!(count(&log, |e| matches!(e, Event::Rgb(..))), LEDS);
    assert!(count(&log, |e| *e == Event::Indicator(true)) > 0);
}

#[test]
fn request_without_mode_idles_the_engine() {
    let state = ControlState::new();
    state.set("Rainbows");
    let log = event_log();
    let mut engine = engine(&state, &log, AnimationConfig {
        idle_interval: Duration::from_secs(2),
        ..fast_config()
    });

    let script = async {
        Timer::after(Duration::from_millis(30)).await;
        let mut conn = common::MockConnection::new(b"GET / HTTP/1.1\r\n\r\n");
        serve_client(&mut conn, &state).await.unwrap();
        assert_eq!(state.mode(), Mode::Unknown);

        // One 60 Hz frame later the engine is idle
        Timer::after(Duration::from_millis(40)).await;
        let shown = count(&log, |e| *e == Event::Show);
        Timer::after(Duration::from_millis(100)).await;
        assert_eq!(count(&log, |e| *e == Event::Show), shown);
    };
    run_with(&mut engine, script);

    assert!(count(&log, |e| *e == Event::Show) > 0);
}

#[test]
fn routine_state_resets_on_reentry() {
    let state = ControlState::new();
    state.set("Rainbows");
    let log = event_log();
    let mut engine = engine(&state, &log, fast_config());

    let script = async {
        Timer::after(Duration::from_millis(60)).await;
        state.set("Paused");
        Timer::after(Duration::from_millis(40)).await;
        log.borrow_mut().clear();
        state.set("Rainbows");
        Timer::after(Duration::from_millis(40)).await;
    };
    run_with(&mut engine, script);

    let first = frame(&log, 0);
    assert!(close(first[0].1.hue, 0.01));
}
