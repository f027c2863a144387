//! Tuning constants of the animation routines.

use embassy_time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct OffConfig {
    /// How long the status indicator stays lit per heartbeat
    pub indicator_on: Duration,
    /// Dark part of the heartbeat
    pub indicator_off: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct BlinkyConfig {
    pub brightness: f32,
    /// Time between two flips of the even/odd colour assignment
    pub period: Duration,
    /// Inclusive hue range (degrees) of the first colour
    pub lower_hue: (u16, u16),
    /// Inclusive hue range (degrees) of the second colour
    pub upper_hue: (u16, u16),
}

#[derive(Debug, Clone, Copy)]
pub struct FireConfig {
    /// Upper bound (exclusive, degrees) of the red-orange band
    pub max_hue: f32,
    pub interval: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct RainbowsConfig {
    pub brightness: f32,
    /// Cycle speed, 1..=255. The offset advances by `speed / 2000` per tick.
    pub speed: f32,
    /// Ticks per second
    pub updates_per_second: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct SpookyConfig {
    /// Hue (degrees) away from the comet
    pub hue_start: f32,
    /// Hue (degrees) at the comet centre
    pub hue_end: f32,
    pub brightness: f32,
    /// Distance travelled per frame, in pixels
    pub speed: f32,
    pub interval: Duration,
}

/// Parameters of every animation routine.
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    pub off: OffConfig,
    pub blinky: BlinkyConfig,
    pub fire: FireConfig,
    pub rainbows: RainbowsConfig,
    pub spooky: SpookyConfig,
    /// Wait between two polls while the mode is not recognized
    pub idle_interval: Duration,
}

impl AnimationConfig {
    pub const DEFAULT: Self = Self {
        off: OffConfig {
            indicator_on: Duration::from_millis(100),
            indicator_off: Duration::from_millis(900),
        },
        blinky: BlinkyConfig {
            brightness: 0.5,
            period: Duration::from_secs(1),
            lower_hue: (0, 179),
            upper_hue: (180, 359),
        },
        fire: FireConfig {
            max_hue: 50.0,
            interval: Duration::from_millis(100),
        },
        rainbows: RainbowsConfig {
            brightness: 0.5,
            speed: 20.0,
            updates_per_second: 60,
        },
        spooky: SpookyConfig {
            hue_start: 30.0,
            hue_end: 140.0,
            brightness: 0.5,
            speed: 0.3,
            interval: Duration::from_millis(10),
        },
        idle_interval: Duration::from_secs(2),
    };
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
