use heapless::String;

/// Maximum stored length of a mode name, in bytes.
pub const MODE_NAME_CAPACITY: usize = 32;

/// Name written into the control state when a request carries no mode.
pub const UNKNOWN_MODE_NAME: &str = "UnKnown";

const MODE_NAME_OFF: &str = "Off";
const MODE_NAME_BLINKY: &str = "Blinky";
const MODE_NAME_FIRE: &str = "Fire";
const MODE_NAME_RAINBOWS: &str = "Rainbows";
const MODE_NAME_SPOOKY: &str = "Spooky";

/// Mode name exactly as it was received from a client.
pub type ModeName = String<MODE_NAME_CAPACITY>;

/// Animation selected by a mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    Blinky,
    Fire,
    Rainbows,
    Spooky,
    /// Any name the dispatcher does not recognize
    Unknown,
}

impl Mode {
    /// Parse a mode name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            MODE_NAME_OFF => Mode::Off,
            MODE_NAME_BLINKY => Mode::Blinky,
            MODE_NAME_FIRE => Mode::Fire,
            MODE_NAME_RAINBOWS => Mode::Rainbows,
            MODE_NAME_SPOOKY => Mode::Spooky,
            _ => Mode::Unknown,
        }
    }

    /// Canonical name of a recognized mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Off => MODE_NAME_OFF,
            Mode::Blinky => MODE_NAME_BLINKY,
            Mode::Fire => MODE_NAME_FIRE,
            Mode::Rainbows => MODE_NAME_RAINBOWS,
            Mode::Spooky => MODE_NAME_SPOOKY,
            Mode::Unknown => UNKNOWN_MODE_NAME,
        }
    }
}

/// Build a [`ModeName`] from a raw token.
///
/// Tokens longer than [`MODE_NAME_CAPACITY`] are cut at the last character
/// that still fits.
pub fn mode_name(token: &str) -> ModeName {
    let mut name = ModeName::new();
    for ch in token.chars() {
        if name.push(ch).is_err() {
            break;
        }
    }
    name
}
