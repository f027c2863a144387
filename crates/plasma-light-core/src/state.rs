use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::mode::{Mode, ModeName, mode_name};

/// The single shared cell that bridges the HTTP control plane and the
/// animation loop.
///
/// Writes overwrite unconditionally and nobody is notified: the animation
/// engine polls [`ControlState::mode`] between frames. Every access happens
/// inside one short critical section that never spans an `.await`, so a
/// reader always sees a complete name and the last write before a poll wins.
pub struct ControlState {
    mode: Mutex<CriticalSectionRawMutex, RefCell<ModeName>>,
}

impl ControlState {
    /// Create the state with the mode set to `Off`.
    pub fn new() -> Self {
        Self {
            mode: Mutex::new(RefCell::new(mode_name(Mode::Off.as_str()))),
        }
    }

    /// Replace the current mode name. No validation is performed.
    pub fn set(&self, name: &str) {
        let name = mode_name(name);
        self.mode.lock(|cell| {
            *cell.borrow_mut() = name;
        });
    }

    /// Current mode name, verbatim.
    pub fn get(&self) -> ModeName {
        self.mode.lock(|cell| cell.borrow().clone())
    }

    /// Current mode parsed for dispatching.
    pub fn mode(&self) -> Mode {
        self.mode.lock(|cell| Mode::from_name(cell.borrow().as_str()))
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
