//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use plasma_light_core::{Hsv, PixelSink, RandomSource, Rgb};

/// Something observable the engine did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Rgb(usize, Rgb),
    Hsv(usize, Hsv),
    Show,
    Indicator(bool),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Pixel sink that records every call.
pub struct RecordingSink {
    len: usize,
    log: EventLog,
}

impl RecordingSink {
    pub fn new(len: usize, log: &EventLog) -> Self {
        Self {
            len,
            log: Rc::clone(log),
        }
    }
}

impl PixelSink for RecordingSink {
    fn len(&self) -> usize {
        self.len
    }

    fn set_rgb(&mut self, index: usize, color: Rgb) {
        self.log.borrow_mut().push(Event::Rgb(index, color));
    }

    fn set_hsv(&mut self, index: usize, color: Hsv) {
        self.log.borrow_mut().push(Event::Hsv(index, color));
    }

    fn show(&mut self) {
        self.log.borrow_mut().push(Event::Show);
    }
}

/// Status indicator pin that records level changes.
pub struct RecordingPin {
    log: EventLog,
}

impl RecordingPin {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl embedded_hal::digital::ErrorType for RecordingPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Indicator(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Indicator(true));
        Ok(())
    }
}

/// Deterministic xorshift generator.
pub struct XorShift(pub u32);

impl RandomSource for XorShift {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// In-memory connection: reads come from `input`, writes land in `output`.
///
/// Once `input` is drained, reads report end of stream, or stay pending
/// forever when `hold_open` is set.
pub struct MockConnection {
    input: Vec<u8>,
    position: usize,
    hold_open: bool,
    pub output: Vec<u8>,
}

impl MockConnection {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            position: 0,
            hold_open: false,
            output: Vec::new(),
        }
    }

    pub fn held_open(input: &[u8]) -> Self {
        Self {
            hold_open: true,
            ..Self::new(input)
        }
    }

    pub fn remaining(&self) -> &[u8] {
        &self.input[self.position..]
    }

    pub fn output_str(&self) -> &str {
        std::str::from_utf8(&self.output).expect("response is not UTF-8")
    }
}

impl embedded_io_async::ErrorType for MockConnection {
    type Error = Infallible;
}

impl embedded_io_async::Read for MockConnection {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.position >= self.input.len() {
            if self.hold_open {
                core::future::pending::<()>().await;
            }
            return Ok(0);
        }
        let n = buf.len().min(self.input.len() - self.position);
        buf[..n].copy_from_slice(&self.input[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}

impl embedded_io_async::Write for MockConnection {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Approximate float comparison.
pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
