//! Pixel output abstraction.
//!
//! The animation routines only talk to a [`PixelSink`]. Hardware backends
//! implement the smaller [`LedDriver`] trait and are wrapped in a
//! [`PixelBuffer`], which holds the frame being drawn.

use crate::color::{BLACK, Hsv, Rgb};

/// Hardware LED driver that pushes a whole frame at once.
pub trait LedDriver<const N: usize> {
    fn write(&mut self, colors: &[Rgb; N]);
}

/// Ordered, fixed-size strip of addressable pixels.
pub trait PixelSink {
    /// Number of pixels on the strip.
    fn len(&self) -> usize;

    /// Whether the strip has no pixels at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set a single pixel. Out of range indexes are ignored.
    fn set_rgb(&mut self, index: usize, color: Rgb);

    /// Set a single pixel from an HSV colour.
    fn set_hsv(&mut self, index: usize, color: Hsv) {
        self.set_rgb(index, color.to_rgb());
    }

    /// Push the buffered pixels to the hardware.
    fn show(&mut self);
}

/// Frame buffer in front of an [`LedDriver`].
pub struct PixelBuffer<D: LedDriver<N>, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
}

impl<D: LedDriver<N>, const N: usize> PixelBuffer<D, N> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [BLACK; N],
        }
    }

    /// Pixels as they will be written on the next [`PixelSink::show`].
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: LedDriver<N>, const N: usize> PixelSink for PixelBuffer<D, N> {
    fn len(&self) -> usize {
        N
    }

    fn set_rgb(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.driver.write(&self.pixels);
    }
}
