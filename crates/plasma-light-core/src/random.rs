/// Source of random numbers for the animation routines.
///
/// Only [`RandomSource::next_u32`] has to be provided; on the device it is
/// backed by the hardware RNG.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `0.0..1.0`.
    #[allow(clippy::cast_precision_loss)]
    fn next_f32(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `low..high`.
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_f32()
    }

    /// Uniform integer in `low..=high`.
    #[allow(clippy::cast_possible_truncation)]
    fn range_inclusive(&mut self, low: u16, high: u16) -> u16 {
        if high <= low {
            return low;
        }
        let span = u32::from(high - low) + 1;
        low + (self.next_u32() % span) as u16
    }
}
