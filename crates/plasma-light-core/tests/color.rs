mod common;

use common::XorShift;
use plasma_light_core::{
    Hsv,
    LedDriver,
    PixelBuffer,
    PixelSink,
    RandomSource,
    Rgb,
    color::{BLACK, hsv_to_rgb, wrap_hue},
};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

#[test]
fn primary_hues() {
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), RED);
    assert_eq!(hsv_to_rgb(Hsv::new(1.0 / 3.0, 1.0, 1.0)), GREEN);
    assert_eq!(hsv_to_rgb(Hsv::new(2.0 / 3.0, 1.0, 1.0)), BLUE);
    assert_eq!(hsv_to_rgb(Hsv::from_degrees(60.0, 1.0, 1.0)), Rgb { r: 255, g: 255, b: 0 });
}

#[test]
fn hue_wraps_around_the_wheel() {
    assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), RED);
    assert_eq!(hsv_to_rgb(Hsv::new(1.25, 1.0, 0.5)), hsv_to_rgb(Hsv::new(0.25, 1.0, 0.5)));
    assert_eq!(hsv_to_rgb(Hsv::new(-0.75, 1.0, 0.5)), hsv_to_rgb(Hsv::new(0.25, 1.0, 0.5)));
    assert!((wrap_hue(3.5) - 0.5).abs() < 1e-6);
    assert!((0.0..1.0).contains(&wrap_hue(-1e-9)));
}

#[test]
fn saturation_and_value_extremes() {
    assert_eq!(hsv_to_rgb(Hsv::new(0.4, 1.0, 0.0)), BLACK);
    assert_eq!(hsv_to_rgb(Hsv::new(0.4, 0.0, 1.0)), Rgb { r: 255, g: 255, b: 255 });
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 0.5)), Rgb { r: 128, g: 0, b: 0 });
    // Out of range inputs are clamped
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 2.0, 7.0)), RED);
}

struct FrameRecorder<const N: usize> {
    frames: Vec<[Rgb; N]>,
}

impl<const N: usize> LedDriver<N> for FrameRecorder<N> {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.frames.push(*colors);
    }
}

#[test]
fn pixel_buffer_pushes_whole_frames() {
    let mut buffer = PixelBuffer::<_, 4>::new(FrameRecorder { frames: Vec::new() });
    assert_eq!(buffer.len(), 4);

    buffer.set_rgb(1, RED);
    buffer.set_hsv(3, Hsv::new(2.0 / 3.0, 1.0, 1.0));
    buffer.set_rgb(9, GREEN);
    assert!(buffer.driver().frames.is_empty());

    buffer.show();
    assert_eq!(buffer.driver().frames, vec![[BLACK, RED, BLACK, BLUE]]);
    assert_eq!(buffer.pixels(), &[BLACK, RED, BLACK, BLUE]);
}

#[test]
fn random_helpers_stay_in_range() {
    let mut rng = XorShift(42);
    for _ in 0..10_000 {
        assert!((0.0..1.0).contains(&rng.next_f32()));
        assert!((180..=359).contains(&rng.range_inclusive(180, 359)));
        let value = rng.uniform(0.0, 50.0);
        assert!((0.0..50.0).contains(&value));
    }
    assert_eq!(rng.range_inclusive(7, 7), 7);
}
