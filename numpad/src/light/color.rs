//! Integer color math for the backlight effects.

use smart_leds::RGB8;

/// One period of a sine wave mapped to 0..=255, 64 samples.
/// Pre-computed to avoid floating point math: sample = (sin(2π * k / 64) + 1) / 2 * 255
pub const SINE_TABLE: [u8; 64] = [
    128, 140, 152, 165, 176, 188, 198, 208, 218, 226, 234, 240, 245, 250, 253, 254, 255, 254, 253, 250, 245, 240,
    234, 226, 218, 208, 198, 188, 176, 165, 152, 140, 128, 115, 103, 90, 79, 67, 57, 47, 37, 29, 21, 15, 10, 5, 2, 1,
    0, 1, 2, 5, 10, 15, 21, 29, 37, 47, 57, 67, 79, 90, 103, 115,
];

/// Number of samples in [`SINE_TABLE`]
pub const SINE_STEPS: u8 = SINE_TABLE.len() as u8;

/// Sine sample at `phase`, wrapping every [`SINE_STEPS`]
pub fn sine(phase: usize) -> u8 {
    SINE_TABLE[phase % SINE_TABLE.len()]
}

/// Convert a HSV color to RGB.
///
/// The hue circle is split into 6 regions of 43 steps, each interpolating linearly between two primaries.
pub fn hsv_to_rgb(hue: u8, sat: u8, val: u8) -> RGB8 {
    if sat == 0 {
        return RGB8::new(val, val, val);
    }

    let (hue, sat, val) = (hue as u16, sat as u16, val as u16);
    let region = hue / 43;
    let remainder = (hue - region * 43) * 6;

    let p = ((val * (255 - sat)) >> 8) as u8;
    let q = ((val * (255 - ((sat * remainder) >> 8))) >> 8) as u8;
    let t = ((val * (255 - ((sat * (255 - remainder)) >> 8))) >> 8) as u8;
    let v = val as u8;

    match region {
        0 => RGB8::new(v, t, p),
        1 => RGB8::new(q, v, p),
        2 => RGB8::new(p, v, t),
        3 => RGB8::new(p, q, v),
        4 => RGB8::new(t, p, v),
        _ => RGB8::new(v, p, q),
    }
}

/// Scale every channel by `brightness` percent
pub fn scale(color: RGB8, brightness: u8) -> RGB8 {
    let channel = |c: u8| (c as u16 * brightness as u16 / 100) as u8;
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0, 255, 255), RGB8::new(255, 0, 0));

        let green = hsv_to_rgb(85, 255, 255);
        assert!(green.r <= 5);
        assert_eq!(green.g, 255);
        assert_eq!(green.b, 0);

        let blue = hsv_to_rgb(170, 255, 255);
        assert_eq!(blue.r, 0);
        assert!(blue.g <= 10);
        assert_eq!(blue.b, 255);
    }

    #[test]
    fn test_hsv_gray() {
        assert_eq!(hsv_to_rgb(123, 0, 77), RGB8::new(77, 77, 77));
    }

    #[test]
    fn test_sine_table_shape() {
        assert_eq!(sine(0), 128);
        assert_eq!(sine(16), 255);
        assert_eq!(sine(48), 0);
        assert_eq!(sine(64), sine(0));
        assert_eq!(SINE_STEPS, 64);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(RGB8::new(255, 100, 0), 50), RGB8::new(127, 50, 0));
        assert_eq!(scale(RGB8::new(255, 255, 255), 100), RGB8::new(255, 255, 255));
        assert_eq!(scale(RGB8::new(255, 255, 255), 0), RGB8::new(0, 0, 0));
    }
}
