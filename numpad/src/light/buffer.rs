use smart_leds::RGB8;

use super::LightError;
use crate::LED_COUNT;

/// Color of every LED on the strip, stored in wire order (green, red, blue).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedColorBuffer {
    grb: [[u8; 3]; LED_COUNT],
}

impl Default for LedColorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LedColorBuffer {
    /// Number of LEDs in the buffer
    pub const LEN: usize = LED_COUNT;

    /// Create a blank (all black) buffer
    pub const fn new() -> Self {
        Self {
            grb: [[0; 3]; LED_COUNT],
        }
    }

    pub fn set(&mut self, index: usize, color: RGB8) -> Result<(), LightError> {
        let slot = self.grb.get_mut(index).ok_or(LightError::IndexOutOfRange)?;
        *slot = [color.g, color.r, color.b];
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.grb.get(index).map(|[g, r, b]| RGB8::new(*r, *g, *b))
    }

    pub fn fill(&mut self, color: RGB8) {
        self.grb.fill([color.g, color.r, color.b]);
    }

    pub fn clear(&mut self) {
        self.grb.fill([0; 3]);
    }

    /// Color bytes in the order they are shifted out to the strip
    pub fn wire_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.grb.iter().flatten().copied()
    }
}
