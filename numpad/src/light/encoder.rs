//! WS2812 frame encoding.
//!
//! Every color bit becomes one PWM period of the data line timer, the duty cycle telling a 0 from a 1.
//! With the timer clocked at 84 MHz and a period of 104 ticks (1.25 µs per bit) the compare values below
//! give ~0.4 µs and ~0.8 µs of high time. A run of zero-duty periods after the last LED latches the frame.

use super::buffer::LedColorBuffer;
use crate::LED_COUNT;

/// Compare value of a 0 bit
pub const ZERO_CODE: u16 = 33;
/// Compare value of a 1 bit
pub const ONE_CODE: u16 = 66;
/// 8 bits for each of green, red and blue
pub const BITS_PER_LED: usize = 24;
/// Zero-duty periods forming the reset gap, 62.5 µs
pub const RESET_SLOTS: usize = 50;
/// Length of a whole encoded frame
pub const TRANSFER_LEN: usize = LED_COUNT * BITS_PER_LED + RESET_SLOTS;

/// Duty-cycle codes of a whole frame, handed to the DMA engine as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferBuffer {
    codes: [u16; TRANSFER_LEN],
}

impl Default for TransferBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferBuffer {
    pub const fn new() -> Self {
        Self {
            codes: [0; TRANSFER_LEN],
        }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.codes
    }
}

/// Codes of one byte, MSB first
pub fn encode_byte(byte: u8) -> [u16; 8] {
    let mut codes = [ZERO_CODE; 8];
    for (bit, code) in codes.iter_mut().enumerate() {
        if byte & (0x80 >> bit) != 0 {
            *code = ONE_CODE;
        }
    }
    codes
}

/// Encode `colors` into `out`, overwriting all of it
pub fn encode_frame(colors: &LedColorBuffer, out: &mut TransferBuffer) {
    let (data, reset) = out.codes.split_at_mut(LED_COUNT * BITS_PER_LED);
    for (slot, byte) in data.chunks_exact_mut(8).zip(colors.wire_bytes()) {
        slot.copy_from_slice(&encode_byte(byte));
    }
    reset.fill(0);
}

#[cfg(test)]
mod test {
    use smart_leds::RGB8;

    use super::*;

    #[test]
    fn test_encode_byte_msb_first() {
        assert_eq!(encode_byte(0x00), [ZERO_CODE; 8]);
        assert_eq!(encode_byte(0xFF), [ONE_CODE; 8]);
        assert_eq!(
            encode_byte(0xA0),
            [ONE_CODE, ZERO_CODE, ONE_CODE, ZERO_CODE, ZERO_CODE, ZERO_CODE, ZERO_CODE, ZERO_CODE]
        );
    }

    #[test]
    fn test_encode_black_frame() {
        let mut out = TransferBuffer::new();
        encode_frame(&LedColorBuffer::new(), &mut out);

        let (data, reset) = out.as_slice().split_at(LED_COUNT * BITS_PER_LED);
        assert!(data.iter().all(|&code| code == ZERO_CODE));
        assert_eq!(reset.len(), RESET_SLOTS);
        assert!(reset.iter().all(|&code| code == 0));
    }

    #[test]
    fn test_encode_green_first() {
        let mut colors = LedColorBuffer::new();
        colors.set(1, RGB8::new(0, 0x80, 0x01)).unwrap();
        let mut out = TransferBuffer::new();
        encode_frame(&colors, &mut out);

        let led = &out.as_slice()[BITS_PER_LED..2 * BITS_PER_LED];
        // green
        assert_eq!(led[0], ONE_CODE);
        assert!(led[1..8].iter().all(|&code| code == ZERO_CODE));
        // red
        assert!(led[8..16].iter().all(|&code| code == ZERO_CODE));
        // blue
        assert!(led[16..23].iter().all(|&code| code == ZERO_CODE));
        assert_eq!(led[23], ONE_CODE);
    }
}
