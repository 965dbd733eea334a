//! WS2812 backlight: effect animation, frame encoding and DMA transfer.
//!
//! [`Backlight`] is the surface used by the firmware. It owns an [`EffectEngine`] rendering the colors
//! and a [`LedTransfer`] pushing them to the strip through a board specific [`LedDriver`].

pub mod buffer;
pub mod color;
pub mod effect;
pub mod encoder;
pub mod transfer;

use embassy_time::Instant;
use numpad_types::LightMode;
use smart_leds::RGB8;

pub use self::buffer::LedColorBuffer;
pub use self::effect::EffectEngine;
pub use self::transfer::{BusyFlag, LedDriver, LedTransfer, UpdateStatus};
use crate::config::LightConfig;

/// Rejected backlight operation. The backlight state is unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightError {
    /// LED index past the end of the strip
    IndexOutOfRange,
    /// Brightness above 100 percent
    BrightnessOutOfRange,
    /// Mode index with no matching mode
    UnknownMode,
}

impl core::fmt::Display for LightError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LightError::IndexOutOfRange => write!(f, "LED index out of range"),
            LightError::BrightnessOutOfRange => write!(f, "brightness must be within 0..=100"),
            LightError::UnknownMode => write!(f, "unknown light mode"),
        }
    }
}

impl core::error::Error for LightError {}

/// The keypad backlight.
pub struct Backlight<'a, D: LedDriver> {
    config: LightConfig,
    effect: EffectEngine,
    transfer: LedTransfer<'a, D>,
}

impl<'a, D: LedDriver> Backlight<'a, D> {
    /// Create the backlight in its power-up state, `busy` is shared with the transfer-complete interrupt
    pub fn new(driver: D, busy: &'a BusyFlag, config: LightConfig) -> Self {
        Self {
            config,
            effect: EffectEngine::new(&config),
            transfer: LedTransfer::new(driver, busy),
        }
    }

    /// Back to the power-up state: static mode at the default brightness
    pub fn init(&mut self) {
        self.effect.init(&self.config);
    }

    pub fn set_color(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), LightError> {
        self.effect.set_color(index, RGB8::new(r, g, b))
    }

    pub fn set_all(&mut self, color: RGB8) {
        self.effect.set_all(color);
    }

    pub fn clear_all(&mut self) {
        self.effect.clear_all();
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LightError> {
        self.effect.set_brightness(brightness)
    }

    pub fn set_mode(&mut self, mode: LightMode) {
        self.effect.set_mode(mode);
    }

    pub fn set_mode_index(&mut self, index: u8) -> Result<(), LightError> {
        self.effect.set_mode_index(index)
    }

    pub fn next_mode(&mut self) {
        self.effect.next_mode();
    }

    /// Advance the current animation, call on every tick. Returns `true` if the colors changed.
    pub fn process_effects(&mut self, now: Instant) -> bool {
        self.effect.process(now)
    }

    pub fn on_key_press(&mut self, row: u8, col: u8) {
        self.effect.on_key_press(row, col);
    }

    pub fn on_key_release(&mut self, row: u8, col: u8) {
        self.effect.on_key_release(row, col);
    }

    /// Send the current colors to the strip unless a transfer is in flight
    pub fn request_update(&mut self) -> UpdateStatus {
        self.transfer.request_update(self.effect.buffer())
    }

    /// Call from the transfer-complete interrupt
    pub fn on_transfer_complete(&mut self) {
        self.transfer.on_transfer_complete();
    }

    pub fn mode(&self) -> LightMode {
        self.effect.mode()
    }

    pub fn brightness(&self) -> u8 {
        self.effect.brightness()
    }

    pub fn is_busy(&self) -> bool {
        self.transfer.is_busy()
    }

    /// Color of the LED at `index` as shown
    pub fn color(&self, index: usize) -> Option<RGB8> {
        self.effect.color(index)
    }

    pub fn effect(&self) -> &EffectEngine {
        &self.effect
    }

    pub fn transfer(&self) -> &LedTransfer<'a, D> {
        &self.transfer
    }
}
