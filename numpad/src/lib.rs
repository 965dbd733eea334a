//! # Numpad
//!
//! Firmware core of a 5x4 numeric keypad with a 20 LED WS2812 backlight.
//!
//! The crate is split along the two interrupt-driven paths of the board:
//!
//! - key path: [`matrix::Matrix`] scans the key matrix on every tick, runs a
//!   per-key debounce/long-press state machine ([`debounce`]) and pushes
//!   [`event::KeyEvent`]s into a bounded SPSC queue ([`channel`]).
//! - light path: [`light::Backlight`] animates the LED colors on the same tick,
//!   encodes them into PWM duty-cycle codes and hands them to a DMA driver.
//!
//! [`controller::KeyRouter`] runs on the main loop and connects the two: it
//! feeds key events into the reactive backlight mode and implements the
//! mode-cycling hotkey.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod event;
pub mod keymap;
pub mod light;
pub mod matrix;

pub use numpad_types::{HidKeyCode, LightMode};
pub use smart_leds::{RGB8, colors};

/// Number of rows (strobe lines) of the key matrix
pub const MATRIX_ROWS: usize = 5;
/// Number of columns (sense lines) of the key matrix
pub const MATRIX_COLS: usize = 4;
/// Event queue capacity, equals the key slots of a boot keyboard report
pub const MAX_PRESSED_KEYS: usize = 6;
/// Number of LEDs on the backlight strip, one under each matrix position
pub const LED_COUNT: usize = MATRIX_ROWS * MATRIX_COLS;
