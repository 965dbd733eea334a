//! # Numpad Types
//!
//! Fundamental type definitions shared by the numpad firmware.
//!
//! - [`keycode`] - USB HID keycodes produced by the key matrix
//! - [`light_mode`] - Backlight animation modes

#![no_std]

pub mod keycode;
pub mod light_mode;

pub use keycode::HidKeyCode;
pub use light_mode::LightMode;
