//! Backlight animations.

use embassy_time::{Duration, Instant};
use numpad_types::LightMode;
use smart_leds::RGB8;
use smart_leds::colors::WHITE;

use super::LightError;
use super::buffer::LedColorBuffer;
use super::color::{SINE_STEPS, hsv_to_rgb, scale, sine};
use crate::config::LightConfig;
use crate::debounce::elapsed;
use crate::keymap::led_index;
use crate::{LED_COUNT, MATRIX_COLS, MATRIX_ROWS};

/// Frames a key stays lit after being pressed in key reactive mode
pub const REACTIVE_STEPS: u8 = 50;
/// Hue advance per rainbow frame
const RAINBOW_HUE_STEP: u8 = 5;

/// Time between two frames of `mode`, `None` for modes without animation
pub fn update_period(mode: LightMode) -> Option<Duration> {
    match mode {
        LightMode::Off | LightMode::Static => None,
        LightMode::Breathing => Some(Duration::from_millis(20)),
        LightMode::Rainbow => Some(Duration::from_millis(50)),
        LightMode::KeyReactive => Some(Duration::from_millis(10)),
        LightMode::Wave => Some(Duration::from_millis(100)),
    }
}

/// Animates the LED colors of the current [`LightMode`].
///
/// All writes go through the brightness scaling, so the buffer always holds the colors as shown.
pub struct EffectEngine {
    buffer: LedColorBuffer,
    mode: LightMode,
    /// Time of the last frame
    timer: Instant,
    /// Animation counter, its range depends on the mode
    step: u8,
    brightness: u8,
    static_color: RGB8,
    /// Remaining frames of every key lit in key reactive mode
    decay: [[u8; MATRIX_COLS]; MATRIX_ROWS],
}

impl EffectEngine {
    pub fn new(config: &LightConfig) -> Self {
        let mut engine = Self {
            buffer: LedColorBuffer::new(),
            mode: LightMode::Static,
            timer: Instant::from_ticks(0),
            step: 0,
            brightness: 0,
            static_color: config.static_color,
            decay: [[0; MATRIX_COLS]; MATRIX_ROWS],
        };
        engine.init(config);
        engine
    }

    /// Reset to the power-up state: static mode at the configured brightness
    pub fn init(&mut self, config: &LightConfig) {
        self.buffer.clear();
        self.decay = [[0; MATRIX_COLS]; MATRIX_ROWS];
        self.static_color = config.static_color;
        self.brightness = config.default_brightness.min(100);
        self.set_mode(LightMode::Static);
    }

    pub fn set_mode(&mut self, mode: LightMode) {
        info!("Backlight mode: {:?}", mode);
        self.mode = mode;
        self.timer = Instant::from_ticks(0);
        self.step = 0;
        match mode {
            LightMode::Off => self.buffer.clear(),
            LightMode::Static => self.set_all(self.static_color),
            LightMode::KeyReactive => {
                self.buffer.clear();
                self.decay = [[0; MATRIX_COLS]; MATRIX_ROWS];
            }
            LightMode::Breathing | LightMode::Rainbow | LightMode::Wave => (),
        }
    }

    /// Switch to the mode with the given index, unknown indices leave the mode unchanged
    pub fn set_mode_index(&mut self, index: u8) -> Result<(), LightError> {
        let Some(mode) = LightMode::from_index(index) else {
            warn!("Unknown backlight mode {}", index);
            return Err(LightError::UnknownMode);
        };
        self.set_mode(mode);
        Ok(())
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LightError> {
        if brightness > 100 {
            warn!("Brightness {} out of range", brightness);
            return Err(LightError::BrightnessOutOfRange);
        }
        self.brightness = brightness;
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: RGB8) -> Result<(), LightError> {
        Self::write(&mut self.buffer, self.brightness, index, color)
    }

    pub fn set_all(&mut self, color: RGB8) {
        self.buffer.fill(scale(color, self.brightness));
    }

    pub fn clear_all(&mut self) {
        self.buffer.clear();
    }

    /// Render the next frame if the current mode's period has elapsed.
    ///
    /// Returns `true` if the buffer was rewritten.
    pub fn process(&mut self, now: Instant) -> bool {
        let Some(period) = update_period(self.mode) else {
            return false;
        };
        if elapsed(self.timer, now) < period {
            return false;
        }
        self.timer = now;

        match self.mode {
            LightMode::Off | LightMode::Static => (),
            LightMode::Breathing => {
                let level = sine(self.step as usize);
                self.set_all(RGB8::new(level, level, level));
                self.step = (self.step + 1) % SINE_STEPS;
            }
            LightMode::Rainbow => {
                for index in 0..LED_COUNT {
                    let hue = self.step.wrapping_add((index * 256 / LED_COUNT) as u8);
                    // In range by construction
                    Self::write(&mut self.buffer, self.brightness, index, hsv_to_rgb(hue, 255, 255)).ok();
                }
                self.step = self.step.wrapping_add(RAINBOW_HUE_STEP);
            }
            LightMode::KeyReactive => {
                for (row, counters) in self.decay.iter_mut().enumerate() {
                    for (col, counter) in counters.iter_mut().enumerate() {
                        if *counter == 0 {
                            continue;
                        }
                        *counter -= 1;
                        let level = (*counter as u16 * 255 / REACTIVE_STEPS as u16) as u8;
                        if let Some(index) = led_index(row as u8, col as u8) {
                            Self::write(&mut self.buffer, self.brightness, index, RGB8::new(level, level, level)).ok();
                        }
                    }
                }
            }
            LightMode::Wave => {
                for index in 0..LED_COUNT {
                    let level = sine(self.step as usize * 3 + index * 6);
                    Self::write(&mut self.buffer, self.brightness, index, RGB8::new(0, level, level)).ok();
                }
                self.step = (self.step + 1) % SINE_STEPS;
            }
        }
        true
    }

    /// Light the key's LED in key reactive mode, other modes ignore key presses
    pub fn on_key_press(&mut self, row: u8, col: u8) {
        if self.mode != LightMode::KeyReactive {
            return;
        }
        let Some(index) = led_index(row, col) else {
            return;
        };
        Self::write(&mut self.buffer, self.brightness, index, WHITE).ok();
        self.decay[row as usize][col as usize] = REACTIVE_STEPS;
    }

    /// Released keys keep fading out on their own
    pub fn on_key_release(&mut self, _row: u8, _col: u8) {}

    pub fn mode(&self) -> LightMode {
        self.mode
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// Color of the LED at `index` as shown, brightness applied
    pub fn color(&self, index: usize) -> Option<RGB8> {
        self.buffer.get(index)
    }

    pub fn buffer(&self) -> &LedColorBuffer {
        &self.buffer
    }

    fn write(buffer: &mut LedColorBuffer, brightness: u8, index: usize, color: RGB8) -> Result<(), LightError> {
        buffer.set(index, scale(color, brightness))
    }
}
