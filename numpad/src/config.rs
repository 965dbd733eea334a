use embassy_time::Duration;
use smart_leds::RGB8;
use smart_leds::colors::WHITE;

/// The config struct for the keypad.
///
/// There are 2 groups of configs:
/// 1. `MatrixConfig`: timing of the key scanner and its per-key state machine.
/// 2. `LightConfig`: power-up state of the backlight and the mode-cycling hotkey.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeypadConfig {
    pub matrix: MatrixConfig,
    pub light: LightConfig,
}

/// Timing of the matrix scanner
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// A contact must stay closed this long before it's reported as pressed
    pub debounce_time: Duration,
    /// Hold time after the press before a long press is reported
    pub long_press_time: Duration,
    /// Interval between repeat events while a long press is held
    pub repeat_interval: Duration,
    /// Minimum time between two scans, calls to `Matrix::scan` within this window do nothing.
    ///
    /// Zero scans on every call. Set it when `scan` is polled from a loop rather than a fixed tick.
    pub scan_interval: Duration,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            debounce_time: Duration::from_millis(20),
            long_press_time: Duration::from_millis(700),
            repeat_interval: Duration::from_millis(100),
            scan_interval: Duration::from_ticks(0),
        }
    }
}

/// Power-up state of the backlight
#[derive(Clone, Copy, Debug)]
pub struct LightConfig {
    /// Brightness in percent, 0..=100
    pub default_brightness: u8,
    /// Color filled in when entering static mode
    pub static_color: RGB8,
    /// (row, col) of the key whose long press cycles the backlight mode
    pub mode_hotkey: (u8, u8),
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            default_brightness: 50,
            static_color: WHITE,
            mode_hotkey: (0, 0),
        }
    }
}
