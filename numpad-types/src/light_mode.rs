use strum::{EnumCount, FromRepr};

/// Backlight animation mode.
///
/// The discriminant is the mode index used by [`LightMode::from_index`] and the mode-cycle hotkey.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, EnumCount, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightMode {
    /// All LEDs dark
    Off = 0,
    /// Fixed color, applied once when the mode is entered
    #[default]
    Static = 1,
    /// Whole strip fades in and out
    Breathing = 2,
    /// Hue gradient rotating along the strip
    Rainbow = 3,
    /// LEDs under pressed keys light up and decay
    KeyReactive = 4,
    /// Cyan wave travelling along the strip
    Wave = 5,
}

impl LightMode {
    /// Mode with the given index, `None` if the index is out of range
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Next mode in cycle order, wrapping from the last mode back to [`LightMode::Off`]
    pub fn next(self) -> Self {
        let next = (self as usize + 1) % Self::COUNT;
        Self::from_repr(next as u8).unwrap_or_default()
    }
}
