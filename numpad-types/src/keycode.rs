use strum::FromRepr;

/// Key codes defined in the HID usage table (keyboard/keypad page) that a numeric keypad can emit.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key. Matrix positions mapped to this are never reported.
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// Nums Lock
    NumLock = 0x0053,
    /// `/` on keypad
    KpSlash = 0x0054,
    /// `*` on keypad
    KpAsterisk = 0x0055,
    /// `-` on keypad
    KpMinus = 0x0056,
    /// `+` on keypad
    KpPlus = 0x0057,
    /// `Enter` on keypad
    KpEnter = 0x0058,
    /// `1` and `End` on keypad
    Kp1 = 0x0059,
    /// `2` and `Down` on keypad
    Kp2 = 0x005A,
    /// `3` and `PageDown` on keypad
    Kp3 = 0x005B,
    /// `4` and `Left` on keypad
    Kp4 = 0x005C,
    /// `5` on keypad
    Kp5 = 0x005D,
    /// `6` and `Right` on keypad
    Kp6 = 0x005E,
    /// `7` and `Home` on keypad
    Kp7 = 0x005F,
    /// `8` and `Up` on keypad
    Kp8 = 0x0060,
    /// `9` and `PageUp` on keypad
    Kp9 = 0x0061,
    /// `0` and `Insert` on keypad
    Kp0 = 0x0062,
    /// `.` and `Delete` on keypad
    KpDot = 0x0063,
    /// `=` on keypad
    KpEqual = 0x0067,
    /// `,` on keypad
    KpComma = 0x0085,
}

impl HidKeyCode {
    /// Raw HID usage id
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the keycode is on the keypad block of the usage table
    pub fn is_keypad(self) -> bool {
        (HidKeyCode::NumLock <= self && self <= HidKeyCode::KpDot)
            || self == HidKeyCode::KpEqual
            || self == HidKeyCode::KpComma
    }

    /// Returns `true` for [`HidKeyCode::No`]
    pub fn is_no_key(self) -> bool {
        self == HidKeyCode::No
    }
}

impl From<HidKeyCode> for u8 {
    fn from(code: HidKeyCode) -> u8 {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_usage_ids() {
        assert_eq!(HidKeyCode::NumLock.as_u8(), 0x53);
        assert_eq!(HidKeyCode::Kp5.as_u8(), 0x5D);
        assert_eq!(HidKeyCode::KpDot.as_u8(), 0x63);
        assert_eq!(HidKeyCode::from_repr(0x58), Some(HidKeyCode::KpEnter));
        assert_eq!(HidKeyCode::from_repr(0x04), None);
    }

    #[test]
    fn test_is_keypad() {
        assert!(HidKeyCode::Kp0.is_keypad());
        assert!(HidKeyCode::KpComma.is_keypad());
        assert!(!HidKeyCode::Enter.is_keypad());
        assert!(!HidKeyCode::No.is_keypad());
        assert!(HidKeyCode::No.is_no_key());
    }
}
