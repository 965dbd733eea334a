use numpad_types::HidKeyCode;

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEventKind {
    /// The key has been held for the debounce time
    Press,
    /// The key has been held for the long press time after the press
    LongPress,
    /// Emitted once per repeat interval while a long press is held
    Repeat,
    /// The key was released after a press or a long press
    Release,
}

/// A key event produced by the matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub keycode: HidKeyCode,
    pub row: u8,
    pub col: u8,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub const fn new(keycode: HidKeyCode, row: u8, col: u8, kind: KeyEventKind) -> Self {
        Self { keycode, row, col, kind }
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Release
    }
}
