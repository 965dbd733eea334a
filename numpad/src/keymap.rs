use numpad_types::HidKeyCode;

use crate::{LED_COUNT, MATRIX_COLS, MATRIX_ROWS};

/// Keycode of every matrix position, indexed `[row][col]`. [`HidKeyCode::No`] marks unused positions.
pub type KeyMap<const ROW: usize, const COL: usize> = [[HidKeyCode; COL]; ROW];

/// Create a keycode. For example, `k!(Kp1)` represents `HidKeyCode::Kp1`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::HidKeyCode::$k
    };
}

/// An unused matrix position
#[macro_export]
macro_rules! no {
    () => {
        $crate::HidKeyCode::No
    };
}

/// Create a keymap from rows of keycodes
#[macro_export]
macro_rules! keymap {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Default numpad layout
pub const NUMPAD_KEYMAP: KeyMap<MATRIX_ROWS, MATRIX_COLS> = keymap!([
    [k!(NumLock), k!(KpSlash), k!(KpAsterisk), k!(KpMinus)],
    [k!(Kp1), k!(Kp2), k!(Kp3), no!()],
    [k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus)],
    [k!(Kp7), k!(Kp8), k!(Kp9), no!()],
    [k!(Kp0), k!(KpDot), k!(KpEnter), no!()]
]);

/// Index of the LED under the key at (row, col), `None` for positions off the board.
///
/// LEDs are chained row by row, in the same order as the matrix is scanned.
pub fn led_index(row: u8, col: u8) -> Option<usize> {
    let (row, col) = (row as usize, col as usize);
    if row >= MATRIX_ROWS || col >= MATRIX_COLS {
        return None;
    }
    let index = row * MATRIX_COLS + col;
    (index < LED_COUNT).then_some(index)
}

/// Number of positions with a keycode assigned
pub fn mapped_keys<const ROW: usize, const COL: usize>(keymap: &KeyMap<ROW, COL>) -> usize {
    keymap.iter().flatten().filter(|k| !k.is_no_key()).count()
}
