//! Per-key state machine: debounce, press, long press and repeat.

use embassy_time::{Duration, Instant};

use crate::config::MatrixConfig;
use crate::event::KeyEventKind;

/// Time elapsed from `since` to `now`, zero if `now` is earlier
pub(crate) fn elapsed(since: Instant, now: Instant) -> Duration {
    now.checked_duration_since(since).unwrap_or(Duration::from_ticks(0))
}

/// State of a single key.
///
/// The payload of each state is the timestamp the state was entered, or the last repeat for `LongPress`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Released and stable
    #[default]
    Idle,
    /// Contact closed, waiting for it to stay closed for the debounce time
    Debounce(Instant),
    /// Press reported
    Pressed(Instant),
    /// Long press reported, repeating
    LongPress(Instant),
}

impl KeyState {
    pub fn is_pressing(&self) -> bool {
        matches!(self, KeyState::Pressed(_) | KeyState::LongPress(_))
    }

    /// Advance the state machine with the sampled contact state.
    ///
    /// Returns the new state and the event to report, at most one per call.
    pub fn step(self, key_active: bool, now: Instant, timing: &MatrixConfig) -> (KeyState, Option<KeyEventKind>) {
        match (self, key_active) {
            (KeyState::Idle, false) => (KeyState::Idle, None),
            (KeyState::Idle, true) => (KeyState::Debounce(now), None),
            // Bounce, the contact opened again before the debounce time passed
            (KeyState::Debounce(_), false) => (KeyState::Idle, None),
            (KeyState::Debounce(since), true) => {
                if elapsed(since, now) >= timing.debounce_time {
                    (KeyState::Pressed(now), Some(KeyEventKind::Press))
                } else {
                    (self, None)
                }
            }
            (KeyState::Pressed(_), false) | (KeyState::LongPress(_), false) => {
                (KeyState::Idle, Some(KeyEventKind::Release))
            }
            (KeyState::Pressed(since), true) => {
                if elapsed(since, now) >= timing.long_press_time {
                    (KeyState::LongPress(now), Some(KeyEventKind::LongPress))
                } else {
                    (self, None)
                }
            }
            (KeyState::LongPress(since), true) => {
                if elapsed(since, now) >= timing.repeat_interval {
                    (KeyState::LongPress(now), Some(KeyEventKind::Repeat))
                } else {
                    (self, None)
                }
            }
        }
    }
}

pub trait DebouncerTrait<const ROW: usize, const COL: usize> {
    /// Feed the sampled contact state of the key at (row, col), returns the event to report if any
    fn detect_change_with_debounce(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        key_active: bool,
        now: Instant,
    ) -> Option<KeyEventKind>;

    /// Current state of the key at (row, col)
    fn key_state(&self, row_idx: usize, col_idx: usize) -> KeyState;
}

/// Debouncer running one [`KeyState`] machine per matrix position.
pub struct DefaultDebouncer<const ROW: usize, const COL: usize> {
    states: [[KeyState; COL]; ROW],
    timing: MatrixConfig,
}

impl<const ROW: usize, const COL: usize> Default for DefaultDebouncer<ROW, COL> {
    fn default() -> Self {
        Self::new(MatrixConfig::default())
    }
}

impl<const ROW: usize, const COL: usize> DefaultDebouncer<ROW, COL> {
    pub fn new(timing: MatrixConfig) -> Self {
        DefaultDebouncer {
            states: [[KeyState::Idle; COL]; ROW],
            timing,
        }
    }
}

impl<const ROW: usize, const COL: usize> DebouncerTrait<ROW, COL> for DefaultDebouncer<ROW, COL> {
    fn detect_change_with_debounce(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        key_active: bool,
        now: Instant,
    ) -> Option<KeyEventKind> {
        let state = &mut self.states[row_idx][col_idx];
        let (next, event) = state.step(key_active, now, &self.timing);
        *state = next;
        event
    }

    fn key_state(&self, row_idx: usize, col_idx: usize) -> KeyState {
        self.states[row_idx][col_idx]
    }
}
