//! Main loop side of the key path.
//!
//! [`KeyRouter`] takes the events out of the queue, lets the backlight react to them and decides which
//! ones reach the report builder.

use crate::channel::EventConsumer;
use crate::config::LightConfig;
use crate::event::{KeyEvent, KeyEventKind};
use crate::light::{Backlight, LedDriver};

/// Where a routed event goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventRoute {
    /// Hand the event to the report builder
    Forward,
    /// The event was handled here
    Consumed,
}

/// Routes key events to the backlight and the report builder.
///
/// Holding the mode hotkey past the long press time cycles the backlight mode. The hotkey's long press
/// and repeats are consumed; its press and release are always forwarded so the host never sees a stuck key.
pub struct KeyRouter {
    hotkey: (u8, u8),
    /// Set while the hotkey is held after switching the mode
    switching: bool,
}

impl KeyRouter {
    pub fn new(config: &LightConfig) -> Self {
        Self {
            hotkey: config.mode_hotkey,
            switching: false,
        }
    }

    pub fn route<D: LedDriver>(&mut self, event: &KeyEvent, backlight: &mut Backlight<'_, D>) -> EventRoute {
        let is_hotkey = (event.row, event.col) == self.hotkey;

        match event.kind {
            KeyEventKind::Press => {
                backlight.on_key_press(event.row, event.col);
                EventRoute::Forward
            }
            KeyEventKind::LongPress if is_hotkey => {
                backlight.next_mode();
                self.switching = true;
                info!("Mode hotkey held, backlight mode is now {:?}", backlight.mode());
                EventRoute::Consumed
            }
            KeyEventKind::LongPress => {
                backlight.on_key_press(event.row, event.col);
                EventRoute::Forward
            }
            KeyEventKind::Repeat if is_hotkey && self.switching => EventRoute::Consumed,
            KeyEventKind::Repeat => EventRoute::Forward,
            KeyEventKind::Release => {
                if is_hotkey {
                    self.switching = false;
                }
                backlight.on_key_release(event.row, event.col);
                EventRoute::Forward
            }
        }
    }

    /// Route every queued event, handing the forwarded ones to `sink`. Returns the number forwarded.
    pub fn drain<D: LedDriver>(
        &mut self,
        consumer: &mut EventConsumer<'_>,
        backlight: &mut Backlight<'_, D>,
        mut sink: impl FnMut(KeyEvent),
    ) -> usize {
        let mut forwarded = 0;
        while let Some(event) = consumer.pop() {
            if self.route(&event, backlight) == EventRoute::Forward {
                sink(event);
                forwarded += 1;
            }
        }
        forwarded
    }

    /// `true` while the hotkey is held after a mode switch
    pub fn is_switching(&self) -> bool {
        self.switching
    }
}
