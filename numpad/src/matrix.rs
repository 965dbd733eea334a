use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::{InputPin, OutputPin};
use numpad_types::HidKeyCode;

use crate::channel::EventProducer;
use crate::config::MatrixConfig;
use crate::debounce::{DebouncerTrait, KeyState, elapsed};
use crate::event::KeyEvent;
use crate::keymap::KeyMap;

/// Period of the scan tick driving [`Matrix::run`]
pub const TICK_PERIOD: Duration = Duration::from_millis(1);

/// Matrix is the physical pcb layout of the key matrix.
///
/// Rows are strobe lines driven by output pins, columns are sense lines read from input pins.
/// A sense line reading high while its row is strobed means the key is closed.
pub struct Matrix<In: InputPin, Out: OutputPin, D: DebouncerTrait<ROW, COL>, const ROW: usize, const COL: usize> {
    /// Sense pins, one per column
    input_pins: [In; COL],
    /// Strobe pins, one per row
    output_pins: [Out; ROW],
    /// Keycode of each position
    keymap: KeyMap<ROW, COL>,
    /// Per-key state machines
    debouncer: D,
    /// Minimum time between two scans
    scan_interval: Duration,
    /// Time of the last scan
    last_scan: Option<Instant>,
}

impl<In: InputPin, Out: OutputPin, D: DebouncerTrait<ROW, COL>, const ROW: usize, const COL: usize>
    Matrix<In, Out, D, ROW, COL>
{
    /// Create a matrix from input and output pins.
    pub fn new(
        input_pins: [In; COL],
        output_pins: [Out; ROW],
        keymap: KeyMap<ROW, COL>,
        debouncer: D,
        config: &MatrixConfig,
    ) -> Self {
        Matrix {
            input_pins,
            output_pins,
            keymap,
            debouncer,
            scan_interval: config.scan_interval,
            last_scan: None,
        }
    }

    /// Scan the whole matrix once and push the resulting events.
    ///
    /// Call this on every tick. Returns the number of events pushed; events that don't fit in the
    /// queue are dropped.
    pub fn scan(&mut self, now: Instant, producer: &mut EventProducer<'_>) -> usize {
        if self.last_scan.is_some_and(|last| elapsed(last, now) < self.scan_interval) {
            return 0;
        }
        self.last_scan = Some(now);

        let mut pushed = 0;
        for (row_idx, out_pin) in self.output_pins.iter_mut().enumerate() {
            out_pin.set_high().ok();
            for (col_idx, in_pin) in self.input_pins.iter_mut().enumerate() {
                let keycode = self.keymap[row_idx][col_idx];
                if keycode == HidKeyCode::No {
                    continue;
                }

                let key_active = in_pin.is_high().ok().unwrap_or_default();
                let Some(kind) = self
                    .debouncer
                    .detect_change_with_debounce(row_idx, col_idx, key_active, now)
                else {
                    continue;
                };

                let event = KeyEvent::new(keycode, row_idx as u8, col_idx as u8, kind);
                debug!("Key event at {}ms: {:?}", now.as_millis(), event);
                match producer.push(event) {
                    Ok(()) => pushed += 1,
                    Err(dropped) => warn!("Event queue is full, dropping {:?}", dropped),
                }
            }
            // Pull it back to low
            out_pin.set_low().ok();
        }
        pushed
    }

    /// Run the scanner forever, one scan per [`TICK_PERIOD`].
    pub async fn run(&mut self, producer: &mut EventProducer<'_>) -> ! {
        info!("Start scanning {}x{} matrix", ROW, COL);
        let mut ticker = Ticker::every(TICK_PERIOD);
        loop {
            self.scan(Instant::now(), producer);
            ticker.next().await;
        }
    }

    /// State of the key at (row, col)
    pub fn key_state(&self, row: usize, col: usize) -> KeyState {
        self.debouncer.key_state(row, col)
    }

    pub fn keymap(&self) -> &KeyMap<ROW, COL> {
        &self.keymap
    }
}
