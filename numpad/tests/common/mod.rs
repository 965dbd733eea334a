#![allow(dead_code)]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use numpad::channel::{EventConsumer, EventProducer};
use numpad::debounce::DebouncerTrait;
use numpad::event::KeyEvent;
use numpad::light::LedDriver;
use numpad::matrix::Matrix;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Physical state of a test key matrix, shared by the test pins.
pub struct TestKeys<const ROW: usize, const COL: usize> {
    pressed: RefCell<[[bool; COL]; ROW]>,
    strobed: Cell<Option<usize>>,
}

impl<const ROW: usize, const COL: usize> TestKeys<ROW, COL> {
    pub fn new() -> Self {
        Self {
            pressed: RefCell::new([[false; COL]; ROW]),
            strobed: Cell::new(None),
        }
    }

    pub fn press(&self, row: usize, col: usize) {
        self.pressed.borrow_mut()[row][col] = true;
    }

    pub fn release(&self, row: usize, col: usize) {
        self.pressed.borrow_mut()[row][col] = false;
    }

    pub fn press_all(&self) {
        *self.pressed.borrow_mut() = [[true; COL]; ROW];
    }

    /// Row currently driven high, if any
    pub fn strobed(&self) -> Option<usize> {
        self.strobed.get()
    }

    /// Sense pins and strobe pins wired to this matrix
    pub fn pins(&self) -> ([TestInputPin<'_, ROW, COL>; COL], [TestOutputPin<'_, ROW, COL>; ROW]) {
        (
            core::array::from_fn(|col| TestInputPin { keys: self, col }),
            core::array::from_fn(|row| TestOutputPin { keys: self, row }),
        )
    }
}

pub struct TestInputPin<'a, const ROW: usize, const COL: usize> {
    keys: &'a TestKeys<ROW, COL>,
    col: usize,
}

impl<const ROW: usize, const COL: usize> ErrorType for TestInputPin<'_, ROW, COL> {
    type Error = Infallible;
}

impl<const ROW: usize, const COL: usize> InputPin for TestInputPin<'_, ROW, COL> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self
            .keys
            .strobed
            .get()
            .is_some_and(|row| self.keys.pressed.borrow()[row][self.col]))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct TestOutputPin<'a, const ROW: usize, const COL: usize> {
    keys: &'a TestKeys<ROW, COL>,
    row: usize,
}

impl<const ROW: usize, const COL: usize> ErrorType for TestOutputPin<'_, ROW, COL> {
    type Error = Infallible;
}

impl<const ROW: usize, const COL: usize> OutputPin for TestOutputPin<'_, ROW, COL> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.keys.strobed.get() == Some(self.row) {
            self.keys.strobed.set(None);
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.keys.strobed.set(Some(self.row));
        Ok(())
    }
}

/// Scan once per millisecond over `from..=to`, calling `stimulus` before each scan.
/// Returns every event with the millisecond it was produced at.
pub fn scan_for<In, Out, D, const ROW: usize, const COL: usize>(
    matrix: &mut Matrix<In, Out, D, ROW, COL>,
    producer: &mut EventProducer<'_>,
    consumer: &mut EventConsumer<'_>,
    from: u64,
    to: u64,
    mut stimulus: impl FnMut(u64),
) -> Vec<(u64, KeyEvent)>
where
    In: InputPin,
    Out: OutputPin,
    D: DebouncerTrait<ROW, COL>,
{
    let mut events = Vec::new();
    for ms in from..=to {
        stimulus(ms);
        matrix.scan(Instant::from_millis(ms), producer);
        while let Some(event) = consumer.pop() {
            events.push((ms, event));
        }
    }
    events
}

/// LED driver recording every frame it was asked to send
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<u16>>,
    pub stopped: usize,
}

impl LedDriver for RecordingDriver {
    fn start_transfer(&mut self, codes: &[u16]) {
        self.frames.push(codes.to_vec());
    }

    fn stop_transfer(&mut self) {
        self.stopped += 1;
    }
}
