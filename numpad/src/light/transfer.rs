use core::sync::atomic::{AtomicBool, Ordering};

use super::buffer::LedColorBuffer;
use super::encoder::{TransferBuffer, encode_frame};

/// Hardware that shifts an encoded frame out to the strip, typically a PWM timer fed by DMA.
pub trait LedDriver {
    /// Start streaming `codes` to the data line and return immediately.
    ///
    /// `codes` stays untouched until [`LedTransfer::on_transfer_complete`] is called.
    fn start_transfer(&mut self, codes: &[u16]);

    /// Stop the timer and the DMA stream after the last code went out
    fn stop_transfer(&mut self);
}

/// Set while a frame is on the wire.
///
/// The request path sets it, the transfer-complete interrupt clears it. It can live in a `static` so
/// that an interrupt handler without access to the [`LedTransfer`] can release it. In that case the
/// next accepted [`LedTransfer::request_update`] calls [`LedDriver::stop_transfer`] before starting.
pub struct BusyFlag(AtomicBool);

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the transfer as done, called from the transfer-complete interrupt
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    fn acquire(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Result of an update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateStatus {
    /// The frame was encoded and the transfer started
    Started,
    /// A transfer is in flight, nothing was done
    Busy,
}

/// Encodes frames and starts their transfer, at most one in flight.
pub struct LedTransfer<'a, D: LedDriver> {
    driver: D,
    busy: &'a BusyFlag,
    buffer: TransferBuffer,
    /// Started and not stopped yet
    started: bool,
}

impl<'a, D: LedDriver> LedTransfer<'a, D> {
    pub fn new(driver: D, busy: &'a BusyFlag) -> Self {
        Self {
            driver,
            busy,
            buffer: TransferBuffer::new(),
            started: false,
        }
    }

    /// Encode `colors` and start sending them, unless a previous frame is still on the wire.
    ///
    /// A busy request is dropped, not queued: the next tick requests again with fresher colors.
    pub fn request_update(&mut self, colors: &LedColorBuffer) -> UpdateStatus {
        if self.busy.is_busy() {
            trace!("LED transfer in flight, skipping update");
            return UpdateStatus::Busy;
        }
        if self.started {
            // Released through the shared flag only
            self.driver.stop_transfer();
        }
        self.busy.acquire();
        encode_frame(colors, &mut self.buffer);
        self.driver.start_transfer(self.buffer.as_slice());
        self.started = true;
        UpdateStatus::Started
    }

    /// Transfer-complete handler: stop the hardware and accept new requests
    pub fn on_transfer_complete(&mut self) {
        if self.started {
            self.driver.stop_transfer();
            self.started = false;
        }
        self.busy.release();
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Codes of the last accepted frame
    pub fn frame(&self) -> &TransferBuffer {
        &self.buffer
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
