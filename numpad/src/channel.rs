//! Bounded single-producer/single-consumer queue carrying key events from the tick context to the main loop.
//!
//! The scanner owns the [`EventProducer`] and pushes from the tick interrupt, the main loop owns the
//! [`EventConsumer`]. Both halves only touch their own index, so no critical section is needed.

use heapless::spsc::{Consumer, Producer, Queue};

use crate::MAX_PRESSED_KEYS;
use crate::event::KeyEvent;

/// Backing slots of the ring buffer, one slot is kept free to tell full from empty
const EVENT_QUEUE_SLOTS: usize = MAX_PRESSED_KEYS + 1;

/// Storage of the key event queue.
///
/// Split it once with [`EventQueue::split`] and hand the halves to the scanner and the main loop.
pub struct EventQueue {
    queue: Queue<KeyEvent, EVENT_QUEUE_SLOTS>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub const fn new() -> Self {
        Self { queue: Queue::new() }
    }

    pub fn split(&mut self) -> (EventProducer<'_>, EventConsumer<'_>) {
        let (producer, consumer) = self.queue.split();
        (EventProducer { inner: producer }, EventConsumer { inner: consumer })
    }
}

/// Writing half of the event queue
pub struct EventProducer<'a> {
    inner: Producer<'a, KeyEvent>,
}

impl EventProducer<'_> {
    /// Push an event without blocking.
    ///
    /// When the queue is full the event is handed back in `Err` and the queue is left unchanged.
    pub fn push(&mut self, event: KeyEvent) -> Result<(), KeyEvent> {
        if self.is_full() {
            return Err(event);
        }
        self.inner.enqueue(event)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_PRESSED_KEYS
    }

    pub const fn capacity(&self) -> usize {
        MAX_PRESSED_KEYS
    }
}

/// Reading half of the event queue
pub struct EventConsumer<'a> {
    inner: Consumer<'a, KeyEvent>,
}

impl EventConsumer<'_> {
    /// Remove and return the oldest event
    pub fn pop(&mut self) -> Option<KeyEvent> {
        self.inner.dequeue()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_PRESSED_KEYS
    }

    pub const fn capacity(&self) -> usize {
        MAX_PRESSED_KEYS
    }
}
