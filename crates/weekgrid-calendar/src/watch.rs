//! Replay-latest broadcast.
//!
//! A `Watch` keeps the last published value and a list of subscriber
//! channels. Subscribing delivers the current value right away, then every
//! later `publish` delivers a fresh clone to each subscriber.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use parking_lot::Mutex;

struct Inner<T> {
    current: T,
    subscribers: Vec<Sender<T>>,
}

pub struct Watch<T: Clone> {
    inner: Mutex<Inner<T>>,
}

impl<T: Clone> Watch<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Register a subscriber. The current value is queued immediately.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        let mut inner = self.inner.lock();
        // Receiver is alive, cannot fail
        let _ = tx.send(inner.current.clone());
        inner.subscribers.push(tx);
        Subscription { rx }
    }

    /// Replace the current value and deliver it to every live subscriber.
    /// Returns how many subscribers received it.
    pub fn publish(&self, value: T) -> usize {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|tx| tx.send(value.clone()).is_ok());
        inner.current = value;
        inner.subscribers.len()
    }

    /// Clone of the last published value.
    pub fn current(&self) -> T {
        self.inner.lock().current.clone()
    }

    /// Subscribers registered as of the last publish or subscribe.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

impl<T: Clone + Default> Default for Watch<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving end of a `Watch`. Dropping it unsubscribes on the next publish.
///
/// The queue is unbounded: every publish enqueues a full clone until the
/// subscriber drains it. Consumers that only render the newest value should
/// poll with `latest()` regularly or drop the subscription when idle.
pub struct Subscription<T> {
    rx: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Next pending value, oldest first.
    pub fn try_next(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain everything pending and return only the newest value.
    pub fn latest(&self) -> Option<T> {
        let mut newest = None;
        while let Some(value) = self.try_next() {
            newest = Some(value);
        }
        newest
    }
}
