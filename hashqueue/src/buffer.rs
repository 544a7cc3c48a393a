//! Thread-safe buffer shared by producer and consumer threads.
//!
//! The buffer removes items in one of three orders chosen at construction:
//! FIFO, LIFO, or smallest-first (a min-heap). `get` blocks until an item
//! is available; `get_timeout` gives up after a deadline.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::collections::{RemovalEnd, Sequence};
use crate::errors::HashQueueError;

/// Products producers pick from when pretending to work
pub const PRODUCTS: [&str; 15] = [
    ":balloon:",
    ":cookie:",
    ":crystal_ball:",
    ":diving_mask:",
    ":flashlight:",
    ":gem:",
    ":gift:",
    ":kite:",
    ":party_popper:",
    ":postal_horn:",
    ":ribbon:",
    ":rocket:",
    ":teddy_bear:",
    ":thread:",
    ":yo-yo:",
];

/// Removal order of a [`SharedBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferKind {
    #[default]
    Fifo,
    Lifo,
    Heap,
}

impl BufferKind {
    pub const ALL: [BufferKind; 3] = [BufferKind::Fifo, BufferKind::Lifo, BufferKind::Heap];

    pub fn as_str(&self) -> &'static str {
        match self {
            BufferKind::Fifo => "fifo",
            BufferKind::Lifo => "lifo",
            BufferKind::Heap => "heap",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BufferKind {
    type Err = HashQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(BufferKind::Fifo),
            "lifo" => Ok(BufferKind::Lifo),
            "heap" => Ok(BufferKind::Heap),
            other => Err(HashQueueError::config_error(format!(
                "unknown queue type '{}', expected fifo, lifo or heap",
                other
            ))),
        }
    }
}

#[derive(Debug)]
enum Store<T> {
    Sequence(Sequence<T>),
    Heap(BinaryHeap<Reverse<T>>),
}

impl<T: Ord> Store<T> {
    fn push(&mut self, item: T) {
        match self {
            Store::Sequence(seq) => seq.enqueue(item),
            Store::Heap(heap) => heap.push(Reverse(item)),
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self {
            Store::Sequence(seq) => seq.dequeue(),
            Store::Heap(heap) => heap.pop().map(|Reverse(item)| item),
        }
    }

    fn len(&self) -> usize {
        match self {
            Store::Sequence(seq) => seq.len(),
            Store::Heap(heap) => heap.len(),
        }
    }
}

#[derive(Debug)]
struct Inner<T> {
    store: Mutex<Store<T>>,
    available: Condvar,
}

/// Cloneable handle to a blocking buffer
#[derive(Debug)]
pub struct SharedBuffer<T> {
    kind: BufferKind,
    inner: Arc<Inner<T>>,
}

impl<T> Clone for SharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Ord> SharedBuffer<T> {
    pub fn new(kind: BufferKind) -> Self {
        let store = match kind {
            BufferKind::Fifo => Store::Sequence(Sequence::new(RemovalEnd::Front)),
            BufferKind::Lifo => Store::Sequence(Sequence::new(RemovalEnd::Back)),
            BufferKind::Heap => Store::Heap(BinaryHeap::new()),
        };
        Self {
            kind,
            inner: Arc::new(Inner {
                store: Mutex::new(store),
                available: Condvar::new(),
            }),
        }
    }

    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    fn lock(&self) -> MutexGuard<'_, Store<T>> {
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn put(&self, item: T) {
        let mut store = self.lock();
        store.push(item);
        trace!("{} buffer now holds {} items", self.kind, store.len());
        drop(store);
        self.inner.available.notify_one();
    }

    /// Removes the next item, blocking until one is available
    pub fn get(&self) -> T {
        let mut store = self.lock();
        loop {
            if let Some(item) = store.pop() {
                return item;
            }
            store = self
                .inner
                .available
                .wait(store)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes the next item, or returns `None` once `timeout` elapses.
    /// A timeout too large to represent as a deadline blocks like `get`.
    pub fn get_timeout(&self, timeout: Duration) -> Option<T> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return Some(self.get());
        };
        let mut store = self.lock();
        loop {
            if let Some(item) = store.pop() {
                return Some(item);
            }
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let (guard, _) = self
                .inner
                .available
                .wait_timeout(store, remaining)
                .unwrap_or_else(PoisonError::into_inner);
            store = guard;
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Settings of the producer/consumer demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub kind: BufferKind,
    pub producers: usize,
    pub consumers: usize,
    pub producer_speed: u32,
    pub consumer_speed: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            kind: BufferKind::Fifo,
            producers: 3,
            consumers: 2,
            producer_speed: 1,
            consumer_speed: 1,
        }
    }
}

impl DemoSettings {
    /// Builds the buffer the demo would share between its threads
    pub fn build_buffer(&self) -> SharedBuffer<&'static str> {
        SharedBuffer::new(self.kind)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} buffer for {} producer(s) at speed {} and {} consumer(s) at speed {}, {} products",
            self.kind,
            self.producers,
            self.producer_speed,
            self.consumers,
            self.consumer_speed,
            PRODUCTS.len()
        )
    }
}
