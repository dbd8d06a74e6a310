//! Lock-free single-producer/single-consumer ring buffer
//!
//! Fixed-capacity byte queue used between the main line (producer) and
//! interrupt handlers (consumer). The capacity must be a power of two:
//! the head and tail cursors free-run with wrapping arithmetic and are
//! masked down to array indices, so occupancy is always the plain cursor
//! difference and no modulo is ever taken.
//!
//! Safe concurrent use requires exactly one producer (calling [`put`] /
//! [`extend_from_slice`]) and one consumer (calling [`get`]); each cursor
//! is written by only one side.
//!
//! [`put`]: RingBuffer::put
//! [`get`]: RingBuffer::get
//! [`extend_from_slice`]: RingBuffer::extend_from_slice

use crate::types::Error;

/// Fixed-capacity SPSC byte queue
#[derive(Clone, Debug)]
pub struct RingBuffer<const N: usize> {
    buffer: [u8; N],
    /// Producer cursor, free-running
    head: usize,
    /// Consumer cursor, free-running
    tail: usize,
}

impl<const N: usize> RingBuffer<N> {
    const CAPACITY_IS_POWER_OF_TWO: () = assert!(N.is_power_of_two(), "capacity must be a power of two");

    /// Create an empty buffer
    ///
    /// Fails to compile when `N` is not a power of two.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_IS_POWER_OF_TWO;
        Self {
            buffer: [0; N],
            head: 0,
            tail: 0,
        }
    }

    /// Append one byte
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferFull`] and leaves the buffer unchanged when
    /// no slot is free.
    pub fn put(&mut self, byte: u8) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::BufferFull);
        }
        self.buffer[self.head & (N - 1)] = byte;
        self.head = self.head.wrapping_add(1);
        Ok(())
    }

    /// Remove and return the oldest byte
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferEmpty`] when nothing is queued.
    pub fn get(&mut self) -> Result<u8, Error> {
        if self.is_empty() {
            return Err(Error::BufferEmpty);
        }
        let byte = self.buffer[self.tail & (N - 1)];
        self.tail = self.tail.wrapping_add(1);
        Ok(byte)
    }

    /// Read the n-th queued byte (0 = oldest) without consuming it
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferEmpty`] when fewer than `n + 1` bytes are
    /// queued.
    pub fn peek(&self, n: usize) -> Result<u8, Error> {
        if n >= self.len() {
            return Err(Error::BufferEmpty);
        }
        Ok(self.buffer[self.tail.wrapping_add(n) & (N - 1)])
    }

    /// Append an entire slice, all-or-nothing
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferFull`] and leaves the buffer unchanged when
    /// the slice does not fit in the free space.
    pub fn extend_from_slice(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() > N - self.len() {
            return Err(Error::BufferFull);
        }
        for &byte in data {
            self.buffer[self.head & (N - 1)] = byte;
            self.head = self.head.wrapping_add(1);
        }
        Ok(())
    }

    /// Number of queued bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.head.wrapping_sub(self.tail)
    }

    /// Check whether nothing is queued
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Check whether no slot is free
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    /// Discard all queued bytes
    pub fn clear(&mut self) {
        self.tail = self.head;
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
