//! Si4432 Beacon Firmware Library
//!
//! This library provides the core functionality for a low-power FSK/GFSK
//! beacon transmitter built around the Silicon Labs Si4432 (EZRadioPRO)
//! transceiver. It drives the radio over SPI, generates Morse-keyed CW
//! identification and maximal-length PN sequences, and sequences packet
//! transmissions from interrupt context.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        Beacon Orchestrator (tick / nIRQ dispatch)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    GENERATOR LAYER                           │
//! │  Morse Keying  │  PN Sequences  │  Ring Buffer Queues        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     DRIVER LAYER                             │
//! │  Si4432 State Machine  │  Register Profiles  │  Register IO  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    HAL (embedded-hal)                        │
//! │           SpiDevice  │  OutputPin  │  DelayNs                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Single HAL seam**: all register traffic flows through one
//!   [`radio::io::RegisterIo`] implementation
//! - **Type-driven design**: operating states and key states are closed
//!   enums, never raw register bytes
//! - **No unsafe**: the crate forbids unsafe code entirely
//! - **Explicit error handling**: all fallible operations return `Result`;
//!   no sentinel values cross module boundaries
//! - **Interrupt-safe core**: generators are single-producer/single-consumer
//!   and run to completion inside a tick

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Radio Driver
///
/// Si4432 register map, SPI register IO, configuration profiles,
/// and the operating-mode state machine.
pub mod radio;

/// Morse Code Generation
///
/// Character encoding and the keying state machine.
pub mod morse;

/// PN Sequence Generation
///
/// Galois-form maximal-length sequence generator.
pub mod msequence;

/// Ring Buffer
///
/// Lock-free single-producer/single-consumer byte queue.
pub mod ring;

/// Beacon Orchestration
///
/// Ties generators, driver, and interrupt events together.
pub mod beacon;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::beacon::{Beacon, TickSource};
    pub use crate::config::*;
    pub use crate::morse::MorseGenerator;
    pub use crate::msequence::{PnSequence, RegisterWidth};
    pub use crate::radio::driver::Si4432;
    pub use crate::radio::io::RegisterIo;
    pub use crate::ring::RingBuffer;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;
    pub use embedded_hal::spi::SpiDevice;

    // Error handling
    pub use core::result::Result;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
