//! Shared types used across the beacon firmware
//!
//! Domain types for the radio operating-mode state machine, the Morse
//! keying output, and the crate-wide error taxonomy.

use core::fmt;

/// Si4432 operating mode
///
/// Mirrors the chip's operating-mode hierarchy from AN440. Only one
/// transmit or receive mode may be active at a time; the driver enforces
/// the transition ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RadioState {
    /// Register contents lost, lowest power (requires external shutdown pin)
    Shutdown,
    /// Registers retained, everything else off
    #[default]
    Idle,
    /// Standby: no active function, fastest wake to Ready
    Standby,
    /// Sleep: wake-up timer running
    Sleep,
    /// Sensor: low-battery and temperature monitors running
    Sensor,
    /// Crystal oscillator running, ready to transition fast
    Ready,
    /// PLL locked on channel, not radiating
    Tune,
    /// Transmitting from a GPIO-sourced bit stream (direct mode)
    XmitDirect,
    /// Transmitting from the FIFO with packet framing
    XmitPacket,
    /// Receiving raw bits to a GPIO (direct mode)
    RecvDirect,
    /// Receiving with packet framing
    RecvPacket,
}

impl RadioState {
    /// Check whether this state radiates RF
    #[must_use]
    pub const fn is_transmit(self) -> bool {
        matches!(self, Self::XmitDirect | Self::XmitPacket)
    }

    /// Check whether this state has the receiver chain enabled
    #[must_use]
    pub const fn is_receive(self) -> bool {
        matches!(self, Self::RecvDirect | Self::RecvPacket)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Shutdown => defmt::write!(f, "SHUTDOWN"),
            Self::Idle => defmt::write!(f, "IDLE"),
            Self::Standby => defmt::write!(f, "STANDBY"),
            Self::Sleep => defmt::write!(f, "SLEEP"),
            Self::Sensor => defmt::write!(f, "SENSOR"),
            Self::Ready => defmt::write!(f, "READY"),
            Self::Tune => defmt::write!(f, "TUNE"),
            Self::XmitDirect => defmt::write!(f, "XMIT-DIRECT"),
            Self::XmitPacket => defmt::write!(f, "XMIT-PACKET"),
            Self::RecvDirect => defmt::write!(f, "RECV-DIRECT"),
            Self::RecvPacket => defmt::write!(f, "RECV-PACKET"),
        }
    }
}

/// Morse key output for one element tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    /// Key down: carrier on
    On,
    /// Key up: inter-element or inter-word gap
    Off,
    /// Message exhausted; reported once, then the generator idles
    Done,
}

impl KeyState {
    /// Check if the transmitter should be keyed this tick
    #[must_use]
    pub const fn is_keyed(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for KeyState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::On => defmt::write!(f, "ON"),
            Self::Off => defmt::write!(f, "OFF"),
            Self::Done => defmt::write!(f, "DONE"),
        }
    }
}

/// Beacon firmware error taxonomy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// SPI or GPIO transaction failed
    Transport,
    /// Device type or version register did not match an Si4432 rev B1
    IdentityMismatch {
        /// Contents of the device-type register (expected 0x08)
        device_type: u8,
        /// Contents of the version-code register (expected 0x06)
        version: u8,
    },
    /// Reset completed without the power-on-reset interrupt flag set
    PowerOnReset,
    /// Packet payload exceeds the 64-byte transmit FIFO
    PayloadTooLarge(usize),
    /// Ring buffer has no free slot
    BufferFull,
    /// Ring buffer has no queued byte
    BufferEmpty,
    /// Character has no Morse encoding
    InvalidCharacter(char),
    /// Operating-mode transition is not supported by this firmware
    NotImplemented(RadioState),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "bus transport failure"),
            Self::IdentityMismatch {
                device_type,
                version,
            } => write!(
                f,
                "unexpected device identity: type {device_type:#04x}, version {version:#04x}"
            ),
            Self::PowerOnReset => write!(f, "power-on-reset flag missing after reset"),
            Self::PayloadTooLarge(len) => write!(f, "payload of {len} bytes exceeds TX FIFO"),
            Self::BufferFull => write!(f, "ring buffer full"),
            Self::BufferEmpty => write!(f, "ring buffer empty"),
            Self::InvalidCharacter(c) => write!(f, "no Morse encoding for {c:?}"),
            Self::NotImplemented(state) => write!(f, "transition to {state:?} not implemented"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Transport => defmt::write!(f, "bus transport failure"),
            Self::IdentityMismatch {
                device_type,
                version,
            } => defmt::write!(f, "identity mismatch: type {:#04x} ver {:#04x}", device_type, version),
            Self::PowerOnReset => defmt::write!(f, "POR flag missing after reset"),
            Self::PayloadTooLarge(len) => defmt::write!(f, "payload {} bytes too large", len),
            Self::BufferFull => defmt::write!(f, "buffer full"),
            Self::BufferEmpty => defmt::write!(f, "buffer empty"),
            Self::InvalidCharacter(_) => defmt::write!(f, "invalid Morse character"),
            Self::NotImplemented(state) => defmt::write!(f, "{} not implemented", state),
        }
    }
}
