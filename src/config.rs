//! System configuration and hardware constants
//!
//! Compile-time constants for the beacon transmitter: timer tick divisors,
//! queue sizes, and the radio's fixed operating parameters. All tuning of
//! the beacon cadence happens here.

use crate::msequence::RegisterWidth;

/// Timer ticks per PN-sequence chip (at the 32768 Hz ACLK reference)
pub const MSEQ_TICKS: u16 = 8;

/// Timer ticks per Morse element unit (roughly 12 WPM keying)
pub const MORSE_TICKS: u16 = 3277;

/// Transmit-clock edges per half-period of the CW sidetone
pub const AUDIO_TICKS: u8 = 4;

/// Si4432 transmit FIFO capacity in bytes
pub const TX_FIFO_SIZE: usize = 64;

/// Morse code queue capacity (encoded characters, power of two)
pub const MORSE_QUEUE_SIZE: usize = 64;

/// Carrier frequency the profiles below are computed for, in Hz
pub const CARRIER_FREQ_HZ: u32 = 434_750_000;

/// Packet-mode over-the-air bit rate in bits per second
pub const PACKET_BIT_RATE: u32 = 625;

/// Direct-mode bit rate used for tone synthesis, in bits per second
pub const TONE_BIT_RATE: u32 = 4096;

/// Si4432 software-reset settling time in milliseconds
///
/// The part does not respond coherently on SPI until the reset completes,
/// so this is an open-loop wait rather than a status poll.
pub const RESET_SETTLE_MS: u32 = 10;

/// Default PN register width (127-chip sequence)
pub const DEFAULT_PN_WIDTH: RegisterWidth = RegisterWidth::W7;

/// Number of full PN periods transmitted per beacon cycle
pub const DEFAULT_PN_PERIODS: u16 = 4;

/// Default beacon identification message
pub const DEFAULT_MESSAGE: &str = "AD0YX BEACON";
