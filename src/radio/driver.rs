//! Si4432 driver
//!
//! Owns the transport and the one operating-mode state machine. All
//! register traffic for the radio flows through this type; interrupt
//! handlers and main-line code share it under the crate's
//! critical-section policy, never by copying state.

use embedded_hal::delay::DelayNs;

use super::io::RegisterIo;
use super::profile::{
    RadioConfig, CARRIER_434M75, GPIO_DIRECT, RX_SLOW_PACKET, TX_DIRECT_TONE, TX_SLOW_PACKET,
};
use super::registers::{
    device_status, interrupt_enable1, interrupt_status1, interrupt_status2, operating_mode1,
    operating_mode2, por_control, Register, DEVICE_TYPE_CODE, REVISION_B1,
};
use crate::config::{RESET_SETTLE_MS, TX_FIFO_SIZE};
use crate::types::{Error, RadioState};

/// Snapshot of both interrupt status registers
///
/// Reading the pair releases the chip's nIRQ line, so one snapshot is
/// taken per interrupt and queried through these accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptStatus {
    /// Interrupt status 1 (0x03)
    pub status1: u8,
    /// Interrupt status 2 (0x04)
    pub status2: u8,
}

impl InterruptStatus {
    /// Packet transmission completed
    #[must_use]
    pub const fn packet_sent(self) -> bool {
        self.status1 & interrupt_status1::IPKSENT != 0
    }

    /// Valid packet received
    #[must_use]
    pub const fn packet_valid(self) -> bool {
        self.status1 & interrupt_status1::IPKVALID != 0
    }

    /// CRC error on a received packet
    #[must_use]
    pub const fn crc_error(self) -> bool {
        self.status1 & interrupt_status1::ICRCERROR != 0
    }

    /// Power-on reset completed
    #[must_use]
    pub const fn power_on_reset(self) -> bool {
        self.status2 & interrupt_status2::IPOR != 0
    }

    /// Crystal oscillator running
    #[must_use]
    pub const fn chip_ready(self) -> bool {
        self.status2 & interrupt_status2::ICHIPRDY != 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for InterruptStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "is1={:#04x} is2={:#04x}", self.status1, self.status2);
    }
}

/// Si4432 radio driver
pub struct Si4432<IO> {
    io: IO,
    state: RadioState,
}

impl<IO: RegisterIo> Si4432<IO> {
    /// Wrap a register transport; the radio is assumed unconfigured
    pub const fn new(io: IO) -> Self {
        Self {
            io,
            state: RadioState::Idle,
        }
    }

    /// Release the transport
    pub fn free(self) -> IO {
        self.io
    }

    /// Last commanded operating state
    #[must_use]
    pub const fn state(&self) -> RadioState {
        self.state
    }

    /// Software-reset the chip and wait for it to come back
    ///
    /// There is a chicken-and-egg problem here: the nIRQ line stays low
    /// until the status registers are read, but the chip cannot answer
    /// SPI reads until the reset completes. So this waits a fixed
    /// settling time (well past the data sheet maximum) instead of
    /// polling, then reads each status register exactly once.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure; [`Error::PowerOnReset`] if
    /// the chip came back without the POR flag set.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.io
            .write(Register::OperatingMode1, operating_mode1::SWRES)?;
        delay.delay_ms(RESET_SETTLE_MS);
        let status = self.read_interrupt_status()?;
        self.set_state(RadioState::Ready)?;
        if !status.power_on_reset() {
            return Err(Error::PowerOnReset);
        }
        Ok(())
    }

    /// Verify the chip answers with the expected identity
    ///
    /// Retry and halt policy belongs to the caller.
    ///
    /// # Errors
    ///
    /// [`Error::IdentityMismatch`] carrying the values actually read.
    pub fn check_identity(&mut self) -> Result<(), Error> {
        let device_type = self.io.read(Register::DeviceType)?;
        let version = self.io.read(Register::VersionCode)?;
        if device_type != DEVICE_TYPE_CODE || version != REVISION_B1 {
            return Err(Error::IdentityMismatch {
                device_type,
                version,
            });
        }
        Ok(())
    }

    /// Apply every register write in a profile, in order
    ///
    /// Idempotent; does not touch the operating state.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn apply_config(&mut self, config: &RadioConfig) -> Result<(), Error> {
        for &(reg, value) in config.writes {
            self.io.write(reg, value)?;
        }
        Ok(())
    }

    /// Route the GPIO pins for direct-mode transmission
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn configure_gpio(&mut self) -> Result<(), Error> {
        self.apply_config(&GPIO_DIRECT)
    }

    /// Program the carrier frequency and crystal load
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn set_frequency(&mut self) -> Result<(), Error> {
        self.apply_config(&CARRIER_434M75)
    }

    /// Command an operating-mode transition
    ///
    /// Leaving a transmit or receive state always clears the enable
    /// bits before the target state's bits are asserted, so the chip
    /// never sees overlapping tx/rx commands. Transmit states apply
    /// their modem profile first.
    ///
    /// # Errors
    ///
    /// [`Error::NotImplemented`] for `Shutdown` (needs the external
    /// shutdown pin), `Tune`, and `RecvDirect`; [`Error::Transport`]
    /// on bus failure.
    pub fn set_state(&mut self, target: RadioState) -> Result<(), Error> {
        match target {
            RadioState::Shutdown | RadioState::Tune | RadioState::RecvDirect => {
                return Err(Error::NotImplemented(target));
            }
            RadioState::Idle
            | RadioState::Standby
            | RadioState::Sleep
            | RadioState::Sensor
            | RadioState::Ready => {
                self.io
                    .write(Register::OperatingMode1, operating_mode1::XTON)?;
                self.io.write(Register::OperatingMode2, 0x00)?;
            }
            RadioState::XmitDirect => {
                self.disable_active_chain()?;
                self.apply_config(&TX_DIRECT_TONE)?;
                self.io.write(
                    Register::OperatingMode1,
                    operating_mode1::TXON | operating_mode1::XTON,
                )?;
                self.io.write(Register::OperatingMode2, 0x00)?;
            }
            RadioState::XmitPacket => {
                self.disable_active_chain()?;
                self.apply_config(&TX_SLOW_PACKET)?;
                self.io.write(
                    Register::OperatingMode1,
                    operating_mode1::TXON | operating_mode1::XTON,
                )?;
            }
            RadioState::RecvPacket => {
                self.disable_active_chain()?;
                self.apply_config(&RX_SLOW_PACKET)?;
                self.io.write(
                    Register::OperatingMode1,
                    operating_mode1::RXON | operating_mode1::XTON,
                )?;
            }
        }
        self.state = target;
        Ok(())
    }

    /// Drop back to ready mode before switching tx/rx chains
    fn disable_active_chain(&mut self) -> Result<(), Error> {
        if self.state.is_transmit() || self.state.is_receive() {
            self.io
                .write(Register::OperatingMode1, operating_mode1::XTON)?;
        }
        Ok(())
    }

    /// Stage a packet in the TX FIFO and arm the packet-sent interrupt
    ///
    /// Clears the FIFO, writes the length and payload, then enables
    /// only the packet-sent interrupt and drains any stale status so
    /// the next nIRQ edge is the completion.
    ///
    /// # Errors
    ///
    /// [`Error::PayloadTooLarge`] before any register write if `data`
    /// exceeds the 64-byte FIFO; [`Error::Transport`] on bus failure.
    pub fn load_packet(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() > TX_FIFO_SIZE {
            return Err(Error::PayloadTooLarge(data.len()));
        }
        self.io
            .write(Register::OperatingMode2, operating_mode2::FFCLRTX)?;
        self.io.write(Register::OperatingMode2, 0x00)?;
        #[allow(clippy::cast_possible_truncation)]
        self.io
            .write(Register::PacketLength, data.len() as u8)?;
        self.io.write_burst(Register::FifoAccess, data)?;
        self.io.write(Register::PreambleLength, 8)?;
        self.io
            .write(Register::InterruptEnable1, interrupt_enable1::ENPKSENT)?;
        self.io.write(Register::InterruptEnable2, 0x00)?;
        self.read_interrupt_status()?;
        Ok(())
    }

    /// Read both interrupt status registers
    ///
    /// The read clears the chip's interrupt latch and releases nIRQ.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error> {
        let status1 = self.io.read(Register::InterruptStatus1)?;
        let status2 = self.io.read(Register::InterruptStatus2)?;
        Ok(InterruptStatus { status1, status2 })
    }

    /// Raw device status register (FIFO flags, chip power state)
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn device_status(&mut self) -> Result<u8, Error> {
        self.io.read(Register::DeviceStatus)
    }

    /// EZMAC packet-handler status register
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn ezmac_status(&mut self) -> Result<u8, Error> {
        self.io.read(Register::EzmacStatus)
    }

    /// Operating state as the chip itself reports it
    ///
    /// Decoded from the internal power-state field; useful as a
    /// cross-check against the commanded [`state`](Self::state).
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn power_state(&mut self) -> Result<RadioState, Error> {
        let raw = self.io.read(Register::CrystalOscillatorPorControl)?;
        let state = match raw & por_control::POWER_STATE_MASK {
            por_control::POWER_STATE_READY => RadioState::Ready,
            por_control::POWER_STATE_TX => {
                if self.state == RadioState::XmitPacket {
                    RadioState::XmitPacket
                } else {
                    RadioState::XmitDirect
                }
            }
            por_control::POWER_STATE_TUNE => RadioState::Tune,
            por_control::POWER_STATE_RX => RadioState::RecvPacket,
            _ => RadioState::Idle,
        };
        Ok(state)
    }

    /// Chip power state from the device status register
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on bus failure.
    pub fn chip_power_state(&mut self) -> Result<RadioState, Error> {
        let status = self.device_status()?;
        let state = match status & device_status::CPS_MASK {
            device_status::CPS_TX => {
                if self.state == RadioState::XmitPacket {
                    RadioState::XmitPacket
                } else {
                    RadioState::XmitDirect
                }
            }
            device_status::CPS_RX => RadioState::RecvPacket,
            _ => RadioState::Ready,
        };
        Ok(state)
    }
}
