//! SPI register IO
//!
//! The single seam between the driver and the hardware. One SPI
//! transaction per call: chip select low, address byte (top bit set for
//! writes), data bytes, chip select high. Chip-select timing is owned by
//! the [`SpiDevice`] implementation.

use embedded_hal::spi::{Operation, SpiDevice};

use super::registers::Register;
use crate::types::Error;

/// Top bit of the address byte selects a write transaction
pub const WRITE_BIT: u8 = 0x80;

/// Register-level transport for the radio
///
/// Implementations map their bus errors to [`Error::Transport`]; the
/// driver never sees transport detail beyond that.
pub trait RegisterIo {
    /// Read one register
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the bus transaction fails.
    fn read(&mut self, reg: Register) -> Result<u8, Error>;

    /// Write one register
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the bus transaction fails.
    fn write(&mut self, reg: Register, value: u8) -> Result<(), Error>;

    /// Burst-read consecutive bytes starting at `reg`
    ///
    /// Reading [`Register::FifoAccess`] drains the RX FIFO instead of
    /// advancing the address.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the bus transaction fails.
    fn read_burst(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), Error>;

    /// Burst-write consecutive bytes starting at `reg`
    ///
    /// Writing [`Register::FifoAccess`] fills the TX FIFO instead of
    /// advancing the address.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the bus transaction fails.
    fn write_burst(&mut self, reg: Register, data: &[u8]) -> Result<(), Error>;
}

/// [`RegisterIo`] over an `embedded-hal` SPI device
pub struct SpiRegisterIo<SPI> {
    spi: SPI,
}

impl<SPI> SpiRegisterIo<SPI> {
    /// Wrap an SPI device whose chip select is dedicated to the radio
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the SPI device
    pub fn free(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> RegisterIo for SpiRegisterIo<SPI> {
    fn read(&mut self, reg: Register) -> Result<u8, Error> {
        let mut frame = [reg.addr() & !WRITE_BIT, 0];
        self.spi
            .transfer_in_place(&mut frame)
            .map_err(|_| Error::Transport)?;
        Ok(frame[1])
    }

    fn write(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        let frame = [reg.addr() | WRITE_BIT, value];
        self.spi.write(&frame).map_err(|_| Error::Transport)
    }

    fn read_burst(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), Error> {
        let addr = [reg.addr() & !WRITE_BIT];
        self.spi
            .transaction(&mut [Operation::Write(&addr), Operation::Read(buf)])
            .map_err(|_| Error::Transport)
    }

    fn write_burst(&mut self, reg: Register, data: &[u8]) -> Result<(), Error> {
        let addr = [reg.addr() | WRITE_BIT];
        self.spi
            .transaction(&mut [Operation::Write(&addr), Operation::Write(data)])
            .map_err(|_| Error::Transport)
    }
}
