//! Radio Driver
//!
//! Register-level control of the Si4432 transceiver: the register map,
//! the SPI register IO seam, named configuration profiles, and the
//! operating-mode state machine.

pub mod driver;
pub mod io;
pub mod profile;
pub mod registers;
