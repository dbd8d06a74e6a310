//! Beacon orchestration
//!
//! Ties the radio driver, the Morse and PN generators, and the three
//! interrupt events together: the generator timer tick, the radio's
//! nIRQ line, and the transmit-clock pin edge used for tone synthesis.
//! The hardware timer itself stays outside this crate; the board code
//! calls [`Beacon::on_tick`] from its compare-match handler and
//! [`Beacon::tick_period`] for the reload value.
//!
//! Stop sequencing is deliberate everywhere: the radio is commanded to
//! `Ready` *before* the driving event source is cleared, so a stale
//! interrupt can never restart a transmission that was just stopped.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{AUDIO_TICKS, DEFAULT_PN_PERIODS, DEFAULT_PN_WIDTH, MORSE_TICKS, MSEQ_TICKS};
use crate::morse::MorseGenerator;
use crate::msequence::{PnSequence, RegisterWidth};
use crate::radio::driver::{InterruptStatus, Si4432};
use crate::radio::io::RegisterIo;
use crate::radio::profile::PACKET_FRAMING;
use crate::types::{Error, KeyState, RadioState};

/// Which generator the timer tick drives
///
/// Closed enum dispatch; interrupt context never goes through a
/// function pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickSource {
    /// Nothing active
    #[default]
    Idle,
    /// Morse keying at [`MORSE_TICKS`] per unit
    Morse,
    /// PN chips at [`MSEQ_TICKS`] per chip
    PnSequence,
}

/// Beacon controller owning the radio and both generators
pub struct Beacon<IO, PIN> {
    radio: Si4432<IO>,
    morse: MorseGenerator,
    pn: PnSequence,
    data_pin: PIN,
    source: TickSource,
    /// Last Morse key level, read by the tone synthesizer
    key: KeyState,
    /// Morse finished; one more tick runs for the PA ramp-down
    morse_done: bool,
    /// Transmit-clock edges left in the current tone half-period
    audio_ticker: u8,
    data_level: bool,
}

impl<IO: RegisterIo, PIN: OutputPin> Beacon<IO, PIN> {
    /// Build a beacon around a radio and the direct-mode data pin
    pub fn new(radio: Si4432<IO>, data_pin: PIN) -> Self {
        Self {
            radio,
            morse: MorseGenerator::new(),
            pn: PnSequence::new(DEFAULT_PN_WIDTH, DEFAULT_PN_PERIODS),
            data_pin,
            source: TickSource::Idle,
            key: KeyState::Off,
            morse_done: false,
            audio_ticker: AUDIO_TICKS,
            data_level: false,
        }
    }

    /// Reset the radio and bring it to a configured `Ready` state
    ///
    /// # Errors
    ///
    /// Propagates [`Error::PowerOnReset`], [`Error::IdentityMismatch`],
    /// and transport failures.
    pub fn bring_up(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.radio.reset(delay)?;
        self.radio.check_identity()?;
        self.radio.set_frequency()?;
        self.radio.configure_gpio()?;
        self.radio.apply_config(&PACKET_FRAMING)?;
        Ok(())
    }

    /// Access the radio driver
    pub fn radio(&mut self) -> &mut Si4432<IO> {
        &mut self.radio
    }

    /// Active tick source
    #[must_use]
    pub const fn source(&self) -> TickSource {
        self.source
    }

    /// Last Morse key level
    #[must_use]
    pub const fn key(&self) -> KeyState {
        self.key
    }

    /// Timer reload value for the active source, in timer ticks
    #[must_use]
    pub const fn tick_period(&self) -> Option<u16> {
        match self.source {
            TickSource::Idle => None,
            TickSource::Morse => Some(MORSE_TICKS),
            TickSource::PnSequence => Some(MSEQ_TICKS),
        }
    }

    /// Start keying a Morse message in direct mode
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] / [`Error::BufferFull`] from the
    /// encoder before the radio is touched; transport failures after.
    pub fn start_morse(&mut self, message: &str) -> Result<(), Error> {
        critical_section::with(|_| {
            self.morse.start(message)?;
            self.radio.set_state(RadioState::XmitDirect)?;
            self.key = KeyState::Off;
            self.morse_done = false;
            self.audio_ticker = AUDIO_TICKS;
            self.source = TickSource::Morse;
            Ok(())
        })
    }

    /// Start transmitting a PN sequence in direct mode
    ///
    /// # Errors
    ///
    /// Transport failures from the state transition.
    pub fn start_pn(&mut self, width: RegisterWidth, periods: u16) -> Result<(), Error> {
        critical_section::with(|_| {
            self.pn = PnSequence::new(width, periods);
            self.radio.set_state(RadioState::XmitDirect)?;
            self.source = TickSource::PnSequence;
            Ok(())
        })
    }

    /// Hold the transmitter keyed for a continuous audio tone
    ///
    /// No generator runs; the tone comes from the transmit-clock
    /// handler while the key stays down. Call [`stop`](Self::stop) to
    /// end it.
    ///
    /// # Errors
    ///
    /// Transport failures from the state transition.
    pub fn start_tone(&mut self) -> Result<(), Error> {
        critical_section::with(|_| {
            self.radio.set_state(RadioState::XmitDirect)?;
            self.key = KeyState::On;
            self.audio_ticker = AUDIO_TICKS;
            self.source = TickSource::Idle;
            Ok(())
        })
    }

    /// Stage and transmit one packet
    ///
    /// Completion arrives on nIRQ as a packet-sent interrupt, which
    /// [`on_radio_irq`](Self::on_radio_irq) turns back into `Ready`.
    ///
    /// # Errors
    ///
    /// [`Error::PayloadTooLarge`] before any register write; transport
    /// failures after.
    pub fn send_packet(&mut self, data: &[u8]) -> Result<(), Error> {
        critical_section::with(|_| {
            self.radio.load_packet(data)?;
            self.radio.set_state(RadioState::XmitPacket)?;
            Ok(())
        })
    }

    /// Stop transmitting and clear the active source
    ///
    /// # Errors
    ///
    /// Transport failures from the state transition.
    pub fn stop(&mut self) -> Result<(), Error> {
        critical_section::with(|_| self.halt())
    }

    /// Radio to `Ready` first, then clear the event source
    fn halt(&mut self) -> Result<(), Error> {
        self.radio.set_state(RadioState::Ready)?;
        self.source = TickSource::Idle;
        self.key = KeyState::Off;
        self.morse_done = false;
        Ok(())
    }

    /// Timer compare-match handler: advance the active generator
    ///
    /// For Morse, the first exhausted tick sends the radio to `Ready`
    /// but leaves the source armed; the next tick completes the stop.
    /// The chip's power amplifier ramps down over tens of microseconds
    /// after the `Ready` command, and a second command after one more
    /// tick period is what reliably lands it there.
    ///
    /// # Errors
    ///
    /// Transport failures from state transitions or the data pin.
    pub fn on_tick(&mut self) -> Result<(), Error> {
        match self.source {
            TickSource::Idle => Ok(()),
            TickSource::Morse => {
                if self.morse_done {
                    return self.halt();
                }
                match self.morse.tick() {
                    KeyState::On => {
                        self.key = KeyState::On;
                    }
                    KeyState::Off => {
                        self.key = KeyState::Off;
                        self.set_data(false)?;
                    }
                    KeyState::Done => {
                        self.key = KeyState::Off;
                        self.set_data(false)?;
                        self.morse_done = true;
                        self.radio.set_state(RadioState::Ready)?;
                    }
                }
                Ok(())
            }
            TickSource::PnSequence => {
                let chip = self.pn.tick();
                self.set_data(chip)?;
                if self.pn.is_done() {
                    return self.halt();
                }
                Ok(())
            }
        }
    }

    /// nIRQ falling-edge handler
    ///
    /// Reads both status registers, which releases the line. POR and
    /// chip-ready flags are acknowledged and ignored; packet-sent stops
    /// the transmitter. The snapshot is returned for logging.
    ///
    /// # Errors
    ///
    /// Transport failures from the status read or the stop sequence.
    pub fn on_radio_irq(&mut self) -> Result<InterruptStatus, Error> {
        let status = self.radio.read_interrupt_status()?;
        if status.power_on_reset() || status.chip_ready() {
            return Ok(status);
        }
        if status.packet_sent() {
            self.halt()?;
        }
        Ok(status)
    }

    /// Transmit-clock edge handler: synthesize the audio tone
    ///
    /// While the key is down, every [`AUDIO_TICKS`]-th clock edge
    /// toggles the modulation data pin, shifting the GFSK carrier at an
    /// audible rate.
    ///
    /// # Errors
    ///
    /// Transport failures from the data pin.
    pub fn on_tx_clock(&mut self) -> Result<(), Error> {
        if self.key != KeyState::On {
            return Ok(());
        }
        self.audio_ticker -= 1;
        if self.audio_ticker == 0 {
            self.audio_ticker = AUDIO_TICKS;
            let level = !self.data_level;
            self.set_data(level)?;
        }
        Ok(())
    }

    fn set_data(&mut self, level: bool) -> Result<(), Error> {
        self.data_level = level;
        if level {
            self.data_pin.set_high().map_err(|_| Error::Transport)
        } else {
            self.data_pin.set_low().map_err(|_| Error::Transport)
        }
    }
}
