//! Morse code generation
//!
//! Encodes ASCII text into compact 8-bit element codes and keys them out
//! one time-unit per tick, suitable for driving the transmitter's OOK/FSK
//! data pin from a timer interrupt.
//!
//! # Encoding
//!
//! Each character is one byte: elements MSB-first with 0 for dot and 1 for
//! dash, padded out to 8 bits with the complement of the final element.
//! `C` (`-.-.`) encodes as `0b1010_1111`; `A` (`.-`) as `0b0100_0000`.
//! The generator consumes elements by shifting left while copying the old
//! LSB back in, so the register collapsing to all-zeros or all-ones marks
//! the end of the character without a separate counter. Those two bit
//! patterns never leave this module; the public API speaks [`KeyState`]
//! and `Result`.
//!
//! Element timing follows ITU-R: dot 1 unit, dash 3 units, 1 unit between
//! elements, 3 units between letters, 7 between words. Every letter's
//! first element carries its 2-unit leading gap in the key pattern, which
//! is what produces the 3-unit letter spacing.

use crate::config::MORSE_QUEUE_SIZE;
use crate::ring::RingBuffer;
use crate::types::{Error, KeyState};

/// Encoded letter meaning a 7-unit word gap
pub const WORD_GAP: u8 = 0xFF;

/// Shift register collapsed: character fully keyed
const ZEROS: u8 = 0x00;
const ONES: u8 = 0xFF;

/// Key timing patterns, MSB-first, one bit per time unit.
///
/// The trailing bits pad to the exhausted sentinel via the always-inject-1
/// key shift, so each pattern ends the moment its useful units are out.
const KEY_DOT: u8 = 0b1011_1111;
const KEY_DASH: u8 = 0b1110_1111;
const KEY_SPACE_DOT: u8 = 0b0010_1111;
const KEY_SPACE_DASH: u8 = 0b0011_1011;
const KEY_SPACE_WORD: u8 = 0b0000_1111;

/// Encode one ASCII character as an 8-bit element code
///
/// Accepts digits, letters (either case), common punctuation, and `' '`
/// which maps to [`WORD_GAP`].
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for anything unmapped.
pub fn encode(c: char) -> Result<u8, Error> {
    let code = match c.to_ascii_uppercase() {
        '0' => 0b1111_1000,
        '1' => 0b0111_1000,
        '2' => 0b0011_1000,
        '3' => 0b0001_1000,
        '4' => 0b0000_1000,
        '5' => 0b0000_0111,
        '6' => 0b1000_0111,
        '7' => 0b1100_0111,
        '8' => 0b1110_0111,
        '9' => 0b1111_0111,
        'A' => 0b0100_0000,
        'B' => 0b1000_1111,
        'C' => 0b1010_1111,
        'D' => 0b1001_1111,
        'E' => 0b0111_1111,
        'F' => 0b0010_1111,
        'G' => 0b1101_1111,
        'H' => 0b0000_1111,
        'I' => 0b0011_1111,
        'J' => 0b0111_0000,
        'K' => 0b1010_0000,
        'L' => 0b0100_1111,
        'M' => 0b1100_0000,
        'N' => 0b1011_1111,
        'O' => 0b1110_0000,
        'P' => 0b0110_1111,
        'Q' => 0b1101_0000,
        'R' => 0b0101_1111,
        'S' => 0b0001_1111,
        'T' => 0b1000_0000,
        'U' => 0b0010_0000,
        'V' => 0b0001_0000,
        'W' => 0b0110_0000,
        'X' => 0b1001_0000,
        'Y' => 0b1011_0000,
        'Z' => 0b1100_1111,
        '.' => 0b0101_0100,
        ',' => 0b1100_1100,
        '?' => 0b0011_0011,
        '\'' => 0b0111_1011,
        '!' => 0b1010_1100,
        '/' => 0b1001_0111,
        '(' => 0b1011_0111,
        ')' => 0b1011_0100,
        '&' => 0b0100_0111,
        ':' => 0b1110_0011,
        ';' => 0b1010_1011,
        '=' => 0b1000_1000,
        '+' => 0b0101_0111,
        '-' => 0b1000_0100,
        '_' => 0b0011_0100,
        '"' => 0b0100_1011,
        '$' => 0b0001_0010,
        '@' => 0b0110_1011,
        ' ' => WORD_GAP,
        other => return Err(Error::InvalidCharacter(other)),
    };
    Ok(code)
}

/// Morse keying state machine
///
/// Feed it encoded characters (via [`start`] or [`push`]) on the main
/// line, then call [`tick`] once per Morse time unit from the timer
/// interrupt.
///
/// [`start`]: MorseGenerator::start
/// [`push`]: MorseGenerator::push
/// [`tick`]: MorseGenerator::tick
#[derive(Debug)]
pub struct MorseGenerator {
    queue: RingBuffer<MORSE_QUEUE_SIZE>,
    /// Current letter's element pattern (the encoded byte)
    symbol_shift: u8,
    /// Current element's key timing pattern
    key_shift: u8,
    /// `Done` already reported for the current message
    finished: bool,
}

impl MorseGenerator {
    /// Create an idle generator with an empty message queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: RingBuffer::new(),
            symbol_shift: ZEROS,
            key_shift: ZEROS,
            finished: true,
        }
    }

    /// Validate a message, queue it, and arm the state machine
    ///
    /// Replaces any previously queued content. The message is encoded
    /// up front so an invalid character is reported before anything is
    /// keyed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if any character has no encoding;
    /// [`Error::BufferFull`] if the message exceeds the queue capacity.
    /// The generator stays idle on error.
    pub fn start(&mut self, message: &str) -> Result<(), Error> {
        let mut staged: RingBuffer<MORSE_QUEUE_SIZE> = RingBuffer::new();
        for c in message.chars() {
            staged.put(encode(c)?)?;
        }
        self.queue = staged;
        self.symbol_shift = ONES;
        self.key_shift = ONES;
        self.finished = false;
        Ok(())
    }

    /// Append one encoded character while the generator runs
    ///
    /// Producer-side streaming feed; safe against a consuming `tick` under
    /// the single-producer/single-consumer rule.
    ///
    /// # Errors
    ///
    /// [`Error::BufferFull`] when the queue has no room.
    pub fn push(&mut self, code: u8) -> Result<(), Error> {
        self.queue.put(code)?;
        self.finished = false;
        Ok(())
    }

    /// Encoded characters still queued
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance one Morse time unit
    ///
    /// Returns the key level for this unit, or [`KeyState::Done`] exactly
    /// once when the message is exhausted. After `Done` the generator
    /// idles at [`KeyState::Off`] until new content arrives.
    pub fn tick(&mut self) -> KeyState {
        if symbol_done(self.key_shift) {
            if symbol_done(self.symbol_shift) {
                match self.queue.get() {
                    Err(_) => {
                        self.symbol_shift = ZEROS;
                        self.key_shift = ZEROS;
                        if self.finished {
                            return KeyState::Off;
                        }
                        self.finished = true;
                        return KeyState::Done;
                    }
                    Ok(WORD_GAP) => self.key_shift = KEY_SPACE_WORD,
                    Ok(code) => {
                        self.symbol_shift = code;
                        self.load_element(true);
                    }
                }
            } else {
                self.load_element(false);
            }
        }
        self.shift_key()
    }

    /// Arm `key_shift` for the next element of the current letter
    ///
    /// The first element of a letter uses the leading-gap variant.
    fn load_element(&mut self, letter_start: bool) {
        let dash = self.symbol_shift & 0x80 != 0;
        self.key_shift = match (letter_start, dash) {
            (true, true) => KEY_SPACE_DASH,
            (true, false) => KEY_SPACE_DOT,
            (false, true) => KEY_DASH,
            (false, false) => KEY_DOT,
        };
        // consume the element: shift left, old LSB becomes the new LSB
        let lsb = self.symbol_shift & 0x01;
        self.symbol_shift = (self.symbol_shift << 1) | lsb;
    }

    /// Emit the key pattern's MSB and shift, always re-injecting 1
    fn shift_key(&mut self) -> KeyState {
        let keyed = self.key_shift & 0x80 != 0;
        self.key_shift = (self.key_shift << 1) | 0x01;
        if keyed {
            KeyState::On
        } else {
            KeyState::Off
        }
    }
}

impl Default for MorseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

const fn symbol_done(shift: u8) -> bool {
    shift == ZEROS || shift == ONES
}
