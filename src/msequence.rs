//! Maximal-length PN sequence generation
//!
//! A Galois-form linear feedback shift register producing m-sequences of
//! length `2^n - 1` for register widths 3 through 12. One chip is emitted
//! per tick; the generator counts completed periods so the beacon can
//! stop after a configured number of repetitions.
//!
//! The feedback polynomials are published primitive polynomials for each
//! width. They are required data: substituting a non-primitive polynomial
//! silently shortens the cycle, which is why the period is a tested
//! property rather than an assumption.

/// Supported shift-register widths
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterWidth {
    /// 7-chip sequence
    W3,
    /// 15-chip sequence
    W4,
    /// 31-chip sequence
    W5,
    /// 63-chip sequence
    W6,
    /// 127-chip sequence
    W7,
    /// 255-chip sequence
    W8,
    /// 1023-chip sequence
    W10,
    /// 4095-chip sequence
    W12,
}

impl RegisterWidth {
    /// Register width in bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::W3 => 3,
            Self::W4 => 4,
            Self::W5 => 5,
            Self::W6 => 6,
            Self::W7 => 7,
            Self::W8 => 8,
            Self::W10 => 10,
            Self::W12 => 12,
        }
    }

    /// Galois-form primitive feedback polynomial for this width
    #[must_use]
    pub const fn gpoly(self) -> u16 {
        match self {
            Self::W3 => 5,
            Self::W4 | Self::W5 => 9,
            Self::W6 => 33,
            Self::W7 => 65,
            Self::W8 => 113,
            Self::W10 => 129,
            Self::W12 => 2785,
        }
    }

    /// Sequence length in chips, `2^n - 1`
    #[must_use]
    pub const fn sequence_length(self) -> u16 {
        (1 << self.bits()) - 1
    }

    /// Register load value: the top bit alone
    #[must_use]
    pub const fn seed(self) -> u16 {
        1 << (self.bits() - 1)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RegisterWidth {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}-chip", self.sequence_length());
    }
}

/// Galois LFSR emitting one PN chip per tick
#[derive(Clone, Debug)]
pub struct PnSequence {
    width: RegisterWidth,
    state: u16,
    periods_sent: u16,
    periods_target: u16,
}

impl PnSequence {
    /// Create a generator that stops after `periods` full sequences
    #[must_use]
    pub const fn new(width: RegisterWidth, periods: u16) -> Self {
        Self {
            width,
            state: width.seed(),
            periods_sent: 0,
            periods_target: periods,
        }
    }

    /// Reload the seed and clear the period count
    pub fn restart(&mut self) {
        self.state = self.width.seed();
        self.periods_sent = 0;
    }

    /// Emit the next chip and advance the register
    ///
    /// The chip is the register's top bit before the shift. Keeps
    /// emitting past the period target; callers check [`is_done`].
    ///
    /// [`is_done`]: PnSequence::is_done
    pub fn tick(&mut self) -> bool {
        let chip = self.state & self.width.seed() != 0;
        self.state = galois_shift(self.state, self.width);
        if self.state & self.width.sequence_length() == self.width.seed() {
            self.periods_sent = self.periods_sent.saturating_add(1);
        }
        chip
    }

    /// Full periods emitted since the last restart
    #[must_use]
    pub const fn periods_sent(&self) -> u16 {
        self.periods_sent
    }

    /// Check whether the configured number of periods has been sent
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.periods_sent >= self.periods_target
    }
}

/// One Galois shift-register step
fn galois_shift(bits: u16, width: RegisterWidth) -> u16 {
    let carry = (bits & 0x01) << (width.bits() - 1);
    let next = if carry != 0 { bits ^ width.gpoly() } else { bits };
    carry + (next >> 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table() {
        assert_eq!(RegisterWidth::W3.sequence_length(), 7);
        assert_eq!(RegisterWidth::W7.sequence_length(), 127);
        assert_eq!(RegisterWidth::W12.sequence_length(), 4095);
        assert_eq!(RegisterWidth::W8.seed(), 0x80);
    }

    #[test]
    fn w3_sequence_repeats_after_seven_chips() {
        let mut pn = PnSequence::new(RegisterWidth::W3, 1);
        let first: [bool; 7] = core::array::from_fn(|_| pn.tick());
        assert!(pn.is_done());
        let second: [bool; 7] = core::array::from_fn(|_| pn.tick());
        assert_eq!(first, second);
    }

    #[test]
    fn balanced_chip_count() {
        // an m-sequence has one more 1 than 0 per period
        let mut pn = PnSequence::new(RegisterWidth::W7, 1);
        let ones = (0..127).filter(|_| pn.tick()).count();
        assert_eq!(ones, 64);
    }

    #[test]
    fn period_counter_tracks_repetitions() {
        let mut pn = PnSequence::new(RegisterWidth::W4, 3);
        for expected in 1..=3 {
            for _ in 0..15 {
                pn.tick();
            }
            assert_eq!(pn.periods_sent(), expected);
        }
        assert!(pn.is_done());
    }

    #[test]
    fn restart_reloads_seed() {
        let mut pn = PnSequence::new(RegisterWidth::W5, 1);
        let first: [bool; 5] = core::array::from_fn(|_| pn.tick());
        pn.restart();
        let again: [bool; 5] = core::array::from_fn(|_| pn.tick());
        assert_eq!(first, again);
        assert_eq!(pn.periods_sent(), 0);
    }
}
