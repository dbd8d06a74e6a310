//! PN Sequence Tests
//!
//! Maximal-length properties of the Galois LFSR for several register
//! widths.
//! Run with: cargo test --no-default-features --features std --test msequence_tests

use std::collections::HashSet;

use beacon_firmware::msequence::{PnSequence, RegisterWidth};

fn one_period(width: RegisterWidth) -> Vec<bool> {
    let mut pn = PnSequence::new(width, 1);
    let len = width.sequence_length() as usize;
    (0..len).map(|_| pn.tick()).collect()
}

/// Every nonzero n-bit window appears exactly once per period (cyclic),
/// which is equivalent to the register visiting every nonzero state.
fn assert_maximal_length(width: RegisterWidth) {
    let n = width.bits() as usize;
    let len = width.sequence_length() as usize;
    let chips = one_period(width);

    let mut windows: HashSet<u16> = HashSet::new();
    for start in 0..len {
        let mut window: u16 = 0;
        for offset in 0..n {
            window = (window << 1) | u16::from(chips[(start + offset) % len]);
        }
        assert_ne!(window, 0, "all-zero window in m-sequence");
        assert!(windows.insert(window), "repeated window {window:#x}");
    }
    assert_eq!(windows.len(), len);
}

#[test]
fn width3_is_maximal_length() {
    assert_maximal_length(RegisterWidth::W3);
}

#[test]
fn width4_is_maximal_length() {
    assert_maximal_length(RegisterWidth::W4);
}

#[test]
fn width8_is_maximal_length() {
    assert_maximal_length(RegisterWidth::W8);
}

#[test]
fn period_is_exactly_two_to_n_minus_one() {
    for width in [RegisterWidth::W3, RegisterWidth::W4, RegisterWidth::W8] {
        let len = width.sequence_length() as usize;
        let mut pn = PnSequence::new(width, 2);
        let first: Vec<bool> = (0..len).map(|_| pn.tick()).collect();
        assert_eq!(pn.periods_sent(), 1);
        let second: Vec<bool> = (0..len).map(|_| pn.tick()).collect();
        assert_eq!(first, second, "sequence did not repeat at {len} chips");
        assert_eq!(pn.periods_sent(), 2);
        // no shorter cycle: a proper prefix rotation never matches
        for shift in 1..len {
            let rotated: Vec<bool> = (0..len).map(|i| first[(i + shift) % len]).collect();
            assert_ne!(first, rotated, "shorter cycle of {shift} chips");
        }
    }
}

#[test]
fn balanced_ones_count() {
    for width in [RegisterWidth::W3, RegisterWidth::W4, RegisterWidth::W8] {
        let chips = one_period(width);
        let ones = chips.iter().filter(|&&c| c).count();
        assert_eq!(ones, (chips.len() + 1) / 2);
    }
}

#[test]
fn done_after_configured_periods() {
    let mut pn = PnSequence::new(RegisterWidth::W3, 4);
    let mut ticks = 0;
    while !pn.is_done() {
        pn.tick();
        ticks += 1;
        assert!(ticks <= 28, "never reached the period target");
    }
    assert_eq!(ticks, 28);
}

#[test]
fn restart_resets_period_count() {
    let mut pn = PnSequence::new(RegisterWidth::W4, 1);
    for _ in 0..15 {
        pn.tick();
    }
    assert!(pn.is_done());
    pn.restart();
    assert!(!pn.is_done());
    assert_eq!(pn.periods_sent(), 0);
}
