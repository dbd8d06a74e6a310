//! Beacon Orchestration Tests
//!
//! End-to-end sequencing across the three interrupt events, against
//! shared-handle mocks for the register bus and the modulation pin.
//! Run with: cargo test --no-default-features --features std --test beacon_tests

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use beacon_firmware::beacon::{Beacon, TickSource};
use beacon_firmware::msequence::RegisterWidth;
use beacon_firmware::radio::driver::Si4432;
use beacon_firmware::radio::io::RegisterIo;
use beacon_firmware::radio::registers::Register;
use beacon_firmware::types::{Error, KeyState, RadioState};

/// Register file shared between the beacon and the test, so interrupt
/// flags can be latched mid-scenario.
struct BusState {
    regs: [u8; 128],
    writes: Vec<(u8, u8)>,
}

impl Default for BusState {
    fn default() -> Self {
        Self {
            regs: [0; 128],
            writes: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
struct SharedBus(Rc<RefCell<BusState>>);

impl SharedBus {
    fn after_por() -> Self {
        let bus = Self::default();
        {
            let mut state = bus.0.borrow_mut();
            state.regs[Register::DeviceType.addr() as usize] = 0x08;
            state.regs[Register::VersionCode.addr() as usize] = 0x06;
            state.regs[Register::InterruptStatus2.addr() as usize] = 0x03;
        }
        bus
    }

    fn set_reg(&self, reg: Register, value: u8) {
        self.0.borrow_mut().regs[reg.addr() as usize] = value;
    }

    fn reg(&self, reg: Register) -> u8 {
        self.0.borrow().regs[reg.addr() as usize]
    }
}

impl RegisterIo for SharedBus {
    fn read(&mut self, reg: Register) -> Result<u8, Error> {
        Ok(self.0.borrow().regs[reg.addr() as usize])
    }

    fn write(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        let mut state = self.0.borrow_mut();
        state.regs[reg.addr() as usize] = value;
        state.writes.push((reg.addr(), value));
        Ok(())
    }

    fn read_burst(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), Error> {
        buf.fill(self.0.borrow().regs[reg.addr() as usize]);
        Ok(())
    }

    fn write_burst(&mut self, _reg: Register, _data: &[u8]) -> Result<(), Error> {
        Ok(())
    }
}

/// Modulation data pin recording every commanded level
#[derive(Clone, Default)]
struct SharedPin(Rc<RefCell<Vec<bool>>>);

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().push(true);
        Ok(())
    }
}

struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn beacon_under_test() -> (Beacon<SharedBus, SharedPin>, SharedBus, SharedPin) {
    let bus = SharedBus::after_por();
    let pin = SharedPin::default();
    let mut beacon = Beacon::new(Si4432::new(bus.clone()), pin.clone());
    beacon.bring_up(&mut NoopDelay).unwrap();
    (beacon, bus, pin)
}

#[test]
fn bring_up_ends_configured_and_ready() {
    let (mut beacon, bus, _pin) = beacon_under_test();
    assert_eq!(beacon.radio().state(), RadioState::Ready);
    assert_eq!(beacon.source(), TickSource::Idle);
    // carrier programmed for the 430 MHz band
    assert_eq!(bus.reg(Register::FrequencyBand), 0x53);
    assert_eq!(bus.reg(Register::NominalCarrierFrequency1), 0x76);
    // direct-mode GPIO routing in place
    assert_eq!(bus.reg(Register::GpioConfiguration0), 0x0F);
    assert_eq!(bus.reg(Register::GpioConfiguration1), 0x10);
    // packet framing applied
    assert_eq!(bus.reg(Register::PacketLength), 0x40);
    assert_eq!(bus.reg(Register::SyncWord3), 0x2D);
}

#[test]
fn bring_up_fails_on_wrong_silicon() {
    let bus = SharedBus::after_por();
    bus.set_reg(Register::VersionCode, 0x04);
    let mut beacon = Beacon::new(Si4432::new(bus), SharedPin::default());
    assert_eq!(
        beacon.bring_up(&mut NoopDelay),
        Err(Error::IdentityMismatch {
            device_type: 0x08,
            version: 0x04,
        })
    );
}

#[test]
fn tick_period_follows_the_active_source() {
    let (mut beacon, _bus, _pin) = beacon_under_test();
    assert_eq!(beacon.tick_period(), None);
    beacon.start_morse("K").unwrap();
    assert_eq!(beacon.tick_period(), Some(3277));
    beacon.stop().unwrap();
    beacon.start_pn(RegisterWidth::W7, 4).unwrap();
    assert_eq!(beacon.tick_period(), Some(8));
    beacon.stop().unwrap();
    assert_eq!(beacon.tick_period(), None);
}

#[test]
fn packet_send_completes_on_packet_sent_interrupt() {
    let (mut beacon, bus, _pin) = beacon_under_test();
    beacon.send_packet(b"AD0YX BEACON").unwrap();
    assert_eq!(beacon.radio().state(), RadioState::XmitPacket);

    bus.set_reg(Register::InterruptStatus1, 0x04); // ipksent
    bus.set_reg(Register::InterruptStatus2, 0x00);
    let status = beacon.on_radio_irq().unwrap();
    assert!(status.packet_sent());
    assert_eq!(beacon.radio().state(), RadioState::Ready);
    assert_eq!(beacon.source(), TickSource::Idle);
}

#[test]
fn chip_ready_interrupt_does_not_stop_a_transmission() {
    let (mut beacon, bus, _pin) = beacon_under_test();
    beacon.send_packet(b"HI").unwrap();

    bus.set_reg(Register::InterruptStatus1, 0x00);
    bus.set_reg(Register::InterruptStatus2, 0x02); // ichiprdy only
    let status = beacon.on_radio_irq().unwrap();
    assert!(status.chip_ready());
    assert!(!status.packet_sent());
    assert_eq!(beacon.radio().state(), RadioState::XmitPacket);
}

#[test]
fn morse_stop_takes_two_ticks_for_the_pa_ramp() {
    let (mut beacon, _bus, _pin) = beacon_under_test();
    beacon.start_morse("E").unwrap();
    assert_eq!(beacon.radio().state(), RadioState::XmitDirect);

    // E is a single dot: gap, gap, key, gap
    let expected = [KeyState::Off, KeyState::Off, KeyState::On, KeyState::Off];
    for (i, want) in expected.iter().enumerate() {
        beacon.on_tick().unwrap();
        assert_eq!(beacon.key(), *want, "tick {}", i + 1);
        assert_eq!(beacon.source(), TickSource::Morse);
    }

    // first exhausted tick: radio to Ready, source stays armed
    beacon.on_tick().unwrap();
    assert_eq!(beacon.radio().state(), RadioState::Ready);
    assert_eq!(beacon.source(), TickSource::Morse);

    // second exhausted tick completes the stop
    beacon.on_tick().unwrap();
    assert_eq!(beacon.source(), TickSource::Idle);
    assert_eq!(beacon.key(), KeyState::Off);
}

#[test]
fn tone_synthesis_toggles_the_data_pin_every_fourth_clock() {
    let (mut beacon, _bus, pin) = beacon_under_test();
    beacon.start_tone().unwrap();
    assert_eq!(beacon.radio().state(), RadioState::XmitDirect);
    assert_eq!(beacon.key(), KeyState::On);

    for _ in 0..8 {
        beacon.on_tx_clock().unwrap();
    }
    assert_eq!(*pin.0.borrow(), vec![true, false]);

    beacon.stop().unwrap();
    let before = pin.0.borrow().len();
    for _ in 0..8 {
        beacon.on_tx_clock().unwrap();
    }
    assert_eq!(pin.0.borrow().len(), before, "key up but pin toggled");
}

#[test]
fn clock_edges_are_ignored_during_morse_gaps() {
    let (mut beacon, _bus, pin) = beacon_under_test();
    beacon.start_morse("E").unwrap();
    beacon.on_tick().unwrap(); // leading gap, key up
    let before = pin.0.borrow().len();
    for _ in 0..12 {
        beacon.on_tx_clock().unwrap();
    }
    assert_eq!(pin.0.borrow().len(), before);

    beacon.on_tick().unwrap();
    beacon.on_tick().unwrap(); // the dot, key down
    assert_eq!(beacon.key(), KeyState::On);
    let keyed = pin.0.borrow().len();
    for _ in 0..8 {
        beacon.on_tx_clock().unwrap();
    }
    assert_eq!(pin.0.borrow().len(), keyed + 2);
}

#[test]
fn pn_run_drives_the_pin_and_stops_itself() {
    let (mut beacon, _bus, pin) = beacon_under_test();
    beacon.start_pn(RegisterWidth::W3, 1).unwrap();
    assert_eq!(beacon.radio().state(), RadioState::XmitDirect);

    for _ in 0..7 {
        assert_eq!(beacon.source(), TickSource::PnSequence);
        beacon.on_tick().unwrap();
    }
    assert_eq!(beacon.source(), TickSource::Idle);
    assert_eq!(beacon.radio().state(), RadioState::Ready);

    // one chip per tick, maximal-length balance over the period
    let chips = pin.0.borrow().clone();
    assert_eq!(chips.len(), 7);
    assert_eq!(chips.iter().filter(|&&c| c).count(), 4);
}

#[test]
fn stop_orders_radio_down_before_clearing_the_source() {
    let (mut beacon, bus, _pin) = beacon_under_test();
    beacon.start_morse("SOS").unwrap();
    bus.0.borrow_mut().writes.clear();
    beacon.stop().unwrap();
    assert_eq!(beacon.source(), TickSource::Idle);
    // ready command reached the chip
    let state = bus.0.borrow();
    assert!(state.writes.contains(&(0x07, 0x01)));
    assert_eq!(state.regs[Register::OperatingMode1.addr() as usize], 0x01);
}
