//! Radio configuration profiles
//!
//! Named register write lists applied as a unit. The values come from
//! the SiLabs register calculator for a 434.75 MHz beacon: a 625 bps
//! GFSK packet profile and a 4096 bps direct-mode profile used for CW
//! tone synthesis. `POR_DEFAULTS` mirrors the chip's documented
//! power-on-reset image and exists for verification and for restoring a
//! known state without a full reset.

use super::registers::{
    data_access_control, gpio_function, modulation_control1, modulation_control2, tx_power,
    Register,
};

/// A named bundle of register writes
#[derive(Clone, Copy, Debug)]
pub struct RadioConfig {
    /// Profile name, for logs
    pub name: &'static str,
    /// Register/value pairs, applied in order
    pub writes: &'static [(Register, u8)],
}

/// Documented register image after power-on reset (AN440)
pub const POR_DEFAULTS: RadioConfig = RadioConfig {
    name: "por-defaults",
    writes: &[
        (Register::OperatingMode1, 0x01),
        (Register::OperatingMode2, 0x00),
        (Register::OscillatorLoadCapacitance, 0x7F),
        (Register::UcOutputClock, 0x06),
        (Register::GpioConfiguration0, 0x00),
        (Register::GpioConfiguration1, 0x00),
        (Register::GpioConfiguration2, 0x00),
        (Register::IoPortConfiguration, 0x00),
        (Register::AdcConfiguration, 0x00),
        (Register::AdcSensorAmpOffset, 0x00),
        (Register::TemperatureSensorCalibration, 0x20),
        (Register::TemperatureValueOffset, 0x00),
        (Register::WakeupTimerPeriod1, 0x03),
        (Register::WakeupTimerPeriod2, 0x00),
        (Register::WakeupTimerPeriod3, 0x00),
        (Register::LdcModeDuration, 0x01),
        (Register::LowBatteryDetectorThreshold, 0x14),
        (Register::IfFilterBandwidth, 0x01),
        (Register::AfcLoopGearshiftOverride, 0x44),
        (Register::AfcTimingControl, 0x0A),
        (Register::ClockRecoveryGearshiftOverride, 0x03),
        (Register::ClockRecoveryOversamplingRatio, 0x64),
        (Register::ClockRecoveryOffset2, 0x01),
        (Register::ClockRecoveryOffset1, 0x47),
        (Register::ClockRecoveryOffset0, 0xAE),
        (Register::ClockRecoveryTimingLoopGain1, 0x02),
        (Register::ClockRecoveryTimingLoopGain0, 0x8F),
        (Register::RssiThreshold, 0x1E),
        (Register::AfcLimit, 0x00),
        (Register::OokCounterValue1, 0x18),
        (Register::OokCounterValue2, 0xBC),
        (Register::SlicerPeakHold, 0x2C),
        (Register::DataAccessControl, 0x8D),
        (Register::HeaderControl1, 0x0C),
        (Register::HeaderControl2, 0x22),
        (Register::PreambleLength, 0x08),
        (Register::PreambleDetectionControl1, 0x2A),
        (Register::SyncWord3, 0x2D),
        (Register::SyncWord2, 0xD4),
        (Register::SyncWord1, 0x00),
        (Register::SyncWord0, 0x00),
        (Register::TransmitHeader3, 0x00),
        (Register::TransmitHeader2, 0x00),
        (Register::TransmitHeader1, 0x00),
        (Register::TransmitHeader0, 0x00),
        (Register::PacketLength, 0x00),
        (Register::CheckHeader3, 0x00),
        (Register::CheckHeader2, 0x00),
        (Register::CheckHeader1, 0x00),
        (Register::CheckHeader0, 0x00),
        (Register::HeaderEnable3, 0xFF),
        (Register::HeaderEnable2, 0xFF),
        (Register::HeaderEnable1, 0xFF),
        (Register::HeaderEnable0, 0xFF),
        (Register::Adc8Control, 0x10),
        (Register::ChannelFilterCoefficientAddress, 0x00),
        (Register::CrystalOscillatorPorControl, 0x04),
        (Register::AgcOverride1, 0x20),
        (Register::TxPower, 0x18),
        (Register::TxDataRate1, 0x0A),
        (Register::TxDataRate0, 0x3D),
        (Register::ModulationControl1, 0x0C),
        (Register::ModulationControl2, 0x00),
        (Register::FrequencyDeviation, 0x20),
        (Register::FrequencyOffset1, 0x00),
        (Register::FrequencyOffset2, 0x00),
        (Register::FrequencyBand, 0x75),
        (Register::NominalCarrierFrequency1, 0xBB),
        (Register::NominalCarrierFrequency0, 0x80),
        (Register::FrequencyHoppingChannel, 0x00),
        (Register::FrequencyHoppingStepSize, 0x00),
        (Register::TxFifoControl1, 0x37),
        (Register::TxFifoControl2, 0x04),
        (Register::RxFifoControl, 0x37),
    ],
};

/// Carrier setup: 434.75 MHz, 12.5 pF crystal load, no hopping
pub const CARRIER_434M75: RadioConfig = RadioConfig {
    name: "carrier-434.75",
    writes: &[
        (Register::OscillatorLoadCapacitance, 0x7F),
        (Register::FrequencyOffset1, 0x00),
        (Register::FrequencyOffset2, 0x00),
        // sbsel, band 19: 430-440 MHz
        (Register::FrequencyBand, 0x53),
        // fc = 0x76C0 = 30400
        (Register::NominalCarrierFrequency1, 0x76),
        (Register::NominalCarrierFrequency0, 0xC0),
        (Register::FrequencyHoppingStepSize, 0x00),
        (Register::FrequencyHoppingChannel, 0x00),
    ],
};

/// GPIO routing for direct mode: clock out on GPIO0, modulation data in
/// on GPIO1, receive data out on GPIO2
pub const GPIO_DIRECT: RadioConfig = RadioConfig {
    name: "gpio-direct",
    writes: &[
        (
            Register::GpioConfiguration0,
            gpio_function::OUTPUT_TXRX_DATA_CLOCK,
        ),
        (
            Register::GpioConfiguration1,
            gpio_function::INPUT_TX_DIRECT_MODULATION_DATA,
        ),
        (Register::GpioConfiguration2, gpio_function::OUTPUT_RX_DATA),
    ],
};

/// Direct-mode transmit modem: 4096 bps GFSK, 5 kHz deviation
///
/// Data rate 0x218E gives 4096.03 bps; the tone is synthesized by
/// toggling the GPIO1 data pin off the transmit clock.
pub const TX_DIRECT_TONE: RadioConfig = RadioConfig {
    name: "tx-direct-tone",
    writes: &[
        (Register::TxPower, tx_power::TXPOW_MAX | tx_power::LNA_SW),
        (Register::TxDataRate1, 0x21),
        (Register::TxDataRate0, 0x8E),
        (
            Register::ModulationControl1,
            modulation_control1::TXDTRTSCALE,
        ),
        (
            Register::ModulationControl2,
            modulation_control2::TX_DATA_CLOCK_GPIO
                | modulation_control2::DTMOD_DIRECT_GPIO
                | modulation_control2::MODTYP_GFSK,
        ),
        // 8 x 625 Hz = 5 kHz deviation
        (Register::FrequencyDeviation, 0x08),
    ],
};

/// Packet-mode transmit modem: 625 bps GFSK, 5 kHz deviation
pub const TX_SLOW_PACKET: RadioConfig = RadioConfig {
    name: "tx-slow-packet",
    writes: &[
        (Register::TxPower, tx_power::TXPOW_MAX | tx_power::LNA_SW),
        // 0x051F = 1311 gives 625 bps
        (Register::TxDataRate1, 0x05),
        (Register::TxDataRate0, 0x1F),
        (
            Register::ModulationControl1,
            modulation_control1::TXDTRTSCALE
                | modulation_control1::MANPPOL
                | modulation_control1::ENMANINV,
        ),
        (
            Register::ModulationControl2,
            modulation_control2::TX_DATA_CLOCK_GPIO
                | modulation_control2::DTMOD_FIFO
                | modulation_control2::MODTYP_GFSK,
        ),
        (Register::FrequencyDeviation, 0x08),
    ],
};

/// Packet-mode receive modem for the 625 bps profile
pub const RX_SLOW_PACKET: RadioConfig = RadioConfig {
    name: "rx-slow-packet",
    writes: &[
        (Register::IfFilterBandwidth, 0x2D),
        (Register::AfcLoopGearshiftOverride, 0x40),
        (Register::ClockRecoveryGearshiftOverride, 0x03),
        (Register::ClockRecoveryOversamplingRatio, 0x40),
        (Register::ClockRecoveryOffset2, 0xC0),
        (Register::ClockRecoveryOffset1, 0x14),
        (Register::ClockRecoveryOffset0, 0x7B),
        (Register::ClockRecoveryTimingLoopGain1, 0x00),
        (Register::ClockRecoveryTimingLoopGain0, 0x05),
        // 16.25 kHz receive deviation window
        (Register::FrequencyDeviation, 0x1A),
    ],
};

/// Packet framing: preamble, sync word, headers, CRC
pub const PACKET_FRAMING: RadioConfig = RadioConfig {
    name: "packet-framing",
    writes: &[
        (
            Register::DataAccessControl,
            data_access_control::ENPACRX
                | data_access_control::CRCDONLY
                | data_access_control::ENPACTX
                | data_access_control::ENCRC,
        ),
        (Register::HeaderControl1, 0xF0),
        (Register::HeaderControl2, 0x02),
        // 64 bits of preamble
        (Register::PreambleLength, 0x10),
        // 16 bits must be detected correctly
        (Register::PreambleDetectionControl1, 0x22),
        (Register::SyncWord3, 0x2D),
        (Register::SyncWord2, 0xD4),
        (Register::SyncWord1, 0x00),
        (Register::SyncWord0, 0x00),
        (Register::TransmitHeader3, 0x00),
        (Register::TransmitHeader2, 0x00),
        (Register::TransmitHeader1, 0x00),
        (Register::TransmitHeader0, 0x00),
        (Register::PacketLength, 0x40),
        (Register::CheckHeader3, 0x00),
        (Register::CheckHeader2, 0x00),
        (Register::CheckHeader1, 0x00),
        (Register::CheckHeader0, 0x00),
        (Register::HeaderEnable3, 0xFF),
        (Register::HeaderEnable2, 0xFF),
        (Register::HeaderEnable1, 0xFF),
        (Register::HeaderEnable0, 0xFF),
    ],
};
