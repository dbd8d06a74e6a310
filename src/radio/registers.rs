//! Si4432 register map
//!
//! The EZRadioPRO register set per SiLabs AN440, addresses 0x00-0x7F.
//! The addresses and bit layouts are a fixed hardware contract and are
//! reproduced exactly. Bit masks live in per-register modules below;
//! only the registers this firmware touches get mask modules, the map
//! itself is complete.

/// Register addresses (7-bit SPI address space)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Register {
    DeviceType = 0x00,
    VersionCode = 0x01,
    DeviceStatus = 0x02,
    InterruptStatus1 = 0x03,
    InterruptStatus2 = 0x04,
    InterruptEnable1 = 0x05,
    InterruptEnable2 = 0x06,
    OperatingMode1 = 0x07,
    OperatingMode2 = 0x08,
    OscillatorLoadCapacitance = 0x09,
    UcOutputClock = 0x0A,
    GpioConfiguration0 = 0x0B,
    GpioConfiguration1 = 0x0C,
    GpioConfiguration2 = 0x0D,
    IoPortConfiguration = 0x0E,
    AdcConfiguration = 0x0F,
    AdcSensorAmpOffset = 0x10,
    AdcValue = 0x11,
    TemperatureSensorCalibration = 0x12,
    TemperatureValueOffset = 0x13,
    WakeupTimerPeriod1 = 0x14,
    WakeupTimerPeriod2 = 0x15,
    WakeupTimerPeriod3 = 0x16,
    WakeupTimerValue1 = 0x17,
    WakeupTimerValue2 = 0x18,
    LdcModeDuration = 0x19,
    LowBatteryDetectorThreshold = 0x1A,
    BatteryVoltageLevel = 0x1B,
    IfFilterBandwidth = 0x1C,
    AfcLoopGearshiftOverride = 0x1D,
    AfcTimingControl = 0x1E,
    ClockRecoveryGearshiftOverride = 0x1F,
    ClockRecoveryOversamplingRatio = 0x20,
    ClockRecoveryOffset2 = 0x21,
    ClockRecoveryOffset1 = 0x22,
    ClockRecoveryOffset0 = 0x23,
    ClockRecoveryTimingLoopGain1 = 0x24,
    ClockRecoveryTimingLoopGain0 = 0x25,
    Rssi = 0x26,
    RssiThreshold = 0x27,
    AntennaDiversity1 = 0x28,
    AntennaDiversity2 = 0x29,
    AfcLimit = 0x2A,
    AfcCorrectionRead = 0x2B,
    OokCounterValue1 = 0x2C,
    OokCounterValue2 = 0x2D,
    SlicerPeakHold = 0x2E,
    DataAccessControl = 0x30,
    EzmacStatus = 0x31,
    HeaderControl1 = 0x32,
    HeaderControl2 = 0x33,
    PreambleLength = 0x34,
    PreambleDetectionControl1 = 0x35,
    SyncWord3 = 0x36,
    SyncWord2 = 0x37,
    SyncWord1 = 0x38,
    SyncWord0 = 0x39,
    TransmitHeader3 = 0x3A,
    TransmitHeader2 = 0x3B,
    TransmitHeader1 = 0x3C,
    TransmitHeader0 = 0x3D,
    PacketLength = 0x3E,
    CheckHeader3 = 0x3F,
    CheckHeader2 = 0x40,
    CheckHeader1 = 0x41,
    CheckHeader0 = 0x42,
    HeaderEnable3 = 0x43,
    HeaderEnable2 = 0x44,
    HeaderEnable1 = 0x45,
    HeaderEnable0 = 0x46,
    ReceivedHeader3 = 0x47,
    ReceivedHeader2 = 0x48,
    ReceivedHeader1 = 0x49,
    ReceivedHeader0 = 0x4A,
    ReceivedPacketLength = 0x4B,
    Adc8Control = 0x4F,
    AnalogTestBusSelect = 0x50,
    DigitalTestBusSelect = 0x51,
    TxRampControl = 0x52,
    PllTuneTime = 0x53,
    CalibrationControl = 0x55,
    ModemTest = 0x56,
    ChargePumpTest = 0x57,
    ChargePumpCurrentTrimming = 0x58,
    DividerCurrentTrimming = 0x59,
    VcoCurrentTrimming = 0x5A,
    VcoCalibration = 0x5B,
    SynthesizerTest = 0x5C,
    BlockEnableOverride1 = 0x5D,
    BlockEnableOverride2 = 0x5E,
    BlockEnableOverride3 = 0x5F,
    ChannelFilterCoefficientAddress = 0x60,
    ChannelFilterCoefficientValue = 0x61,
    CrystalOscillatorPorControl = 0x62,
    RcOscillatorCoarseCalibration = 0x63,
    RcOscillatorFineCalibration = 0x64,
    LdoControlOverride = 0x65,
    LdoLevelSettings = 0x66,
    DeltaSigmaAdcTuning1 = 0x67,
    DeltaSigmaAdcTuning2 = 0x68,
    AgcOverride1 = 0x69,
    AgcOverride2 = 0x6A,
    GfskFirFilterCoefficientAddress = 0x6B,
    GfskFirFilterCoefficientValue = 0x6C,
    TxPower = 0x6D,
    TxDataRate1 = 0x6E,
    TxDataRate0 = 0x6F,
    ModulationControl1 = 0x70,
    ModulationControl2 = 0x71,
    FrequencyDeviation = 0x72,
    FrequencyOffset1 = 0x73,
    FrequencyOffset2 = 0x74,
    FrequencyBand = 0x75,
    NominalCarrierFrequency1 = 0x76,
    NominalCarrierFrequency0 = 0x77,
    FrequencyHoppingChannel = 0x79,
    FrequencyHoppingStepSize = 0x7A,
    TxFifoControl1 = 0x7C,
    TxFifoControl2 = 0x7D,
    RxFifoControl = 0x7E,
    FifoAccess = 0x7F,
}

impl Register {
    /// Register address on the SPI bus
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Device type code for the EZRadioPRO family
pub const DEVICE_TYPE_CODE: u8 = 0x08;

/// Version code for silicon revision B1
pub const REVISION_B1: u8 = 0x06;

/// Device status register (0x02)
pub mod device_status {
    /// RX/TX FIFO overflow
    pub const FFOVFL: u8 = 1 << 7;
    /// RX/TX FIFO underflow
    pub const FFUNFL: u8 = 1 << 6;
    /// RX FIFO empty
    pub const RXFFEM: u8 = 1 << 5;
    /// Header error
    pub const HEADERR: u8 = 1 << 4;
    /// Frequency error
    pub const FREQERR: u8 = 1 << 3;
    /// Chip power state field
    pub const CPS_MASK: u8 = 0x03;
    /// Idle power state
    pub const CPS_IDLE: u8 = 0x00;
    /// RX power state
    pub const CPS_RX: u8 = 0x01;
    /// TX power state
    pub const CPS_TX: u8 = 0x02;
}

/// Interrupt status 1 register (0x03)
pub mod interrupt_status1 {
    /// FIFO under/overflow error
    pub const IFFERR: u8 = 1 << 7;
    /// TX FIFO almost full
    pub const ITXFFAFULL: u8 = 1 << 6;
    /// TX FIFO almost empty
    pub const ITXFFAEM: u8 = 1 << 5;
    /// RX FIFO almost full
    pub const IRXFFAFULL: u8 = 1 << 4;
    /// External interrupt
    pub const IEXT: u8 = 1 << 3;
    /// Packet sent
    pub const IPKSENT: u8 = 1 << 2;
    /// Valid packet received
    pub const IPKVALID: u8 = 1 << 1;
    /// CRC error
    pub const ICRCERROR: u8 = 1 << 0;
}

/// Interrupt status 2 register (0x04)
pub mod interrupt_status2 {
    /// Sync word detected
    pub const ISWDET: u8 = 1 << 7;
    /// Valid preamble detected
    pub const IPREAVAL: u8 = 1 << 6;
    /// Invalid preamble detected
    pub const IPREAINVAL: u8 = 1 << 5;
    /// RSSI exceeds threshold
    pub const IRSSI: u8 = 1 << 4;
    /// Wake-up timer expired
    pub const IWUT: u8 = 1 << 3;
    /// Low battery detect
    pub const ILBD: u8 = 1 << 2;
    /// Chip ready (crystal running)
    pub const ICHIPRDY: u8 = 1 << 1;
    /// Power-on reset complete
    pub const IPOR: u8 = 1 << 0;
}

/// Interrupt enable 1 register (0x05)
pub mod interrupt_enable1 {
    /// Enable packet sent
    pub const ENPKSENT: u8 = 1 << 2;
    /// Enable valid packet received
    pub const ENPKVALID: u8 = 1 << 1;
    /// Enable CRC error
    pub const ENCRCERROR: u8 = 1 << 0;
}

/// Operating mode 1 register (0x07)
pub mod operating_mode1 {
    /// Software register reset
    pub const SWRES: u8 = 1 << 7;
    /// Enable low battery detect
    pub const ENLBD: u8 = 1 << 6;
    /// Enable wake-up timer
    pub const ENWT: u8 = 1 << 5;
    /// 32768 Hz crystal select
    pub const X32KSEL: u8 = 1 << 4;
    /// TX on (manual transmit mode)
    pub const TXON: u8 = 1 << 3;
    /// RX on (manual receive mode)
    pub const RXON: u8 = 1 << 2;
    /// PLL on (tune mode)
    pub const PLLON: u8 = 1 << 1;
    /// Crystal on (ready mode)
    pub const XTON: u8 = 1 << 0;
}

/// Operating mode 2 register (0x08)
pub mod operating_mode2 {
    /// RX multi-packet
    pub const RXMPK: u8 = 1 << 4;
    /// Automatic transmission
    pub const AUTOTX: u8 = 1 << 3;
    /// Enable low duty cycle mode
    pub const ENLDM: u8 = 1 << 2;
    /// RX FIFO reset/clear
    pub const FFCLRRX: u8 = 1 << 1;
    /// TX FIFO reset/clear
    pub const FFCLRTX: u8 = 1 << 0;
}

/// GPIO configuration function codes (0x0B-0x0D)
pub mod gpio_function {
    /// TX/RX data clock output
    pub const OUTPUT_TXRX_DATA_CLOCK: u8 = 0x0F;
    /// TX direct-modulation data input
    pub const INPUT_TX_DIRECT_MODULATION_DATA: u8 = 0x10;
    /// TX state output
    pub const OUTPUT_TX_STATE: u8 = 0x12;
    /// RX data output
    pub const OUTPUT_RX_DATA: u8 = 0x14;
    /// RX state output
    pub const OUTPUT_RX_STATE: u8 = 0x15;
}

/// Data access control register (0x30)
pub mod data_access_control {
    /// Enable packet RX handling
    pub const ENPACRX: u8 = 1 << 7;
    /// LSB-first enable
    pub const LSBFRST: u8 = 1 << 6;
    /// CRC over data only
    pub const CRCDONLY: u8 = 1 << 5;
    /// Enable packet TX handling
    pub const ENPACTX: u8 = 1 << 3;
    /// CRC enable
    pub const ENCRC: u8 = 1 << 2;
    /// CRC polynomial: CCITT
    pub const CRC_CCITT: u8 = 0;
    /// CRC polynomial: IBM-16
    pub const CRC_IBM_16: u8 = 1;
}

/// EZMAC status register (0x31)
pub mod ezmac_status {
    /// Last received CRC was all ones
    pub const RXCRC1: u8 = 1 << 6;
    /// Packet searching
    pub const PKSRCH: u8 = 1 << 5;
    /// Packet receiving
    pub const PKRX: u8 = 1 << 4;
    /// Valid packet received
    pub const PKVALID: u8 = 1 << 3;
    /// CRC error
    pub const CRCERROR: u8 = 1 << 2;
    /// Packet transmitting
    pub const PKTX: u8 = 1 << 1;
    /// Packet sent
    pub const PKSENT: u8 = 1 << 0;
}

/// Crystal oscillator / POR control register (0x62)
pub mod por_control {
    /// Internal power state field
    pub const POWER_STATE_MASK: u8 = 0xE0;
    /// Low power
    pub const POWER_STATE_LP: u8 = 0x00;
    /// Ready
    pub const POWER_STATE_READY: u8 = 0x20;
    /// Transmit
    pub const POWER_STATE_TX: u8 = 0x40;
    /// Tune
    pub const POWER_STATE_TUNE: u8 = 0x60;
    /// Receive
    pub const POWER_STATE_RX: u8 = 0xE0;
}

/// TX power register (0x6D)
pub mod tx_power {
    /// LNA switch controller
    pub const LNA_SW: u8 = 1 << 3;
    /// Output power field
    pub const TXPOW_MASK: u8 = 0x07;
    /// +20 dBm
    pub const TXPOW_MAX: u8 = 0x07;
    /// +1 dBm
    pub const TXPOW_MIN: u8 = 0x00;
}

/// Modulation control 1 register (0x70)
pub mod modulation_control1 {
    /// Scale for data rates below 30 kbps
    pub const TXDTRTSCALE: u8 = 1 << 5;
    /// Manchester preamble polarity
    pub const MANPPOL: u8 = 1 << 3;
    /// Manchester data inversion
    pub const ENMANINV: u8 = 1 << 2;
    /// Manchester coding enable
    pub const ENMANCH: u8 = 1 << 1;
    /// Data whitening enable
    pub const ENWHITE: u8 = 1 << 0;
}

/// Modulation control 2 register (0x71)
pub mod modulation_control2 {
    /// TX data clock on a GPIO pin
    pub const TX_DATA_CLOCK_GPIO: u8 = 0x40;
    /// TX data clock on the SDO pin
    pub const TX_DATA_CLOCK_SDO: u8 = 0x80;
    /// Modulation source: direct from GPIO
    pub const DTMOD_DIRECT_GPIO: u8 = 0x00;
    /// Modulation source: direct from SDI
    pub const DTMOD_DIRECT_SDI: u8 = 0x10;
    /// Modulation source: FIFO
    pub const DTMOD_FIFO: u8 = 0x20;
    /// Modulation source: internal PN9
    pub const DTMOD_PN9: u8 = 0x30;
    /// Modulation type: unmodulated carrier
    pub const MODTYP_UNMOD: u8 = 0;
    /// Modulation type: OOK
    pub const MODTYP_OOK: u8 = 1;
    /// Modulation type: FSK
    pub const MODTYP_FSK: u8 = 2;
    /// Modulation type: GFSK
    pub const MODTYP_GFSK: u8 = 3;
}

/// Frequency band select register (0x75)
pub mod frequency_band {
    /// Side band select
    pub const SBSEL: u8 = 1 << 6;
    /// High band select
    pub const HBSEL: u8 = 1 << 5;
    /// Band select field
    pub const FB_MASK: u8 = 0x1F;
}
