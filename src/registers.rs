//! Register map and constants for PCA9634.
//! Addresses, bit positions and timing formulas are taken from the datasheet.

/// Number of PWM outputs on the chip.
pub const CHANNEL_COUNT: u8 = 8;

/// Control-byte flag enabling register auto-increment (AI2).
pub const AUTO_INCREMENT: u8 = 0x80;

/// Register addresses.
pub mod addr {
    pub const MODE1: u8 = 0x00;
    pub const MODE2: u8 = 0x01;
    /// PWM duty for channel 0; channels 1-7 follow consecutively.
    pub const PWM0: u8 = 0x02;
    /// Group duty cycle (dimming) or blink duty (blinking).
    pub const GRPPWM: u8 = 0x0A;
    /// Group blink period.
    pub const GRPFREQ: u8 = 0x0B;
    /// LED output state, channels 0-3.
    pub const LEDOUT0: u8 = 0x0C;
    /// LED output state, channels 4-7.
    pub const LEDOUT1: u8 = 0x0D;
    pub const SUBADR1: u8 = 0x0E;
    pub const SUBADR2: u8 = 0x0F;
    pub const SUBADR3: u8 = 0x10;
    pub const ALLCALLADR: u8 = 0x11;
}

/// Power-up all-call address (7-bit form of 0xE0).
pub const DEFAULT_ALLCALL_ADDRESS: u8 = 0x70;
/// Power-up sub-call addresses (7-bit forms of 0xE2, 0xE4, 0xE8).
pub const DEFAULT_SUB1_ADDRESS: u8 = 0x71;
pub const DEFAULT_SUB2_ADDRESS: u8 = 0x72;
pub const DEFAULT_SUB3_ADDRESS: u8 = 0x74;

/// Reserved address answering the software reset sequence.
pub const SWRST_ADDRESS: u8 = 0x03;
pub const SWRST_SEQUENCE: [u8; 2] = [0xA5, 0x5A];
/// General call address and its reset command byte.
pub const GENERAL_CALL_ADDRESS: u8 = 0x00;
pub const GENERAL_CALL_RESET: u8 = 0x06;

bitflags::bitflags! {
    /// MODE1 register bits (0x00).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Mode1: u8 {
        /// Bits 7-5: auto-increment state (read-only).
        const AUTOINCR2 = 1 << 7;
        const AUTOINCR1 = 1 << 6;
        const AUTOINCR0 = 1 << 5;
        /// Bit 4: low-power mode, oscillator off.
        const SLEEP     = 1 << 4;
        /// Bits 3-1: respond to sub-addresses 1-3.
        const SUB1      = 1 << 3;
        const SUB2      = 1 << 2;
        const SUB3      = 1 << 1;
        /// Bit 0: respond to the all-call address.
        const ALLCALL   = 1 << 0;
    }

    /// MODE2 register bits (0x01).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Mode2: u8 {
        /// Bit 5: group control is blinking (1) instead of dimming (0).
        const BLINK     = 1 << 5;
        /// Bit 4: invert output logic.
        const INVERT    = 1 << 4;
        /// Bit 3: outputs change on ACK (1) instead of STOP (0).
        const ACK       = 1 << 3;
        /// Bit 2: totem-pole (1) or open-drain (0) outputs.
        const TOTEMPOLE = 1 << 2;
        /// Bits 1-0: output state while OE is high.
        const OUTNE1    = 1 << 1;
        const OUTNE0    = 1 << 0;
    }
}

/// MODE1 written by `init` unless overridden: answer the all-call address, awake.
pub const DEFAULT_MODE1: Mode1 = Mode1::ALLCALL;
/// MODE2 written by `init` unless overridden.
pub const DEFAULT_MODE2: Mode2 = Mode2::empty();

/// PWM register for a channel (no auto-increment flag).
/// The channel is not range-checked; compare against [`CHANNEL_COUNT`] first.
pub fn pwm(channel: u8) -> u8 {
    addr::PWM0.wrapping_add(channel)
}

/// LEDOUT register holding a channel's 2-bit output state.
pub fn ledout(channel: u8) -> u8 {
    addr::LEDOUT0 + (channel >> 2)
}

/// Bit offset of a channel's field inside its LEDOUT register (0, 2, 4 or 6).
pub fn ledout_shift(channel: u8) -> u8 {
    (channel & 0x03) * 2
}

/// Replace one channel's 2-bit field in a packed LEDOUT value.
pub fn pack_led_mode(current: u8, channel: u8, mode: u8) -> u8 {
    let shift = ledout_shift(channel);
    (current & !(0x03 << shift)) | ((mode & 0x03) << shift)
}

/// Extract one channel's 2-bit field from a packed LEDOUT value.
pub fn unpack_led_mode(value: u8, channel: u8) -> u8 {
    (value >> ledout_shift(channel)) & 0x03
}

/// True for the two registers accepted by `write_mode`/`read_mode`.
pub fn is_mode_register(reg: u8) -> bool {
    reg == addr::MODE1 || reg == addr::MODE2
}

/// Shortest and longest group blink periods (GRPFREQ 0x00 and 0xFF).
pub const BLINK_PERIOD_MIN_MS: u32 = 42;
pub const BLINK_PERIOD_MAX_MS: u32 = 10_667;

/// Convert a blink period in milliseconds to a GRPFREQ code, `period = (code + 1) / 24 s`.
/// Rounds to the nearest step and clamps to the register range.
pub fn blink_period_ms_to_code(ms: u32) -> u8 {
    let steps = (ms.saturating_mul(24).saturating_add(500)) / 1000;
    steps.saturating_sub(1).min(0xFF) as u8
}

/// Convert a GRPFREQ code to the blink period in milliseconds (rounded).
pub fn code_to_blink_period_ms(code: u8) -> u32 {
    ((code as u32 + 1) * 1000 + 12) / 24
}

/// Convert a duty cycle in percent to a PWM/GRPPWM code. Clamps above 100 %.
pub fn duty_percent_to_code(percent: u8) -> u8 {
    let percent = percent.min(100) as u16;
    ((percent * 255 + 50) / 100) as u8
}

/// Convert a PWM/GRPPWM code to a duty cycle in percent (rounded).
pub fn code_to_duty_percent(code: u8) -> u8 {
    ((code as u16 * 100 + 127) / 255) as u8
}
