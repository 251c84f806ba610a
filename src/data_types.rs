//! Data types for the PCA9634 driver.

use crate::registers::{addr, Mode1};

/// Output state of one channel, as stored in its LEDOUT field.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum LedDriverMode {
    /// Fully off (power-up default).
    Off = 0b00,
    /// Fully on, PWM ignored.
    On = 0b01,
    /// Individual brightness from the channel's PWM register.
    Pwm = 0b10,
    /// Individual PWM combined with group dimming/blinking.
    GroupPwm = 0b11,
}

impl LedDriverMode {
    /// Decode a LEDOUT field; `None` for values above 3.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Off),
            0b01 => Some(Self::On),
            0b10 => Some(Self::Pwm),
            0b11 => Some(Self::GroupPwm),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0b00 => Self::Off,
            0b01 => Self::On,
            0b10 => Self::Pwm,
            _ => Self::GroupPwm,
        }
    }
}

/// One of the three programmable sub-call addresses.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubCall {
    Sub1,
    Sub2,
    Sub3,
}

impl SubCall {
    /// Map the datasheet numbering (1, 2, 3) to a sub-call slot.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Sub1),
            2 => Some(Self::Sub2),
            3 => Some(Self::Sub3),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Sub1 => 1,
            Self::Sub2 => 2,
            Self::Sub3 => 3,
        }
    }

    /// SUBADRx register holding this slot's address.
    pub fn register(self) -> u8 {
        match self {
            Self::Sub1 => addr::SUBADR1,
            Self::Sub2 => addr::SUBADR2,
            Self::Sub3 => addr::SUBADR3,
        }
    }

    /// MODE1 bit enabling this slot.
    pub fn mode1_bit(self) -> Mode1 {
        match self {
            Self::Sub1 => Mode1::SUB1,
            Self::Sub2 => Mode1::SUB2,
            Self::Sub3 => Mode1::SUB3,
        }
    }
}

/// Bus sequence used by `software_reset`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResetMethod {
    /// `0xA5 0x5A` to the reserved SWRST address 0x03 (PCA9634 only).
    SoftwareResetAddress,
    /// `0x06` to the general call address; resets every device that honours it.
    GeneralCall,
}
