//! Error definitions for the PCA9634 driver.

use core::convert::Infallible;

/// Failure of a single driver operation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError, PinError = Infallible> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// Register read transaction failed.
    Read(I2cError),
    /// Driving or sampling the output-enable pin failed.
    Pin(PinError),
    /// Device did not acknowledge its address during `init`.
    NotConnected,
    /// Channel index is not below [`CHANNEL_COUNT`](crate::registers::CHANNEL_COUNT).
    InvalidChannel,
    /// LED driver mode is not one of the four LEDOUT states.
    InvalidMode,
    /// Register is not MODE1 or MODE2.
    InvalidRegister,
    /// Multi-channel write would run past the last PWM register.
    WriteOutOfRange,
    /// Call address does not fit in 7 bits.
    InvalidAddress,
}

impl<I2cError, PinError> Error<I2cError, PinError> {
    /// Flat status code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::I2c(_) => ErrorCode::I2c,
            Error::InvalidChannel => ErrorCode::Channel,
            Error::InvalidMode => ErrorCode::Mode,
            Error::InvalidRegister => ErrorCode::Register,
            Error::WriteOutOfRange => ErrorCode::Write,
            Error::Read(_) | Error::Pin(_) | Error::NotConnected | Error::InvalidAddress => ErrorCode::Error,
        }
    }
}

impl<I2cError: core::fmt::Debug, PinError: core::fmt::Debug> core::fmt::Display for Error<I2cError, PinError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::Read(e) => write!(f, "I2C read error: {:?}", e),
            Error::Pin(e) => write!(f, "output-enable pin error: {:?}", e),
            Error::NotConnected => write!(f, "device not connected"),
            Error::InvalidChannel => write!(f, "channel out of range"),
            Error::InvalidMode => write!(f, "invalid LED driver mode"),
            Error::InvalidRegister => write!(f, "not a mode register"),
            Error::WriteOutOfRange => write!(f, "write runs past last PWM register"),
            Error::InvalidAddress => write!(f, "address does not fit in 7 bits"),
        }
    }
}

/// Status of the most recent operation, as returned by
/// [`Pca9634::last_error`](crate::driver::Pca9634::last_error).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum ErrorCode {
    #[default]
    Ok = 0x00,
    /// Generic failure (no ACK on probe, failed read, pin fault, bad address).
    Error = 0xFF,
    Write = 0xFE,
    Channel = 0xFD,
    Mode = 0xFC,
    Register = 0xFB,
    /// Bus reported a failed transaction.
    I2c = 0xFA,
}

impl ErrorCode {
    /// Raw status byte.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }
}
