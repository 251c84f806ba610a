//! PCA9634 Rust Driver
//!
//! `no_std` driver for the NXP PCA9634 8-channel I2C LED driver: blocking API
//! on `embedded-hal`, an optional async mirror behind the `async` feature,
//! optional `defmt` support, and type-safe MODE register access.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use data_types::{LedDriverMode, ResetMethod, SubCall};
pub use driver::{NoOutputEnable, Pca9634};
pub use error::{Error, ErrorCode};
pub use registers::{CHANNEL_COUNT, Mode1, Mode2};
