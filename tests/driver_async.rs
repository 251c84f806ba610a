#![cfg(feature = "async")]

use embassy_futures::block_on;
use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use pca9634_rs::driver::Pca9634;
use pca9634_rs::registers::{DEFAULT_MODE1, DEFAULT_MODE2};
use pca9634_rs::{Error, ErrorCode, LedDriverMode, SubCall};

const ADDR: u8 = 0x20;

fn finish(dev: Pca9634<I2cMock>) {
    let (mut i2c, _) = dev.release();
    i2c.done();
}

#[test]
fn init_async_probes_then_writes_mode_registers() {
    let expectations = [
        I2cTrans::write(ADDR, vec![]),
        I2cTrans::write(ADDR, vec![0x00, 0x01]),
        I2cTrans::write(ADDR, vec![0x01, 0x00]),
    ];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    block_on(dev.init_async(DEFAULT_MODE1, DEFAULT_MODE2)).unwrap();
    assert_eq!(dev.last_error(), ErrorCode::Ok);
    finish(dev);
}

#[test]
fn init_async_stops_when_device_does_not_ack() {
    let expectations = [I2cTrans::write(ADDR, vec![])
        .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    let res = block_on(dev.init_async(DEFAULT_MODE1, DEFAULT_MODE2));
    assert!(matches!(res, Err(Error::NotConnected)));
    assert_eq!(dev.last_error(), ErrorCode::Error);
    finish(dev);
}

#[test]
fn no_stop_write_async_is_sent_on_write_stop() {
    let expectations = [I2cTrans::write(ADDR, vec![0x83, 0x11, 0x22, 0x33])];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    block_on(dev.write_n_no_stop_async(1, &[0x11, 0x22, 0x33])).unwrap();
    assert!(dev.has_staged_write());
    block_on(dev.write_stop_async()).unwrap();
    assert!(!dev.has_staged_write());
    finish(dev);
}

#[test]
fn staged_write_async_goes_out_before_next_access() {
    let expectations = [
        I2cTrans::write(ADDR, vec![0x87, 0x44]),
        I2cTrans::write_read(ADDR, vec![0x0B], vec![0x17]),
    ];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    block_on(dev.write_n_no_stop_async(5, &[0x44])).unwrap();
    assert_eq!(block_on(dev.group_freq_async()).unwrap(), 0x17);
    assert!(!dev.has_staged_write());
    finish(dev);
}

#[test]
fn set_led_driver_mode_async_keeps_neighbouring_channels() {
    // LEDOUT0 = 0b01_10_00_11; channel 1 occupies bits 3..2
    let expectations = [
        I2cTrans::write_read(ADDR, vec![0x0C], vec![0b0110_0011]),
        I2cTrans::write(ADDR, vec![0x0C, 0b0110_1111]),
        I2cTrans::write_read(ADDR, vec![0x0C], vec![0b0110_1111]),
    ];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    block_on(dev.set_led_driver_mode_async(1, LedDriverMode::GroupPwm)).unwrap();
    assert_eq!(block_on(dev.led_driver_mode_async(3)).unwrap(), LedDriverMode::On);
    finish(dev);
}

#[test]
fn async_validation_matches_blocking() {
    let mut dev = Pca9634::new(I2cMock::new(&[]), ADDR);
    assert!(matches!(block_on(dev.write1_async(8, 0)), Err(Error::InvalidChannel)));
    assert!(matches!(block_on(dev.write_n_async(6, &[0; 3])), Err(Error::WriteOutOfRange)));
    assert!(matches!(
        block_on(dev.set_led_driver_mode_raw_async(0, 4)),
        Err(Error::InvalidMode)
    ));
    assert!(matches!(block_on(dev.read_mode_async(0x05)), Err(Error::InvalidRegister)));
    assert!(matches!(
        block_on(dev.set_sub_call_address_async(SubCall::Sub1, 0xE2)),
        Err(Error::InvalidAddress)
    ));
    finish(dev);
}

#[test]
fn sub_call_async_enables_one_bit() {
    let expectations = [
        I2cTrans::write_read(ADDR, vec![0x00], vec![0x01]),
        I2cTrans::write(ADDR, vec![0x00, 0x03]),
        I2cTrans::write_read(ADDR, vec![0x00], vec![0x03]),
    ];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    block_on(dev.enable_sub_call_async(SubCall::Sub3)).unwrap();
    assert!(block_on(dev.is_enabled_sub_call_async(SubCall::Sub3)).unwrap());
    finish(dev);
}

#[test]
fn failed_read_async_reports_generic_error() {
    let expectations = [I2cTrans::write_read(ADDR, vec![0x0A], vec![0x00]).with_error(ErrorKind::Other)];
    let mut dev = Pca9634::new(I2cMock::new(&expectations), ADDR);
    assert!(matches!(block_on(dev.group_pwm_async()), Err(Error::Read(ErrorKind::Other))));
    assert_eq!(dev.last_error(), ErrorCode::Error);
    finish(dev);
}
