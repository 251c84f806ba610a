//! Register interface for the PCA9634.
//! Blocking I2C helpers; the async version mirrors this API behind the `async` feature.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState, StatefulOutputPin};

use crate::data_types::{LedDriverMode, ResetMethod, SubCall};
use crate::error::{Error, ErrorCode};
use crate::registers::{
    self, addr, is_mode_register, pack_led_mode, unpack_led_mode, AUTO_INCREMENT, CHANNEL_COUNT,
    GENERAL_CALL_ADDRESS, GENERAL_CALL_RESET, Mode1, Mode2, SWRST_ADDRESS, SWRST_SEQUENCE,
};

/// Stand-in for a board without an output-enable line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOutputEnable;

impl embedded_hal::digital::ErrorType for NoOutputEnable {
    type Error = Infallible;
}

impl OutputPin for NoOutputEnable {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl StatefulOutputPin for NoOutputEnable {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(true)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(false)
    }
}

/// Auto-increment PWM burst: control byte followed by up to eight duty values.
#[derive(Clone, Copy, Debug)]
struct PwmFrame {
    buf: [u8; CHANNEL_COUNT as usize + 1],
    len: usize,
}

impl PwmFrame {
    fn new(channel: u8, values: &[u8]) -> Self {
        let mut buf = [0u8; CHANNEL_COUNT as usize + 1];
        buf[0] = AUTO_INCREMENT | registers::pwm(channel);
        buf[1..=values.len()].copy_from_slice(values);
        Self {
            buf,
            len: values.len() + 1,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// PCA9634 driver.
///
/// Every operation returns its own `Result`. The status of the most recent
/// operation is also kept and can be taken with [`last_error`](Self::last_error).
pub struct Pca9634<I2C, OE = NoOutputEnable> {
    i2c: I2C,
    address: u8,
    oe: Option<OE>,
    staged: Option<PwmFrame>,
    last_error: ErrorCode,
}

impl<I2C> Pca9634<I2C, NoOutputEnable> {
    /// Create a driver for the device at a 7-bit I2C address.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            oe: None,
            staged: None,
            last_error: ErrorCode::Ok,
        }
    }
}

impl<I2C, OE> Pca9634<I2C, OE> {
    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn channel_count(&self) -> u8 {
        CHANNEL_COUNT
    }

    /// Attach the active-low OE line. The pin keeps whatever level it was
    /// created with; any previously attached pin is dropped.
    pub fn with_output_enable_pin<P: OutputPin>(self, pin: P) -> Pca9634<I2C, P> {
        Pca9634 {
            i2c: self.i2c,
            address: self.address,
            oe: Some(pin),
            staged: self.staged,
            last_error: self.last_error,
        }
    }

    /// True while a `write_n_no_stop` frame is waiting for `write_stop`.
    pub fn has_staged_write(&self) -> bool {
        self.staged.is_some()
    }

    /// Return the status of the most recent operation and reset it to `Ok`.
    pub fn last_error(&mut self) -> ErrorCode {
        core::mem::take(&mut self.last_error)
    }

    /// Give back the bus and OE pin. A staged frame is discarded.
    pub fn release(self) -> (I2C, Option<OE>) {
        (self.i2c, self.oe)
    }

    fn record<T, E, P>(&mut self, result: Result<T, Error<E, P>>) -> Result<T, Error<E, P>> {
        self.last_error = match &result {
            Ok(_) => ErrorCode::Ok,
            Err(e) => e.code(),
        };
        #[cfg(feature = "defmt")]
        if let Err(e) = &result {
            defmt::debug!("pca9634@{=u8:#x}: {}", self.address, e.code());
        }
        result
    }

    fn fail<T, E, P>(&mut self, err: Error<E, P>) -> Result<T, Error<E, P>> {
        self.record(Err(err))
    }
}

impl<I2C, OE> Pca9634<I2C, OE>
where
    I2C: embedded_hal::i2c::ErrorType,
{
    fn check_channel(&mut self, channel: u8) -> Result<(), Error<I2C::Error>> {
        if channel >= CHANNEL_COUNT {
            return self.fail(Error::InvalidChannel);
        }
        Ok(())
    }

    fn check_mode_register(&mut self, reg: u8) -> Result<(), Error<I2C::Error>> {
        if !is_mode_register(reg) {
            return self.fail(Error::InvalidRegister);
        }
        Ok(())
    }

    fn decode_led_mode(&mut self, channel: u8, mode: u8) -> Result<LedDriverMode, Error<I2C::Error>> {
        self.check_channel(channel)?;
        match LedDriverMode::from_bits(mode) {
            Some(mode) => Ok(mode),
            None => self.fail(Error::InvalidMode),
        }
    }

    /// Validate a PWM burst; `None` means there is nothing to send.
    fn pwm_frame(&mut self, channel: u8, values: &[u8]) -> Result<Option<PwmFrame>, Error<I2C::Error>> {
        self.check_channel(channel)?;
        if channel as usize + values.len() > CHANNEL_COUNT as usize {
            return self.fail(Error::WriteOutOfRange);
        }
        if values.is_empty() {
            self.last_error = ErrorCode::Ok;
            return Ok(None);
        }
        Ok(Some(PwmFrame::new(channel, values)))
    }

    /// Call addresses are 7-bit on the API and left-aligned in the chip.
    fn encode_call_address(&mut self, address: u8) -> Result<u8, Error<I2C::Error>> {
        if address > 0x7F {
            return self.fail(Error::InvalidAddress);
        }
        Ok(address << 1)
    }
}

impl<I2C, OE> Pca9634<I2C, OE>
where
    I2C: embedded_hal::i2c::ErrorType,
    OE: OutputPin,
{
    /// Drive OE (active-low): `true` enables the outputs. Returns `Ok(false)`
    /// when no pin is attached.
    pub fn set_output_enable(&mut self, on: bool) -> Result<bool, Error<I2C::Error, OE::Error>> {
        let Some(pin) = self.oe.as_mut() else {
            return self.record(Ok(false));
        };
        let result = pin.set_state(if on { PinState::Low } else { PinState::High });
        self.record(result.map(|()| true).map_err(Error::Pin))
    }
}

impl<I2C, OE> Pca9634<I2C, OE>
where
    I2C: embedded_hal::i2c::ErrorType,
    OE: StatefulOutputPin,
{
    /// Level currently driven on OE; `High` (outputs disabled) when no pin is attached.
    pub fn output_enable_level(&mut self) -> Result<PinState, Error<I2C::Error, OE::Error>> {
        let Some(pin) = self.oe.as_mut() else {
            return self.record(Ok(PinState::High));
        };
        let result = pin.is_set_high().map(PinState::from);
        self.record(result.map_err(Error::Pin))
    }
}

impl<I2C, OE> Pca9634<I2C, OE>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Probe the device, then write MODE1 and MODE2.
    /// Use [`DEFAULT_MODE1`](registers::DEFAULT_MODE1) / [`DEFAULT_MODE2`](registers::DEFAULT_MODE2)
    /// for the library defaults.
    pub fn init(&mut self, mode1: Mode1, mode2: Mode2) -> Result<(), Error<I2C::Error>> {
        if !self.is_connected() {
            return self.fail(Error::NotConnected);
        }
        self.configure(mode1, mode2)
    }

    /// Write MODE1 and MODE2 without probing.
    pub fn configure(&mut self, mode1: Mode1, mode2: Mode2) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MODE1, mode1.bits())?;
        self.write_reg(addr::MODE2, mode2.bits())
    }

    /// Zero-length write to the device address; true if it is acknowledged.
    pub fn is_connected(&mut self) -> bool {
        self.write_bytes(self.address, &[]).is_ok()
    }

    /// Write MODE1 (0x00) or MODE2 (0x01).
    pub fn write_mode(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.check_mode_register(reg)?;
        self.write_reg(reg, value)
    }

    /// Read MODE1 (0x00) or MODE2 (0x01).
    pub fn read_mode(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.check_mode_register(reg)?;
        self.read_reg(reg)
    }

    pub fn set_mode1(&mut self, mode: Mode1) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MODE1, mode.bits())
    }

    pub fn mode1(&mut self) -> Result<Mode1, Error<I2C::Error>> {
        Ok(Mode1::from_bits_retain(self.read_reg(addr::MODE1)?))
    }

    pub fn set_mode2(&mut self, mode: Mode2) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MODE2, mode.bits())
    }

    pub fn mode2(&mut self) -> Result<Mode2, Error<I2C::Error>> {
        Ok(Mode2::from_bits_retain(self.read_reg(addr::MODE2)?))
    }

    /// Set one channel's LEDOUT field, keeping the other three channels in that register.
    pub fn set_led_driver_mode(&mut self, channel: u8, mode: LedDriverMode) -> Result<(), Error<I2C::Error>> {
        self.check_channel(channel)?;
        let reg = registers::ledout(channel);
        let current = self.read_reg(reg)?;
        self.write_reg(reg, pack_led_mode(current, channel, mode.bits()))
    }

    /// Same as [`set_led_driver_mode`](Self::set_led_driver_mode) with an unchecked mode value.
    pub fn set_led_driver_mode_raw(&mut self, channel: u8, mode: u8) -> Result<(), Error<I2C::Error>> {
        let mode = self.decode_led_mode(channel, mode)?;
        self.set_led_driver_mode(channel, mode)
    }

    pub fn led_driver_mode(&mut self, channel: u8) -> Result<LedDriverMode, Error<I2C::Error>> {
        self.check_channel(channel)?;
        let value = self.read_reg(registers::ledout(channel))?;
        Ok(LedDriverMode::from_field(unpack_led_mode(value, channel)))
    }

    /// Set one channel's PWM duty.
    pub fn write1(&mut self, channel: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_n(channel, &[value])
    }

    /// Set three consecutive channels (typically one RGB LED) in one transaction.
    pub fn write3(&mut self, channel: u8, r: u8, g: u8, b: u8) -> Result<(), Error<I2C::Error>> {
        self.write_n(channel, &[r, g, b])
    }

    /// Set consecutive PWM registers starting at `channel` in one auto-increment transaction.
    pub fn write_n(&mut self, channel: u8, values: &[u8]) -> Result<(), Error<I2C::Error>> {
        match self.pwm_frame(channel, values)? {
            Some(frame) => self.write_bytes(self.address, frame.as_bytes()),
            None => Ok(()),
        }
    }

    /// Validate and stage a PWM burst without sending it. The frame goes out on
    /// [`write_stop`](Self::write_stop), or ahead of the next bus access from this driver.
    pub fn write_n_no_stop(&mut self, channel: u8, values: &[u8]) -> Result<(), Error<I2C::Error>> {
        let Some(frame) = self.pwm_frame(channel, values)? else {
            return Ok(());
        };
        let flushed = self.flush_staged();
        self.record(flushed)?;
        self.staged = Some(frame);
        Ok(())
    }

    /// Send a frame staged by `write_n_no_stop`; no-op if nothing is staged.
    pub fn write_stop(&mut self) -> Result<(), Error<I2C::Error>> {
        let flushed = self.flush_staged();
        self.record(flushed)
    }

    /// Read back one channel's PWM duty.
    pub fn pwm(&mut self, channel: u8) -> Result<u8, Error<I2C::Error>> {
        self.check_channel(channel)?;
        self.read_reg(registers::pwm(channel))
    }

    pub fn set_group_pwm(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::GRPPWM, value)
    }

    pub fn group_pwm(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::GRPPWM)
    }

    /// Blink period code, see [`registers::blink_period_ms_to_code`].
    pub fn set_group_freq(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::GRPFREQ, value)
    }

    pub fn group_freq(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::GRPFREQ)
    }

    pub fn enable_sub_call(&mut self, sub: SubCall) -> Result<(), Error<I2C::Error>> {
        self.update_mode1(sub.mode1_bit(), true)
    }

    pub fn disable_sub_call(&mut self, sub: SubCall) -> Result<(), Error<I2C::Error>> {
        self.update_mode1(sub.mode1_bit(), false)
    }

    pub fn is_enabled_sub_call(&mut self, sub: SubCall) -> Result<bool, Error<I2C::Error>> {
        Ok(self.mode1()?.contains(sub.mode1_bit()))
    }

    /// Program a 7-bit sub-call address.
    pub fn set_sub_call_address(&mut self, sub: SubCall, address: u8) -> Result<(), Error<I2C::Error>> {
        let value = self.encode_call_address(address)?;
        self.write_reg(sub.register(), value)
    }

    pub fn sub_call_address(&mut self, sub: SubCall) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg(sub.register())? >> 1)
    }

    pub fn enable_all_call(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_mode1(Mode1::ALLCALL, true)
    }

    pub fn disable_all_call(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_mode1(Mode1::ALLCALL, false)
    }

    pub fn is_enabled_all_call(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.mode1()?.contains(Mode1::ALLCALL))
    }

    /// Program the 7-bit all-call address.
    pub fn set_all_call_address(&mut self, address: u8) -> Result<(), Error<I2C::Error>> {
        let value = self.encode_call_address(address)?;
        self.write_reg(addr::ALLCALLADR, value)
    }

    pub fn all_call_address(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg(addr::ALLCALLADR)? >> 1)
    }

    /// Return the chip to power-up register values.
    pub fn software_reset(&mut self, method: ResetMethod) -> Result<(), Error<I2C::Error>> {
        match method {
            ResetMethod::SoftwareResetAddress => self.write_bytes(SWRST_ADDRESS, &SWRST_SEQUENCE),
            ResetMethod::GeneralCall => self.write_bytes(GENERAL_CALL_ADDRESS, &[GENERAL_CALL_RESET]),
        }
    }

    fn update_mode1(&mut self, bit: Mode1, enable: bool) -> Result<(), Error<I2C::Error>> {
        let current = self.mode1()?;
        let mut next = current;
        next.set(bit, enable);
        if next != current {
            self.write_reg(addr::MODE1, next.bits())?;
        }
        Ok(())
    }

    fn flush_staged(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.staged.take() {
            Some(frame) => self.i2c.write(self.address, frame.as_bytes()).map_err(Error::I2c),
            None => Ok(()),
        }
    }

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut result = self.flush_staged();
        if result.is_ok() {
            result = self.i2c.write(address, bytes).map_err(Error::I2c);
        }
        self.record(result)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_bytes(self.address, &[reg, value])
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        let mut result = self.flush_staged();
        if result.is_ok() {
            result = self
                .i2c
                .write_read(self.address, &[reg], &mut buf)
                .map_err(Error::Read);
        }
        self.record(result.map(|()| buf[0]))
    }
}

#[cfg(feature = "async")]
impl<I2C, OE> Pca9634<I2C, OE>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self, mode1: Mode1, mode2: Mode2) -> Result<(), Error<I2C::Error>> {
        if !self.is_connected_async().await {
            return self.fail(Error::NotConnected);
        }
        self.configure_async(mode1, mode2).await
    }

    pub async fn configure_async(&mut self, mode1: Mode1, mode2: Mode2) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MODE1, mode1.bits()).await?;
        self.write_reg_async(addr::MODE2, mode2.bits()).await
    }

    pub async fn is_connected_async(&mut self) -> bool {
        self.write_bytes_async(self.address, &[]).await.is_ok()
    }

    pub async fn write_mode_async(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.check_mode_register(reg)?;
        self.write_reg_async(reg, value).await
    }

    pub async fn read_mode_async(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        self.check_mode_register(reg)?;
        self.read_reg_async(reg).await
    }

    pub async fn set_mode1_async(&mut self, mode: Mode1) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MODE1, mode.bits()).await
    }

    pub async fn mode1_async(&mut self) -> Result<Mode1, Error<I2C::Error>> {
        Ok(Mode1::from_bits_retain(self.read_reg_async(addr::MODE1).await?))
    }

    pub async fn set_mode2_async(&mut self, mode: Mode2) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MODE2, mode.bits()).await
    }

    pub async fn mode2_async(&mut self) -> Result<Mode2, Error<I2C::Error>> {
        Ok(Mode2::from_bits_retain(self.read_reg_async(addr::MODE2).await?))
    }

    pub async fn set_led_driver_mode_async(
        &mut self,
        channel: u8,
        mode: LedDriverMode,
    ) -> Result<(), Error<I2C::Error>> {
        self.check_channel(channel)?;
        let reg = registers::ledout(channel);
        let current = self.read_reg_async(reg).await?;
        self.write_reg_async(reg, pack_led_mode(current, channel, mode.bits()))
            .await
    }

    pub async fn set_led_driver_mode_raw_async(&mut self, channel: u8, mode: u8) -> Result<(), Error<I2C::Error>> {
        let mode = self.decode_led_mode(channel, mode)?;
        self.set_led_driver_mode_async(channel, mode).await
    }

    pub async fn led_driver_mode_async(&mut self, channel: u8) -> Result<LedDriverMode, Error<I2C::Error>> {
        self.check_channel(channel)?;
        let value = self.read_reg_async(registers::ledout(channel)).await?;
        Ok(LedDriverMode::from_field(unpack_led_mode(value, channel)))
    }

    pub async fn write1_async(&mut self, channel: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_n_async(channel, &[value]).await
    }

    pub async fn write3_async(&mut self, channel: u8, r: u8, g: u8, b: u8) -> Result<(), Error<I2C::Error>> {
        self.write_n_async(channel, &[r, g, b]).await
    }

    pub async fn write_n_async(&mut self, channel: u8, values: &[u8]) -> Result<(), Error<I2C::Error>> {
        match self.pwm_frame(channel, values)? {
            Some(frame) => self.write_bytes_async(self.address, frame.as_bytes()).await,
            None => Ok(()),
        }
    }

    pub async fn write_n_no_stop_async(&mut self, channel: u8, values: &[u8]) -> Result<(), Error<I2C::Error>> {
        let Some(frame) = self.pwm_frame(channel, values)? else {
            return Ok(());
        };
        let flushed = self.flush_staged_async().await;
        self.record(flushed)?;
        self.staged = Some(frame);
        Ok(())
    }

    pub async fn write_stop_async(&mut self) -> Result<(), Error<I2C::Error>> {
        let flushed = self.flush_staged_async().await;
        self.record(flushed)
    }

    pub async fn pwm_async(&mut self, channel: u8) -> Result<u8, Error<I2C::Error>> {
        self.check_channel(channel)?;
        self.read_reg_async(registers::pwm(channel)).await
    }

    pub async fn set_group_pwm_async(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::GRPPWM, value).await
    }

    pub async fn group_pwm_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::GRPPWM).await
    }

    pub async fn set_group_freq_async(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::GRPFREQ, value).await
    }

    pub async fn group_freq_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::GRPFREQ).await
    }

    pub async fn enable_sub_call_async(&mut self, sub: SubCall) -> Result<(), Error<I2C::Error>> {
        self.update_mode1_async(sub.mode1_bit(), true).await
    }

    pub async fn disable_sub_call_async(&mut self, sub: SubCall) -> Result<(), Error<I2C::Error>> {
        self.update_mode1_async(sub.mode1_bit(), false).await
    }

    pub async fn is_enabled_sub_call_async(&mut self, sub: SubCall) -> Result<bool, Error<I2C::Error>> {
        Ok(self.mode1_async().await?.contains(sub.mode1_bit()))
    }

    pub async fn set_sub_call_address_async(&mut self, sub: SubCall, address: u8) -> Result<(), Error<I2C::Error>> {
        let value = self.encode_call_address(address)?;
        self.write_reg_async(sub.register(), value).await
    }

    pub async fn sub_call_address_async(&mut self, sub: SubCall) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg_async(sub.register()).await? >> 1)
    }

    pub async fn enable_all_call_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_mode1_async(Mode1::ALLCALL, true).await
    }

    pub async fn disable_all_call_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_mode1_async(Mode1::ALLCALL, false).await
    }

    pub async fn is_enabled_all_call_async(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.mode1_async().await?.contains(Mode1::ALLCALL))
    }

    pub async fn set_all_call_address_async(&mut self, address: u8) -> Result<(), Error<I2C::Error>> {
        let value = self.encode_call_address(address)?;
        self.write_reg_async(addr::ALLCALLADR, value).await
    }

    pub async fn all_call_address_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg_async(addr::ALLCALLADR).await? >> 1)
    }

    pub async fn software_reset_async(&mut self, method: ResetMethod) -> Result<(), Error<I2C::Error>> {
        match method {
            ResetMethod::SoftwareResetAddress => self.write_bytes_async(SWRST_ADDRESS, &SWRST_SEQUENCE).await,
            ResetMethod::GeneralCall => {
                self.write_bytes_async(GENERAL_CALL_ADDRESS, &[GENERAL_CALL_RESET])
                    .await
            }
        }
    }

    async fn update_mode1_async(&mut self, bit: Mode1, enable: bool) -> Result<(), Error<I2C::Error>> {
        let current = self.mode1_async().await?;
        let mut next = current;
        next.set(bit, enable);
        if next != current {
            self.write_reg_async(addr::MODE1, next.bits()).await?;
        }
        Ok(())
    }

    async fn flush_staged_async(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.staged.take() {
            Some(frame) => self
                .i2c
                .write(self.address, frame.as_bytes())
                .await
                .map_err(Error::I2c),
            None => Ok(()),
        }
    }

    async fn write_bytes_async(&mut self, address: u8, bytes: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut result = self.flush_staged_async().await;
        if result.is_ok() {
            result = self.i2c.write(address, bytes).await.map_err(Error::I2c);
        }
        self.record(result)
    }

    async fn write_reg_async(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_bytes_async(self.address, &[reg, value]).await
    }

    async fn read_reg_async(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        let mut result = self.flush_staged_async().await;
        if result.is_ok() {
            result = self
                .i2c
                .write_read(self.address, &[reg], &mut buf)
                .await
                .map_err(Error::Read);
        }
        self.record(result.map(|()| buf[0]))
    }
}
