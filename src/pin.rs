use crate::{DeviceMutex, Direction, Error, Mcp23017, Pin};
use core::marker::PhantomData;
use embedded_hal::digital::{self as hal_digital, PinState};

/// Representation of a single expander pin.
///
/// `ExpanderPin` is not constructed directly, this type is created by wrapping a driver in a
/// [`Shared`][crate::Shared] and then getting access to all its pins using the `.split()`
/// method.  Every access goes to the chip; the pin keeps no copy of the register contents.
pub struct ExpanderPin<'a, MODE, MUTEX> {
    pin: Pin,
    device: &'a MUTEX,
    _m: PhantomData<MODE>,
}

impl<'a, MODE, MUTEX> ExpanderPin<'a, MODE, MUTEX> {
    pub(crate) fn new(pin: Pin, device: &'a MUTEX) -> Self {
        Self {
            pin,
            device,
            _m: PhantomData,
        }
    }

    fn into_mode<NEW>(self) -> ExpanderPin<'a, NEW, MUTEX> {
        ExpanderPin {
            pin: self.pin,
            device: self.device,
            _m: PhantomData,
        }
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }
}

impl<'a, MODE, MUTEX, I2C> ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    pub fn into_input(
        self,
    ) -> Result<ExpanderPin<'a, crate::mode::Input, MUTEX>, Error<I2C::BusError>> {
        self.device
            .lock(|dev| dev.set_pin_mode(self.pin, Direction::Input))?;
        Ok(self.into_mode())
    }

    /// Make the pin an input with its weak pull-up enabled.
    pub fn into_pull_up_input(
        self,
    ) -> Result<ExpanderPin<'a, crate::mode::Input, MUTEX>, Error<I2C::BusError>> {
        let pin = self.pin;
        self.device.lock(|dev| {
            dev.set_pin_mode(pin, Direction::Input)?;
            dev.set_pull_up(pin, true)
        })?;
        Ok(self.into_mode())
    }

    /// Make the pin an output, driving whatever level its latch currently holds.
    pub fn into_output(
        self,
    ) -> Result<ExpanderPin<'a, crate::mode::Output, MUTEX>, Error<I2C::BusError>> {
        self.device
            .lock(|dev| dev.set_pin_mode(self.pin, Direction::Output))?;
        Ok(self.into_mode())
    }

    /// Make the pin an output driving `state`.
    ///
    /// The latch is written before the direction is switched, so the pin never briefly drives
    /// a stale level.
    pub fn into_output_with_state(
        self,
        state: PinState,
    ) -> Result<ExpanderPin<'a, crate::mode::Output, MUTEX>, Error<I2C::BusError>> {
        let pin = self.pin;
        self.device.lock(|dev| {
            dev.digital_write(pin, state == PinState::High)?;
            dev.set_pin_mode(pin, Direction::Output)
        })?;
        Ok(self.into_mode())
    }

    pub fn set_pull_up(&mut self, enable: bool) -> Result<(), Error<I2C::BusError>> {
        self.device.lock(|dev| dev.set_pull_up(self.pin, enable))
    }
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, I2C> ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    pub fn is_high(&self) -> Result<bool, Error<I2C::BusError>> {
        self.device.lock(|dev| dev.digital_read(self.pin))
    }

    pub fn is_low(&self) -> Result<bool, Error<I2C::BusError>> {
        self.is_high().map(|b| !b)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    pub fn set_high(&mut self) -> Result<(), Error<I2C::BusError>> {
        self.device.lock(|dev| dev.digital_write(self.pin, true))
    }

    pub fn set_low(&mut self) -> Result<(), Error<I2C::BusError>> {
        self.device.lock(|dev| dev.digital_write(self.pin, false))
    }

    pub fn set_state(&mut self, state: PinState) -> Result<(), Error<I2C::BusError>> {
        self.device
            .lock(|dev| dev.digital_write(self.pin, state == PinState::High))
    }

    pub fn is_set_high(&self) -> Result<bool, Error<I2C::BusError>> {
        self.device.lock(|dev| dev.is_set_high(self.pin))
    }

    pub fn is_set_low(&self) -> Result<bool, Error<I2C::BusError>> {
        self.is_set_high().map(|b| !b)
    }

    pub fn toggle(&mut self) -> Result<(), Error<I2C::BusError>> {
        self.device.lock(|dev| dev.toggle(self.pin))
    }
}

impl<'a, MODE, MUTEX, I2C> hal_digital::ErrorType for ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    I2C::BusError: embedded_hal::i2c::Error,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    type Error = Error<I2C::BusError>;
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, I2C> hal_digital::InputPin
    for ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    I2C::BusError: embedded_hal::i2c::Error,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        ExpanderPin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        ExpanderPin::is_low(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> hal_digital::OutputPin
    for ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    I2C::BusError: embedded_hal::i2c::Error,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        ExpanderPin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        ExpanderPin::set_high(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> hal_digital::StatefulOutputPin
    for ExpanderPin<'a, MODE, MUTEX>
where
    I2C: crate::I2cBus,
    I2C::BusError: embedded_hal::i2c::Error,
    MUTEX: DeviceMutex<Device = Mcp23017<I2C>>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        ExpanderPin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        ExpanderPin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        ExpanderPin::toggle(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mcp23017, Shared};
    use embedded_hal::digital::{InputPin, OutputPin, PinState, StatefulOutputPin};
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn split_pins() {
        let expectations = [
            // pin setup gpa0 as output
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0xff]),
            mock_i2c::Transaction::write(0x22, vec![0x00, 0xfe]),
            // pin setup gpb7 as output, latched high first
            mock_i2c::Transaction::write_read(0x22, vec![0x15], vec![0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x15, 0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x01], vec![0xff]),
            mock_i2c::Transaction::write(0x22, vec![0x01, 0x7f]),
            // pin setup gpa7 as pulled-up input
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0xfe]),
            mock_i2c::Transaction::write(0x22, vec![0x00, 0xfe]),
            mock_i2c::Transaction::write_read(0x22, vec![0x0c], vec![0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x0c, 0x80]),
            // output gpa0 high and low
            mock_i2c::Transaction::write_read(0x22, vec![0x14], vec![0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x14, 0x01]),
            mock_i2c::Transaction::write_read(0x22, vec![0x14], vec![0x01]),
            mock_i2c::Transaction::write(0x22, vec![0x14, 0x00]),
            // gpb7 latch state and toggle
            mock_i2c::Transaction::write_read(0x22, vec![0x15], vec![0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x15], vec![0x80]),
            mock_i2c::Transaction::write(0x22, vec![0x15, 0x00]),
            // input gpa7 high and low
            mock_i2c::Transaction::write_read(0x22, vec![0x12], vec![0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x12], vec![0x7f]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut mcp = Shared::new(Mcp23017::with_address_pins(bus.clone(), false, true, false));
        let pins = mcp.split();

        let mut gpa0 = pins.gpa0.into_output().unwrap();
        let mut gpb7 = pins.gpb7.into_output_with_state(PinState::High).unwrap();
        let mut gpa7 = pins.gpa7.into_pull_up_input().unwrap();

        OutputPin::set_high(&mut gpa0).unwrap();
        OutputPin::set_low(&mut gpa0).unwrap();

        assert!(StatefulOutputPin::is_set_high(&mut gpb7).unwrap());
        StatefulOutputPin::toggle(&mut gpb7).unwrap();

        assert!(InputPin::is_high(&mut gpa7).unwrap());
        assert!(InputPin::is_low(&mut gpa7).unwrap());

        bus.done();
    }
}
