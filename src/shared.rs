//! A driver behind a mutex, for handing out to several users.
//!
//! [`Mcp23017`] itself requires `&mut self`, so two users can only interleave operations by
//! going through something like this.  Each call below locks the mutex for the whole
//! read-modify-write sequence, which closes the lost-update window between the read and the
//! write.
use crate::{Bank, Direction, DeviceMutex, Error, Mcp23017, Pin};

/// `MCP23017` wrapped in a [`DeviceMutex`].
pub struct Shared<M>(M);

impl<I2C> Shared<core::cell::RefCell<Mcp23017<I2C>>>
where
    I2C: crate::I2cBus,
{
    /// Wrap `device` in a `RefCell`, for sharing within a single execution context.
    pub fn new(device: Mcp23017<I2C>) -> Self {
        Self::with_mutex(device)
    }
}

impl<I2C, M> Shared<M>
where
    I2C: crate::I2cBus,
    M: DeviceMutex<Device = Mcp23017<I2C>>,
{
    pub fn with_mutex(device: Mcp23017<I2C>) -> Self {
        Self(DeviceMutex::create(device))
    }

    /// Run `f` with exclusive access to the driver.
    ///
    /// Use this to group several operations that must not be interleaved with other users.
    pub fn lock<R, F: FnOnce(&mut Mcp23017<I2C>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    pub fn set_pin_mode(
        &self,
        pin: Pin,
        direction: Direction,
    ) -> Result<(), Error<I2C::BusError>> {
        self.0.lock(|dev| dev.set_pin_mode(pin, direction))
    }

    pub fn digital_write(&self, pin: Pin, value: bool) -> Result<(), Error<I2C::BusError>> {
        self.0.lock(|dev| dev.digital_write(pin, value))
    }

    pub fn toggle(&self, pin: Pin) -> Result<(), Error<I2C::BusError>> {
        self.0.lock(|dev| dev.toggle(pin))
    }

    pub fn pin_mode(&self, pin: Pin) -> Result<Direction, Error<I2C::BusError>> {
        self.0.lock(|dev| dev.pin_mode(pin))
    }

    pub fn is_set_high(&self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.0.lock(|dev| dev.is_set_high(pin))
    }

    pub fn pull_up(&self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.0.lock(|dev| dev.pull_up(pin))
    }

    pub fn set_pull_up(&self, pin: Pin, enable: bool) -> Result<(), Error<I2C::BusError>> {
        self.0.lock(|dev| dev.set_pull_up(pin, enable))
    }

    pub fn digital_read(&self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.0.lock(|dev| dev.digital_read(pin))
    }

    pub fn digital_read_bank(&self, bank: Bank) -> Result<u8, Error<I2C::BusError>> {
        self.0.lock(|dev| dev.digital_read_bank(bank))
    }

    pub fn digital_read_all(&self) -> Result<(u8, u8), Error<I2C::BusError>> {
        self.0.lock(|dev| dev.digital_read_all())
    }

    /// Hand out one pin object per expander pin.  All pins start out as inputs, which is the
    /// reset state of the chip.
    pub fn split(&mut self) -> Parts<'_, M> {
        Parts {
            gpa0: crate::ExpanderPin::new(Pin::A0, &self.0),
            gpa1: crate::ExpanderPin::new(Pin::A1, &self.0),
            gpa2: crate::ExpanderPin::new(Pin::A2, &self.0),
            gpa3: crate::ExpanderPin::new(Pin::A3, &self.0),
            gpa4: crate::ExpanderPin::new(Pin::A4, &self.0),
            gpa5: crate::ExpanderPin::new(Pin::A5, &self.0),
            gpa6: crate::ExpanderPin::new(Pin::A6, &self.0),
            gpa7: crate::ExpanderPin::new(Pin::A7, &self.0),
            gpb0: crate::ExpanderPin::new(Pin::B0, &self.0),
            gpb1: crate::ExpanderPin::new(Pin::B1, &self.0),
            gpb2: crate::ExpanderPin::new(Pin::B2, &self.0),
            gpb3: crate::ExpanderPin::new(Pin::B3, &self.0),
            gpb4: crate::ExpanderPin::new(Pin::B4, &self.0),
            gpb5: crate::ExpanderPin::new(Pin::B5, &self.0),
            gpb6: crate::ExpanderPin::new(Pin::B6, &self.0),
            gpb7: crate::ExpanderPin::new(Pin::B7, &self.0),
        }
    }

    /// Take the driver back out of the mutex.
    pub fn into_inner(self) -> M {
        self.0
    }
}

pub struct Parts<'a, M> {
    pub gpa0: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa1: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa2: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa3: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa4: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa5: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa6: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpa7: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb0: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb1: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb2: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb3: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb4: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb5: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb6: crate::ExpanderPin<'a, crate::mode::Input, M>,
    pub gpb7: crate::ExpanderPin<'a, crate::mode::Input, M>,
}
