//! Blocking MCP23017 driver.
//!
//! Every mutating operation is a single read-modify-write of one register: the register is read,
//! one bit is changed, and the whole byte is written back.  Nothing is cached between
//! operations, so the seven untouched bits are always the ones the chip just reported.
use crate::fmt::debug;
use crate::{Bank, Direction, Error, I2cExt, Pin, Register};

/// Address of a chip with all three address straps (A0-A2) tied low.
pub const DEFAULT_ADDRESS: u8 = 0x20;

/// Compute the seven-bit bus address from the state of the A0-A2 strap pins.
pub const fn address_from_pins(a0: bool, a1: bool, a2: bool) -> u8 {
    DEFAULT_ADDRESS | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8)
}

/// `MCP23017` "16-Bit I/O Expander with Serial Interface"
pub struct Mcp23017<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C> Mcp23017<I2C> {
    /// Bind a driver to the chip at seven-bit `address`.
    ///
    /// No bus traffic happens here; the first operation is what finds out whether the
    /// device is actually present.
    pub fn new(i2c: I2C, address: u8) -> Self {
        debug!("mcp23017@{:#x}: handle created", address);
        Self { i2c, addr: address }
    }

    /// Bind a driver using the level of the A0-A2 address straps.
    pub fn with_address_pins(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        Self::new(i2c, address_from_pins(a0, a1, a2))
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: crate::I2cBus> Mcp23017<I2C> {
    /// Read one raw register.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<I2C::BusError>> {
        Ok(self.i2c.read_reg(self.addr, reg)?)
    }

    /// Write one raw register.
    ///
    /// If this fails, the chip may or may not have latched the value.  Read it back when the
    /// difference matters.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::BusError>> {
        Ok(self.i2c.write_reg(self.addr, reg, value)?)
    }

    fn update_bit(
        &mut self,
        reg: Register,
        pin: Pin,
        set: bool,
    ) -> Result<(), Error<I2C::BusError>> {
        let (mask_set, mask_clear) = pin.masks(set);
        Ok(self
            .i2c
            .update_reg(self.addr, reg.address(pin.bank()), mask_set, mask_clear)?)
    }

    fn read_bit(&mut self, reg: Register, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        let (bank, bit) = pin.location();
        let val = self.read_register(reg.address(bank))?;
        Ok(val & (1 << bit) != 0)
    }

    /// Configure `pin` as input or output (IODIR).
    pub fn set_pin_mode(
        &mut self,
        pin: Pin,
        direction: Direction,
    ) -> Result<(), Error<I2C::BusError>> {
        self.update_bit(Register::Iodir, pin, direction.iodir_bit())
    }

    /// Read back the configured direction of `pin`.
    pub fn pin_mode(&mut self, pin: Pin) -> Result<Direction, Error<I2C::BusError>> {
        Ok(match self.read_bit(Register::Iodir, pin)? {
            true => Direction::Input,
            false => Direction::Output,
        })
    }

    /// Drive `pin` high or low by updating its output latch (OLAT).
    pub fn digital_write(&mut self, pin: Pin, value: bool) -> Result<(), Error<I2C::BusError>> {
        self.update_bit(Register::Olat, pin, value)
    }

    /// Invert the output latch bit of `pin`.
    pub fn toggle(&mut self, pin: Pin) -> Result<(), Error<I2C::BusError>> {
        let (bank, bit) = pin.location();
        let reg = Register::Olat.address(bank);
        let val = self.read_register(reg)?;
        self.write_register(reg, val ^ (1 << bit))
    }

    /// Whether the output latch of `pin` is set.
    pub fn is_set_high(&mut self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.read_bit(Register::Olat, pin)
    }

    /// Enable or disable the weak internal pull-up of `pin` (GPPU).
    pub fn set_pull_up(&mut self, pin: Pin, enable: bool) -> Result<(), Error<I2C::BusError>> {
        self.update_bit(Register::Gppu, pin, enable)
    }

    pub fn pull_up(&mut self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.read_bit(Register::Gppu, pin)
    }

    /// Read the live logic level of `pin` (GPIO).
    pub fn digital_read(&mut self, pin: Pin) -> Result<bool, Error<I2C::BusError>> {
        self.read_bit(Register::Gpio, pin)
    }

    /// Read the GPIO register of one port.  Bit 0 is the lowest-numbered pin of the port.
    pub fn digital_read_bank(&mut self, bank: Bank) -> Result<u8, Error<I2C::BusError>> {
        self.read_register(Register::Gpio.address(bank))
    }

    /// Read both GPIO registers, port A first.
    ///
    /// If the port A read fails, port B is not read.
    pub fn digital_read_all(&mut self) -> Result<(u8, u8), Error<I2C::BusError>> {
        let a = self.digital_read_bank(Bank::A)?;
        let b = self.digital_read_bank(Bank::B)?;
        Ok((a, b))
    }
}
