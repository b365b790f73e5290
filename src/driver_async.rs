//! Asynchronous MCP23017 driver, using embedded-hal-async's [`i2c::I2c`] trait.
//!
//! This module is only built if the `"async"` feature is enabled.  It issues exactly the same
//! bus transactions as the blocking [`Mcp23017`][crate::Mcp23017], in the same order.
//!
//! [`i2c::I2c`]: embedded_hal_async::i2c::I2c
use crate::bus::apply_masks;
use crate::fmt::{debug, trace};
use crate::{address_from_pins, Bank, Direction, Error, Pin, Register};
use embedded_hal_async::i2c::I2c;

/// `MCP23017` on an asynchronous I2C bus.
pub struct Mcp23017Async<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C> Mcp23017Async<I2C> {
    /// Bind a driver to the chip at seven-bit `address`.  No bus traffic happens here.
    pub fn new(i2c: I2C, address: u8) -> Self {
        debug!("mcp23017@{:#x}: async handle created", address);
        Self { i2c, addr: address }
    }

    pub fn with_address_pins(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        Self::new(i2c, address_from_pins(a0, a1, a2))
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Mcp23017Async<I2C> {
    pub async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0x00];
        self.i2c.write_read(self.addr, &[reg], &mut buf).await?;
        trace!("mcp23017@{:#x}: read reg {:#x} -> {:#x}", self.addr, reg, buf[0]);
        Ok(buf[0])
    }

    pub async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        trace!("mcp23017@{:#x}: write reg {:#x} <- {:#x}", self.addr, reg, value);
        self.i2c.write(self.addr, &[reg, value]).await?;
        Ok(())
    }

    async fn update_bit(
        &mut self,
        reg: Register,
        pin: Pin,
        set: bool,
    ) -> Result<(), Error<I2C::Error>> {
        let reg = reg.address(pin.bank());
        let (mask_set, mask_clear) = pin.masks(set);
        let val = self.read_register(reg).await?;
        self.write_register(reg, apply_masks(val, mask_set, mask_clear))
            .await
    }

    async fn read_bit(&mut self, reg: Register, pin: Pin) -> Result<bool, Error<I2C::Error>> {
        let (bank, bit) = pin.location();
        let val = self.read_register(reg.address(bank)).await?;
        Ok(val & (1 << bit) != 0)
    }

    pub async fn set_pin_mode(
        &mut self,
        pin: Pin,
        direction: Direction,
    ) -> Result<(), Error<I2C::Error>> {
        self.update_bit(Register::Iodir, pin, direction.iodir_bit())
            .await
    }

    pub async fn pin_mode(&mut self, pin: Pin) -> Result<Direction, Error<I2C::Error>> {
        Ok(match self.read_bit(Register::Iodir, pin).await? {
            true => Direction::Input,
            false => Direction::Output,
        })
    }

    pub async fn digital_write(&mut self, pin: Pin, value: bool) -> Result<(), Error<I2C::Error>> {
        self.update_bit(Register::Olat, pin, value).await
    }

    pub async fn toggle(&mut self, pin: Pin) -> Result<(), Error<I2C::Error>> {
        let (bank, bit) = pin.location();
        let reg = Register::Olat.address(bank);
        let val = self.read_register(reg).await?;
        self.write_register(reg, val ^ (1 << bit)).await
    }

    pub async fn is_set_high(&mut self, pin: Pin) -> Result<bool, Error<I2C::Error>> {
        self.read_bit(Register::Olat, pin).await
    }

    pub async fn set_pull_up(&mut self, pin: Pin, enable: bool) -> Result<(), Error<I2C::Error>> {
        self.update_bit(Register::Gppu, pin, enable).await
    }

    pub async fn pull_up(&mut self, pin: Pin) -> Result<bool, Error<I2C::Error>> {
        self.read_bit(Register::Gppu, pin).await
    }

    pub async fn digital_read(&mut self, pin: Pin) -> Result<bool, Error<I2C::Error>> {
        self.read_bit(Register::Gpio, pin).await
    }

    pub async fn digital_read_bank(&mut self, bank: Bank) -> Result<u8, Error<I2C::Error>> {
        self.read_register(Register::Gpio.address(bank)).await
    }

    /// Read both GPIO registers, port A first.  If the port A read fails, port B is not read.
    pub async fn digital_read_all(&mut self) -> Result<(u8, u8), Error<I2C::Error>> {
        let a = self.digital_read_bank(Bank::A).await?;
        let b = self.digital_read_bank(Bank::B).await?;
        Ok((a, b))
    }
}
