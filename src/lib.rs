//! Register-level driver for the `MCP23017` "16-Bit I/O Expander with Serial Interface".
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The MCP23017 offers two eight-bit GPIO ports, A (pins 0-7) and B (pins 8-15).  Each port has
//! its own direction, pull-up, input and output-latch register.  This driver turns per-pin
//! requests into single-register read-modify-write sequences and keeps no copy of the chip's
//! state between calls.
//!
//! ```
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[
//! #     embedded_hal_mock::eh1::i2c::Transaction::write_read(0x20, vec![0x00], vec![0xff]),
//! #     embedded_hal_mock::eh1::i2c::Transaction::write(0x20, vec![0x00, 0xfe]),
//! #     embedded_hal_mock::eh1::i2c::Transaction::write_read(0x20, vec![0x14], vec![0x00]),
//! #     embedded_hal_mock::eh1::i2c::Transaction::write(0x20, vec![0x14, 0x01]),
//! #     embedded_hal_mock::eh1::i2c::Transaction::write_read(0x20, vec![0x12], vec![0x01]),
//! # ]);
//! use mcp23017_regs::{Direction, Mcp23017, Pin};
//!
//! let mut mcp = Mcp23017::new(i2c, mcp23017_regs::DEFAULT_ADDRESS);
//! mcp.set_pin_mode(Pin::A0, Direction::Output)?;
//! mcp.digital_write(Pin::A0, true)?;
//! assert!(mcp.digital_read(Pin::A0)?);
//! # mcp.release().done();
//! # Ok::<(), mcp23017_regs::Error<embedded_hal::i2c::ErrorKind>>(())
//! ```
//!
//! A driver is owned by one user.  To share it, wrap it in [`Shared`], which serializes each
//! read-modify-write through a [`DeviceMutex`] and can [`split`][Shared::split] the chip into
//! sixteen embedded-hal pin objects.
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod bus;
mod common;
mod driver;
#[cfg(feature = "async")]
mod driver_async;
mod error;
mod fmt;
mod mutex;
mod pin;
mod register;
mod shared;
#[cfg(test)]
mod testing;

pub use bus::I2cBus;
pub use common::mode;
pub use common::{Bank, Direction, InvalidPin, Pin};
pub use driver::{address_from_pins, Mcp23017, DEFAULT_ADDRESS};
#[cfg(feature = "async")]
pub use driver_async::Mcp23017Async;
pub use error::Error;
pub use mutex::DeviceMutex;
pub use pin::ExpanderPin;
pub use register::Register;
pub use shared::{Parts, Shared};

pub(crate) use bus::I2cExt;
