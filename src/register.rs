//! MCP23017 register map, as far as this driver uses it.
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! N.B.: These addresses are for IOCON.BANK=0, which is the reset state of the chip (and this
//! driver does not change).  In that layout the A and B registers of each kind are interleaved,
//! so the port B address is always the port A address plus one.
//!
//! For all registers, the reset value is 0x00, except for IODIR{A,B} which are 0xFF (making all
//! pins inputs) at reset.
use crate::Bank;

/// The kinds of per-port register this driver touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// IODIR: input/output direction: 0=output; 1=input
    Iodir,
    /// GPPU: GPIO pull-ups: enables weak internal pull-ups on each pin (when configured
    ///   as an input)
    Gppu,
    /// GPIO: reflects logic level on pins
    Gpio,
    /// OLAT: output latches: sets state for pins configured as outputs
    Olat,
}

impl Register {
    /// Address of this register for the given port.
    pub const fn address(self, bank: Bank) -> u8 {
        match (self, bank) {
            (Register::Iodir, Bank::A) => 0x00,
            (Register::Iodir, Bank::B) => 0x01,
            (Register::Gppu, Bank::A) => 0x0c,
            (Register::Gppu, Bank::B) => 0x0d,
            (Register::Gpio, Bank::A) => 0x12,
            (Register::Gpio, Bank::B) => 0x13,
            (Register::Olat, Bank::A) => 0x14,
            (Register::Olat, Bank::B) => 0x15,
        }
    }
}
