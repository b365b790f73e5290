use crate::fmt::trace;
use embedded_hal::i2c as hal_i2c;

/// Blanket trait for any embedded-hal I2C bus with seven-bit addressing.
///
/// The driver needs exactly one kind of bus operation: write some bytes, then optionally read
/// some bytes back, without releasing the bus in between.
pub trait I2cBus: hal_i2c::I2c<hal_i2c::SevenBitAddress> {
    type BusError: From<<Self as hal_i2c::ErrorType>::Error>;
}

impl<T, E> I2cBus for T
where
    T: hal_i2c::I2c<hal_i2c::SevenBitAddress, Error = E>,
{
    type BusError = E;
}

pub(crate) trait I2cExt {
    type Error;

    /// Write `write` to the device, then fill `read`.  An empty `read` skips the read phase.
    fn transact(&mut self, addr: u8, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error>;
    fn write_reg(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;
    fn read_reg(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error>;
    fn update_reg(
        &mut self,
        addr: u8,
        reg: u8,
        mask_set: u8,
        mask_clear: u8,
    ) -> Result<(), Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    fn transact(&mut self, addr: u8, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error> {
        if read.is_empty() {
            self.write(addr, write)?;
        } else {
            self.write_read(addr, write, read)?;
        }
        Ok(())
    }

    fn write_reg(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        trace!("mcp23017@{:#x}: write reg {:#x} <- {:#x}", addr, reg, value);
        self.transact(addr, &[reg, value], &mut [])
    }

    fn read_reg(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.transact(addr, &[reg], &mut buf)?;
        trace!("mcp23017@{:#x}: read reg {:#x} -> {:#x}", addr, reg, buf[0]);
        Ok(buf[0])
    }

    fn update_reg(
        &mut self,
        addr: u8,
        reg: u8,
        mask_set: u8,
        mask_clear: u8,
    ) -> Result<(), Self::Error> {
        let val = self.read_reg(addr, reg)?;
        self.write_reg(addr, reg, apply_masks(val, mask_set, mask_clear))
    }
}

/// Set the bits in `mask_set`, then clear the bits in `mask_clear`.
pub(crate) const fn apply_masks(val: u8, mask_set: u8, mask_clear: u8) -> u8 {
    (val | mask_set) & !mask_clear
}

#[cfg(test)]
mod tests {
    use super::apply_masks;

    #[test]
    fn masks() {
        assert_eq!(apply_masks(0b1010_1010, 0b0000_0001, 0), 0b1010_1011);
        assert_eq!(apply_masks(0b1010_1010, 0, 0b1000_0000), 0b0010_1010);
        // clear wins when a bit is in both masks
        assert_eq!(apply_masks(0x00, 0x10, 0x10), 0x00);
    }
}
