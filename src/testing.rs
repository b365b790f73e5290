//! In-memory MCP23017 register file used by the unit tests.
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

const GPIOA: u8 = 0x12;
const GPIOB: u8 = 0x13;
const OLATA: u8 = 0x14;
const IODIRA: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read(u8),
    Write(u8, u8),
}

/// Behaves like the chip with IOCON.BANK=0: GPIO reads return OLAT for output pins and the
/// external level in `inputs` for input pins, and GPIO writes land in OLAT.
pub(crate) struct RegisterFile {
    pub address: u8,
    pub regs: [u8; 0x16],
    pub inputs: [u8; 2],
    pub fail_reads: Option<u8>,
    pub fail_writes: Option<u8>,
    pub log: Vec<Access>,
    pointer: u8,
}

impl RegisterFile {
    pub fn new(address: u8) -> Self {
        let mut regs = [0x00; 0x16];
        regs[0x00] = 0xff;
        regs[0x01] = 0xff;
        Self {
            address,
            regs,
            inputs: [0x00; 2],
            fail_reads: None,
            fail_writes: None,
            log: Vec::new(),
            pointer: 0,
        }
    }

    fn load(&self, reg: u8) -> Result<u8, ErrorKind> {
        match reg {
            GPIOA | GPIOB => {
                let port = (reg - GPIOA) as usize;
                let iodir = self.regs[IODIRA as usize + port];
                let olat = self.regs[OLATA as usize + port];
                Ok((olat & !iodir) | (self.inputs[port] & iodir))
            }
            r if (r as usize) < self.regs.len() => Ok(self.regs[r as usize]),
            _ => Err(ErrorKind::Other),
        }
    }

    fn store(&mut self, reg: u8, value: u8) -> Result<(), ErrorKind> {
        let target = match reg {
            GPIOA | GPIOB => reg + 2,
            r if (r as usize) < self.regs.len() => r,
            _ => return Err(ErrorKind::Other),
        };
        self.regs[target as usize] = value;
        Ok(())
    }
}

impl ErrorType for RegisterFile {
    type Error = ErrorKind;
}

impl I2c for RegisterFile {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let (reg, data) = bytes.split_first().ok_or(ErrorKind::Other)?;
                    self.pointer = *reg;
                    for value in data {
                        if self.fail_writes == Some(self.pointer) {
                            return Err(ErrorKind::Bus);
                        }
                        self.store(self.pointer, *value)?;
                        self.log.push(Access::Write(self.pointer, *value));
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        if self.fail_reads == Some(self.pointer) {
                            return Err(ErrorKind::Bus);
                        }
                        *b = self.load(self.pointer)?;
                        self.log.push(Access::Read(self.pointer));
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for RegisterFile {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        I2c::transaction(self, address, operations)
    }
}
