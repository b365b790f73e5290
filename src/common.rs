/// One of the sixteen GPIO pins of the expander.
///
/// `A0..=A7` live in port A, `B0..=B7` in port B.  The numeric value of each variant is the
/// pin number (0-15) used in the datasheet's combined 16-bit view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pin {
    A0 = 0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
}

const PINS: [Pin; 16] = [
    Pin::A0,
    Pin::A1,
    Pin::A2,
    Pin::A3,
    Pin::A4,
    Pin::A5,
    Pin::A6,
    Pin::A7,
    Pin::B0,
    Pin::B1,
    Pin::B2,
    Pin::B3,
    Pin::B4,
    Pin::B5,
    Pin::B6,
    Pin::B7,
];

impl Pin {
    /// All pins, ordered by pin number.
    pub const ALL: [Pin; 16] = PINS;

    /// Resolve the pin to its port and bit position within that port's registers.
    ///
    /// Every register access in this crate goes through this mapping.
    pub const fn location(self) -> (Bank, u8) {
        let n = self as u8;
        let bank = match n >> 3 {
            0 => Bank::A,
            _ => Bank::B,
        };
        (bank, n & 0x07)
    }

    pub const fn bank(self) -> Bank {
        self.location().0
    }

    /// Bit position (0-7) inside the port register.
    pub const fn bit(self) -> u8 {
        self.location().1
    }

    /// Single-bit mask selecting this pin in its port register.
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// `(mask_set, mask_clear)` pair that sets or clears this pin's bit.
    pub(crate) const fn masks(self, set: bool) -> (u8, u8) {
        if set {
            (self.mask(), 0)
        } else {
            (0, self.mask())
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl From<Pin> for u8 {
    fn from(p: Pin) -> u8 {
        p as u8
    }
}

impl TryFrom<u8> for Pin {
    type Error = InvalidPin;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        PINS.get(n as usize).copied().ok_or(InvalidPin(n))
    }
}

/// A pin number outside of 0-15 was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPin(pub u8);

impl core::fmt::Display for InvalidPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid pin number {} (expected 0-15)", self.0)
    }
}

impl core::error::Error for InvalidPin {}

/// One of the two eight-bit ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    A,
    B,
}

impl Bank {
    /// The eight pins of this port, ordered by bit position.
    pub fn pins(self) -> [Pin; 8] {
        let mut out = [Pin::A0; 8];
        let offset = match self {
            Bank::A => 0,
            Bank::B => 8,
        };
        out.copy_from_slice(&PINS[offset..offset + 8]);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Value of this pin's IODIR bit: 1 for input, 0 for output.
    pub(crate) fn iodir_bit(self) -> bool {
        matches!(self, Direction::Input)
    }
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an output.
    pub struct Output;
    impl HasOutput for Output {}
}
