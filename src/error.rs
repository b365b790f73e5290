/// Error returned by every driver operation.
///
/// The driver performs no retries and no translation: whatever the bus reported is handed
/// back unchanged inside [`Error::Transport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C transaction failed (NACK, arbitration loss, bus fault, timeout, ...).
    Transport(E),
}

impl<E> Error<E> {
    /// Unwrap the bus error.
    pub fn into_inner(self) -> E {
        match self {
            Error::Transport(e) => e,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "I2C transport error: {:?}", e),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
        }
    }
}

impl<E: embedded_hal::i2c::Error> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    /// The embedded-hal classification of the underlying bus error.
    pub fn i2c_kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Error::Transport(e) => e.kind(),
        }
    }
}
