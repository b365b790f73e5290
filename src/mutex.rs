/// Lock that serializes access to one [`Mcp23017`][crate::Mcp23017].
///
/// [`Shared`][crate::Shared] keeps its driver behind one of these and takes the lock once per
/// operation.  A read-modify-write therefore reads the register, patches the bit and writes it
/// back before any other holder of the same `Shared` gets to touch the chip.
///
/// Which lock to pick depends on where the users of the handle run:
///
/// | Lock | Feature | Users may live in |
/// | --- | --- | --- |
/// | [`core::cell::RefCell`] | _always available_ | one execution context; a re-entrant access panics |
/// | [`std::sync::Mutex`][mutex-std] | `std` | several threads |
/// | [`critical_section::Mutex<RefCell<_>>`][mutex-cs] | `critical-section` | thread mode and interrupt handlers |
///
/// [mutex-std]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
/// [mutex-cs]: https://docs.rs/critical-section/latest/critical_section/struct.Mutex.html
///
/// An RTOS or executor mutex can be plugged in by implementing the trait on a newtype.  The
/// closure passed to `lock` must run while the lock is held:
///
/// ```
/// use mcp23017_regs::{DeviceMutex, Mcp23017, Pin, Shared};
/// use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
///
/// struct BoardLock<T>(std::sync::Mutex<T>);
///
/// impl<T> DeviceMutex for BoardLock<T> {
///     type Device = T;
///
///     fn create(device: T) -> Self {
///         Self(std::sync::Mutex::new(device))
///     }
///
///     fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
///         f(&mut self.0.lock().unwrap())
///     }
/// }
///
/// let i2c = Mock::new(&[Transaction::write_read(0x20, vec![0x13], vec![0x01])]);
/// let shared: Shared<BoardLock<_>> = Shared::with_mutex(Mcp23017::new(i2c, 0x20));
/// assert!(shared.digital_read(Pin::B0).unwrap());
/// shared.into_inner().0.into_inner().unwrap().release().done();
/// ```
pub trait DeviceMutex {
    /// What the lock protects, normally an [`Mcp23017`][crate::Mcp23017].
    type Device;

    /// Put `v` behind a fresh lock.
    fn create(v: Self::Device) -> Self;

    /// Run `f` on the protected value while holding the lock.
    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R;
}

impl<T> DeviceMutex for core::cell::RefCell<T> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        core::cell::RefCell::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        let mut v = self.borrow_mut();
        f(&mut v)
    }
}

#[cfg(any(test, feature = "std"))]
impl<T> DeviceMutex for std::sync::Mutex<T> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        std::sync::Mutex::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        // The driver keeps no state a panicking user could leave half-updated.
        let mut v = match self.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut v)
    }
}

#[cfg(feature = "critical-section")]
impl<T> DeviceMutex for critical_section::Mutex<core::cell::RefCell<T>> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        critical_section::Mutex::new(core::cell::RefCell::new(v))
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut v = self.borrow_ref_mut(cs);
            f(&mut v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceMutex;
    use core::cell::RefCell;

    #[test]
    fn refcell_lock_returns_closure_value() {
        let m = <RefCell<u8> as DeviceMutex>::create(0x10);
        let v = DeviceMutex::lock(&m, |v| {
            *v |= 0x01;
            *v
        });
        assert_eq!(v, 0x11);
    }

    #[test]
    fn poisoned_std_mutex_keeps_working() {
        let m = <std::sync::Mutex<u8> as DeviceMutex>::create(0x00);
        let _ = std::panic::catch_unwind(|| {
            DeviceMutex::lock(&m, |_| panic!("user code panicked"));
        });
        assert!(m.is_poisoned());
        DeviceMutex::lock(&m, |v| *v = 0x42);
        assert_eq!(DeviceMutex::lock(&m, |v| *v), 0x42);
    }
}
