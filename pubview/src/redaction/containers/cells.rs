//! Redaction traversal for interior-mutability types.
//!
//! Cells are read, never written. A cell that is exclusively held elsewhere
//! cannot be read without blocking or panicking, so it is reported as
//! [`Error::Borrowed`] instead.
//!
//! Cells are also where a cycle of plain references closes, so the cells that
//! can be re-entered while already being read go through the redactor's cycle
//! guard. A `Mutex` cannot: a second `try_lock` reports it as borrowed.

use std::{
    any::type_name,
    cell::{Cell, RefCell},
    sync::{Mutex, RwLock, TryLockError},
};

use crate::{
    error::{Error, Result},
    redaction::{redactor::Redactor, traits::Redact},
    value::Value,
};

impl<T> Redact for Cell<T>
where
    T: Redact + Copy,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redactor.shared(self.as_ptr() as usize, &self.get())
    }
}

impl<T> Redact for RefCell<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        let guard = self.try_borrow().map_err(|_| Error::Borrowed {
            type_name: type_name::<T>(),
        })?;
        redactor.shared(self.as_ptr().cast::<()>() as usize, &*guard)
    }
}

impl<T> Redact for Mutex<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        // A poisoned lock still holds readable data.
        let guard = match self.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return Err(Error::Borrowed {
                    type_name: type_name::<T>(),
                });
            }
        };
        guard.redact_with(redactor)
    }
}

impl<T> Redact for RwLock<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        let guard = match self.try_read() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return Err(Error::Borrowed {
                    type_name: type_name::<T>(),
                });
            }
        };
        let address = std::ptr::from_ref::<T>(&*guard).cast::<()>() as usize;
        redactor.shared(address, &*guard)
    }
}
