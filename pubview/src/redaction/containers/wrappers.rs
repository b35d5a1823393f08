//! Redaction traversal for references and wrapper container types.
//!
//! References are transparent in the output tree: a `Box<T>`, `&T` or `Rc<T>`
//! produces exactly what `T` produces. `Option::None` is the null marker.

use std::{borrow::Cow, rc, sync};

use crate::{
    error::Result,
    redaction::{redactor::Redactor, traits::Redact},
    value::{Value, Variant},
};

// =============================================================================
// Nullable and borrowed references
// =============================================================================

impl<T> Redact for Option<T>
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        match self {
            Some(value) => value.redact_with(redactor),
            None => Ok(Value::Null),
        }
    }
}

impl<T> Redact for &T
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        (**self).redact_with(redactor)
    }
}

impl<T> Redact for &mut T
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        (**self).redact_with(redactor)
    }
}

impl<T> Redact for Cow<'_, [T]>
where
    T: Redact + Clone,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        self.as_ref().redact_with(redactor)
    }
}

// =============================================================================
// Owned pointers
// =============================================================================

impl<T> Redact for Box<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        (**self).redact_with(redactor)
    }
}

// =============================================================================
// Shared pointers (cycle-guarded)
// =============================================================================

impl<T> Redact for rc::Rc<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        let address = rc::Rc::as_ptr(self).cast::<()>() as usize;
        redactor.shared(address, &**self)
    }
}

impl<T> Redact for sync::Arc<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        let address = sync::Arc::as_ptr(self).cast::<()>() as usize;
        redactor.shared(address, &**self)
    }
}

/// A dangling weak reference is null.
impl<T> Redact for rc::Weak<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        self.upgrade()
            .map_or(Ok(Value::Null), |strong| strong.redact_with(redactor))
    }
}

impl<T> Redact for sync::Weak<T>
where
    T: Redact + ?Sized,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        self.upgrade()
            .map_or(Ok(Value::Null), |strong| strong.redact_with(redactor))
    }
}

// =============================================================================
// Result
// =============================================================================

/// Emitted the way serde emits `Result`: an `Ok` or `Err` newtype variant.
impl<T, E> Redact for std::result::Result<T, E>
where
    T: Redact,
    E: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        let variant = match self {
            Ok(value) => Variant::newtype("Result", 0, "Ok", value.redact_with(redactor)?),
            Err(err) => Variant::newtype("Result", 1, "Err", err.redact_with(redactor)?),
        };
        Ok(variant.into())
    }
}
