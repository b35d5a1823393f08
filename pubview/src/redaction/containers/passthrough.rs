//! Passthrough `Redact` implementations for scalar-like types.

use std::{
    borrow::Cow,
    marker::PhantomData,
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroU8, NonZeroU16, NonZeroU32,
        NonZeroU64,
    },
    time::{Duration, SystemTime},
};

use super::{impl_redact_scalar, impl_redact_verbatim};
use crate::{
    error::Result,
    redaction::{redactor::Redactor, traits::Redact},
    value::Value,
};

// =============================================================================
// Scalars
// =============================================================================

impl_redact_scalar!(Bool => bool);
impl_redact_scalar!(Int => i8, i16, i32, i64);
impl_redact_scalar!(UInt => u8, u16, u32, u64);
impl_redact_scalar!(Float => f32, f64);

// Pointer-sized and 128-bit integers go through serde so overflow is reported
// rather than truncated.
impl_redact_verbatim!(isize, usize, i128, u128);

// =============================================================================
// NonZero integers
// =============================================================================

impl_redact_verbatim!(
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64,
);

// =============================================================================
// Text
// =============================================================================

impl Redact for str {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Str(self.to_owned()))
    }
}

impl Redact for String {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Str(self.clone()))
    }
}

impl Redact for char {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Str(self.to_string()))
    }
}

impl Redact for Cow<'_, str> {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Str(self.as_ref().to_owned()))
    }
}

// =============================================================================
// Unit-like values
// =============================================================================

impl Redact for () {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Null)
    }
}

impl<T: ?Sized> Redact for PhantomData<T> {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(Value::Null)
    }
}

// =============================================================================
// Already-redacted trees
// =============================================================================

/// Re-redacting a tree is an identity copy.
impl Redact for Value {
    fn redact_with(&self, _redactor: &mut Redactor) -> Result<Value> {
        Ok(self.clone())
    }
}

// =============================================================================
// Opaque std leaves
// =============================================================================

impl_redact_verbatim!(Duration, SystemTime);
impl_redact_verbatim!(serde_json::Value);

// =============================================================================
// Date/time passthrough implementations (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

    use super::impl_redact_verbatim;

    impl_redact_verbatim!(
        DateTime<Utc>,
        DateTime<Local>,
        DateTime<FixedOffset>,
        NaiveDateTime,
        NaiveDate,
        NaiveTime,
    );
}

#[cfg(feature = "time")]
mod time_passthrough {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_redact_verbatim;

    impl_redact_verbatim!(
        OffsetDateTime,
        PrimitiveDateTime,
        Date,
        Time,
        Duration,
        UtcOffset,
        Month,
        Weekday,
    );
}

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use uuid::Uuid;

    use super::impl_redact_verbatim;

    impl_redact_verbatim!(Uuid);
}
