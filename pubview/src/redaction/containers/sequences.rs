//! Element-wise redaction for sequences.
//!
//! Every element goes through its own `Redact` impl, so a
//! `Vec<Box<dyn Redact>>` mixing public-view types and derived types is
//! redacted per element. Length and order are preserved.

use std::collections::{LinkedList, VecDeque};

use super::redact_seq;
use crate::{
    error::Result,
    redaction::{redactor::Redactor, traits::Redact},
    value::Value,
};

impl<T> Redact for [T]
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

impl<T, const N: usize> Redact for [T; N]
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

impl<T> Redact for Vec<T>
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

impl<T> Redact for VecDeque<T>
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

impl<T> Redact for LinkedList<T>
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_redact_tuple {
    ($($name:ident),+) => {
        impl<$($name: Redact),+> Redact for ($($name,)+) {
            #[allow(non_snake_case)]
            fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
                let ($($name,)+) = self;
                Ok(Value::Seq(vec![$($name.redact_with(redactor)?),+]))
            }
        }
    };
}

impl_redact_tuple!(A);
impl_redact_tuple!(A, B);
impl_redact_tuple!(A, B, C);
impl_redact_tuple!(A, B, C, D);
impl_redact_tuple!(A, B, C, D, E);
impl_redact_tuple!(A, B, C, D, E, F);
