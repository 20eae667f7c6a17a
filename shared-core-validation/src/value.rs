//! Runtime view of a field value, as seen by the rule evaluators.
//!
//! Records never hand their concrete field types to the engine. Each
//! accessor in the descriptor table lowers the field into a [`FieldValue`],
//! which carries just enough information for the built-in rules: the text
//! itself, an integer, a collection length or the presence of an optional
//! value.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Kind-tagged borrowed view of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Textual data; length rules count characters.
    Text(&'a str),
    /// Any signed or unsigned integer.
    Integer(i128),
    /// Ordered collection with the given number of items.
    Sequence(usize),
    /// Keyed collection with the given number of entries.
    Mapping(usize),
    /// Optional reference; `true` when a value is present.
    Nullable(bool),
    /// Nested record. Treated opaquely, never validated recursively.
    Record,
    /// Anything else (booleans, floats, timestamps ...).
    Other,
}

impl FieldValue<'_> {
    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Sequence(_) => "sequence",
            FieldValue::Mapping(_) => "mapping",
            FieldValue::Nullable(_) => "nullable",
            FieldValue::Record => "record",
            FieldValue::Other => "other",
        }
    }
}

/// Lowers a field into a [`FieldValue`].
///
/// `#[derive(Validate)]` requires this trait on every field that carries a
/// rule declaration; the derive implements it for the record itself so that
/// records can be nested inside other records.
pub trait AsFieldValue {
    fn field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

macro_rules! integer_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i128::from(*self))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl AsFieldValue for isize {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self as i128)
    }
}

impl AsFieldValue for usize {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self as i128)
    }
}

impl AsFieldValue for u128 {
    fn field_value(&self) -> FieldValue<'_> {
        // Values above i128::MAX saturate; no rule parameter can exceed i64.
        FieldValue::Integer(i128::try_from(*self).unwrap_or(i128::MAX))
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> AsFieldValue for VecDeque<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> AsFieldValue for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T, const N: usize> AsFieldValue for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(N)
    }
}

impl<T, S> AsFieldValue for HashSet<T, S> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> AsFieldValue for BTreeSet<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(self.len())
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(self.len())
    }
}

impl<T> AsFieldValue for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Nullable(self.is_some())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Rc<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Arc<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

macro_rules! opaque_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other
                }
            }
        )*
    };
}

opaque_values!(
    bool,
    char,
    f32,
    f64,
    (),
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::NaiveTime,
    std::time::Duration,
);

impl<Tz: chrono::TimeZone> AsFieldValue for chrono::DateTime<Tz> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointers_are_transparent() {
        let boxed: Box<String> = Box::new("abc".to_string());
        assert_eq!(boxed.field_value(), FieldValue::Text("abc"));

        let shared: Arc<Vec<u8>> = Arc::new(vec![1, 2, 3]);
        assert_eq!(shared.field_value(), FieldValue::Sequence(3));
    }

    #[test]
    fn optional_reports_presence_only() {
        assert_eq!(Some("x").field_value(), FieldValue::Nullable(true));
        assert_eq!(None::<String>.field_value(), FieldValue::Nullable(false));
    }

    #[test]
    fn unsigned_overflow_saturates() {
        assert_eq!(u128::MAX.field_value(), FieldValue::Integer(i128::MAX));
        assert_eq!(42u64.field_value(), FieldValue::Integer(42));
    }
}
