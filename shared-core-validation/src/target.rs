//! What the validator is handed.
//!
//! The engine accepts anything implementing [`IntoTarget`]: a record, a
//! reference or smart pointer to one, an `Option` of one, or a plain value
//! that is not a record at all. The latter two exist so that "nothing to
//! validate" and "not a record" are reported as errors instead of being
//! unrepresentable.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::schema::Fields;

/// Classified validation input.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Record(&'a dyn Fields),
    /// Absent record (`None`).
    Nil,
    /// A value that is not a record; carries its kind for diagnostics.
    Scalar(&'static str),
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Target::Nil => f.write_str("Nil"),
            Target::Scalar(kind) => f.debug_tuple("Scalar").field(kind).finish(),
        }
    }
}

pub trait IntoTarget {
    fn target(&self) -> Target<'_>;
}

impl<T: IntoTarget + ?Sized> IntoTarget for &T {
    fn target(&self) -> Target<'_> {
        (**self).target()
    }
}

impl<T: IntoTarget + ?Sized> IntoTarget for &mut T {
    fn target(&self) -> Target<'_> {
        (**self).target()
    }
}

impl<T: IntoTarget + ?Sized> IntoTarget for Box<T> {
    fn target(&self) -> Target<'_> {
        (**self).target()
    }
}

impl<T: IntoTarget + ?Sized> IntoTarget for Rc<T> {
    fn target(&self) -> Target<'_> {
        (**self).target()
    }
}

impl<T: IntoTarget + ?Sized> IntoTarget for Arc<T> {
    fn target(&self) -> Target<'_> {
        (**self).target()
    }
}

impl<T: IntoTarget> IntoTarget for Option<T> {
    fn target(&self) -> Target<'_> {
        match self {
            Some(inner) => inner.target(),
            None => Target::Nil,
        }
    }
}

macro_rules! scalar_targets {
    ($kind:literal => $($ty:ty),* $(,)?) => {
        $(
            impl IntoTarget for $ty {
                fn target(&self) -> Target<'_> {
                    Target::Scalar($kind)
                }
            }
        )*
    };
}

scalar_targets!("text" => str, String, Cow<'_, str>, char);
scalar_targets!("integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scalar_targets!("float" => f32, f64);
scalar_targets!("bool" => bool);
scalar_targets!("unit" => ());

impl<T> IntoTarget for [T] {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<T, const N: usize> IntoTarget for [T; N] {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<T> IntoTarget for Vec<T> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<T> IntoTarget for VecDeque<T> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<T, S> IntoTarget for HashSet<T, S> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<T> IntoTarget for BTreeSet<T> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("sequence")
    }
}

impl<K, V, S> IntoTarget for HashMap<K, V, S> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("mapping")
    }
}

impl<K, V> IntoTarget for BTreeMap<K, V> {
    fn target(&self) -> Target<'_> {
        Target::Scalar("mapping")
    }
}
