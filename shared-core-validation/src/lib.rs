//! # Shared Core Validation
//!
//! Declarative, rule-based validation of records.
//!
//! Each field of a record declares its rules next to its definition; the
//! [`FieldValidator`] evaluates every rule of every public field and reports
//! all violations at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use shared_core_validation::{FieldValidator, Validate};
//!
//! #[derive(Validate)]
//! pub struct SignUp {
//!     #[validate("required,min=2,max=50")]
//!     pub name: String,
//!
//!     #[validate("required,email")]
//!     pub email: String,
//!
//!     #[validate("min=18,max=120")]
//!     pub age: u8,
//!
//!     #[validate("url")]
//!     pub website: String,
//!
//!     // Not validated: no rules.
//!     pub referrer: Option<String>,
//! }
//!
//! let request = SignUp {
//!     name: "J".into(),
//!     email: "not-an-email".into(),
//!     age: 30,
//!     website: String::new(),
//!     referrer: None,
//! };
//!
//! let err = FieldValidator::new().validate(&request).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "validation failed: field 'name' must be at least 2 characters; \
//!      field 'email' must be a valid email address"
//! );
//! ```
//!
//! ## Rules
//!
//! | Rule | Applies to | Passes when |
//! | ---- | ---------- | ----------- |
//! | `required` | text, collections, `Option` | non-empty / present |
//! | `min=<n>` | text length, collection length, integers | `>= n` |
//! | `max=<n>` | text length, collection length, integers | `<= n` |
//! | `email` | text | looks like `local@domain.tld` |
//! | `url` | text | empty, or `http(s)://host[/path]` |
//! | `pattern=<regex>` | text | the regex matches |
//!
//! Any other rule name fails with `unknown validation rule: <name>`.
//!
//! ## Architecture
//!
//! - [`Record`] exposes a static [`Schema`]: one [`FieldDescriptor`] per
//!   field, holding the rules and an accessor. `#[derive(Validate)]` builds
//!   it at compile time; [`Schema::builder`] builds it by hand.
//! - [`FieldValue`] is the runtime view the rules see.
//! - [`Target`] classifies what the caller handed in, so that `None` and
//!   non-records are reported as [`ValidationError::NilTarget`] and
//!   [`ValidationError::NotAStruct`].

pub mod error;
mod eval;
pub mod rule;
pub mod schema;
pub mod target;
pub mod validator;
pub mod value;

pub use error::{RuleSpecError, SchemaError, ValidationError, Violation, Violations};
pub use rule::{parse_rules, Pattern, Rule};
pub use schema::{Accessor, Field, FieldDescriptor, Fields, Record, Schema, SchemaBuilder, Visibility};
pub use target::{IntoTarget, Target};
pub use validator::{evaluate_field, FieldOutcome, FieldValidator, Validator, ValidatorExt};
pub use value::{AsFieldValue, FieldValue};

/// Derive a static descriptor table for a struct.
///
/// See the crate documentation for the attribute syntax.
pub use shared_core_validation_derive::Validate;

pub mod prelude {
    pub use crate::{FieldValidator, Validate, ValidationError, Validator, ValidatorExt};
}

/// Internal re-exports that the derive macro relies on.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
