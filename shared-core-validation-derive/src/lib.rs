use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod ir;
mod parse;
mod validate;

/// Derive macro that generates the static descriptor table consumed by
/// `shared_core_validation::FieldValidator`.
///
/// Every field annotated with `#[validate(..)]` becomes one row of the table:
/// its name, whether it is `pub`, its rules in declaration order and a plain
/// `fn` accessor lowering the field into a `FieldValue`. The table is built
/// once, on first use, and shared by every validation of that type.
///
/// # Generated items
///
/// ```ignore
/// impl shared_core_validation::Record for MyStruct { .. }
/// impl shared_core_validation::IntoTarget for MyStruct { .. }
/// impl shared_core_validation::AsFieldValue for MyStruct { .. }
/// ```
///
/// # `#[validate(..)]` attribute
///
/// The rule declaration is a comma-separated list of rules, each optionally
/// followed by `=` and a parameter:
///
/// | Rule              | Meaning                                                |
/// | ----------------- | ------------------------------------------------------ |
/// | `required`        | text or collection non-empty, `Option` is `Some`       |
/// | `min=<n>`         | length (text, collections) or value (integers) `>= n`  |
/// | `max=<n>`         | length (text, collections) or value (integers) `<= n`  |
/// | `email`           | text looks like an email address                       |
/// | `url`             | text is empty or an `http(s)` URL                      |
/// | `pattern=<regex>` | text matches the regular expression                    |
///
/// Unrecognised rule names compile and are reported by the validator as
/// `unknown validation rule: <name>`.
///
/// ## Forms
///
/// ```ignore
/// #[validate("required,min=2,max=50")]
/// #[validate("required,email", rename = "Email")]
/// #[validate(rules = "min=1", rename = "Items")]
/// ```
///
/// `rename` changes the field name used in violation messages.
///
/// `pattern` may appear more than once; the value must match every pattern.
/// Any other known rule may appear once per field.
///
/// ## Runtime crate path
///
/// Generated code refers to `::shared_core_validation`. When the runtime is
/// reached through a re-export instead, name it on the struct:
///
/// ```ignore
/// #[derive(Validate)]
/// #[validate(crate = "shared_core::validation")]
/// pub struct Login { .. }
/// ```
///
/// # Visibility
///
/// Only `pub` fields are validated. Non-`pub` fields may carry rules; they
/// are kept in the table but skipped by the validator.
///
/// # Example
///
/// ```rust,ignore
/// use shared_core_validation::{FieldValidator, Validate};
///
/// #[derive(Validate)]
/// pub struct Product {
///     #[validate("required,min=3,max=100")]
///     pub name: String,
///     #[validate("required,min=1")]
///     pub price: i64,
///     #[validate("pattern=^[A-Z]{3}-[0-9]{4}$")]
///     pub sku: String,
/// }
///
/// FieldValidator::new().validate(&product)?;
/// ```
///
/// # Compile-time errors
///
/// The macro rejects:
/// - enums, unions, tuple structs and generic structs;
/// - more than one `#[validate]` attribute on a field;
/// - an empty rule declaration or unknown attribute keys;
/// - `min`/`max` without an integer parameter (`min=abc`, `max`);
/// - `min` greater than `max`, or a non-`pattern` rule repeated on one field;
/// - two rule-bearing fields reported under the same name;
/// - a rule-bearing field whose type does not implement `AsFieldValue`.
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ir = match parse::derive_input_to_ir(&input) {
        Ok(ir) => ir,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::check(&ir) {
        return e.to_compile_error().into();
    }

    codegen::expand(&ir).into()
}
