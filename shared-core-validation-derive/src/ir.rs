//! Intermediate representation (IR) for the `Validate` derive macro.
//!
//! `parse` turns the `syn::DeriveInput` into these plain structures,
//! `validate` checks them and `codegen` emits the descriptor table from them.

use proc_macro2::Span;
use syn::{Ident, Path, Type};

pub use shared_core_validation_grammar::RuleSpec;

/// Data extracted from a single `#[validate(..)]` attribute.
#[derive(Debug, Clone)]
pub struct ValidateAttr {
    /// Rules in declaration order.
    pub rules: Vec<RuleSpec>,
    /// Name used in messages instead of the field identifier.
    pub rename: Option<String>,
    /// Span of the rule declaration literal, kept for diagnostics.
    pub span: Span,
}

/// A struct field after parsing.
#[derive(Debug, Clone)]
pub struct Field {
    pub ident: Ident,
    pub ty: Type,
    pub public: bool,
    /// `None` when the field carries no `#[validate]` attribute.
    pub attr: Option<ValidateAttr>,
}

impl Field {
    /// Name reported in violation messages.
    pub fn message_name(&self) -> String {
        use syn::ext::IdentExt;

        match self.attr.as_ref().and_then(|a| a.rename.clone()) {
            Some(rename) => rename,
            None => self.ident.unraw().to_string(),
        }
    }
}

/// Parsed description of the whole derive input.
#[derive(Debug, Clone)]
pub struct DeriveInputIr {
    pub struct_ident: Ident,
    /// Path the generated code uses to reach the runtime crate.
    pub krate: Path,
    pub fields: Vec<Field>,
}
