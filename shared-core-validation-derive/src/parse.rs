//! Parsing routines converting `syn::DeriveInput` into crate-internal IR.
//!
//! This stage extracts attributes and resolves rule names; cross-rule and
//! cross-field checks are deferred to the `validate` module.

use shared_core_validation_grammar::parse_declaration as parse_rule_specs;
use syn::parse::{Parse, ParseStream};
use syn::{spanned::Spanned, Ident, LitStr, Token};

use crate::ir::{DeriveInputIr, Field, RuleSpec, ValidateAttr};

/// Arguments of one field-level `#[validate(..)]` attribute.
///
/// Accepted forms:
///
/// ```text
/// #[validate("required,min=2")]
/// #[validate("required,min=2", rename = "Name")]
/// #[validate(rules = "required,min=2", rename = "Name")]
/// ```
#[derive(Default)]
struct ValidateArgs {
    rules: Option<LitStr>,
    rename: Option<LitStr>,
}

impl Parse for ValidateArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ValidateArgs::default();

        if input.peek(LitStr) {
            args.rules = Some(input.parse()?);
            if input.is_empty() {
                return Ok(args);
            }
            input.parse::<Token![,]>()?;
        }

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            let slot = match key.to_string().as_str() {
                "rules" => &mut args.rules,
                "rename" => &mut args.rename,
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("Unknown key '{}' in #[validate(...)] attribute", other),
                    ));
                }
            };
            if slot.is_some() {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate `{}` in #[validate(...)] attribute", key),
                ));
            }
            *slot = Some(value);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Arguments of the struct-level `#[validate(crate = "path")]` attribute.
struct ContainerArgs {
    krate: syn::Path,
}

impl Parse for ContainerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![crate]>()?;
        input.parse::<Token![=]>()?;
        let lit: LitStr = input.parse()?;
        let krate = lit.parse::<syn::Path>()?;
        input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("only `crate = \"..\"` is accepted on the struct"));
        }
        Ok(ContainerArgs { krate })
    }
}

fn container_krate(input: &syn::DeriveInput) -> syn::Result<syn::Path> {
    let mut krate = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        if krate.is_some() {
            return Err(syn::Error::new(
                attr.path().span(),
                "duplicate #[validate(crate = ..)] attribute",
            ));
        }
        krate = Some(attr.parse_args::<ContainerArgs>()?.krate);
    }
    Ok(krate.unwrap_or_else(|| syn::parse_quote!(::shared_core_validation)))
}

/// Convert a `syn::DeriveInput` representing the struct annotated with
/// `#[derive(Validate)]` into the crate's internal IR.
pub fn derive_input_to_ir(input: &syn::DeriveInput) -> syn::Result<DeriveInputIr> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "Validate cannot be derived for generic structs",
        ));
    }

    let fields_named = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(named) => Some(&named.named),
            syn::Fields::Unit => None,
            other @ syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    other.span(),
                    "Validate only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Validate can only be derived for structs",
            ));
        }
    };

    let krate = container_krate(input)?;
    let mut fields_ir = Vec::new();

    for field in fields_named.into_iter().flatten() {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new(field.span(), "expected a named field"));
        };

        let mut attr: Option<ValidateAttr> = None;
        for attr_syn in &field.attrs {
            if !attr_syn.path().is_ident("validate") {
                continue;
            }
            if attr.is_some() {
                return Err(syn::Error::new(
                    attr_syn.path().span(),
                    "duplicate #[validate] attribute; declare all rules in one attribute",
                ));
            }
            let args = attr_syn.parse_args::<ValidateArgs>()?;
            let rules_lit = args.rules.ok_or_else(|| {
                syn::Error::new(
                    attr_syn.path().span(),
                    "missing rule declaration, e.g. #[validate(\"required,min=1\")]",
                )
            })?;
            attr = Some(ValidateAttr {
                rules: parse_declaration(&rules_lit)?,
                rename: args.rename.map(|lit| lit.value()),
                span: rules_lit.span(),
            });
        }

        fields_ir.push(Field {
            ident,
            ty: field.ty.clone(),
            public: matches!(field.vis, syn::Visibility::Public(_)),
            attr,
        });
    }

    Ok(DeriveInputIr {
        struct_ident: input.ident.clone(),
        krate,
        fields: fields_ir,
    })
}

/// Resolve every rule of a declaration literal, reporting grammar errors at
/// the literal.
pub fn parse_declaration(lit: &LitStr) -> syn::Result<Vec<RuleSpec>> {
    parse_rule_specs(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))
}
