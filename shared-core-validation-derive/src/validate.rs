//! Semantic checks for the `Validate` IR.

use std::collections::HashMap;

use shared_core_validation_grammar::check_rules;

use crate::ir::DeriveInputIr;

/// Perform post-parse validation on the IR. Returns `Ok(())` if every rule
/// declaration is coherent; otherwise an appropriate `syn::Error`.
pub fn check(ir: &DeriveInputIr) -> syn::Result<()> {
    use syn::Error;

    // Same coherence checks `SchemaBuilder::register` applies at runtime.
    for field in &ir.fields {
        if let Some(attr) = &field.attr {
            check_rules(&attr.rules).map_err(|e| Error::new(attr.span, e))?;
        }
    }

    // Message names of rule-bearing fields must stay unambiguous; fields
    // without rules never appear in a message.
    let mut names: HashMap<String, &syn::Ident> = HashMap::new();
    for field in &ir.fields {
        let Some(attr) = &field.attr else {
            continue;
        };
        let name = field.message_name();
        if let Some(prev) = names.insert(name.clone(), &field.ident) {
            return Err(Error::new(
                attr.span,
                format!("field name `{name}` is already used by field `{prev}`"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn ir_from(src: &str) -> DeriveInputIr {
        let di: syn::DeriveInput = syn::parse_str(src).unwrap();
        parse::derive_input_to_ir(&di).unwrap()
    }

    #[test]
    fn coherent_declarations_pass() {
        let ir = ir_from(
            r#"struct S {
                #[validate("required,min=2,max=2")] pub a: String,
                #[validate(rules = "email", rename = "Email")] pub b: String,
                pub c: u32,
            }"#,
        );
        assert!(check(&ir).is_ok());
    }

    #[test]
    fn repeated_patterns_pass() {
        let ir = ir_from(
            r#"struct S { #[validate("required,min=8,pattern=[0-9],pattern=[a-z]")] pub a: String }"#,
        );
        assert!(check(&ir).is_ok());
    }

    #[test]
    fn min_above_max_fails() {
        let ir = ir_from(r#"struct S { #[validate("min=10,max=5")] pub a: String }"#);
        let err = check(&ir).unwrap_err().to_string();
        assert!(err.contains("`min=10` is greater than `max=5`"), "{err}");
    }

    #[test]
    fn repeated_rule_fails() {
        let ir = ir_from(r#"struct S { #[validate("required,min=1,required")] pub a: String }"#);
        let err = check(&ir).unwrap_err().to_string();
        assert!(err.contains("rule `required` is declared more than once"), "{err}");
    }

    #[test]
    fn rename_collision_fails() {
        let ir = ir_from(
            r#"struct S {
                #[validate("required")] pub name: String,
                #[validate(rules = "required", rename = "name")] pub alias: String,
            }"#,
        );
        let err = check(&ir).unwrap_err().to_string();
        assert!(err.contains("already used by field `name`"), "{err}");
    }

    #[test]
    fn rename_onto_rule_less_field_passes() {
        let ir = ir_from(
            r#"struct S {
                pub name: String,
                #[validate(rules = "required", rename = "name")] pub display_name: String,
            }"#,
        );
        assert!(check(&ir).is_ok());
    }
}
