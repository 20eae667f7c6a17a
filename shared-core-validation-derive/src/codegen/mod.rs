pub mod rules;

use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;

use crate::ir::DeriveInputIr;

/// Assemble the final `TokenStream` for the target struct:
///
/// * `Record`, backed by a lazily built static descriptor table holding one
///   row per rule-bearing field;
/// * `IntoTarget`, so the struct can be handed to the validator directly;
/// * `AsFieldValue`, so the struct can itself be a field of another record.
pub fn expand(ir: &DeriveInputIr) -> TokenStream {
    let struct_ident = &ir.struct_ident;
    let type_name = struct_ident.to_string();
    let krate = &ir.krate;

    let mut accessors = Vec::new();
    let mut descriptors = Vec::new();

    // ---------------------------------------------------------------
    // One accessor fn and one descriptor per rule-bearing field, in
    // declaration order. Fields without rules need no `AsFieldValue`
    // impl, so they are left out of the table entirely.
    // ---------------------------------------------------------------
    for (idx, field) in ir.fields.iter().enumerate() {
        let Some(attr) = &field.attr else {
            continue;
        };

        let accessor_ident = format_ident!("__field_{}", idx);
        let field_ident = &field.ident;
        let read = quote_spanned! {field.ty.span()=>
            #krate::AsFieldValue::field_value(&record.#field_ident)
        };
        accessors.push(quote! {
            fn #accessor_ident(record: &#struct_ident) -> #krate::FieldValue<'_> {
                #read
            }
        });

        let name = field.message_name();
        let visibility = if field.public {
            quote!(#krate::Visibility::Public)
        } else {
            quote!(#krate::Visibility::Private)
        };
        let rules = rules::build_all(&attr.rules, krate);
        descriptors.push(quote! {
            #krate::FieldDescriptor::<#struct_ident>::new(
                #name,
                #visibility,
                #rules,
                #accessor_ident,
            )
        });
    }

    quote! {
        impl #krate::Record for #struct_ident {
            fn schema() -> &'static #krate::Schema<Self> {
                #(#accessors)*

                static SCHEMA: #krate::__private::Lazy<
                    #krate::Schema<#struct_ident>,
                > = #krate::__private::Lazy::new(|| {
                    #krate::Schema::new(#type_name, ::std::vec![#(#descriptors),*])
                });

                &SCHEMA
            }
        }

        impl #krate::IntoTarget for #struct_ident {
            fn target(&self) -> #krate::Target<'_> {
                #krate::Target::Record(self)
            }
        }

        impl #krate::AsFieldValue for #struct_ident {
            fn field_value(&self) -> #krate::FieldValue<'_> {
                #krate::FieldValue::Record
            }
        }
    }
}
