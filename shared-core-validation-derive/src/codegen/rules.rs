//! Token generation for individual rules.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use crate::ir::RuleSpec;

/// Build the expression constructing the runtime `Rule` for `rule`, with
/// every path rooted at `krate`.
pub fn build(rule: &RuleSpec, krate: &Path) -> TokenStream {
    match rule {
        RuleSpec::Required => quote!(#krate::Rule::Required),
        RuleSpec::Min(n) => quote!(#krate::Rule::Min(#n)),
        RuleSpec::Max(n) => quote!(#krate::Rule::Max(#n)),
        RuleSpec::Email => quote!(#krate::Rule::Email),
        RuleSpec::Url => quote!(#krate::Rule::Url),
        RuleSpec::Pattern(source) => quote! {
            #krate::Rule::Pattern(#krate::Pattern::new(#source))
        },
        RuleSpec::Unknown(name) => quote! {
            #krate::Rule::Unknown(::std::string::String::from(#name))
        },
    }
}

/// Build the `vec![..]` expression holding every rule of a field.
pub fn build_all(rules: &[RuleSpec], krate: &Path) -> TokenStream {
    let rules = rules.iter().map(|rule| build(rule, krate));
    quote!(::std::vec![#(#rules),*])
}
