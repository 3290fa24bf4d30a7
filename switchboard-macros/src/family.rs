//! Per-type families with optional operations.
//!
//! This module contains:
//! - `optional_family!` - Builds a handler family over a type list, running an
//!   operation for the types that define it and nothing for the rest

use crate::signature::{FamilyInput, index_literal};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Implementation of the `optional_family!` macro.
///
/// Position `k` of the type list becomes `Execute<k, Args>`. The body probes
/// the operation at the concrete `k`-th type, which is what lets the fallback
/// be chosen at compile time.
pub fn optional_family_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as FamilyInput);
    let FamilyInput {
        attrs,
        vis,
        name,
        signature,
        operation,
        types,
    } = &input;

    let args_ty = signature.args_type();
    let output = &signature.output;
    let size = index_literal(types.len());

    let impls = types.iter().enumerate().map(|(position, ty)| {
        let index = index_literal(position);
        quote! {
            impl ::switchboard::Execute<#index, #args_ty> for #name {
                type Output = #output;

                #[inline]
                fn execute(args: #args_ty) -> #output {
                    ::switchboard::call_or_default!(#operation, #ty, #args_ty, #output, args)
                }
            }
        }
    });

    let expanded = quote! {
        #(#attrs)*
        #[derive(Clone, Copy, Debug, Default)]
        #vis struct #name;

        impl #name {
            /// Number of discriminators this family handles.
            pub const SIZE: usize = #size;
        }

        #(#impls)*
    };

    TokenStream::from(expanded)
}
