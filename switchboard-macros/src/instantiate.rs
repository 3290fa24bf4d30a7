//! Dispatch builders.
//!
//! This module contains:
//! - `jump_table!` - Expression macro building a `DispatchTable` from a family
//! - `instantiate!` - Array-based dispatch functions
//! - `switch_instantiate!` - Branch-based dispatch functions

use crate::signature::{DispatchFn, Domain, Items, Signature, TableInput, index_literal};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse_macro_input;

/// `DispatchTable` construction: one shim function per index, each calling a
/// distinct `Execute<k, Args>` instantiation of the family.
pub(crate) fn table_tokens(domain: &Domain, signature: &Signature) -> TokenStream2 {
    let family = &domain.family;
    let args_ty = signature.args_type();
    let output = &signature.output;
    let entry_ty = signature.entry_type();
    let size = index_literal(domain.size);

    let entries = (0..domain.size).map(|index| {
        let index = index_literal(index);
        quote! {
            {
                #[inline]
                fn __switchboard_entry(args: #args_ty) -> #output {
                    <#family as ::switchboard::Execute<#index, #args_ty>>::execute(args)
                }
                __switchboard_entry as #entry_ty
            }
        }
    });

    quote! {
        ::switchboard::DispatchTable::<#entry_ty, #size>::new([#(#entries),*])
    }
}

/// Implementation of the `jump_table!` macro.
pub fn jump_table_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TableInput);
    TokenStream::from(table_tokens(&input.domain, &input.signature))
}

/// Implementation of the `instantiate!` macro.
///
/// Each function owns a `static` table, built at compile time.
pub fn instantiate_impl(input: TokenStream) -> TokenStream {
    let Items(items) = parse_macro_input!(input as Items<DispatchFn>);
    let expanded = items.iter().map(array_fn);
    TokenStream::from(quote! { #(#expanded)* })
}

fn array_fn(item: &DispatchFn) -> TokenStream2 {
    let DispatchFn {
        attrs, vis, name, ..
    } = item;
    let params = item.param_tokens();
    let ret = item.return_tokens();
    let args = item.args_expr();
    let entry_ty = item.signature.entry_type();
    let size = index_literal(item.domain.size);
    let table = table_tokens(&item.domain, &item.signature);

    let call = if item.checked {
        quote! { TABLE.try_dispatch(#args, index) }
    } else {
        quote! { TABLE.dispatch(#args, index) }
    };

    quote! {
        #(#attrs)*
        #vis fn #name(#params) -> #ret {
            static TABLE: ::switchboard::DispatchTable<#entry_ty, #size> = #table;
            #call
        }
    }
}

/// Implementation of the `switch_instantiate!` macro.
pub fn switch_instantiate_impl(input: TokenStream) -> TokenStream {
    let Items(items) = parse_macro_input!(input as Items<DispatchFn>);
    let expanded = items.iter().map(switch_fn);
    TokenStream::from(quote! { #(#expanded)* })
}

fn switch_fn(item: &DispatchFn) -> TokenStream2 {
    let DispatchFn {
        attrs, vis, name, ..
    } = item;
    let params = item.param_tokens();
    let ret = item.return_tokens();
    let args = item.args_expr();
    let args_ty = item.signature.args_type();
    let family = &item.domain.family;
    let size = item.domain.size;
    let bound = index_literal(size);
    let packed = format_ident!("__switchboard_args");

    let call = |index: usize| {
        let index = index_literal(index);
        quote! { <#family as ::switchboard::Execute<#index, #args_ty>>::execute(#packed) }
    };

    // The last handler takes every index the earlier arms did not match.
    let last = call(size - 1);
    let body = if size == 1 {
        quote! {
            let _ = index;
            #last
        }
    } else {
        let arms = (0..size - 1).map(|k| {
            let pattern = index_literal(k);
            let handler = call(k);
            quote! { #pattern => #handler, }
        });
        quote! {
            match index {
                #(#arms)*
                _ => #last,
            }
        }
    };

    let body = if item.checked {
        quote! {
            if index >= #bound {
                return ::core::result::Result::Err(
                    ::switchboard::DispatchError::OutOfRange { index, size: #bound },
                );
            }
            ::core::result::Result::Ok({ #body })
        }
    } else {
        body
    };

    quote! {
        #(#attrs)*
        #vis fn #name(#params) -> #ret {
            let #packed = #args;
            #body
        }
    }
}
