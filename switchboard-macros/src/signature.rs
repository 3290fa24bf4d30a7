//! Parsing shared by the dispatch macros.
//!
//! This module contains:
//! - [`Signature`] - The argument and return types of a handler family
//! - [`Domain`] - `Family[N]`, a family and the size of its domain
//! - [`DispatchFn`] - One item of `instantiate!` / `switch_instantiate!`

use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Attribute, BareFnArg, Ident, LitInt, Pat, ReturnType, Token, Type, TypeBareFn, Visibility,
    bracketed, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Name of the discriminator parameter appended to generated functions.
pub(crate) const INDEX_PARAM: &str = "index";

/// One named parameter of a generated function.
pub(crate) struct Param {
    pub mutability: Option<Token![mut]>,
    pub name: Ident,
    pub ty: Type,
}

/// Argument and return types shared by every handler of a family.
pub(crate) struct Signature {
    pub inputs: Vec<Type>,
    pub output: Type,
}

impl Signature {
    /// The argument tuple type: `()`, `(A,)`, `(A, B)`, ...
    pub fn args_type(&self) -> TokenStream2 {
        let inputs = &self.inputs;
        quote! { (#(#inputs,)*) }
    }

    /// The table entry type: `fn((A, B)) -> R`.
    pub fn entry_type(&self) -> TokenStream2 {
        let args = self.args_type();
        let output = &self.output;
        quote! { fn(#args) -> #output }
    }

    /// Build from a bare function type `fn(A, B) -> R`.
    pub fn from_bare_fn(bare: &TypeBareFn) -> syn::Result<Self> {
        if let Some(variadic) = &bare.variadic {
            return Err(syn::Error::new_spanned(
                variadic,
                "handler signatures cannot be variadic",
            ));
        }
        if let Some(lifetimes) = &bare.lifetimes {
            return Err(syn::Error::new_spanned(
                lifetimes,
                "write the signature with elided lifetimes; entries are higher-ranked already",
            ));
        }
        Ok(Self {
            inputs: bare.inputs.iter().map(|arg: &BareFnArg| arg.ty.clone()).collect(),
            output: return_type(&bare.output),
        })
    }
}

pub(crate) fn return_type(output: &ReturnType) -> Type {
    match output {
        ReturnType::Default => syn::parse_quote! { () },
        ReturnType::Type(_, ty) => (**ty).clone(),
    }
}

/// An unsuffixed integer literal, usable as a const generic argument.
pub(crate) fn index_literal(index: usize) -> Literal {
    Literal::usize_unsuffixed(index)
}

/// `Family[N]`: a handler family and the size of its domain.
pub(crate) struct Domain {
    pub family: Type,
    pub size: usize,
}

impl Parse for Domain {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let family: Type = input.parse()?;
        let content;
        bracketed!(content in input);
        let lit: LitInt = content.parse()?;
        let size: usize = lit.base10_parse()?;
        if size == 0 {
            return Err(syn::Error::new(
                lit.span(),
                "the dispatch domain must contain at least one index",
            ));
        }
        if !content.is_empty() {
            return Err(content.error("expected a single domain size"));
        }
        Ok(Domain { family, size })
    }
}

/// One generated dispatch function:
/// `#[attrs] vis [try] fn name(a: A, b: B) -> R = Family[N];`
pub(crate) struct DispatchFn {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub checked: bool,
    pub name: Ident,
    pub params: Vec<Param>,
    pub signature: Signature,
    pub domain: Domain,
}

impl DispatchFn {
    /// Parameter list of the generated function, discriminator last.
    pub fn param_tokens(&self) -> TokenStream2 {
        let params = self.params.iter().map(|param| {
            let Param {
                mutability,
                name,
                ty,
            } = param;
            quote! { #mutability #name: #ty }
        });
        let index = Ident::new(INDEX_PARAM, Span::call_site());
        quote! { #(#params,)* #index: usize }
    }

    /// Expression packing the parameters into the argument tuple.
    pub fn args_expr(&self) -> TokenStream2 {
        let names = self.params.iter().map(|param| &param.name);
        quote! { (#(#names,)*) }
    }

    /// Return type of the generated function.
    pub fn return_tokens(&self) -> TokenStream2 {
        let output = &self.signature.output;
        if self.checked {
            quote! { ::core::result::Result<#output, ::switchboard::DispatchError> }
        } else {
            quote! { #output }
        }
    }
}

impl Parse for DispatchFn {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;

        let checked = if input.peek(Token![try]) {
            input.parse::<Token![try]>()?;
            true
        } else {
            false
        };

        input.parse::<Token![fn]>()?;
        let name: Ident = input.parse()?;

        if input.peek(Token![<]) {
            return Err(input.error(
                "generated dispatch functions cannot be generic; the family must be a concrete type",
            ));
        }

        let content;
        parenthesized!(content in input);
        let mut params = Vec::new();
        while !content.is_empty() {
            params.push(parse_param(&content)?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        let output: ReturnType = input.parse()?;
        input.parse::<Token![=]>()?;
        let domain: Domain = input.parse()?;
        input.parse::<Token![;]>()?;

        let signature = Signature {
            inputs: params.iter().map(|param| param.ty.clone()).collect(),
            output: return_type(&output),
        };

        Ok(DispatchFn {
            attrs,
            vis,
            checked,
            name,
            params,
            signature,
            domain,
        })
    }
}

fn parse_param(input: ParseStream) -> syn::Result<Param> {
    let pat = Pat::parse_single(input)?;
    let (mutability, name) = match pat {
        Pat::Ident(pat_ident) if pat_ident.by_ref.is_none() && pat_ident.subpat.is_none() => {
            (pat_ident.mutability, pat_ident.ident)
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "dispatch function arguments must be plain identifiers",
            ));
        }
    };
    if name == INDEX_PARAM {
        return Err(syn::Error::new(
            name.span(),
            "`index` is reserved for the discriminator, which is appended as the last argument",
        ));
    }
    input.parse::<Token![:]>()?;
    let ty: Type = input.parse()?;
    Ok(Param {
        mutability,
        name,
        ty,
    })
}

/// Every item of a macro invocation.
pub(crate) struct Items<T>(pub Vec<T>);

impl<T: Parse> Parse for Items<T> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(Items(items))
    }
}

/// `Family[N]: fn(A, B) -> R`, the input of `jump_table!`.
pub(crate) struct TableInput {
    pub domain: Domain,
    pub signature: Signature,
}

impl Parse for TableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let domain: Domain = input.parse()?;
        input.parse::<Token![:]>()?;
        let bare: TypeBareFn = input.parse()?;
        let signature = Signature::from_bare_fn(&bare)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the handler signature"));
        }
        Ok(TableInput { domain, signature })
    }
}

/// `vis struct Name(fn(A, B) -> R) = Op for [T0, T1, ...];`, the input of
/// `optional_family!`.
pub(crate) struct FamilyInput {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub signature: Signature,
    pub operation: Type,
    pub types: Vec<Type>,
}

impl Parse for FamilyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;

        let content;
        parenthesized!(content in input);
        let bare: TypeBareFn = content.parse()?;
        let signature = Signature::from_bare_fn(&bare)?;

        input.parse::<Token![=]>()?;
        let operation: Type = input.parse()?;
        input.parse::<Token![for]>()?;

        let list;
        let bracket = bracketed!(list in input);
        let types: Punctuated<Type, Token![,]> = list.parse_terminated(Type::parse, Token![,])?;
        input.parse::<Token![;]>()?;

        if types.is_empty() {
            return Err(syn::Error::new(
                bracket.span.join(),
                "the type list must contain at least one type",
            ));
        }

        Ok(FamilyInput {
            attrs,
            vis,
            name,
            signature,
            operation,
            types: types.into_iter().collect(),
        })
    }
}
