// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for ARINC 424 record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too.
//!
//! # Example
//!
//! Deriving an implementation on a terminal procedure leg:
//!
//! ```ignore
//! #[derive(Record)]
//! #[arinc424(kinds = "PD, PE, PF")]  // Only SID, STAR and approach records
//! pub struct Procedure<'a> {
//!     pub record_type: RecordType,
//!     pub cust_area: CustArea<'a>,
//!     #[arinc424(skip(1))]  // Skip 1 byte before this field
//!     pub arpt_ident: ArptHeliIdent<'a>,
//!     #[arinc424(field = 48)]  // Jump to absolute column 48
//!     pub path_term: PathTerm,
//! }
//! ```
//!
//! The `kinds` attribute lists the two letter section and subsection codes a
//! record struct accepts, separated by commas. A blank subsection is written
//! as a trailing space, e.g. `kinds = "D "` for VHF navaids. The generated parser checks the record against this
//! list before reading any field, so feeding e.g. a runway into the procedure
//! parser fails instead of decoding garbage.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

enum FieldAttribute {
    Skip(usize),
    Position(usize),
}

fn parse_int(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int_lit),
            ..
        }) => int_lit.base10_parse::<usize>().ok(),
        _ => None,
    }
}

fn parse_field_attributes(field: &syn::Field) -> Option<FieldAttribute> {
    for attr in &field.attrs {
        if !attr.path().is_ident("arinc424") {
            continue;
        }

        match attr.parse_args::<Meta>() {
            // #[arinc424(skip(n))]
            Ok(Meta::List(list)) if list.path.is_ident("skip") => {
                if let Some(n) = list.parse_args::<Expr>().ok().as_ref().and_then(parse_int) {
                    return Some(FieldAttribute::Skip(n));
                }
            }
            // #[arinc424(field = n)]
            Ok(Meta::NameValue(nv)) if nv.path.is_ident("field") => {
                if let Some(n) = parse_int(&nv.value) {
                    return Some(FieldAttribute::Position(n));
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits a comma separated list of section and subsection codes.
///
/// Leading whitespace of a code is ignored but trailing whitespace is kept,
/// since a blank subsection is part of the code.
fn split_kinds(value: &str) -> Result<Vec<String>, String> {
    value
        .split(',')
        .map(str::trim_start)
        .map(|kind| {
            if kind.len() == 2 && kind.is_ascii() && !kind.starts_with(' ') {
                Ok(kind.to_owned())
            } else {
                Err(format!("\"{kind}\" is not a section and subsection code"))
            }
        })
        .collect()
}

/// Reads `#[arinc424(kinds = "PD, PE")]` from the struct attributes.
fn parse_kinds(input: &DeriveInput) -> Result<Vec<String>, syn::Error> {
    for attr in &input.attrs {
        if !attr.path().is_ident("arinc424") {
            continue;
        }

        if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
            if !nv.path.is_ident("kinds") {
                continue;
            }

            let Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) = &nv.value
            else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "kinds should be a string like \"PD, PE\"",
                ));
            };

            return split_kinds(&s.value()).map_err(|msg| syn::Error::new_spanned(s, msg));
        }
    }

    Ok(Vec::new())
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&[u8]>` implementation.
#[proc_macro_derive(Record, attributes(arinc424))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let Some(lifetime) = generics.lifetimes().next() else {
        return syn::Error::new_spanned(
            name,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
        .to_compile_error()
        .into();
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Record derive only supports structs with named fields",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Record derive only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let kinds = match parse_kinds(&input) {
        Ok(kinds) => kinds,
        Err(e) => return e.to_compile_error().into(),
    };

    let field_parsers = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;

        Some(match parse_field_attributes(field) {
            Some(FieldAttribute::Position(pos)) => quote! {
                #field_name: fields.get(#pos)?
            },
            Some(FieldAttribute::Skip(n)) => quote! {
                #field_name: fields.skip(#n).next()?
            },
            None => quote! {
                #field_name: fields.next()?
            },
        })
    });

    let expanded = quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            const KINDS: &'static [&'static str] = &[#(#kinds),*];

            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                fields.expect_kind(Self::KINDS, stringify!(#name))?;

                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    };

    TokenStream::from(expanded)
}
