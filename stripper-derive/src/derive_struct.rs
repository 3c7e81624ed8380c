//! Struct-specific `Record` derivation.
//!
//! This module builds the static field descriptor list for struct fields and
//! collects the flagged field types that require trait bounds.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    descriptor::{generate_field_descriptor, DeriveContext},
    strategy::parse_field_tag,
};

pub(crate) struct StructDeriveOutput {
    pub(crate) descriptors: Vec<TokenStream>,
    pub(crate) flagged_types: Vec<syn::Type>,
}

pub(crate) fn derive_struct(data: DataStruct, crate_root: &TokenStream) -> Result<StructDeriveOutput> {
    let mut descriptors = Vec::new();
    let mut flagged_types = Vec::new();

    let mut ctx = DeriveContext {
        crate_root,
        flagged_types: &mut flagged_types,
    };

    match data.fields {
        Fields::Named(fields) => {
            for field in fields.named {
                let span = field.span();
                let tag = parse_field_tag(&field.attrs)?;
                let ident = field.ident.expect("named field should have an identifier");
                let name = ident.to_string();
                let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
                let member = syn::Member::Named(ident);
                descriptors.push(generate_field_descriptor(
                    &mut ctx, &field.ty, &member, &name, span, &tag,
                ));
            }
        }
        Fields::Unnamed(fields) => {
            for (index, field) in fields.unnamed.into_iter().enumerate() {
                let span = field.span();
                let tag = parse_field_tag(&field.attrs)?;
                let member = syn::Member::Unnamed(syn::Index {
                    index: u32::try_from(index).map_err(|_| {
                        syn::Error::new(span, "too many tuple fields for `Clean`")
                    })?,
                    span,
                });
                descriptors.push(generate_field_descriptor(
                    &mut ctx,
                    &field.ty,
                    &member,
                    &index.to_string(),
                    span,
                    &tag,
                ));
            }
        }
        Fields::Unit => {}
    }

    Ok(StructDeriveOutput {
        descriptors,
        flagged_types,
    })
}

pub(crate) fn fields_const(crate_root: &TokenStream, descriptors: &[TokenStream]) -> TokenStream {
    quote! {
        const FIELDS: &'static [#crate_root::Field<Self>] = &[
            #(#descriptors),*
        ];
    }
}
