//! Derive macros for `stripper`.
//!
//! This crate generates the field descriptor table behind `#[derive(Clean)]`. It:
//! - reads `#[clean = "..."]` field attributes
//! - emits a `Record` implementation listing every field with its tag
//! - emits a `FieldValue` implementation so the record can be nested
//!
//! It does **not** walk records. The walk lives in the main `stripper` crate
//! and runs when you call `clean_fields()` or one of the JSON entry points.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod descriptor;
mod generics;
mod strategy;
use container::{parse_container_options, ContainerOptions};
use derive_struct::{derive_struct, fields_const, StructDeriveOutput};
use generics::{add_record_bounds, reject_lifetimes};

/// Derives `stripper::Record` and `stripper::FieldValue` for structs.
///
/// # Container Attributes
///
/// - `#[clean(crate = "path::to::stripper")]` - Use this path in generated code instead of the
///   resolved `stripper` dependency. Needed when `stripper` is only reachable through a
///   re-export.
///
/// # Field Attributes
///
/// - **No annotation**: The field is listed in `Record::FIELDS` without a tag and is never
///   touched. Its type needs no traits.
///
/// - `#[clean = "true"]`: The field is cleaned. Leaf types (numbers, `String`, `Vec`, maps,
///   `Option`, ...) reset to their zero value; types that derive `Clean` are walked
///   recursively instead of being blanked. The type must implement `FieldValue`.
///
/// - `#[clean = "anything else"]`: The tag is recorded on the descriptor but the field is never
///   touched. Only the exact string `"true"` cleans; `"TRUE"` and `"1"` do not.
///
/// Tuple struct fields are named by position (`"0"`, `"1"`, ...). Enums, unions and types with
/// lifetime parameters are rejected at compile time.
#[proc_macro_derive(Clean, attributes(clean))]
pub fn derive_clean(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the stripper crate root.
///
/// Handles crate renaming (e.g., `my_strip = { package = "stripper", ... }`).
/// Inside `stripper` itself this still emits `::stripper`, which resolves
/// through its `extern crate self as stripper;` alias.
fn crate_root(options: &ContainerOptions) -> TokenStream {
    if let Some(path) = &options.crate_path {
        return quote! { #path };
    }
    match crate_name("stripper") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::stripper },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;
    let crate_root = crate_root(&options);

    let StructDeriveOutput {
        descriptors,
        flagged_types,
    } = match data {
        Data::Struct(data) => derive_struct(data, &crate_root)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`Clean` can only be derived for structs; \
                 use `stripper::impl_leaf!` to zero an enum field instead",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Clean` cannot be derived for unions",
            ));
        }
    };
    reject_lifetimes(&generics)?;

    let field_value_path = quote! { #crate_root::FieldValue };
    let record_generics = add_record_bounds(generics, &flagged_types, &field_value_path);
    let (impl_generics, ty_generics, where_clause) = record_generics.split_for_impl();
    let fields = fields_const(&crate_root, &descriptors);

    Ok(quote! {
        impl #impl_generics #crate_root::Record for #ident #ty_generics #where_clause {
            #fields
        }

        impl #impl_generics #crate_root::FieldValue for #ident #ty_generics #where_clause {
            const KIND: #crate_root::FieldKind = #crate_root::FieldKind::Record;

            fn clean_value(&mut self) {
                #crate_root::Record::clean_fields(self);
            }
        }
    })
}
