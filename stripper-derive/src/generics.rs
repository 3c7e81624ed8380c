//! Generic type parameter handling and trait bound management.
//!
//! `Record` requires `Self: 'static`, so every type parameter gets a `'static`
//! bound and lifetime parameters are rejected. `FieldValue` bounds are added
//! per flagged field type, and only when that type mentions a generic
//! parameter, so unflagged fields never constrain their types.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics:
//!
//! ```ignore
//! struct TypedId<T> {
//!     #[clean = "true"]
//!     id: String,
//!     #[clean = "true"]
//!     _marker: PhantomData<T>,  // T should NOT require FieldValue
//! }
//! ```

use proc_macro2::TokenStream;
use syn::{parse_quote, spanned::Spanned, GenericParam, Ident, Result};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            // `T::Assoc` mentions T through its first segment.
            if let Some(first) = path.path.segments.first() {
                push_if_param(&first.ident, generics, result);
            }
            if let Some(segment) = path.path.segments.last() {
                if segment.ident == "PhantomData" {
                    return;
                }

                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }

                push_if_param(&segment.ident, generics, result);
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

fn push_if_param(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    for param in generics.type_params() {
        if *ident == param.ident && !result.iter().any(|g| g == &param.ident) {
            result.push(param.ident.clone());
        }
    }
}

/// Fails on lifetime parameters, which a `'static` record cannot carry.
pub(crate) fn reject_lifetimes(generics: &syn::Generics) -> Result<()> {
    for param in &generics.params {
        if let GenericParam::Lifetime(lifetime) = param {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Clean` cannot be derived for types with lifetime parameters; \
                 records must be 'static",
            ));
        }
    }
    Ok(())
}

/// Adds `'static` to every type parameter and `FieldValue` to every flagged
/// field type that mentions one.
pub(crate) fn add_record_bounds(
    mut generics: syn::Generics,
    flagged_types: &[syn::Type],
    field_value_path: &TokenStream,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }

    let mut predicates: Vec<syn::WherePredicate> = Vec::new();
    for ty in flagged_types {
        let mut mentioned = Vec::new();
        collect_generics_from_type(ty, &generics, &mut mentioned);
        if !mentioned.is_empty() {
            predicates.push(parse_quote!(#ty: #field_value_path));
        }
    }

    if !predicates.is_empty() {
        let where_clause = generics.make_where_clause();
        where_clause.predicates.extend(predicates);
    }
    generics
}
