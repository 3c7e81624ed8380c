//! Field descriptor generation shared by named and tuple structs.

use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;

use crate::strategy::FieldTag;

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) crate_root: &'a TokenStream,
    /// Types of flagged fields, in declared order, for bound generation.
    pub(crate) flagged_types: &'a mut Vec<syn::Type>,
}

/// Generates the `Field<Self>` constructor expression for a single field.
///
/// ## Descriptor Rules
///
/// | Tag | Descriptor |
/// |-----|------------|
/// | `Absent` | `Field::plain(name)` |
/// | `Inert(v)` | `Field::tagged(name, v)` |
/// | `Flagged` | `Field::flagged(name, KIND, scrub)` |
///
/// Only flagged fields get a scrubber, so only their types need `FieldValue`.
pub(crate) fn generate_field_descriptor(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    member: &syn::Member,
    name: &str,
    span: Span,
    tag: &FieldTag,
) -> TokenStream {
    let root = ctx.crate_root;

    match tag {
        FieldTag::Absent => quote_spanned! { span =>
            #root::Field::<Self>::plain(#name)
        },
        FieldTag::Inert(value) => quote_spanned! { span =>
            #root::Field::<Self>::tagged(#name, #value)
        },
        FieldTag::Flagged => {
            ctx.flagged_types.push(ty.clone());
            quote_spanned! { span =>
                #root::Field::<Self>::flagged(
                    #name,
                    <#ty as #root::FieldValue>::KIND,
                    |record: &mut Self| #root::FieldValue::clean_value(&mut record.#member),
                )
            }
        }
    }
}
