//! Parsing of `#[clean = "..."]` field attributes.
//!
//! This module maps attribute syntax to a per-field tag and produces
//! structured errors for forms that carry no annotation value.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Expr, ExprLit, Lit, Meta, Result};

/// The only annotation value that marks a field for cleaning.
pub(crate) const SENTINEL: &str = "true";

/// Field tag derived from `#[clean = "..."]`.
///
/// ## Tag Mapping
///
/// | Attribute | Tag | Behavior |
/// |-----------|-----|----------|
/// | None | `Absent` | Field is never touched |
/// | `#[clean = "true"]` | `Flagged` | Zero leaves, recurse into records |
/// | `#[clean = "other"]` | `Inert("other")` | Recorded, never touched |
#[derive(Clone, Debug)]
pub(crate) enum FieldTag {
    /// No annotation.
    Absent,
    /// Exactly `"true"`.
    Flagged,
    /// Any other string, kept verbatim for the descriptor.
    ///
    /// `"TRUE"`, `"1"` and `"yes"` all land here.
    Inert(String),
}

fn set_tag(target: &mut Option<FieldTag>, next: FieldTag, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[clean] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_tag(attrs: &[Attribute]) -> Result<FieldTag> {
    let mut tag: Option<FieldTag> = None;
    for attr in attrs {
        if !attr.path().is_ident("clean") {
            continue;
        }

        match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(value),
                    ..
                }) => {
                    let value = value.value();
                    let next = if value == SENTINEL {
                        FieldTag::Flagged
                    } else {
                        FieldTag::Inert(value)
                    };
                    set_tag(&mut tag, next, attr.span())?;
                }
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected a string literal (e.g., #[clean = \"true\"])",
                    ));
                }
            },
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "bare #[clean] has no value; write #[clean = \"true\"]",
                ));
            }
            Meta::List(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "list syntax is not supported for field-level #[clean]; write #[clean = \"true\"]",
                ));
            }
        }
    }

    Ok(tag.unwrap_or(FieldTag::Absent))
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_absent() {
        let attrs = parse_attrs(quote! {});
        let tag = parse_field_tag(&attrs).unwrap();
        assert!(matches!(tag, FieldTag::Absent));
    }

    #[test]
    fn true_string_returns_flagged() {
        let attrs = parse_attrs(quote! { #[clean = "true"] });
        let tag = parse_field_tag(&attrs).unwrap();
        assert!(matches!(tag, FieldTag::Flagged));
    }

    #[test]
    fn other_strings_are_inert() {
        for value in ["TRUE", "True", "1", "yes", "false", "", " true"] {
            let attrs = parse_attrs(quote! { #[clean = #value] });
            match parse_field_tag(&attrs).unwrap() {
                FieldTag::Inert(kept) => assert_eq!(kept, value),
                other => panic!("expected Inert for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn bool_literal_errors() {
        let attrs = parse_attrs(quote! { #[clean = true] });
        let result = parse_field_tag(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("expected a string literal"));
    }

    #[test]
    fn bare_clean_errors() {
        let attrs = parse_attrs(quote! { #[clean] });
        let result = parse_field_tag(&attrs);
        assert!(result.unwrap_err().to_string().contains("has no value"));
    }

    #[test]
    fn list_syntax_errors() {
        let attrs = parse_attrs(quote! { #[clean(true)] });
        let result = parse_field_tag(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("list syntax is not supported"));
    }

    #[test]
    fn multiple_clean_attributes_error() {
        let attrs = parse_attrs(quote! {
            #[clean = "true"]
            #[clean = "false"]
        });
        let result = parse_field_tag(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("multiple #[clean] attributes"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(rename = "password")]
        });
        let tag = parse_field_tag(&attrs).unwrap();
        assert!(matches!(tag, FieldTag::Absent));
    }
}
