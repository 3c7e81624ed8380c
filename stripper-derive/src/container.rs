//! Container-level attribute parsing for `#[derive(Clean)]`.
//!
//! This module handles attributes on the struct itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[clean(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Path to the `stripper` crate, overriding the resolved one.
    pub(crate) crate_path: Option<syn::Path>,
}

/// Parses container-level `#[clean(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("clean") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("crate") {
                        if options.crate_path.is_some() {
                            return Err(meta.error("duplicate `crate` option"));
                        }
                        let value: LitStr = meta.value()?.parse()?;
                        options.crate_path = Some(value.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `crate`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "#[clean] on a struct has no meaning; annotate fields with #[clean = \"true\"]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is only supported on fields",
                ));
            }
        }
    }

    Ok(options)
}
