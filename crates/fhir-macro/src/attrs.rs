//! Parsing of the `#[fhir(...)]` helper attribute.

use syn::{Attribute, LitStr};

/// Which base-level accessor traits a model delegates to its `#[fhir(base)]` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Element,
    Backbone,
    Resource,
    DomainResource,
}

impl Kind {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "element" => Ok(Kind::Element),
            "backbone" => Ok(Kind::Backbone),
            "resource" => Ok(Kind::Resource),
            "domain_resource" => Ok(Kind::DomainResource),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unknown kind `{other}`, expected one of element, backbone, resource, domain_resource"
                ),
            )),
        }
    }
}

/// Type-level options: `#[fhir(kind = "...", resource_type = "...")]`.
#[derive(Default)]
pub struct ModelAttrs {
    pub kind: Option<Kind>,
    pub resource_type: Option<LitStr>,
}

impl ModelAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = ModelAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("fhir")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("kind") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.kind = Some(Kind::from_lit(&lit)?);
                    Ok(())
                } else if meta.path.is_ident("resource_type") {
                    out.resource_type = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported #[fhir] attribute on a model type"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Field-level options: `#[fhir(base)]`, `#[fhir(choice)]`.
#[derive(Default)]
pub struct FieldAttrs {
    pub base: bool,
    pub choice: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = FieldAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("fhir")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    out.base = true;
                    Ok(())
                } else if meta.path.is_ident("choice") {
                    out.choice = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported #[fhir] attribute on a field"))
                }
            })?;
        }
        if out.base && out.choice {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "#[fhir(base)] cannot be combined with choice",
            ));
        }
        Ok(out)
    }
}

/// Whether a choice variant carries `#[fhir(fallback)]`, marking it as the
/// holder for sibling keys no other variant declares.
pub fn is_fallback(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut fallback = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("fhir")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("fallback") {
                fallback = true;
                Ok(())
            } else {
                Err(meta.error("unsupported #[fhir] attribute on a choice variant"))
            }
        })?;
    }
    Ok(fallback)
}
