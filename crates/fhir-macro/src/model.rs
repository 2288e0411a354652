//! Expansion of `#[derive(FhirModel)]`.
//!
//! A model struct is one layer of the element/resource hierarchy. The derive
//! emits, in order:
//!
//! * the `Layer` impl: the parent layer (`#[fhir(base)]`) reads and writes
//!   first, then every own field in declaration order;
//! * `FhirValue`, `serde::Serialize` and `serde::Deserialize`, all routed
//!   through the layer reader/writer so key order never depends on serde;
//! * accessor delegation to the parent layer (`kind = "..."`);
//! * `ResourceType` for concrete resources (`resource_type = "..."`);
//! * a `{Name}Builder` unless the type is generic.

use heck::ToLowerCamelCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type, parse_quote,
};

use crate::attrs::{FieldAttrs, Kind, ModelAttrs};

struct ModelField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    attrs: FieldAttrs,
    /// Field name without a raw-identifier prefix (`r#type` -> `type`).
    name: String,
    /// JSON property name, or the choice prefix for `#[fhir(choice)]` fields.
    wire: String,
}

impl<'a> ModelField<'a> {
    fn from_field(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "FhirModel requires named fields"))?;
        let attrs = FieldAttrs::parse(&field.attrs)?;
        let name = ident.unraw().to_string();
        let wire = name.to_lower_camel_case();
        Ok(ModelField {
            ident,
            ty: &field.ty,
            attrs,
            name,
            wire,
        })
    }

    fn property_name(&self) -> String {
        if self.attrs.choice {
            format!("{}[x]", self.wire)
        } else {
            self.wire.clone()
        }
    }
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = ModelAttrs::parse(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "FhirModel can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "FhirModel requires a struct with named fields",
        ));
    };

    let fields = named
        .named
        .iter()
        .map(ModelField::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let mut bases = fields.iter().filter(|field| field.attrs.base);
    let base = bases.next();
    if let Some(extra) = bases.next() {
        return Err(syn::Error::new_spanned(
            extra.ident,
            "only one field may be marked #[fhir(base)]",
        ));
    }
    let own: Vec<&ModelField> = fields.iter().filter(|field| !field.attrs.base).collect();

    if attrs.kind.is_some() && base.is_none() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[fhir(kind = ...)] needs a #[fhir(base)] field to delegate to",
        ));
    }

    let mut tokens = layer_impls(input, &attrs, base, &own);
    if let (Some(kind), Some(base)) = (attrs.kind, base) {
        tokens.extend(delegation_impls(&input.ident, kind, base));
    }
    if let Some(resource_type) = &attrs.resource_type {
        let name = &input.ident;
        tokens.extend(quote! {
            impl ::meridian_fhir::fields::ResourceType for #name {
                const RESOURCE_TYPE: &'static str = #resource_type;
            }
        });
    }
    if input.generics.params.is_empty() {
        tokens.extend(builder(input, attrs.kind, &own));
    }
    Ok(tokens)
}

fn layer_impls(
    input: &DeriveInput,
    attrs: &ModelAttrs,
    base: Option<&ModelField>,
    own: &[&ModelField],
) -> TokenStream {
    let name = &input.ident;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param
            .bounds
            .push(parse_quote!(::meridian_fhir::layer::FhirValue));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut de_generics = generics.clone();
    de_generics.params.insert(0, parse_quote!('de));
    let (de_impl_generics, _, _) = de_generics.split_for_impl();

    let properties = own.iter().map(|field| field.property_name());

    let base_read = base.map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        quote! { let #ident = <#ty as ::meridian_fhir::layer::Layer>::read_layer(raw)?; }
    });
    let base_write = base.map(|field| {
        let ident = field.ident;
        quote! { ::meridian_fhir::layer::Layer::write_layer(&self.#ident, out)?; }
    });
    let base_names = base.map(|field| {
        let ty = field.ty;
        quote! {
            fn property_names() -> ::std::vec::Vec<&'static str> {
                let mut names = <#ty as ::meridian_fhir::layer::Layer>::property_names();
                names.extend_from_slice(Self::PROPERTIES);
                names
            }
        }
    });

    let reads = own.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let wire = &field.wire;
        quote! { let #ident = <#ty as ::meridian_fhir::layer::Property>::take(raw, #wire)?; }
    });
    let writes = own.iter().map(|field| {
        let ident = field.ident;
        let wire = &field.wire;
        quote! { ::meridian_fhir::layer::Property::put(&self.#ident, #wire, out)?; }
    });
    let all_idents = base
        .into_iter()
        .chain(own.iter().copied())
        .map(|field| field.ident);

    let tag = attrs.resource_type.as_ref().map(|resource_type| {
        quote! { ::meridian_fhir::layer::write_resource_type(out, #resource_type); }
    });

    quote! {
        impl #impl_generics ::meridian_fhir::layer::Layer for #name #ty_generics #where_clause {
            const PROPERTIES: &'static [&'static str] = &[#(#properties),*];

            #base_names

            fn read_layer(
                raw: &mut ::meridian_fhir::layer::JsonObject,
            ) -> ::core::result::Result<Self, ::meridian_fhir::FhirError> {
                #base_read
                #(#reads)*
                ::core::result::Result::Ok(Self { #(#all_idents),* })
            }

            fn write_layer(
                &self,
                out: &mut ::meridian_fhir::layer::JsonObject,
            ) -> ::core::result::Result<(), ::meridian_fhir::FhirError> {
                #tag
                #base_write
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::meridian_fhir::layer::FhirValue for #name #ty_generics #where_clause {
            fn from_json(
                value: ::meridian_fhir::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, ::meridian_fhir::FhirError> {
                let raw = ::meridian_fhir::layer::expect_object(value)?;
                <Self as ::meridian_fhir::layer::Layer>::from_object(raw)
            }

            fn to_json(
                &self,
            ) -> ::core::result::Result<
                ::meridian_fhir::__private::serde_json::Value,
                ::meridian_fhir::FhirError,
            > {
                <Self as ::meridian_fhir::layer::Layer>::to_object(self)
                    .map(::meridian_fhir::__private::serde_json::Value::Object)
            }
        }

        impl #impl_generics ::meridian_fhir::__private::serde::Serialize
            for #name #ty_generics #where_clause
        {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::meridian_fhir::__private::serde::Serializer,
            {
                ::meridian_fhir::layer::serialize_value(self, serializer)
            }
        }

        impl #de_impl_generics ::meridian_fhir::__private::serde::Deserialize<'de>
            for #name #ty_generics #where_clause
        {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::meridian_fhir::__private::serde::Deserializer<'de>,
            {
                ::meridian_fhir::layer::deserialize_value(deserializer)
            }
        }
    }
}

fn delegation_impls(name: &Ident, kind: Kind, base: &ModelField) -> TokenStream {
    let ty = base.ty;
    let ident = base.ident;

    let element = quote! {
        impl ::meridian_fhir::fields::ElementFields for #name {
            type Extension = <#ty as ::meridian_fhir::fields::ElementFields>::Extension;

            fn element(&self) -> &::meridian_fhir::base::Element<Self::Extension> {
                ::meridian_fhir::fields::ElementFields::element(&self.#ident)
            }

            fn element_mut(&mut self) -> &mut ::meridian_fhir::base::Element<Self::Extension> {
                ::meridian_fhir::fields::ElementFields::element_mut(&mut self.#ident)
            }
        }
    };
    let backbone = quote! {
        impl ::meridian_fhir::fields::BackboneElementFields for #name {
            fn backbone(&self) -> &::meridian_fhir::base::BackboneElement<Self::Extension> {
                ::meridian_fhir::fields::BackboneElementFields::backbone(&self.#ident)
            }

            fn backbone_mut(
                &mut self,
            ) -> &mut ::meridian_fhir::base::BackboneElement<Self::Extension> {
                ::meridian_fhir::fields::BackboneElementFields::backbone_mut(&mut self.#ident)
            }
        }
    };
    let resource = quote! {
        impl ::meridian_fhir::fields::ResourceFields for #name {
            type Meta = <#ty as ::meridian_fhir::fields::ResourceFields>::Meta;

            fn resource(&self) -> &::meridian_fhir::base::Resource<Self::Meta> {
                ::meridian_fhir::fields::ResourceFields::resource(&self.#ident)
            }

            fn resource_mut(&mut self) -> &mut ::meridian_fhir::base::Resource<Self::Meta> {
                ::meridian_fhir::fields::ResourceFields::resource_mut(&mut self.#ident)
            }
        }
    };
    let domain = quote! {
        impl ::meridian_fhir::fields::DomainResourceFields for #name {
            type Narrative = <#ty as ::meridian_fhir::fields::DomainResourceFields>::Narrative;
            type Contained = <#ty as ::meridian_fhir::fields::DomainResourceFields>::Contained;
            type Extension = <#ty as ::meridian_fhir::fields::DomainResourceFields>::Extension;

            fn domain(
                &self,
            ) -> &::meridian_fhir::base::DomainResource<
                Self::Meta,
                Self::Narrative,
                Self::Contained,
                Self::Extension,
            > {
                ::meridian_fhir::fields::DomainResourceFields::domain(&self.#ident)
            }

            fn domain_mut(
                &mut self,
            ) -> &mut ::meridian_fhir::base::DomainResource<
                Self::Meta,
                Self::Narrative,
                Self::Contained,
                Self::Extension,
            > {
                ::meridian_fhir::fields::DomainResourceFields::domain_mut(&mut self.#ident)
            }
        }
    };

    match kind {
        Kind::Element => element,
        Kind::Backbone => quote! { #element #backbone },
        Kind::Resource => resource,
        Kind::DomainResource => quote! { #resource #domain },
    }
}

fn builder(input: &DeriveInput, kind: Option<Kind>, own: &[&ModelField]) -> TokenStream {
    let name = &input.ident;
    let vis = &input.vis;
    let builder = format_ident!("{}Builder", name);
    let doc = format!("Fluent builder staging a [`{name}`].");

    let setters = own.iter().map(|field| {
        let ident = field.ident;
        if let Some(item) = wrapped(field.ty, "Option").and_then(|inner| wrapped(inner, "Vec")) {
            let method = format_ident!("add_{}", field.name);
            let doc = format!("Appends one entry to `{}`.", field.wire);
            quote! {
                #[doc = #doc]
                pub fn #method(mut self, value: #item) -> Self {
                    ::meridian_fhir::builder::add_to_array(&mut self.data.#ident, value);
                    self
                }
            }
        } else if let Some(inner) = wrapped(field.ty, "Option") {
            let method = format_ident!("set_{}", field.name);
            if field.attrs.choice {
                let doc = format!(
                    "Sets `{}[x]`, replacing whichever variant was staged before.",
                    field.wire
                );
                quote! {
                    #[doc = #doc]
                    pub fn #method(mut self, value: #inner) -> Self {
                        ::meridian_fhir::builder::set_choice(&mut self.data.#ident, value);
                        self
                    }
                }
            } else {
                quote! {
                    pub fn #method(mut self, value: impl ::core::convert::Into<#inner>) -> Self {
                        self.data.#ident = ::core::option::Option::Some(value.into());
                        self
                    }
                }
            }
        } else {
            let method = format_ident!("set_{}", field.name);
            let ty = field.ty;
            quote! {
                pub fn #method(mut self, value: #ty) -> Self {
                    self.data.#ident = value;
                    self
                }
            }
        }
    });

    let kind_impls = match kind {
        Some(Kind::Element) => quote! {
            impl ::meridian_fhir::builder::ElementBuilder for #builder {}
        },
        Some(Kind::Backbone) => quote! {
            impl ::meridian_fhir::builder::ElementBuilder for #builder {}
            impl ::meridian_fhir::builder::BackboneElementBuilder for #builder {}
        },
        Some(Kind::Resource) => quote! {
            impl ::meridian_fhir::builder::ResourceBuilder for #builder {}
        },
        Some(Kind::DomainResource) => quote! {
            impl ::meridian_fhir::builder::ResourceBuilder for #builder {}
            impl ::meridian_fhir::builder::DomainResourceBuilder for #builder {}
        },
        None => TokenStream::new(),
    };

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        #vis struct #builder {
            data: #name,
        }

        impl #builder {
            pub fn new() -> Self {
                Self::default()
            }

            #(#setters)*
        }

        impl ::meridian_fhir::builder::ModelBuilder for #builder {
            type Model = #name;

            fn staged(&self) -> &#name {
                &self.data
            }

            fn staged_mut(&mut self) -> &mut #name {
                &mut self.data
            }
        }

        impl ::core::convert::From<#name> for #builder {
            fn from(data: #name) -> Self {
                Self { data }
            }
        }

        impl #name {
            /// Starts an empty builder for this type.
            pub fn builder() -> #builder {
                #builder::default()
            }
        }

        #kind_impls
    }
}

/// Returns `T` when `ty` is spelled `wrapper<T>` (last path segment only).
fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
