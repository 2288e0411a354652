//! Uniform access to the base-level fields of any model.
//!
//! Concrete types embed their parent layer as a field; these traits reach
//! through that composition so generic code (builders, lookups) can treat
//! a `Coding` as an Element or an `Observation` as a DomainResource.
//! Implementations for concrete types are generated by `#[derive(FhirModel)]`.

use crate::base::{BackboneElement, DomainResource, Element, Resource};

/// Access to the Element layer: `id` and `extension`.
pub trait ElementFields {
    type Extension;

    fn element(&self) -> &Element<Self::Extension>;
    fn element_mut(&mut self) -> &mut Element<Self::Extension>;

    fn id(&self) -> Option<&str> {
        self.element().id.as_deref()
    }

    fn extensions(&self) -> &[Self::Extension] {
        self.element().extension.as_deref().unwrap_or_default()
    }

    /// Extensions whose `url` equals `url`, in insertion order.
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a Self::Extension>
    where
        Self::Extension: ExtensionUrl,
    {
        self.extensions()
            .iter()
            .filter(move |extension| extension.url() == Some(url))
    }
}

/// Access to the BackboneElement layer: `modifierExtension`.
pub trait BackboneElementFields: ElementFields {
    fn backbone(&self) -> &BackboneElement<Self::Extension>;
    fn backbone_mut(&mut self) -> &mut BackboneElement<Self::Extension>;

    fn modifier_extensions(&self) -> &[Self::Extension] {
        self.backbone()
            .modifier_extension
            .as_deref()
            .unwrap_or_default()
    }
}

/// Access to the Resource layer: `id`, `meta`, `implicitRules`, `language`.
pub trait ResourceFields {
    type Meta;

    fn resource(&self) -> &Resource<Self::Meta>;
    fn resource_mut(&mut self) -> &mut Resource<Self::Meta>;

    fn id(&self) -> Option<&str> {
        self.resource().id.as_deref()
    }

    fn meta(&self) -> Option<&Self::Meta> {
        self.resource().meta.as_ref()
    }
}

/// Access to the DomainResource layer: `text`, `contained`, `extension`,
/// `modifierExtension`.
pub trait DomainResourceFields: ResourceFields {
    type Narrative;
    type Contained;
    type Extension;

    #[allow(clippy::type_complexity)]
    fn domain(
        &self,
    ) -> &DomainResource<Self::Meta, Self::Narrative, Self::Contained, Self::Extension>;

    #[allow(clippy::type_complexity)]
    fn domain_mut(
        &mut self,
    ) -> &mut DomainResource<Self::Meta, Self::Narrative, Self::Contained, Self::Extension>;

    fn text(&self) -> Option<&Self::Narrative> {
        self.domain().text.as_ref()
    }

    fn contained(&self) -> &[Self::Contained] {
        self.domain().contained.as_deref().unwrap_or_default()
    }

    fn extensions(&self) -> &[Self::Extension] {
        self.domain().extension.as_deref().unwrap_or_default()
    }

    fn modifier_extensions(&self) -> &[Self::Extension] {
        self.domain()
            .modifier_extension
            .as_deref()
            .unwrap_or_default()
    }

    /// Extensions whose `url` equals `url`, in insertion order.
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a Self::Extension>
    where
        Self::Extension: ExtensionUrl,
    {
        self.extensions()
            .iter()
            .filter(move |extension| extension.url() == Some(url))
    }
}

/// Implemented by each version's `Extension`.
pub trait ExtensionUrl {
    fn url(&self) -> Option<&str>;
}

/// The `resourceType` discriminant of a concrete resource.
pub trait ResourceType {
    const RESOURCE_TYPE: &'static str;
}
