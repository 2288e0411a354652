//! Fluent builders.
//!
//! Every concrete model gets a generated `{Name}Builder` that stages an owned
//! model value. Setters take and return the builder by value; `build()`
//! clones the staged value, so a builder can be reused and every build is
//! independent of the ones before it.
//!
//! The base-level setters (`set_id`, `add_extension`, `set_meta`, ...) live
//! in the traits below and reach the staged value through the accessor
//! traits in [`crate::fields`].
//!
//! ```ignore
//! use meridian_fhir::builder::{DomainResourceBuilder, ModelBuilder, ResourceBuilder};
//! use meridian_fhir::r4::{Basic, CodeableConcept, Extension, ExtensionValue};
//!
//! let basic = Basic::builder()
//!     .set_id("example")
//!     .add_extension(Extension::new("http://example.org/flag", ExtensionValue::Boolean(true)))
//!     .set_code(CodeableConcept::builder().set_text("demo").build())
//!     .build();
//! ```

use crate::choice::ChoiceType;
use crate::fields::{BackboneElementFields, DomainResourceFields, ElementFields, ResourceFields};

/// Owns the staged model of a builder.
pub trait ModelBuilder: Sized {
    type Model: Clone;

    fn staged(&self) -> &Self::Model;
    fn staged_mut(&mut self) -> &mut Self::Model;

    /// Returns a new model from the staged data. Can be called repeatedly.
    fn build(&self) -> Self::Model {
        self.staged().clone()
    }
}

/// Appends to a lazily created array, preserving insertion order.
pub fn add_to_array<T>(slot: &mut Option<Vec<T>>, value: T) {
    slot.get_or_insert_with(Vec::new).push(value);
}

/// Replaces a whole choice group. Whatever variant was staged before is gone.
pub fn set_choice<C: ChoiceType>(slot: &mut Option<C>, value: C) {
    *slot = Some(value);
}

pub trait ElementBuilder: ModelBuilder<Model: ElementFields> {
    fn set_id(mut self, id: impl Into<String>) -> Self {
        self.staged_mut().element_mut().id = Some(id.into());
        self
    }

    fn add_extension(mut self, extension: <Self::Model as ElementFields>::Extension) -> Self {
        add_to_array(&mut self.staged_mut().element_mut().extension, extension);
        self
    }
}

pub trait BackboneElementBuilder: ElementBuilder + ModelBuilder<Model: BackboneElementFields> {
    fn add_modifier_extension(
        mut self,
        extension: <Self::Model as ElementFields>::Extension,
    ) -> Self {
        add_to_array(
            &mut self.staged_mut().backbone_mut().modifier_extension,
            extension,
        );
        self
    }
}

pub trait ResourceBuilder: ModelBuilder<Model: ResourceFields> {
    fn set_id(mut self, id: impl Into<String>) -> Self {
        self.staged_mut().resource_mut().id = Some(id.into());
        self
    }

    fn set_meta(mut self, meta: <Self::Model as ResourceFields>::Meta) -> Self {
        self.staged_mut().resource_mut().meta = Some(meta);
        self
    }

    fn set_implicit_rules(mut self, implicit_rules: impl Into<String>) -> Self {
        self.staged_mut().resource_mut().implicit_rules = Some(implicit_rules.into());
        self
    }

    fn set_language(mut self, language: impl Into<String>) -> Self {
        self.staged_mut().resource_mut().language = Some(language.into());
        self
    }
}

pub trait DomainResourceBuilder: ResourceBuilder + ModelBuilder<Model: DomainResourceFields> {
    fn set_text(mut self, text: <Self::Model as DomainResourceFields>::Narrative) -> Self {
        self.staged_mut().domain_mut().text = Some(text);
        self
    }

    /// Accepts any concrete resource of the same version.
    fn add_contained(
        mut self,
        resource: impl Into<<Self::Model as DomainResourceFields>::Contained>,
    ) -> Self {
        add_to_array(&mut self.staged_mut().domain_mut().contained, resource.into());
        self
    }

    fn add_extension(
        mut self,
        extension: <Self::Model as DomainResourceFields>::Extension,
    ) -> Self {
        add_to_array(&mut self.staged_mut().domain_mut().extension, extension);
        self
    }

    fn add_modifier_extension(
        mut self,
        extension: <Self::Model as DomainResourceFields>::Extension,
    ) -> Self {
        add_to_array(&mut self.staged_mut().domain_mut().modifier_extension, extension);
        self
    }
}
