//! The four base levels shared by every FHIR version.
//!
//! They are generic over the version-specific types they hold (`Extension`,
//! `Meta`, `Narrative` and the contained-resource union); each version module
//! instantiates them with its own types, so `r4::Element` and `r5::Element`
//! are unrelated nominal types even though they share this definition.

use crate::error::Result;
use crate::fields::{BackboneElementFields, DomainResourceFields, ElementFields, ResourceFields};
use crate::layer::{FhirValue, JsonObject, Layer, Property, RESOURCE_TYPE_KEY};

/// Root of every FHIR datatype and backbone element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
}

impl<E> Default for Element<E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
        }
    }
}

impl<E: FhirValue> Layer for Element<E> {
    const PROPERTIES: &'static [&'static str] = &["id", "extension"];

    fn read_layer(raw: &mut JsonObject) -> Result<Self> {
        Ok(Element {
            id: Property::take(raw, "id")?,
            extension: Property::take(raw, "extension")?,
        })
    }

    fn write_layer(&self, out: &mut JsonObject) -> Result<()> {
        self.id.put("id", out)?;
        self.extension.put("extension", out)
    }
}

impl<E> ElementFields for Element<E> {
    type Extension = E;

    fn element(&self) -> &Element<E> {
        self
    }

    fn element_mut(&mut self) -> &mut Element<E> {
        self
    }
}

/// Element plus `modifierExtension`; parent of every nested structure.
#[derive(Debug, Clone, PartialEq)]
pub struct BackboneElement<E> {
    pub element: Element<E>,
    pub modifier_extension: Option<Vec<E>>,
}

impl<E> Default for BackboneElement<E> {
    fn default() -> Self {
        BackboneElement {
            element: Element::default(),
            modifier_extension: None,
        }
    }
}

impl<E: FhirValue> Layer for BackboneElement<E> {
    const PROPERTIES: &'static [&'static str] = &["modifierExtension"];

    fn property_names() -> Vec<&'static str> {
        let mut names = Element::<E>::property_names();
        names.extend_from_slice(Self::PROPERTIES);
        names
    }

    fn read_layer(raw: &mut JsonObject) -> Result<Self> {
        let element = Element::read_layer(raw)?;
        Ok(BackboneElement {
            element,
            modifier_extension: Property::take(raw, "modifierExtension")?,
        })
    }

    fn write_layer(&self, out: &mut JsonObject) -> Result<()> {
        self.element.write_layer(out)?;
        self.modifier_extension.put("modifierExtension", out)
    }
}

impl<E> ElementFields for BackboneElement<E> {
    type Extension = E;

    fn element(&self) -> &Element<E> {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element<E> {
        &mut self.element
    }
}

impl<E> BackboneElementFields for BackboneElement<E> {
    fn backbone(&self) -> &BackboneElement<E> {
        self
    }

    fn backbone_mut(&mut self) -> &mut BackboneElement<E> {
        self
    }
}

/// Root of every resource. The `resourceType` discriminant belongs to this
/// level but is written by the concrete type, which is the only one that
/// knows its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<M> {
    pub id: Option<String>,
    pub meta: Option<M>,
    pub implicit_rules: Option<String>,
    pub language: Option<String>,
}

impl<M> Default for Resource<M> {
    fn default() -> Self {
        Resource {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
        }
    }
}

impl<M: FhirValue> Layer for Resource<M> {
    const PROPERTIES: &'static [&'static str] =
        &[RESOURCE_TYPE_KEY, "id", "meta", "implicitRules", "language"];

    fn read_layer(raw: &mut JsonObject) -> Result<Self> {
        raw.remove(RESOURCE_TYPE_KEY);
        Ok(Resource {
            id: Property::take(raw, "id")?,
            meta: Property::take(raw, "meta")?,
            implicit_rules: Property::take(raw, "implicitRules")?,
            language: Property::take(raw, "language")?,
        })
    }

    fn write_layer(&self, out: &mut JsonObject) -> Result<()> {
        self.id.put("id", out)?;
        self.meta.put("meta", out)?;
        self.implicit_rules.put("implicitRules", out)?;
        self.language.put("language", out)
    }
}

impl<M> ResourceFields for Resource<M> {
    type Meta = M;

    fn resource(&self) -> &Resource<M> {
        self
    }

    fn resource_mut(&mut self) -> &mut Resource<M> {
        self
    }
}

/// Resource plus narrative, contained resources and extensions.
///
/// `R` is the version's closed resource union, which makes `contained`
/// recursive: a contained resource may itself contain resources.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResource<M, N, R, E> {
    pub resource: Resource<M>,
    pub text: Option<N>,
    pub contained: Option<Vec<R>>,
    pub extension: Option<Vec<E>>,
    pub modifier_extension: Option<Vec<E>>,
}

impl<M, N, R, E> Default for DomainResource<M, N, R, E> {
    fn default() -> Self {
        DomainResource {
            resource: Resource::default(),
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
        }
    }
}

impl<M, N, R, E> Layer for DomainResource<M, N, R, E>
where
    M: FhirValue,
    N: FhirValue,
    R: FhirValue,
    E: FhirValue,
{
    const PROPERTIES: &'static [&'static str] =
        &["text", "contained", "extension", "modifierExtension"];

    fn property_names() -> Vec<&'static str> {
        let mut names = Resource::<M>::property_names();
        names.extend_from_slice(Self::PROPERTIES);
        names
    }

    fn read_layer(raw: &mut JsonObject) -> Result<Self> {
        let resource = Resource::read_layer(raw)?;
        Ok(DomainResource {
            resource,
            text: Property::take(raw, "text")?,
            contained: Property::take(raw, "contained")?,
            extension: Property::take(raw, "extension")?,
            modifier_extension: Property::take(raw, "modifierExtension")?,
        })
    }

    fn write_layer(&self, out: &mut JsonObject) -> Result<()> {
        self.resource.write_layer(out)?;
        self.text.put("text", out)?;
        self.contained.put("contained", out)?;
        self.extension.put("extension", out)?;
        self.modifier_extension.put("modifierExtension", out)
    }
}

impl<M, N, R, E> ResourceFields for DomainResource<M, N, R, E> {
    type Meta = M;

    fn resource(&self) -> &Resource<M> {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource<M> {
        &mut self.resource
    }
}

impl<M, N, R, E> DomainResourceFields for DomainResource<M, N, R, E> {
    type Narrative = N;
    type Contained = R;
    type Extension = E;

    fn domain(&self) -> &DomainResource<M, N, R, E> {
        self
    }

    fn domain_mut(&mut self) -> &mut DomainResource<M, N, R, E> {
        self
    }
}
