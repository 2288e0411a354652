//! The closed, per-version resource union.

/// Declares `AnyResource` over the listed concrete resources.
///
/// Variants are boxed so the union stays two words wide no matter how large
/// the resources get, which keeps deeply nested `contained` graphs cheap on
/// the stack. Resources outside the catalog survive verbatim in
/// `Unrecognized`.
macro_rules! any_resource {
    ($($name:ident),+ $(,)?) => {
        /// Any resource of this version, dispatched on `resourceType`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyResource {
            $($name(Box<$name>),)+
            /// A resource type this catalog does not model, kept as raw JSON.
            Unrecognized(Box<$crate::layer::JsonObject>),
        }

        impl AnyResource {
            pub fn resource_type(&self) -> &str {
                match self {
                    $(AnyResource::$name(_) => <$name as $crate::fields::ResourceType>::RESOURCE_TYPE,)+
                    AnyResource::Unrecognized(raw) => raw
                        .get($crate::layer::RESOURCE_TYPE_KEY)
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or_default(),
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $(AnyResource::$name(resource) => $crate::fields::ResourceFields::id(&**resource),)+
                    AnyResource::Unrecognized(raw) => raw.get("id").and_then(serde_json::Value::as_str),
                }
            }

            pub fn meta(&self) -> Option<&Meta> {
                match self {
                    $(AnyResource::$name(resource) => $crate::fields::ResourceFields::meta(&**resource),)+
                    AnyResource::Unrecognized(_) => None,
                }
            }

            /// `meta.lastUpdated` as a UTC timestamp. Unrecognized resources
            /// are read straight from their raw JSON.
            pub fn last_updated(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                match self {
                    AnyResource::Unrecognized(raw) => raw
                        .get("meta")
                        .and_then(|meta| meta.get("lastUpdated"))
                        .and_then(serde_json::Value::as_str)
                        .and_then($crate::primitives::parse_instant),
                    _ => self.meta().and_then(Meta::last_updated_at),
                }
            }
        }

        impl $crate::layer::FhirValue for AnyResource {
            fn from_json(value: serde_json::Value) -> $crate::Result<Self> {
                let raw = $crate::layer::expect_object(value)?;
                let resource_type = raw
                    .get($crate::layer::RESOURCE_TYPE_KEY)
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned);
                match resource_type.as_deref() {
                    $(Some(stringify!($name)) => <$name as $crate::layer::Layer>::from_object(raw)
                        .map(|resource| AnyResource::$name(Box::new(resource))),)+
                    Some(other) => {
                        tracing::warn!(
                            resource_type = %other,
                            fhir_version = %FHIR_VERSION,
                            "resource type not in the catalog, keeping it verbatim"
                        );
                        Ok(AnyResource::Unrecognized(Box::new(raw)))
                    }
                    None => Err($crate::FhirError::Decode {
                        path: $crate::layer::RESOURCE_TYPE_KEY.to_owned(),
                        message: "missing or non-string resourceType".to_owned(),
                    }),
                }
            }

            fn to_json(&self) -> $crate::Result<serde_json::Value> {
                match self {
                    $(AnyResource::$name(resource) => $crate::layer::FhirValue::to_json(&**resource),)+
                    AnyResource::Unrecognized(raw) => Ok(serde_json::Value::Object((**raw).clone())),
                }
            }
        }

        impl serde::Serialize for AnyResource {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                $crate::layer::serialize_value(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for AnyResource {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                $crate::layer::deserialize_value(deserializer)
            }
        }

        impl $crate::FhirResourceTypeProvider for AnyResource {
            fn get_resource_type_names() -> Vec<&'static str> {
                vec![$(stringify!($name)),+]
            }
        }

        $(
            impl From<$name> for AnyResource {
                fn from(resource: $name) -> Self {
                    AnyResource::$name(Box::new(resource))
                }
            }
        )+
    };
}

pub(crate) use any_resource;
