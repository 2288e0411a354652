//! Choice-type groups (`value[x]`).
//!
//! A group is a single Rust enum with one variant per allowed type. On the
//! wire it appears as sibling properties built from the group prefix and the
//! variant's type suffix (`valueString`, `valueQuantity`, ...). Since the
//! slot holds one enum value, at most one sibling is ever written.
//!
//! A group may mark one variant `#[fhir(fallback)]`. That variant holds an
//! [`UnmodeledValue`]: a sibling whose suffix no other variant declares,
//! kept verbatim so it round-trips untouched.

use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::layer::JsonObject;

/// Implemented by `#[derive(FhirChoice)]`.
pub trait ChoiceType: Sized {
    /// Type suffixes in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Whether undeclared siblings are kept through [`ChoiceType::read_unmodeled`].
    const KEEPS_UNMODELED: bool = false;

    /// Suffix of the populated variant (`"Quantity"` for `valueQuantity`).
    fn type_suffix(&self) -> &str;

    fn read_variant(suffix: &str, value: Value) -> Result<Self>;

    /// Wraps a sibling with an undeclared suffix. `None` unless the group
    /// has a fallback variant.
    fn read_unmodeled(_value: UnmodeledValue) -> Option<Self> {
        None
    }

    fn write_variant(&self) -> Result<Value>;

    /// Full wire key for this variant under `prefix`.
    fn wire_key(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.type_suffix())
    }
}

/// Reads a choice group, removing every sibling key from `raw`.
///
/// If the input carries several siblings the first declared variant wins
/// and the rest are dropped with a warning.
pub fn take_choice<C: ChoiceType>(raw: &mut JsonObject, prefix: &str) -> Result<Option<C>> {
    let mut chosen: Option<C> = None;
    for suffix in C::VARIANTS {
        let key = format!("{prefix}{suffix}");
        let Some(value) = raw.remove(&key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if let Some(kept) = &chosen {
            warn!(
                dropped = %key,
                kept = %kept.wire_key(prefix),
                "choice group carries more than one value, keeping the first declared type"
            );
            continue;
        }
        chosen = Some(C::read_variant(suffix, value).map_err(|e| e.within(&key))?);
    }
    if !C::KEEPS_UNMODELED {
        return Ok(chosen);
    }

    let unmodeled: Vec<String> = raw
        .keys()
        .filter(|key| is_unmodeled_sibling::<C>(key, prefix))
        .cloned()
        .collect();
    for key in unmodeled {
        let Some(value) = raw.remove(&key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if let Some(kept) = &chosen {
            warn!(
                dropped = %key,
                kept = %kept.wire_key(prefix),
                "choice group carries more than one value, keeping the first"
            );
            continue;
        }
        let suffix = key[prefix.len()..].to_owned();
        chosen = C::read_unmodeled(UnmodeledValue { suffix, value });
    }
    Ok(chosen)
}

/// `prefix` followed by a type name this group does not declare.
fn is_unmodeled_sibling<C: ChoiceType>(key: &str, prefix: &str) -> bool {
    match key.strip_prefix(prefix) {
        Some(suffix) => {
            suffix.starts_with(|c: char| c.is_ascii_uppercase())
                && suffix.chars().all(|c| c.is_ascii_alphanumeric())
                && !C::VARIANTS.contains(&suffix)
        }
        None => false,
    }
}

/// A choice value whose type the group does not model, kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmodeledValue {
    /// Type suffix as it appeared on the wire (`"UsageContext"`).
    pub suffix: String,
    pub value: Value,
}

/// Writes the populated variant, if any, under its full wire key.
pub fn put_choice<C: ChoiceType>(value: Option<&C>, prefix: &str, out: &mut JsonObject) -> Result<()> {
    if let Some(choice) = value {
        let key = choice.wire_key(prefix);
        let json = choice.write_variant().map_err(|e| e.within(&key))?;
        out.insert(key, json);
    }
    Ok(())
}
