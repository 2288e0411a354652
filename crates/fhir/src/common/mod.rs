//! The shared pattern every version module instantiates.
//!
//! Shapes that are identical across versions are written once as
//! declarative macros and expanded inside `r4`, `r4b` and `r5`, which
//! supply their own `Element`, `Extension`, `ExtensionValue` and friends.
//! Shapes that diverge live in the version module itself.

mod any;
mod datatypes;
mod resources;

pub(crate) use any::any_resource;
pub(crate) use datatypes::{common_datatypes, pre_r5_datatypes, r4b_datatypes};
pub(crate) use resources::{common_resources, pre_r5_observation};
