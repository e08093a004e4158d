//! Core type model and naming rules for entigen
//!
//! The schema compiler hands us [`TypeDescriptor`]s; everything in this crate
//! is read-only bookkeeping over them.

pub mod error;
pub mod fqn;
pub mod markers;
pub mod naming;
pub mod types;

pub use error::CoreError;
pub use fqn::TypeRef;
pub use types::{Capability, Property, TypeDescriptor, TypeKind};
