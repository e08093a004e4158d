//! Entity companion generation for schema-derived types

pub mod config;
pub mod error;
pub mod generator;
pub mod import_table;
pub mod template;

use entigen_core::TypeDescriptor;

pub use config::EntityCodegenConfig;
pub use error::CodegenError;
pub use generator::{is_acceptable, EntityGenerator};
pub use import_table::ImportTable;
pub use template::{EntityTemplate, Template};

/// Interface a host code-generation pipeline drives for each generated type
pub trait CodeGenerator {
    /// Whether `ty` should get a companion unit at all
    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool;

    /// Render the companion source; empty when `ty` is not acceptable
    fn generate(&self, ty: &TypeDescriptor) -> Result<String, CodegenError>;

    /// Name of the compilation unit the rendered source belongs in
    fn unit_name(&self, ty: &TypeDescriptor) -> String;
}
