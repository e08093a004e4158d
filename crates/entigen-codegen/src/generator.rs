//! Entity generator driven by the host pipeline

use entigen_core::markers::is_entity_marker;
use entigen_core::naming::entity_unit_name;
use entigen_core::TypeDescriptor;
use tracing::debug;

use crate::{CodeGenerator, CodegenError, EntityTemplate, Template};

/// Whether `ty` gets an entity companion.
///
/// Transfer objects never do. Any other type qualifies as soon as one of its
/// implemented capabilities is an entity marker; capabilities are scanned in
/// declaration order.
pub fn is_acceptable(ty: &TypeDescriptor) -> bool {
    if ty.is_transfer_object() {
        return false;
    }

    ty.implemented_capabilities
        .iter()
        .any(|capability| is_entity_marker(&capability.fully_qualified_name))
}

/// Generates entity companions through a [`Template`]
#[derive(Debug, Clone)]
pub struct EntityGenerator<T = EntityTemplate> {
    template: T,
}

impl EntityGenerator {
    pub fn new() -> Self {
        Self {
            template: EntityTemplate::new(),
        }
    }
}

impl Default for EntityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Template> EntityGenerator<T> {
    pub fn with_template(template: T) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &T {
        &self.template
    }
}

impl<T: Template> CodeGenerator for EntityGenerator<T> {
    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        let acceptable = is_acceptable(ty);
        debug!(
            "'{}' ({:?}) acceptable: {}",
            ty.fully_qualified_name, ty.kind, acceptable
        );
        acceptable
    }

    fn generate(&self, ty: &TypeDescriptor) -> Result<String, CodegenError> {
        if !is_acceptable(ty) {
            debug!("skipping '{}': not an entity candidate", ty.fully_qualified_name);
            return Ok(String::new());
        }

        ty.validate()?;

        debug!(
            "rendering '{}' with template '{}'",
            ty.fully_qualified_name,
            self.template.name()
        );
        self.template.render(ty)
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        entity_unit_name(&ty.name)
    }
}
