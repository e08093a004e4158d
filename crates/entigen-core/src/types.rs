//! Schema-derived type descriptors

use serde::{Deserialize, Serialize};

use crate::fqn::TypeRef;
use crate::CoreError;

/// Variant of a generated type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Interface-like type generated for containers, lists and the like
    #[default]
    StructuralType,
    /// Value class generated for typedefs, unions and keys
    TransferObject,
    Other,
}

/// A capability (interface) implemented by a generated type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Capability {
    pub fully_qualified_name: String,
}

impl Capability {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
        }
    }
}

impl From<String> for Capability {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Capability {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.fully_qualified_name
    }
}

/// A named, typed member of a generated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }
}

/// A type produced by the schema compiler
///
/// Descriptors are built once upstream and are only read here. The
/// `properties` and `description` fields feed the entity template; they play
/// no part in deciding eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub fully_qualified_name: String,
    #[serde(default)]
    pub implemented_capabilities: Vec<Capability>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, fully_qualified_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fully_qualified_name: fully_qualified_name.into(),
            implemented_capabilities: Vec::new(),
            kind: TypeKind::default(),
            properties: Vec::new(),
            description: None,
        }
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn implementing(mut self, capability: impl Into<Capability>) -> Self {
        self.implemented_capabilities.push(capability.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_transfer_object(&self) -> bool {
        self.kind == TypeKind::TransferObject
    }

    /// Package portion of the fully-qualified name; empty for the default package
    pub fn package(&self) -> &str {
        self.fully_qualified_name
            .rfind('.')
            .map_or("", |idx| &self.fully_qualified_name[..idx])
    }

    /// Reject descriptors that violate the schema compiler's contract
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.fully_qualified_name.is_empty() {
            return Err(CoreError::invalid_argument(format!(
                "type '{}' has an empty fully-qualified name",
                self.name
            )));
        }

        if !is_identifier(&self.name) {
            return Err(CoreError::invalid_argument(format!(
                "type '{}' has a name that is not an identifier: '{}'",
                self.fully_qualified_name, self.name
            )));
        }

        if let Some(pos) = self
            .implemented_capabilities
            .iter()
            .position(|c| c.fully_qualified_name.is_empty())
        {
            return Err(CoreError::invalid_argument(format!(
                "type '{}' declares an unnamed capability at position {}",
                self.fully_qualified_name, pos
            )));
        }

        if let Some(pos) = self.properties.iter().position(|p| p.name.is_empty()) {
            return Err(CoreError::invalid_argument(format!(
                "type '{}' declares an unnamed property at position {}",
                self.fully_qualified_name, pos
            )));
        }

        tracing::trace!("validated descriptor '{}'", self.fully_qualified_name);
        Ok(())
    }
}

/// Letters, digits, `_` and `$`, not starting with a digit; empty is allowed
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(first) if first.is_ascii_digit() => false,
        Some(first) => std::iter::once(first)
            .chain(chars)
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$'),
    }
}
