use serde::Deserialize;

/// Configuration for entity code generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityCodegenConfig {
    /// Emit descriptor descriptions as Javadoc blocks
    pub include_docs: bool,
    /// Emit a getter and setter per property
    pub generate_accessors: bool,
    /// Spaces per indentation level
    pub indent_size: usize,
    /// Comment line placed at the very top of each unit
    pub header: Option<String>,
}

impl Default for EntityCodegenConfig {
    fn default() -> Self {
        Self {
            include_docs: true,
            generate_accessors: true,
            indent_size: 4,
            header: None,
        }
    }
}
