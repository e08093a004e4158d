//! Templates that turn a descriptor into entity source
//!
//! The [`Template`] trait is the seam to whatever rendering engine the host
//! uses. [`EntityTemplate`] is the bundled plain-Java rendition: a class with
//! one private field per property and optional accessors.

use std::collections::HashSet;
use std::fmt::Write;

use entigen_core::fqn::IMPLICIT_NAMESPACE;
use entigen_core::naming::{entity_unit_name, to_camel_case, to_pascal_case};
use entigen_core::{TypeDescriptor, TypeRef};

use crate::{CodegenError, EntityCodegenConfig, ImportTable};

/// Renders the companion source for an eligible descriptor
pub trait Template {
    /// Name used in error reports
    fn name(&self) -> &str;

    fn render(&self, ty: &TypeDescriptor) -> Result<String, CodegenError>;
}

/// A property after name resolution
struct ResolvedField<'a> {
    field: String,
    accessor: String,
    type_name: String,
    description: Option<&'a str>,
}

/// Plain Java entity template
#[derive(Debug, Clone, Default)]
pub struct EntityTemplate {
    config: EntityCodegenConfig,
}

impl EntityTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EntityCodegenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EntityCodegenConfig {
        &self.config
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.indent_size)
    }

    fn write_doc(
        &self,
        doc: &str,
        level: usize,
        output: &mut String,
    ) -> Result<(), CodegenError> {
        let indent = self.indent(level);
        writeln!(output, "{}/**", indent)?;
        for line in doc.lines() {
            if line.is_empty() {
                writeln!(output, "{} *", indent)?;
            } else {
                writeln!(output, "{} * {}", indent, escape_doc(line))?;
            }
        }
        writeln!(output, "{} */", indent)?;
        Ok(())
    }

    fn resolve_fields<'a>(
        &self,
        ty: &'a TypeDescriptor,
        imports: &mut ImportTable,
    ) -> Result<Vec<ResolvedField<'a>>, CodegenError> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(ty.properties.len());

        // Implicit types rebind their short name, so they go first
        for property in ty.properties.iter().filter(|p| p.ty.is_implicit()) {
            imports.imported_name(&property.ty);
        }

        for property in &ty.properties {
            let field = to_camel_case(&property.name);
            if !seen.insert(field.clone()) {
                return Err(CodegenError::template(
                    self.name(),
                    format!(
                        "property '{}' of '{}' maps to field '{}' more than once",
                        property.name, ty.fully_qualified_name, field
                    ),
                ));
            }

            fields.push(ResolvedField {
                accessor: to_pascal_case(&property.name),
                type_name: imports.imported_name(&property.ty),
                description: property.description.as_deref(),
                field,
            });
        }

        Ok(fields)
    }

    fn write_body(
        &self,
        unit: &str,
        fields: &[ResolvedField<'_>],
        output: &mut String,
    ) -> Result<(), CodegenError> {
        let i1 = self.indent(1);
        let i2 = self.indent(2);

        writeln!(output, "public class {} {{", unit)?;

        if !fields.is_empty() {
            writeln!(output)?;
        }
        for f in fields {
            writeln!(output, "{}private {} {};", i1, f.type_name, f.field)?;
        }

        if self.config.generate_accessors {
            for f in fields {
                writeln!(output)?;
                if self.config.include_docs {
                    if let Some(doc) = f.description {
                        self.write_doc(doc, 1, output)?;
                    }
                }
                writeln!(output, "{}public {} get{}() {{", i1, f.type_name, f.accessor)?;
                writeln!(output, "{}return {};", i2, f.field)?;
                writeln!(output, "{}}}", i1)?;
                writeln!(output)?;
                writeln!(
                    output,
                    "{}public void set{}({} {}) {{",
                    i1, f.accessor, f.type_name, f.field
                )?;
                writeln!(output, "{}this.{} = {};", i2, f.field, f.field)?;
                writeln!(output, "{}}}", i1)?;
            }
        }

        writeln!(output, "}}")?;
        Ok(())
    }
}

/// Keep description text from terminating the comment block
fn escape_doc(line: &str) -> String {
    line.replace("*/", "*&#47;")
}

/// Package part of a canonical name
fn package_of(canonical: &str) -> &str {
    canonical.rsplit_once('.').map_or("", |(package, _)| package)
}

impl Template for EntityTemplate {
    fn name(&self) -> &str {
        "entity"
    }

    fn render(&self, ty: &TypeDescriptor) -> Result<String, CodegenError> {
        let unit = entity_unit_name(&ty.name);
        let package = ty.package();

        // The unit's own name is taken before any property is resolved
        let mut imports = ImportTable::new();
        let own = if package.is_empty() {
            unit.clone()
        } else {
            format!("{}.{}", package, unit)
        };
        imports.imported_name(&TypeRef::parse(&own)?);

        let fields = self.resolve_fields(ty, &mut imports)?;

        let mut body = String::new();
        self.write_body(&unit, &fields, &mut body)?;

        let mut output = String::new();

        if let Some(header) = &self.config.header {
            writeln!(output, "// {}", header)?;
            writeln!(output)?;
        }

        if !package.is_empty() {
            writeln!(output, "package {};", package)?;
            writeln!(output)?;
        }

        let import_lines: Vec<String> = imports
            .sorted_imports()
            .into_iter()
            .filter(|canonical| {
                let from = package_of(canonical);
                !from.is_empty() && from != IMPLICIT_NAMESPACE && from != package
            })
            .collect();

        if !import_lines.is_empty() {
            for canonical in &import_lines {
                writeln!(output, "import {};", canonical)?;
            }
            writeln!(output)?;
        }

        if self.config.include_docs {
            if let Some(doc) = &ty.description {
                self.write_doc(doc, 0, &mut output)?;
            }
        }

        output.push_str(&body);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigen_core::{CoreError, Property};

    fn prop(name: &str, ty: &str) -> Result<Property, CoreError> {
        Ok(Property::new(name, TypeRef::parse(ty)?))
    }

    #[test]
    fn test_empty_type() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Top", "org.example.Top");
        let out = EntityTemplate::new().render(&ty)?;
        assert_eq!(out, "package org.example;\n\npublic class TopEntity {\n}\n");
        Ok(())
    }

    #[test]
    fn test_default_package_has_no_package_line() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Top", "Top");
        let out = EntityTemplate::new().render(&ty)?;
        assert_eq!(out, "public class TopEntity {\n}\n");
        Ok(())
    }

    #[test]
    fn test_implicit_and_same_package_not_imported() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Node", "org.example.Node")
            .with_property(prop("name", "java.lang.String")?)
            .with_property(prop("parent", "org.example.Node")?)
            .with_property(prop("handler", "java.lang.reflect.Method")?);
        let out = EntityTemplate::new().render(&ty)?;
        assert!(out.contains("import java.lang.reflect.Method;"));
        assert!(!out.contains("import java.lang.String;"));
        assert!(!out.contains("import org.example.Node;"));
        assert!(out.contains("private Node parent;"));
        Ok(())
    }

    #[test]
    fn test_collision_with_unit_name_is_qualified() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Foo", "org.example.Foo")
            .with_property(prop("other", "org.other.FooEntity")?);
        let out = EntityTemplate::new().render(&ty)?;
        assert!(out.contains("private org.other.FooEntity other;"));
        assert!(!out.contains("import org.other.FooEntity;"));
        Ok(())
    }

    #[test]
    fn test_duplicate_field_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Foo", "org.example.Foo")
            .with_property(prop("Mtu", "java.lang.Integer")?)
            .with_property(prop("mtu", "java.lang.Long")?);
        let err = EntityTemplate::new().render(&ty).unwrap_err();
        assert!(matches!(err, CodegenError::Template { .. }));
        Ok(())
    }

    #[test]
    fn test_implicit_property_does_not_retype_earlier_field() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Foo", "org.example.Foo")
            .with_property(prop("label", "com.example.String")?)
            .with_property(prop("name", "java.lang.String")?);
        let out = EntityTemplate::new().render(&ty)?;
        assert!(out.contains("private com.example.String label;"));
        assert!(out.contains("public void setLabel(com.example.String label) {"));
        assert!(out.contains("private String name;"));
        assert!(!out.contains("import com.example.String;"));
        Ok(())
    }

    #[test]
    fn test_comment_terminator_escaped() -> Result<(), Box<dyn std::error::Error>> {
        let ty = TypeDescriptor::new("Foo", "org.example.Foo")
            .with_description("ends early */ class Evil {}");
        let out = EntityTemplate::new().render(&ty)?;
        assert!(out.contains(" * ends early *&#47; class Evil {}\n"));
        assert_eq!(out.matches("*/").count(), 1);
        Ok(())
    }

    #[test]
    fn test_header_and_indent() -> Result<(), Box<dyn std::error::Error>> {
        let config = EntityCodegenConfig {
            indent_size: 2,
            generate_accessors: false,
            header: Some("generated by entigen".to_string()),
            ..Default::default()
        };
        let ty = TypeDescriptor::new("Top", "org.example.Top")
            .with_property(prop("count", "java.lang.Long")?);
        let out = EntityTemplate::new().with_config(config).render(&ty)?;
        assert_eq!(
            out,
            "// generated by entigen\n\npackage org.example;\n\npublic class TopEntity {\n\n  private Long count;\n}\n"
        );
        Ok(())
    }
}
