//! Naming rules for generated entity sources.
//!
//! Case conversion here only touches the first character. Property and type
//! names arrive from the schema compiler already cased; these helpers derive
//! accessor and field names from them, they do not repair bad casing.

/// Suffix appended to a type name to form its entity unit name
pub const ENTITY_SUFFIX: &str = "Entity";

/// Name of the compilation unit holding the entity for `type_name`
///
/// # Examples
/// ```
/// use entigen_core::naming::entity_unit_name;
/// assert_eq!(entity_unit_name("Foo"), "FooEntity");
/// assert_eq!(entity_unit_name(""), "Entity");
/// ```
pub fn entity_unit_name(type_name: &str) -> String {
    format!("{}{}", type_name, ENTITY_SUFFIX)
}

/// Uppercase the first character, keep the rest
///
/// # Examples
/// ```
/// use entigen_core::naming::to_pascal_case;
/// assert_eq!(to_pascal_case("mtu"), "Mtu");
/// assert_eq!(to_pascal_case("adminStatus"), "AdminStatus");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lowercase the first character, keep the rest
///
/// # Examples
/// ```
/// use entigen_core::naming::to_camel_case;
/// assert_eq!(to_camel_case("AdminStatus"), "adminStatus");
/// assert_eq!(to_camel_case("mtu"), "mtu");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
