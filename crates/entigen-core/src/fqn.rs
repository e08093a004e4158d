//! Fully-qualified type references
//!
//! A [`TypeRef`] pairs the short name a generated source file would like to
//! use for a type with the canonical name that uniquely identifies it.
//!
//! ## Formats
//!
//! - Top-level: `java.util.Map` -> simple `Map`
//! - Nested: `java.util.Map.Entry` -> simple `Entry`
//! - Default package: `Foo` -> simple `Foo`
//!
//! ```
//! use entigen_core::TypeRef;
//!
//! let map = TypeRef::parse("java.util.Map").unwrap();
//! assert_eq!(map.simple_name(), "Map");
//! assert_eq!(map.package(), "java.util");
//! assert!(!map.is_implicit());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Namespace whose types are always visible without an import statement.
pub const IMPLICIT_NAMESPACE: &str = "java.lang";

/// A reference to a type by canonical name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    canonical_name: String,
    /// Byte offset of the simple name inside `canonical_name`
    simple_start: usize,
}

impl TypeRef {
    /// Parse a canonical name such as `java.util.Map`
    pub fn parse(canonical: &str) -> Result<Self, CoreError> {
        if canonical.is_empty() {
            return Err(CoreError::InvalidTypeRef {
                reference: canonical.to_string(),
                reason: "empty canonical name".to_string(),
            });
        }

        if canonical.split('.').any(str::is_empty) {
            return Err(CoreError::InvalidTypeRef {
                reference: canonical.to_string(),
                reason: "empty name segment".to_string(),
            });
        }

        let simple_start = canonical.rfind('.').map_or(0, |idx| idx + 1);

        Ok(Self {
            canonical_name: canonical.to_string(),
            simple_start,
        })
    }

    /// The unqualified name, e.g. `Map`
    pub fn simple_name(&self) -> &str {
        &self.canonical_name[self.simple_start..]
    }

    /// The fully-qualified name, e.g. `java.util.Map`
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Everything before the simple name; empty for the default package
    pub fn package(&self) -> &str {
        if self.simple_start == 0 {
            ""
        } else {
            &self.canonical_name[..self.simple_start - 1]
        }
    }

    /// Whether the type lives in the implicitly imported namespace.
    ///
    /// This is a plain prefix test on the canonical name, so nested packages
    /// such as `java.lang.reflect` count as implicit as well.
    pub fn is_implicit(&self) -> bool {
        self.canonical_name.starts_with(IMPLICIT_NAMESPACE)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name)
    }
}

impl FromStr for TypeRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.canonical_name
    }
}
