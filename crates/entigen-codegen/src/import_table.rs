//! Import bookkeeping for a single generated unit
//!
//! Every type a template mentions goes through [`ImportTable::imported_name`],
//! which decides whether the short name can be used or the reference has to
//! be spelled out in full.
//!
//! ## Resolution order
//!
//! 1. Types from the implicit namespace always claim their short name and
//!    rebind the slot.
//! 2. A short name already bound to the same canonical name is reused.
//! 3. A short name bound to a different canonical name forces the canonical
//!    name; the existing binding stays.
//! 4. Otherwise the short name is bound to the reference.
//!
//! ```
//! use entigen_codegen::ImportTable;
//! use entigen_core::TypeRef;
//!
//! let mut imports = ImportTable::new();
//! let map = TypeRef::parse("java.util.Map").unwrap();
//! let other = TypeRef::parse("com.example.Map").unwrap();
//!
//! assert_eq!(imports.imported_name(&map), "Map");
//! assert_eq!(imports.imported_name(&other), "com.example.Map");
//! ```

use std::collections::{BTreeMap, BTreeSet};

use entigen_core::TypeRef;
use tracing::{debug, trace};

/// Short name -> canonical name bindings for one unit
///
/// A table is created per rendered unit and dropped with it; nothing is
/// shared between units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    bindings: BTreeMap<String, String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name to use for `target` inside the unit, binding it if possible
    pub fn imported_name(&mut self, target: &TypeRef) -> String {
        let simple = target.simple_name();
        let canonical = target.canonical_name();

        if target.is_implicit() {
            trace!("binding implicit '{}' -> '{}'", simple, canonical);
            self.bindings.insert(simple.to_string(), canonical.to_string());
            return simple.to_string();
        }

        match self.bindings.get(simple) {
            Some(bound) if bound == canonical => simple.to_string(),
            Some(bound) => {
                debug!(
                    "'{}' already bound to '{}', qualifying '{}'",
                    simple, bound, canonical
                );
                canonical.to_string()
            }
            None => {
                trace!("binding '{}' -> '{}'", simple, canonical);
                self.bindings.insert(simple.to_string(), canonical.to_string());
                simple.to_string()
            }
        }
    }

    /// All bound canonical names in ascending order
    pub fn sorted_imports(&self) -> BTreeSet<String> {
        self.bindings.values().cloned().collect()
    }

    /// Canonical name currently bound to `simple_name`
    pub fn binding(&self, simple_name: &str) -> Option<&str> {
        self.bindings.get(simple_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
