//! Well-known capability markers.
//!
//! A generated type that implements either of these capabilities gets an
//! entity companion. Comparison is by exact fully-qualified name.

/// Capability implemented by types that can carry augmentations.
pub const AUGMENTABLE: &str = "org.opendaylight.yangtools.yang.binding.Augmentable";

/// Capability implemented by the augmentations themselves.
pub const AUGMENTATION: &str = "org.opendaylight.yangtools.yang.binding.Augmentation";

/// All markers, in the order they are checked
pub const ENTITY_MARKERS: [&str; 2] = [AUGMENTABLE, AUGMENTATION];

/// Returns true if `fully_qualified_name` is one of the entity markers
pub fn is_entity_marker(fully_qualified_name: &str) -> bool {
    ENTITY_MARKERS.contains(&fully_qualified_name)
}
