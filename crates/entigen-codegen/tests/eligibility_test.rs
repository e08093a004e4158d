use entigen_codegen::is_acceptable;
use entigen_core::markers::{AUGMENTABLE, AUGMENTATION};
use entigen_core::{TypeDescriptor, TypeKind};
use proptest::prelude::*;

fn capability() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(AUGMENTABLE.to_string()),
        Just(AUGMENTATION.to_string()),
        Just("org.opendaylight.yangtools.yang.binding.DataObject".to_string()),
        Just("org.opendaylight.yangtools.yang.binding.ChildOf".to_string()),
        "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}\\.[A-Z][a-zA-Z]{0,8}",
    ]
}

fn any_kind() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        Just(TypeKind::StructuralType),
        Just(TypeKind::TransferObject),
        Just(TypeKind::Other),
    ]
}

fn descriptor(kind: TypeKind, capabilities: &[String]) -> TypeDescriptor {
    capabilities.iter().fold(
        TypeDescriptor::new("Node", "org.example.Node").with_kind(kind),
        |ty, c| ty.implementing(c.as_str()),
    )
}

#[test]
fn test_empty_capabilities() {
    assert!(!is_acceptable(&descriptor(TypeKind::StructuralType, &[])));
    assert!(!is_acceptable(&descriptor(TypeKind::Other, &[])));
}

proptest! {
    #[test]
    fn prop_transfer_objects_rejected(caps in prop::collection::vec(capability(), 0..6)) {
        prop_assert!(!is_acceptable(&descriptor(TypeKind::TransferObject, &caps)));
    }

    #[test]
    fn prop_acceptable_iff_marker(kind in any_kind(), caps in prop::collection::vec(capability(), 0..6)) {
        let has_marker = caps.iter().any(|c| c == AUGMENTABLE || c == AUGMENTATION);
        let expected = kind != TypeKind::TransferObject && has_marker;
        prop_assert_eq!(is_acceptable(&descriptor(kind, &caps)), expected);
    }

    #[test]
    fn prop_order_does_not_matter(caps in prop::collection::vec(capability(), 0..6)) {
        let mut reversed = caps.clone();
        reversed.reverse();
        prop_assert_eq!(
            is_acceptable(&descriptor(TypeKind::StructuralType, &caps)),
            is_acceptable(&descriptor(TypeKind::StructuralType, &reversed))
        );
    }
}
