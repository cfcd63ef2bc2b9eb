//! Property-based tests for the button rendering contract using proptest.
//!
//! Tests four key properties over arbitrary configurations:
//! 1. The class list always contains `btn` and `btn-<variant>`
//! 2. The `disabled` class token appears iff the variant is Link and the
//!    button is disabled; every other disabled config uses the native
//!    attribute instead
//! 3. The element is an anchor iff the variant is Link and href is
//!    non-empty, and anchors never carry a native disabled attribute
//! 4. Caller-supplied classes and size tokens appear exactly when given

use proptest::prelude::*;
use skiff_components::{Button, ButtonSize, ButtonVariant, Component};
use skiff_vdom::VNode;

const VARIANTS: &[ButtonVariant] = &[
    ButtonVariant::Primary,
    ButtonVariant::Default,
    ButtonVariant::Danger,
    ButtonVariant::Link,
];

const SIZES: &[ButtonSize] = &[ButtonSize::Large, ButtonSize::Small];

fn arb_button() -> impl Strategy<Value = Button> {
    (
        prop::sample::select(VARIANTS),
        prop::option::of(prop::sample::select(SIZES)),
        any::<bool>(),
        prop::option::of("[a-z][a-z-]{0,11}"),
        prop::option::of("(/[a-z]{1,8}){0,3}"),
        "[a-zA-Z0-9 ]{0,16}",
    )
        .prop_map(|(variant, size, disabled, class_name, href, label)| {
            let mut button = Button::label(label)
                .with_variant(variant)
                .with_disabled(disabled);
            if let Some(size) = size {
                button = button.with_size(size);
            }
            if let Some(class_name) = class_name {
                button = button.with_class(class_name);
            }
            if let Some(href) = href {
                button = button.with_href(href);
            }
            button
        })
}

fn class_tokens(node: &VNode) -> Vec<String> {
    node.attrs
        .get("class")
        .map(|c| c.split(' ').map(str::to_string).collect())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn base_and_variant_classes_always_present(button in arb_button()) {
        let node = button.render();
        let tokens = class_tokens(&node);
        prop_assert!(tokens.contains(&"btn".to_string()));
        let variant_class = format!("btn-{}", button.variant().as_class());
        prop_assert!(tokens.contains(&variant_class));
        if let Some(class_name) = button.class_name() {
            prop_assert!(tokens.contains(&class_name.to_string()));
        }
    }

    #[test]
    fn disabled_class_only_for_link_variant(button in arb_button()) {
        let node = button.render();
        let has_disabled_class = class_tokens(&node).contains(&"disabled".to_string());
        let expected = button.variant() == ButtonVariant::Link && button.is_disabled();
        prop_assert_eq!(has_disabled_class, expected);
    }

    #[test]
    fn element_choice_matches_variant_and_href(button in arb_button()) {
        let node = button.render();
        let wants_anchor = button.variant() == ButtonVariant::Link
            && button.href().is_some_and(|href| !href.is_empty());

        if wants_anchor {
            prop_assert_eq!(&node.tag, "a");
            prop_assert_eq!(node.attrs.get("href").map(String::as_str), button.href());
            prop_assert!(!node.attrs.contains_key("disabled"));
        } else {
            prop_assert_eq!(&node.tag, "button");
            prop_assert_eq!(node.attrs.contains_key("disabled"), button.is_disabled());
        }
    }

    #[test]
    fn size_token_appears_iff_size_set(button in arb_button()) {
        let tokens = class_tokens(&button.render());
        match button.size() {
            Some(size) => {
                let size_class = format!("btn-{}", size.as_class());
                prop_assert!(tokens.contains(&size_class));
            }
            None => {
                prop_assert!(!tokens.contains(&"btn-lg".to_string()));
                prop_assert!(!tokens.contains(&"btn-sm".to_string()));
            }
        }
    }
}
