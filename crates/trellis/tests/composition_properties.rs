use proptest::prelude::*;
use trellis::{
    css, render, Color, Decoration, EdgeInsets, Element, Font, ModifierRegistry, Property,
    ResolvedStyle,
};

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(css::RED),
        Just(css::BLUE),
        Just(css::GREEN),
        Just(css::WHITE),
        Just(css::BLACK),
    ]
}

fn property() -> impl Strategy<Value = Property> {
    prop_oneof![
        (1.0f32..100.0).prop_map(Property::FontSize),
        color().prop_map(Property::ForegroundColor),
        color().prop_map(Property::Background),
        (0.0f32..50.0).prop_map(|p| Property::Padding(EdgeInsets::all(p))),
        (0.0f32..20.0).prop_map(Property::Blur),
        Just(Property::Font(Font::Title)),
    ]
}

fn decorations() -> impl Strategy<Value = Vec<Decoration>> {
    prop::collection::vec(property().prop_map(Decoration::new), 0..8)
}

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        "[a-z]{0,12}".prop_map(Element::text),
        color().prop_map(Element::color_block),
        Just(Element::empty()),
    ]
}

fn registry() -> ModifierRegistry {
    let mut registry = ModifierRegistry::new();
    registry
        .define_modifier("large", |e, _| Ok(e.font_size(40.0)))
        .unwrap();
    registry
        .define_modifier("small", |e, _| Ok(e.font_size(10.0)))
        .unwrap();
    registry
        .define_modifier("pad", |e, _| Ok(e.padding(EdgeInsets::all(5.0))))
        .unwrap();
    registry
        .define_modifier("soften", |e, _| Ok(e.blur(2.0)))
        .unwrap();
    registry
}

proptest! {
    #[test]
    fn compose_is_deterministic(base in element(), extra in decorations()) {
        let registry = registry();
        let base = base.with_all(extra);
        let names = ["pad", "large", "soften", "small"];
        let first = registry.compose(&base, &names).unwrap();
        let second = registry.compose(&base, &names).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(render(&first), render(&second));
    }

    #[test]
    fn later_exclusive_wins(base in element()) {
        let registry = registry();
        let large_then_small = render(&registry.compose(&base, &["large", "small"]).unwrap());
        let small_then_large = render(&registry.compose(&base, &["small", "large"]).unwrap());
        prop_assert_eq!(large_then_small.style.font_size, Some(10.0));
        prop_assert_eq!(small_then_large.style.font_size, Some(40.0));
        prop_assert_ne!(large_then_small, small_then_large);
    }

    #[test]
    fn additive_properties_accumulate(base in element(), times in 1usize..6) {
        let registry = registry();
        let names: Vec<&str> = std::iter::repeat(["pad", "soften"]).take(times).flatten().collect();
        let tree = render(&registry.compose(&base, &names).unwrap());
        prop_assert_eq!(tree.style.padding, EdgeInsets::all(5.0 * times as f32));
        prop_assert_eq!(tree.style.blur, 2.0 * times as f32);
    }

    #[test]
    fn apply_modifier_leaves_input_unchanged(base in element(), extra in decorations()) {
        let registry = registry();
        let base = base.with_all(extra);
        let snapshot = base.clone();
        for name in ["large", "pad", "soften"] {
            let out = registry.apply_modifier(&base, name, &Default::default()).unwrap();
            prop_assert_eq!(out.decorations().len(), base.decorations().len() + 1);
        }
        prop_assert_eq!(base, snapshot);
    }

    #[test]
    fn fold_matches_last_exclusive_value(props in prop::collection::vec(property(), 1..10)) {
        let decorations: Vec<Decoration> = props.iter().cloned().map(Decoration::new).collect();
        let style = ResolvedStyle::from_decorations(&decorations);
        let last_fg = props.iter().rev().find_map(|p| match p {
            Property::ForegroundColor(c) => Some(*c),
            _ => None,
        });
        prop_assert_eq!(style.foreground, last_fg);
    }
}
