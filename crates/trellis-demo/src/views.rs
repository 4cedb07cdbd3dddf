use trellis::{
    css, Component, EdgeInsets, Element, Font, Frame, ModifierParams, ModifierRegistry, Result,
};

/// Blue large-title greeting
pub struct ProminentTitle;

impl Component for ProminentTitle {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        registry.compose(&Element::text("Hello, world!"), &["prominent_title"])
    }
}

/// Color block with a caption watermark in the bottom-trailing corner
pub struct Watermarked;

impl Component for Watermarked {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        registry.apply_modifier(
            &Element::color_block(css::BLUE).frame(Frame::new(300.0, 200.0)),
            "watermark",
            &ModifierParams::new().with("text", "Hacking With Swift"),
        )
    }
}

pub struct CapsuleLabel;

impl Component for CapsuleLabel {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        registry.compose(&Element::text("Capsule"), &["capsule_label"])
    }
}

pub struct TitleCard;

impl Component for TitleCard {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        registry.compose(&Element::text("Hello World"), &["title_card"])
    }
}

/// Alternating padding and background.
///
/// Styles fold per property: the paddings sum to 60 and the node keeps a
/// single background, green. Order between padding and background is not kept.
pub struct ModifierOrder;

impl Component for ModifierOrder {
    fn element(&self, _registry: &ModifierRegistry) -> Result<Element> {
        Ok(Element::text("Hello, world!")
            .padding(EdgeInsets::all(20.0))
            .background(css::RED)
            .padding(EdgeInsets::all(20.0))
            .background(css::BLUE)
            .padding(EdgeInsets::all(20.0))
            .background(css::GREEN))
    }
}

/// Font set on the stack flows to every child; one child overrides it
pub struct HouseList;

impl Component for HouseList {
    fn element(&self, _registry: &ModifierRegistry) -> Result<Element> {
        Ok(Element::vstack(vec![
            Element::text("Gryffindor").font(Font::LargeTitle),
            Element::text("Hufflepuff"),
            Element::text("Ravenclaw"),
            Element::text("Slytherin"),
        ])
        .font(Font::Title))
    }
}

/// Blur on the stack adds to the blur on a child
pub struct BlurredHouses;

impl Component for BlurredHouses {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        let stack = Element::vstack(vec![
            registry.compose_with(
                &Element::text("Gryffindor"),
                &[("blur", ModifierParams::new().with("radius", 2.0))],
            )?,
            Element::text("Hufflepuff"),
        ]);
        registry.compose_with(&stack, &[("blur", ModifierParams::new().with("radius", 5.0))])
    }
}

/// Styles loaded from the style sheet
pub struct SpellCards;

impl Component for SpellCards {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        Ok(Element::hstack(vec![
            registry.compose(&Element::text("Lumos"), &["spell_card"])?,
            registry.compose(&Element::text("Nox"), &["spell_card", "faded"])?,
        ])
        .with_spacing(12.0))
    }
}

/// Text whose color follows a flag flipped by the host
#[derive(Default)]
pub struct ColorToggle {
    pub use_red_text: bool,
}

impl ColorToggle {
    pub fn toggle(&mut self) {
        self.use_red_text = !self.use_red_text;
    }
}

impl Component for ColorToggle {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
        registry.apply_modifier(
            &Element::text("Hello World"),
            "text_color_toggle",
            &ModifierParams::new().with("use_red", self.use_red_text),
        )
    }
}

fn boxed(view: impl Component + 'static) -> Box<dyn Component> {
    Box::new(view)
}

pub fn all() -> Vec<(&'static str, Box<dyn Component>)> {
    vec![
        ("prominent title", boxed(ProminentTitle)),
        ("watermark", boxed(Watermarked)),
        ("capsule label", boxed(CapsuleLabel)),
        ("title card", boxed(TitleCard)),
        ("modifier order", boxed(ModifierOrder)),
        ("house list", boxed(HouseList)),
        ("blurred houses", boxed(BlurredHouses)),
        ("spell cards", boxed(SpellCards)),
        ("color toggle", boxed(ColorToggle::default())),
    ]
}
