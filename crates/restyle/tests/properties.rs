//! Property tests for merging and size adaptation.

use proptest::prelude::*;

use restyle::adaptive::AdaptiveStyle;
use restyle::{
    adapt, Alignment, ContentSizeCategory, Environment, Font, SizeCurve, StyleSpec, StyledText,
    Tracking,
};

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Center),
        Just(Alignment::Right),
        Just(Alignment::Justified),
        Just(Alignment::Natural),
    ]
}

fn adaptation() -> impl Strategy<Value = AdaptiveStyle> {
    prop_oneof![Just(AdaptiveStyle::Control), Just(AdaptiveStyle::Body)]
}

prop_compose! {
    fn style_spec()(
        size in proptest::option::of(6.0f64..72.0),
        link in proptest::option::of("[a-z]{1,8}"),
        line_spacing in proptest::option::of(0.0f64..20.0),
        alignment in proptest::option::of(alignment()),
        tracking in proptest::option::of(-200.0f64..400.0),
        adaptations in proptest::collection::vec(adaptation(), 0..3),
    ) -> StyleSpec {
        let mut spec = StyleSpec::new();
        spec.font = size.map(|size| Font::new("Avenir-Book", size));
        spec.link = link;
        spec.line_spacing = line_spacing;
        spec.alignment = alignment;
        spec.tracking = tracking.map(Tracking::Adobe);
        spec.adaptations = adaptations;
        spec
    }
}

fn category() -> impl Strategy<Value = ContentSizeCategory> {
    proptest::sample::select(ContentSizeCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_empty_style_is_merge_identity(spec in style_spec()) {
        prop_assert_eq!(spec.merge(&StyleSpec::new()), spec.clone());
        prop_assert_eq!(StyleSpec::new().merge(&spec), spec);
    }

    #[test]
    fn test_set_fields_of_override_win(base in style_spec(), over in style_spec()) {
        let merged = base.merge(&over);
        prop_assert_eq!(&merged.font, &over.font.clone().or(base.font.clone()));
        prop_assert_eq!(&merged.link, &over.link.clone().or(base.link.clone()));
        prop_assert_eq!(
            merged.line_spacing,
            over.line_spacing.or(base.line_spacing)
        );
        prop_assert_eq!(merged.alignment, over.alignment.or(base.alignment));
        prop_assert_eq!(
            merged.adaptations.len(),
            base.adaptations.len() + over.adaptations.len()
        );
    }

    #[test]
    fn test_merge_is_associative(a in style_spec(), b in style_spec(), c in style_spec()) {
        prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    #[test]
    fn test_size_curves_are_monotonic(size in 1.0f64..200.0) {
        for curve in [SizeCurve::Control, SizeCurve::Body] {
            let sizes: Vec<f64> = ContentSizeCategory::ALL
                .iter()
                .map(|c| size + curve.delta(*c))
                .collect();
            prop_assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_adapt_is_idempotent(spec in style_spec(), category in category()) {
        let environment = Environment::new(category);
        let attributes = spec.attributes();
        let once = adapt(&attributes, &environment);
        prop_assert_eq!(adapt(&once, &environment), once);
    }

    #[test]
    fn test_adapted_text_keeps_content(spec in style_spec(), category in category()) {
        let text: StyledText = spec.styled_text("Sample text");
        let adapted = text.adapted(&Environment::new(category));
        prop_assert_eq!(adapted.text(), text.text());
        prop_assert_eq!(adapted.runs().len(), text.runs().len());
    }

    #[test]
    fn test_adapted_size_never_below_minimum(size in 0.5f64..4.0, category in category()) {
        let attributes = StyleSpec::new()
            .font(Font::new("Avenir-Book", size))
            .adaptation(AdaptiveStyle::Control)
            .attributes();
        let adapted = adapt(&attributes, &Environment::new(category));
        let point_size = adapted.font().map(Font::point_size).unwrap_or_default();
        prop_assert!(point_size >= restyle::adaptive::MINIMUM_POINT_SIZE);
    }
}
