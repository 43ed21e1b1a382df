//! Integration tests for adapting resolved styles to a new environment.

use restyle::adaptive::AdaptiveStyle;
use restyle::transform::{embed, extract};
use restyle::{
    adapt, AttributeMap, Composer, ContentSizeCategory, ContentTransformation, Environment, Font,
    Fragment, StyleSpec, Tab, TabStop, TextTransform, Tracking, Transformation,
};

fn env(category: ContentSizeCategory) -> Environment {
    Environment::new(category)
}

fn point_size(map: &AttributeMap) -> f64 {
    map.font().map(Font::point_size).unwrap_or_default()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Size tables
// =============================================================================

#[test]
fn test_control_font_across_standard_categories() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .adaptation(AdaptiveStyle::Control)
        .attributes();

    let sizes: Vec<f64> = ContentSizeCategory::STANDARD
        .iter()
        .map(|c| point_size(&adapt(&attributes, &env(*c))))
        .collect();
    assert_eq!(sizes, vec![25.0, 26.0, 27.0, 28.0, 30.0, 32.0, 34.0]);
}

#[test]
fn test_control_font_clamps_beyond_standard_categories() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .adaptation(AdaptiveStyle::Control)
        .attributes();

    for category in ContentSizeCategory::ACCESSIBILITY {
        assert_eq!(point_size(&adapt(&attributes, &env(category))), 34.0);
    }
}

#[test]
fn test_body_font_grows_through_accessibility_categories() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 17.0))
        .adaptation(AdaptiveStyle::Body)
        .attributes();

    let sizes: Vec<f64> = ContentSizeCategory::ALL
        .iter()
        .map(|c| point_size(&adapt(&attributes, &env(*c))))
        .collect();
    assert_eq!(
        sizes,
        vec![14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0]
    );
}

#[test]
fn test_font_without_adaptation_is_untouched() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .attributes();
    let adapted = adapt(&attributes, &env(ContentSizeCategory::ExtraSmall));
    assert_eq!(adapted, attributes);
}

// =============================================================================
// Tracking
// =============================================================================

#[test]
fn test_adobe_tracking_follows_adapted_size() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 30.0))
        .adaptation(AdaptiveStyle::Control)
        .tracking(Tracking::Adobe(300.0))
        .attributes();

    let expectations = [
        (ContentSizeCategory::ExtraSmall, 8.1),
        (ContentSizeCategory::Large, 9.0),
        (ContentSizeCategory::ExtraExtraExtraLarge, 10.8),
    ];
    for (category, kern) in expectations {
        let adapted = adapt(&attributes, &env(category));
        assert!(approx(adapted.kern().unwrap_or_default(), kern));
    }
}

#[test]
fn test_point_tracking_is_size_invariant() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 30.0))
        .adaptation(AdaptiveStyle::Body)
        .tracking(Tracking::Point(1.5))
        .attributes();
    let adapted = adapt(&attributes, &env(ContentSizeCategory::AccessibilityLarge));
    assert_eq!(adapted.kern(), Some(1.5));
}

// =============================================================================
// Replay
// =============================================================================

#[test]
fn test_adaptation_is_idempotent() {
    let attributes = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .adaptation(AdaptiveStyle::Body)
        .tracking(Tracking::Adobe(200.0))
        .attributes();
    let xxl = env(ContentSizeCategory::ExtraExtraLarge);

    let first = adapt(&attributes, &xxl);
    let second = adapt(&attributes, &xxl);
    assert_eq!(first, second);
    assert_eq!(adapt(&first, &xxl), first);
}

#[test]
fn test_adapted_text_round_trips_to_baseline() {
    let text = StyleSpec::new()
        .font(Font::new("Avenir-Book", 20.0))
        .adaptation(AdaptiveStyle::Control)
        .styled_text("Adaptive");

    let small = text.adapted(&env(ContentSizeCategory::ExtraSmall));
    let back = small.adapted(&env(ContentSizeCategory::Large));
    assert_eq!(back, text);
}

#[test]
fn test_merging_embedded_transformations() {
    let inner = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .adaptation(AdaptiveStyle::Control)
        .tracking(Tracking::Adobe(300.0))
        .styled_text("inner");
    let outer = StyleSpec::new()
        .font(Font::new("Avenir-Book", 20.0))
        .adaptation(AdaptiveStyle::Body);

    let text = Composer::new(outer).compose(vec![Fragment::from(inner)]);
    let attributes = text.attributes_at(0).unwrap();
    // The base style's chain is supplied first, the sequence keeps its own.
    assert_eq!(extract::<Transformation>(attributes).len(), 3);
}

#[test]
fn test_sequence_under_adaptive_base_keeps_its_own_size() {
    let inner = StyleSpec::new()
        .font(Font::new("Avenir-Heavy", 28.0))
        .styled_text("inner");
    let base = StyleSpec::new()
        .font(Font::new("Avenir-Book", 12.0))
        .adaptation(AdaptiveStyle::Control);
    let text = Composer::new(base).compose(vec![Fragment::from(inner)]);
    let attributes = text.attributes_at(0).unwrap();
    assert_eq!(point_size(attributes), 28.0);

    let large = adapt(attributes, &env(ContentSizeCategory::Large));
    assert_eq!(point_size(&large), 28.0);
    assert_eq!(large.font().map(Font::family), Some("Avenir-Heavy"));

    let small = adapt(attributes, &env(ContentSizeCategory::ExtraSmall));
    assert_eq!(point_size(&small), 25.0);
}

#[test]
fn test_complex_adaptive_composition() {
    let style = StyleSpec::new()
        .font(Font::new("Avenir-Book", 28.0))
        .adaptation(AdaptiveStyle::Control)
        .tracking(Tracking::Adobe(300.0));
    let text = Composer::new(StyleSpec::new()).compose(vec![
        Fragment::styled("first", style.clone()),
        Fragment::from(" "),
        Fragment::styled("second", style.merge(&StyleSpec::new().line_spacing(2.0))),
    ]);

    let first = text.attributes_at(0).unwrap();
    let second = text.attributes_at(6).unwrap();
    assert_eq!(extract::<Transformation>(first).len(), 2);
    assert_eq!(extract::<Transformation>(second).len(), 2);

    let adapted = text.adapted(&env(ContentSizeCategory::ExtraSmall));
    assert_eq!(point_size(adapted.attributes_at(0).unwrap()), 25.0);
    assert_eq!(point_size(adapted.attributes_at(6).unwrap()), 25.0);
    assert_eq!(adapted.text(), text.text());
}

// =============================================================================
// Content transformations
// =============================================================================

#[test]
fn test_tab_stop_relocates_after_font_grows() {
    let base = StyleSpec::new()
        .font(Font::new("Avenir-Book", 10.0))
        .adaptation(AdaptiveStyle::Control);
    let text = Composer::new(base).compose(vec![
        Fragment::from("Hello"),
        Fragment::from(Tab::Spacer(10.0)),
        Fragment::from("x"),
    ]);
    let tab_stops = |text: &restyle::StyledText| {
        text.attributes_at(5)
            .and_then(|a| a.paragraph())
            .map(|p| p.tab_stops.clone())
            .unwrap_or_default()
    };
    assert_eq!(tab_stops(&text), vec![TabStop::new(35.0)]);

    let large = text.adapted(&env(ContentSizeCategory::ExtraExtraExtraLarge));
    assert_eq!(tab_stops(&large), vec![TabStop::new(50.0)]);
}

#[test]
fn test_rewrite_transformation_applies_on_adapt() {
    let attributes = embed(
        StyleSpec::new()
            .font(Font::new("Avenir-Book", 12.0))
            .attributes(),
        vec![ContentTransformation::Rewrite(TextTransform::Capitalized)],
    );
    let mut text = restyle::StyledText::new();
    text.push("hello world", attributes);
    text.push(" tail", AttributeMap::new());

    let adapted = text.adapted(&Environment::default());
    assert_eq!(adapted.text(), "Hello World tail");
    assert_eq!(adapted.runs().len(), 2);
}
