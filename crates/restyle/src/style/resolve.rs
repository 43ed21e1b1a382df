//! Turning a [`StyleSpec`] into attribute maps and styled text.

use log::warn;

use super::StyleSpec;
use crate::adaptive::{adapt, AdaptiveStyleTransformation};
use crate::attributes::{keys, AttributeMap, AttributeValue};
use crate::features::FeatureCompositor;
use crate::platform::{Environment, Font};
use crate::text::StyledText;
use crate::tracking::Tracking;
use crate::transform::{embed, extract, Transformation, TRANSFORMATIONS_KEY};

impl StyleSpec {
    /// Resolves the style with no caller-supplied attributes.
    pub fn attributes(&self) -> AttributeMap {
        self.resolve(&AttributeMap::new())
    }

    /// Resolves the style into an attribute map.
    ///
    /// `extras` act as defaults: the style's extra attributes are laid over
    /// them, then every set field is written. Unset fields add no key. The
    /// paragraph key is only written when the resulting metrics differ from
    /// the system default. Adaptations are embedded in order, followed by
    /// the tracking transformation.
    pub fn resolve(&self, extras: &AttributeMap) -> AttributeMap {
        let mut map = extras.clone();
        map.overlay(&self.extra_attributes);

        self.insert_scalars(&mut map);
        self.insert_paragraph(&mut map);

        let compositor = self.feature_compositor();
        if !compositor.is_empty() {
            if let Some(featured) = map.font().map(|font| compositor.apply(font)) {
                map.insert(keys::FONT, featured);
            }
        }

        let font = map.font().cloned();
        let mut transformations: Vec<Transformation> = self
            .adaptations
            .iter()
            .map(|style| AdaptiveStyleTransformation::recorded(style.clone(), font.as_ref()).into())
            .collect();

        if let Some(tracking) = self.tracking {
            map.insert(keys::KERN, kerning(tracking, font.as_ref()));
            transformations.push(AdaptiveStyleTransformation::Tracking(tracking).into());
        }

        embed(map, transformations)
    }

    /// Resolves the style and adapts the result to `environment`.
    pub fn adapted_attributes(&self, environment: &Environment) -> AttributeMap {
        adapt(&self.attributes(), environment)
    }

    /// The feature providers of this style, in application order: explicit
    /// providers first, then the individual feature fields.
    pub fn feature_compositor(&self) -> FeatureCompositor {
        let mut compositor = FeatureCompositor::new();
        for provider in &self.font_features {
            compositor.push(provider);
        }
        if let Some(number_case) = &self.number_case {
            compositor.push(number_case);
        }
        if let Some(number_spacing) = &self.number_spacing {
            compositor.push(number_spacing);
        }
        if let Some(fractions) = &self.fractions {
            compositor.push(fractions);
        }
        if let Some(position) = &self.vertical_position {
            compositor.push(position);
        }
        for small_caps in &self.small_caps {
            compositor.push(small_caps);
        }
        compositor.push(&self.stylistic_alternates);
        compositor.push(&self.contextual_alternates);
        compositor
    }

    /// Uses this style's attributes as defaults for `existing`.
    ///
    /// Keys present in `existing` win, with two exceptions. Paragraph metrics
    /// merge field by field, an existing field still at its default value
    /// taking this style's value. Transformation lists concatenate, this
    /// style's first. When `existing` has its own font, this style's
    /// adaptive styles are re-recorded against that font.
    pub fn supply_defaults(&self, existing: &AttributeMap) -> AttributeMap {
        let defaults = self.attributes();
        let mut merged = defaults.clone();
        merged.remove(TRANSFORMATIONS_KEY);

        for (key, value) in existing.iter() {
            if key == TRANSFORMATIONS_KEY {
                continue;
            }
            let value = match (key, defaults.paragraph(), value.as_paragraph()) {
                (keys::PARAGRAPH_STYLE, Some(base), Some(paragraph)) => {
                    AttributeValue::Paragraph(base.supply_defaults(paragraph))
                }
                _ => value.clone(),
            };
            merged.insert(key, value);
        }

        let font = existing.font();
        let inherited = extract::<Transformation>(&defaults)
            .into_iter()
            .map(|transformation| rebased(transformation, font));
        embed(embed(merged, inherited), extract::<Transformation>(existing))
    }

    /// Styles `text` with this style.
    ///
    /// With a markup styler, tags in `text` select additional styles that are
    /// merged over this one for the enclosed text. Markup that fails to parse
    /// is used verbatim, styled as if there were no markup. The eager content
    /// transform is applied to each run.
    pub fn styled_text(&self, text: &str) -> StyledText {
        let styler = match &self.markup {
            Some(styler) => styler,
            None => return StyledText::from_text(self.transformed(text), self.attributes()),
        };
        let plain = StyleSpec {
            markup: None,
            ..self.clone()
        };

        match styler.parse(text) {
            Ok(segments) => {
                let mut styled = StyledText::new();
                for segment in segments {
                    let spec = plain.merge(&segment.style);
                    styled.push(&spec.transformed(&segment.text), spec.attributes());
                }
                styled
            }
            Err(err) => {
                warn!("markup ignored, styling raw text: {}", err);
                plain.styled_text(text)
            }
        }
    }

    fn insert_scalars(&self, map: &mut AttributeMap) {
        map.update(keys::FONT, self.font.clone());
        map.update(keys::LINK, self.link.clone());
        map.update(keys::FOREGROUND_COLOR, self.foreground_color);
        map.update(keys::BACKGROUND_COLOR, self.background_color);
        if let Some(underline) = &self.underline {
            map.insert(keys::UNDERLINE_STYLE, AttributeValue::Enum(underline.style.raw()));
            map.update(keys::UNDERLINE_COLOR, underline.color);
        }
        if let Some(strikethrough) = &self.strikethrough {
            map.insert(
                keys::STRIKETHROUGH_STYLE,
                AttributeValue::Enum(strikethrough.style.raw()),
            );
            map.update(keys::STRIKETHROUGH_COLOR, strikethrough.color);
        }
        map.update(keys::BASELINE_OFFSET, self.baseline_offset);
        map.update(
            keys::LIGATURE,
            self.ligatures.map(|l| AttributeValue::Enum(l.raw())),
        );
        map.update(keys::SPEECH_PUNCTUATION, self.speaks_punctuation);
        map.update(keys::SPEECH_LANGUAGE, self.speaking_language.clone());
        map.update(keys::SPEECH_PITCH, self.speaking_pitch);
    }

    fn insert_paragraph(&self, map: &mut AttributeMap) {
        let mut paragraph = map.paragraph().cloned().unwrap_or_default();

        macro_rules! apply {
            ($($spec:ident => $field:ident),* $(,)?) => {
                $(
                    if let Some(value) = self.$spec {
                        paragraph.$field = value;
                    }
                )*
            };
        }

        apply!(
            line_spacing => line_spacing,
            paragraph_spacing_after => paragraph_spacing,
            alignment => alignment,
            first_line_head_indent => first_line_head_indent,
            head_indent => head_indent,
            tail_indent => tail_indent,
            line_break_mode => line_break_mode,
            minimum_line_height => minimum_line_height,
            maximum_line_height => maximum_line_height,
            base_writing_direction => base_writing_direction,
            line_height_multiple => line_height_multiple,
            paragraph_spacing_before => paragraph_spacing_before,
            hyphenation_factor => hyphenation_factor,
        );

        if paragraph.is_system_default() {
            map.remove(keys::PARAGRAPH_STYLE);
        } else {
            map.insert(keys::PARAGRAPH_STYLE, paragraph);
        }
    }
}

fn rebased(transformation: Transformation, font: Option<&Font>) -> Transformation {
    match (transformation, font) {
        (
            Transformation::AdaptiveStyle(AdaptiveStyleTransformation::Style { style, .. }),
            Some(font),
        ) => AdaptiveStyleTransformation::recorded(style, Some(font)).into(),
        (transformation, _) => transformation,
    }
}

fn kerning(tracking: Tracking, font: Option<&Font>) -> f64 {
    match font {
        Some(font) => tracking.kerning(font.point_size()),
        None => {
            if tracking.is_size_dependent() {
                warn!("per-mille tracking without a font, kerning set to 0");
            }
            tracking.kerning(0.0)
        }
    }
}
