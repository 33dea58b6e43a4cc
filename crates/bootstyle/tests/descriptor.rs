//! Integration tests for descriptor parsing
//!
//! These tests verify that:
//! - Every accepted spelling of a descriptor yields the same canonical key
//! - Bracket modifiers attach to colors and are order-independent
//! - Unknown and conflicting tokens degrade with diagnostics, never panics

use bootstyle::{
    parse, ColorToken, Descriptor, DescriptorError, Diagnostic, Modifier, ParsedDescriptor,
    StyleKey, Variant, Vocabulary, WidgetClass,
};

fn parse_ok(descriptor: impl Into<Descriptor>, widget: WidgetClass) -> ParsedDescriptor {
    parse(&descriptor.into(), widget, &Vocabulary::standard()).expect("descriptor should parse")
}

fn key(descriptor: &str) -> StyleKey {
    parse_ok(descriptor, WidgetClass::Button).key
}

fn unrecognized(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .filter_map(|d| match d {
            Diagnostic::UnrecognizedToken { token, .. } => Some(token.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_color_and_variant() {
    let parsed = parse_ok("success-outline", WidgetClass::Button);
    assert_eq!(parsed.key.color(), &ColorToken::Success);
    assert_eq!(parsed.key.variant(), Variant::Outline);
    assert_eq!(parsed.key.widget(), WidgetClass::Button);
    assert!(parsed.key.modifiers().is_empty());
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_separators_case_and_order_are_irrelevant() {
    let expected = key("success-outline");
    for spelling in [
        "outline success",
        "success_outline",
        "Success,Outline",
        "  OUTLINE - success ",
        "outlinesuccess",
    ] {
        assert_eq!(key(spelling), expected, "{spelling}");
    }
}

#[test]
fn test_token_collections() {
    let from_tuple = parse_ok(("info", "link"), WidgetClass::Button).key;
    let from_vec = parse_ok(vec!["link".to_string(), "info".to_string()], WidgetClass::Button).key;
    assert_eq!(from_tuple, from_vec);
    assert_eq!(from_tuple.color(), &ColorToken::Info);
    assert_eq!(from_tuple.variant(), Variant::Link);
}

#[test]
fn test_modifiers_are_canonical() {
    let a = key("primary[100][muted]");
    let b = key("primary[muted][100]");
    assert_eq!(a, b);
    assert_eq!(a.modifiers(), &[Modifier::Shade(100), Modifier::Muted]);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_signed_arguments_are_elevation() {
    assert_eq!(
        key("background[+2][subtle]").modifiers(),
        &[Modifier::Elevation(2), Modifier::Subtle]
    );
    // The dash inside brackets is a sign, not a separator.
    assert_eq!(key("danger[-1]").modifiers(), &[Modifier::Elevation(-1)]);
}

#[test]
fn test_out_of_range_arguments_are_clamped() {
    let parsed = parse_ok("primary[70000]", WidgetClass::Button);
    assert_eq!(parsed.key.modifiers(), &[Modifier::Shade(900)]);
    assert!(parsed.diagnostics.is_empty());

    assert_eq!(key("primary[0]").modifiers(), &[Modifier::Shade(100)]);
    assert_eq!(
        key("primary[99999999999999999999999]").modifiers(),
        &[Modifier::Shade(900)]
    );
    assert_eq!(
        key("background[+40000]").modifiers(),
        &[Modifier::Elevation(i16::MAX)]
    );
    assert_eq!(
        key("background[-40000]").modifiers(),
        &[Modifier::Elevation(i16::MIN)]
    );
}

#[test]
fn test_bad_arguments_are_dropped() {
    let parsed = parse_ok("primary[wat]", WidgetClass::Button);
    assert!(parsed.key.modifiers().is_empty());
    assert_eq!(unrecognized(&parsed.diagnostics), vec!["[wat]".to_string()]);

    // Arguments only bind to colors.
    let parsed = parse_ok("info outline[100]", WidgetClass::Button);
    assert!(parsed.key.modifiers().is_empty());
    assert_eq!(unrecognized(&parsed.diagnostics), vec!["[100]".to_string()]);
}

#[test]
fn test_unknown_color_falls_back_to_primary() {
    let err = parse(
        &"bogus-color-outline".into(),
        WidgetClass::Button,
        &Vocabulary::standard(),
    )
    .unwrap_err();

    let DescriptorError::UnknownColorToken { token, fallback } = err;
    assert_eq!(token, "bogus");
    assert_eq!(fallback.key.color(), &ColorToken::Primary);
    assert_eq!(fallback.key.variant(), Variant::Outline);
    assert_eq!(fallback.key.widget(), WidgetClass::Button);
    assert_eq!(unrecognized(&fallback.diagnostics), vec!["color".to_string()]);
}

#[test]
fn test_unknown_piece_next_to_known_color_is_only_a_diagnostic() {
    let parsed = parse_ok("danger-sparkly", WidgetClass::Button);
    assert_eq!(parsed.key.color(), &ColorToken::Danger);
    assert_eq!(unrecognized(&parsed.diagnostics), vec!["sparkly".to_string()]);
}

#[test]
fn test_empty_descriptor_uses_widget_defaults() {
    let button = parse_ok("", WidgetClass::Button);
    assert_eq!(button.key.color(), &ColorToken::Primary);
    assert_eq!(button.key.variant(), Variant::Solid);
    assert!(button.diagnostics.is_empty());

    let label = parse_ok("", WidgetClass::Label);
    assert_eq!(label.key.color(), &ColorToken::Foreground);
    assert_eq!(label.key.variant(), Variant::Text);
}

#[test]
fn test_unsupported_variant_falls_back() {
    let parsed = parse_ok("info-striped", WidgetClass::Button);
    assert_eq!(parsed.key.variant(), Variant::Solid);
    assert_eq!(
        parsed.diagnostics,
        vec![Diagnostic::UnsupportedVariantForWidget {
            variant: Variant::Striped,
            widget: WidgetClass::Button,
            fallback: Variant::Solid,
        }]
    );

    let bar = parse_ok("info-striped", WidgetClass::Progressbar);
    assert_eq!(bar.key.variant(), Variant::Striped);
    assert!(bar.diagnostics.is_empty());
}

#[test]
fn test_duplicate_kinds_resolve_by_vocabulary_order() {
    let a = parse_ok("danger-success", WidgetClass::Button);
    let b = parse_ok("success-danger", WidgetClass::Button);
    assert_eq!(a.key, b.key);
    assert_eq!(a.key.color(), &ColorToken::Success);
    assert_eq!(unrecognized(&a.diagnostics), vec!["danger".to_string()]);

    let v = parse_ok("link-outline", WidgetClass::Button);
    assert_eq!(v.key.variant(), Variant::Outline);
}

#[test]
fn test_widget_suffix_overrides_default() {
    let parsed = parse_ok("info-outline-entry", WidgetClass::Button);
    assert_eq!(parsed.key.widget(), WidgetClass::Entry);
    assert_eq!(parsed.key.variant(), Variant::Outline);
}

#[test]
fn test_segmented_toolbutton() {
    let parsed = parse_ok("successoutlinetoolbutton", WidgetClass::Checkbutton);
    assert_eq!(parsed.key.color(), &ColorToken::Success);
    // outline is not a checkbutton variant; toolbutton is, but both name the
    // same kind and outline comes first in vocabulary order.
    assert_eq!(parsed.key.variant(), Variant::Solid);
    assert!(parsed
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::UnsupportedVariantForWidget { .. })));
}

#[test]
fn test_long_concatenated_descriptor() {
    let descriptor = format!("{}info", "outline".repeat(10_000));
    let parsed = parse_ok(descriptor, WidgetClass::Button);
    assert_eq!(parsed.key.color(), &ColorToken::Info);
    assert_eq!(parsed.key.variant(), Variant::Outline);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_custom_color_tokens() {
    let vocabulary = Vocabulary::with_custom_colors([ColorToken::Custom("teal".into())]);
    let parsed = parse(&"teal-outline".into(), WidgetClass::Button, &vocabulary).unwrap();
    assert_eq!(parsed.key.color(), &ColorToken::Custom("teal".into()));

    assert!(parse(&"teal-outline".into(), WidgetClass::Button, &Vocabulary::standard()).is_err());
}
