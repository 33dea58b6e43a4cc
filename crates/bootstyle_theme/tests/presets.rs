use bootstyle_theme::{
    resolve, BuiltinTheme, ColorScheme, ColorToken, Modifier, ThemeCatalog, ThemeDefinition,
    ThemePalette,
};

#[test]
fn builtin_catalog_contains_expected_themes() {
    let mut ids: Vec<&str> = BuiltinTheme::all().iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec!["cosmo", "cyborg", "darkly", "flatly", "litera", "minty", "solar", "superhero"]
    );
}

#[test]
fn builtin_ids_round_trip() {
    for theme in BuiltinTheme::all() {
        assert_eq!(BuiltinTheme::from_id(theme.id()), Some(*theme));
        assert_eq!(BuiltinTheme::from_id(&theme.id().to_uppercase()), Some(*theme));
    }
}

#[test]
fn dark_themes_have_dark_backgrounds() {
    for theme in BuiltinTheme::all() {
        let palette = ThemePalette::from_definition(&theme.definition()).unwrap();
        let bg = palette.background().lightness();
        match palette.scheme() {
            ColorScheme::Light => assert!(bg > 0.5, "theme={theme:?} bg={bg}"),
            ColorScheme::Dark => assert!(bg < 0.5, "theme={theme:?} bg={bg}"),
        }
    }
}

#[test]
fn cosmo_and_darkly_primaries() {
    let catalog = ThemeCatalog::builtin();
    let cosmo = catalog.get("cosmo").unwrap();
    let darkly = catalog.get("darkly").unwrap();

    assert_eq!(cosmo.color(&ColorToken::Primary).unwrap().to_hex(), 0x2780E3);
    assert_eq!(darkly.color(&ColorToken::Primary).unwrap().to_hex(), 0x375A7F);
}

#[test]
fn definitions_survive_toml_round_trip() {
    for theme in BuiltinTheme::all() {
        let def = theme.definition();
        let text = toml::to_string(&def).unwrap();
        let mut catalog = ThemeCatalog::new();
        let names = catalog.load_toml_str(&text, theme.id()).unwrap();
        assert_eq!(names, vec![theme.id().to_string()]);
    }
}

#[test]
fn definitions_accept_json_with_type_alias() {
    let mut value = serde_json::to_value(BuiltinTheme::Darkly.definition()).unwrap();
    let object = value.as_object_mut().unwrap();
    let mode = object.remove("mode").unwrap();
    object.insert("type".to_string(), mode);

    let def: ThemeDefinition = serde_json::from_value(value).unwrap();
    assert_eq!(def.mode, ColorScheme::Dark);
    let palette = ThemePalette::from_definition(&def).unwrap();
    assert!(palette.is_dark());
}

#[test]
fn resolved_colors_serialize_as_hex() {
    let palette = ThemePalette::from_definition(&BuiltinTheme::Cosmo.definition()).unwrap();
    let resolved = resolve(&ColorToken::Primary, &[], &palette).unwrap();
    let json = serde_json::to_value(resolved.colors).unwrap();
    assert_eq!(json["normal"], "#2780e3");
    for state in ["hover", "active", "disabled", "focus"] {
        let hex = json[state].as_str().unwrap();
        assert!(hex.starts_with('#') && hex.len() == 7, "{state}: {hex}");
    }

    assert_eq!(serde_json::to_value(Modifier::Muted).unwrap(), "Muted");
    assert_eq!(
        serde_json::to_value(Modifier::Shade(300)).unwrap(),
        serde_json::json!({ "Shade": 300 })
    );
}
