//! Built-in theme catalog inspired by the Bootswatch palettes.

use crate::theme::{ColorScheme, ThemeDefinition};
use std::fmt::{Display, Formatter};

/// Built-in theme catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinTheme {
    /// Bright blue on white.
    Cosmo,
    /// Flat navy and turquoise.
    Flatly,
    /// Clean light theme with a soft blue primary.
    Litera,
    /// Mint pastel light theme.
    Minty,
    /// Muted blue on charcoal.
    Darkly,
    /// Blue-grey dark theme.
    Superhero,
    /// High-contrast dark theme on near-black.
    Cyborg,
    /// Solarized dark.
    Solar,
}

impl BuiltinTheme {
    /// Stable theme id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cosmo => "cosmo",
            Self::Flatly => "flatly",
            Self::Litera => "litera",
            Self::Minty => "minty",
            Self::Darkly => "darkly",
            Self::Superhero => "superhero",
            Self::Cyborg => "cyborg",
            Self::Solar => "solar",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cosmo => "Cosmo",
            Self::Flatly => "Flatly",
            Self::Litera => "Litera",
            Self::Minty => "Minty",
            Self::Darkly => "Darkly",
            Self::Superhero => "Superhero",
            Self::Cyborg => "Cyborg",
            Self::Solar => "Solar",
        }
    }

    /// Full catalog, light themes first.
    pub fn all() -> &'static [BuiltinTheme] {
        const THEMES: [BuiltinTheme; 8] = [
            BuiltinTheme::Cosmo,
            BuiltinTheme::Flatly,
            BuiltinTheme::Litera,
            BuiltinTheme::Minty,
            BuiltinTheme::Darkly,
            BuiltinTheme::Superhero,
            BuiltinTheme::Cyborg,
            BuiltinTheme::Solar,
        ];
        &THEMES
    }

    /// Look up a built-in theme by id (case-insensitive).
    pub fn from_id(id: &str) -> Option<BuiltinTheme> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(id))
    }

    pub fn scheme(self) -> ColorScheme {
        self.palette().scheme
    }

    /// Build the theme definition for this entry.
    pub fn definition(self) -> ThemeDefinition {
        let base = self.palette();
        let hex = |v: u32| format!("#{v:06x}");

        ThemeDefinition::new(self.id(), base.scheme)
            .color("primary", hex(base.primary))
            .color("secondary", hex(base.secondary))
            .color("success", hex(base.success))
            .color("info", hex(base.info))
            .color("warning", hex(base.warning))
            .color("danger", hex(base.danger))
            .color("light", hex(base.light))
            .color("dark", hex(base.dark))
            .color("background", hex(base.background))
            .color("foreground", hex(base.foreground))
            .border(hex(base.border))
            .elevation_step(base.elevation_step)
    }

    fn palette(self) -> BasePalette {
        match self {
            Self::Cosmo => COSMO,
            Self::Flatly => FLATLY,
            Self::Litera => LITERA,
            Self::Minty => MINTY,
            Self::Darkly => DARKLY,
            Self::Superhero => SUPERHERO,
            Self::Cyborg => CYBORG,
            Self::Solar => SOLAR,
        }
    }
}

impl Display for BuiltinTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Copy)]
struct BasePalette {
    scheme: ColorScheme,
    primary: u32,
    secondary: u32,
    success: u32,
    info: u32,
    warning: u32,
    danger: u32,
    light: u32,
    dark: u32,
    background: u32,
    foreground: u32,
    border: u32,
    elevation_step: f32,
}

const COSMO: BasePalette = BasePalette {
    scheme: ColorScheme::Light,
    primary: 0x2780E3,
    secondary: 0x7E8081,
    success: 0x3FB618,
    info: 0x9954BB,
    warning: 0xFF7518,
    danger: 0xFF0039,
    light: 0xF8F9FA,
    dark: 0x373A3C,
    background: 0xFFFFFF,
    foreground: 0x373A3C,
    border: 0xCED4DA,
    elevation_step: 0.04,
};

const FLATLY: BasePalette = BasePalette {
    scheme: ColorScheme::Light,
    primary: 0x2C3E50,
    secondary: 0x95A5A6,
    success: 0x18BC9C,
    info: 0x3498DB,
    warning: 0xF39C12,
    danger: 0xE74C3C,
    light: 0xECF0F1,
    dark: 0x7B8A8B,
    background: 0xFFFFFF,
    foreground: 0x212529,
    border: 0xCED4DA,
    elevation_step: 0.04,
};

const LITERA: BasePalette = BasePalette {
    scheme: ColorScheme::Light,
    primary: 0x4582EC,
    secondary: 0xADB5BD,
    success: 0x02B875,
    info: 0x17A2B8,
    warning: 0xF0AD4E,
    danger: 0xD9534F,
    light: 0xF8F9FA,
    dark: 0x343A40,
    background: 0xFFFFFF,
    foreground: 0x343A40,
    border: 0xBFBFBF,
    elevation_step: 0.04,
};

const MINTY: BasePalette = BasePalette {
    scheme: ColorScheme::Light,
    primary: 0x78C2AD,
    secondary: 0xF3969A,
    success: 0x56CC9D,
    info: 0x6CC3D5,
    warning: 0xFFCE67,
    danger: 0xFF7851,
    light: 0xF8F9FA,
    dark: 0x343A40,
    background: 0xFFFFFF,
    foreground: 0x5A5A5A,
    border: 0xCED4DA,
    elevation_step: 0.04,
};

const DARKLY: BasePalette = BasePalette {
    scheme: ColorScheme::Dark,
    primary: 0x375A7F,
    secondary: 0x444444,
    success: 0x00BC8C,
    info: 0x3498DB,
    warning: 0xF39C12,
    danger: 0xE74C3C,
    light: 0xADB5BD,
    dark: 0x303030,
    background: 0x222222,
    foreground: 0xFFFFFF,
    border: 0x222222,
    elevation_step: 0.05,
};

const SUPERHERO: BasePalette = BasePalette {
    scheme: ColorScheme::Dark,
    primary: 0x4C9BE8,
    secondary: 0x4E5D6C,
    success: 0x5CB85C,
    info: 0x5BC0DE,
    warning: 0xF0AD4E,
    danger: 0xD9534F,
    light: 0xABB6C2,
    dark: 0x20374C,
    background: 0x2B3E50,
    foreground: 0xFFFFFF,
    border: 0x222222,
    elevation_step: 0.05,
};

const CYBORG: BasePalette = BasePalette {
    scheme: ColorScheme::Dark,
    primary: 0x2A9FD6,
    secondary: 0x555555,
    success: 0x77B300,
    info: 0x9933CC,
    warning: 0xFF8800,
    danger: 0xCC0000,
    light: 0xADAFAE,
    dark: 0x222222,
    background: 0x060606,
    foreground: 0xFFFFFF,
    border: 0x060606,
    elevation_step: 0.05,
};

const SOLAR: BasePalette = BasePalette {
    scheme: ColorScheme::Dark,
    primary: 0xBC951A,
    secondary: 0x94A2A4,
    success: 0x44ACA4,
    info: 0x3F98D7,
    warning: 0xD05E2F,
    danger: 0xD95092,
    light: 0xA9BDBD,
    dark: 0x073642,
    background: 0x002B36,
    foreground: 0xFFFFFF,
    border: 0x00252E,
    elevation_step: 0.05,
};
