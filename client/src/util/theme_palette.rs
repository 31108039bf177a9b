//! Theme registry: the fixed set of visual styles an element can be placed with.
//!
//! DESIGN
//! ======
//! Themes are a closed enum so element records carry a `Copy` value rather
//! than a name to look up later. The descriptor table is the only place the
//! style tokens are spelled out.

#[cfg(test)]
#[path = "theme_palette_test.rs"]
mod theme_palette_test;

use crate::util::glyph::Glyph;

/// Identifies one of the built-in themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    #[default]
    Cosmic,
    Organic,
    Digital,
    Retro,
}

/// Static description of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub kind: ThemeKind,
    /// Display name, unique across the registry.
    pub name: &'static str,
    /// Space-separated style classes applied to element chrome and markup.
    pub style_class: &'static str,
    pub glyph: Glyph,
}

/// All themes in picker order. The first entry is the initial selection.
pub const THEMES: &[ThemeDescriptor] = &[
    ThemeDescriptor {
        kind: ThemeKind::Cosmic,
        name: "Cosmic",
        style_class: "bg-purple-100 border-purple-300 text-purple-800",
        glyph: Glyph::Rocket,
    },
    ThemeDescriptor {
        kind: ThemeKind::Organic,
        name: "Organic",
        style_class: "bg-green-100 border-green-300 text-green-800",
        glyph: Glyph::Leaf,
    },
    ThemeDescriptor {
        kind: ThemeKind::Digital,
        name: "Digital",
        style_class: "bg-blue-100 border-blue-300 text-blue-800",
        glyph: Glyph::Globe,
    },
    ThemeDescriptor {
        kind: ThemeKind::Retro,
        name: "Retro",
        style_class: "bg-yellow-100 border-yellow-300 text-yellow-800",
        glyph: Glyph::Star,
    },
];

impl ThemeKind {
    /// Descriptor for this theme.
    #[must_use]
    pub fn descriptor(self) -> &'static ThemeDescriptor {
        match self {
            Self::Cosmic => &THEMES[0],
            Self::Organic => &THEMES[1],
            Self::Digital => &THEMES[2],
            Self::Retro => &THEMES[3],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    #[must_use]
    pub fn style_class(self) -> &'static str {
        self.descriptor().style_class
    }

    /// Resolve a theme by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        THEMES.iter().find(|t| t.name == name).map(|t| t.kind)
    }
}
