//! Icon identifiers referenced by the theme and component registries.
//!
//! Registries stay free of view code; `components::icons` maps each glyph to
//! its inline SVG.

/// Named icon shown next to a theme swatch, palette entry, or toolbar action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Rocket,
    Leaf,
    Globe,
    Star,
    Type,
    Image,
    Puzzle,
    Video,
    Palette,
    Wand,
    Sparkles,
    Trash,
    Eye,
    Code,
    Save,
}
