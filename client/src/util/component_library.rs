//! Component registry: the element types offered by the palette.
//!
//! Each descriptor pairs a default content value with a pure markup template.
//! Keys are the wire form used in drag payloads; everything past the payload
//! boundary works with `ComponentKind`.

#[cfg(test)]
#[path = "component_library_test.rs"]
mod component_library_test;

use crate::util::glyph::Glyph;
use crate::util::markup::{escape, safe_url};
use crate::util::theme_palette::ThemeKind;

/// Identifies one of the built-in element types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    TextBlock,
    ImageCanvas,
    InteractiveSection,
    VideoEmbed,
}

/// Static description of an element type.
#[derive(Clone, Copy, Debug)]
pub struct ComponentDescriptor {
    pub kind: ComponentKind,
    /// Unique key carried by drag payloads.
    pub key: &'static str,
    pub name: &'static str,
    pub glyph: Glyph,
    pub default_content: &'static str,
    template: fn(&str, ThemeKind) -> String,
}

impl ComponentDescriptor {
    /// Render `content` with `theme` into an HTML fragment.
    pub fn render(&self, content: &str, theme: ThemeKind) -> String {
        (self.template)(content, theme)
    }
}

/// All components in palette order.
pub const COMPONENTS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        kind: ComponentKind::TextBlock,
        key: "TextBlock",
        name: "Magic Text",
        glyph: Glyph::Type,
        default_content: "✨ Enchanted Words",
        template: render_text_block,
    },
    ComponentDescriptor {
        kind: ComponentKind::ImageCanvas,
        key: "ImageCanvas",
        name: "Dimensional Image",
        glyph: Glyph::Image,
        default_content: "https://picsum.photos/400/300",
        template: render_image_canvas,
    },
    ComponentDescriptor {
        kind: ComponentKind::InteractiveSection,
        key: "InteractiveSection",
        name: "Animated Section",
        glyph: Glyph::Puzzle,
        default_content: "Interactive Magic",
        template: render_interactive_section,
    },
    ComponentDescriptor {
        kind: ComponentKind::VideoEmbed,
        key: "VideoEmbed",
        name: "Cosmic Video",
        glyph: Glyph::Video,
        default_content: "https://www.youtube.com/embed/dQw4w9WgXcQ",
        template: render_video_embed,
    },
];

impl ComponentKind {
    #[must_use]
    pub fn descriptor(self) -> &'static ComponentDescriptor {
        match self {
            Self::TextBlock => &COMPONENTS[0],
            Self::ImageCanvas => &COMPONENTS[1],
            Self::InteractiveSection => &COMPONENTS[2],
            Self::VideoEmbed => &COMPONENTS[3],
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    /// Resolve a payload key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        COMPONENTS.iter().find(|c| c.key == key).map(|c| c.kind)
    }

    /// True for the type that previews as a stateful widget instead of markup.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::InteractiveSection)
    }
}

fn render_text_block(content: &str, theme: ThemeKind) -> String {
    format!(
        r#"<div class="magical-text {style} p-4 rounded-lg shadow-lg transform hover:scale-105 transition-all duration-300">
  <h2 class="text-2xl font-bold mb-2">{content}</h2>
  <p class="text-sm opacity-75">Click to edit this magical text!</p>
</div>"#,
        style = theme.style_class(),
        content = escape(content),
    )
}

fn render_image_canvas(content: &str, theme: ThemeKind) -> String {
    format!(
        r#"<div class="image-container {style} p-3 rounded-xl shadow-2xl overflow-hidden">
  <img src="{src}" class="w-full h-auto transform transition-all duration-500 hover:scale-110 hover:rotate-3" alt="Dynamic Image"/>
  <div class="mt-2 text-center text-sm font-semibold">Interactive Image</div>
</div>"#,
        style = theme.style_class(),
        src = safe_url(content),
    )
}

fn render_interactive_section(content: &str, theme: ThemeKind) -> String {
    format!(
        r#"<section class="interactive-zone {style} p-6 rounded-2xl cursor-pointer transition-all duration-300 transform hover:-translate-y-1 hover:shadow-xl">
  <h3 class="text-xl font-bold mb-2">{content}</h3>
  <p class="text-sm mb-4">Click the buttons to see the magic!</p>
  <div class="flex justify-center space-x-4">
    <button class="animate-button px-4 py-2 bg-indigo-500 text-white rounded-full hover:bg-indigo-600 transition-colors duration-200">Animate</button>
    <button class="color-button px-4 py-2 bg-pink-500 text-white rounded-full hover:bg-pink-600 transition-colors duration-200">Change Color</button>
  </div>
</section>"#,
        style = theme.style_class(),
        content = escape(content),
    )
}

fn render_video_embed(content: &str, theme: ThemeKind) -> String {
    format!(
        r#"<div class="video-wrapper {style} p-3 rounded-2xl shadow-lg overflow-hidden">
  <iframe src="{src}" class="w-full aspect-video rounded-lg" allowfullscreen></iframe>
  <div class="mt-2 text-center text-sm font-semibold">Embedded Cosmic Video</div>
</div>"#,
        style = theme.style_class(),
        src = safe_url(content),
    )
}
