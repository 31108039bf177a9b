//! Inline SVG icons for registry glyphs and toolbar actions.

use leptos::prelude::*;

use crate::util::glyph::Glyph;

/// Render `glyph` as a 20x20 stroked SVG.
pub fn glyph_icon(glyph: Glyph) -> AnyView {
    match glyph {
        Glyph::Rocket => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2 C13.5 4 15 7.5 14 12 L12 14 H8 L6 12 C5 7.5 6.5 4 10 2 Z" />
                <circle cx="10" cy="8" r="1.6" />
                <path d="M6 12 L3.5 14.5 L6.5 15" />
                <path d="M14 12 L16.5 14.5 L13.5 15" />
                <path d="M9 14 L10 18 L11 14" />
            </svg>
        }
        .into_any(),
        Glyph::Leaf => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 16 C4 8 9 4 17 3 C16 11 12 16 4 16 Z" />
                <path d="M4 16 L11 9" />
            </svg>
        }
        .into_any(),
        Glyph::Globe => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7.5" />
                <ellipse cx="10" cy="10" rx="3.2" ry="7.5" />
                <line x1="2.5" y1="10" x2="17.5" y2="10" />
            </svg>
        }
        .into_any(),
        Glyph::Star => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2.5 L12.3 7.3 L17.5 7.9 L13.6 11.4 L14.7 16.6 L10 14 L5.3 16.6 L6.4 11.4 L2.5 7.9 L7.7 7.3 Z" />
            </svg>
        }
        .into_any(),
        Glyph::Type => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="4" y1="4" x2="16" y2="4" />
                <line x1="10" y1="4" x2="10" y2="17" />
                <line x1="7" y1="17" x2="13" y2="17" />
            </svg>
        }
        .into_any(),
        Glyph::Image => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2.5" y="3.5" width="15" height="13" rx="1.5" />
                <circle cx="7" cy="8" r="1.5" />
                <path d="M2.5 14 L7.5 10 L11 13 L13.5 11 L17.5 14.5" />
            </svg>
        }
        .into_any(),
        Glyph::Puzzle => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 6 H7 C7 4 8 3 9.5 3 C11 3 12 4 12 6 H16 V10 C18 10 18.5 11 18.5 12 C18.5 13 18 14 16 14 V17 H3 Z" />
            </svg>
        }
        .into_any(),
        Glyph::Video => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="5" width="11" height="10" rx="1.5" />
                <path d="M13 9 L18 6 V14 L13 11 Z" />
            </svg>
        }
        .into_any(),
        Glyph::Palette => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2.5 C5.5 2.5 2.5 6 2.5 10 C2.5 14 5.5 17.5 9.5 17.5 C11 17.5 11.5 16.5 11 15.5 C10.5 14.3 11.3 13 12.7 13 H14.5 C16.3 13 17.5 11.6 17.5 9.8 C17.5 5.6 14.2 2.5 10 2.5 Z" />
                <circle cx="6.5" cy="9" r="1" />
                <circle cx="9" cy="6" r="1" />
                <circle cx="13" cy="6.5" r="1" />
            </svg>
        }
        .into_any(),
        Glyph::Wand => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="17" x2="13" y2="7" />
                <path d="M13 7 L15 5" />
                <path d="M15 2 V4 M16 3 H14" />
                <path d="M17.5 7 V9 M18.5 8 H16.5" />
            </svg>
        }
        .into_any(),
        Glyph::Sparkles => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M9 3 L10.5 7.5 L15 9 L10.5 10.5 L9 15 L7.5 10.5 L3 9 L7.5 7.5 Z" />
                <path d="M15.5 2.5 V5.5 M14 4 H17" />
                <path d="M15.5 14 V17 M14 15.5 H17" />
            </svg>
        }
        .into_any(),
        Glyph::Trash => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="5" x2="17" y2="5" />
                <path d="M8 5 V3 H12 V5" />
                <path d="M5 5 L6 17 H14 L15 5" />
            </svg>
        }
        .into_any(),
        Glyph::Eye => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M1.5 10 C4 5.5 7 3.5 10 3.5 C13 3.5 16 5.5 18.5 10 C16 14.5 13 16.5 10 16.5 C7 16.5 4 14.5 1.5 10 Z" />
                <circle cx="10" cy="10" r="2.5" />
            </svg>
        }
        .into_any(),
        Glyph::Code => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <polyline points="7,5 2,10 7,15" />
                <polyline points="13,5 18,10 13,15" />
            </svg>
        }
        .into_any(),
        Glyph::Save => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 3 H14 L17 6 V17 H3 Z" />
                <rect x="6" y="3" width="7" height="4.5" />
                <rect x="6" y="11" width="8" height="6" />
            </svg>
        }
        .into_any(),
    }
}
