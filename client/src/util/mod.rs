//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registries, markup generation, and browser drag plumbing live here so
//! components stay thin and the logic is testable without a browser.

pub mod component_library;
pub mod drag;
pub mod glyph;
pub mod markup;
pub mod pulse;
pub mod swatch;
pub mod theme_palette;
