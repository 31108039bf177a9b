//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render builder chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod assist_overlay;
pub mod canvas;
pub mod canvas_toolbar;
pub mod element_card;
pub mod icons;
pub mod interactive_preview;
pub mod markup_panel;
pub mod palette;
pub mod theme_picker;
