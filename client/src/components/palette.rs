//! Left sidebar: theme picker, draggable component list, and assist button.
//!
//! DESIGN
//! ======
//! Palette items only publish a drag payload; the canvas decides what a drop
//! means. Clicking an item takes the same path as a drop so the palette stays
//! usable without a pointer drag.

use leptos::prelude::*;

use crate::components::canvas::add_to_canvas;
use crate::components::icons::glyph_icon;
use crate::components::theme_picker::ThemePicker;
use crate::state::builder::BuilderState;
use crate::state::ui::UiState;
use crate::util::component_library::{COMPONENTS, ComponentDescriptor};
use crate::util::drag::{DragPayload, write_payload};
use crate::util::glyph::Glyph;

/// Sidebar listing every registered component.
#[component]
pub fn Palette() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let items = COMPONENTS
        .iter()
        .map(|descriptor| view! { <PaletteItem descriptor/> })
        .collect::<Vec<_>>();

    view! {
        <aside class="palette">
            <div class="palette__header">
                {glyph_icon(Glyph::Palette)}
                <h2 class="palette__title">"Magic Palette"</h2>
            </div>

            <ThemePicker/>

            <div class="palette__items">{items}</div>

            <button class="palette__assist" on:click=move |_| ui.update(UiState::open_assist)>
                {glyph_icon(Glyph::Wand)}
                <span>"AI Web Wizard"</span>
            </button>
        </aside>
    }
}

/// One draggable palette entry.
#[component]
pub fn PaletteItem(descriptor: &'static ComponentDescriptor) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let dragging = RwSignal::new(false);
    let key = descriptor.key;

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        write_payload(&ev, &DragPayload::new(key));
        dragging.set(true);
    };
    let on_drag_end = move |_ev: leptos::ev::DragEvent| dragging.set(false);
    let on_click = move |_ev: leptos::ev::MouseEvent| add_to_canvas(builder, ui, key);

    view! {
        <div
            class="palette-item"
            class:palette-item--dragging=move || dragging.get()
            draggable="true"
            title=format!("Drag or click to add {}", descriptor.name)
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:click=on_click
        >
            <span class="palette-item__icon">{glyph_icon(descriptor.glyph)}</span>
            <span class="palette-item__name">{descriptor.name}</span>
        </div>
    }
}
