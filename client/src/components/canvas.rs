//! Drop target holding the placed elements.
//!
//! ARCHITECTURE
//! ============
//! The card list is keyed by element id and each card reads its own content
//! from `BuilderState`. Editing an element therefore patches one input in
//! place instead of rebuilding the list, which keeps focus and caret position.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use leptos::prelude::*;

use crate::components::element_card::ElementCard;
use crate::state::builder::BuilderState;
use crate::state::ui::UiState;
use crate::util::drag::{DropHover, read_payload};

/// Add an element for `key` and replay the burst if it was accepted.
/// Unknown keys change nothing.
pub fn add_to_canvas(builder: RwSignal<BuilderState>, ui: RwSignal<UiState>, key: &str) {
    let added = builder.try_update(|b| b.add(key)).flatten();
    if added.is_some() {
        ui.update(UiState::celebrate);
    }
}

/// Canvas area: accepts palette drops and lists element cards.
#[component]
pub fn BuilderCanvas() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let hover = RwSignal::new(DropHover::default());

    // Drops are only allowed when dragover is cancelled.
    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hover.update(DropHover::enter);
    };
    let on_drag_leave = move |_ev: leptos::ev::DragEvent| hover.update(DropHover::leave);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hover.update(DropHover::reset);
        if let Some(payload) = read_payload(&ev) {
            add_to_canvas(builder, ui, &payload.kind);
        }
    };

    let is_empty = move || builder.with(BuilderState::is_empty);
    let burst = move || ui.with(|u| (u.celebrate_seq > 0).then_some(u.celebrate_seq));

    view! {
        <div
            class="canvas"
            class:canvas--over=move || hover.with(DropHover::is_over)
            on:dragenter=on_drag_enter
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <Show when=is_empty>
                <p class="canvas__empty">"Drag components from the palette and drop them here."</p>
            </Show>

            <div class="canvas__grid">
                <For
                    each=move || builder.with(BuilderState::ids)
                    key=|id| id.clone()
                    children=move |id| view! { <ElementCard id/> }
                />
            </div>

            // Keyed by sequence so each add mounts a fresh node and restarts the animation.
            <For
                each=burst
                key=|seq| *seq
                children=move |_seq| view! { <div class="canvas__burst" aria-hidden="true"></div> }
            />
        </div>
    }
}
