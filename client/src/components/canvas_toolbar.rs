//! Canvas header with the preview toggle and the save placeholder.

use leptos::prelude::*;

use crate::components::icons::glyph_icon;
use crate::state::ui::{CanvasMode, UiState};
use crate::util::glyph::Glyph;

/// Title bar above the canvas.
#[component]
pub fn CanvasToolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let previewing = move || ui.with(|u| u.canvas_mode() == CanvasMode::Preview);

    view! {
        <div class="canvas-toolbar">
            <h2 class="canvas-toolbar__title">"Magical Canvas"</h2>
            <div class="canvas-toolbar__actions">
                <button
                    class="canvas-toolbar__btn ui-tooltip"
                    title=move || if previewing() { "Back to editing" } else { "Preview" }
                    on:click=move |_| ui.update(UiState::toggle_preview)
                >
                    {move || if previewing() { glyph_icon(Glyph::Code) } else { glyph_icon(Glyph::Eye) }}
                </button>
                // No save format exists yet; the button is shown but inert.
                <button
                    class="canvas-toolbar__btn canvas-toolbar__btn--save ui-tooltip"
                    title="Save (coming soon)"
                    disabled=true
                >
                    {glyph_icon(Glyph::Save)}
                </button>
            </div>
        </div>
    }
}
