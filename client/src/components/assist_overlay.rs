//! Full-screen "AI Web Builder" placeholder panel.

use leptos::prelude::*;

use crate::components::icons::glyph_icon;
use crate::state::ui::UiState;
use crate::util::glyph::Glyph;

/// Static overlay toggled by the palette's assist button. It has no behavior
/// beyond its exit button.
#[component]
pub fn AssistOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.assist_visible)>
            <div class="assist-overlay" role="dialog" aria-modal="true" aria-labelledby="assist-overlay-title">
                <div class="assist-overlay__card">
                    <span class="assist-overlay__icon">{glyph_icon(Glyph::Sparkles)}</span>
                    <h2 id="assist-overlay-title" class="assist-overlay__title">"AI Web Builder"</h2>
                    <p class="assist-overlay__body">
                        "Our AI is brewing up some magical web designs just for you! Stay tuned for an enchanting experience."
                    </p>
                    <button class="assist-overlay__close" on:click=move |_| ui.update(UiState::close_assist)>
                        "Back to Building"
                    </button>
                </div>
            </div>
        </Show>
    }
}
