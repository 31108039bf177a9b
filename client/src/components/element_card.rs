//! One placed element, drawn for the current canvas mode.

use leptos::prelude::*;

use crate::components::icons::glyph_icon;
use crate::components::interactive_preview::InteractivePreview;
use crate::state::builder::BuilderState;
use crate::state::ui::{CanvasMode, UiState};
use crate::util::component_library::ComponentKind;
use crate::util::glyph::Glyph;
use crate::util::theme_palette::ThemeKind;

/// Card for element `id`. Edit mode shows an input and a remove button;
/// preview mode shows the rendered element.
#[component]
pub fn ElementCard(id: String) -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Kind and theme never change after creation.
    let Some((kind, theme)) = builder.with_untracked(|b| b.get(&id).map(|el| (el.kind, el.theme))) else {
        return ().into_any();
    };

    let content = Signal::derive({
        let id = id.clone();
        move || builder.with(|b| b.get(&id).map(|el| el.content.clone()).unwrap_or_default())
    });
    let on_input = {
        let id = id.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            builder.update(|b| {
                b.update(&id, value);
            });
        }
    };
    let on_remove = {
        let id = id.clone();
        move |_ev: leptos::ev::MouseEvent| {
            builder.update(|b| {
                b.remove(&id);
            });
        }
    };
    let previewing = move || ui.with(|u| u.canvas_mode() == CanvasMode::Preview);

    view! {
        <div class=format!("element-card {}", theme.style_class()) data-element-id=id>
            <Show
                when=previewing
                fallback=move || {
                    view! {
                        <input
                            class="element-card__input"
                            aria-label=kind.descriptor().name
                            prop:value=move || content.get()
                            on:input=on_input.clone()
                        />
                        <button class="element-card__remove" title="Remove" on:click=on_remove.clone()>
                            {glyph_icon(Glyph::Trash)}
                        </button>
                    }
                }
            >
                {preview_body(kind, theme, content)}
            </Show>
        </div>
    }
    .into_any()
}

fn preview_body(kind: ComponentKind, theme: ThemeKind, content: Signal<String>) -> AnyView {
    if kind.is_interactive() {
        view! { <InteractivePreview content theme/> }.into_any()
    } else {
        let html = move || kind.descriptor().render(&content.get(), theme);
        view! { <div class="element-card__preview" inner_html=html></div> }.into_any()
    }
}
