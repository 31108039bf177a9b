//! Row of theme buttons. The active theme is ringed.

use leptos::prelude::*;

use crate::components::icons::glyph_icon;
use crate::state::builder::BuilderState;
use crate::util::theme_palette::THEMES;

/// Theme selector for newly placed elements.
#[component]
pub fn ThemePicker() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();

    let buttons = THEMES
        .iter()
        .map(|theme| {
            let kind = theme.kind;
            let is_active = move || builder.with(|b| b.current_theme == kind);
            let on_click = move |_ev: leptos::ev::MouseEvent| builder.update(|b| b.select_theme(kind));

            view! {
                <button
                    class=format!("theme-picker__btn {}", theme.style_class)
                    class:theme-picker__btn--active=is_active
                    title=theme.name
                    on:click=on_click
                >
                    {glyph_icon(theme.glyph)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="theme-picker">
            <h3 class="theme-picker__title">"Enchanted Themes"</h3>
            <div class="theme-picker__row">{buttons}</div>
        </div>
    }
}
