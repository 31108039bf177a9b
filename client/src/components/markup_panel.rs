//! Read-only panel showing the exported markup for the current canvas.

use leptos::prelude::*;

use crate::state::builder::BuilderState;

/// Right sidebar with the generated HTML. Recomputed on every builder change.
#[component]
pub fn MarkupPanel() -> impl IntoView {
    let builder = expect_context::<RwSignal<BuilderState>>();
    let markup = move || builder.with(BuilderState::markup);

    view! {
        <aside class="markup-panel">
            <h3 class="markup-panel__title">"Enchanted HTML"</h3>
            <pre class="markup-panel__code">
                <code>{markup}</code>
            </pre>
        </aside>
    }
}
