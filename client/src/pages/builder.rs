//! Builder page: palette, canvas, and export panel side by side.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state comes from the contexts provided by `App`. Reloading the page
//! starts from an empty canvas; nothing is persisted.

use leptos::prelude::*;

use crate::components::assist_overlay::AssistOverlay;
use crate::components::canvas::BuilderCanvas;
use crate::components::canvas_toolbar::CanvasToolbar;
use crate::components::markup_panel::MarkupPanel;
use crate::components::palette::Palette;

/// Three-column builder layout with the assist overlay on top.
#[component]
pub fn BuilderPage() -> impl IntoView {
    view! {
        <div class="builder">
            <AssistOverlay/>
            <Palette/>
            <main class="builder__main">
                <CanvasToolbar/>
                <BuilderCanvas/>
            </main>
            <MarkupPanel/>
        </div>
    }
}
