//! Live widget shown for interactive sections in preview mode.
//!
//! TRADE-OFFS
//! ==========
//! The pulse and the recolor are view-local signals. They are never written
//! back to the element, so export output is unaffected and the widget starts
//! fresh whenever it is mounted again.

use leptos::prelude::*;

use crate::util::pulse::PulseState;
use crate::util::swatch::random_swatch;
use crate::util::theme_palette::ThemeKind;

/// Length of the pulse animation; matches `interactive-zone--pulse-a`/`-b` in the stylesheet.
#[cfg(feature = "hydrate")]
const PULSE_MS: u32 = 500;

#[component]
pub fn InteractivePreview(#[prop(into)] content: Signal<String>, theme: ThemeKind) -> impl IntoView {
    let swatch = RwSignal::new(None::<&'static str>);
    let pulse = RwSignal::new(PulseState::default());

    let on_animate = move |_ev: leptos::ev::MouseEvent| {
        let Some(seq) = pulse.try_update(PulseState::start) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(PULSE_MS, move || {
            // The widget may have been unmounted before the timer fired.
            let _ = pulse.try_update(|p| p.finish(seq));
        })
        .forget();
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    };
    let on_recolor = move |_ev: leptos::ev::MouseEvent| swatch.set(Some(random_swatch()));

    let zone_class = move || {
        let background = swatch.get().unwrap_or_else(|| theme.style_class());
        let modifier = pulse.with(PulseState::class);
        format!(
            "interactive-zone {background} p-6 rounded-2xl cursor-pointer transition-all duration-300 transform hover:-translate-y-1 hover:shadow-xl {modifier}"
        )
    };

    view! {
        <section class=zone_class>
            <h3 class="text-xl font-bold mb-2">{move || content.get()}</h3>
            <p class="text-sm mb-4">"Click the buttons to see the magic!"</p>
            <div class="flex justify-center space-x-4">
                <button
                    class="px-4 py-2 bg-indigo-500 text-white rounded-full hover:bg-indigo-600 transition-colors duration-200"
                    on:click=on_animate
                >
                    "Animate"
                </button>
                <button
                    class="px-4 py-2 bg-pink-500 text-white rounded-full hover:bg-pink-600 transition-colors duration-200"
                    on:click=on_recolor
                >
                    "Change Color"
                </button>
            </div>
        </section>
    }
}
