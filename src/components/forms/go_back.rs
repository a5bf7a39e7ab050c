use leptos::prelude::*;

/// Steps back in browser history.
#[component]
pub fn GoBackLink() -> impl IntoView {
    let on_click = move |_| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            // Nothing to go back to on a fresh tab; the page just stays.
            let _ = history.back();
        }
    };

    view! {
        <div class="w-full max-w-md px-6">
            <button
                type="button"
                class="inline-flex items-center gap-1 text-sm text-neutral-400 transition hover:text-white"
                on:click=on_click
            >
                <span aria-hidden="true">"←"</span>
                "Volver"
            </button>
        </div>
    }
}
