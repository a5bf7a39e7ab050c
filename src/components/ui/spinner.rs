use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let size = if large {
        "h-10 w-10 border-4"
    } else {
        "h-5 w-5 border-2"
    };

    view! {
        <div
            class=format!(
                "inline-block {size} animate-spin rounded-full border-neutral-600 border-t-white",
            )
            role="status"
            aria-live="polite"
            aria-label="Cargando"
        ></div>
    }
}
