use leptos::prelude::*;

/// Banner above the form. The logo floats while a request is in flight.
#[component]
pub fn HeroInfo(
    #[prop(into)] loading: Signal<bool>,
    image: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 px-6 pt-6 text-center">
            <img
                src=image
                alt=""
                class="h-28 w-28 transition"
                class:animate-bounce=move || loading.get()
            />
            <h1 class="text-2xl font-semibold text-white">{title}</h1>
            <p class="max-w-xs text-sm text-neutral-400">{subtitle}</p>
        </div>
    }
}
