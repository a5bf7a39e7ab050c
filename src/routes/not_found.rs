//! Fallback for unknown routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="bg-black min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class="text-9xl font-black text-neutral-800 select-none">"404"</h1>
            <p class="max-w-sm text-neutral-400">"Esta página no existe."</p>
            <A
                href=paths::REGISTER
                {..}
                class="rounded-full bg-white px-5 py-2.5 text-sm font-semibold text-black transition hover:bg-neutral-200"
            >
                "Crear una cuenta"
            </A>
        </main>
    }
}
