//! Prompt shown once the provider accepted the registration.

use leptos::prelude::*;

#[component]
pub fn ConfirmEmail(email: Option<String>) -> impl IntoView {
    let target = email.map_or_else(
        || "Te enviamos un enlace de confirmación.".to_string(),
        |email| format!("Te enviamos un enlace de confirmación a {email}."),
    );

    view! {
        <main>
            <section class="bg-black min-h-screen flex flex-col items-center justify-center gap-4 px-6 text-center">
                <span class="text-5xl" aria-hidden="true">"✉"</span>
                <h1 class="text-2xl font-semibold text-white">"Revisa tu correo"</h1>
                <p class="max-w-xs text-sm text-neutral-400">
                    {target}
                    " Ábrelo para activar tu cuenta y después inicia sesión."
                </p>
            </section>
        </main>
    }
}
