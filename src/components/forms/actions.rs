use crate::components::{Button, Spinner};
use leptos::prelude::*;

/// Submit button for auth forms, disabled while a request is pending.
#[component]
pub fn FormActions(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3">
            <Button button_type="submit" disabled=loading>
                {move || {
                    if loading.get() {
                        view! {
                            <span class="inline-flex items-center gap-2">
                                <Spinner />
                                "Creando cuenta"
                            </span>
                        }
                        .into_any()
                    } else {
                        view! { <span>"Crear cuenta"</span> }.into_any()
                    }
                }}
            </Button>
            <p class="text-xs text-neutral-500">
                "Te enviaremos un correo para confirmar tu cuenta."
            </p>
        </div>
    }
}
