use leptos::prelude::*;

const INPUT_CLASS: &str = "w-72 rounded-xl border border-neutral-700 bg-neutral-900 px-4 py-3 text-sm text-white placeholder:text-neutral-500 focus:border-neutral-400 focus:outline-none focus:ring-2 focus:ring-neutral-600";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-neutral-300";

/// Email field bound to `value`; writes every keystroke into `set_value`.
#[component]
pub fn EmailInput(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS for="email">"Correo electrónico"</label>
            <input
                id="email"
                name="email"
                type="email"
                autofocus
                class=INPUT_CLASS
                autocomplete="email"
                inputmode="email"
                placeholder="tu@correo.com"
                prop:value=value
                on:input=move |event| set_value.set(event_target_value(&event))
            />
        </div>
    }
}

/// Password field for a new account.
#[component]
pub fn PassInput(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS for="password">"Contraseña"</label>
            <input
                id="password"
                name="password"
                type="password"
                class=INPUT_CLASS
                autocomplete="new-password"
                placeholder="••••••••"
                prop:value=value
                on:input=move |event| set_value.set(event_target_value(&event))
            />
        </div>
    }
}
