use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let version = build_info::version();

    view! {
        <main class="bg-black min-h-screen flex items-center justify-center">
            <div class="rounded-lg border border-neutral-700 bg-neutral-900">
                <div class="border-b border-neutral-700 px-6 py-3 font-semibold text-neutral-300">
                    "Build Version"
                </div>
                <div class="p-6 text-white">
                    <pre class="text-center">{format!("{version} ({commit})")}</pre>
                </div>
            </div>
        </main>
    }
}
