mod confirm_email;
mod health;
mod not_found;
mod register;

pub(crate) use confirm_email::ConfirmEmail;
pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const REGISTER: &str = "/auth/register";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::REGISTER /> } />
            <Route path=path!("/auth/register") view=RegisterPage />
            <Route path=path!("/health") view=HealthPage />
        </Routes>
    }
}
