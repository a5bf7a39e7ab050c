//! Registration route. It validates the form locally, sends `{ email, password }`
//! to the auth provider, and swaps to the confirmation prompt once the account
//! exists.
//!
//! Flow Overview: Editing -> Submitting on a valid submit, Submitting ->
//! Completed when the provider answers. A failed sign-up is only logged and the
//! spinner stays up.

use crate::{
    app_lib::config::AppConfig,
    components::{EmailInput, FormActions, GoBackLink, HeroInfo, PassInput, Spinner},
    features::{
        auth::{GoTrueClient, SignUpClient, types::SignUpRequest},
        register::{PageView, RegisterFlow, RegisterForm},
    },
    routes::ConfirmEmail,
};
use leptos::{ev::SubmitEvent, prelude::*};

const HERO_IMAGE: &str = "/assets/register/float_logo.svg";
const HERO_TITLE: &str = "Boom shakalaka! Vamos a empezar.";
const HERO_SUBTITLE: &str = "Para empezar, necesitamos un nombre y correo electrónico.";

/// Renders the registration form and drives the sign-up call.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let flow = RwSignal::new(RegisterFlow::default());

    let register_action = Action::new_local(move |request: &SignUpRequest| {
        let request = request.clone();
        async move {
            let client = GoTrueClient::new(AppConfig::load());
            client.sign_up(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            flow.update(|flow| flow.settle(result));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        let mut request = None;
        flow.update(|flow| request = flow.submit(&form));
        if let Some(request) = request {
            register_action.dispatch(request);
        }
    };

    let page = Memo::new(move |_| flow.with(RegisterFlow::view));
    let loading = Signal::derive(move || page.get() == PageView::Loading);

    view! {
        {move || match page.get() {
            PageView::Confirmation => {
                let email = flow.with(|flow| flow.registered().and_then(|user| user.email.clone()));
                view! { <ConfirmEmail email=email /> }.into_any()
            }
            PageView::Form | PageView::Loading => view! {
                <main>
                    <section class="bg-black min-h-screen flex flex-col items-center pt-5">
                        <GoBackLink />
                        <HeroInfo
                            loading=loading
                            image=HERO_IMAGE
                            title=HERO_TITLE
                            subtitle=HERO_SUBTITLE
                        />
                        <form class="pt-4 flex flex-col items-center gap-8" on:submit=on_submit>
                            {move || {
                                if page.get() == PageView::Loading {
                                    view! {
                                        <div class="text-white">
                                            <Spinner large=true />
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <EmailInput value=email set_value=set_email />
                                        <PassInput value=password set_value=set_password />
                                        {move || {
                                            flow.with(|flow| flow.error_message().map(str::to_string))
                                                .map(|message| {
                                                    view! {
                                                        <div class="max-w-xs" role="alert">
                                                            <p class="text-red-500 text-center w-fit mx-auto">
                                                                {message}
                                                            </p>
                                                        </div>
                                                    }
                                                })
                                        }}
                                    }
                                    .into_any()
                                }
                            }}
                            <FormActions loading=loading />
                        </form>
                    </section>
                </main>
            }
            .into_any(),
        }}
    }
}
