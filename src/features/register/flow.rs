//! Registration page state machine: Editing -> Submitting -> Completed.
//!
//! A provider failure is logged and leaves the flow in `Submitting`; there is
//! no transition back to `Editing`, so the page keeps showing the spinner.

use crate::{
    app_lib::AppError,
    features::{
        auth::types::{SignUpRequest, SignUpResponse, User},
        register::schema::{FieldErrors, RegisterForm, validate_form},
    },
};
use tracing::{debug, error, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterPhase {
    #[default]
    Editing,
    Submitting,
    Completed,
}

/// What the page renders for a phase. Validation errors do not change it, so
/// the inputs stay mounted while a message is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Form,
    Loading,
    Confirmation,
}

impl SignUpRequest {
    /// Builds the wire request, lowercasing the email. Returns `None` when
    /// either field is empty.
    pub fn from_form(form: &RegisterForm) -> Option<Self> {
        if form.email.is_empty() || form.password.is_empty() {
            return None;
        }

        Some(Self {
            email: form.email.to_lowercase(),
            password: form.password.clone(),
        })
    }
}

/// Local state of the registration page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFlow {
    phase: RegisterPhase,
    errors: Option<FieldErrors>,
    registered: Option<User>,
}

impl RegisterFlow {
    pub fn phase(&self) -> RegisterPhase {
        self.phase
    }

    /// Message rendered beneath the inputs, if validation failed.
    pub fn error_message(&self) -> Option<&str> {
        self.errors.as_ref().and_then(FieldErrors::message)
    }

    /// Account returned by the provider once the flow completed.
    pub fn registered(&self) -> Option<&User> {
        self.registered.as_ref()
    }

    pub fn view(&self) -> PageView {
        match self.phase {
            RegisterPhase::Editing => PageView::Form,
            RegisterPhase::Submitting => PageView::Loading,
            RegisterPhase::Completed => PageView::Confirmation,
        }
    }

    /// Validates the form and, when it passes, enters `Submitting` and returns
    /// the request to send. Returns `None` when nothing should be sent.
    pub fn submit(&mut self, form: &RegisterForm) -> Option<SignUpRequest> {
        if self.phase == RegisterPhase::Completed {
            return None;
        }

        if let Err(errors) = validate_form(form) {
            debug!(
                email_invalid = errors.email.is_some(),
                password_invalid = errors.password.is_some(),
                "registration form rejected"
            );
            self.errors = Some(errors);
            return None;
        }
        self.errors = None;

        let Some(request) = SignUpRequest::from_form(form) else {
            debug!("registration aborted: empty field");
            return None;
        };

        self.phase = RegisterPhase::Submitting;
        debug!(email = %request.email, "dispatching sign-up");
        Some(request)
    }

    /// Applies the provider's answer to an in-flight submission.
    pub fn settle(&mut self, result: Result<SignUpResponse, AppError>) {
        match result {
            Ok(response) => {
                info!(
                    user_id = %response.user().id,
                    awaiting_confirmation = response.awaiting_confirmation(),
                    "account created"
                );
                self.registered = Some(response.user().clone());
                self.phase = RegisterPhase::Completed;
            }
            Err(err) => {
                error!(error = %err, "sign-up failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageView, RegisterFlow, RegisterPhase};
    use crate::app_lib::AppError;
    use crate::features::auth::client::SignUpClient;
    use crate::features::auth::types::{SignUpRequest, SignUpResponse, User};
    use crate::features::register::schema::{EMAIL_REQUIRED, PASSWORD_REQUIRED, RegisterForm};
    use std::cell::RefCell;

    /// In-memory provider that records every request and answers with a fixed result.
    struct ScriptedClient {
        calls: RefCell<Vec<SignUpRequest>>,
        result: Result<SignUpResponse, AppError>,
    }

    impl ScriptedClient {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result: Ok(SignUpResponse::User(User {
                    id: "u-1".to_string(),
                    email: Some("ana@example.com".to_string()),
                    confirmation_sent_at: Some("2026-10-17T09:00:00Z".to_string()),
                    created_at: None,
                })),
            }
        }

        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result: Err(AppError::Http {
                    status: 422,
                    message: "User already registered".to_string(),
                }),
            }
        }

        fn calls(&self) -> Vec<SignUpRequest> {
            self.calls.borrow().clone()
        }
    }

    impl SignUpClient for ScriptedClient {
        async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AppError> {
            self.calls.borrow_mut().push(request.clone());
            self.result.clone()
        }
    }

    fn form(email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Drives one submit the way the page does: validate, dispatch, settle.
    async fn submit_with(flow: &mut RegisterFlow, client: &ScriptedClient, form: &RegisterForm) {
        if let Some(request) = flow.submit(form) {
            assert_eq!(flow.view(), PageView::Loading);
            let result = client.sign_up(&request).await;
            flow.settle(result);
        }
    }

    #[tokio::test]
    async fn empty_fields_never_reach_the_provider() {
        let client = ScriptedClient::succeeding();
        let mut flow = RegisterFlow::default();

        submit_with(&mut flow, &client, &form("", "secreto")).await;
        submit_with(&mut flow, &client, &form("ana@example.com", "")).await;

        assert!(client.calls().is_empty());
        assert_eq!(flow.phase(), RegisterPhase::Editing);
        assert_eq!(flow.view(), PageView::Form);
    }

    #[tokio::test]
    async fn valid_submit_lowercases_email_and_keeps_password() {
        let client = ScriptedClient::succeeding();
        let mut flow = RegisterFlow::default();

        submit_with(&mut flow, &client, &form("Ana.Perez@Example.COM", "PaSs Word!")).await;

        assert_eq!(
            client.calls(),
            vec![SignUpRequest {
                email: "ana.perez@example.com".to_string(),
                password: "PaSs Word!".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn success_completes_and_hides_the_form() {
        let client = ScriptedClient::succeeding();
        let mut flow = RegisterFlow::default();

        submit_with(&mut flow, &client, &form("ana@example.com", "secreto")).await;

        assert_eq!(flow.phase(), RegisterPhase::Completed);
        assert_eq!(flow.view(), PageView::Confirmation);
        assert_eq!(flow.registered().map(|user| user.id.as_str()), Some("u-1"));
    }

    #[tokio::test]
    async fn failure_leaves_the_page_loading() {
        let client = ScriptedClient::failing();
        let mut flow = RegisterFlow::default();

        submit_with(&mut flow, &client, &form("ana@example.com", "secreto")).await;

        assert_eq!(client.calls().len(), 1);
        assert_eq!(flow.phase(), RegisterPhase::Submitting);
        assert_eq!(flow.view(), PageView::Loading);
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn validation_errors_show_one_message_email_first() {
        let mut flow = RegisterFlow::default();

        assert_eq!(flow.submit(&form("", "")), None);
        assert_eq!(flow.error_message(), Some(EMAIL_REQUIRED));

        assert_eq!(flow.submit(&form("ana@example.com", "")), None);
        assert_eq!(flow.error_message(), Some(PASSWORD_REQUIRED));
        assert_eq!(flow.phase(), RegisterPhase::Editing);
    }

    #[test]
    fn rejected_submits_keep_the_form_view() {
        let mut flow = RegisterFlow::default();
        let before = flow.view();

        flow.submit(&form("ana@example.com", ""));
        assert_eq!(flow.error_message(), Some(PASSWORD_REQUIRED));
        assert_eq!(flow.view(), before);

        flow.submit(&form("", ""));
        assert_eq!(flow.error_message(), Some(EMAIL_REQUIRED));
        assert_eq!(flow.view(), PageView::Form);
    }

    #[test]
    fn a_valid_submit_clears_previous_errors() {
        let mut flow = RegisterFlow::default();
        flow.submit(&form("", "secreto"));
        assert!(flow.error_message().is_some());

        let request = flow.submit(&form("ana@example.com", "secreto"));

        assert!(request.is_some());
        assert_eq!(flow.error_message(), None);
        assert_eq!(flow.phase(), RegisterPhase::Submitting);
    }

    #[test]
    fn second_submit_while_loading_is_not_rejected() {
        let mut flow = RegisterFlow::default();

        assert!(flow.submit(&form("ana@example.com", "secreto")).is_some());
        assert!(flow.submit(&form("ana@example.com", "secreto")).is_some());
    }

    #[test]
    fn completed_flow_ignores_further_submits() {
        let mut flow = RegisterFlow::default();
        flow.submit(&form("ana@example.com", "secreto"));
        flow.settle(ScriptedClient::succeeding().result);

        assert_eq!(flow.submit(&form("otra@example.com", "secreto")), None);
        assert_eq!(flow.phase(), RegisterPhase::Completed);
    }

    #[test]
    fn from_form_guards_empty_fields() {
        assert_eq!(SignUpRequest::from_form(&form("", "x")), None);
        assert_eq!(SignUpRequest::from_form(&form("a@b.co", "")), None);
        assert_eq!(
            SignUpRequest::from_form(&form("A@B.co", "x")).map(|request| request.email),
            Some("a@b.co".to_string())
        );
    }
}
