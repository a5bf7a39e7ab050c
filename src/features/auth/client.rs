//! Client for the auth provider's sign-up endpoint. Requests are authorized with
//! the project's anon key; the password travels only in the JSON body and is
//! never logged.

use crate::{
    app_lib::{AppError, build_url_with_base, config::AppConfig, post_json_with_headers_response},
    features::auth::types::{SignUpRequest, SignUpResponse},
};
use url::Url;

/// GoTrue path for account creation.
const SIGNUP_PATH: &str = "/auth/v1/signup";

/// Account-creation call against an external auth provider.
#[allow(async_fn_in_trait)]
pub trait SignUpClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AppError>;
}

/// Sign-up client for Supabase/GoTrue-compatible providers.
#[derive(Clone, Debug)]
pub struct GoTrueClient {
    config: AppConfig,
}

impl GoTrueClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Builds the sign-up URL, including the confirmation redirect when configured.
    pub fn signup_url(&self) -> Result<String, AppError> {
        let base_url = self.config.auth_url.trim();
        if base_url.is_empty() {
            return Err(AppError::Config(
                "Auth service URL is not configured.".to_string(),
            ));
        }

        let mut url = Url::parse(&build_url_with_base(base_url, SIGNUP_PATH))
            .map_err(|err| AppError::Config(format!("Auth service URL is invalid: {err}")))?;

        if let Some(redirect_to) = self.config.redirect_to() {
            url.query_pairs_mut().append_pair("redirect_to", redirect_to);
        }

        Ok(url.into())
    }

    fn headers(&self) -> Result<Vec<(String, String)>, AppError> {
        let anon_key = self.config.anon_key.trim();
        if anon_key.is_empty() {
            return Err(AppError::Config(
                "Auth service key is not configured.".to_string(),
            ));
        }

        Ok(vec![
            ("apikey".to_string(), anon_key.to_string()),
            ("Authorization".to_string(), format!("Bearer {anon_key}")),
        ])
    }
}

impl SignUpClient for GoTrueClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AppError> {
        let url = self.signup_url()?;
        let headers = self.headers()?;
        post_json_with_headers_response(&url, request, &headers).await
    }
}
