//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata.
//!
//! ## Registration flow
//!
//! 1. **Validate:** The form is checked against the registration schema before
//!    anything leaves the browser.
//! 2. **Sign up:** The client POSTs `{ email, password }` to the provider's
//!    `/auth/v1/signup` with the project's anon key.
//! 3. **Confirm:** The provider emails a confirmation link; the page switches to
//!    the confirmation prompt.
//!
//! Centralizing these helpers keeps network behavior consistent across features.
//! They do not store secrets, but callers must still avoid logging passwords.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod logging;

pub use api::{build_url_with_base, post_json_with_headers_response};
pub use errors::AppError;
