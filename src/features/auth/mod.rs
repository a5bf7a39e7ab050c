//! Auth feature module covering the provider's sign-up call. It keeps provider
//! details out of the UI and must stay aligned with the provider's wire format.
//! Request bodies carry passwords and must never be logged.

pub mod client;
pub mod types;

pub use client::{GoTrueClient, SignUpClient};
