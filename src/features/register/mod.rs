//! Registration feature: the client-side schema and the page state machine.
//! Routes render from `RegisterFlow` and send whatever request it hands back
//! through a `SignUpClient`.

pub mod flow;
pub mod schema;

pub use flow::{PageView, RegisterFlow, RegisterPhase};
pub use schema::{FieldErrors, RegisterForm, validate_form};
