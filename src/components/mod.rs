//! Shared UI components exported for routes.

pub(crate) mod forms;
pub(crate) mod ui;

pub(crate) use forms::{EmailInput, FormActions, GoBackLink, HeroInfo, PassInput};
pub(crate) use ui::{Button, Spinner};
