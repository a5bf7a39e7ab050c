//! Presentational pieces of the auth forms. They hold no state of their own;
//! values flow out through the signals routes pass in.

mod actions;
mod fields;
mod go_back;
mod hero;

pub(crate) use actions::FormActions;
pub(crate) use fields::{EmailInput, PassInput};
pub(crate) use go_back::GoBackLink;
pub(crate) use hero::HeroInfo;
