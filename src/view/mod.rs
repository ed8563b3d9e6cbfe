//! View state and transitions
//!
//! The UI is a small model-view-update loop: handlers translate a form post
//! into a [`Msg`], [`ViewState::update`] produces the next state, and the
//! HTML module renders whatever state results.

mod state;
mod update;

pub use state::{Flash, FlashLevel, Screen, ViewState};
pub use update::Msg;
