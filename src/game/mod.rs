//! Round state and the candidate validation pipeline
//!
//! `SessionController` owns the round; `ValidationEngine` decides each
//! candidate without touching state.

mod controller;
mod engine;
mod scoring;
mod session;

pub use controller::{RoundState, SessionController};
pub use engine::{MIN_CANDIDATE_LEN, ValidationEngine};
pub use scoring::score_delta;
pub use session::{RoundError, Session};
