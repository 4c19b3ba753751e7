//! Card rules: succession and combination.
//!
//! Both are pure functions of card templates; the coordinator calls them
//! but they never touch match state. `Forge` is the one stateful helper,
//! since a fused card needs a fresh id.

pub mod combine;
pub mod validator;

pub use combine::{resolve_combination, CombineError, Forge};
pub use validator::{can_play_after, feeds_into};
