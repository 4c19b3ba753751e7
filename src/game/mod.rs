//! Match flow: turn order, round settlement, scoring, and notifications.
//!
//! ## Key Types
//!
//! - `TurnCoordinator`: owns every card container and applies intents
//! - `CoordinatorBuilder`: wires config, RNG, clock and AI together
//! - `Phase`, `RoundState`: where the match is and who is still in the round
//! - `ThinkTimer`, `Clock`: the AI's non-blocking delay
//! - `GameEvent`, `EventBus`: what the presentation layer gets told

pub mod builder;
pub mod coordinator;
pub mod events;
pub mod round;
pub mod score;
pub mod timer;

pub use builder::CoordinatorBuilder;
pub use coordinator::TurnCoordinator;
pub use events::{EventBus, GameEvent};
pub use round::{Phase, RoundOutcome, RoundState, SideStatus};
pub use score::ScoreBoard;
pub use timer::{Clock, ManualClock, PendingTurn, SystemClock, ThinkTimer};
