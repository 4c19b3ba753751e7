//! Card containers.
//!
//! Every card instance lives in exactly one container at a time and moves
//! between them by value:
//!
//! - `Deck`: draw pile and discard pile, with recycle-on-empty drawing
//! - `Hand`: one side's cards
//! - `TableStack`: this round's plays; only the top card is visible to rules

pub mod deck;
pub mod hand;
pub mod table;

pub use deck::Deck;
pub use hand::Hand;
pub use table::TableStack;
