//! Succession rule: which card may follow the current table top.
//!
//! Tiers cycle 1 → 2 → Black → White → 1. A tier-2 card following a
//! tier-1 card must additionally be a color that the tier-1 color helps
//! make (Red → Orange/Purple, Blue → Green/Purple, Yellow → Orange/Green).

use crate::cards::{CardTemplate, Color, Tier};

/// May `next` be played on top of `prev`?
///
/// An empty table (`prev == None`) accepts anything.
///
/// ```
/// use tierstack::cards::{CardCatalog, Color};
/// use tierstack::rules::can_play_after;
///
/// let catalog = CardCatalog::standard();
/// let red = catalog.template(Color::Red);
/// let orange = catalog.template(Color::Orange);
/// let green = catalog.template(Color::Green);
///
/// assert!(can_play_after(None, red));
/// assert!(can_play_after(Some(red), orange));
/// assert!(!can_play_after(Some(red), green));
/// ```
#[must_use]
pub fn can_play_after(prev: Option<&CardTemplate>, next: &CardTemplate) -> bool {
    let Some(prev) = prev else {
        return true;
    };

    match prev.tier {
        Tier::One => next.tier == Tier::Two && feeds_into(prev.color, next.color),
        Tier::Two => next.tier == Tier::Black,
        Tier::Black => next.tier == Tier::White,
        Tier::White => next.tier == Tier::One,
    }
}

/// Is `secondary` a tier-2 color made partly from `primary`?
#[must_use]
pub fn feeds_into(primary: Color, secondary: Color) -> bool {
    matches!(
        (primary, secondary),
        (Color::Red, Color::Orange | Color::Purple)
            | (Color::Blue, Color::Green | Color::Purple)
            | (Color::Yellow, Color::Orange | Color::Green)
    )
}
