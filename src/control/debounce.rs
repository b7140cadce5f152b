//! Edge detection for the push-buttons.
//!
//! No software timer: the buttons sit behind pull-up resistors that
//! handle electrical debouncing, so a single previous-sample
//! comparison is enough to turn a held level into exactly one event.

/// True iff the sampled level moved from released to pressed between
/// two consecutive ticks (a rising edge of the logical "pressed"
/// level).
pub fn pressed(current: bool, previous: bool) -> bool {
    current && !previous
}
