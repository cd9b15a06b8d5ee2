//! Watch mode: pick one live game, then poll it until it ends.

pub mod poll;
pub mod select;

pub use poll::{PollOutcome, PollSession, Tick, TickSink};
pub use select::{GameChoice, Selector, live_choices};
