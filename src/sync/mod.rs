pub mod resync;
pub mod state;

pub use resync::{is_only_punctuation, Advance, Lookahead, Resynchronizer, Transition};
pub use state::PlaybackState;
