//! Core services.
//!
//! - `resolver` - username → user → outfits → thumbnails, as one sequential task
//! - `poll` - bounds and pacing for the thumbnail polling loop
//! - `session` - explicit presenter state: guards, generations, tile gestures

mod poll;
mod resolver;
mod session;

pub use poll::PollPolicy;
pub use resolver::{
    OutcomeKind, OutfitResolver, Resolution, ResolveError, ResolveResult, Stage,
};
pub use session::{
    Completion, EMPTY_PLACEHOLDER, ID_COPIED_NOTICE, IDLE_PLACEHOLDER, NOT_FOUND_MESSAGE,
    Notification, SearchFailure, SearchSession, SearchTicket, TRANSIENT_ERROR_NOTICE, TileAction,
    ViewState,
};
