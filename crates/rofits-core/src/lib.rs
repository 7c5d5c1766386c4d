#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AppInfo, OutfitRecord, Username, ValidationError};
pub use ports::{
    OutfitSummary, RobloxApiPort, RobloxPortError, RobloxPortResult, ThumbnailInfo,
    ThumbnailState, UserSummary,
};
pub use services::{
    Completion, EMPTY_PLACEHOLDER, ID_COPIED_NOTICE, IDLE_PLACEHOLDER, NOT_FOUND_MESSAGE,
    Notification, OutcomeKind, OutfitResolver, PollPolicy, Resolution, ResolveError,
    ResolveResult, SearchFailure, SearchSession, SearchTicket, Stage, TRANSIENT_ERROR_NOTICE,
    TileAction, ViewState,
};
