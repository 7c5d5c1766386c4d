//! Presenter state machine.
//!
//! `SearchSession` holds every piece of UI state explicitly: the text field,
//! the inline field message, the main view, the last successful username and
//! the search generation. Front-ends feed it user intents and resolver
//! outcomes and render whatever it holds.
//!
//! ```text
//! Idle ──submit──▶ Searching ──complete──▶ Results | EmptyResults
//!                     ▲   │                         │
//!                     │   └──fail / cancel──▶ previous view
//!                     └──────── submit / refresh ───┘
//! ```
//!
//! A failed search leaves whatever was on screen in place; the failure is
//! reported through [`SearchSession::last_failure`], the field message and
//! the returned notification.

use tracing::debug;

use super::resolver::{Resolution, ResolveResult};
use crate::domain::{AppInfo, OutfitRecord, Username};

/// Inline message shown under the text field when the lookup finds nobody.
pub const NOT_FOUND_MESSAGE: &str = "This user does not exist.";
/// Notification for any transient failure.
pub const TRANSIENT_ERROR_NOTICE: &str = "An error occurred, please try again later.";
/// Notification after copying an outfit ID.
pub const ID_COPIED_NOTICE: &str = "Outfit ID copied to clipboard.";
/// Main view text before the first search.
pub const IDLE_PLACEHOLDER: &str = "Enter a Roblox username and search to get started";
/// Main view text for a user without editable outfits.
pub const EMPTY_PLACEHOLDER: &str = "This user does not have any outfits";

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Searching,
    Results(Vec<OutfitRecord>),
    EmptyResults,
}

impl ViewState {
    pub const fn is_searching(&self) -> bool {
        matches!(self, Self::Searching)
    }
}

/// Why the most recent search produced no new view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    NotFound,
    Transient,
}

/// A short, non-blocking message (a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handle for one issued search.
///
/// Carries the username to resolve and the generation its outcome must match
/// to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    username: Username,
}

impl SearchTicket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn username(&self) -> &Username {
        &self.username
    }
}

/// Effect of handing an outcome to [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// State was updated; show the notification if there is one.
    Applied(Option<Notification>),
    /// The outcome belonged to a superseded or cancelled search.
    Stale,
}

/// Gesture result on a result tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileAction {
    /// Tap: copy this ID, then show [`ID_COPIED_NOTICE`].
    CopyId(u64),
    /// Long press: show the outfit name.
    ShowName(Notification),
}

/// Explicit presenter state.
#[derive(Debug, Default)]
pub struct SearchSession {
    input: String,
    field_message: Option<String>,
    view: ViewState,
    resume_view: Option<ViewState>,
    last_username: Option<Username>,
    last_failure: Option<SearchFailure>,
    generation: u64,
    info_open: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message displayed under the text field, if any.
    pub fn field_message(&self) -> Option<&str> {
        self.field_message.as_deref()
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn last_username(&self) -> Option<&Username> {
        self.last_username.as_ref()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Failure of the latest completed search, cleared when a new one starts.
    pub const fn last_failure(&self) -> Option<SearchFailure> {
        self.last_failure
    }

    pub const fn is_searching(&self) -> bool {
        self.view.is_searching()
    }

    /// Refresh needs a previous successful search.
    pub const fn can_refresh(&self) -> bool {
        self.last_username.is_some()
    }

    /// Replace the text field contents. Editing clears the field message.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.field_message = None;
    }

    /// Submit the text field.
    ///
    /// Returns `None` without side effects while a search is running or a
    /// field message is shown. Blank input sets the validation message and
    /// also returns `None`.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        if self.is_blocked() {
            return None;
        }

        match Username::parse(&self.input) {
            Ok(username) => Some(self.begin(username)),
            Err(err) => {
                self.field_message = Some(err.to_string());
                None
            }
        }
    }

    /// Search the last successful username again.
    pub fn refresh(&mut self) -> Option<SearchTicket> {
        if self.is_blocked() {
            return None;
        }
        let username = self.last_username.clone()?;
        Some(self.begin(username))
    }

    /// Apply a resolver outcome for `ticket`.
    pub fn complete(&mut self, ticket: &SearchTicket, outcome: ResolveResult) -> Completion {
        if ticket.generation != self.generation || !self.is_searching() {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search outcome"
            );
            return Completion::Stale;
        }
        let previous = self.resume_view.take().unwrap_or_default();

        let notification = match outcome {
            Ok(Resolution::Outfits(records)) => {
                self.last_username = Some(ticket.username.clone());
                self.view = ViewState::Results(records);
                None
            }
            Ok(Resolution::Empty) => {
                self.last_username = Some(ticket.username.clone());
                self.view = ViewState::EmptyResults;
                None
            }
            Ok(Resolution::NotFound) => {
                self.field_message = Some(NOT_FOUND_MESSAGE.to_string());
                self.last_failure = Some(SearchFailure::NotFound);
                self.view = previous;
                None
            }
            Err(err) => {
                tracing::error!(username = %ticket.username, error = %err, "search failed");
                self.last_failure = Some(SearchFailure::Transient);
                self.view = previous;
                Some(Notification::new(TRANSIENT_ERROR_NOTICE))
            }
        };

        Completion::Applied(notification)
    }

    /// Abandon the running search; its outcome will be stale.
    ///
    /// Returns whether there was anything to cancel.
    pub fn cancel(&mut self) -> bool {
        if !self.is_searching() {
            return false;
        }
        self.generation += 1;
        self.view = self.resume_view.take().unwrap_or_default();
        true
    }

    /// Records currently on screen.
    pub fn records(&self) -> &[OutfitRecord] {
        match &self.view {
            ViewState::Results(records) => records,
            _ => &[],
        }
    }

    /// Main view text when no grid is shown.
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self.view {
            ViewState::Idle => Some(IDLE_PLACEHOLDER),
            ViewState::EmptyResults => Some(EMPTY_PLACEHOLDER),
            ViewState::Searching | ViewState::Results(_) => None,
        }
    }

    pub fn tap_tile(&self, index: usize) -> Option<TileAction> {
        self.records()
            .get(index)
            .map(|record| TileAction::CopyId(record.id))
    }

    pub fn long_press_tile(&self, index: usize) -> Option<TileAction> {
        self.records()
            .get(index)
            .map(|record| TileAction::ShowName(Notification::new(record.name.clone())))
    }

    pub const fn open_info(&mut self) {
        self.info_open = true;
    }

    pub const fn close_info(&mut self) {
        self.info_open = false;
    }

    pub const fn is_info_open(&self) -> bool {
        self.info_open
    }

    pub const fn app_info(&self) -> AppInfo {
        AppInfo::current()
    }

    const fn is_blocked(&self) -> bool {
        self.is_searching() || self.field_message.is_some()
    }

    fn begin(&mut self, username: Username) -> SearchTicket {
        self.generation += 1;
        let previous = std::mem::replace(&mut self.view, ViewState::Searching);
        self.resume_view = Some(previous);
        self.last_failure = None;
        debug!(generation = self.generation, username = %username, "search started");
        SearchTicket {
            generation: self.generation,
            username,
        }
    }
}
