//! Interactive search shell.
//!
//! A single event loop owns the [`SearchSession`]. Typed lines arrive from
//! the reader thread, and every search runs as its own task that reports
//! back through the same channel, so the session is only ever touched from
//! one place. Cancelling aborts the search task; any outcome that still
//! slips through is dropped by the session's generation check.

pub mod command;
mod input;

use std::io::{self, Write};

use anyhow::Result;
use rofits_core::{
    Completion, ID_COPIED_NOTICE, IDLE_PLACEHOLDER, Notification, OutfitResolver, ResolveResult,
    SearchFailure, SearchSession, SearchTicket, TileAction, ViewState,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::bootstrap::CliContext;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::error::CliError;
use crate::presentation::{
    render_field_message, render_grid, render_info, render_notification,
};

pub use command::{HELP, ShellCommand};

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum ShellEvent {
    /// A line typed at the prompt.
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Ctrl-D or closed stdin.
    Eof,
    /// A search task finished.
    Resolved {
        ticket: SearchTicket,
        outcome: ResolveResult,
    },
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Shell state: the session plus the effects it drives.
pub struct Shell<C, W> {
    session: SearchSession,
    resolver: OutfitResolver,
    events: mpsc::Sender<ShellEvent>,
    search: Option<JoinHandle<()>>,
    clipboard: C,
    out: W,
}

impl<C, W> Drop for Shell<C, W> {
    fn drop(&mut self) {
        if let Some(search) = self.search.take() {
            search.abort();
        }
    }
}

impl<C: ClipboardSink, W: Write> Shell<C, W> {
    pub fn new(
        resolver: OutfitResolver,
        events: mpsc::Sender<ShellEvent>,
        clipboard: C,
        out: W,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            resolver,
            events,
            search: None,
            clipboard,
            out,
        }
    }

    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Print the banner and the idle placeholder.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.session.app_info().title())?;
        writeln!(self.out, "{IDLE_PLACEHOLDER}")?;
        writeln!(self.out, "Type `help` for commands.")
    }

    /// React to one event. Must be called from within a Tokio runtime.
    pub fn handle(&mut self, event: ShellEvent) -> Result<Flow, CliError> {
        match event {
            ShellEvent::Line(line) => return self.handle_command(ShellCommand::parse(&line)),
            ShellEvent::Interrupted => {
                if !self.cancel_search()? {
                    writeln!(self.out, "Type `quit` to leave.")?;
                }
            }
            ShellEvent::Eof => return Ok(Flow::Quit),
            ShellEvent::Resolved { ticket, outcome } => {
                match self.session.complete(&ticket, outcome) {
                    Completion::Applied(notification) => {
                        self.search = None;
                        match self.session.last_failure() {
                            None => self.render_view()?,
                            Some(SearchFailure::NotFound) => {
                                if let Some(message) = self.session.field_message() {
                                    render_field_message(&mut self.out, message)?;
                                }
                            }
                            Some(SearchFailure::Transient) => {}
                        }
                        if let Some(notification) = notification {
                            render_notification(&mut self.out, &notification)?;
                        }
                    }
                    Completion::Stale => {}
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_command(&mut self, command: ShellCommand) -> Result<Flow, CliError> {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Search(text) => {
                self.session.edit_input(text);
                self.submit()?;
            }
            ShellCommand::Refresh => self.refresh()?,
            ShellCommand::Copy(n) => self.copy_tile(n)?,
            ShellCommand::Name(n) => match self.session.long_press_tile(n - 1) {
                Some(TileAction::ShowName(notification)) => {
                    render_notification(&mut self.out, &notification)?;
                }
                _ => self.no_such_tile(n)?,
            },
            ShellCommand::Cancel => {
                if !self.cancel_search()? {
                    writeln!(self.out, "No search is running.")?;
                }
            }
            ShellCommand::Show => self.render_view()?,
            ShellCommand::Info => {
                self.session.open_info();
                render_info(&mut self.out, &self.session.app_info())?;
                writeln!(self.out, "[ OK ] Type `close` to dismiss.")?;
            }
            ShellCommand::Close => self.session.close_info(),
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Invalid(message) => writeln!(self.out, "{message}")?,
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self) -> Result<(), CliError> {
        if self.session.is_searching() {
            return self.busy();
        }
        match self.session.submit() {
            Some(ticket) => self.start(ticket)?,
            None => {
                if let Some(message) = self.session.field_message() {
                    render_field_message(&mut self.out, message)?;
                }
            }
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), CliError> {
        if self.session.is_searching() {
            return self.busy();
        }
        if let Some(ticket) = self.session.refresh() {
            return self.start(ticket);
        }
        match self.session.field_message() {
            Some(message) => render_field_message(&mut self.out, message)?,
            None => writeln!(self.out, "Nothing to refresh yet. Search for a username first.")?,
        }
        Ok(())
    }

    fn start(&mut self, ticket: SearchTicket) -> Result<(), CliError> {
        writeln!(self.out, "Searching outfits for {}...", ticket.username())?;

        let resolver = self.resolver.clone();
        let events = self.events.clone();
        let search = tokio::spawn(async move {
            let outcome = resolver.resolve(ticket.username()).await;
            if events
                .send(ShellEvent::Resolved { ticket, outcome })
                .await
                .is_err()
            {
                debug!("shell closed before search finished");
            }
        });
        if let Some(previous) = self.search.replace(search) {
            previous.abort();
        }
        Ok(())
    }

    /// Abandon the running search, stopping its requests.
    ///
    /// Returns whether there was anything to cancel.
    fn cancel_search(&mut self) -> io::Result<bool> {
        if !self.session.cancel() {
            return Ok(false);
        }
        if let Some(search) = self.search.take() {
            search.abort();
        }
        writeln!(self.out, "Search cancelled.")?;
        self.render_view()?;
        Ok(true)
    }

    fn copy_tile(&mut self, n: usize) -> Result<(), CliError> {
        let Some(TileAction::CopyId(id)) = self.session.tap_tile(n - 1) else {
            return self.no_such_tile(n);
        };

        let notice = match self.clipboard.copy_text(&id.to_string()) {
            Ok(()) => Notification::new(ID_COPIED_NOTICE),
            Err(e) => {
                warn!(outfit_id = id, error = %e, "clipboard write failed");
                Notification::new(format!("Outfit ID {id} (clipboard unavailable: {e})"))
            }
        };
        render_notification(&mut self.out, &notice)?;
        Ok(())
    }

    fn render_view(&mut self) -> io::Result<()> {
        match self.session.view() {
            ViewState::Searching => writeln!(self.out, "Searching..."),
            ViewState::Results(records) => {
                if let Some(username) = self.session.last_username() {
                    writeln!(self.out, "{} outfit(s) for {username}:", records.len())?;
                }
                render_grid(&mut self.out, records)
            }
            ViewState::Idle | ViewState::EmptyResults => {
                match self.session.placeholder() {
                    Some(text) => writeln!(self.out, "{text}"),
                    None => Ok(()),
                }
            }
        }
    }

    fn busy(&mut self) -> Result<(), CliError> {
        writeln!(
            self.out,
            "A search is already running. Type `cancel` or press Ctrl-C to stop it."
        )?;
        Ok(())
    }

    fn no_such_tile(&mut self, n: usize) -> Result<(), CliError> {
        let shown = self.session.records().len();
        if shown == 0 {
            writeln!(self.out, "No outfits on screen.")?;
        } else {
            writeln!(self.out, "No outfit #{n}; pick 1 to {shown}.")?;
        }
        Ok(())
    }
}

/// Run the interactive shell until `quit` or end of input.
pub async fn run(ctx: &CliContext) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(32);
    input::spawn_reader(tx.clone())?;

    let mut shell = Shell::new(
        ctx.resolver().clone(),
        tx,
        SystemClipboard::new(),
        io::stdout(),
    );
    shell.greet()?;

    while let Some(event) = rx.recv().await {
        if shell.handle(event)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
