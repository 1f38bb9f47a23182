//! # Notes panel state
//!
//! [`NotesPanel`] holds everything the notes modal shows: the active tab,
//! the owned and public lists and the optional edit draft. It never talks to
//! the network itself. Methods that need a request return what to send
//! ([`FetchTicket`], [`SaveRequest`], [`ShareRequest`]) and the component
//! feeds results back in.
//!
//! ## Stale responses
//!
//! Every fetch is issued with a [`FetchTicket`] carrying a generation number.
//! [`NotesPanel::apply_fetch`] drops a response whose ticket is older than the
//! newest one issued for the same tab, so a slow reply for an abandoned fetch
//! cannot overwrite fresher data.
//!
//! ## Delete
//!
//! [`NotesPanel::remove_note`] is optimistic and does not roll back: the row
//! disappears before the backend answers and stays gone even if the delete
//! fails, until the next re-fetch.
//!
//! ## Flows
//!
//! [`open_notes`], [`switch_tab`], [`save_draft`], [`create_note`],
//! [`delete_note`] and [`share_note`] are the request sequences the modal
//! spawns. They work on any [`PanelState`].

use api::{Note, NoteId, NoteInput, Notifier, NotesClient, NotesError, Role, ShareRequest, Transport};
use dioxus::prelude::*;
use serde_json::Value;

/// Which list the panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotesTab {
    #[default]
    Owned,
    Public,
}

impl NotesTab {
    pub const fn label(self) -> &'static str {
        match self {
            NotesTab::Owned => "My Notes",
            NotesTab::Public => "Public Notes",
        }
    }
}

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub tab: NotesTab,
    generation: u64,
}

/// What [`NotesPanel::apply_fetch`] did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The fetch failed; the previous list is kept.
    Failed,
    /// A newer fetch for the same tab was issued; the response is dropped.
    Stale,
}

/// An update the panel wants sent, with the draft it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub draft: Note,
}

impl SaveRequest {
    pub fn id(&self) -> &NoteId {
        &self.draft.id
    }

    pub fn input(&self) -> NoteInput {
        self.draft.to_input()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesPanel {
    active_tab: NotesTab,
    owned: Vec<Note>,
    public: Vec<Note>,
    draft: Option<Note>,
    generation: u64,
    latest_owned: u64,
    latest_public: u64,
}

impl NotesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> NotesTab {
        self.active_tab
    }

    pub fn owned_notes(&self) -> &[Note] {
        &self.owned
    }

    pub fn public_notes(&self) -> &[Note] {
        &self.public
    }

    /// The list for the active tab.
    pub fn notes(&self) -> &[Note] {
        match self.active_tab {
            NotesTab::Owned => &self.owned,
            NotesTab::Public => &self.public,
        }
    }

    /// True when the active tab should show the empty-state message.
    pub fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }

    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    fn issue(&mut self, tab: NotesTab) -> FetchTicket {
        self.generation += 1;
        match tab {
            NotesTab::Owned => self.latest_owned = self.generation,
            NotesTab::Public => self.latest_public = self.generation,
        }
        FetchTicket {
            tab,
            generation: self.generation,
        }
    }

    fn latest(&self, tab: NotesTab) -> u64 {
        match tab {
            NotesTab::Owned => self.latest_owned,
            NotesTab::Public => self.latest_public,
        }
    }

    /// Fetch for the active tab when the panel is first shown.
    pub fn open(&mut self) -> FetchTicket {
        self.issue(self.active_tab)
    }

    /// Switch tabs. Returns the fetch to run, or `None` when `tab` is
    /// already active.
    pub fn select_tab(&mut self, tab: NotesTab) -> Option<FetchTicket> {
        if tab == self.active_tab {
            return None;
        }
        self.active_tab = tab;
        Some(self.issue(tab))
    }

    /// Re-fetch owned notes after a create or a save.
    pub fn refresh_owned(&mut self) -> FetchTicket {
        self.issue(NotesTab::Owned)
    }

    /// Store the result of a fetch issued with `ticket`.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Note>, NotesError>,
    ) -> FetchOutcome {
        if ticket.generation != self.latest(ticket.tab) {
            tracing::debug!("dropping stale {:?} response", ticket.tab);
            return FetchOutcome::Stale;
        }
        let notes = match result {
            Ok(notes) => notes,
            // The client has already notified the user.
            Err(_) => return FetchOutcome::Failed,
        };
        match ticket.tab {
            NotesTab::Owned => self.owned = notes,
            NotesTab::Public => self.public = notes,
        }
        FetchOutcome::Applied
    }

    pub fn begin_edit(&mut self, note: &Note) {
        self.draft = Some(note.clone());
    }

    pub fn edit_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = title.into();
        }
    }

    pub fn edit_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = content.into();
        }
    }

    pub fn edit_visibility(&mut self, is_public: bool) {
        if let Some(draft) = self.draft.as_mut() {
            draft.is_public = is_public;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Take the draft for saving. A draft without an id stays put and
    /// nothing is returned.
    pub fn take_save(&mut self) -> Option<SaveRequest> {
        if self.draft.as_ref().map_or(true, |draft| draft.id.is_empty()) {
            return None;
        }
        self.draft.take().map(|draft| SaveRequest { draft })
    }

    /// Put a draft back after its save failed.
    pub fn restore_draft(&mut self, request: SaveRequest) {
        if self.draft.is_none() {
            self.draft = Some(request.draft);
        }
    }

    /// Optimistically drop the note with `id` from the owned list.
    pub fn remove_note(&mut self, id: &NoteId) -> Vec<Note> {
        let (removed, kept): (Vec<Note>, Vec<Note>) = std::mem::take(&mut self.owned)
            .into_iter()
            .partition(|note| &note.id == id);
        self.owned = kept;
        if self.draft.as_ref().is_some_and(|draft| &draft.id == id) {
            self.draft = None;
        }
        removed
    }
}

/// Input of the share dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShareForm {
    pub user_id: String,
    pub role: String,
}

impl ShareForm {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// Both fields are required and the role must be `read` or `edit`.
    pub fn to_request(&self) -> Option<ShareRequest> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            return None;
        }
        let role: Role = self.role.parse().ok()?;
        Some(ShareRequest::new(user_id, role))
    }
}

/// Build the create payload from the new-note form. A blank title gives
/// nothing to send.
pub fn new_note_input(
    title: &str,
    content: &str,
    is_public: bool,
    course_id: Option<&str>,
) -> Option<NoteInput> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let input = NoteInput::new(title, content).public(is_public);
    Some(match course_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(course_id) => input.with_course(course_id),
        None => input,
    })
}

/// Run the fetch for `tab`.
pub async fn fetch_tab<T: Transport, N: Notifier>(
    client: &NotesClient<T, N>,
    tab: NotesTab,
) -> Result<Vec<Note>, NotesError> {
    match tab {
        NotesTab::Owned => client.my_notes().await,
        NotesTab::Public => client.public_notes().await,
    }
}

/// Short-lived mutable access to a [`NotesPanel`].
///
/// The async flows below never hold the borrow across an `.await`, so the
/// same code drives a plain panel in tests and a `Signal` in the modal.
pub trait PanelState {
    fn update<R>(&mut self, f: impl FnOnce(&mut NotesPanel) -> R) -> R;
}

impl PanelState for NotesPanel {
    fn update<R>(&mut self, f: impl FnOnce(&mut NotesPanel) -> R) -> R {
        f(self)
    }
}

impl PanelState for Signal<NotesPanel> {
    fn update<R>(&mut self, f: impl FnOnce(&mut NotesPanel) -> R) -> R {
        f(&mut *self.write())
    }
}

/// What [`save_draft`] ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No draft, or a draft without an id. Nothing was sent.
    Skipped,
    /// The update went through and owned notes were re-fetched.
    Saved(FetchOutcome),
    /// The update failed and the draft is back in the editor.
    Restored,
}

/// Run `ticket`'s fetch and store the result.
pub async fn run_fetch<P, T, N>(
    panel: &mut P,
    client: &NotesClient<T, N>,
    ticket: FetchTicket,
) -> FetchOutcome
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    let result = fetch_tab(client, ticket.tab).await;
    panel.update(|p| p.apply_fetch(ticket, result))
}

/// Load the initially active tab.
pub async fn open_notes<P, T, N>(panel: &mut P, client: &NotesClient<T, N>) -> FetchOutcome
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    let ticket = panel.update(NotesPanel::open);
    run_fetch(panel, client, ticket).await
}

/// Switch to `tab` and load it. `None` when `tab` was already active.
pub async fn switch_tab<P, T, N>(
    panel: &mut P,
    client: &NotesClient<T, N>,
    tab: NotesTab,
) -> Option<FetchOutcome>
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    let ticket = panel.update(|p| p.select_tab(tab))?;
    Some(run_fetch(panel, client, ticket).await)
}

/// Send the draft as an update, then re-fetch owned notes.
///
/// An update whose reply cannot be decoded was still accepted by the server
/// and counts as saved.
pub async fn save_draft<P, T, N>(panel: &mut P, client: &NotesClient<T, N>) -> SaveOutcome
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    let Some(request) = panel.update(NotesPanel::take_save) else {
        return SaveOutcome::Skipped;
    };
    match client.update_note(request.id(), &request.input()).await {
        Ok(_) | Err(NotesError::Decode(_)) => {
            let ticket = panel.update(NotesPanel::refresh_owned);
            SaveOutcome::Saved(run_fetch(panel, client, ticket).await)
        }
        Err(_) => {
            panel.update(|p| p.restore_draft(request));
            SaveOutcome::Restored
        }
    }
}

/// Create a note and re-fetch owned notes. Returns whether the server took it.
pub async fn create_note<P, T, N>(
    panel: &mut P,
    client: &NotesClient<T, N>,
    input: &NoteInput,
) -> bool
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    match client.create_note(input).await {
        Ok(_) | Err(NotesError::Decode(_)) => {
            let ticket = panel.update(NotesPanel::refresh_owned);
            run_fetch(panel, client, ticket).await;
            true
        }
        Err(_) => false,
    }
}

/// Drop the note from the owned list, then ask the backend to delete it.
///
/// The row is not restored if the delete fails.
pub async fn delete_note<P, T, N>(
    panel: &mut P,
    client: &NotesClient<T, N>,
    id: &NoteId,
) -> Result<Value, NotesError>
where
    P: PanelState,
    T: Transport,
    N: Notifier,
{
    panel.update(|p| p.remove_note(id));
    client.delete_note(id).await
}

/// Share the note if the form is complete. `None` means nothing was sent.
pub async fn share_note<T: Transport, N: Notifier>(
    client: &NotesClient<T, N>,
    id: &NoteId,
    form: &ShareForm,
) -> Option<Result<Value, NotesError>> {
    let request = form.to_request()?;
    Some(client.share_note(id, &request).await)
}
