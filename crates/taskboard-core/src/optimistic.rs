//! Optimistic Task State
//!
//! Owns the last authoritative snapshot and the append-only log of intents
//! submitted since. The rendered list is always re-derived with
//! [`reconcile`]; intents are never edited in place.
//!
//! Lifecycle of an intent:
//! - `submit` folds it into the view immediately.
//! - `confirm` marks it accepted by the server. It keeps folding until the
//!   next `resolve` brings a snapshot that already contains its effect.
//! - `reject` rolls it back and leaves a sticky error for the banner.

use crate::intent::Intent;
use crate::reconcile::{reconcile, ClockTempIds, ReplayTempIds, TempIdSource};
use crate::task::Task;

/// Handle of a submitted intent, used to settle it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Fetch state of the base list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Resolved,
    Failed(String),
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    intent: Intent,
    /// Placeholder id minted at submission for adds.
    temp_id: Option<String>,
    confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct OptimisticTasks<S = ClockTempIds> {
    phase: Phase,
    base: Vec<Task>,
    pending: Vec<Pending>,
    next_ticket: u64,
    ids: S,
    last_error: Option<String>,
    /// Set by the first successful fetch.
    loaded: bool,
}

impl OptimisticTasks<ClockTempIds> {
    pub fn new() -> Self {
        Self::with_ids(ClockTempIds::new())
    }
}

impl Default for OptimisticTasks<ClockTempIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TempIdSource> OptimisticTasks<S> {
    pub fn with_ids(ids: S) -> Self {
        Self {
            phase: Phase::Idle,
            base: Vec::new(),
            pending: Vec::new(),
            next_ticket: 0,
            ids,
            last_error: None,
            loaded: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True until the first snapshot arrives. Later re-fetches keep the
    /// current view on screen.
    pub fn is_loading(&self) -> bool {
        !self.loaded && matches!(self.phase, Phase::Idle | Phase::Fetching)
    }

    pub fn begin_fetch(&mut self) {
        self.phase = Phase::Fetching;
    }

    /// Installs a fresh snapshot and retires every confirmed intent.
    pub fn resolve(&mut self, base: Vec<Task>) {
        self.base = base;
        self.pending.retain(|entry| !entry.confirmed);
        self.phase = Phase::Resolved;
        self.loaded = true;
    }

    /// The fetch failed. A previous snapshot, if any, stays on screen.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.last_error = Some(message.clone());
        self.phase = Phase::Failed(message);
    }

    pub fn submit(&mut self, intent: Intent) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let temp_id = matches!(intent, Intent::Add(_)).then(|| self.ids.next_temp_id());
        self.pending.push(Pending {
            ticket,
            intent,
            temp_id,
            confirmed: false,
        });
        ticket
    }

    /// Returns false when the ticket is unknown (already rolled back or retired).
    pub fn confirm(&mut self, ticket: Ticket) -> bool {
        match self.pending.iter_mut().find(|entry| entry.ticket == ticket) {
            Some(entry) => {
                entry.confirmed = true;
                true
            }
            None => false,
        }
    }

    /// Rolls the intent back and records `message` for the error banner.
    pub fn reject(&mut self, ticket: Ticket, message: impl Into<String>) -> Option<Intent> {
        self.last_error = Some(message.into());
        let index = self.pending.iter().position(|entry| entry.ticket == ticket)?;
        Some(self.pending.remove(index).intent)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Intents the server has not answered yet.
    pub fn in_flight(&self) -> usize {
        self.pending.iter().filter(|entry| !entry.confirmed).count()
    }

    pub fn pending_intents(&self) -> impl Iterator<Item = &Intent> {
        self.pending.iter().map(|entry| &entry.intent)
    }

    /// The list to render. Stable across calls for the same state.
    pub fn view(&self) -> Vec<Task> {
        let minted = self
            .pending
            .iter()
            .filter_map(|entry| entry.temp_id.clone())
            .collect::<Vec<_>>();
        reconcile(
            &self.base,
            self.pending_intents(),
            &mut ReplayTempIds::new(minted),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::SequentialTempIds;
    use crate::task::{Status, TaskDraft, TaskPatch};

    fn state() -> OptimisticTasks<SequentialTempIds> {
        OptimisticTasks::with_ids(SequentialTempIds::new())
    }

    #[test]
    fn fetch_phases() {
        let mut tasks = state();
        assert_eq!(tasks.phase(), &Phase::Idle);
        assert!(tasks.is_loading());

        tasks.begin_fetch();
        assert_eq!(tasks.phase(), &Phase::Fetching);

        tasks.resolve(vec![Task::new("1", "A", Status::Todo)]);
        assert_eq!(tasks.phase(), &Phase::Resolved);
        assert!(!tasks.is_loading());

        tasks.resolve(Vec::new());
        tasks.begin_fetch();
        assert!(!tasks.is_loading(), "a re-fetch of an empty board is not a loading screen");
        tasks.resolve(vec![Task::new("1", "A", Status::Todo)]);

        tasks.begin_fetch();
        tasks.fail_fetch("network down");
        assert_eq!(tasks.phase(), &Phase::Failed("network down".into()));
        assert_eq!(tasks.view().len(), 1);
        assert_eq!(tasks.last_error(), Some("network down"));
    }

    #[test]
    fn view_is_stable_across_renders() {
        let mut tasks = state();
        tasks.resolve(Vec::new());
        tasks.submit(Intent::Add(TaskDraft::new("A")));
        assert_eq!(tasks.view(), tasks.view());
        assert_eq!(tasks.view()[0].id, "temp-1");
    }

    #[test]
    fn update_before_confirmation_then_refresh() {
        let mut tasks = state();
        let created = TaskDraft::new("A").into_task("srv-1");
        assert_eq!(created.status, Status::Todo);
        tasks.resolve(vec![created]);

        let ticket = tasks.submit(Intent::update("srv-1", TaskPatch::status(Status::Done)));
        let view = tasks.view();
        assert_eq!(view[0].status, Status::Done);
        assert!(view[0].is_pending);
        assert_eq!(tasks.in_flight(), 1);

        assert!(tasks.confirm(ticket));
        assert_eq!(tasks.in_flight(), 0);
        tasks.resolve(vec![Task::new("srv-1", "A", Status::Done)]);

        let view = tasks.view();
        assert_eq!(view[0].status, Status::Done);
        assert!(!view[0].is_pending);
        assert_eq!(tasks.pending_intents().count(), 0);
    }

    #[test]
    fn refresh_keeps_unconfirmed_intents() {
        let mut tasks = state();
        tasks.resolve(vec![Task::new("1", "A", Status::Todo), Task::new("2", "B", Status::Todo)]);

        let first = tasks.submit(Intent::delete("1"));
        let _second = tasks.submit(Intent::update("2", TaskPatch::status(Status::InProgress)));
        tasks.confirm(first);
        tasks.resolve(vec![Task::new("2", "B", Status::Todo)]);

        let view = tasks.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].status, Status::InProgress);
        assert!(view[0].is_pending);
    }

    #[test]
    fn rejected_intent_rolls_back_with_sticky_error() {
        let mut tasks = state();
        tasks.resolve(vec![Task::new("1", "A", Status::Todo)]);

        let ticket = tasks.submit(Intent::delete("1"));
        assert!(tasks.view().is_empty());

        let rolled_back = tasks.reject(ticket, "Task not found");
        assert_eq!(rolled_back, Some(Intent::delete("1")));
        assert_eq!(tasks.view().len(), 1);
        assert_eq!(tasks.last_error(), Some("Task not found"));

        tasks.resolve(vec![Task::new("1", "A", Status::Todo)]);
        assert_eq!(tasks.last_error(), Some("Task not found"));
        tasks.dismiss_error();
        assert_eq!(tasks.last_error(), None);
    }

    #[test]
    fn settling_unknown_ticket_is_harmless() {
        let mut tasks = state();
        let ticket = tasks.submit(Intent::delete("x"));
        tasks.reject(ticket, "boom");
        assert!(!tasks.confirm(ticket));
        assert_eq!(tasks.reject(ticket, "again"), None);
    }

    #[test]
    fn new_intents_never_wait_for_outstanding_ones() {
        let mut tasks = state();
        tasks.resolve(Vec::new());
        let a = tasks.submit(Intent::Add(TaskDraft::new("A")));
        let b = tasks.submit(Intent::Add(TaskDraft::new("B")));
        assert_ne!(a, b);
        assert_eq!(tasks.in_flight(), 2);

        tasks.confirm(b);
        let view = tasks.view();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].id, "temp-1");
        assert_eq!(view[1].id, "temp-2");
    }
}
